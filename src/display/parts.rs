//! Typed text fragments.

use std::{fmt, ops::Range};

use strum::{Display, EnumIter};

use crate::symbols::{SymbolId, SymbolRegistry, TypeKind};

/// Classification of a [`DisplayPart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DisplayPartKind {
    /// Language keyword
    Keyword,
    /// Punctuation such as `(`, `,` or `;`
    Punctuation,
    /// Operator token
    Operator,
    /// A single space
    Space,
    /// A line break
    LineBreak,
    /// Indentation at the start of a line
    Indentation,
    /// Free text
    Text,
    /// Name of a namespace
    NamespaceName,
    /// Name of a class
    ClassName,
    /// Name of a struct
    StructName,
    /// Name of an interface
    InterfaceName,
    /// Name of an enum
    EnumName,
    /// Name of a delegate
    DelegateName,
    /// Name of a type parameter
    TypeParameterName,
    /// Name of a method
    MethodName,
    /// Name of an extension method
    ExtensionMethodName,
    /// Name of a property
    PropertyName,
    /// Name of a field
    FieldName,
    /// Name of an event
    EventName,
    /// Name of a parameter
    ParameterName,
    /// Name of an enum member
    EnumMemberName,
    /// Name of a constant
    ConstantName,
    /// Numeric literal
    NumericLiteral,
    /// Character or string literal
    StringLiteral,
    /// Name of an assembly
    AssemblyName,
}

impl DisplayPartKind {
    /// Returns the name kind used for a type of the given kind
    #[must_use]
    pub fn for_type(kind: TypeKind) -> Self {
        match kind {
            TypeKind::Class => DisplayPartKind::ClassName,
            TypeKind::Struct => DisplayPartKind::StructName,
            TypeKind::Interface => DisplayPartKind::InterfaceName,
            TypeKind::Enum => DisplayPartKind::EnumName,
            TypeKind::Delegate => DisplayPartKind::DelegateName,
        }
    }

    /// Returns `true` for the kinds that name a type
    #[must_use]
    pub fn is_type_name(&self) -> bool {
        matches!(
            self,
            DisplayPartKind::ClassName
                | DisplayPartKind::StructName
                | DisplayPartKind::InterfaceName
                | DisplayPartKind::EnumName
                | DisplayPartKind::DelegateName
        )
    }
}

/// One fragment of rendered declaration text
///
/// Name fragments keep the symbol they were produced from, which lets writers turn them into
/// links without parsing text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayPart {
    /// Classification
    pub kind: DisplayPartKind,
    /// Originating symbol of name fragments
    pub symbol: Option<SymbolId>,
    /// Literal text
    pub text: String,
}

impl DisplayPart {
    /// Creates a fragment without a symbol
    #[must_use]
    pub fn new(kind: DisplayPartKind, text: impl Into<String>) -> Self {
        DisplayPart {
            kind,
            symbol: None,
            text: text.into(),
        }
    }

    /// Creates a fragment that names `symbol`
    #[must_use]
    pub fn with_symbol(kind: DisplayPartKind, symbol: SymbolId, text: impl Into<String>) -> Self {
        DisplayPart {
            kind,
            symbol: Some(symbol),
            text: text.into(),
        }
    }

    /// Returns `true` if this is the keyword `text`
    #[must_use]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.kind == DisplayPartKind::Keyword && self.text == text
    }

    /// Returns `true` if this is the punctuation `text`
    #[must_use]
    pub fn is_punctuation(&self, text: &str) -> bool {
        self.kind == DisplayPartKind::Punctuation && self.text == text
    }
}

impl fmt::Display for DisplayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An ordered list of [`DisplayPart`]s
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisplayParts(Vec<DisplayPart>);

impl DisplayParts {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        DisplayParts(Vec::new())
    }

    /// Appends a fragment
    pub fn push(&mut self, part: DisplayPart) {
        self.0.push(part);
    }

    /// Appends a keyword
    pub fn keyword(&mut self, text: &str) {
        self.push(DisplayPart::new(DisplayPartKind::Keyword, text));
    }

    /// Appends a keyword followed by a space
    pub fn keyword_space(&mut self, text: &str) {
        self.keyword(text);
        self.space();
    }

    /// Appends punctuation
    pub fn punctuation(&mut self, text: &str) {
        self.push(DisplayPart::new(DisplayPartKind::Punctuation, text));
    }

    /// Appends an operator token
    pub fn operator(&mut self, text: &str) {
        self.push(DisplayPart::new(DisplayPartKind::Operator, text));
    }

    /// Appends a single space
    pub fn space(&mut self) {
        self.push(DisplayPart::new(DisplayPartKind::Space, " "));
    }

    /// Appends a line break
    pub fn line_break(&mut self) {
        self.push(DisplayPart::new(DisplayPartKind::LineBreak, "\n"));
    }

    /// Appends indentation
    pub fn indentation(&mut self, text: &str) {
        self.push(DisplayPart::new(DisplayPartKind::Indentation, text));
    }

    /// Appends free text
    pub fn text(&mut self, text: &str) {
        self.push(DisplayPart::new(DisplayPartKind::Text, text));
    }

    /// Appends a fragment naming `symbol`
    pub fn symbol(&mut self, kind: DisplayPartKind, symbol: SymbolId, text: &str) {
        self.push(DisplayPart::with_symbol(kind, symbol, text));
    }

    /// Appends all fragments of `other`
    pub fn append(&mut self, other: DisplayParts) {
        self.0.extend(other.0);
    }

    /// Appends `,` and a space
    pub fn comma_space(&mut self) {
        self.punctuation(",");
        self.space();
    }

    /// Returns the number of fragments
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no fragments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the last fragment
    #[must_use]
    pub fn last(&self) -> Option<&DisplayPart> {
        self.0.last()
    }

    /// Returns the last fragment for modification
    pub fn last_mut(&mut self) -> Option<&mut DisplayPart> {
        self.0.last_mut()
    }

    /// Iterates the fragments
    pub fn iter(&self) -> std::slice::Iter<'_, DisplayPart> {
        self.0.iter()
    }

    /// Returns the fragments as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[DisplayPart] {
        &self.0
    }

    /// Concatenates the text of a range of fragments
    #[must_use]
    pub fn text_of(&self, range: Range<usize>) -> String {
        self.0[range].iter().map(|part| part.text.as_str()).collect()
    }

    /// Returns the text with every line break and its indentation collapsed into one space
    #[must_use]
    pub fn to_single_line(&self) -> String {
        let mut result = String::new();
        let mut parts = self.0.iter().peekable();

        while let Some(part) = parts.next() {
            match part.kind {
                DisplayPartKind::LineBreak => {
                    while parts
                        .peek()
                        .is_some_and(|next| next.kind == DisplayPartKind::Indentation)
                    {
                        parts.next();
                    }
                    if !result.ends_with(['(', '[', ' ']) {
                        result.push(' ');
                    }
                }
                DisplayPartKind::Indentation => {}
                _ => result.push_str(&part.text),
            }
        }

        result
    }

    /// Returns the symbols named by type name fragments, in order
    pub fn referenced_types<'a>(&'a self, registry: &'a SymbolRegistry) -> impl Iterator<Item = SymbolId> + 'a {
        self.0.iter().filter_map(move |part| {
            part.symbol
                .filter(|_| part.kind.is_type_name())
                .filter(|symbol| registry.get(*symbol).as_type().is_some())
        })
    }
}

impl fmt::Display for DisplayParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.0 {
            f.write_str(&part.text)?;
        }
        Ok(())
    }
}

impl From<Vec<DisplayPart>> for DisplayParts {
    fn from(parts: Vec<DisplayPart>) -> Self {
        DisplayParts(parts)
    }
}

impl FromIterator<DisplayPart> for DisplayParts {
    fn from_iter<I: IntoIterator<Item = DisplayPart>>(iter: I) -> Self {
        DisplayParts(iter.into_iter().collect())
    }
}

impl IntoIterator for DisplayParts {
    type Item = DisplayPart;
    type IntoIter = std::vec::IntoIter<DisplayPart>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DisplayParts {
    type Item = &'a DisplayPart;
    type IntoIter = std::slice::Iter<'a, DisplayPart>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_collapses_breaks() {
        let mut parts = DisplayParts::new();
        parts.keyword("void");
        parts.space();
        parts.text("M");
        parts.punctuation("(");
        parts.line_break();
        parts.indentation("    ");
        parts.text("int a");
        parts.punctuation(",");
        parts.line_break();
        parts.indentation("    ");
        parts.text("int b");
        parts.punctuation(")");

        assert_eq!(parts.to_string(), "void M(\n    int a,\n    int b)");
        assert_eq!(parts.to_single_line(), "void M(int a, int b)");
    }
}
