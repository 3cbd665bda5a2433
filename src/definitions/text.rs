use crate::{
    definitions::{DefinitionListFormat, DefinitionListLayout, DefinitionSink, SymbolDefinitionWriter},
    display::DisplayParts,
    model::DocumentationModel,
    symbols::SymbolId,
};

/// Plain-text definition list with one definition per line
///
/// Each depth level indents by the format's indentation unit. Namespaces, types and assemblies
/// are separated by one empty line; in the type hierarchy layout types follow each other
/// directly, so the indentation alone shows the tree.
#[derive(Debug, Clone)]
pub struct TextDefinitionSink {
    buffer: String,
    indent_chars: String,
    layout: DefinitionListLayout,
    trailing_comma: bool,
    depth: usize,
}

impl TextDefinitionSink {
    /// Creates an empty sink for `format`
    #[must_use]
    pub fn new(format: &DefinitionListFormat) -> Self {
        TextDefinitionSink {
            buffer: String::new(),
            indent_chars: format.indent_chars().to_string(),
            layout: format.layout(),
            trailing_comma: format.includes(super::DefinitionParts::TRAILING_COMMA),
            depth: 0,
        }
    }

    /// The current indentation level
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The text written so far
    #[must_use]
    pub fn content(&self) -> &str {
        &self.buffer
    }

    /// Returns the written text and consumes the sink
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    fn write_lines(&mut self, text: &str) {
        for line in text.split('\n') {
            if !line.is_empty() {
                for _ in 0..self.depth {
                    self.buffer.push_str(&self.indent_chars);
                }
                self.buffer.push_str(line.trim_end());
            }
            self.buffer.push('\n');
        }
    }

    fn write_empty_line(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
    }
}

impl DefinitionSink for TextDefinitionSink {
    fn write_end_document(&mut self) {
        let trimmed = self.buffer.trim_end_matches('\n').len();
        self.buffer.truncate(trimmed);
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
    }

    fn write_assembly_definition(&mut self, _assembly: SymbolId, definition: &DisplayParts) {
        self.write_lines(&format!("assembly {definition}"));
    }

    fn write_assembly_separator(&mut self) {
        self.write_empty_line();
    }

    fn write_namespace_definition(&mut self, _namespace: SymbolId, definition: &DisplayParts) {
        self.write_lines(&definition.to_string());
    }

    fn write_namespace_separator(&mut self) {
        self.write_empty_line();
    }

    fn write_type_definition(&mut self, _ty: SymbolId, definition: &DisplayParts) {
        self.write_lines(&definition.to_string());
    }

    fn write_type_separator(&mut self) {
        if self.layout != DefinitionListLayout::TypeHierarchy {
            self.write_empty_line();
        }
    }

    fn write_member_definition(&mut self, _member: SymbolId, definition: &DisplayParts) {
        self.write_lines(&definition.to_string());
    }

    fn write_member_separator(&mut self) {
        self.write_empty_line();
    }

    fn write_enum_member_definition(&mut self, _member: SymbolId, definition: &DisplayParts) {
        if self.trailing_comma {
            self.write_lines(&format!("{definition},"));
        } else {
            self.write_lines(&definition.to_string());
        }
    }

    fn write_enum_member_separator(&mut self) {
        self.write_empty_line();
    }

    fn write_attribute(&mut self, _symbol: SymbolId, attribute: &DisplayParts) {
        self.write_lines(&format!("[assembly: {attribute}]"));
    }

    fn increase_depth(&mut self) {
        self.depth += 1;
    }

    fn decrease_depth(&mut self) {
        assert!(self.depth > 0, "cannot decrease depth below zero");
        self.depth -= 1;
    }
}

/// Writes the definitions of every documented symbol of `model` as plain text
///
/// # Example
///
/// ```rust
/// use cildoc::definitions::{write_definitions, DefinitionListFormat};
/// use cildoc::filter::SymbolFilterOptions;
/// use cildoc::model::DocumentationModel;
/// use cildoc::symbols::{SymbolRegistry, TypeBuilder};
///
/// let mut registry = SymbolRegistry::new();
/// let assembly = registry.add_assembly("Acme", "1.0.0.0");
/// let namespace = registry.namespace(assembly, "Acme")?;
/// TypeBuilder::class("Widget").public().build(&mut registry, namespace)?;
///
/// let model = DocumentationModel::new(
///     &registry,
///     [assembly],
///     SymbolFilterOptions::default(),
///     Vec::<&str>::new(),
/// );
/// let text = write_definitions(&model, &DefinitionListFormat::default());
///
/// assert!(text.ends_with("namespace Acme\n  public class Widget\n"));
/// # Ok::<(), cildoc::Error>(())
/// ```
#[must_use]
pub fn write_definitions(model: &DocumentationModel<'_>, format: &DefinitionListFormat) -> String {
    let mut writer = SymbolDefinitionWriter::new(model, format, TextDefinitionSink::new(format));
    writer.write_document();
    writer.into_sink().into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayParts;
    use pretty_assertions::assert_eq;

    fn parts(text: &str) -> DisplayParts {
        let mut parts = DisplayParts::new();
        parts.text(text);
        parts
    }

    #[test]
    fn indentation_follows_depth() {
        let format = DefinitionListFormat::default().with_indent_chars("    ");
        let mut sink = TextDefinitionSink::new(&format);
        let id = SymbolId::new(0);

        sink.write_namespace_definition(id, &parts("namespace Acme"));
        sink.increase_depth();
        sink.write_type_definition(id, &parts("public class Widget"));
        sink.increase_depth();
        sink.write_member_definition(id, &parts("void Run(\n    int count,\n    int delay);"));
        sink.decrease_depth();
        sink.write_type_separator();
        sink.write_type_definition(id, &parts("public class Gadget"));
        sink.decrease_depth();
        sink.write_end_document();

        assert_eq!(
            sink.content(),
            "namespace Acme\n    public class Widget\n        void Run(\n            int count,\n            int delay);\n\n    public class Gadget\n"
        );
    }

    #[test]
    fn enum_members_get_commas() {
        let format = DefinitionListFormat::default();
        let mut sink = TextDefinitionSink::new(&format);
        sink.write_enum_member_definition(SymbolId::new(0), &parts("Red = 1"));
        assert_eq!(sink.content(), "Red = 1,\n");

        let format = format.with_parts(super::super::DefinitionParts::empty());
        let mut sink = TextDefinitionSink::new(&format);
        sink.write_enum_member_definition(SymbolId::new(0), &parts("Red = 1"));
        assert_eq!(sink.content(), "Red = 1\n");
    }

    #[test]
    fn no_separator_in_type_hierarchy() {
        let format = DefinitionListFormat::default().with_layout(DefinitionListLayout::TypeHierarchy);
        let mut sink = TextDefinitionSink::new(&format);
        sink.write_type_definition(SymbolId::new(0), &parts("object"));
        sink.write_type_separator();
        sink.write_type_definition(SymbolId::new(1), &parts("string"));
        assert_eq!(sink.content(), "object\nstring\n");
    }

    #[test]
    #[should_panic(expected = "cannot decrease depth")]
    fn depth_cannot_go_below_zero() {
        TextDefinitionSink::new(&DefinitionListFormat::default()).decrease_depth();
    }
}
