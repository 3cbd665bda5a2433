use bitflags::bitflags;
use strum::{Display, EnumIter, EnumString};

use crate::display::DefinitionDisplayOptions;

/// Arrangement of a definition list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
pub enum DefinitionListLayout {
    /// One flat block per namespace
    #[default]
    NamespaceList,
    /// Namespaces nested below their parent namespace
    NamespaceHierarchy,
    /// Classes below their base class, interfaces below their base interfaces
    TypeHierarchy,
}

bitflags! {
    /// Parts of a definition that are written
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DefinitionParts: u16 {
        /// `[assembly: ...]` lines below each assembly
        const ASSEMBLY_ATTRIBUTES = 0x0001;
        /// Namespaces in attribute and base type names
        const CONTAINING_NAMESPACE = 0x0002;
        /// Attribute lists
        const ATTRIBUTES = 0x0004;
        /// Attribute arguments
        const ATTRIBUTE_ARGUMENTS = 0x0008;
        /// Attributes of property and event accessors
        const ACCESSOR_ATTRIBUTES = 0x0010;
        /// Attributes of parameters
        const PARAMETER_ATTRIBUTES = 0x0020;
        /// The base class of a type
        const BASE_TYPE = 0x0040;
        /// The interfaces of a type
        const BASE_INTERFACES = 0x0080;
        /// Generic constraint clauses
        const CONSTRAINTS = 0x0100;
        /// `;` after delegates, fields, events and methods
        const TRAILING_SEMICOLON = 0x0200;
        /// `,` after enum members
        const TRAILING_COMMA = 0x0400;
    }
}

impl Default for DefinitionParts {
    fn default() -> Self {
        DefinitionParts::all()
    }
}

bitflags! {
    /// Declarations spread over several lines
    ///
    /// Wrapping is ignored in [`DefinitionListLayout::TypeHierarchy`], where every definition
    /// stays on one line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DefinitionWrapping: u8 {
        /// One attribute list per line
        const ATTRIBUTES = 0x01;
        /// One base type per line
        const BASE_LIST = 0x02;
        /// One constraint clause per line
        const CONSTRAINTS = 0x04;
        /// One parameter per line
        const PARAMETERS = 0x08;
    }
}

/// Content and layout of a definition list
///
/// ```rust
/// use cildoc::definitions::{DefinitionListFormat, DefinitionListLayout, DefinitionParts};
///
/// let format = DefinitionListFormat::default()
///     .with_layout(DefinitionListLayout::NamespaceHierarchy)
///     .with_parts(DefinitionParts::all() - DefinitionParts::ATTRIBUTES)
///     .with_indent_chars("    ");
///
/// assert_eq!(format.indent_chars(), "    ");
/// assert!(!format.includes(DefinitionParts::ATTRIBUTES));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionListFormat {
    layout: DefinitionListLayout,
    parts: DefinitionParts,
    wrapping: DefinitionWrapping,
    indent_chars: String,
    empty_line_between_members: bool,
    empty_line_between_member_groups: bool,
    omit_ienumerable: bool,
    prefer_default_literal: bool,
    group_by_assembly: bool,
}

impl Default for DefinitionListFormat {
    fn default() -> Self {
        DefinitionListFormat {
            layout: DefinitionListLayout::NamespaceList,
            parts: DefinitionParts::default(),
            wrapping: DefinitionWrapping::empty(),
            indent_chars: "  ".to_string(),
            empty_line_between_members: false,
            empty_line_between_member_groups: true,
            omit_ienumerable: true,
            prefer_default_literal: true,
            group_by_assembly: false,
        }
    }
}

impl DefinitionListFormat {
    /// Sets the arrangement
    #[must_use]
    pub fn with_layout(mut self, layout: DefinitionListLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the written parts
    #[must_use]
    pub fn with_parts(mut self, parts: DefinitionParts) -> Self {
        self.parts = parts;
        self
    }

    /// Sets the wrapped constructs
    #[must_use]
    pub fn with_wrapping(mut self, wrapping: DefinitionWrapping) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Sets the unit of indentation
    #[must_use]
    pub fn with_indent_chars(mut self, indent_chars: impl Into<String>) -> Self {
        self.indent_chars = indent_chars.into();
        self
    }

    /// Separates every two members by an empty line
    #[must_use]
    pub fn with_empty_line_between_members(mut self, value: bool) -> Self {
        self.empty_line_between_members = value;
        self
    }

    /// Separates members of different kinds by an empty line
    #[must_use]
    pub fn with_empty_line_between_member_groups(mut self, value: bool) -> Self {
        self.empty_line_between_member_groups = value;
        self
    }

    /// Drops `IEnumerable` from base lists that contain `IEnumerable<T>`
    #[must_use]
    pub fn with_omit_ienumerable(mut self, value: bool) -> Self {
        self.omit_ienumerable = value;
        self
    }

    /// Writes `default` instead of `default(T)`
    #[must_use]
    pub fn with_prefer_default_literal(mut self, value: bool) -> Self {
        self.prefer_default_literal = value;
        self
    }

    /// Writes the namespaces of each assembly below the assembly
    #[must_use]
    pub fn with_group_by_assembly(mut self, value: bool) -> Self {
        self.group_by_assembly = value;
        self
    }

    /// The arrangement
    #[must_use]
    pub fn layout(&self) -> DefinitionListLayout {
        self.layout
    }

    /// The written parts
    #[must_use]
    pub fn parts(&self) -> DefinitionParts {
        self.parts
    }

    /// The wrapped constructs
    #[must_use]
    pub fn wrapping(&self) -> DefinitionWrapping {
        self.wrapping
    }

    /// The unit of indentation
    #[must_use]
    pub fn indent_chars(&self) -> &str {
        &self.indent_chars
    }

    /// Whether every two members are separated by an empty line
    #[must_use]
    pub fn empty_line_between_members(&self) -> bool {
        self.empty_line_between_members
    }

    /// Whether members of different kinds are separated by an empty line
    #[must_use]
    pub fn empty_line_between_member_groups(&self) -> bool {
        self.empty_line_between_member_groups
    }

    /// Whether `IEnumerable` is dropped next to `IEnumerable<T>`
    #[must_use]
    pub fn omit_ienumerable(&self) -> bool {
        self.omit_ienumerable
    }

    /// Whether `default` replaces `default(T)`
    #[must_use]
    pub fn prefer_default_literal(&self) -> bool {
        self.prefer_default_literal
    }

    /// Whether namespaces are written below their assembly
    #[must_use]
    pub fn group_by_assembly(&self) -> bool {
        self.group_by_assembly
    }

    /// Returns `true` if every part in `parts` is written
    #[must_use]
    pub fn includes(&self, parts: DefinitionParts) -> bool {
        self.parts.contains(parts)
    }

    /// The declaration switches matching this format
    #[must_use]
    pub fn display_options(&self) -> DefinitionDisplayOptions {
        display_options(
            self.parts,
            self.wrapping_for_layout(),
            self.omit_ienumerable,
            self.prefer_default_literal,
        )
    }

    fn wrapping_for_layout(&self) -> DefinitionWrapping {
        if self.layout == DefinitionListLayout::TypeHierarchy {
            DefinitionWrapping::empty()
        } else {
            self.wrapping
        }
    }
}

/// Maps definition parts and wrapping onto declaration switches
pub(crate) fn display_options(
    parts: DefinitionParts,
    wrapping: DefinitionWrapping,
    omit_ienumerable: bool,
    prefer_default_literal: bool,
) -> DefinitionDisplayOptions {
    let mut options = DefinitionDisplayOptions::empty();

    let switches = [
        (parts.contains(DefinitionParts::ATTRIBUTES), DefinitionDisplayOptions::INCLUDE_ATTRIBUTES),
        (
            parts.contains(DefinitionParts::ATTRIBUTE_ARGUMENTS),
            DefinitionDisplayOptions::INCLUDE_ATTRIBUTE_ARGUMENTS,
        ),
        (
            parts.contains(DefinitionParts::ACCESSOR_ATTRIBUTES),
            DefinitionDisplayOptions::INCLUDE_ACCESSOR_ATTRIBUTES,
        ),
        (
            parts.contains(DefinitionParts::PARAMETER_ATTRIBUTES),
            DefinitionDisplayOptions::INCLUDE_PARAMETER_ATTRIBUTES,
        ),
        (
            parts.contains(DefinitionParts::TRAILING_SEMICOLON),
            DefinitionDisplayOptions::INCLUDE_TRAILING_SEMICOLON,
        ),
        (
            !parts.contains(DefinitionParts::CONTAINING_NAMESPACE),
            DefinitionDisplayOptions::OMIT_CONTAINING_NAMESPACE,
        ),
        (omit_ienumerable, DefinitionDisplayOptions::OMIT_IENUMERABLE),
        (prefer_default_literal, DefinitionDisplayOptions::PREFER_DEFAULT_LITERAL),
        (wrapping.contains(DefinitionWrapping::ATTRIBUTES), DefinitionDisplayOptions::FORMAT_ATTRIBUTES),
        (wrapping.contains(DefinitionWrapping::BASE_LIST), DefinitionDisplayOptions::FORMAT_BASE_LIST),
        (wrapping.contains(DefinitionWrapping::CONSTRAINTS), DefinitionDisplayOptions::FORMAT_CONSTRAINTS),
        (wrapping.contains(DefinitionWrapping::PARAMETERS), DefinitionDisplayOptions::FORMAT_PARAMETERS),
    ];

    for (enabled, option) in switches {
        options.set(option, enabled);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn defaults() {
        let format = DefinitionListFormat::default();
        assert_eq!(format.layout(), DefinitionListLayout::NamespaceList);
        assert_eq!(format.parts(), DefinitionParts::all());
        assert!(format.empty_line_between_member_groups());
        assert!(!format.empty_line_between_members());

        let options = format.display_options();
        assert!(options.contains(DefinitionDisplayOptions::INCLUDE_ATTRIBUTES));
        assert!(options.contains(DefinitionDisplayOptions::INCLUDE_TRAILING_SEMICOLON));
        assert!(!options.contains(DefinitionDisplayOptions::OMIT_CONTAINING_NAMESPACE));
        assert!(!options.contains(DefinitionDisplayOptions::FORMAT_PARAMETERS));
    }

    #[test]
    fn wrapping_is_dropped_in_type_hierarchy() {
        let format = DefinitionListFormat::default()
            .with_wrapping(DefinitionWrapping::all())
            .with_parts(DefinitionParts::BASE_TYPE);
        let options = format.display_options();
        assert!(options.contains(DefinitionDisplayOptions::FORMAT_BASE_LIST));
        assert!(options.contains(DefinitionDisplayOptions::OMIT_CONTAINING_NAMESPACE));
        assert!(!options.contains(DefinitionDisplayOptions::INCLUDE_ATTRIBUTES));

        let options = format.with_layout(DefinitionListLayout::TypeHierarchy).display_options();
        assert!(!options.contains(DefinitionDisplayOptions::FORMAT_BASE_LIST));
        assert!(!options.contains(DefinitionDisplayOptions::FORMAT_PARAMETERS));
    }

    #[test]
    fn layout_names() {
        assert_eq!(DefinitionListLayout::TypeHierarchy.to_string(), "TypeHierarchy");
        assert_eq!(
            DefinitionListLayout::from_str("NamespaceHierarchy").unwrap(),
            DefinitionListLayout::NamespaceHierarchy
        );
    }
}
