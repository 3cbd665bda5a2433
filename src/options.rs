//! Configuration of the documentation generator.
//!
//! [`DocumentationOptions`] is immutable once built. Construct it through
//! [`DocumentationOptionsBuilder`], which validates the numeric options:
//!
//! ```rust
//! use cildoc::{DocumentationDepth, DocumentationOptions, InheritanceStyle};
//!
//! let options = DocumentationOptions::builder()
//!     .depth(DocumentationDepth::Type)
//!     .max_derived_types(10)
//!     .inheritance_style(InheritanceStyle::Vertical)
//!     .ignored_names(["Acme.Internal"])
//!     .build()?;
//!
//! assert_eq!(options.max_derived_types(), 10);
//! assert!(options.depth() < DocumentationDepth::Member);
//! # Ok::<(), cildoc::Error>(())
//! ```

use bitflags::bitflags;
use strum::{Display, EnumIter, EnumString};

use crate::{
    filter::MetadataName,
    parts::{
        MemberDocumentationParts, NamespaceDocumentationParts, RootDocumentationParts,
        TypeDocumentationParts,
    },
    symbols::{SymbolId, SymbolRegistry},
    Result,
};

/// How deep the generated page tree goes
///
/// Ordered from the shallowest to the deepest level, so `depth >= DocumentationDepth::Type`
/// reads as "type pages are generated".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, EnumIter, EnumString,
)]
pub enum DocumentationDepth {
    /// Root and namespace pages
    Namespace,
    /// Root, namespace and type pages
    Type,
    /// Every page down to one page per member name
    #[default]
    Member,
}

/// Layout of the inheritance section of a type page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
pub enum InheritanceStyle {
    /// `Object → Base → Type` on one line
    #[default]
    Horizontal,
    /// One ancestor per line, indented by depth
    Vertical,
}

bitflags! {
    /// Places where type links are written with their containing namespace
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IncludeContainingNamespaceFilter: u16 {
        /// Containing type of a member
        const CONTAINING_TYPE = 0x0001;
        /// Parameter types
        const PARAMETER = 0x0002;
        /// Return, field and property types
        const RETURN_TYPE = 0x0004;
        /// Inheritance chain
        const BASE_TYPE = 0x0008;
        /// Attribute lists
        const ATTRIBUTE = 0x0010;
        /// Derived type lists
        const DERIVED_TYPE = 0x0020;
        /// Implemented interfaces
        const IMPLEMENTED_INTERFACE = 0x0040;
        /// Implemented interface members
        const IMPLEMENTED_MEMBER = 0x0080;
        /// Exception types
        const EXCEPTION = 0x0100;
        /// `<seealso>` targets
        const SEE_ALSO = 0x0200;
        /// Type lists of the root page
        const ROOT = 0x0400;
    }
}

/// Immutable configuration of a documentation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationOptions {
    ignored_names: Vec<MetadataName>,
    preferred_culture: Option<String>,
    root_directory_url: Option<String>,
    max_derived_types: usize,
    depth: DocumentationDepth,
    inheritance_style: InheritanceStyle,
    include_containing_namespace: IncludeContainingNamespaceFilter,
    ignored_root_parts: RootDocumentationParts,
    ignored_namespace_parts: NamespaceDocumentationParts,
    ignored_type_parts: TypeDocumentationParts,
    ignored_member_parts: MemberDocumentationParts,
    include_system_namespace: bool,
    place_system_namespace_first: bool,
    mark_obsolete: bool,
    include_member_inherited_from: bool,
    include_member_overrides: bool,
    include_member_implements: bool,
    include_member_constant_value: bool,
    include_inherited_interface_members: bool,
    include_all_derived_types: bool,
    include_attribute_arguments: bool,
    include_inherited_attributes: bool,
    include_extended_external_types: bool,
    omit_ienumerable: bool,
    wrap_declaration_base_types: bool,
    wrap_declaration_constraints: bool,
    scroll_to_content: bool,
}

impl Default for DocumentationOptions {
    fn default() -> Self {
        DocumentationOptions {
            ignored_names: Vec::new(),
            preferred_culture: None,
            root_directory_url: None,
            max_derived_types: DocumentationOptions::DEFAULT_MAX_DERIVED_TYPES,
            depth: DocumentationDepth::Member,
            inheritance_style: InheritanceStyle::Horizontal,
            include_containing_namespace: IncludeContainingNamespaceFilter::empty(),
            ignored_root_parts: RootDocumentationParts::empty(),
            ignored_namespace_parts: NamespaceDocumentationParts::empty(),
            ignored_type_parts: TypeDocumentationParts::empty(),
            ignored_member_parts: MemberDocumentationParts::empty(),
            include_system_namespace: false,
            place_system_namespace_first: true,
            mark_obsolete: true,
            include_member_inherited_from: true,
            include_member_overrides: true,
            include_member_implements: true,
            include_member_constant_value: true,
            include_inherited_interface_members: false,
            include_all_derived_types: false,
            include_attribute_arguments: true,
            include_inherited_attributes: true,
            include_extended_external_types: true,
            omit_ienumerable: true,
            wrap_declaration_base_types: true,
            wrap_declaration_constraints: true,
            scroll_to_content: false,
        }
    }
}

impl DocumentationOptions {
    /// Derived types listed on a type page before the list is cut short
    pub const DEFAULT_MAX_DERIVED_TYPES: usize = 5;

    /// Starts a builder with the default options
    #[must_use]
    pub fn builder() -> DocumentationOptionsBuilder {
        DocumentationOptionsBuilder::new()
    }

    /// Metadata names of types and namespaces that get no page
    #[must_use]
    pub fn ignored_names(&self) -> &[MetadataName] {
        &self.ignored_names
    }

    /// Returns `true` if `ty` or one of its containing namespaces is ignored
    #[must_use]
    pub fn should_be_ignored(&self, registry: &SymbolRegistry, ty: SymbolId) -> bool {
        if self.ignored_names.is_empty() {
            return false;
        }

        let name = registry.qualified_metadata_name(ty);
        self.ignored_names.iter().any(|ignored| ignored.covers(&name))
    }

    /// Returns `true` if the namespace named `name` is ignored
    #[must_use]
    pub fn is_namespace_ignored(&self, name: &str) -> bool {
        self.ignored_names.iter().any(|ignored| ignored.covers(name))
    }

    /// Culture subdirectory searched first for XML documentation files
    #[must_use]
    pub fn preferred_culture(&self) -> Option<&str> {
        self.preferred_culture.as_deref()
    }

    /// Prefix of every local link, e.g. `/docs/`
    #[must_use]
    pub fn root_directory_url(&self) -> Option<&str> {
        self.root_directory_url.as_deref()
    }

    /// Derived types listed on a type page before the full list moves to its own section
    #[must_use]
    pub fn max_derived_types(&self) -> usize {
        self.max_derived_types
    }

    /// How deep the page tree goes
    #[must_use]
    pub fn depth(&self) -> DocumentationDepth {
        self.depth
    }

    /// Layout of the inheritance section
    #[must_use]
    pub fn inheritance_style(&self) -> InheritanceStyle {
        self.inheritance_style
    }

    /// Places where type links include their namespace
    #[must_use]
    pub fn include_containing_namespace(&self) -> IncludeContainingNamespaceFilter {
        self.include_containing_namespace
    }

    /// Root page sections that are not written
    #[must_use]
    pub fn ignored_root_parts(&self) -> RootDocumentationParts {
        self.ignored_root_parts
    }

    /// Namespace page sections that are not written
    #[must_use]
    pub fn ignored_namespace_parts(&self) -> NamespaceDocumentationParts {
        self.ignored_namespace_parts
    }

    /// Type page sections that are not written
    #[must_use]
    pub fn ignored_type_parts(&self) -> TypeDocumentationParts {
        self.ignored_type_parts
    }

    /// Member page sections that are not written
    #[must_use]
    pub fn ignored_member_parts(&self) -> MemberDocumentationParts {
        self.ignored_member_parts
    }

    /// Link `System` types from `System` namespaces with their namespace
    #[must_use]
    pub fn include_system_namespace(&self) -> bool {
        self.include_system_namespace
    }

    /// Sort `System` namespaces before the others
    #[must_use]
    pub fn place_system_namespace_first(&self) -> bool {
        self.place_system_namespace_first
    }

    /// Prefix obsolete members in tables with `[deprecated]`
    #[must_use]
    pub fn mark_obsolete(&self) -> bool {
        self.mark_obsolete
    }

    /// Annotate inherited table rows with `(Inherited from T)`
    #[must_use]
    pub fn include_member_inherited_from(&self) -> bool {
        self.include_member_inherited_from
    }

    /// Annotate overriding table rows with `(Overrides T.M)`
    #[must_use]
    pub fn include_member_overrides(&self) -> bool {
        self.include_member_overrides
    }

    /// Annotate implementing table rows with `(Implements I.M)`
    #[must_use]
    pub fn include_member_implements(&self) -> bool {
        self.include_member_implements
    }

    /// Annotate constant table rows with `(Value = v)`
    #[must_use]
    pub fn include_member_constant_value(&self) -> bool {
        self.include_member_constant_value
    }

    /// Include members inherited from base interfaces in interface member tables
    #[must_use]
    pub fn include_inherited_interface_members(&self) -> bool {
        self.include_inherited_interface_members
    }

    /// List indirectly derived types as well as direct ones
    #[must_use]
    pub fn include_all_derived_types(&self) -> bool {
        self.include_all_derived_types
    }

    /// Render attribute arguments in declarations
    #[must_use]
    pub fn include_attribute_arguments(&self) -> bool {
        self.include_attribute_arguments
    }

    /// List attributes inherited from base types in the attributes section
    #[must_use]
    pub fn include_inherited_attributes(&self) -> bool {
        self.include_inherited_attributes
    }

    /// Generate pages for external types extended by documented extension methods
    #[must_use]
    pub fn include_extended_external_types(&self) -> bool {
        self.include_extended_external_types
    }

    /// Drop `IEnumerable` from interface lists that contain `IEnumerable<T>`
    #[must_use]
    pub fn omit_ienumerable(&self) -> bool {
        self.omit_ienumerable
    }

    /// Put each base type of a declaration on its own line
    #[must_use]
    pub fn wrap_declaration_base_types(&self) -> bool {
        self.wrap_declaration_base_types
    }

    /// Put each constraint clause of a declaration on its own line
    #[must_use]
    pub fn wrap_declaration_constraints(&self) -> bool {
        self.wrap_declaration_constraints
    }

    /// Append `#top` to local links and write a `top` anchor on every page
    #[must_use]
    pub fn scroll_to_content(&self) -> bool {
        self.scroll_to_content
    }
}

/// Builder for [`DocumentationOptions`]
///
/// Numeric options are accepted as given and checked by [`DocumentationOptionsBuilder::build`].
#[derive(Debug, Clone)]
pub struct DocumentationOptionsBuilder {
    options: DocumentationOptions,
    max_derived_types: i32,
}

impl Default for DocumentationOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! flag_setters {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(mut self, value: bool) -> Self {
                self.options.$name = value;
                self
            }
        )*
    };
}

impl DocumentationOptionsBuilder {
    /// Creates a builder holding the default options
    #[must_use]
    pub fn new() -> Self {
        DocumentationOptionsBuilder {
            options: DocumentationOptions::default(),
            max_derived_types: DocumentationOptions::DEFAULT_MAX_DERIVED_TYPES as i32,
        }
    }

    /// Types and namespaces that get no page, as dotted metadata names
    #[must_use]
    pub fn ignored_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.ignored_names = names
            .into_iter()
            .map(|name| MetadataName::new(name.as_ref()))
            .collect();
        self
    }

    /// Culture subdirectory searched first for XML documentation files
    #[must_use]
    pub fn preferred_culture(mut self, culture: &str) -> Self {
        self.options.preferred_culture = Some(culture.to_string());
        self
    }

    /// Prefix of every local link
    #[must_use]
    pub fn root_directory_url(mut self, url: &str) -> Self {
        self.options.root_directory_url = Some(url.to_string());
        self
    }

    /// Derived types listed before the list is cut short; must not be negative
    #[must_use]
    pub fn max_derived_types(mut self, value: i32) -> Self {
        self.max_derived_types = value;
        self
    }

    /// How deep the page tree goes
    #[must_use]
    pub fn depth(mut self, depth: DocumentationDepth) -> Self {
        self.options.depth = depth;
        self
    }

    /// Layout of the inheritance section
    #[must_use]
    pub fn inheritance_style(mut self, style: InheritanceStyle) -> Self {
        self.options.inheritance_style = style;
        self
    }

    /// Places where type links include their namespace
    #[must_use]
    pub fn include_containing_namespace(mut self, filter: IncludeContainingNamespaceFilter) -> Self {
        self.options.include_containing_namespace = filter;
        self
    }

    /// Root page sections to leave out
    #[must_use]
    pub fn ignored_root_parts(mut self, parts: RootDocumentationParts) -> Self {
        self.options.ignored_root_parts = parts;
        self
    }

    /// Namespace page sections to leave out
    #[must_use]
    pub fn ignored_namespace_parts(mut self, parts: NamespaceDocumentationParts) -> Self {
        self.options.ignored_namespace_parts = parts;
        self
    }

    /// Type page sections to leave out
    #[must_use]
    pub fn ignored_type_parts(mut self, parts: TypeDocumentationParts) -> Self {
        self.options.ignored_type_parts = parts;
        self
    }

    /// Member page sections to leave out
    #[must_use]
    pub fn ignored_member_parts(mut self, parts: MemberDocumentationParts) -> Self {
        self.options.ignored_member_parts = parts;
        self
    }

    flag_setters! {
        /// Link `System` types with their namespace
        include_system_namespace,
        /// Sort `System` namespaces first
        place_system_namespace_first,
        /// Mark obsolete table rows
        mark_obsolete,
        /// Annotate inherited table rows
        include_member_inherited_from,
        /// Annotate overriding table rows
        include_member_overrides,
        /// Annotate implementing table rows
        include_member_implements,
        /// Annotate constant table rows with their value
        include_member_constant_value,
        /// Include members of base interfaces in interface tables
        include_inherited_interface_members,
        /// List indirectly derived types
        include_all_derived_types,
        /// Render attribute arguments
        include_attribute_arguments,
        /// List inherited attributes
        include_inherited_attributes,
        /// Generate pages for extended external types
        include_extended_external_types,
        /// Drop the redundant non-generic `IEnumerable`
        omit_ienumerable,
        /// Wrap declaration base lists
        wrap_declaration_base_types,
        /// Wrap declaration constraint clauses
        wrap_declaration_constraints,
        /// Write `top` anchors and link to them
        scroll_to_content,
    }

    /// Validates the numeric options and returns the finished configuration
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOption`] if `max_derived_types` is negative.
    pub fn build(self) -> Result<DocumentationOptions> {
        let max_derived_types = usize::try_from(self.max_derived_types).map_err(|_| {
            invalid_option!(
                "max_derived_types",
                "must be zero or greater, got {}",
                self.max_derived_types
            )
        })?;

        Ok(DocumentationOptions {
            max_derived_types,
            ..self.options
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test::factories::fixture, Error};

    #[test]
    fn defaults() {
        let options = DocumentationOptions::builder().build().unwrap();
        assert_eq!(options, DocumentationOptions::default());
        assert_eq!(options.max_derived_types(), 5);
        assert_eq!(options.depth(), DocumentationDepth::Member);
        assert!(options.omit_ienumerable());
        assert!(!options.scroll_to_content());
    }

    #[test]
    fn negative_max_derived_types_is_rejected() {
        let error = DocumentationOptions::builder()
            .max_derived_types(-3)
            .build()
            .unwrap_err();

        match error {
            Error::InvalidOption { name, message } => {
                assert_eq!(name, "max_derived_types");
                assert!(message.contains("-3"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn ignored_names_cover_namespaces_and_types() {
        let fixture = fixture();
        let options = DocumentationOptions::builder()
            .ignored_names(["Acme.Data.Widget"])
            .build()
            .unwrap();

        assert!(options.should_be_ignored(&fixture.registry, fixture.widget));
        assert!(!options.should_be_ignored(&fixture.registry, fixture.collection));

        let options = DocumentationOptions::builder().ignored_names(["Acme"]).build().unwrap();
        assert!(options.should_be_ignored(&fixture.registry, fixture.collection));
        assert!(options.is_namespace_ignored("Acme.Data"));
    }

    #[test]
    fn depth_parses_and_orders() {
        assert_eq!("Type".parse::<DocumentationDepth>().unwrap(), DocumentationDepth::Type);
        assert!(DocumentationDepth::Namespace < DocumentationDepth::Type);
        assert_eq!(InheritanceStyle::Vertical.to_string(), "Vertical");
    }
}
