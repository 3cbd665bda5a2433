//! Section titles and the other fixed words of generated pages.
//!
//! [`DocumentationResources::ENGLISH`] is the default. A localized set is a second constant of
//! the same struct; every title is a plain `&'static str`.

use crate::{
    parts::{NamespaceDocumentationParts, RootDocumentationParts, TypeDocumentationParts},
    symbols::{MethodKind, SymbolKind, SymbolRegistry, SymbolId, TypeKind},
};

/// Words and titles used by the page writer
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentationResources {
    pub inheritance_char: char,
    pub inline_separator_char: char,
    pub close_parenthesis: &'static str,
    pub colon: &'static str,
    pub comma: &'static str,
    pub open_parenthesis: &'static str,
    pub equals_sign: &'static str,
    pub dll_extension: &'static str,
    pub ellipsis: &'static str,
    pub false_value: &'static str,
    pub true_value: &'static str,

    pub applies_to_title: &'static str,
    pub assembly_title: &'static str,
    pub attributes_title: &'static str,
    pub classes_title: &'static str,
    pub class_title: &'static str,
    pub combination_of_title: &'static str,
    pub constructors_title: &'static str,
    pub constructor_title: &'static str,
    pub containing_namespace_title: &'static str,
    pub containing_type_title: &'static str,
    pub delegates_title: &'static str,
    pub delegate_title: &'static str,
    pub deprecated_title: &'static str,
    pub derived_all_title: &'static str,
    pub derived_title: &'static str,
    pub enums_title: &'static str,
    pub enum_title: &'static str,
    pub events_title: &'static str,
    pub event_title: &'static str,
    pub examples_title: &'static str,
    pub exceptions_title: &'static str,
    pub explicit_interface_implementations_title: &'static str,
    pub explicit_interface_implementation_title: &'static str,
    pub extension_methods_title: &'static str,
    pub extension_method_title: &'static str,
    pub extensions_of_external_types_title: &'static str,
    pub extensions_title: &'static str,
    pub fields_title: &'static str,
    pub field_title: &'static str,
    pub field_value_title: &'static str,
    pub home_title: &'static str,
    pub implements_title: &'static str,
    pub indexers_title: &'static str,
    pub indexer_title: &'static str,
    pub inheritance_title: &'static str,
    pub inherited_from: &'static str,
    pub interfaces_title: &'static str,
    pub interface_title: &'static str,
    pub member_title: &'static str,
    pub methods_title: &'static str,
    pub method_title: &'static str,
    pub namespaces_title: &'static str,
    pub namespace_title: &'static str,
    pub name_title: &'static str,
    pub object_model_title: &'static str,
    pub obsolete_message: &'static str,
    pub operators_title: &'static str,
    pub operator_title: &'static str,
    pub other_title: &'static str,
    pub overloads_title: &'static str,
    pub overrides_title: &'static str,
    pub parameters_title: &'static str,
    pub properties_title: &'static str,
    pub property_title: &'static str,
    pub property_value_title: &'static str,
    pub remarks_title: &'static str,
    pub returns_title: &'static str,
    pub return_value_title: &'static str,
    pub see_all_derived_types: &'static str,
    pub see_also_title: &'static str,
    pub static_classes_title: &'static str,
    pub structs_title: &'static str,
    pub struct_title: &'static str,
    pub summary_title: &'static str,
    pub type_parameters_title: &'static str,
    pub values_title: &'static str,
    pub value_title: &'static str,
}

impl Default for DocumentationResources {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl DocumentationResources {
    /// English titles
    pub const ENGLISH: DocumentationResources = DocumentationResources {
        inheritance_char: '\u{2192}',
        inline_separator_char: '\u{2022}',
        close_parenthesis: ")",
        colon: ":",
        comma: ",",
        open_parenthesis: "(",
        equals_sign: "=",
        dll_extension: "dll",
        ellipsis: "...",
        false_value: "false",
        true_value: "true",

        applies_to_title: "Applies to",
        assembly_title: "Assembly",
        attributes_title: "Attributes",
        classes_title: "Classes",
        class_title: "Class",
        combination_of_title: "Combination of",
        constructors_title: "Constructors",
        constructor_title: "Constructor",
        containing_namespace_title: "Containing Namespace",
        containing_type_title: "Containing Type",
        delegates_title: "Delegates",
        delegate_title: "Delegate",
        deprecated_title: "deprecated",
        derived_all_title: "Derived (All)",
        derived_title: "Derived",
        enums_title: "Enums",
        enum_title: "Enum",
        events_title: "Events",
        event_title: "Event",
        examples_title: "Examples",
        exceptions_title: "Exceptions",
        explicit_interface_implementations_title: "Explicit Interface Implementations",
        explicit_interface_implementation_title: "Explicit Interface Implementation",
        extension_methods_title: "Extension Methods",
        extension_method_title: "Extension Method",
        extensions_of_external_types_title: "Extensions of External Types",
        extensions_title: "Extensions",
        fields_title: "Fields",
        field_title: "Field",
        field_value_title: "Field Value",
        home_title: "Home",
        implements_title: "Implements",
        indexers_title: "Indexers",
        indexer_title: "Indexer",
        inheritance_title: "Inheritance",
        inherited_from: "Inherited from",
        interfaces_title: "Interfaces",
        interface_title: "Interface",
        member_title: "Member",
        methods_title: "Methods",
        method_title: "Method",
        namespaces_title: "Namespaces",
        namespace_title: "Namespace",
        name_title: "Name",
        object_model_title: "Object Model",
        obsolete_message: "WARNING: This API is now obsolete.",
        operators_title: "Operators",
        operator_title: "Operator",
        other_title: "Other",
        overloads_title: "Overloads",
        overrides_title: "Overrides",
        parameters_title: "Parameters",
        properties_title: "Properties",
        property_title: "Property",
        property_value_title: "Property Value",
        remarks_title: "Remarks",
        returns_title: "Returns",
        return_value_title: "Return Value",
        see_all_derived_types: "See all derived types",
        see_also_title: "See Also",
        static_classes_title: "Static Classes",
        structs_title: "Structs",
        struct_title: "Struct",
        summary_title: "Summary",
        type_parameters_title: "Type Parameters",
        values_title: "Values",
        value_title: "Value",
    };

    /// Singular title of the kind of `symbol`, e.g. `Method` or `Indexer`
    ///
    /// # Panics
    /// Panics for symbols that never get a page or a table of their own.
    #[must_use]
    pub fn get_name(&self, registry: &SymbolRegistry, symbol: SymbolId) -> &'static str {
        let data = registry.get(symbol);
        match data.kind() {
            SymbolKind::Event => self.event_title,
            SymbolKind::Field => self.field_title,
            SymbolKind::Method => match data.method_kind() {
                Some(MethodKind::Constructor) => self.constructor_title,
                Some(MethodKind::Conversion | MethodKind::UserDefinedOperator) => self.operator_title,
                Some(MethodKind::Ordinary | MethodKind::ExplicitInterfaceImplementation) => {
                    self.method_title
                }
                kind => panic!("no title for {kind:?} methods"),
            },
            SymbolKind::Namespace => self.namespace_title,
            SymbolKind::Property if data.is_indexer() => self.indexer_title,
            SymbolKind::Property => self.property_title,
            SymbolKind::NamedType => match data.type_kind() {
                Some(kind) => self.get_type_kind_name(kind),
                None => unreachable!("named type without a type kind"),
            },
            kind => panic!("no title for {kind:?} symbols"),
        }
    }

    /// Plural title of the kind of `symbol`, e.g. `Methods`
    ///
    /// # Panics
    /// Panics for symbols that never get a page or a table of their own.
    #[must_use]
    pub fn get_plural_name(&self, registry: &SymbolRegistry, symbol: SymbolId) -> &'static str {
        let data = registry.get(symbol);
        match data.kind() {
            SymbolKind::Event => self.events_title,
            SymbolKind::Field => self.fields_title,
            SymbolKind::Method => match data.method_kind() {
                Some(MethodKind::Constructor) => self.constructors_title,
                Some(MethodKind::Conversion | MethodKind::UserDefinedOperator) => self.operators_title,
                Some(MethodKind::Ordinary | MethodKind::ExplicitInterfaceImplementation) => {
                    self.methods_title
                }
                kind => panic!("no title for {kind:?} methods"),
            },
            SymbolKind::Namespace => self.namespaces_title,
            SymbolKind::Property => self.properties_title,
            SymbolKind::NamedType => match data.type_kind() {
                Some(kind) => self.get_type_kind_plural_name(kind),
                None => unreachable!("named type without a type kind"),
            },
            kind => panic!("no title for {kind:?} symbols"),
        }
    }

    /// `Class`, `Struct`, ...
    #[must_use]
    pub fn get_type_kind_name(&self, kind: TypeKind) -> &'static str {
        match kind {
            TypeKind::Class => self.class_title,
            TypeKind::Struct => self.struct_title,
            TypeKind::Interface => self.interface_title,
            TypeKind::Enum => self.enum_title,
            TypeKind::Delegate => self.delegate_title,
        }
    }

    /// `Classes`, `Structs`, ...
    #[must_use]
    pub fn get_type_kind_plural_name(&self, kind: TypeKind) -> &'static str {
        match kind {
            TypeKind::Class => self.classes_title,
            TypeKind::Struct => self.structs_title,
            TypeKind::Interface => self.interfaces_title,
            TypeKind::Enum => self.enums_title,
            TypeKind::Delegate => self.delegates_title,
        }
    }

    /// Heading of a section of the root page
    ///
    /// # Panics
    /// Panics for parts without a heading of their own.
    #[must_use]
    pub fn root_heading(&self, part: RootDocumentationParts) -> &'static str {
        match part {
            RootDocumentationParts::NAMESPACES => self.namespaces_title,
            RootDocumentationParts::CLASSES => self.classes_title,
            RootDocumentationParts::STATIC_CLASSES => self.static_classes_title,
            RootDocumentationParts::STRUCTS => self.structs_title,
            RootDocumentationParts::INTERFACES => self.interfaces_title,
            RootDocumentationParts::ENUMS => self.enums_title,
            RootDocumentationParts::DELEGATES => self.delegates_title,
            RootDocumentationParts::OTHER => self.other_title,
            _ => panic!("{part:?} has no heading"),
        }
    }

    /// Heading of a section of a namespace page
    ///
    /// # Panics
    /// Panics for parts without a heading of their own.
    #[must_use]
    pub fn namespace_heading(&self, part: NamespaceDocumentationParts) -> &'static str {
        match part {
            NamespaceDocumentationParts::EXAMPLES => self.examples_title,
            NamespaceDocumentationParts::REMARKS => self.remarks_title,
            NamespaceDocumentationParts::CLASSES => self.classes_title,
            NamespaceDocumentationParts::STRUCTS => self.structs_title,
            NamespaceDocumentationParts::INTERFACES => self.interfaces_title,
            NamespaceDocumentationParts::ENUMS => self.enums_title,
            NamespaceDocumentationParts::DELEGATES => self.delegates_title,
            NamespaceDocumentationParts::SEE_ALSO => self.see_also_title,
            _ => panic!("{part:?} has no heading"),
        }
    }

    /// Heading of a section of a type page
    ///
    /// # Panics
    /// Panics for parts without a heading of their own.
    #[must_use]
    pub fn type_heading(&self, part: TypeDocumentationParts) -> &'static str {
        match part {
            TypeDocumentationParts::EXAMPLES => self.examples_title,
            TypeDocumentationParts::REMARKS => self.remarks_title,
            TypeDocumentationParts::CONSTRUCTORS => self.constructors_title,
            TypeDocumentationParts::FIELDS => self.fields_title,
            TypeDocumentationParts::INDEXERS => self.indexers_title,
            TypeDocumentationParts::PROPERTIES => self.properties_title,
            TypeDocumentationParts::METHODS => self.methods_title,
            TypeDocumentationParts::OPERATORS => self.operators_title,
            TypeDocumentationParts::EVENTS => self.events_title,
            TypeDocumentationParts::EXPLICIT_INTERFACE_IMPLEMENTATIONS => {
                self.explicit_interface_implementations_title
            }
            TypeDocumentationParts::EXTENSION_METHODS => self.extension_methods_title,
            TypeDocumentationParts::CLASSES => self.classes_title,
            TypeDocumentationParts::STRUCTS => self.structs_title,
            TypeDocumentationParts::INTERFACES => self.interfaces_title,
            TypeDocumentationParts::ENUMS => self.enums_title,
            TypeDocumentationParts::DELEGATES => self.delegates_title,
            TypeDocumentationParts::SEE_ALSO => self.see_also_title,
            _ => panic!("{part:?} has no heading"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories::fixture;

    #[test]
    fn names_by_symbol() {
        let fixture = fixture();
        let resources = DocumentationResources::default();
        let registry = &fixture.registry;

        assert_eq!(resources.get_name(registry, fixture.constructor), "Constructor");
        assert_eq!(resources.get_name(registry, fixture.indexer), "Indexer");
        assert_eq!(resources.get_plural_name(registry, fixture.indexer), "Properties");
        assert_eq!(resources.get_name(registry, fixture.addition), "Operator");
        assert_eq!(resources.get_name(registry, fixture.explicit_read), "Method");
        assert_eq!(resources.get_plural_name(registry, fixture.reader), "Interfaces");
        assert_eq!(resources.type_heading(TypeDocumentationParts::EVENTS), "Events");
    }

    #[test]
    #[should_panic(expected = "has no heading")]
    fn content_has_no_heading() {
        let _ = DocumentationResources::ENGLISH.root_heading(RootDocumentationParts::CONTENT);
    }
}
