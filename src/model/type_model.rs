use std::sync::OnceLock;

use crate::{
    filter::SymbolFilterOptions,
    parts::TypeDocumentationParts,
    symbols::{MethodKind, SpecialType, SymbolId, SymbolKind, SymbolRegistry, TypeKind, TypeRef},
};

/// The documented members of one named type
///
/// Member lists are filtered with the model's [`SymbolFilterOptions`] and computed once.
/// Nested types are only reported for classes and structs; member tables are empty for enums
/// and delegates, except for the enum values returned by [`TypeDocumentationModel::fields`].
pub struct TypeDocumentationModel<'a> {
    registry: &'a SymbolRegistry,
    symbol: SymbolId,
    filter: SymbolFilterOptions,
    members: OnceLock<Vec<SymbolId>>,
    inherited: OnceLock<Vec<SymbolId>>,
}

impl std::fmt::Debug for TypeDocumentationModel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeDocumentationModel")
            .field("symbol", &self.symbol)
            .field("name", &self.registry.qualified_metadata_name(self.symbol))
            .finish_non_exhaustive()
    }
}

impl<'a> TypeDocumentationModel<'a> {
    /// Creates the model of `symbol`
    ///
    /// # Panics
    /// Panics if `symbol` is not a named type.
    #[must_use]
    pub fn new(registry: &'a SymbolRegistry, symbol: SymbolId, filter: SymbolFilterOptions) -> Self {
        assert!(
            registry.get(symbol).kind() == SymbolKind::NamedType,
            "{symbol} is not a named type"
        );

        TypeDocumentationModel {
            registry,
            symbol,
            filter,
            members: OnceLock::new(),
            inherited: OnceLock::new(),
        }
    }

    /// The documented type
    #[must_use]
    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    /// The registry the type lives in
    #[must_use]
    pub fn registry(&self) -> &'a SymbolRegistry {
        self.registry
    }

    /// Kind of the documented type
    #[must_use]
    pub fn type_kind(&self) -> TypeKind {
        self.registry
            .get(self.symbol)
            .type_kind()
            .unwrap_or(TypeKind::Class)
    }

    /// Namespace the type is declared in
    #[must_use]
    pub fn containing_namespace(&self) -> Option<SymbolId> {
        self.registry.containing_namespace(self.symbol)
    }

    /// Assembly the type is declared in
    #[must_use]
    pub fn containing_assembly(&self) -> Option<SymbolId> {
        self.registry.containing_assembly(self.symbol)
    }

    /// `true` for static classes
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.registry.is_static_class(self.symbol)
    }

    /// `true` when the type carries `[Obsolete]`
    #[must_use]
    pub fn is_obsolete(&self) -> bool {
        self.registry
            .has_attribute(self.symbol, "System.ObsoleteAttribute")
    }

    /// Type parameters of the type
    #[must_use]
    pub fn type_parameters(&self) -> &'a [SymbolId] {
        self.registry.get(self.symbol).type_parameters()
    }

    /// Parameters of a delegate's `Invoke` method, empty for other types
    #[must_use]
    pub fn parameters(&self) -> &'a [SymbolId] {
        match self.delegate_invoke() {
            Some(invoke) => self.registry.get(invoke).parameters(),
            None => &[],
        }
    }

    /// Return type of a delegate
    #[must_use]
    pub fn return_type(&self) -> Option<&'a TypeRef> {
        self.delegate_invoke()
            .and_then(|invoke| self.registry.get(invoke).as_method())
            .map(|method| &method.return_type)
    }

    fn delegate_invoke(&self) -> Option<SymbolId> {
        self.registry
            .type_data(self.symbol)
            .and_then(|data| data.delegate_invoke)
    }

    /// Documented members declared by the type, nested types included
    pub fn members(&self) -> &[SymbolId] {
        self.members.get_or_init(|| {
            self.registry
                .members(self.symbol)
                .iter()
                .copied()
                .filter(|member| self.filter.is_match(self.registry, *member))
                .collect()
        })
    }

    /// Documented members including the ones inherited from base types and interfaces
    ///
    /// Static classes inherit nothing. Nested types are never inherited.
    pub fn members_including_inherited(&self) -> &[SymbolId] {
        if self.is_static() {
            return self.members();
        }

        self.inherited.get_or_init(|| {
            let mut members = self.registry.members_including_inherited(self.symbol, |member| {
                self.filter.is_match(self.registry, member)
            });
            members.extend(
                self.members()
                    .iter()
                    .copied()
                    .filter(|member| self.is_kind(*member, SymbolKind::NamedType)),
            );
            members
        })
    }

    fn select(&self, include_inherited: bool) -> &[SymbolId] {
        if include_inherited {
            self.members_including_inherited()
        } else {
            self.members()
        }
    }

    fn is_kind(&self, member: SymbolId, kind: SymbolKind) -> bool {
        self.registry.get(member).kind() == kind
    }

    fn has_members(&self) -> bool {
        !matches!(self.type_kind(), TypeKind::Delegate | TypeKind::Enum)
    }

    fn has_nested_types(&self) -> bool {
        matches!(self.type_kind(), TypeKind::Class | TypeKind::Struct)
    }

    /// Instance constructors; the implicit parameterless constructor of a struct is skipped
    #[must_use]
    pub fn constructors(&self) -> Vec<SymbolId> {
        if !self.has_members() {
            return Vec::new();
        }

        let is_struct = self.type_kind() == TypeKind::Struct;
        self.members()
            .iter()
            .copied()
            .filter(|member| {
                let symbol = self.registry.get(*member);
                symbol.method_kind() == Some(MethodKind::Constructor)
                    && (!is_struct || !symbol.parameters().is_empty())
            })
            .collect()
    }

    /// Fields and constants, or the values of an enum
    #[must_use]
    pub fn fields(&self, include_inherited: bool) -> Vec<SymbolId> {
        if self.type_kind() == TypeKind::Delegate {
            return Vec::new();
        }

        self.select(include_inherited)
            .iter()
            .copied()
            .filter(|member| self.is_kind(*member, SymbolKind::Field))
            .collect()
    }

    /// Indexers
    #[must_use]
    pub fn indexers(&self, include_inherited: bool) -> Vec<SymbolId> {
        self.properties_where(include_inherited, true)
    }

    /// Properties other than indexers
    #[must_use]
    pub fn properties(&self, include_inherited: bool) -> Vec<SymbolId> {
        self.properties_where(include_inherited, false)
    }

    fn properties_where(&self, include_inherited: bool, indexer: bool) -> Vec<SymbolId> {
        if !self.has_members() {
            return Vec::new();
        }

        self.select(include_inherited)
            .iter()
            .copied()
            .filter(|member| {
                let symbol = self.registry.get(*member);
                symbol.kind() == SymbolKind::Property && symbol.is_indexer() == indexer
            })
            .collect()
    }

    /// Ordinary methods
    #[must_use]
    pub fn methods(&self, include_inherited: bool) -> Vec<SymbolId> {
        self.methods_where(include_inherited, |kind| kind == MethodKind::Ordinary)
    }

    /// User-defined operators and conversions
    #[must_use]
    pub fn operators(&self, include_inherited: bool) -> Vec<SymbolId> {
        self.methods_where(include_inherited, |kind| {
            matches!(kind, MethodKind::UserDefinedOperator | MethodKind::Conversion)
        })
    }

    fn methods_where(&self, include_inherited: bool, predicate: impl Fn(MethodKind) -> bool) -> Vec<SymbolId> {
        if !self.has_members() {
            return Vec::new();
        }

        self.select(include_inherited)
            .iter()
            .copied()
            .filter(|member| self.registry.get(*member).method_kind().is_some_and(&predicate))
            .collect()
    }

    /// Events
    #[must_use]
    pub fn events(&self, include_inherited: bool) -> Vec<SymbolId> {
        if !self.has_members() {
            return Vec::new();
        }

        self.select(include_inherited)
            .iter()
            .copied()
            .filter(|member| self.is_kind(*member, SymbolKind::Event))
            .collect()
    }

    /// Nested classes
    #[must_use]
    pub fn classes(&self) -> Vec<SymbolId> {
        self.nested(TypeKind::Class)
    }

    /// Nested structs
    #[must_use]
    pub fn structs(&self) -> Vec<SymbolId> {
        self.nested(TypeKind::Struct)
    }

    /// Nested interfaces
    #[must_use]
    pub fn interfaces(&self) -> Vec<SymbolId> {
        self.nested(TypeKind::Interface)
    }

    /// Nested enums
    #[must_use]
    pub fn enums(&self) -> Vec<SymbolId> {
        self.nested(TypeKind::Enum)
    }

    /// Nested delegates
    #[must_use]
    pub fn delegates(&self) -> Vec<SymbolId> {
        self.nested(TypeKind::Delegate)
    }

    /// Nested types of one kind
    #[must_use]
    pub fn nested(&self, kind: TypeKind) -> Vec<SymbolId> {
        if !self.has_nested_types() {
            return Vec::new();
        }

        self.members()
            .iter()
            .copied()
            .filter(|member| self.registry.get(*member).is_type_kind(kind))
            .collect()
    }

    /// Members that implement an interface member explicitly
    ///
    /// These are private by declaration, so the list is taken from all declared members rather
    /// than the filtered ones. Accessors of explicitly implemented indexers are skipped in
    /// favour of the indexer itself.
    #[must_use]
    pub fn explicit_interface_implementations(&self) -> Vec<SymbolId> {
        if !self.has_members() {
            return Vec::new();
        }

        self.registry
            .members(self.symbol)
            .iter()
            .copied()
            .filter(|member| {
                let symbol = self.registry.get(*member);
                let Some(implemented) = symbol.first_explicit_interface_implementation() else {
                    return false;
                };
                match symbol.kind() {
                    SymbolKind::Event | SymbolKind::Property => true,
                    SymbolKind::Method => {
                        if symbol.method_kind() != Some(MethodKind::ExplicitInterfaceImplementation) {
                            return false;
                        }
                        let implemented_kind = self.registry.get(implemented).method_kind();
                        let indexer_getter = symbol.name.ends_with(".get_Item")
                            && implemented_kind == Some(MethodKind::PropertyGet);
                        let indexer_setter = symbol.name.ends_with(".set_Item")
                            && implemented_kind == Some(MethodKind::PropertySet);
                        !(indexer_getter || indexer_setter)
                    }
                    _ => false,
                }
            })
            .collect()
    }

    /// All interfaces the type implements
    ///
    /// Static classes, enums and delegates report none. With `omit_ienumerable`, the
    /// non-generic `IEnumerable` is dropped when `IEnumerable<T>` is implemented as well.
    #[must_use]
    pub fn implemented_interfaces(&self, omit_ienumerable: bool) -> Vec<TypeRef> {
        if self.is_static() || !self.has_members() {
            return Vec::new();
        }

        let interfaces = self.registry.all_interfaces(self.symbol);
        let has_generic = interfaces
            .iter()
            .any(|interface| self.registry.special_type_of(interface) == SpecialType::IEnumerableT);

        if omit_ienumerable && has_generic {
            interfaces
                .into_iter()
                .filter(|interface| self.registry.special_type_of(interface) != SpecialType::IEnumerable)
                .collect()
        } else {
            interfaces
        }
    }

    /// Members that get their own page, in table order
    ///
    /// The order is constructors, fields, indexers, properties, methods, operators, events and
    /// explicit interface implementations; groups whose section is in `ignored` are left out.
    #[must_use]
    pub fn documented_members(&self, ignored: TypeDocumentationParts) -> Vec<SymbolId> {
        if !self.has_members() {
            return Vec::new();
        }

        let enabled = |part: TypeDocumentationParts| !ignored.intersects(part);
        let mut members = Vec::new();

        if enabled(TypeDocumentationParts::CONSTRUCTORS) {
            members.extend(self.constructors());
        }
        if enabled(TypeDocumentationParts::FIELDS) {
            members.extend(self.fields(false));
        }
        if enabled(TypeDocumentationParts::INDEXERS) {
            members.extend(self.indexers(false));
        }
        if enabled(TypeDocumentationParts::PROPERTIES) {
            members.extend(self.properties(false));
        }
        if enabled(TypeDocumentationParts::METHODS) {
            members.extend(self.methods(false));
        }
        if enabled(TypeDocumentationParts::OPERATORS) {
            members.extend(self.operators(false));
        }
        if enabled(TypeDocumentationParts::EVENTS) {
            members.extend(self.events(false));
        }
        if enabled(TypeDocumentationParts::EXPLICIT_INTERFACE_IMPLEMENTATIONS) {
            members.extend(self.explicit_interface_implementations());
        }

        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories::fixture;

    #[test]
    fn member_groups() {
        let fixture = fixture();
        let model = TypeDocumentationModel::new(
            &fixture.registry,
            fixture.repository,
            SymbolFilterOptions::default(),
        );

        assert_eq!(model.constructors(), vec![fixture.constructor]);
        assert_eq!(model.fields(false), vec![fixture.max_size]);
        assert_eq!(model.properties(false), vec![fixture.count]);
        assert_eq!(model.indexers(false), vec![fixture.indexer]);
        assert_eq!(
            model.methods(false),
            vec![fixture.find, fixture.save, fixture.save_overwrite, fixture.dispose]
        );
        assert_eq!(model.events(false), vec![fixture.changed]);
        assert_eq!(model.explicit_interface_implementations(), vec![fixture.explicit_read]);
        assert!(model.is_obsolete());
        assert!(model.classes().is_empty());
    }

    #[test]
    fn documented_members_follow_table_order() {
        let fixture = fixture();
        let model = TypeDocumentationModel::new(
            &fixture.registry,
            fixture.repository,
            SymbolFilterOptions::default(),
        );

        let members = model.documented_members(TypeDocumentationParts::empty());
        assert_eq!(members.first(), Some(&fixture.constructor));
        assert_eq!(members.last(), Some(&fixture.explicit_read));
        assert!(!members.contains(&fixture.secret));

        let members = model.documented_members(
            TypeDocumentationParts::METHODS | TypeDocumentationParts::EXPLICIT_INTERFACE_IMPLEMENTATIONS,
        );
        assert!(!members.contains(&fixture.find));
        assert!(!members.contains(&fixture.explicit_read));
    }

    #[test]
    fn enums_and_delegates() {
        let fixture = fixture();
        let registry = &fixture.registry;

        let color = TypeDocumentationModel::new(registry, fixture.color, SymbolFilterOptions::default());
        assert_eq!(color.fields(false).len(), 4);
        assert!(color.documented_members(TypeDocumentationParts::empty()).is_empty());
        assert!(color.implemented_interfaces(false).is_empty());

        let callback = TypeDocumentationModel::new(registry, fixture.callback, SymbolFilterOptions::default());
        assert!(callback.fields(false).is_empty());
        assert_eq!(callback.parameters().len(), 1);
        assert!(callback.return_type().is_some());
    }

    #[test]
    fn omits_non_generic_enumerable() {
        let fixture = fixture();
        let registry = &fixture.registry;
        let model = TypeDocumentationModel::new(registry, fixture.collection, SymbolFilterOptions::default());

        let all = model.implemented_interfaces(false);
        let omitted = model.implemented_interfaces(true);
        assert_eq!(all.len(), omitted.len() + 1);
        assert!(omitted
            .iter()
            .all(|interface| registry.special_type_of(interface) != SpecialType::IEnumerable));
    }
}
