//! Symbol arena and navigation helpers.

use std::collections::{HashMap, HashSet};

use strum::IntoEnumIterator;

use super::{
    Accessibility, AssemblyData, AttributeData, Modifiers, NamespaceData, SpecialType, Symbol,
    SymbolData, SymbolId, SymbolKind, TypeData, TypeKind, TypeParameterConstraints,
    TypeParameterData, TypeRef, Variance,
};
use crate::{Error, Result};

/// Name of the assembly that holds the well-known `System` types
pub const CORE_LIBRARY_NAME: &str = "System.Private.CoreLib";

/// Additional non-special core library types as `(namespace, name, kind, base)`
const CORE_LIBRARY_TYPES: &[(&str, &str, TypeKind, Option<&str>)] = &[
    ("System", "Attribute", TypeKind::Class, Some("System.Object")),
    ("System", "Type", TypeKind::Class, Some("System.Object")),
    ("System", "EventArgs", TypeKind::Class, Some("System.Object")),
    ("System", "EventHandler", TypeKind::Delegate, Some("System.MulticastDelegate")),
    ("System", "IDisposable", TypeKind::Interface, None),
    ("System", "FlagsAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System", "ObsoleteAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System", "AttributeUsageAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System", "CLSCompliantAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System.Diagnostics", "DebuggerStepThroughAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System.Diagnostics", "DebuggerDisplayAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System.Diagnostics", "ConditionalAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System.Runtime.CompilerServices", "CompilerGeneratedAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System.Runtime.CompilerServices", "ExtensionAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System.Runtime.CompilerServices", "IsReadOnlyAttribute", TypeKind::Class, Some("System.Attribute")),
    ("System.Reflection", "DefaultMemberAttribute", TypeKind::Class, Some("System.Attribute")),
];

/// Owner of every symbol of a documentation run
///
/// The registry is populated once (through the builders in [`super::builder`] or by a host
/// loader) and is read-only afterwards. It always contains a core library assembly named
/// [`CORE_LIBRARY_NAME`] with the well-known `System` types, which is what makes base types,
/// keyword aliases and `[Flags]` detection work without any external input.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    symbols: Vec<Symbol>,
    assemblies: Vec<SymbolId>,
    core_assembly: SymbolId,
    special_types: HashMap<SpecialType, SymbolId>,
    types_by_name: HashMap<String, SymbolId>,
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolRegistry {
    /// Creates a registry that contains only the core library
    #[must_use]
    pub fn new() -> Self {
        let mut registry = SymbolRegistry {
            symbols: Vec::new(),
            assemblies: Vec::new(),
            core_assembly: SymbolId::new(0),
            special_types: HashMap::new(),
            types_by_name: HashMap::new(),
        };

        registry.core_assembly = registry.add_assembly(CORE_LIBRARY_NAME, "4.0.0.0");
        registry.create_core_library();
        registry
    }

    fn create_core_library(&mut self) {
        let core = self.core_assembly;

        for special in SpecialType::iter() {
            let Some((namespace, name, arity)) = special.definition() else {
                continue;
            };

            let type_kind = match special {
                SpecialType::Object
                | SpecialType::String
                | SpecialType::Enum
                | SpecialType::ValueType
                | SpecialType::Delegate
                | SpecialType::MulticastDelegate => TypeKind::Class,
                SpecialType::IEnumerable | SpecialType::IEnumerableT => TypeKind::Interface,
                _ => TypeKind::Struct,
            };

            let modifiers = match special {
                SpecialType::Enum
                | SpecialType::ValueType
                | SpecialType::Delegate
                | SpecialType::MulticastDelegate => Modifiers::ABSTRACT,
                SpecialType::String => Modifiers::SEALED,
                _ => Modifiers::empty(),
            };

            let id = self.add_core_type(core, namespace, name, type_kind, modifiers, special);

            for ordinal in 0..arity {
                let (variance, constraints) = match special {
                    SpecialType::Nullable => (Variance::None, TypeParameterConstraints::VALUE_TYPE),
                    _ => (Variance::Out, TypeParameterConstraints::empty()),
                };

                let type_parameter = self.push(
                    "T",
                    Some(id),
                    SymbolData::TypeParameter(TypeParameterData {
                        ordinal,
                        variance,
                        constraint_types: Vec::new(),
                        constraints,
                        is_method_type_parameter: false,
                    }),
                );

                if let SymbolData::NamedType(data) = &mut self.get_mut(id).data {
                    data.type_parameters.push(type_parameter);
                }
            }

            self.special_types.insert(special, id);
        }

        for (namespace, name, type_kind, _) in CORE_LIBRARY_TYPES {
            let modifiers = match *name {
                "Attribute" | "Type" => Modifiers::ABSTRACT,
                "EventArgs" | "IDisposable" | "EventHandler" => Modifiers::empty(),
                _ => Modifiers::SEALED,
            };

            self.add_core_type(core, namespace, name, *type_kind, modifiers, SpecialType::None);
        }

        let object = self.special(SpecialType::Object);
        let value_type = self.special(SpecialType::ValueType);
        let delegate = self.special(SpecialType::Delegate);

        let mut bases: Vec<(SymbolId, TypeRef)> = Vec::new();
        for (special, id) in &self.special_types {
            let base = match special {
                SpecialType::Object | SpecialType::IEnumerable | SpecialType::IEnumerableT => None,
                SpecialType::Enum => Some(value_type.clone()),
                SpecialType::MulticastDelegate => Some(delegate.clone()),
                SpecialType::ValueType | SpecialType::Delegate | SpecialType::String => {
                    Some(object.clone())
                }
                _ => Some(value_type.clone()),
            };

            if let Some(base) = base {
                bases.push((*id, base));
            }
        }

        for (namespace, name, _, base) in CORE_LIBRARY_TYPES {
            let full_name = format!("{namespace}.{name}");
            if let (Some(id), Some(base)) = (self.find_type(&full_name), base) {
                if let Some(base_id) = self.find_type(base) {
                    bases.push((id, TypeRef::named(base_id)));
                }
            }
        }

        if let Some(event_args) = self.find_type("System.EventArgs") {
            // EventHandler(object sender, EventArgs e)
            if let Some(handler) = self.find_type("System.EventHandler") {
                let sender = self.special(SpecialType::Object);
                let void = self.special(SpecialType::Void);
                let invoke = self.push(
                    "Invoke",
                    Some(handler),
                    SymbolData::Method(super::MethodData {
                        method_kind: super::MethodKind::DelegateInvoke,
                        type_parameters: Vec::new(),
                        parameters: Vec::new(),
                        return_type: void,
                        ref_kind: super::RefKind::None,
                        explicit_interface_implementations: Vec::new(),
                        overridden: None,
                        associated: None,
                        is_extension: false,
                    }),
                );
                self.get_mut(invoke).accessibility = Accessibility::Public;
                for (ordinal, (name, ty)) in [("sender", sender), ("e", TypeRef::named(event_args))]
                    .into_iter()
                    .enumerate()
                {
                    let parameter = self.push(
                        name,
                        Some(invoke),
                        SymbolData::Parameter(super::ParameterData {
                            ty,
                            ref_kind: super::RefKind::None,
                            is_params: false,
                            is_this: false,
                            default_value: None,
                            ordinal,
                        }),
                    );
                    if let SymbolData::Method(data) = &mut self.get_mut(invoke).data {
                        data.parameters.push(parameter);
                    }
                }
                if let SymbolData::NamedType(data) = &mut self.get_mut(handler).data {
                    data.delegate_invoke = Some(invoke);
                }
            }
        }

        if let (Some(enumerable_t), Some(enumerable)) = (
            self.special_types.get(&SpecialType::IEnumerableT).copied(),
            self.special_types.get(&SpecialType::IEnumerable).copied(),
        ) {
            if let SymbolData::NamedType(data) = &mut self.get_mut(enumerable_t).data {
                data.interfaces.push(TypeRef::named(enumerable));
            }
        }

        for (id, base) in bases {
            if let SymbolData::NamedType(data) = &mut self.get_mut(id).data {
                data.base_type = Some(base);
            }
        }
    }

    fn add_core_type(
        &mut self,
        assembly: SymbolId,
        namespace: &str,
        name: &str,
        type_kind: TypeKind,
        modifiers: Modifiers,
        special_type: SpecialType,
    ) -> SymbolId {
        let namespace = self.namespace_in(assembly, namespace);
        let id = self.push(
            name,
            Some(namespace),
            SymbolData::NamedType(TypeData {
                type_kind,
                type_parameters: Vec::new(),
                base_type: None,
                interfaces: Vec::new(),
                members: Vec::new(),
                enum_underlying_type: None,
                delegate_invoke: None,
                special_type,
            }),
        );

        let symbol = self.get_mut(id);
        symbol.accessibility = Accessibility::Public;
        symbol.modifiers = modifiers;

        self.add_member(namespace, id);
        id
    }

    /// Appends a new symbol to the arena and returns its id
    ///
    /// The containing assembly is inherited from `containing`. The symbol is not registered as
    /// a member of its container, use [`SymbolRegistry::add_member`] for that.
    pub(crate) fn push(
        &mut self,
        name: &str,
        containing: Option<SymbolId>,
        data: SymbolData,
    ) -> SymbolId {
        let id = SymbolId::new(self.symbols.len());
        let assembly = match containing {
            Some(parent) => match self.get(parent).kind() {
                SymbolKind::Assembly => Some(parent),
                _ => self.get(parent).assembly,
            },
            None => None,
        };

        self.symbols.push(Symbol {
            id,
            name: name.to_string(),
            accessibility: Accessibility::NotApplicable,
            modifiers: Modifiers::empty(),
            containing,
            assembly,
            attributes: Vec::new(),
            documentation: None,
            is_implicit: false,
            data,
        });

        id
    }

    /// Registers `member` in the member list of a namespace or named type
    pub(crate) fn add_member(&mut self, container: SymbolId, member: SymbolId) {
        let is_type = self.get(member).kind() == SymbolKind::NamedType;

        match &mut self.get_mut(container).data {
            SymbolData::Namespace(data) => data.members.push(member),
            SymbolData::NamedType(data) => data.members.push(member),
            _ => return,
        }

        if is_type {
            let name = self.qualified_metadata_name(member);
            self.types_by_name.entry(name).or_insert(member);
        }
    }

    /// Adds a new assembly with an empty global namespace
    pub fn add_assembly(&mut self, name: &str, version: &str) -> SymbolId {
        let assembly = SymbolId::new(self.symbols.len());
        let global = SymbolId::new(self.symbols.len() + 1);

        self.symbols.push(Symbol {
            id: assembly,
            name: name.to_string(),
            accessibility: Accessibility::NotApplicable,
            modifiers: Modifiers::empty(),
            containing: None,
            assembly: None,
            attributes: Vec::new(),
            documentation: None,
            is_implicit: false,
            data: SymbolData::Assembly(AssemblyData {
                version: version.to_string(),
                location: None,
                global_namespace: global,
            }),
        });

        self.symbols.push(Symbol {
            id: global,
            name: String::new(),
            accessibility: Accessibility::NotApplicable,
            modifiers: Modifiers::empty(),
            containing: None,
            assembly: Some(assembly),
            attributes: Vec::new(),
            documentation: None,
            is_implicit: false,
            data: SymbolData::Namespace(NamespaceData {
                members: Vec::new(),
                is_global: true,
            }),
        });

        self.assemblies.push(assembly);
        assembly
    }

    /// Records the path of the compiled file of `assembly`
    ///
    /// The documentation model looks for `<name>.xml` next to this path.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if `assembly` is not an assembly.
    pub fn set_assembly_location(&mut self, assembly: SymbolId, path: impl Into<std::path::PathBuf>) -> Result<()> {
        match &mut self.get_mut(assembly).data {
            SymbolData::Assembly(data) => {
                data.location = Some(path.into());
                Ok(())
            }
            _ => Err(Error::InvalidSymbol(format!("{assembly} is not an assembly"))),
        }
    }

    /// Returns (creating on demand) the namespace with the dotted `name` inside `assembly`
    ///
    /// An empty name returns the global namespace.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if `assembly` is not an assembly.
    pub fn namespace(&mut self, assembly: SymbolId, name: &str) -> Result<SymbolId> {
        if self.get(assembly).as_assembly().is_none() {
            return Err(Error::InvalidSymbol(format!(
                "'{}' is not an assembly",
                self.get(assembly).name
            )));
        }

        Ok(self.namespace_in(assembly, name))
    }

    fn namespace_in(&mut self, assembly: SymbolId, name: &str) -> SymbolId {
        let mut current = match self.get(assembly).as_assembly() {
            Some(data) => data.global_namespace,
            None => assembly,
        };

        for part in name.split('.').filter(|part| !part.is_empty()) {
            let existing = self.members(current).iter().copied().find(|member| {
                let symbol = self.get(*member);
                symbol.kind() == SymbolKind::Namespace && symbol.name == part
            });

            current = match existing {
                Some(namespace) => namespace,
                None => {
                    let namespace = self.push(
                        part,
                        Some(current),
                        SymbolData::Namespace(NamespaceData::default()),
                    );
                    self.add_member(current, namespace);
                    namespace
                }
            };
        }

        current
    }

    /// Returns the symbol with the given id
    ///
    /// # Panics
    /// Panics if `id` was not issued by this registry.
    #[must_use]
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    /// Returns the symbol with the given id for modification
    ///
    /// # Panics
    /// Panics if `id` was not issued by this registry.
    pub fn get_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }

    /// Returns the number of symbols, core library included
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the registry holds no symbols (never the case after [`Self::new`])
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates all symbols in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Returns all assemblies, core library first
    #[must_use]
    pub fn assemblies(&self) -> &[SymbolId] {
        &self.assemblies
    }

    /// Returns the core library assembly
    #[must_use]
    pub fn core_assembly(&self) -> SymbolId {
        self.core_assembly
    }

    /// Returns the definition of a well-known type
    ///
    /// # Panics
    /// Panics for [`SpecialType::None`], which has no definition.
    #[must_use]
    pub fn special_type(&self, special: SpecialType) -> SymbolId {
        match self.special_types.get(&special) {
            Some(id) => *id,
            None => panic!("{special} has no core library definition"),
        }
    }

    /// Returns a type reference to a well-known, non-generic type
    ///
    /// # Panics
    /// Panics for [`SpecialType::None`].
    #[must_use]
    pub fn special(&self, special: SpecialType) -> TypeRef {
        TypeRef::named(self.special_type(special))
    }

    /// Returns the special type marker of a type reference
    #[must_use]
    pub fn special_type_of(&self, ty: &TypeRef) -> SpecialType {
        ty.definition()
            .and_then(|id| self.get(id).as_type())
            .map_or(SpecialType::None, |data| data.special_type)
    }

    /// Looks up a named type by its full metadata name (`Namespace.Outer+Inner`1`)
    #[must_use]
    pub fn find_type(&self, metadata_name: &str) -> Option<SymbolId> {
        self.types_by_name.get(metadata_name).copied()
    }

    /// Returns the global namespace of an assembly
    #[must_use]
    pub fn global_namespace(&self, assembly: SymbolId) -> Option<SymbolId> {
        self.get(assembly).as_assembly().map(|data| data.global_namespace)
    }

    /// Returns the members of a namespace or named type
    #[must_use]
    pub fn members(&self, container: SymbolId) -> &[SymbolId] {
        match &self.get(container).data {
            SymbolData::Namespace(data) => &data.members,
            SymbolData::NamedType(data) => &data.members,
            _ => &[],
        }
    }

    /// Returns the type a member or nested type is declared in
    #[must_use]
    pub fn containing_type(&self, id: SymbolId) -> Option<SymbolId> {
        self.get(id)
            .containing
            .filter(|parent| self.get(*parent).kind() == SymbolKind::NamedType)
    }

    /// Returns the closest namespace containing `id`
    #[must_use]
    pub fn containing_namespace(&self, id: SymbolId) -> Option<SymbolId> {
        let mut current = self.get(id).containing;

        while let Some(parent) = current {
            if self.get(parent).kind() == SymbolKind::Namespace {
                return Some(parent);
            }
            current = self.get(parent).containing;
        }

        None
    }

    /// Returns the assembly `id` is declared in
    #[must_use]
    pub fn containing_assembly(&self, id: SymbolId) -> Option<SymbolId> {
        self.get(id).assembly
    }

    /// Returns the chain of types containing `id`, outermost first
    #[must_use]
    pub fn containing_types(&self, id: SymbolId) -> Vec<SymbolId> {
        let mut types = Vec::new();
        let mut current = self.containing_type(id);

        while let Some(ty) = current {
            types.push(ty);
            current = self.containing_type(ty);
        }

        types.reverse();
        types
    }

    /// Returns the names of a namespace and its parents, outermost first
    ///
    /// The global namespace contributes no name.
    #[must_use]
    pub fn namespace_names(&self, namespace: SymbolId) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = Some(namespace);

        while let Some(id) = current {
            let symbol = self.get(id);
            if symbol.kind() != SymbolKind::Namespace || symbol.is_global_namespace() {
                break;
            }
            names.push(symbol.name.as_str());
            current = symbol.containing;
        }

        names.reverse();
        names
    }

    /// Returns the dotted name of a namespace, empty for the global namespace
    #[must_use]
    pub fn namespace_name(&self, namespace: SymbolId) -> String {
        self.namespace_names(namespace).join(".")
    }

    /// Returns the dotted name of the namespace containing `id`
    #[must_use]
    pub fn containing_namespace_name(&self, id: SymbolId) -> String {
        self.containing_namespace(id)
            .map(|namespace| self.namespace_name(namespace))
            .unwrap_or_default()
    }

    /// Returns `Namespace.Outer+Inner`1` for a named type
    #[must_use]
    pub fn qualified_metadata_name(&self, ty: SymbolId) -> String {
        let mut name = self.containing_namespace_name(ty);

        for (index, outer) in self
            .containing_types(ty)
            .into_iter()
            .chain(std::iter::once(ty))
            .enumerate()
        {
            if index == 0 {
                if !name.is_empty() {
                    name.push('.');
                }
            } else {
                name.push('+');
            }
            name.push_str(&self.get(outer).metadata_name());
        }

        name
    }

    /// Returns the named type payload of `id`
    #[must_use]
    pub fn type_data(&self, id: SymbolId) -> Option<&TypeData> {
        self.get(id).as_type()
    }

    /// Returns the definition of the base type of `ty`
    #[must_use]
    pub fn base_type(&self, ty: SymbolId) -> Option<SymbolId> {
        self.type_data(ty)
            .and_then(|data| data.base_type.as_ref())
            .and_then(TypeRef::definition)
    }

    /// Returns the base type chain of `ty`, nearest first
    #[must_use]
    pub fn base_types(&self, ty: SymbolId) -> Vec<SymbolId> {
        let mut bases = Vec::new();
        let mut current = self.base_type(ty);

        while let Some(base) = current {
            if bases.contains(&base) {
                break;
            }
            bases.push(base);
            current = self.base_type(base);
        }

        bases
    }

    /// Returns the directly implemented interfaces of `ty`
    #[must_use]
    pub fn interfaces(&self, ty: SymbolId) -> &[TypeRef] {
        self.type_data(ty).map_or(&[], |data| data.interfaces.as_slice())
    }

    /// Returns every interface `ty` implements, directly or through base types and base
    /// interfaces
    ///
    /// The order is declaration order with each interface followed by the interfaces it
    /// inherits, then the interfaces of the base type. Type arguments of constructed interfaces
    /// are substituted into the interfaces they inherit. Duplicates are removed.
    #[must_use]
    pub fn all_interfaces(&self, ty: SymbolId) -> Vec<TypeRef> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();
        let mut visited_types = HashSet::new();

        let mut current = Some(ty);
        while let Some(id) = current {
            if !visited_types.insert(id) {
                break;
            }
            for interface in self.interfaces(id) {
                self.collect_interfaces(interface, &mut result, &mut seen, 0);
            }
            current = self.base_type(id);
        }

        result
    }

    fn collect_interfaces(
        &self,
        interface: &TypeRef,
        result: &mut Vec<TypeRef>,
        seen: &mut HashSet<TypeRef>,
        depth: usize,
    ) {
        if depth > 64 || !seen.insert(interface.clone()) {
            return;
        }

        result.push(interface.clone());

        let Some(definition) = interface.definition() else {
            return;
        };

        let parameters = self.get(definition).type_parameters().to_vec();
        let arguments = interface.type_arguments();

        for inherited in self.interfaces(definition) {
            let substituted = self.substitute(inherited, &parameters, arguments);
            self.collect_interfaces(&substituted, result, seen, depth + 1);
        }
    }

    /// Replaces type parameters in `ty` with the matching type arguments
    #[must_use]
    pub fn substitute(
        &self,
        ty: &TypeRef,
        parameters: &[SymbolId],
        arguments: &[TypeRef],
    ) -> TypeRef {
        if arguments.is_empty() {
            return ty.clone();
        }

        match ty {
            TypeRef::TypeParameter(id) => parameters
                .iter()
                .position(|parameter| parameter == id)
                .and_then(|index| arguments.get(index))
                .cloned()
                .unwrap_or_else(|| ty.clone()),
            TypeRef::Named {
                definition,
                type_arguments,
            } => TypeRef::Named {
                definition: *definition,
                type_arguments: type_arguments
                    .iter()
                    .map(|argument| self.substitute(argument, parameters, arguments))
                    .collect(),
            },
            TypeRef::Array { element, rank } => TypeRef::Array {
                element: Box::new(self.substitute(element, parameters, arguments)),
                rank: *rank,
            },
            TypeRef::Pointer(element) => {
                TypeRef::Pointer(Box::new(self.substitute(element, parameters, arguments)))
            }
        }
    }

    /// Returns `true` if `ty` derives from `base`, or implements it when
    /// `include_interfaces` is set
    #[must_use]
    pub fn inherits_from(&self, ty: SymbolId, base: SymbolId, include_interfaces: bool) -> bool {
        if self.base_types(ty).contains(&base) {
            return true;
        }

        include_interfaces
            && self
                .all_interfaces(ty)
                .iter()
                .any(|interface| interface.definition() == Some(base))
    }

    /// Returns `true` for `static class` declarations
    #[must_use]
    pub fn is_static_class(&self, ty: SymbolId) -> bool {
        let symbol = self.get(ty);
        symbol.is_type_kind(TypeKind::Class) && symbol.is_static()
    }

    /// Returns the accessibility of `id` as seen from outside its assembly
    ///
    /// This is the least accessible level along the containing-type chain.
    #[must_use]
    pub fn effective_accessibility(&self, id: SymbolId) -> Accessibility {
        let symbol = self.get(id);
        let mut accessibility = symbol.accessibility;
        let mut current = symbol.containing;
        while let Some(container) = current {
            let container = self.get(container);
            if container.kind() != SymbolKind::NamedType {
                break;
            }
            accessibility = accessibility.min(container.accessibility);
            current = container.containing;
        }
        accessibility
    }

    /// Returns `true` if `ty` is a struct, enum, or a type parameter constrained to one
    #[must_use]
    pub fn is_value_type(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Named { definition, .. } => matches!(
                self.get(*definition).type_kind(),
                Some(TypeKind::Struct | TypeKind::Enum)
            ),
            TypeRef::TypeParameter(id) => self.get(*id).as_type_parameter().is_some_and(|data| {
                data.constraints.intersects(
                    TypeParameterConstraints::VALUE_TYPE | TypeParameterConstraints::UNMANAGED,
                )
            }),
            TypeRef::Array { .. } | TypeRef::Pointer(_) => false,
        }
    }

    /// Returns `true` if `ty` is known to be a reference type
    #[must_use]
    pub fn is_reference_type(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Named { definition, .. } => matches!(
                self.get(*definition).type_kind(),
                Some(TypeKind::Class | TypeKind::Interface | TypeKind::Delegate)
            ),
            TypeRef::TypeParameter(id) => self.get(*id).as_type_parameter().is_some_and(|data| {
                data.constraints
                    .contains(TypeParameterConstraints::REFERENCE_TYPE)
                    || data.constraint_types.iter().any(|constraint| {
                        constraint.definition().is_some_and(|definition| {
                            self.get(definition).is_type_kind(TypeKind::Class)
                        })
                    })
            }),
            TypeRef::Array { .. } => true,
            TypeRef::Pointer(_) => false,
        }
    }

    /// Returns `true` for `Nullable<T>`
    #[must_use]
    pub fn is_nullable_value_type(&self, ty: &TypeRef) -> bool {
        self.special_type_of(ty) == SpecialType::Nullable
    }

    /// Returns the parameters of a method, indexer or delegate type
    #[must_use]
    pub fn parameters(&self, id: SymbolId) -> &[SymbolId] {
        match self
            .type_data(id)
            .and_then(|data| data.delegate_invoke)
        {
            Some(invoke) => self.get(invoke).parameters(),
            None => self.get(id).parameters(),
        }
    }

    /// Returns the first attribute of `id` whose class has the given full metadata name
    #[must_use]
    pub fn attribute(&self, id: SymbolId, metadata_name: &str) -> Option<&AttributeData> {
        self.get(id)
            .attributes
            .iter()
            .find(|attribute| self.qualified_metadata_name(attribute.attribute_class) == metadata_name)
    }

    /// Returns `true` if `id` has an attribute with the given full metadata name
    #[must_use]
    pub fn has_attribute(&self, id: SymbolId, metadata_name: &str) -> bool {
        self.attribute(id, metadata_name).is_some()
    }

    /// Returns `true` for enums marked with `[Flags]`
    #[must_use]
    pub fn is_flags_enum(&self, ty: SymbolId) -> bool {
        self.get(ty).is_type_kind(TypeKind::Enum) && self.has_attribute(ty, "System.FlagsAttribute")
    }

    /// Returns `true` if `id` is declared in the core library
    #[must_use]
    pub fn is_core_library(&self, id: SymbolId) -> bool {
        self.get(id).assembly == Some(self.core_assembly)
    }

    /// Returns the members of `ty` together with the members it inherits
    ///
    /// For classes and structs the base type chain is walked: instance members of base types
    /// are added unless they are overridden further down the chain, and `internal` members of
    /// base types from other assemblies are skipped. Interfaces merge the members of every
    /// interface they inherit. `predicate` filters members at every level.
    #[must_use]
    pub fn members_including_inherited(
        &self,
        ty: SymbolId,
        predicate: impl Fn(SymbolId) -> bool,
    ) -> Vec<SymbolId> {
        let mut result: Vec<SymbolId> = Vec::new();
        let mut seen: HashSet<SymbolId> = HashSet::new();

        let own = self
            .members(ty)
            .iter()
            .copied()
            .filter(|member| self.get(*member).kind() != SymbolKind::NamedType)
            .filter(|member| predicate(*member));

        if self.get(ty).is_type_kind(TypeKind::Interface) {
            for member in own {
                if seen.insert(member) {
                    result.push(member);
                }
            }
            for interface in self.all_interfaces(ty) {
                if let Some(definition) = interface.definition() {
                    for member in self.members(definition) {
                        if self.get(*member).kind() != SymbolKind::NamedType
                            && predicate(*member)
                            && seen.insert(*member)
                        {
                            result.push(*member);
                        }
                    }
                }
            }
            return result;
        }

        let mut overridden: HashSet<SymbolId> = HashSet::new();
        for member in own {
            if let Some(base) = self.get(member).overridden() {
                overridden.insert(base);
            }
            if seen.insert(member) {
                result.push(member);
            }
        }

        let assembly = self.get(ty).assembly;
        for base in self.base_types(ty) {
            let same_assembly = self.get(base).assembly == assembly;

            for member in self.members(base).iter().copied() {
                let symbol = self.get(member);
                if symbol.kind() == SymbolKind::NamedType
                    || symbol.is_static()
                    || !predicate(member)
                    || (symbol.accessibility == Accessibility::Internal && !same_assembly)
                {
                    continue;
                }

                if !overridden.remove(&member) && seen.insert(member) {
                    result.push(member);
                }

                if let Some(base_member) = symbol.overridden() {
                    overridden.insert(base_member);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_library_has_special_types() {
        let registry = SymbolRegistry::new();

        let int = registry.special_type(SpecialType::Int32);
        assert_eq!(registry.get(int).name, "Int32");
        assert_eq!(registry.qualified_metadata_name(int), "System.Int32");
        assert_eq!(
            registry.base_types(int),
            vec![
                registry.special_type(SpecialType::ValueType),
                registry.special_type(SpecialType::Object)
            ]
        );

        let enumerable = registry.special_type(SpecialType::IEnumerableT);
        assert_eq!(
            registry.qualified_metadata_name(enumerable),
            "System.Collections.Generic.IEnumerable`1"
        );
        assert!(registry.find_type("System.FlagsAttribute").is_some());
    }

    #[test]
    fn namespaces_are_created_once() {
        let mut registry = SymbolRegistry::new();
        let assembly = registry.add_assembly("Acme", "1.0.0.0");

        let first = registry.namespace(assembly, "Acme.Widgets").unwrap();
        let second = registry.namespace(assembly, "Acme.Widgets").unwrap();
        assert_eq!(first, second);
        assert_eq!(registry.namespace_name(first), "Acme.Widgets");

        let global = registry.namespace(assembly, "").unwrap();
        assert_eq!(Some(global), registry.global_namespace(assembly));
        assert_eq!(registry.namespace_name(global), "");
    }

    #[test]
    fn namespace_requires_assembly() {
        let mut registry = SymbolRegistry::new();
        let object = registry.special_type(SpecialType::Object);

        assert!(matches!(
            registry.namespace(object, "X"),
            Err(Error::InvalidSymbol(_))
        ));
    }

    #[test]
    fn all_interfaces_include_inherited() {
        let registry = SymbolRegistry::new();
        let enumerable_t = registry.special_type(SpecialType::IEnumerableT);
        let enumerable = registry.special_type(SpecialType::IEnumerable);

        let interfaces = registry.all_interfaces(enumerable_t);
        assert_eq!(interfaces, vec![TypeRef::named(enumerable)]);
    }
}
