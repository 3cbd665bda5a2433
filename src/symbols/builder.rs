//! Fluent builders that populate a [`SymbolRegistry`].
//!
//! Each builder collects the declaration of one symbol and attaches it to a container with
//! `build`, which returns the new [`SymbolId`]. Builders create the implicit parts a compiler
//! would: accessors for properties and events, the `Invoke` method of delegates, constant
//! fields for enum members and type parameter symbols.
//!
//! # Example
//!
//! ```rust
//! use cildoc::symbols::{
//!     PropertyBuilder, SpecialType, SymbolRegistry, TypeBuilder, TypeParameterBuilder,
//! };
//!
//! let mut registry = SymbolRegistry::new();
//! let assembly = registry.add_assembly("Acme", "1.0.0.0");
//! let namespace = registry.namespace(assembly, "Acme")?;
//!
//! let list = TypeBuilder::class("Box")
//!     .public()
//!     .type_parameter(TypeParameterBuilder::new("T").class_constraint())
//!     .build(&mut registry, namespace)?;
//!
//! let int = registry.special(SpecialType::Int32);
//! PropertyBuilder::new("Count", int)
//!     .public()
//!     .getter()
//!     .build(&mut registry, list)?;
//! # Ok::<(), cildoc::Error>(())
//! ```

use super::{
    Accessibility, AttributeData, ConstantValue, EventData, FieldData, MethodData, MethodKind,
    Modifiers, ParameterData, PropertyData, RefKind, SpecialType, SymbolData, SymbolId,
    SymbolKind, SymbolRegistry, TypeData, TypeKind, TypeParameterConstraints, TypeParameterData,
    TypeRef, Variance,
};
use crate::{Error, Result};

macro_rules! accessibility_setters {
    () => {
        /// Declares the symbol `public`
        #[must_use]
        pub fn public(self) -> Self {
            self.accessibility(Accessibility::Public)
        }

        /// Declares the symbol `internal`
        #[must_use]
        pub fn internal(self) -> Self {
            self.accessibility(Accessibility::Internal)
        }

        /// Declares the symbol `protected`
        #[must_use]
        pub fn protected(self) -> Self {
            self.accessibility(Accessibility::Protected)
        }

        /// Declares the symbol `private`
        #[must_use]
        pub fn private(self) -> Self {
            self.accessibility(Accessibility::Private)
        }

        /// Sets the declared accessibility
        #[must_use]
        pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
            self.accessibility = Some(accessibility);
            self
        }

        /// Adds declaration modifiers
        #[must_use]
        pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
            self.modifiers |= modifiers;
            self
        }

        /// Applies a custom attribute
        #[must_use]
        pub fn attribute(mut self, attribute: AttributeData) -> Self {
            self.attributes.push(attribute);
            self
        }

        /// Attaches a documentation comment (the XML inside `<member>`)
        #[must_use]
        pub fn documentation(mut self, xml: &str) -> Self {
            self.documentation = Some(xml.to_string());
            self
        }
    };
}

fn finish_symbol(
    registry: &mut SymbolRegistry,
    id: SymbolId,
    accessibility: Accessibility,
    modifiers: Modifiers,
    attributes: Vec<AttributeData>,
    documentation: Option<String>,
) {
    let symbol = registry.get_mut(id);
    symbol.accessibility = accessibility;
    symbol.modifiers = modifiers;
    symbol.attributes = attributes;
    symbol.documentation = documentation;
}

fn require_type(registry: &SymbolRegistry, container: SymbolId, what: &str) -> Result<()> {
    match registry.get(container).kind() {
        SymbolKind::NamedType => Ok(()),
        kind => Err(Error::InvalidSymbol(format!(
            "cannot add {what} to {kind} '{}'",
            registry.get(container).name
        ))),
    }
}

/// Name an explicit interface implementation is stored under: `Namespace.IFoo<T>.Member`
fn explicit_member_name(registry: &SymbolRegistry, member: SymbolId, name: &str) -> String {
    let Some(interface) = registry.containing_type(member) else {
        return name.to_string();
    };

    let mut qualified = registry.containing_namespace_name(interface);
    for ty in registry
        .containing_types(interface)
        .into_iter()
        .chain(std::iter::once(interface))
    {
        if !qualified.is_empty() {
            qualified.push('.');
        }
        let symbol = registry.get(ty);
        qualified.push_str(&symbol.name);
        if !symbol.type_parameters().is_empty() {
            let names: Vec<&str> = symbol
                .type_parameters()
                .iter()
                .map(|parameter| registry.get(*parameter).name.as_str())
                .collect();
            qualified.push('<');
            qualified.push_str(&names.join(", "));
            qualified.push('>');
        }
    }

    format!("{qualified}.{name}")
}

/// Declaration of a generic type parameter
#[derive(Debug, Clone)]
pub struct TypeParameterBuilder {
    name: String,
    variance: Variance,
    constraints: TypeParameterConstraints,
    constraint_types: Vec<TypeRef>,
    attributes: Vec<AttributeData>,
}

impl TypeParameterBuilder {
    /// Starts a type parameter with the given name
    #[must_use]
    pub fn new(name: &str) -> Self {
        TypeParameterBuilder {
            name: name.to_string(),
            variance: Variance::None,
            constraints: TypeParameterConstraints::empty(),
            constraint_types: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Marks the parameter covariant (`out T`)
    #[must_use]
    pub fn covariant(mut self) -> Self {
        self.variance = Variance::Out;
        self
    }

    /// Marks the parameter contravariant (`in T`)
    #[must_use]
    pub fn contravariant(mut self) -> Self {
        self.variance = Variance::In;
        self
    }

    /// Adds the `class` constraint
    #[must_use]
    pub fn class_constraint(mut self) -> Self {
        self.constraints |= TypeParameterConstraints::REFERENCE_TYPE;
        self
    }

    /// Adds the `struct` constraint
    #[must_use]
    pub fn struct_constraint(mut self) -> Self {
        self.constraints |= TypeParameterConstraints::VALUE_TYPE;
        self
    }

    /// Adds the `unmanaged` constraint
    #[must_use]
    pub fn unmanaged_constraint(mut self) -> Self {
        self.constraints |= TypeParameterConstraints::UNMANAGED;
        self
    }

    /// Adds the `notnull` constraint
    #[must_use]
    pub fn not_null_constraint(mut self) -> Self {
        self.constraints |= TypeParameterConstraints::NOT_NULL;
        self
    }

    /// Adds the `new()` constraint
    #[must_use]
    pub fn constructor_constraint(mut self) -> Self {
        self.constraints |= TypeParameterConstraints::CONSTRUCTOR;
        self
    }

    /// Adds a type constraint
    #[must_use]
    pub fn constraint(mut self, ty: TypeRef) -> Self {
        self.constraint_types.push(ty);
        self
    }

    /// Applies a custom attribute
    #[must_use]
    pub fn attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    fn create(
        self,
        registry: &mut SymbolRegistry,
        owner: SymbolId,
        ordinal: usize,
        is_method_type_parameter: bool,
    ) -> SymbolId {
        let id = registry.push(
            &self.name,
            Some(owner),
            SymbolData::TypeParameter(TypeParameterData {
                ordinal,
                variance: self.variance,
                constraint_types: self.constraint_types,
                constraints: self.constraints,
                is_method_type_parameter,
            }),
        );
        registry.get_mut(id).attributes = self.attributes;
        id
    }
}

impl From<&str> for TypeParameterBuilder {
    fn from(name: &str) -> Self {
        TypeParameterBuilder::new(name)
    }
}

/// Declaration of a method, indexer or delegate parameter
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    name: String,
    ty: TypeRef,
    ref_kind: RefKind,
    is_params: bool,
    is_this: bool,
    default_value: Option<ConstantValue>,
    attributes: Vec<AttributeData>,
}

impl ParameterBuilder {
    /// Starts a by-value parameter
    #[must_use]
    pub fn new(name: &str, ty: TypeRef) -> Self {
        ParameterBuilder {
            name: name.to_string(),
            ty,
            ref_kind: RefKind::None,
            is_params: false,
            is_this: false,
            default_value: None,
            attributes: Vec::new(),
        }
    }

    /// Sets the passing convention
    #[must_use]
    pub fn ref_kind(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }

    /// Marks a `params` array parameter
    #[must_use]
    pub fn params(mut self) -> Self {
        self.is_params = true;
        self
    }

    /// Sets an explicit default value
    #[must_use]
    pub fn default_value(mut self, value: ConstantValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Applies a custom attribute
    #[must_use]
    pub fn attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    fn create(self, registry: &mut SymbolRegistry, owner: SymbolId, ordinal: usize) -> SymbolId {
        let id = registry.push(
            &self.name,
            Some(owner),
            SymbolData::Parameter(ParameterData {
                ty: self.ty,
                ref_kind: self.ref_kind,
                is_params: self.is_params,
                is_this: self.is_this,
                default_value: self.default_value,
                ordinal,
            }),
        );
        registry.get_mut(id).attributes = self.attributes;
        id
    }

    /// Appends this parameter to a method, indexer or delegate
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if `owner` cannot have parameters.
    pub fn build(self, registry: &mut SymbolRegistry, owner: SymbolId) -> Result<SymbolId> {
        let owner = registry
            .type_data(owner)
            .and_then(|data| data.delegate_invoke)
            .unwrap_or(owner);

        let ordinal = match &registry.get(owner).data {
            SymbolData::Method(data) => data.parameters.len(),
            SymbolData::Property(data) if data.is_indexer => data.parameters.len(),
            _ => {
                return Err(Error::InvalidSymbol(format!(
                    "'{}' cannot have parameters",
                    registry.get(owner).name
                )))
            }
        };

        let id = self.create(registry, owner, ordinal);
        match &mut registry.get_mut(owner).data {
            SymbolData::Method(data) => data.parameters.push(id),
            SymbolData::Property(data) => data.parameters.push(id),
            _ => {}
        }

        Ok(id)
    }
}

/// Declaration of a named type
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    name: String,
    type_kind: TypeKind,
    accessibility: Option<Accessibility>,
    modifiers: Modifiers,
    type_parameters: Vec<TypeParameterBuilder>,
    base_type: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    attributes: Vec<AttributeData>,
    documentation: Option<String>,
    underlying_type: SpecialType,
    enum_fields: Vec<(String, i128, Option<String>)>,
    return_type: Option<TypeRef>,
    parameters: Vec<ParameterBuilder>,
}

impl TypeBuilder {
    /// Starts a type of the given kind
    #[must_use]
    pub fn new(type_kind: TypeKind, name: &str) -> Self {
        TypeBuilder {
            name: name.to_string(),
            type_kind,
            accessibility: None,
            modifiers: Modifiers::empty(),
            type_parameters: Vec::new(),
            base_type: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            documentation: None,
            underlying_type: SpecialType::Int32,
            enum_fields: Vec::new(),
            return_type: None,
            parameters: Vec::new(),
        }
    }

    /// Starts a class
    #[must_use]
    pub fn class(name: &str) -> Self {
        Self::new(TypeKind::Class, name)
    }

    /// Starts a struct
    #[must_use]
    pub fn structure(name: &str) -> Self {
        Self::new(TypeKind::Struct, name)
    }

    /// Starts an interface
    #[must_use]
    pub fn interface(name: &str) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    /// Starts an enum
    #[must_use]
    pub fn enumeration(name: &str) -> Self {
        Self::new(TypeKind::Enum, name)
    }

    /// Starts a delegate
    #[must_use]
    pub fn delegate(name: &str) -> Self {
        Self::new(TypeKind::Delegate, name)
    }

    accessibility_setters!();

    /// Declares a generic type parameter
    #[must_use]
    pub fn type_parameter(mut self, parameter: impl Into<TypeParameterBuilder>) -> Self {
        self.type_parameters.push(parameter.into());
        self
    }

    /// Sets the base type (defaults to `object`, `ValueType`, `Enum` or `MulticastDelegate`)
    #[must_use]
    pub fn base_type(mut self, ty: TypeRef) -> Self {
        self.base_type = Some(ty);
        self
    }

    /// Adds a directly implemented interface
    #[must_use]
    pub fn implements(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Sets the underlying type of an enum (defaults to `int`)
    #[must_use]
    pub fn underlying_type(mut self, special: SpecialType) -> Self {
        self.underlying_type = special;
        self
    }

    /// Adds an enum member
    #[must_use]
    pub fn enum_field(mut self, name: &str, value: i128) -> Self {
        self.enum_fields.push((name.to_string(), value, None));
        self
    }

    /// Adds a documented enum member
    #[must_use]
    pub fn documented_enum_field(mut self, name: &str, value: i128, documentation: &str) -> Self {
        self.enum_fields
            .push((name.to_string(), value, Some(documentation.to_string())));
        self
    }

    /// Sets the return type of a delegate
    #[must_use]
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Adds a delegate parameter
    #[must_use]
    pub fn parameter(mut self, name: &str, ty: TypeRef) -> Self {
        self.parameters.push(ParameterBuilder::new(name, ty));
        self
    }

    /// Adds a delegate parameter with full control over its declaration
    #[must_use]
    pub fn parameter_with(mut self, parameter: ParameterBuilder) -> Self {
        self.parameters.push(parameter);
        self
    }

    fn enum_constant(&self, value: i128) -> ConstantValue {
        match self.underlying_type {
            SpecialType::SByte => ConstantValue::SByte(value as i8),
            SpecialType::Byte => ConstantValue::Byte(value as u8),
            SpecialType::Int16 => ConstantValue::Int16(value as i16),
            SpecialType::UInt16 => ConstantValue::UInt16(value as u16),
            SpecialType::UInt32 => ConstantValue::UInt32(value as u32),
            SpecialType::Int64 => ConstantValue::Int64(value as i64),
            SpecialType::UInt64 => ConstantValue::UInt64(value as u64),
            _ => ConstantValue::Int32(value as i32),
        }
    }

    /// Adds the type to a namespace or, as a nested type, to another type
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if `container` is neither a namespace nor a type.
    pub fn build(self, registry: &mut SymbolRegistry, container: SymbolId) -> Result<SymbolId> {
        let is_nested = match registry.get(container).kind() {
            SymbolKind::Namespace => false,
            SymbolKind::NamedType => true,
            kind => {
                return Err(Error::InvalidSymbol(format!(
                    "cannot add type '{}' to {kind}",
                    self.name
                )))
            }
        };

        let base_type = match (&self.base_type, self.type_kind) {
            (Some(base), _) => Some(base.clone()),
            (None, TypeKind::Class) => Some(registry.special(SpecialType::Object)),
            (None, TypeKind::Struct) => Some(registry.special(SpecialType::ValueType)),
            (None, TypeKind::Enum) => Some(registry.special(SpecialType::Enum)),
            (None, TypeKind::Delegate) => Some(registry.special(SpecialType::MulticastDelegate)),
            (None, TypeKind::Interface) => None,
        };

        let enum_underlying_type = (self.type_kind == TypeKind::Enum)
            .then(|| registry.special(self.underlying_type));

        let id = registry.push(
            &self.name,
            Some(container),
            SymbolData::NamedType(TypeData {
                type_kind: self.type_kind,
                type_parameters: Vec::new(),
                base_type,
                interfaces: self.interfaces.clone(),
                members: Vec::new(),
                enum_underlying_type,
                delegate_invoke: None,
                special_type: SpecialType::None,
            }),
        );

        let accessibility = self.accessibility.unwrap_or(if is_nested {
            Accessibility::Private
        } else {
            Accessibility::Internal
        });

        let mut modifiers = self.modifiers;
        if matches!(self.type_kind, TypeKind::Struct | TypeKind::Enum | TypeKind::Delegate) {
            modifiers |= Modifiers::SEALED;
        }

        let enum_constants: Vec<(String, ConstantValue, Option<String>)> = self
            .enum_fields
            .iter()
            .map(|(name, value, doc)| (name.clone(), self.enum_constant(*value), doc.clone()))
            .collect();

        let TypeBuilder {
            type_parameters,
            attributes,
            documentation,
            return_type,
            parameters,
            type_kind,
            ..
        } = self;

        finish_symbol(registry, id, accessibility, modifiers, attributes, documentation);

        let type_parameters: Vec<SymbolId> = type_parameters
            .into_iter()
            .enumerate()
            .map(|(ordinal, parameter)| parameter.create(registry, id, ordinal, false))
            .collect();
        if let SymbolData::NamedType(data) = &mut registry.get_mut(id).data {
            data.type_parameters = type_parameters;
        }

        registry.add_member(container, id);

        for (name, constant, doc) in enum_constants {
            let field = registry.push(
                &name,
                Some(id),
                SymbolData::Field(FieldData {
                    ty: TypeRef::named(id),
                    constant: Some(constant),
                }),
            );
            finish_symbol(
                registry,
                field,
                Accessibility::Public,
                Modifiers::CONST | Modifiers::STATIC,
                Vec::new(),
                doc,
            );
            registry.add_member(id, field);
        }

        if type_kind == TypeKind::Delegate {
            let return_type = return_type.unwrap_or_else(|| registry.special(SpecialType::Void));
            let invoke = registry.push(
                "Invoke",
                Some(id),
                SymbolData::Method(MethodData {
                    method_kind: MethodKind::DelegateInvoke,
                    type_parameters: Vec::new(),
                    parameters: Vec::new(),
                    return_type,
                    ref_kind: RefKind::None,
                    explicit_interface_implementations: Vec::new(),
                    overridden: None,
                    associated: None,
                    is_extension: false,
                }),
            );
            finish_symbol(
                registry,
                invoke,
                Accessibility::Public,
                Modifiers::VIRTUAL,
                Vec::new(),
                None,
            );
            registry.get_mut(invoke).is_implicit = true;

            let parameters: Vec<SymbolId> = parameters
                .into_iter()
                .enumerate()
                .map(|(ordinal, parameter)| parameter.create(registry, invoke, ordinal))
                .collect();
            if let SymbolData::Method(data) = &mut registry.get_mut(invoke).data {
                data.parameters = parameters;
            }
            if let SymbolData::NamedType(data) = &mut registry.get_mut(id).data {
                data.delegate_invoke = Some(invoke);
            }
        }

        Ok(id)
    }
}

/// Declaration of a method, constructor, operator or finalizer
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    name: String,
    method_kind: MethodKind,
    accessibility: Option<Accessibility>,
    modifiers: Modifiers,
    type_parameters: Vec<TypeParameterBuilder>,
    parameters: Vec<ParameterBuilder>,
    return_type: Option<TypeRef>,
    ref_kind: RefKind,
    implements: Vec<SymbolId>,
    overrides: Option<SymbolId>,
    attributes: Vec<AttributeData>,
    documentation: Option<String>,
    is_extension: bool,
}

impl MethodBuilder {
    fn with_kind(name: &str, method_kind: MethodKind) -> Self {
        MethodBuilder {
            name: name.to_string(),
            method_kind,
            accessibility: None,
            modifiers: Modifiers::empty(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
            ref_kind: RefKind::None,
            implements: Vec::new(),
            overrides: None,
            attributes: Vec::new(),
            documentation: None,
            is_extension: false,
        }
    }

    /// Starts an ordinary method
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_kind(name, MethodKind::Ordinary)
    }

    /// Starts an instance constructor
    #[must_use]
    pub fn constructor() -> Self {
        Self::with_kind(".ctor", MethodKind::Constructor)
    }

    /// Starts a static constructor
    #[must_use]
    pub fn static_constructor() -> Self {
        Self::with_kind(".cctor", MethodKind::StaticConstructor).modifiers(Modifiers::STATIC)
    }

    /// Starts a finalizer
    #[must_use]
    pub fn destructor() -> Self {
        Self::with_kind("Finalize", MethodKind::Destructor).modifiers(Modifiers::OVERRIDE)
    }

    /// Starts a user-defined operator such as `op_Addition`
    #[must_use]
    pub fn operator(metadata_name: &str) -> Self {
        Self::with_kind(metadata_name, MethodKind::UserDefinedOperator)
            .modifiers(Modifiers::STATIC)
            .public()
    }

    /// Starts an `implicit` or `explicit` conversion operator
    #[must_use]
    pub fn conversion(implicit: bool) -> Self {
        let name = if implicit { "op_Implicit" } else { "op_Explicit" };
        Self::with_kind(name, MethodKind::Conversion)
            .modifiers(Modifiers::STATIC)
            .public()
    }

    accessibility_setters!();

    /// Declares a generic method type parameter
    #[must_use]
    pub fn type_parameter(mut self, parameter: impl Into<TypeParameterBuilder>) -> Self {
        self.type_parameters.push(parameter.into());
        self
    }

    /// Adds a by-value parameter
    #[must_use]
    pub fn parameter(mut self, name: &str, ty: TypeRef) -> Self {
        self.parameters.push(ParameterBuilder::new(name, ty));
        self
    }

    /// Adds a parameter with full control over its declaration
    #[must_use]
    pub fn parameter_with(mut self, parameter: ParameterBuilder) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the return type (defaults to `void`)
    #[must_use]
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Returns by reference
    #[must_use]
    pub fn returns_ref(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }

    /// Implements an interface method explicitly
    #[must_use]
    pub fn implements(mut self, interface_method: SymbolId) -> Self {
        self.implements.push(interface_method);
        self
    }

    /// Overrides a base method
    #[must_use]
    pub fn overrides(mut self, base_method: SymbolId) -> Self {
        self.overrides = Some(base_method);
        self.modifiers |= Modifiers::OVERRIDE;
        self
    }

    /// Marks an extension method; the first parameter becomes the `this` parameter
    #[must_use]
    pub fn extension(mut self) -> Self {
        self.is_extension = true;
        self.modifiers |= Modifiers::STATIC;
        self
    }

    /// Adds the method to a type
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if `ty` is not a named type, or if an extension method
    /// has no parameter.
    pub fn build(self, registry: &mut SymbolRegistry, ty: SymbolId) -> Result<SymbolId> {
        require_type(registry, ty, "method")?;

        if self.is_extension && self.parameters.is_empty() {
            return Err(Error::InvalidSymbol(format!(
                "extension method '{}' needs a 'this' parameter",
                self.name
            )));
        }

        let (name, method_kind, accessibility) = match self.implements.first() {
            Some(member) => (
                explicit_member_name(registry, *member, &self.name),
                MethodKind::ExplicitInterfaceImplementation,
                Accessibility::Private,
            ),
            None => {
                let default = if registry.get(ty).is_type_kind(TypeKind::Interface) {
                    Accessibility::Public
                } else {
                    Accessibility::Private
                };
                (
                    self.name.clone(),
                    self.method_kind,
                    self.accessibility.unwrap_or(default),
                )
            }
        };

        let return_type = self
            .return_type
            .clone()
            .unwrap_or_else(|| registry.special(SpecialType::Void));

        let mut modifiers = self.modifiers;
        if registry.get(ty).is_type_kind(TypeKind::Interface) && self.implements.is_empty() {
            modifiers |= Modifiers::ABSTRACT;
        }

        let id = registry.push(
            &name,
            Some(ty),
            SymbolData::Method(MethodData {
                method_kind,
                type_parameters: Vec::new(),
                parameters: Vec::new(),
                return_type,
                ref_kind: self.ref_kind,
                explicit_interface_implementations: self.implements.clone(),
                overridden: self.overrides,
                associated: None,
                is_extension: self.is_extension,
            }),
        );

        let MethodBuilder {
            type_parameters,
            parameters,
            attributes,
            documentation,
            is_extension,
            ..
        } = self;

        finish_symbol(registry, id, accessibility, modifiers, attributes, documentation);

        let type_parameters: Vec<SymbolId> = type_parameters
            .into_iter()
            .enumerate()
            .map(|(ordinal, parameter)| parameter.create(registry, id, ordinal, true))
            .collect();

        let parameters: Vec<SymbolId> = parameters
            .into_iter()
            .enumerate()
            .map(|(ordinal, mut parameter)| {
                parameter.is_this = is_extension && ordinal == 0;
                parameter.create(registry, id, ordinal)
            })
            .collect();

        if let SymbolData::Method(data) = &mut registry.get_mut(id).data {
            data.type_parameters = type_parameters;
            data.parameters = parameters;
        }

        registry.add_member(ty, id);
        Ok(id)
    }
}

/// Declaration of a property or indexer
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    name: String,
    ty: TypeRef,
    accessibility: Option<Accessibility>,
    modifiers: Modifiers,
    is_indexer: bool,
    parameters: Vec<ParameterBuilder>,
    getter: Option<Option<Accessibility>>,
    setter: Option<Option<Accessibility>>,
    getter_attributes: Vec<AttributeData>,
    setter_attributes: Vec<AttributeData>,
    implements: Option<SymbolId>,
    overrides: Option<SymbolId>,
    ref_kind: RefKind,
    attributes: Vec<AttributeData>,
    documentation: Option<String>,
}

impl PropertyBuilder {
    /// Starts a property
    #[must_use]
    pub fn new(name: &str, ty: TypeRef) -> Self {
        PropertyBuilder {
            name: name.to_string(),
            ty,
            accessibility: None,
            modifiers: Modifiers::empty(),
            is_indexer: false,
            parameters: Vec::new(),
            getter: None,
            setter: None,
            getter_attributes: Vec::new(),
            setter_attributes: Vec::new(),
            implements: None,
            overrides: None,
            ref_kind: RefKind::None,
            attributes: Vec::new(),
            documentation: None,
        }
    }

    /// Starts an indexer (`this[...]`)
    #[must_use]
    pub fn indexer(ty: TypeRef) -> Self {
        let mut builder = Self::new("this[]", ty);
        builder.is_indexer = true;
        builder
    }

    accessibility_setters!();

    /// Adds a `get` accessor with the property's accessibility
    #[must_use]
    pub fn getter(mut self) -> Self {
        self.getter = Some(None);
        self
    }

    /// Adds a `set` accessor with the property's accessibility
    #[must_use]
    pub fn setter(mut self) -> Self {
        self.setter = Some(None);
        self
    }

    /// Adds a `set` accessor with its own accessibility (`private set;`)
    #[must_use]
    pub fn setter_with(mut self, accessibility: Accessibility) -> Self {
        self.setter = Some(Some(accessibility));
        self
    }

    /// Applies an attribute to the `get` accessor
    #[must_use]
    pub fn getter_attribute(mut self, attribute: AttributeData) -> Self {
        self.getter_attributes.push(attribute);
        self
    }

    /// Applies an attribute to the `set` accessor
    #[must_use]
    pub fn setter_attribute(mut self, attribute: AttributeData) -> Self {
        self.setter_attributes.push(attribute);
        self
    }

    /// Adds an indexer parameter
    #[must_use]
    pub fn parameter(mut self, name: &str, ty: TypeRef) -> Self {
        self.parameters.push(ParameterBuilder::new(name, ty));
        self
    }

    /// Adds an indexer parameter with full control over its declaration
    #[must_use]
    pub fn parameter_with(mut self, parameter: ParameterBuilder) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Implements an interface property explicitly
    #[must_use]
    pub fn implements(mut self, interface_property: SymbolId) -> Self {
        self.implements = Some(interface_property);
        self
    }

    /// Overrides a base property
    #[must_use]
    pub fn overrides(mut self, base_property: SymbolId) -> Self {
        self.overrides = Some(base_property);
        self.modifiers |= Modifiers::OVERRIDE;
        self
    }

    /// Returns by reference
    #[must_use]
    pub fn returns_ref(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }

    /// Adds the property and its accessors to a type
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if `ty` is not a named type.
    pub fn build(self, registry: &mut SymbolRegistry, ty: SymbolId) -> Result<SymbolId> {
        require_type(registry, ty, "property")?;

        let is_interface = registry.get(ty).is_type_kind(TypeKind::Interface);
        let (name, accessibility) = match self.implements {
            Some(member) => (
                explicit_member_name(registry, member, &self.name),
                Accessibility::Private,
            ),
            None => (
                self.name.clone(),
                self.accessibility.unwrap_or(if is_interface {
                    Accessibility::Public
                } else {
                    Accessibility::Private
                }),
            ),
        };

        let mut modifiers = self.modifiers;
        if is_interface && self.implements.is_none() {
            modifiers |= Modifiers::ABSTRACT;
        }

        let id = registry.push(
            &name,
            Some(ty),
            SymbolData::Property(PropertyData {
                ty: self.ty.clone(),
                ref_kind: self.ref_kind,
                parameters: Vec::new(),
                getter: None,
                setter: None,
                explicit_interface_implementations: self.implements.into_iter().collect(),
                overridden: self.overrides,
                is_indexer: self.is_indexer,
            }),
        );

        let PropertyBuilder {
            ty: property_type,
            parameters,
            getter,
            setter,
            getter_attributes,
            setter_attributes,
            implements,
            attributes,
            documentation,
            ..
        } = self;

        finish_symbol(registry, id, accessibility, modifiers, attributes, documentation);

        let parameter_ids: Vec<SymbolId> = parameters
            .iter()
            .cloned()
            .enumerate()
            .map(|(ordinal, parameter)| parameter.create(registry, id, ordinal))
            .collect();

        let metadata_name = registry.get(id).metadata_name().into_owned();
        let accessor_prefix = match implements {
            Some(member) => {
                let qualified = explicit_member_name(registry, member, "");
                qualified.trim_end_matches('.').to_string() + "."
            }
            None => String::new(),
        };
        let interface_getter = implements
            .and_then(|member| registry.get(member).as_property())
            .and_then(|data| data.getter);
        let interface_setter = implements
            .and_then(|member| registry.get(member).as_property())
            .and_then(|data| data.setter);

        let accessor_modifiers = modifiers & !Modifiers::READONLY;

        let getter_id = match getter {
            Some(own_accessibility) => {
                let accessor = registry.push(
                    &format!("{accessor_prefix}get_{metadata_name}"),
                    Some(ty),
                    SymbolData::Method(MethodData {
                        method_kind: MethodKind::PropertyGet,
                        type_parameters: Vec::new(),
                        parameters: Vec::new(),
                        return_type: property_type.clone(),
                        ref_kind: RefKind::None,
                        explicit_interface_implementations: interface_getter.into_iter().collect(),
                        overridden: None,
                        associated: Some(id),
                        is_extension: false,
                    }),
                );
                finish_symbol(
                    registry,
                    accessor,
                    own_accessibility.unwrap_or(accessibility),
                    accessor_modifiers,
                    getter_attributes,
                    None,
                );
                registry.get_mut(accessor).is_implicit = true;
                let accessor_parameters: Vec<SymbolId> = parameters
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(ordinal, parameter)| parameter.create(registry, accessor, ordinal))
                    .collect();
                if let SymbolData::Method(data) = &mut registry.get_mut(accessor).data {
                    data.parameters = accessor_parameters;
                }
                registry.add_member(ty, accessor);
                Some(accessor)
            }
            None => None,
        };

        let setter_id = match setter {
            Some(own_accessibility) => {
                let void = registry.special(SpecialType::Void);
                let accessor = registry.push(
                    &format!("{accessor_prefix}set_{metadata_name}"),
                    Some(ty),
                    SymbolData::Method(MethodData {
                        method_kind: MethodKind::PropertySet,
                        type_parameters: Vec::new(),
                        parameters: Vec::new(),
                        return_type: void,
                        ref_kind: RefKind::None,
                        explicit_interface_implementations: interface_setter.into_iter().collect(),
                        overridden: None,
                        associated: Some(id),
                        is_extension: false,
                    }),
                );
                finish_symbol(
                    registry,
                    accessor,
                    own_accessibility.unwrap_or(accessibility),
                    accessor_modifiers,
                    setter_attributes,
                    None,
                );
                registry.get_mut(accessor).is_implicit = true;
                let mut accessor_parameters: Vec<SymbolId> = parameters
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(ordinal, parameter)| parameter.create(registry, accessor, ordinal))
                    .collect();
                let value = ParameterBuilder::new("value", property_type.clone()).create(
                    registry,
                    accessor,
                    accessor_parameters.len(),
                );
                accessor_parameters.push(value);
                if let SymbolData::Method(data) = &mut registry.get_mut(accessor).data {
                    data.parameters = accessor_parameters;
                }
                registry.add_member(ty, accessor);
                Some(accessor)
            }
            None => None,
        };

        if let SymbolData::Property(data) = &mut registry.get_mut(id).data {
            data.parameters = parameter_ids;
            data.getter = getter_id;
            data.setter = setter_id;
        }

        registry.add_member(ty, id);
        Ok(id)
    }
}

/// Declaration of a field or constant
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    ty: TypeRef,
    accessibility: Option<Accessibility>,
    modifiers: Modifiers,
    constant: Option<ConstantValue>,
    attributes: Vec<AttributeData>,
    documentation: Option<String>,
}

impl FieldBuilder {
    /// Starts a field
    #[must_use]
    pub fn new(name: &str, ty: TypeRef) -> Self {
        FieldBuilder {
            name: name.to_string(),
            ty,
            accessibility: None,
            modifiers: Modifiers::empty(),
            constant: None,
            attributes: Vec::new(),
            documentation: None,
        }
    }

    accessibility_setters!();

    /// Makes the field a `const` with the given value
    #[must_use]
    pub fn constant(mut self, value: ConstantValue) -> Self {
        self.constant = Some(value);
        self.modifiers |= Modifiers::CONST | Modifiers::STATIC;
        self
    }

    /// Adds the field to a type
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if `ty` is not a named type.
    pub fn build(self, registry: &mut SymbolRegistry, ty: SymbolId) -> Result<SymbolId> {
        require_type(registry, ty, "field")?;

        let id = registry.push(
            &self.name,
            Some(ty),
            SymbolData::Field(FieldData {
                ty: self.ty,
                constant: self.constant,
            }),
        );
        finish_symbol(
            registry,
            id,
            self.accessibility.unwrap_or(Accessibility::Private),
            self.modifiers,
            self.attributes,
            self.documentation,
        );
        registry.add_member(ty, id);
        Ok(id)
    }
}

/// Declaration of an event
#[derive(Debug, Clone)]
pub struct EventBuilder {
    name: String,
    ty: TypeRef,
    accessibility: Option<Accessibility>,
    modifiers: Modifiers,
    add_attributes: Vec<AttributeData>,
    remove_attributes: Vec<AttributeData>,
    implements: Option<SymbolId>,
    overrides: Option<SymbolId>,
    attributes: Vec<AttributeData>,
    documentation: Option<String>,
}

impl EventBuilder {
    /// Starts an event with the given delegate type
    #[must_use]
    pub fn new(name: &str, ty: TypeRef) -> Self {
        EventBuilder {
            name: name.to_string(),
            ty,
            accessibility: None,
            modifiers: Modifiers::empty(),
            add_attributes: Vec::new(),
            remove_attributes: Vec::new(),
            implements: None,
            overrides: None,
            attributes: Vec::new(),
            documentation: None,
        }
    }

    accessibility_setters!();

    /// Applies an attribute to the `add` accessor
    #[must_use]
    pub fn add_attribute(mut self, attribute: AttributeData) -> Self {
        self.add_attributes.push(attribute);
        self
    }

    /// Applies an attribute to the `remove` accessor
    #[must_use]
    pub fn remove_attribute(mut self, attribute: AttributeData) -> Self {
        self.remove_attributes.push(attribute);
        self
    }

    /// Implements an interface event explicitly
    #[must_use]
    pub fn implements(mut self, interface_event: SymbolId) -> Self {
        self.implements = Some(interface_event);
        self
    }

    /// Overrides a base event
    #[must_use]
    pub fn overrides(mut self, base_event: SymbolId) -> Self {
        self.overrides = Some(base_event);
        self.modifiers |= Modifiers::OVERRIDE;
        self
    }

    /// Adds the event and its accessors to a type
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbol`] if `ty` is not a named type.
    pub fn build(self, registry: &mut SymbolRegistry, ty: SymbolId) -> Result<SymbolId> {
        require_type(registry, ty, "event")?;

        let is_interface = registry.get(ty).is_type_kind(TypeKind::Interface);
        let (name, accessibility) = match self.implements {
            Some(member) => (
                explicit_member_name(registry, member, &self.name),
                Accessibility::Private,
            ),
            None => (
                self.name.clone(),
                self.accessibility.unwrap_or(if is_interface {
                    Accessibility::Public
                } else {
                    Accessibility::Private
                }),
            ),
        };

        let mut modifiers = self.modifiers;
        if is_interface && self.implements.is_none() {
            modifiers |= Modifiers::ABSTRACT;
        }

        let id = registry.push(
            &name,
            Some(ty),
            SymbolData::Event(EventData {
                ty: self.ty.clone(),
                add: None,
                remove: None,
                explicit_interface_implementations: self.implements.into_iter().collect(),
                overridden: self.overrides,
            }),
        );

        let EventBuilder {
            ty: event_type,
            add_attributes,
            remove_attributes,
            attributes,
            documentation,
            ..
        } = self;

        finish_symbol(registry, id, accessibility, modifiers, attributes, documentation);

        let mut accessors = Vec::with_capacity(2);
        for (prefix, method_kind, accessor_attributes) in [
            ("add_", MethodKind::EventAdd, add_attributes),
            ("remove_", MethodKind::EventRemove, remove_attributes),
        ] {
            let void = registry.special(SpecialType::Void);
            let accessor_name = match name.rfind('.') {
                Some(dot) => format!("{}{prefix}{}", &name[..=dot], &name[dot + 1..]),
                None => format!("{prefix}{name}"),
            };
            let accessor = registry.push(
                &accessor_name,
                Some(ty),
                SymbolData::Method(MethodData {
                    method_kind,
                    type_parameters: Vec::new(),
                    parameters: Vec::new(),
                    return_type: void,
                    ref_kind: RefKind::None,
                    explicit_interface_implementations: Vec::new(),
                    overridden: None,
                    associated: Some(id),
                    is_extension: false,
                }),
            );
            finish_symbol(
                registry,
                accessor,
                accessibility,
                modifiers,
                accessor_attributes,
                None,
            );
            registry.get_mut(accessor).is_implicit = true;
            let value = ParameterBuilder::new("value", event_type.clone()).create(registry, accessor, 0);
            if let SymbolData::Method(data) = &mut registry.get_mut(accessor).data {
                data.parameters.push(value);
            }
            registry.add_member(ty, accessor);
            accessors.push(accessor);
        }

        if let SymbolData::Event(data) = &mut registry.get_mut(id).data {
            data.add = accessors.first().copied();
            data.remove = accessors.get(1).copied();
        }

        registry.add_member(ty, id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_namespace() -> (SymbolRegistry, SymbolId) {
        let mut registry = SymbolRegistry::new();
        let assembly = registry.add_assembly("Acme", "1.0.0.0");
        let namespace = registry.namespace(assembly, "Acme").unwrap();
        (registry, namespace)
    }

    #[test]
    fn type_defaults() {
        let (mut registry, namespace) = registry_with_namespace();

        let class = TypeBuilder::class("Widget").build(&mut registry, namespace).unwrap();
        let nested = TypeBuilder::structure("Part").build(&mut registry, class).unwrap();

        assert_eq!(registry.get(class).accessibility, Accessibility::Internal);
        assert_eq!(registry.get(nested).accessibility, Accessibility::Private);
        assert_eq!(
            registry.base_type(class),
            Some(registry.special_type(SpecialType::Object))
        );
        assert_eq!(
            registry.base_type(nested),
            Some(registry.special_type(SpecialType::ValueType))
        );
        assert_eq!(registry.qualified_metadata_name(nested), "Acme.Widget+Part");
    }

    #[test]
    fn property_creates_accessors() {
        let (mut registry, namespace) = registry_with_namespace();
        let class = TypeBuilder::class("Widget").public().build(&mut registry, namespace).unwrap();
        let int = registry.special(SpecialType::Int32);

        let property = PropertyBuilder::new("Size", int)
            .public()
            .getter()
            .setter_with(Accessibility::Private)
            .build(&mut registry, class)
            .unwrap();

        let data = registry.get(property).as_property().unwrap();
        let getter = registry.get(data.getter.unwrap());
        let setter = registry.get(data.setter.unwrap());
        assert_eq!(getter.name, "get_Size");
        assert_eq!(getter.method_kind(), Some(MethodKind::PropertyGet));
        assert_eq!(setter.accessibility, Accessibility::Private);
        assert_eq!(setter.parameters().len(), 1);
        assert!(getter.is_implicit);
    }

    #[test]
    fn explicit_implementation_is_named_after_interface() {
        let (mut registry, namespace) = registry_with_namespace();
        let interface = TypeBuilder::interface("IRunner")
            .public()
            .build(&mut registry, namespace)
            .unwrap();
        let run = MethodBuilder::new("Run").build(&mut registry, interface).unwrap();
        let class = TypeBuilder::class("Runner")
            .public()
            .implements(TypeRef::named(interface))
            .build(&mut registry, namespace)
            .unwrap();

        let method = MethodBuilder::new("Run")
            .implements(run)
            .build(&mut registry, class)
            .unwrap();

        let symbol = registry.get(method);
        assert_eq!(symbol.name, "Acme.IRunner.Run");
        assert_eq!(
            symbol.method_kind(),
            Some(MethodKind::ExplicitInterfaceImplementation)
        );
        assert_eq!(symbol.accessibility, Accessibility::Private);
    }

    #[test]
    fn delegate_gets_invoke_method() {
        let (mut registry, namespace) = registry_with_namespace();
        let string = registry.special(SpecialType::String);

        let delegate = TypeBuilder::delegate("Callback")
            .public()
            .parameter("message", string)
            .build(&mut registry, namespace)
            .unwrap();

        assert_eq!(registry.parameters(delegate).len(), 1);
        assert!(!registry.get(delegate).is_static());
    }

    #[test]
    fn enum_fields_use_underlying_type() {
        let (mut registry, namespace) = registry_with_namespace();

        let colors = TypeBuilder::enumeration("Color")
            .public()
            .underlying_type(SpecialType::Byte)
            .enum_field("Red", 1)
            .enum_field("Green", 2)
            .build(&mut registry, namespace)
            .unwrap();

        let fields = registry.members(colors);
        assert_eq!(fields.len(), 2);
        let green = registry.get(fields[1]).as_field().unwrap();
        assert_eq!(green.constant, Some(ConstantValue::Byte(2)));
    }

    #[test]
    fn members_require_type_container() {
        let (mut registry, namespace) = registry_with_namespace();

        let result = MethodBuilder::new("Orphan").build(&mut registry, namespace);
        assert!(matches!(result, Err(Error::InvalidSymbol(_))));

        let extension = TypeBuilder::class("Ext").build(&mut registry, namespace).unwrap();
        let result = MethodBuilder::new("NoThis").extension().build(&mut registry, extension);
        assert!(matches!(result, Err(Error::InvalidSymbol(_))));
    }
}
