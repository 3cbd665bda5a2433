//! In-memory symbol graph that documentation is generated from.
//!
//! The documentation pipeline never parses assemblies itself. A host (a metadata loader, a
//! compiler frontend, or a test) describes the assemblies to document as a graph of
//! [`Symbol`]s stored in a [`SymbolRegistry`]. Every node is addressed by a copyable
//! [`SymbolId`]; references between nodes (containing symbol, base type, overridden member,
//! accessor methods) are ids as well, so the graph is cheap to share and never needs interior
//! mutability once it has been built.
//!
//! # Architecture
//!
//! - [`Symbol`] carries the attributes every node has (name, accessibility, modifiers,
//!   containing symbol, custom attributes, documentation comment) plus a [`SymbolData`]
//!   payload with the kind-specific parts.
//! - [`TypeRef`] describes a type as used in a signature: a named type (optionally constructed
//!   with type arguments), a type parameter, an array or a pointer.
//! - [`AttributeData`] and [`TypedConstant`] model applied custom attributes.
//! - [`SymbolRegistry`] owns all symbols, always contains a core library with the well-known
//!   `System` types and offers the navigation helpers used across the crate.
//! - The builders in [`builder`] populate the registry with a fluent API.
//!
//! # Example
//!
//! ```rust
//! use cildoc::symbols::{SymbolRegistry, SpecialType, TypeBuilder, MethodBuilder};
//!
//! let mut registry = SymbolRegistry::new();
//! let assembly = registry.add_assembly("Acme", "1.0.0.0");
//! let namespace = registry.namespace(assembly, "Acme.Widgets")?;
//!
//! let widget = TypeBuilder::class("Widget").public().build(&mut registry, namespace)?;
//! let int = registry.special(SpecialType::Int32);
//! MethodBuilder::new("Resize")
//!     .public()
//!     .parameter("width", int)
//!     .build(&mut registry, widget)?;
//!
//! assert_eq!(registry.members(widget).len(), 1);
//! # Ok::<(), cildoc::Error>(())
//! ```

pub mod builder;
mod constant;
mod docid;
mod registry;
mod types;

pub use builder::{
    EventBuilder, FieldBuilder, MethodBuilder, ParameterBuilder, PropertyBuilder, TypeBuilder,
    TypeParameterBuilder,
};
pub use constant::{AttributeData, ConstantValue, TypedConstant};
pub use docid::documentation_comment_id;
pub use registry::SymbolRegistry;
pub use types::{SpecialType, TypeRef};

use std::{borrow::Cow, fmt, path::PathBuf};

use bitflags::bitflags;
use strum::{Display, EnumIter};

/// Identity of one node in a [`SymbolRegistry`].
///
/// Ids are indices into the registry's arena. Two ids are equal exactly when they name the same
/// symbol, so they are used as cache keys throughout the documentation model.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    pub(crate) fn new(index: usize) -> Self {
        SymbolId(index as u32)
    }

    /// Returns the arena index of this id
    #[must_use]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of a [`Symbol`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SymbolKind {
    /// A compiled assembly
    Assembly,
    /// A namespace, including the global namespace of an assembly
    Namespace,
    /// A class, struct, interface, enum or delegate
    NamedType,
    /// A method, constructor, operator or accessor
    Method,
    /// A property or indexer
    Property,
    /// A field, constant or enum member
    Field,
    /// An event
    Event,
    /// A parameter of a method, indexer or delegate
    Parameter,
    /// A generic type parameter
    TypeParameter,
}

/// The kind of a named type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TypeKind {
    /// Reference type
    Class,
    /// Value type
    Struct,
    /// Interface
    Interface,
    /// Enumeration
    Enum,
    /// Delegate
    Delegate,
}

/// The kind of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MethodKind {
    /// A regular method
    Ordinary,
    /// Instance constructor (`.ctor`)
    Constructor,
    /// Type initializer (`.cctor`)
    StaticConstructor,
    /// Finalizer
    Destructor,
    /// Property `get` accessor
    PropertyGet,
    /// Property `set` accessor
    PropertySet,
    /// Event `add` accessor
    EventAdd,
    /// Event `remove` accessor
    EventRemove,
    /// Overloaded operator such as `op_Addition`
    UserDefinedOperator,
    /// `op_Implicit` or `op_Explicit`
    Conversion,
    /// Method implementing an interface member explicitly
    ExplicitInterfaceImplementation,
    /// The `Invoke` method of a delegate
    DelegateInvoke,
}

/// Declared accessibility of a symbol
///
/// The ordering follows the reachability of the levels: a greater value is visible from more
/// places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Accessibility {
    /// Accessibility does not apply (namespaces, parameters)
    NotApplicable,
    /// `private`
    Private,
    /// `private protected`
    ProtectedAndInternal,
    /// `protected`
    Protected,
    /// `internal`
    Internal,
    /// `protected internal`
    ProtectedOrInternal,
    /// `public`
    Public,
}

impl Accessibility {
    /// Returns the C# keywords for this accessibility, or an empty slice
    #[must_use]
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Accessibility::NotApplicable => &[],
            Accessibility::Private => &["private"],
            Accessibility::ProtectedAndInternal => &["private", "protected"],
            Accessibility::Protected => &["protected"],
            Accessibility::Internal => &["internal"],
            Accessibility::ProtectedOrInternal => &["protected", "internal"],
            Accessibility::Public => &["public"],
        }
    }
}

bitflags! {
    /// Declaration modifiers of a symbol
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        /// `static`
        const STATIC = 0x0001;
        /// `abstract`
        const ABSTRACT = 0x0002;
        /// `virtual`
        const VIRTUAL = 0x0004;
        /// `override`
        const OVERRIDE = 0x0008;
        /// `sealed`
        const SEALED = 0x0010;
        /// `readonly`
        const READONLY = 0x0020;
        /// `const`
        const CONST = 0x0040;
        /// `extern`
        const EXTERN = 0x0080;
        /// `new`
        const NEW = 0x0100;
        /// `volatile`
        const VOLATILE = 0x0200;
        /// `async`
        const ASYNC = 0x0400;
        /// `unsafe`
        const UNSAFE = 0x0800;
        /// `ref` (ref structs)
        const REF = 0x1000;
    }
}

/// Passing convention of a parameter or return value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum RefKind {
    /// By value
    #[default]
    None,
    /// `ref`
    Ref,
    /// `out`
    Out,
    /// `in`
    In,
    /// `ref readonly`
    RefReadOnly,
}

/// Variance annotation of a type parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Variance {
    /// Invariant
    #[default]
    None,
    /// Contravariant (`in`)
    In,
    /// Covariant (`out`)
    Out,
}

bitflags! {
    /// Special constraints of a type parameter
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeParameterConstraints: u8 {
        /// `class`
        const REFERENCE_TYPE = 0x01;
        /// `struct`
        const VALUE_TYPE = 0x02;
        /// `unmanaged`
        const UNMANAGED = 0x04;
        /// `notnull`
        const NOT_NULL = 0x08;
        /// `new()`
        const CONSTRUCTOR = 0x10;
    }
}

/// A node of the symbol graph
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Identity of this symbol
    pub id: SymbolId,
    /// Simple name (without generic arity)
    pub name: String,
    /// Declared accessibility
    pub accessibility: Accessibility,
    /// Declaration modifiers
    pub modifiers: Modifiers,
    /// The symbol this one is declared in
    pub containing: Option<SymbolId>,
    /// The assembly this symbol is declared in
    pub assembly: Option<SymbolId>,
    /// Custom attributes applied to this symbol
    pub attributes: Vec<AttributeData>,
    /// Documentation comment XML attached to the declaration, if any
    pub documentation: Option<String>,
    /// `true` for compiler-synthesized symbols (accessors, default constructors, ...)
    pub is_implicit: bool,
    /// Kind-specific data
    pub data: SymbolData,
}

/// Kind-specific part of a [`Symbol`]
#[derive(Debug, Clone)]
pub enum SymbolData {
    /// Assembly
    Assembly(AssemblyData),
    /// Namespace
    Namespace(NamespaceData),
    /// Named type
    NamedType(TypeData),
    /// Method
    Method(MethodData),
    /// Property or indexer
    Property(PropertyData),
    /// Field
    Field(FieldData),
    /// Event
    Event(EventData),
    /// Parameter
    Parameter(ParameterData),
    /// Type parameter
    TypeParameter(TypeParameterData),
}

/// Assembly payload
#[derive(Debug, Clone)]
pub struct AssemblyData {
    /// Four-part version string
    pub version: String,
    /// Path of the compiled file, used to locate the sibling XML documentation file
    pub location: Option<PathBuf>,
    /// Root namespace of this assembly
    pub global_namespace: SymbolId,
}

/// Namespace payload
#[derive(Debug, Clone, Default)]
pub struct NamespaceData {
    /// Nested namespaces and types, in declaration order
    pub members: Vec<SymbolId>,
    /// `true` for the unnamed root namespace
    pub is_global: bool,
}

/// Named type payload
#[derive(Debug, Clone)]
pub struct TypeData {
    /// Class, struct, interface, enum or delegate
    pub type_kind: TypeKind,
    /// Generic type parameters declared by this type
    pub type_parameters: Vec<SymbolId>,
    /// Base type (`None` for interfaces and `System.Object`)
    pub base_type: Option<TypeRef>,
    /// Directly implemented interfaces, in declaration order
    pub interfaces: Vec<TypeRef>,
    /// Members and nested types, in declaration order
    pub members: Vec<SymbolId>,
    /// Underlying integral type of an enum
    pub enum_underlying_type: Option<TypeRef>,
    /// The `Invoke` method of a delegate
    pub delegate_invoke: Option<SymbolId>,
    /// Well-known type marker
    pub special_type: SpecialType,
}

/// Method payload
#[derive(Debug, Clone)]
pub struct MethodData {
    /// What kind of method this is
    pub method_kind: MethodKind,
    /// Generic type parameters declared by this method
    pub type_parameters: Vec<SymbolId>,
    /// Parameters in order
    pub parameters: Vec<SymbolId>,
    /// Return type (`void` for constructors and accessors without a value)
    pub return_type: TypeRef,
    /// Return passing convention
    pub ref_kind: RefKind,
    /// Interface members implemented explicitly
    pub explicit_interface_implementations: Vec<SymbolId>,
    /// Base method overridden by this one
    pub overridden: Option<SymbolId>,
    /// Property or event an accessor belongs to
    pub associated: Option<SymbolId>,
    /// `true` for extension methods
    pub is_extension: bool,
}

/// Property payload
#[derive(Debug, Clone)]
pub struct PropertyData {
    /// Property type
    pub ty: TypeRef,
    /// Return passing convention
    pub ref_kind: RefKind,
    /// Indexer parameters
    pub parameters: Vec<SymbolId>,
    /// `get` accessor
    pub getter: Option<SymbolId>,
    /// `set` accessor
    pub setter: Option<SymbolId>,
    /// Interface properties implemented explicitly
    pub explicit_interface_implementations: Vec<SymbolId>,
    /// Base property overridden by this one
    pub overridden: Option<SymbolId>,
    /// `true` for indexers
    pub is_indexer: bool,
}

/// Field payload
#[derive(Debug, Clone)]
pub struct FieldData {
    /// Field type
    pub ty: TypeRef,
    /// Compile-time constant value of `const` fields and enum members
    pub constant: Option<ConstantValue>,
}

/// Event payload
#[derive(Debug, Clone)]
pub struct EventData {
    /// Delegate type of the event
    pub ty: TypeRef,
    /// `add` accessor
    pub add: Option<SymbolId>,
    /// `remove` accessor
    pub remove: Option<SymbolId>,
    /// Interface events implemented explicitly
    pub explicit_interface_implementations: Vec<SymbolId>,
    /// Base event overridden by this one
    pub overridden: Option<SymbolId>,
}

/// Parameter payload
#[derive(Debug, Clone)]
pub struct ParameterData {
    /// Parameter type
    pub ty: TypeRef,
    /// Passing convention
    pub ref_kind: RefKind,
    /// `params` array parameter
    pub is_params: bool,
    /// `this` parameter of an extension method
    pub is_this: bool,
    /// Explicit default value, `Some(ConstantValue::Null)` for `null`/`default`
    pub default_value: Option<ConstantValue>,
    /// Zero-based position
    pub ordinal: usize,
}

/// Type parameter payload
#[derive(Debug, Clone)]
pub struct TypeParameterData {
    /// Zero-based position within the declaring type or method
    pub ordinal: usize,
    /// Variance annotation (interfaces and delegates only)
    pub variance: Variance,
    /// Type constraints in declaration order
    pub constraint_types: Vec<TypeRef>,
    /// Special constraints
    pub constraints: TypeParameterConstraints,
    /// `true` when declared by a method rather than a type
    pub is_method_type_parameter: bool,
}

impl Symbol {
    /// Returns the kind of this symbol
    #[must_use]
    pub fn kind(&self) -> SymbolKind {
        match &self.data {
            SymbolData::Assembly(_) => SymbolKind::Assembly,
            SymbolData::Namespace(_) => SymbolKind::Namespace,
            SymbolData::NamedType(_) => SymbolKind::NamedType,
            SymbolData::Method(_) => SymbolKind::Method,
            SymbolData::Property(_) => SymbolKind::Property,
            SymbolData::Field(_) => SymbolKind::Field,
            SymbolData::Event(_) => SymbolKind::Event,
            SymbolData::Parameter(_) => SymbolKind::Parameter,
            SymbolData::TypeParameter(_) => SymbolKind::TypeParameter,
        }
    }

    /// Returns the assembly payload, if this is an assembly
    #[must_use]
    pub fn as_assembly(&self) -> Option<&AssemblyData> {
        match &self.data {
            SymbolData::Assembly(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the namespace payload, if this is a namespace
    #[must_use]
    pub fn as_namespace(&self) -> Option<&NamespaceData> {
        match &self.data {
            SymbolData::Namespace(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the named type payload, if this is a named type
    #[must_use]
    pub fn as_type(&self) -> Option<&TypeData> {
        match &self.data {
            SymbolData::NamedType(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the method payload, if this is a method
    #[must_use]
    pub fn as_method(&self) -> Option<&MethodData> {
        match &self.data {
            SymbolData::Method(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the property payload, if this is a property
    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyData> {
        match &self.data {
            SymbolData::Property(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the field payload, if this is a field
    #[must_use]
    pub fn as_field(&self) -> Option<&FieldData> {
        match &self.data {
            SymbolData::Field(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the event payload, if this is an event
    #[must_use]
    pub fn as_event(&self) -> Option<&EventData> {
        match &self.data {
            SymbolData::Event(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the parameter payload, if this is a parameter
    #[must_use]
    pub fn as_parameter(&self) -> Option<&ParameterData> {
        match &self.data {
            SymbolData::Parameter(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the type parameter payload, if this is a type parameter
    #[must_use]
    pub fn as_type_parameter(&self) -> Option<&TypeParameterData> {
        match &self.data {
            SymbolData::TypeParameter(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the type kind of a named type
    #[must_use]
    pub fn type_kind(&self) -> Option<TypeKind> {
        self.as_type().map(|data| data.type_kind)
    }

    /// Returns the method kind of a method
    #[must_use]
    pub fn method_kind(&self) -> Option<MethodKind> {
        self.as_method().map(|data| data.method_kind)
    }

    /// Returns `true` if this symbol is a named type of the given kind
    #[must_use]
    pub fn is_type_kind(&self, kind: TypeKind) -> bool {
        self.type_kind() == Some(kind)
    }

    /// Returns `true` for `static` symbols
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    /// Returns `true` for `abstract` symbols
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(Modifiers::ABSTRACT)
    }

    /// Returns `true` for `const` fields
    #[must_use]
    pub fn is_const(&self) -> bool {
        self.modifiers.contains(Modifiers::CONST)
    }

    /// Returns `true` for indexers
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        self.as_property().is_some_and(|data| data.is_indexer)
    }

    /// Returns `true` for the root namespace of an assembly
    #[must_use]
    pub fn is_global_namespace(&self) -> bool {
        self.as_namespace().is_some_and(|data| data.is_global)
    }

    /// Returns the parameters of a method or indexer
    #[must_use]
    pub fn parameters(&self) -> &[SymbolId] {
        match &self.data {
            SymbolData::Method(data) => &data.parameters,
            SymbolData::Property(data) => &data.parameters,
            _ => &[],
        }
    }

    /// Returns the type parameters of a named type or method
    #[must_use]
    pub fn type_parameters(&self) -> &[SymbolId] {
        match &self.data {
            SymbolData::NamedType(data) => &data.type_parameters,
            SymbolData::Method(data) => &data.type_parameters,
            _ => &[],
        }
    }

    /// Returns the number of type parameters
    #[must_use]
    pub fn arity(&self) -> usize {
        self.type_parameters().len()
    }

    /// Returns the name as stored in metadata
    ///
    /// Generic types carry a `` `N `` arity suffix and indexers are named `Item`.
    #[must_use]
    pub fn metadata_name(&self) -> Cow<'_, str> {
        match &self.data {
            SymbolData::NamedType(data) if !data.type_parameters.is_empty() => {
                Cow::Owned(format!("{}`{}", self.name, data.type_parameters.len()))
            }
            SymbolData::Property(data) if data.is_indexer => Cow::Borrowed("Item"),
            _ => Cow::Borrowed(&self.name),
        }
    }

    /// Returns the member implemented explicitly by this method, property or event
    #[must_use]
    pub fn explicit_interface_implementations(&self) -> &[SymbolId] {
        match &self.data {
            SymbolData::Method(data) => &data.explicit_interface_implementations,
            SymbolData::Property(data) => &data.explicit_interface_implementations,
            SymbolData::Event(data) => &data.explicit_interface_implementations,
            _ => &[],
        }
    }

    /// Returns the first explicitly implemented interface member
    #[must_use]
    pub fn first_explicit_interface_implementation(&self) -> Option<SymbolId> {
        self.explicit_interface_implementations().first().copied()
    }

    /// Returns the base member overridden by this one
    #[must_use]
    pub fn overridden(&self) -> Option<SymbolId> {
        match &self.data {
            SymbolData::Method(data) => data.overridden,
            SymbolData::Property(data) => data.overridden,
            SymbolData::Event(data) => data.overridden,
            _ => None,
        }
    }

    /// Returns the declared type of a field, property, event or parameter
    #[must_use]
    pub fn value_type(&self) -> Option<&TypeRef> {
        match &self.data {
            SymbolData::Method(data) => Some(&data.return_type),
            SymbolData::Property(data) => Some(&data.ty),
            SymbolData::Field(data) => Some(&data.ty),
            SymbolData::Event(data) => Some(&data.ty),
            SymbolData::Parameter(data) => Some(&data.ty),
            _ => None,
        }
    }
}
