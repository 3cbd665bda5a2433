//! Type references and well-known types.

use strum::{Display, EnumIter};

use super::SymbolId;

/// Well-known types of the core library
///
/// The registry creates one symbol per variant (except [`SpecialType::None`]) so that the
/// display code can map them to C# keywords and the documentation model can recognise the
/// universal base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum SpecialType {
    /// Not a well-known type
    #[default]
    None,
    /// `System.Object`
    Object,
    /// `System.Enum`
    Enum,
    /// `System.MulticastDelegate`
    MulticastDelegate,
    /// `System.Delegate`
    Delegate,
    /// `System.ValueType`
    ValueType,
    /// `System.Void`
    Void,
    /// `System.Boolean`
    Boolean,
    /// `System.Char`
    Char,
    /// `System.SByte`
    SByte,
    /// `System.Byte`
    Byte,
    /// `System.Int16`
    Int16,
    /// `System.UInt16`
    UInt16,
    /// `System.Int32`
    Int32,
    /// `System.UInt32`
    UInt32,
    /// `System.Int64`
    Int64,
    /// `System.UInt64`
    UInt64,
    /// `System.Decimal`
    Decimal,
    /// `System.Single`
    Single,
    /// `System.Double`
    Double,
    /// `System.String`
    String,
    /// `System.IntPtr`
    IntPtr,
    /// `System.UIntPtr`
    UIntPtr,
    /// `System.Nullable<T>`
    Nullable,
    /// `System.Collections.IEnumerable`
    IEnumerable,
    /// `System.Collections.Generic.IEnumerable<T>`
    IEnumerableT,
}

impl SpecialType {
    /// Returns the C# keyword alias of this type, if it has one
    #[must_use]
    pub fn keyword(&self) -> Option<&'static str> {
        Some(match self {
            SpecialType::Object => "object",
            SpecialType::Void => "void",
            SpecialType::Boolean => "bool",
            SpecialType::Char => "char",
            SpecialType::SByte => "sbyte",
            SpecialType::Byte => "byte",
            SpecialType::Int16 => "short",
            SpecialType::UInt16 => "ushort",
            SpecialType::Int32 => "int",
            SpecialType::UInt32 => "uint",
            SpecialType::Int64 => "long",
            SpecialType::UInt64 => "ulong",
            SpecialType::Decimal => "decimal",
            SpecialType::Single => "float",
            SpecialType::Double => "double",
            SpecialType::String => "string",
            _ => return None,
        })
    }

    /// Returns `(namespace, name, arity)` of this type inside the core library
    #[must_use]
    pub(crate) fn definition(&self) -> Option<(&'static str, &'static str, usize)> {
        Some(match self {
            SpecialType::None => return None,
            SpecialType::Object => ("System", "Object", 0),
            SpecialType::Enum => ("System", "Enum", 0),
            SpecialType::MulticastDelegate => ("System", "MulticastDelegate", 0),
            SpecialType::Delegate => ("System", "Delegate", 0),
            SpecialType::ValueType => ("System", "ValueType", 0),
            SpecialType::Void => ("System", "Void", 0),
            SpecialType::Boolean => ("System", "Boolean", 0),
            SpecialType::Char => ("System", "Char", 0),
            SpecialType::SByte => ("System", "SByte", 0),
            SpecialType::Byte => ("System", "Byte", 0),
            SpecialType::Int16 => ("System", "Int16", 0),
            SpecialType::UInt16 => ("System", "UInt16", 0),
            SpecialType::Int32 => ("System", "Int32", 0),
            SpecialType::UInt32 => ("System", "UInt32", 0),
            SpecialType::Int64 => ("System", "Int64", 0),
            SpecialType::UInt64 => ("System", "UInt64", 0),
            SpecialType::Decimal => ("System", "Decimal", 0),
            SpecialType::Single => ("System", "Single", 0),
            SpecialType::Double => ("System", "Double", 0),
            SpecialType::String => ("System", "String", 0),
            SpecialType::IntPtr => ("System", "IntPtr", 0),
            SpecialType::UIntPtr => ("System", "UIntPtr", 0),
            SpecialType::Nullable => ("System", "Nullable", 1),
            SpecialType::IEnumerable => ("System.Collections", "IEnumerable", 0),
            SpecialType::IEnumerableT => ("System.Collections.Generic", "IEnumerable", 1),
        })
    }

    /// Returns `true` for the numeric primitive types
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SpecialType::SByte
                | SpecialType::Byte
                | SpecialType::Int16
                | SpecialType::UInt16
                | SpecialType::Int32
                | SpecialType::UInt32
                | SpecialType::Int64
                | SpecialType::UInt64
                | SpecialType::Decimal
                | SpecialType::Single
                | SpecialType::Double
        )
    }
}

/// A type as it appears in a signature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A named type, constructed when `type_arguments` is not empty
    Named {
        /// The type definition
        definition: SymbolId,
        /// Type arguments of a constructed generic type
        type_arguments: Vec<TypeRef>,
    },
    /// A type parameter of the enclosing type or method
    TypeParameter(SymbolId),
    /// An array
    Array {
        /// Element type
        element: Box<TypeRef>,
        /// Number of dimensions
        rank: u32,
    },
    /// An unmanaged pointer
    Pointer(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a reference to a non-generic named type
    #[must_use]
    pub fn named(definition: SymbolId) -> Self {
        TypeRef::Named {
            definition,
            type_arguments: Vec::new(),
        }
    }

    /// Creates a reference to a constructed generic type
    #[must_use]
    pub fn generic(definition: SymbolId, type_arguments: Vec<TypeRef>) -> Self {
        TypeRef::Named {
            definition,
            type_arguments,
        }
    }

    /// Wraps this type in a single-dimensional array
    #[must_use]
    pub fn array(self) -> Self {
        TypeRef::Array {
            element: Box::new(self),
            rank: 1,
        }
    }

    /// Wraps this type in a pointer
    #[must_use]
    pub fn pointer(self) -> Self {
        TypeRef::Pointer(Box::new(self))
    }

    /// Returns the named type definition, ignoring type arguments
    #[must_use]
    pub fn definition(&self) -> Option<SymbolId> {
        match self {
            TypeRef::Named { definition, .. } => Some(*definition),
            _ => None,
        }
    }

    /// Returns the type arguments of a constructed type
    #[must_use]
    pub fn type_arguments(&self) -> &[TypeRef] {
        match self {
            TypeRef::Named { type_arguments, .. } => type_arguments,
            _ => &[],
        }
    }
}
