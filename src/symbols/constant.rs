//! Constant values and applied custom attributes.

use super::{SymbolId, TypeRef};

/// A compile-time constant
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    /// `null`, or the default value of a value type
    Null,
    /// Boolean value
    Bool(bool),
    /// Character value (16-bit Unicode)
    Char(char),
    /// UTF-8 string
    String(String),
    /// Signed 8-bit integer
    SByte(i8),
    /// Unsigned 8-bit integer
    Byte(u8),
    /// Signed 16-bit integer
    Int16(i16),
    /// Unsigned 16-bit integer
    UInt16(u16),
    /// Signed 32-bit integer
    Int32(i32),
    /// Unsigned 32-bit integer
    UInt32(u32),
    /// Signed 64-bit integer
    Int64(i64),
    /// Unsigned 64-bit integer
    UInt64(u64),
    /// 32-bit floating point
    Single(f32),
    /// 64-bit floating point
    Double(f64),
    /// Decimal, kept in its invariant text form
    Decimal(String),
}

impl ConstantValue {
    /// Converts an integral constant to its 64-bit pattern
    ///
    /// Signed values are sign-extended, so `-1i8` becomes `u64::MAX`. This is the
    /// representation enum flag decomposition works on.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        Some(match *self {
            ConstantValue::Bool(value) => u64::from(value),
            ConstantValue::Char(value) => u64::from(u32::from(value)),
            ConstantValue::SByte(value) => i64::from(value) as u64,
            ConstantValue::Byte(value) => u64::from(value),
            ConstantValue::Int16(value) => i64::from(value) as u64,
            ConstantValue::UInt16(value) => u64::from(value),
            ConstantValue::Int32(value) => i64::from(value) as u64,
            ConstantValue::UInt32(value) => u64::from(value),
            ConstantValue::Int64(value) => value as u64,
            ConstantValue::UInt64(value) => value,
            _ => return None,
        })
    }

    /// Returns `true` for [`ConstantValue::Null`]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, ConstantValue::Null)
    }

    /// Returns `true` for a numeric zero or `false`
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            ConstantValue::Single(value) => *value == 0.0,
            ConstantValue::Double(value) => *value == 0.0,
            ConstantValue::Decimal(value) => value.trim_start_matches('-') == "0",
            other => other.to_u64() == Some(0),
        }
    }
}

/// An argument value of an applied attribute
#[derive(Debug, Clone, PartialEq)]
pub enum TypedConstant {
    /// A primitive, string or `null` value
    Primitive(ConstantValue),
    /// A value of an enum type
    Enum {
        /// The enum type
        enum_type: SymbolId,
        /// The underlying value
        value: ConstantValue,
    },
    /// A `typeof(T)` argument
    Type(TypeRef),
    /// An array argument
    Array {
        /// Element type
        element: TypeRef,
        /// Element values
        values: Vec<TypedConstant>,
    },
}

/// A custom attribute applied to a symbol
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeData {
    /// The attribute type
    pub attribute_class: SymbolId,
    /// Positional constructor arguments
    pub constructor_arguments: Vec<TypedConstant>,
    /// Named field and property arguments
    pub named_arguments: Vec<(String, TypedConstant)>,
}

impl AttributeData {
    /// Creates an attribute without arguments
    #[must_use]
    pub fn new(attribute_class: SymbolId) -> Self {
        AttributeData {
            attribute_class,
            constructor_arguments: Vec::new(),
            named_arguments: Vec::new(),
        }
    }

    /// Appends a positional argument
    #[must_use]
    pub fn argument(mut self, value: TypedConstant) -> Self {
        self.constructor_arguments.push(value);
        self
    }

    /// Appends a named argument
    #[must_use]
    pub fn named_argument(mut self, name: &str, value: TypedConstant) -> Self {
        self.named_arguments.push((name.to_string(), value));
        self
    }

    /// Returns `true` if the attribute has arguments of any kind
    #[must_use]
    pub fn has_arguments(&self) -> bool {
        !self.constructor_arguments.is_empty() || !self.named_arguments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_values_sign_extend() {
        assert_eq!(ConstantValue::SByte(-1).to_u64(), Some(u64::MAX));
        assert_eq!(ConstantValue::Int32(-2).to_u64(), Some(u64::MAX - 1));
        assert_eq!(ConstantValue::UInt16(0xFFFF).to_u64(), Some(0xFFFF));
        assert_eq!(ConstantValue::String("a".into()).to_u64(), None);
    }

    #[test]
    fn zero_detection() {
        assert!(ConstantValue::Int64(0).is_zero());
        assert!(ConstantValue::Double(0.0).is_zero());
        assert!(ConstantValue::Decimal("0".into()).is_zero());
        assert!(!ConstantValue::Null.is_zero());
        assert!(!ConstantValue::Byte(3).is_zero());
    }
}
