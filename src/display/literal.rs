//! Literal rendering for constants, default values and attribute arguments.

use crate::{
    display::{symbol::Renderer, DisplayPart, DisplayPartKind, DisplayParts},
    enums::{get_constituent_fields, OneOrMany},
    symbols::{ConstantValue, SymbolId, TypeKind, TypeRef, TypedConstant},
};

/// Formats a constant the way C# source spells it
///
/// # Example
///
/// ```rust
/// use cildoc::display::format_primitive;
/// use cildoc::symbols::ConstantValue;
///
/// assert_eq!(format_primitive(&ConstantValue::String("a\"b\n".into())), r#""a\"b\n""#);
/// assert_eq!(format_primitive(&ConstantValue::Char('x')), "'x'");
/// assert_eq!(format_primitive(&ConstantValue::Bool(true)), "true");
/// assert_eq!(format_primitive(&ConstantValue::Null), "null");
/// ```
#[must_use]
pub fn format_primitive(value: &ConstantValue) -> String {
    match value {
        ConstantValue::Null => "null".to_string(),
        ConstantValue::Bool(value) => value.to_string(),
        ConstantValue::Char(value) => {
            let mut text = String::from('\'');
            escape_char(*value, '\'', &mut text);
            text.push('\'');
            text
        }
        ConstantValue::String(value) => {
            let mut text = String::from('"');
            for c in value.chars() {
                escape_char(c, '"', &mut text);
            }
            text.push('"');
            text
        }
        ConstantValue::SByte(value) => value.to_string(),
        ConstantValue::Byte(value) => value.to_string(),
        ConstantValue::Int16(value) => value.to_string(),
        ConstantValue::UInt16(value) => value.to_string(),
        ConstantValue::Int32(value) => value.to_string(),
        ConstantValue::UInt32(value) => value.to_string(),
        ConstantValue::Int64(value) => value.to_string(),
        ConstantValue::UInt64(value) => value.to_string(),
        ConstantValue::Single(value) => format_float(f64::from(*value), value.to_string()),
        ConstantValue::Double(value) => format_float(*value, value.to_string()),
        ConstantValue::Decimal(value) => value.clone(),
    }
}

fn format_float(value: f64, text: String) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        text
    }
}

fn escape_char(c: char, quote: char, out: &mut String) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\0' => out.push_str("\\0"),
        '\u{7}' => out.push_str("\\a"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{b}' => out.push_str("\\v"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
        c => out.push(c),
    }
}

fn literal_kind(value: &ConstantValue) -> DisplayPartKind {
    match value {
        ConstantValue::Null | ConstantValue::Bool(_) => DisplayPartKind::Keyword,
        ConstantValue::Char(_) | ConstantValue::String(_) => DisplayPartKind::StringLiteral,
        _ => DisplayPartKind::NumericLiteral,
    }
}

impl Renderer<'_> {
    /// Appends a primitive literal
    pub fn primitive(&self, parts: &mut DisplayParts, value: &ConstantValue) {
        let text = format_primitive(value);
        match literal_kind(value) {
            DisplayPartKind::Keyword => parts.keyword(&text),
            kind => parts.push(DisplayPart::new(kind, text)),
        }
    }

    /// Appends the value of a parameter default or constant field of type `ty`
    ///
    /// `null` stays `null` only for reference types, nullable value types and pointers. Any other
    /// type, an unconstrained type parameter included, renders as `default(T)`, or `default` when
    /// the renderer prefers the literal. Values of enum types are spelled with field names.
    pub fn default_value(&self, parts: &mut DisplayParts, value: &ConstantValue, ty: &TypeRef) {
        let registry = self.registry;

        if value.is_null() {
            let accepts_null = registry.is_reference_type(ty)
                || registry.is_nullable_value_type(ty)
                || matches!(ty, TypeRef::Pointer(_));

            if !accepts_null {
                parts.keyword("default");
                if !self.prefer_default_literal {
                    parts.punctuation("(");
                    self.type_ref(parts, ty);
                    parts.punctuation(")");
                }
            } else {
                parts.keyword("null");
            }
            return;
        }

        if let Some(definition) = ty.definition() {
            if registry.get(definition).is_type_kind(TypeKind::Enum) {
                self.enum_value(parts, definition, value);
                return;
            }
        }

        self.primitive(parts, value);
    }

    /// Appends an enum value as `Color.Red | Color.Blue`, or `(Color)42` without a decomposition
    pub fn enum_value(&self, parts: &mut DisplayParts, enum_type: SymbolId, value: &ConstantValue) {
        let registry = self.registry;
        let fields = value
            .to_u64()
            .map(|bits| get_constituent_fields(registry, bits, enum_type))
            .unwrap_or_else(OneOrMany::empty);

        if fields.is_empty() {
            parts.punctuation("(");
            self.named_type(parts, enum_type, None, false);
            parts.punctuation(")");
            self.primitive(parts, value);
            return;
        }

        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                parts.space();
                parts.operator("|");
                parts.space();
            }
            self.named_type(parts, enum_type, None, false);
            parts.punctuation(".");
            let name = self.escape(&registry.get(field.symbol).name);
            parts.symbol(DisplayPartKind::EnumMemberName, field.symbol, &name);
        }
    }

    /// Appends an attribute argument
    pub fn typed_constant(&self, parts: &mut DisplayParts, constant: &TypedConstant) {
        match constant {
            TypedConstant::Primitive(value) => self.primitive(parts, value),
            TypedConstant::Enum { enum_type, value } => self.enum_value(parts, *enum_type, value),
            TypedConstant::Type(ty) => {
                parts.keyword("typeof");
                parts.punctuation("(");
                self.type_ref(parts, ty);
                parts.punctuation(")");
            }
            TypedConstant::Array { element, values } => {
                parts.keyword_space("new");
                self.type_ref(parts, element);
                parts.punctuation("[");
                parts.punctuation("]");
                parts.space();
                parts.punctuation("{");
                parts.space();
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        parts.comma_space();
                    }
                    self.typed_constant(parts, value);
                }
                if !values.is_empty() {
                    parts.space();
                }
                parts.punctuation("}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes() {
        assert_eq!(format_primitive(&ConstantValue::Char('\'')), r"'\''");
        assert_eq!(format_primitive(&ConstantValue::Char('"')), "'\"'");
        assert_eq!(format_primitive(&ConstantValue::String("tab\there".into())), r#""tab\there""#);
        assert_eq!(format_primitive(&ConstantValue::String("\u{1}".into())), r#""\u0001""#);
    }

    #[test]
    fn numbers() {
        assert_eq!(format_primitive(&ConstantValue::Int32(-5)), "-5");
        assert_eq!(format_primitive(&ConstantValue::Double(1.5)), "1.5");
        assert_eq!(format_primitive(&ConstantValue::Double(f64::NAN)), "NaN");
        assert_eq!(format_primitive(&ConstantValue::Single(f32::NEG_INFINITY)), "-Infinity");
        assert_eq!(format_primitive(&ConstantValue::Decimal("1.25".into())), "1.25");
    }
}
