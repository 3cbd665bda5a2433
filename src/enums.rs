//! Enum field tables and `[Flags]` value decomposition.
//!
//! Attribute arguments, parameter default values and the "Combination of" column of enum pages
//! render enum values by name rather than by number. This module finds the named fields that make
//! up a value.
//!
//! Field tables are sorted by value, then by name descending. Among fields with equal values the
//! later table entry always wins, both for exact matches and during greedy decomposition.
//!
//! # Example
//!
//! ```rust
//! use cildoc::enums::{get_constituent_fields, get_fields};
//! use cildoc::symbols::{AttributeData, SymbolRegistry, TypeBuilder};
//!
//! let mut registry = SymbolRegistry::new();
//! let assembly = registry.add_assembly("Acme", "1.0.0.0");
//! let namespace = registry.namespace(assembly, "Acme")?;
//! let flags = registry.find_type("System.FlagsAttribute").unwrap();
//!
//! let access = TypeBuilder::enumeration("Access")
//!     .public()
//!     .attribute(AttributeData::new(flags))
//!     .enum_field("None", 0)
//!     .enum_field("Read", 1)
//!     .enum_field("Write", 2)
//!     .build(&mut registry, namespace)?;
//!
//! let fields = get_constituent_fields(&registry, 3, access);
//! let names: Vec<&str> = fields.iter().map(|f| registry.get(f.symbol).name.as_str()).collect();
//! assert_eq!(names, ["Read", "Write"]);
//! assert_eq!(get_fields(&registry, access).len(), 3);
//! # Ok::<(), cildoc::Error>(())
//! ```

use std::cmp::Ordering;

use crate::symbols::{SymbolId, SymbolRegistry};

/// One enum constant with its value as a 64-bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumFieldInfo {
    /// The field symbol
    pub symbol: SymbolId,
    /// The constant value, sign-extended for signed underlying types
    pub value: u64,
}

impl EnumFieldInfo {
    /// Returns `true` if every bit of `self` is set in `value`
    #[must_use]
    pub fn is_subset_of(&self, value: u64) -> bool {
        value & self.value == self.value
    }
}

/// Either a single item or a list of items
///
/// Decomposition results are nearly always one field, so the single case stays allocation free.
/// An empty `Many` means that no decomposition exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    /// Exactly one item
    One(T),
    /// Zero or more items
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Returns an empty result
    #[must_use]
    pub fn empty() -> Self {
        OneOrMany::Many(Vec::new())
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    /// Returns `true` when there are no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item).iter(),
            OneOrMany::Many(items) => items.iter(),
        }
    }

    /// Converts into a vector
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns `true` if `enum_type` is an enum marked with `[Flags]`
#[must_use]
pub fn is_flags(registry: &SymbolRegistry, enum_type: SymbolId) -> bool {
    registry.is_flags_enum(enum_type)
}

/// Builds the sorted field table of an enum
///
/// Fields without an integral constant are skipped.
#[must_use]
pub fn get_fields(registry: &SymbolRegistry, enum_type: SymbolId) -> Vec<EnumFieldInfo> {
    let mut fields: Vec<EnumFieldInfo> = registry
        .members(enum_type)
        .iter()
        .filter_map(|member| {
            let value = registry
                .get(*member)
                .as_field()?
                .constant
                .as_ref()?
                .to_u64()?;
            Some(EnumFieldInfo {
                symbol: *member,
                value,
            })
        })
        .collect();

    fields.sort_by(|a, b| match a.value.cmp(&b.value) {
        Ordering::Equal => registry.get(b.symbol).name.cmp(&registry.get(a.symbol).name),
        other => other,
    });

    fields
}

/// Finds the last field in a sorted table whose value equals `value`
#[must_use]
pub fn find_field(fields: &[EnumFieldInfo], value: u64) -> Option<EnumFieldInfo> {
    let end = fields.partition_point(|field| field.value <= value);
    end.checked_sub(1)
        .map(|index| fields[index])
        .filter(|field| field.value == value)
}

/// Decomposes `value` over a sorted field table
///
/// Non-flags enums and zero only match exactly. Flags enums prefer an exact match and otherwise
/// subtract the largest field that fits until nothing remains. The result is ordered by value
/// ascending and is empty when `value` cannot be composed from the fields.
#[must_use]
pub fn constituent_fields(
    fields: &[EnumFieldInfo],
    value: u64,
    is_flags: bool,
) -> OneOrMany<EnumFieldInfo> {
    if let Some(field) = find_field(fields, value) {
        return OneOrMany::One(field);
    }

    if !is_flags || value == 0 {
        return OneOrMany::empty();
    }

    decompose(fields, value, None)
}

/// Decomposes `value` without using a field equal to `value` itself
///
/// This is the list of smaller flags a combined constant is made of. Non-flags enums and zero
/// have no decomposition.
#[must_use]
pub fn minimal_constituent_fields(
    fields: &[EnumFieldInfo],
    value: u64,
    is_flags: bool,
) -> OneOrMany<EnumFieldInfo> {
    if !is_flags || value == 0 {
        return OneOrMany::empty();
    }

    decompose(fields, value, Some(value))
}

fn decompose(fields: &[EnumFieldInfo], value: u64, exclude: Option<u64>) -> OneOrMany<EnumFieldInfo> {
    let mut remaining = value;
    let mut result = Vec::new();

    for field in fields.iter().rev() {
        if field.value == 0 || Some(field.value) == exclude {
            continue;
        }

        if field.is_subset_of(remaining) {
            result.push(*field);
            remaining &= !field.value;

            if remaining == 0 {
                break;
            }
        }
    }

    if remaining != 0 {
        return OneOrMany::empty();
    }

    result.reverse();

    match result.len() {
        1 => OneOrMany::One(result[0]),
        _ => OneOrMany::Many(result),
    }
}

/// Decomposes `value` over the fields of `enum_type`
#[must_use]
pub fn get_constituent_fields(
    registry: &SymbolRegistry,
    value: u64,
    enum_type: SymbolId,
) -> OneOrMany<EnumFieldInfo> {
    constituent_fields(
        &get_fields(registry, enum_type),
        value,
        is_flags(registry, enum_type),
    )
}

/// Decomposes `value` over the fields of `enum_type`, excluding a field equal to `value`
#[must_use]
pub fn get_minimal_constituent_fields(
    registry: &SymbolRegistry,
    value: u64,
    enum_type: SymbolId,
) -> OneOrMany<EnumFieldInfo> {
    minimal_constituent_fields(
        &get_fields(registry, enum_type),
        value,
        is_flags(registry, enum_type),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[u64]) -> Vec<EnumFieldInfo> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| EnumFieldInfo {
                symbol: SymbolId::new(index),
                value: *value,
            })
            .collect()
    }

    fn values(result: &OneOrMany<EnumFieldInfo>) -> Vec<u64> {
        result.iter().map(|field| field.value).collect()
    }

    #[test]
    fn exact_match_is_preferred() {
        let fields = table(&[0, 1, 2, 3, 4]);

        assert_eq!(values(&constituent_fields(&fields, 3, true)), vec![3]);
        assert_eq!(values(&constituent_fields(&fields, 5, true)), vec![1, 4]);
        assert_eq!(values(&constituent_fields(&fields, 0, true)), vec![0]);
    }

    #[test]
    fn undecomposable_value_is_empty() {
        let fields = table(&[1, 2]);

        assert!(constituent_fields(&fields, 8, true).is_empty());
        assert!(constituent_fields(&fields, 3, false).is_empty());
        assert!(constituent_fields(&fields, 0, true).is_empty());
    }

    #[test]
    fn duplicates_resolve_to_later_entry() {
        let fields = table(&[1, 2, 2, 4]);

        let exact = constituent_fields(&fields, 2, false);
        assert_eq!(exact, OneOrMany::One(fields[2]));

        let greedy = constituent_fields(&fields, 6, true);
        assert_eq!(greedy.into_vec(), vec![fields[2], fields[3]]);
    }

    #[test]
    fn minimal_excludes_own_value() {
        let fields = table(&[0, 1, 2, 3, 4]);

        assert_eq!(values(&minimal_constituent_fields(&fields, 3, true)), vec![1, 2]);
        assert!(minimal_constituent_fields(&fields, 1, true).is_empty());
        assert!(minimal_constituent_fields(&fields, 3, false).is_empty());
    }

    #[test]
    fn decomposition_reproduces_value() {
        let fields = table(&[1, 2, 4, 8, 16, 24]);

        for value in 0..64u64 {
            let result = constituent_fields(&fields, value, true);
            if !result.is_empty() {
                let combined = result.iter().fold(0, |acc, field| acc | field.value);
                assert_eq!(combined, value);
            }
        }
    }

    #[test]
    fn equal_values_sort_by_name_descending() -> crate::Result<()> {
        use crate::symbols::TypeBuilder;

        let mut registry = SymbolRegistry::new();
        let assembly = registry.add_assembly("Acme", "1.0.0.0");
        let namespace = registry.namespace(assembly, "Acme")?;
        let mode = TypeBuilder::enumeration("Mode")
            .public()
            .enum_field("Alpha", 1)
            .enum_field("Gamma", 1)
            .enum_field("Beta", 1)
            .enum_field("Zero", 0)
            .build(&mut registry, namespace)?;

        let fields = get_fields(&registry, mode);
        let names: Vec<&str> = fields.iter().map(|f| registry.get(f.symbol).name.as_str()).collect();
        assert_eq!(names, ["Zero", "Gamma", "Beta", "Alpha"]);

        let exact = get_constituent_fields(&registry, 1, mode);
        assert_eq!(exact.into_vec(), vec![fields[3]]);
        Ok(())
    }
}
