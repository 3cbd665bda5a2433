//! Deterministic orderings of namespaces, types, members and assemblies.
//!
//! Every comparer is a total order over the [`SymbolId`]s of one registry: two different symbols
//! never compare equal, so independent sorts of the same set always agree. The last tie-break of
//! each chain is the symbol identity itself.
//!
//! # Example
//!
//! ```rust
//! use cildoc::comparers::{SymbolComparer, SymbolDefinitionComparer};
//! use cildoc::symbols::SymbolRegistry;
//!
//! let mut registry = SymbolRegistry::new();
//! let assembly = registry.add_assembly("Acme", "1.0.0.0");
//! let acme = registry.namespace(assembly, "Acme")?;
//! let system = registry.namespace(assembly, "System.Text")?;
//!
//! let mut namespaces = vec![acme, system];
//! let comparer = SymbolDefinitionComparer::system_first();
//! namespaces.sort_by(|a, b| comparer.namespaces.compare(&registry, *a, *b));
//! assert_eq!(namespaces, vec![system, acme]);
//! # Ok::<(), cildoc::Error>(())
//! ```

use std::cmp::Ordering;

use crate::{
    display::{to_display_string, DisplayFormat},
    symbols::{MethodKind, SymbolId, SymbolKind, SymbolRegistry, TypeKind, TypeRef},
};

/// A total order over symbols of one registry
pub trait SymbolComparer {
    /// Compares two symbols
    fn compare(&self, registry: &SymbolRegistry, x: SymbolId, y: SymbolId) -> Ordering;
}

/// Orders namespaces by their dotted names
///
/// The global namespace sorts before every named namespace. With `system_first`, `System` and
/// its sub-namespaces come before all other roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NamespaceComparer {
    /// Put `System` and `System.*` first
    pub system_first: bool,
}

impl NamespaceComparer {
    /// Compares two dotted namespace names
    #[must_use]
    pub fn compare_names(&self, x: &str, y: &str) -> Ordering {
        match (x.is_empty(), y.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        if self.system_first {
            match (is_system(x), is_system(y)) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }

        let mut left = x.split('.');
        let mut right = y.split('.');
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) => match a.cmp(b) {
                    Ordering::Equal => continue,
                    other => return other,
                },
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
            }
        }
    }
}

fn is_system(namespace: &str) -> bool {
    namespace == "System" || namespace.starts_with("System.")
}

impl SymbolComparer for NamespaceComparer {
    fn compare(&self, registry: &SymbolRegistry, x: SymbolId, y: SymbolId) -> Ordering {
        if x == y {
            return Ordering::Equal;
        }

        self.compare_names(&registry.namespace_name(x), &registry.namespace_name(y))
            .then_with(|| x.cmp(&y))
    }
}

/// Rank of a type kind, used before the name when sorting types
#[must_use]
pub fn type_kind_rank(kind: TypeKind) -> u8 {
    match kind {
        TypeKind::Class => 0,
        TypeKind::Struct => 1,
        TypeKind::Interface => 2,
        TypeKind::Enum => 3,
        TypeKind::Delegate => 4,
    }
}

/// Orders types by namespace, containing types, kind, name, arity and signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeComparer {
    /// Namespace order
    pub namespaces: NamespaceComparer,
}

impl TypeComparer {
    fn compare_chain(&self, registry: &SymbolRegistry, x: SymbolId, y: SymbolId) -> Ordering {
        let left = registry.containing_types(x);
        let right = registry.containing_types(y);

        for (a, b) in left.iter().zip(right.iter()) {
            match self.compare_simple(registry, *a, *b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        left.len().cmp(&right.len())
    }

    fn compare_simple(&self, registry: &SymbolRegistry, x: SymbolId, y: SymbolId) -> Ordering {
        let left = registry.get(x);
        let right = registry.get(y);

        let rank = |symbol: &crate::symbols::Symbol| symbol.type_kind().map_or(u8::MAX, type_kind_rank);

        rank(left)
            .cmp(&rank(right))
            .then_with(|| left.name.cmp(&right.name))
            .then_with(|| left.arity().cmp(&right.arity()))
    }

    /// Compares two type references by definition, then by their rendered text
    #[must_use]
    pub fn compare_refs(&self, registry: &SymbolRegistry, x: &TypeRef, y: &TypeRef) -> Ordering {
        let definitions = match (x.definition(), y.definition()) {
            (Some(a), Some(b)) => self.compare(registry, a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        definitions.then_with(|| {
            let format = DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES_AND_TYPE_PARAMETERS;
            crate::display::type_display_parts(registry, x, &format)
                .to_string()
                .cmp(&crate::display::type_display_parts(registry, y, &format).to_string())
        })
    }
}

impl SymbolComparer for TypeComparer {
    fn compare(&self, registry: &SymbolRegistry, x: SymbolId, y: SymbolId) -> Ordering {
        if x == y {
            return Ordering::Equal;
        }

        self.namespaces
            .compare_names(
                &registry.containing_namespace_name(x),
                &registry.containing_namespace_name(y),
            )
            .then_with(|| self.compare_chain(registry, x, y))
            .then_with(|| self.compare_simple(registry, x, y))
            .then_with(|| {
                let format = DisplayFormat::SORT_DECLARATION_LIST;
                to_display_string(registry, x, &format).cmp(&to_display_string(registry, y, &format))
            })
            .then_with(|| x.cmp(&y))
    }
}

/// Rank of a member, used before the name when sorting members
///
/// Constructors come first, then fields and constants, properties, indexers, methods,
/// operators and conversions, and finally events. Nested types rank last.
#[must_use]
pub fn member_rank(registry: &SymbolRegistry, member: SymbolId) -> u8 {
    let symbol = registry.get(member);
    match symbol.kind() {
        SymbolKind::Method => match symbol.method_kind() {
            Some(MethodKind::Constructor | MethodKind::StaticConstructor) => 0,
            Some(MethodKind::UserDefinedOperator | MethodKind::Conversion) => 5,
            _ => 4,
        },
        SymbolKind::Field => 1,
        SymbolKind::Property if symbol.is_indexer() => 3,
        SymbolKind::Property => 2,
        SymbolKind::Event => 6,
        _ => 7,
    }
}

/// Orders members by kind, name, arity, parameter count and full signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberComparer {
    /// Order of the containing types
    pub types: TypeComparer,
}

impl SymbolComparer for MemberComparer {
    fn compare(&self, registry: &SymbolRegistry, x: SymbolId, y: SymbolId) -> Ordering {
        if x == y {
            return Ordering::Equal;
        }

        let left = registry.get(x);
        let right = registry.get(y);

        member_rank(registry, x)
            .cmp(&member_rank(registry, y))
            .then_with(|| left.name.cmp(&right.name))
            .then_with(|| left.arity().cmp(&right.arity()))
            .then_with(|| registry.parameters(x).len().cmp(&registry.parameters(y).len()))
            .then_with(|| {
                let format = DisplayFormat::SORT_DECLARATION_LIST;
                to_display_string(registry, x, &format).cmp(&to_display_string(registry, y, &format))
            })
            .then_with(|| match (registry.containing_type(x), registry.containing_type(y)) {
                (Some(a), Some(b)) => self.types.compare(registry, a, b),
                (a, b) => a.is_some().cmp(&b.is_some()),
            })
            .then_with(|| x.cmp(&y))
    }
}

/// Orders assemblies by name, then version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblyComparer;

impl SymbolComparer for AssemblyComparer {
    fn compare(&self, registry: &SymbolRegistry, x: SymbolId, y: SymbolId) -> Ordering {
        if x == y {
            return Ordering::Equal;
        }

        let left = registry.get(x);
        let right = registry.get(y);
        let version = |symbol: &crate::symbols::Symbol| {
            symbol
                .as_assembly()
                .map(|data| {
                    data.version
                        .split('.')
                        .map(|part| part.parse::<u32>().unwrap_or(0))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        };

        left.name
            .cmp(&right.name)
            .then_with(|| version(left).cmp(&version(right)))
            .then_with(|| x.cmp(&y))
    }
}

/// The comparers used together when writing definitions and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDefinitionComparer {
    /// Namespace order
    pub namespaces: NamespaceComparer,
    /// Type order
    pub types: TypeComparer,
    /// Member order
    pub members: MemberComparer,
    /// Assembly order
    pub assemblies: AssemblyComparer,
}

impl SymbolDefinitionComparer {
    fn with_namespaces(namespaces: NamespaceComparer) -> Self {
        let types = TypeComparer { namespaces };
        SymbolDefinitionComparer {
            namespaces,
            types,
            members: MemberComparer { types },
            assemblies: AssemblyComparer,
        }
    }

    /// Plain ordinal namespace order
    #[must_use]
    pub fn default() -> Self {
        Self::with_namespaces(NamespaceComparer { system_first: false })
    }

    /// `System` and `System.*` namespaces first
    #[must_use]
    pub fn system_first() -> Self {
        Self::with_namespaces(NamespaceComparer { system_first: true })
    }

    /// Sorts symbols of one kind group in place
    pub fn sort(&self, registry: &SymbolRegistry, symbols: &mut [SymbolId]) {
        symbols.sort_by(|x, y| self.compare(registry, *x, *y));
    }
}

impl Default for SymbolDefinitionComparer {
    fn default() -> Self {
        SymbolDefinitionComparer::default()
    }
}

impl SymbolComparer for SymbolDefinitionComparer {
    /// Dispatches on the symbol kinds; symbols of different kind groups order assemblies,
    /// namespaces, types, then members
    fn compare(&self, registry: &SymbolRegistry, x: SymbolId, y: SymbolId) -> Ordering {
        let group = |id: SymbolId| match registry.get(id).kind() {
            SymbolKind::Assembly => 0,
            SymbolKind::Namespace => 1,
            SymbolKind::NamedType => 2,
            _ => 3,
        };

        match (group(x), group(y)) {
            (0, 0) => self.assemblies.compare(registry, x, y),
            (1, 1) => self.namespaces.compare(registry, x, y),
            (2, 2) => self.types.compare(registry, x, y),
            (3, 3) => self.members.compare(registry, x, y),
            (a, b) => a.cmp(&b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories::fixture;

    #[test]
    fn namespace_names() {
        let plain = NamespaceComparer::default();
        let system = NamespaceComparer { system_first: true };

        assert_eq!(plain.compare_names("", "A"), Ordering::Less);
        assert_eq!(plain.compare_names("A.B", "A"), Ordering::Greater);
        assert_eq!(plain.compare_names("A.B", "AB"), Ordering::Less);
        assert_eq!(plain.compare_names("Acme", "System"), Ordering::Less);
        assert_eq!(system.compare_names("Acme", "System"), Ordering::Greater);
        assert_eq!(system.compare_names("Acme", "SystemX"), Ordering::Less);
        assert_eq!(system.compare_names("System.IO", "System"), Ordering::Greater);
    }

    #[test]
    fn members_rank_by_kind() {
        let fixture = fixture();
        let registry = &fixture.registry;
        let comparer = MemberComparer::default();

        let mut members = vec![fixture.find, fixture.count, fixture.constructor, fixture.indexer, fixture.max_size];
        members.sort_by(|a, b| comparer.compare(registry, *a, *b));

        assert_eq!(
            members,
            vec![fixture.constructor, fixture.max_size, fixture.count, fixture.indexer, fixture.find]
        );
    }

    #[test]
    fn orders_are_total() {
        let fixture = fixture();
        let registry = &fixture.registry;
        let comparer = SymbolDefinitionComparer::system_first();

        let symbols: Vec<SymbolId> = registry.iter().map(|symbol| symbol.id).collect();
        for x in &symbols {
            for y in &symbols {
                let forward = comparer.compare(registry, *x, *y);
                let backward = comparer.compare(registry, *y, *x);
                assert_eq!(forward, backward.reverse());
                assert_eq!(forward == Ordering::Equal, x == y);
            }
        }

        let mut first = symbols.clone();
        comparer.sort(registry, &mut first);
        let mut second = first.clone();
        second.reverse();
        comparer.sort(registry, &mut second);
        assert_eq!(first, second);
    }
}
