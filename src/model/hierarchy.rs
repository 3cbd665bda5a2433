//! Inheritance trees of the documented types.
//!
//! A [`TypeHierarchy`] stores its nodes in one arena; nodes refer to their parent and children
//! by index. The class tree is rooted at `System.Object`. Base types that are not documented
//! themselves (for example `System.Attribute`) are inserted as external placeholders so every
//! documented class hangs below its real ancestor chain. Interfaces, which have no base type,
//! are collected separately and arranged into their own forest below a virtual root.

use std::collections::{HashMap, HashSet};

use crate::{
    comparers::{SymbolComparer, TypeComparer},
    symbols::{SpecialType, SymbolId, SymbolRegistry, TypeKind},
};

/// One node of a [`TypeHierarchy`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHierarchyItem {
    /// The type, `None` for the virtual interface root
    pub symbol: Option<SymbolId>,
    /// `true` for ancestors that are not part of the documented set
    pub is_external: bool,
    /// Index of the parent node
    pub parent: Option<usize>,
    /// Indices of the child nodes, in display order
    pub children: Vec<usize>,
    /// Distance from the root of the tree the node belongs to
    pub depth: usize,
}

/// Class and interface trees of a set of types
#[derive(Debug, Clone)]
pub struct TypeHierarchy {
    items: Vec<TypeHierarchyItem>,
    root: usize,
    interface_root: usize,
    interfaces: Vec<SymbolId>,
}

impl TypeHierarchy {
    /// Arranges `types` below `root`, or below `System.Object` when `root` is `None`
    ///
    /// Types that do not derive from `root` are not part of the class tree. When the tree is
    /// rooted at `System.Object` they are returned by [`TypeHierarchy::interfaces`] and arranged
    /// into the interface forest.
    #[must_use]
    pub fn create(
        registry: &SymbolRegistry,
        types: &[SymbolId],
        root: Option<SymbolId>,
        comparer: &TypeComparer,
    ) -> TypeHierarchy {
        let object = registry.special_type(SpecialType::Object);
        let root = root.unwrap_or(object);

        let documented: HashSet<SymbolId> = types.iter().copied().collect();
        let mut pending: Vec<SymbolId> = types.iter().copied().filter(|ty| *ty != root).collect();
        for ty in types {
            for base in registry.base_types(*ty) {
                if base != root && !pending.contains(&base) {
                    pending.push(base);
                }
            }
        }

        let mut hierarchy = TypeHierarchy {
            items: Vec::new(),
            root: 0,
            interface_root: 0,
            interfaces: Vec::new(),
        };

        hierarchy.root = hierarchy.push(Some(root), true, None);
        let mut stack = vec![hierarchy.root];
        while let Some(index) = stack.pop() {
            let Some(parent) = hierarchy.items[index].symbol else {
                continue;
            };

            let mut derived: Vec<SymbolId> = pending
                .iter()
                .copied()
                .filter(|ty| registry.base_type(*ty) == Some(parent))
                .collect();
            pending.retain(|ty| !derived.contains(ty));

            derived.sort_by(|x, y| {
                let statics_first = if parent == object {
                    registry
                        .is_static_class(*y)
                        .cmp(&registry.is_static_class(*x))
                } else {
                    std::cmp::Ordering::Equal
                };
                statics_first.then_with(|| comparer.compare(registry, *x, *y))
            });

            for ty in derived {
                let child = hierarchy.push(Some(ty), !documented.contains(&ty), Some(index));
                stack.push(child);
            }
        }

        if root == object {
            pending.sort_by(|x, y| comparer.compare(registry, *x, *y));
            hierarchy.interfaces = pending;
        }

        hierarchy.interface_root = hierarchy.push(None, false, None);
        hierarchy.fill_interfaces(registry, comparer);
        hierarchy
    }

    fn push(&mut self, symbol: Option<SymbolId>, is_external: bool, parent: Option<usize>) -> usize {
        let index = self.items.len();
        let depth = parent.map_or(0, |parent| self.items[parent].depth + 1);
        self.items.push(TypeHierarchyItem {
            symbol,
            is_external,
            parent,
            children: Vec::new(),
            depth,
        });
        if let Some(parent) = parent {
            self.items[parent].children.push(index);
        }
        index
    }

    fn fill_interfaces(&mut self, registry: &SymbolRegistry, comparer: &TypeComparer) {
        let interfaces: Vec<SymbolId> = self
            .interfaces
            .iter()
            .copied()
            .filter(|ty| registry.get(*ty).is_type_kind(TypeKind::Interface))
            .collect();

        let parents: HashMap<SymbolId, Vec<SymbolId>> = interfaces
            .iter()
            .map(|ty| {
                let direct = registry
                    .interfaces(*ty)
                    .iter()
                    .filter_map(|interface| interface.definition())
                    .filter(|definition| interfaces.contains(definition))
                    .collect();
                (*ty, direct)
            })
            .collect();

        let mut roots: Vec<SymbolId> = interfaces
            .iter()
            .copied()
            .filter(|ty| parents.get(ty).map_or(true, Vec::is_empty))
            .collect();
        roots.sort_by(|x, y| comparer.compare(registry, *x, *y));

        let mut stack: Vec<(SymbolId, usize)> = roots
            .into_iter()
            .rev()
            .map(|ty| (ty, self.interface_root))
            .collect();

        while let Some((ty, parent)) = stack.pop() {
            let index = self.push(Some(ty), false, Some(parent));
            if self.ancestors(parent).any(|ancestor| ancestor == ty) {
                continue;
            }

            let mut derived: Vec<SymbolId> = interfaces
                .iter()
                .copied()
                .filter(|candidate| parents.get(candidate).is_some_and(|direct| direct.contains(&ty)))
                .collect();
            derived.sort_by(|x, y| comparer.compare(registry, *x, *y));
            stack.extend(derived.into_iter().rev().map(|child| (child, index)));
        }
    }

    fn ancestors(&self, index: usize) -> impl Iterator<Item = SymbolId> + '_ {
        std::iter::successors(Some(index), |index| self.items[*index].parent)
            .filter_map(|index| self.items[index].symbol)
    }

    /// Returns the node at `index`
    ///
    /// # Panics
    /// Panics if `index` was not handed out by this hierarchy.
    #[must_use]
    pub fn item(&self, index: usize) -> &TypeHierarchyItem {
        &self.items[index]
    }

    /// Index of the class tree root
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Index of the virtual root of the interface forest
    #[must_use]
    pub fn interface_root(&self) -> usize {
        self.interface_root
    }

    /// Types outside the class tree, sorted
    #[must_use]
    pub fn interfaces(&self) -> &[SymbolId] {
        &self.interfaces
    }

    /// Child nodes of `index`
    #[must_use]
    pub fn children(&self, index: usize) -> &[usize] {
        &self.items[index].children
    }

    /// Returns the node of `System.ValueType` below the root, if any
    #[must_use]
    pub fn value_type_root(&self, registry: &SymbolRegistry) -> Option<usize> {
        self.find_child(self.root, registry.special_type(SpecialType::ValueType))
    }

    /// Returns the node of `System.Enum` below `System.ValueType`, if any
    #[must_use]
    pub fn enum_root(&self, registry: &SymbolRegistry) -> Option<usize> {
        self.value_type_root(registry)
            .and_then(|value_type| self.find_child(value_type, registry.special_type(SpecialType::Enum)))
    }

    /// Structs directly below `System.ValueType`
    #[must_use]
    pub fn structs(&self, registry: &SymbolRegistry) -> Vec<SymbolId> {
        self.value_type_root(registry)
            .map(|index| {
                self.children(index)
                    .iter()
                    .filter_map(|child| self.items[*child].symbol)
                    .filter(|ty| registry.get(*ty).is_type_kind(TypeKind::Struct))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Enums below `System.Enum`
    #[must_use]
    pub fn enums(&self, registry: &SymbolRegistry) -> Vec<SymbolId> {
        self.enum_root(registry)
            .map(|index| {
                self.children(index)
                    .iter()
                    .filter_map(|child| self.items[*child].symbol)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn find_child(&self, index: usize, symbol: SymbolId) -> Option<usize> {
        self.children(index)
            .iter()
            .copied()
            .find(|child| self.items[*child].symbol == Some(symbol))
    }

    /// Walks the tree below `index` depth-first, parents before children
    ///
    /// `index` itself is the first node returned.
    pub fn descendants(&self, index: usize) -> impl Iterator<Item = &TypeHierarchyItem> + '_ {
        let mut stack = vec![index];
        std::iter::from_fn(move || {
            let current = stack.pop()?;
            stack.extend(self.items[current].children.iter().rev());
            Some(&self.items[current])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        comparers::SymbolDefinitionComparer,
        symbols::{TypeBuilder, TypeRef},
        test::factories::fixture,
    };

    #[test]
    fn classes_hang_below_object() {
        let fixture = fixture();
        let registry = &fixture.registry;
        let types = vec![
            fixture.painter,
            fixture.palette,
            fixture.repository,
            fixture.size,
            fixture.reader,
        ];
        let comparer = SymbolDefinitionComparer::system_first().types;
        let hierarchy = TypeHierarchy::create(registry, &types, None, &comparer);

        let root = hierarchy.item(hierarchy.root());
        assert_eq!(root.symbol, Some(registry.special_type(SpecialType::Object)));
        assert!(root.is_external);

        let attribute = registry.find_type("System.Attribute").unwrap();
        let placeholder = hierarchy
            .descendants(hierarchy.root())
            .find(|item| item.symbol == Some(attribute))
            .unwrap();
        assert!(placeholder.is_external);
        assert_eq!(placeholder.children.len(), 1);
        assert_eq!(hierarchy.item(placeholder.children[0]).symbol, Some(fixture.palette));
        assert_eq!(hierarchy.item(placeholder.children[0]).depth, 2);

        assert_eq!(hierarchy.structs(registry), vec![fixture.size]);
        assert_eq!(hierarchy.interfaces(), &[fixture.reader]);
        let interface_roots = hierarchy.children(hierarchy.interface_root());
        assert_eq!(interface_roots.len(), 1);
    }

    #[test]
    fn derived_interfaces_nest() {
        let mut fixture = fixture();
        let registry = &mut fixture.registry;
        let reader_t = TypeRef::TypeParameter(registry.get(fixture.reader).type_parameters()[0]);
        let derived = TypeBuilder::interface("IBufferedReader")
            .public()
            .implements(TypeRef::generic(fixture.reader, vec![reader_t]))
            .build(registry, fixture.namespace)
            .unwrap();

        let comparer = SymbolDefinitionComparer::default().types;
        let hierarchy = TypeHierarchy::create(registry, &[derived, fixture.reader], None, &comparer);

        let roots = hierarchy.children(hierarchy.interface_root());
        assert_eq!(roots.len(), 1);
        let reader = hierarchy.item(roots[0]);
        assert_eq!(reader.symbol, Some(fixture.reader));
        assert_eq!(reader.children.len(), 1);
        assert_eq!(hierarchy.item(reader.children[0]).symbol, Some(derived));
    }
}
