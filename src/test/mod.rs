//! Shared helpers for the unit tests of this crate.
//!
//! [`factories`] builds the representative symbol graph most tests render, sort or filter.
//! The helpers below cover what several modules need on top of it.

pub(crate) mod factories;

use std::path::Path;

use crate::symbols::{SymbolId, SymbolRegistry};

/// Finds the direct member of `container` named `name`
pub fn member(registry: &SymbolRegistry, container: SymbolId, name: &str) -> SymbolId {
    registry
        .members(container)
        .iter()
        .copied()
        .find(|member| registry.get(*member).name == name)
        .unwrap_or_else(|| panic!("no member named {name}"))
}

/// Writes `content` to `dir/relative`, creating intermediate directories
pub fn write_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
