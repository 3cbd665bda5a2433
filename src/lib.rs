// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]
#![allow(clippy::too_many_arguments)]

//! # cildoc
//!
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://www.apache.org/licenses/LICENSE-2.0)
//!
//! An API documentation generator for .NET symbol graphs. Given the assemblies of a program,
//! their documentation comments and a handful of options, `cildoc` renders Markdown reference
//! pages (one per namespace, type and member name) or a flat, C#-like definition list of the
//! public API.
//!
//! ## Features
//!
//! - **Symbol graph** - an arena of assemblies, namespaces, types and members with builders
//!   that create the implicit parts a compiler would (accessors, enum `value__`, delegate
//!   `Invoke`)
//! - **C# declarations** - attribute lists, modifiers, generic constraints, base lists and
//!   default values, optionally wrapped one item per line
//! - **Documentation comments** - XML comments, `<inheritdoc/>` resolution through overrides,
//!   interfaces and base types, and supplementary XML files
//! - **Markdown pages** - a lazy, cancellable page sequence with relative links between pages
//!   and links to external API docs
//! - **Definition lists** - namespace list, namespace hierarchy or type hierarchy as plain
//!   text, or a brace-style declaration list
//!
//! ## Quick Start
//!
//! ```rust
//! use cildoc::prelude::*;
//!
//! let mut registry = SymbolRegistry::new();
//! let assembly = registry.add_assembly("Acme", "1.0.0.0");
//! let namespace = registry.namespace(assembly, "Acme")?;
//! TypeBuilder::class("Widget")
//!     .public()
//!     .documentation("<summary>A widget.</summary>")
//!     .build(&mut registry, namespace)?;
//!
//! let model = DocumentationModel::new(&registry, [assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
//! let provider = MarkdownUrlProvider::default();
//! let generator = DocumentationGenerator::new(
//!     &model,
//!     &provider,
//!     DocumentationOptions::default(),
//!     DocumentationResources::default(),
//! );
//!
//! let mut paths = Vec::new();
//! for page in generator.generate("Acme API", &CancellationToken::new()) {
//!     let page = page?;
//!     paths.push(page.file_path);
//! }
//! assert_eq!(paths, ["README.md", "Acme/README.md", "Acme/Widget/README.md"]);
//!
//! let text = write_definitions(&model, &DefinitionListFormat::default());
//! assert!(text.contains("public class Widget"));
//! # Ok::<(), cildoc::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`symbols`] - the symbol graph and its builders
//! - [`filter`] - which symbols and attributes are documented
//! - [`comparers`] - deterministic orders of namespaces, types, members and assemblies
//! - [`display`] - C# rendering of symbols and full declarations
//! - [`enums`] - decomposition of enum values into named flags
//! - [`model`] - documentation model: visible types, derived types, extension methods,
//!   documentation comments and source references
//! - [`urls`] - page paths, fragments and external links
//! - [`options`], [`parts`] and [`resources`] - generator configuration and section titles
//! - [`writer`] - Markdown primitives and the page composer
//! - [`generator`] - the page sequence
//! - [`definitions`] - definition lists and declaration lists
//! - [`Error`] and [`Result`] - error handling

#[macro_use]
pub(crate) mod error;

#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types
pub mod prelude;

pub mod comparers;
pub mod definitions;
pub mod display;
pub mod enums;
pub mod filter;
pub mod generator;
pub mod model;
pub mod options;
pub mod parts;
pub mod resources;
pub mod symbols;
pub mod urls;
pub mod writer;

/// `cildoc` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use cildoc::{DocumentationOptions, Result};
///
/// fn options() -> Result<DocumentationOptions> {
///     DocumentationOptions::builder().max_derived_types(10).build()
/// }
/// # assert!(options().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `cildoc` Error type
pub use error::Error;

pub use options::{DocumentationDepth, DocumentationOptions, InheritanceStyle};
