//! Flat definition lists of a documented API.
//!
//! Two outputs are offered next to the page generator:
//!
//! - [`SymbolDefinitionWriter`] walks a [`crate::model::DocumentationModel`] and sends one
//!   rendered definition per assembly, namespace, type and member to a [`DefinitionSink`].
//!   [`TextDefinitionSink`] turns those events into indented plain text; [`write_definitions`]
//!   does both in one call. [`MarkdownDefinitionSink`] writes a bullet list with linked type
//!   names and [`XmlDefinitionSink`] an XML document. The walk follows a [`DefinitionListFormat`]: namespace list,
//!   namespace hierarchy or type hierarchy.
//! - [`DeclarationListBuilder`] writes a brace-style listing of the public API that reads like
//!   a C# source file without bodies.

mod declaration_list;
mod format;
mod markdown;
mod sink;
mod text;
mod writer;
mod xml;

pub use declaration_list::{declaration_list, DeclarationListBuilder, DeclarationListOptions};
pub use format::{DefinitionListFormat, DefinitionListLayout, DefinitionParts, DefinitionWrapping};
pub use markdown::{write_markdown_definitions, MarkdownDefinitionSink};
pub use sink::DefinitionSink;
pub use text::{write_definitions, TextDefinitionSink};
pub use writer::SymbolDefinitionWriter;
pub use xml::{write_xml_definitions, XmlDefinitionSink};
