//! C#-style rendering of symbols into typed text fragments.
//!
//! Everything a page or a definition list shows about a symbol's signature goes through this
//! module. The output is never a plain string but a [`DisplayParts`] list: every fragment is
//! classified ([`DisplayPartKind`]) and name fragments keep the [`crate::symbols::SymbolId`]
//! they name, so writers can turn type names into links and decide on qualification afterwards.
//!
//! # Architecture
//!
//! - [`DisplayFormat`] describes how much of a symbol is rendered (qualification, modifiers,
//!   parameters, constraints, ...) and provides the presets used across the crate.
//! - [`symbol_display_parts`] renders any symbol with a format.
//! - [`Declaration`] is the structured definition of a symbol with attributes, base list and
//!   accessor list; [`Declaration::render`] lays it out according to
//!   [`DefinitionDisplayOptions`] and reports the ranges of the attribute, parameter and base
//!   lists.
//! - [`format_primitive`] spells constants the way C# source does.

mod declaration;
mod format;
mod literal;
mod parts;
mod symbol;

pub use declaration::{
    definition_display_parts, significant_parts, AccessorDeclaration, Declaration,
    DefinitionDisplayOptions, ParameterDeclaration, ParameterList, RenderedDeclaration,
};
pub use format::{
    AdditionalMemberOptions, DelegateStyle, DisplayFormat, GenericsOptions, GlobalNamespaceStyle,
    KindOptions, MemberOptions, MiscellaneousOptions, ParameterOptions, PropertyStyle,
    TypeQualification,
};
pub use literal::format_primitive;
pub use parts::{DisplayPart, DisplayPartKind, DisplayParts};
pub use symbol::{operator_token, symbol_display_parts, to_display_string, type_display_parts};

pub(crate) use symbol::Renderer;
