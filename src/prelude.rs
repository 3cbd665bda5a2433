//! # cildoc Prelude
//!
//! The types needed to build a symbol graph, configure a documentation run and render pages or
//! definition lists. Import this module to get them in one line:
//!
//! ```rust
//! use cildoc::prelude::*;
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all cildoc operations
pub use crate::Error;

/// The result type used throughout cildoc
pub use crate::Result;

// ================================================================================================
// Symbol Graph
// ================================================================================================

/// The arena of symbols and its identities
pub use crate::symbols::{Symbol, SymbolId, SymbolKind, SymbolRegistry};

/// Builders creating types and members
pub use crate::symbols::{
    EventBuilder, FieldBuilder, MethodBuilder, ParameterBuilder, PropertyBuilder, TypeBuilder,
    TypeParameterBuilder,
};

/// Type references, attributes and constants
pub use crate::symbols::{
    Accessibility, AttributeData, ConstantValue, SpecialType, TypeKind, TypeRef, TypedConstant,
};

// ================================================================================================
// Selection and Rendering
// ================================================================================================

/// Symbol and attribute selection
pub use crate::filter::{SymbolFilterOptions, SymbolGroupFilter, Visibility};

/// C# rendering of symbols and declarations
pub use crate::display::{symbol_display_parts, DefinitionDisplayOptions, DisplayFormat, DisplayParts};

// ================================================================================================
// Documentation Generation
// ================================================================================================

/// The documentation model
pub use crate::model::DocumentationModel;

/// Generator configuration
pub use crate::options::{DocumentationDepth, DocumentationOptions, InheritanceStyle};

/// Section titles
pub use crate::resources::DocumentationResources;

/// Page paths and links
pub use crate::urls::{DocumentationUrlProvider, MarkdownUrlProvider};

/// Page output
pub use crate::writer::{DocumentationWriter, MarkdownWriter};

/// The page sequence
pub use crate::generator::{
    CancellationToken, DocumentationFileKind, DocumentationGenerator, DocumentationGeneratorResult,
};

// ================================================================================================
// Definition Lists
// ================================================================================================

/// Definition lists and declaration lists
pub use crate::definitions::{
    write_definitions, write_markdown_definitions, write_xml_definitions, DeclarationListBuilder,
    DeclarationListOptions, DefinitionListFormat, DefinitionListLayout, DefinitionParts,
};
