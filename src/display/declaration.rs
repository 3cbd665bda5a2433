//! Full declarations with attributes, base lists and wrapping.
//!
//! A [`Declaration`] is the structured form of one symbol definition: its attribute list, the
//! head produced by the symbol renderer, the parameter list with per-parameter attributes, the
//! base list, the constraint clauses, the accessor list and the trailing semicolon. Rendering
//! lays the nodes out according to [`DefinitionDisplayOptions`] and reports where the attribute
//! list, the parameter list and the base list ended up, so writers can post-process those
//! regions without scanning punctuation.
//!
//! # Example
//!
//! ```rust
//! use cildoc::display::{Declaration, DefinitionDisplayOptions, DisplayFormat};
//! use cildoc::symbols::{SpecialType, SymbolRegistry, TypeBuilder, TypeRef};
//!
//! let mut registry = SymbolRegistry::new();
//! let assembly = registry.add_assembly("Acme", "1.0.0.0");
//! let namespace = registry.namespace(assembly, "Acme")?;
//! let disposable = registry.find_type("System.IDisposable").unwrap();
//! let widget = TypeBuilder::class("Widget")
//!     .public()
//!     .implements(TypeRef::named(disposable))
//!     .build(&mut registry, namespace)?;
//!
//! let options = DefinitionDisplayOptions::INCLUDE_TRAILING_SEMICOLON;
//! let declaration = Declaration::build(
//!     &registry,
//!     widget,
//!     &DisplayFormat::FULL_DECLARATION,
//!     options,
//!     |_, _| true,
//! );
//! let rendered = declaration.render(options, "    ");
//! assert_eq!(rendered.parts.to_string(), "public class Widget : System.IDisposable");
//! # Ok::<(), cildoc::Error>(())
//! ```

use std::ops::Range;

use bitflags::bitflags;

use crate::{
    comparers::{SymbolComparer, SymbolDefinitionComparer},
    display::{
        symbol::{AccessorDisplay, Renderer},
        DelegateStyle, DisplayFormat, DisplayPartKind, DisplayParts, MemberOptions,
        MiscellaneousOptions, TypeQualification,
    },
    symbols::{
        AttributeData, SpecialType, SymbolData, SymbolId, SymbolKind, SymbolRegistry, TypeKind,
        TypeRef,
    },
};

bitflags! {
    /// Content and layout switches of a rendered declaration
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DefinitionDisplayOptions: u16 {
        /// Render the attribute list
        const INCLUDE_ATTRIBUTES = 0x0001;
        /// Render attribute arguments
        const INCLUDE_ATTRIBUTE_ARGUMENTS = 0x0002;
        /// Render attributes of property and event accessors
        const INCLUDE_ACCESSOR_ATTRIBUTES = 0x0004;
        /// Render attributes of parameters
        const INCLUDE_PARAMETER_ATTRIBUTES = 0x0008;
        /// Drop `IEnumerable` when `IEnumerable<T>` is implemented too
        const OMIT_IENUMERABLE = 0x0010;
        /// `default` instead of `default(T)`
        const PREFER_DEFAULT_LITERAL = 0x0020;
        /// One attribute list per line
        const FORMAT_ATTRIBUTES = 0x0040;
        /// One base type per line
        const FORMAT_BASE_LIST = 0x0080;
        /// One constraint clause per line
        const FORMAT_CONSTRAINTS = 0x0100;
        /// One parameter per line
        const FORMAT_PARAMETERS = 0x0200;
        /// `;` after delegates, fields, events and methods
        const INCLUDE_TRAILING_SEMICOLON = 0x0400;
        /// Attribute and base type names without their namespace
        const OMIT_CONTAINING_NAMESPACE = 0x0800;
    }
}

/// One parameter with its attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDeclaration {
    /// The parameter symbol
    pub symbol: SymbolId,
    /// Attributes, each without brackets
    pub attributes: Vec<DisplayParts>,
    /// Modifiers, type, name and default value
    pub parameter: DisplayParts,
}

/// A parenthesized or bracketed parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterList {
    /// `(` or `[`
    pub open: &'static str,
    /// `)` or `]`
    pub close: &'static str,
    /// Parameters in order
    pub parameters: Vec<ParameterDeclaration>,
}

/// One accessor of an accessor list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDeclaration {
    /// The accessor method
    pub symbol: SymbolId,
    /// Attributes, each without brackets
    pub attributes: Vec<DisplayParts>,
    /// Accessibility and keyword, e.g. `private set`
    pub accessor: DisplayParts,
}

/// Structured definition of one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The declared symbol
    pub symbol: SymbolId,
    /// Attributes, each without brackets
    pub attributes: Vec<DisplayParts>,
    /// Modifiers, type and name
    pub head: DisplayParts,
    /// Parameter list of methods, indexers and delegates
    pub parameters: Option<ParameterList>,
    /// ` = value` of constants and enum members
    pub tail: DisplayParts,
    /// Base type of classes and underlying type of enums
    pub base_type: Option<DisplayParts>,
    /// Implemented or inherited interfaces
    pub interfaces: Vec<DisplayParts>,
    /// `where` clauses
    pub constraints: Vec<DisplayParts>,
    /// `{ get; set; }` or `{ add; remove; }`
    pub accessors: Option<Vec<AccessorDeclaration>>,
    /// The symbol kind ends with `;`
    pub trailing_semicolon: bool,
}

/// A rendered declaration with the positions of its structural parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDeclaration {
    /// All fragments
    pub parts: DisplayParts,
    /// Fragments of the attribute lists, without the line break that follows them
    pub attribute_range: Option<Range<usize>>,
    /// Fragments from the opening to the closing delimiter of the parameter list
    pub parameter_range: Option<Range<usize>>,
    /// Fragments from the `:` to the last base type
    pub base_list_range: Option<Range<usize>>,
}

impl RenderedDeclaration {
    /// Returns the text of the whole declaration
    #[must_use]
    pub fn text(&self) -> String {
        self.parts.to_string()
    }
}

fn attribute_name_format(options: DefinitionDisplayOptions) -> DisplayFormat {
    let qualification = if options.contains(DefinitionDisplayOptions::OMIT_CONTAINING_NAMESPACE) {
        TypeQualification::NameAndContainingTypes
    } else {
        TypeQualification::NameAndContainingTypesAndNamespaces
    };

    DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES_AND_TYPE_PARAMETERS
        .with_qualification(qualification)
        .with_members(MemberOptions::CONTAINING_TYPE)
        .with_miscellaneous(MiscellaneousOptions::USE_SPECIAL_TYPES)
}

impl Declaration {
    /// Builds the declaration of `symbol`
    ///
    /// `format` drives the head and the parameters. `attribute_filter` decides which applied
    /// attributes are shown on the symbol, its parameters and its accessors.
    pub fn build<F>(
        registry: &SymbolRegistry,
        symbol: SymbolId,
        format: &DisplayFormat,
        options: DefinitionDisplayOptions,
        attribute_filter: F,
    ) -> Declaration
    where
        F: Fn(SymbolId, &AttributeData) -> bool,
    {
        let mut renderer = Renderer::new(registry, *format);
        renderer.prefer_default_literal = options.contains(DefinitionDisplayOptions::PREFER_DEFAULT_LITERAL);

        let names = renderer.with_format(attribute_name_format(options));
        let builder = DeclarationBuilder {
            registry,
            renderer,
            names,
            options,
            attribute_filter: &attribute_filter,
        };

        builder.build(symbol)
    }

    /// Lays the declaration out
    ///
    /// `indent` is the unit of indentation used for wrapped parameters, base types and
    /// constraint clauses.
    #[must_use]
    pub fn render(&self, options: DefinitionDisplayOptions, indent: &str) -> RenderedDeclaration {
        let mut parts = DisplayParts::new();

        let attribute_range = if self.attributes.is_empty() {
            None
        } else {
            let start = parts.len();
            write_attribute_lists(
                &mut parts,
                &self.attributes,
                options.contains(DefinitionDisplayOptions::FORMAT_ATTRIBUTES),
            );
            let range = start..parts.len();
            parts.line_break();
            Some(range)
        };

        parts.append(self.head.clone());

        let parameter_range = self.parameters.as_ref().map(|list| {
            let start = parts.len();
            let wrap = options.contains(DefinitionDisplayOptions::FORMAT_PARAMETERS)
                && list.parameters.len() > 1;

            parts.punctuation(list.open);
            if wrap {
                parts.line_break();
                parts.indentation(indent);
            }
            for (index, parameter) in list.parameters.iter().enumerate() {
                if index > 0 {
                    parts.punctuation(",");
                    if wrap {
                        parts.line_break();
                        parts.indentation(indent);
                    } else {
                        parts.space();
                    }
                }
                for attribute in &parameter.attributes {
                    parts.punctuation("[");
                    parts.append(attribute.clone());
                    parts.punctuation("]");
                    parts.space();
                }
                parts.append(parameter.parameter.clone());
            }
            parts.punctuation(list.close);

            start..parts.len()
        });

        parts.append(self.tail.clone());

        let base_count = usize::from(self.base_type.is_some()) + self.interfaces.len();
        let base_list_range = (base_count > 0).then(|| {
            let wrap = options.contains(DefinitionDisplayOptions::FORMAT_BASE_LIST);

            parts.space();
            let start = parts.len();
            parts.punctuation(":");
            parts.space();
            for (index, base) in self.base_type.iter().chain(self.interfaces.iter()).enumerate() {
                if index > 0 {
                    parts.punctuation(",");
                    if wrap {
                        parts.line_break();
                        parts.indentation(indent);
                    } else {
                        parts.space();
                    }
                }
                parts.append(base.clone());
            }

            start..parts.len()
        });

        let wrap_constraints = options.contains(DefinitionDisplayOptions::FORMAT_CONSTRAINTS)
            && (base_count > 1 || self.constraints.len() > 1);
        for clause in &self.constraints {
            if wrap_constraints {
                parts.line_break();
                parts.indentation(indent);
            } else {
                parts.space();
            }
            parts.append(clause.clone());
        }

        if let Some(accessors) = &self.accessors {
            parts.space();
            parts.punctuation("{");
            parts.space();
            for accessor in accessors {
                for attribute in &accessor.attributes {
                    parts.punctuation("[");
                    parts.append(attribute.clone());
                    parts.punctuation("]");
                    parts.space();
                }
                parts.append(accessor.accessor.clone());
                parts.punctuation(";");
                parts.space();
            }
            parts.punctuation("}");
        }

        if self.trailing_semicolon && options.contains(DefinitionDisplayOptions::INCLUDE_TRAILING_SEMICOLON) {
            parts.punctuation(";");
        }

        RenderedDeclaration {
            parts,
            attribute_range,
            parameter_range,
            base_list_range,
        }
    }
}

fn write_attribute_lists(parts: &mut DisplayParts, attributes: &[DisplayParts], one_per_line: bool) {
    if one_per_line {
        for (index, attribute) in attributes.iter().enumerate() {
            if index > 0 {
                parts.line_break();
            }
            parts.punctuation("[");
            parts.append(attribute.clone());
            parts.punctuation("]");
        }
    } else {
        parts.punctuation("[");
        for (index, attribute) in attributes.iter().enumerate() {
            if index > 0 {
                parts.comma_space();
            }
            parts.append(attribute.clone());
        }
        parts.punctuation("]");
    }
}

struct DeclarationBuilder<'a, F> {
    registry: &'a SymbolRegistry,
    renderer: Renderer<'a>,
    names: Renderer<'a>,
    options: DefinitionDisplayOptions,
    attribute_filter: &'a F,
}

impl<F> DeclarationBuilder<'_, F>
where
    F: Fn(SymbolId, &AttributeData) -> bool,
{
    fn has(&self, option: DefinitionDisplayOptions) -> bool {
        self.options.contains(option)
    }

    fn build(&self, id: SymbolId) -> Declaration {
        let registry = self.registry;
        let symbol = registry.get(id);

        let attributes = if self.has(DefinitionDisplayOptions::INCLUDE_ATTRIBUTES) {
            self.attributes(id)
        } else {
            Vec::new()
        };

        let (base_type, interfaces) = match symbol.type_kind() {
            Some(_) => self.base_list(id),
            None => (None, Vec::new()),
        };

        Declaration {
            symbol: id,
            attributes,
            head: self.renderer.head(id),
            parameters: self.parameter_list(id),
            tail: self.renderer.tail(id),
            base_type,
            interfaces,
            constraints: self.renderer.constraint_clauses(id),
            accessors: self.accessors(id),
            trailing_semicolon: self.has_trailing_semicolon(id),
        }
    }

    fn has_trailing_semicolon(&self, id: SymbolId) -> bool {
        let symbol = self.registry.get(id);
        match symbol.kind() {
            SymbolKind::NamedType => symbol.is_type_kind(TypeKind::Delegate),
            SymbolKind::Field => !self.renderer.is_enum_member(id),
            SymbolKind::Method => true,
            SymbolKind::Event => self.accessors(id).is_none(),
            _ => false,
        }
    }

    /// Filtered attributes of `id`, sorted by attribute class
    fn attributes(&self, id: SymbolId) -> Vec<DisplayParts> {
        let comparer = SymbolDefinitionComparer::system_first();
        let mut attributes: Vec<&AttributeData> = self
            .registry
            .get(id)
            .attributes
            .iter()
            .filter(|attribute| (self.attribute_filter)(id, attribute))
            .collect();

        attributes.sort_by(|a, b| {
            comparer
                .types
                .compare(self.registry, a.attribute_class, b.attribute_class)
        });

        attributes
            .into_iter()
            .map(|attribute| self.attribute(attribute))
            .collect()
    }

    fn attribute(&self, attribute: &AttributeData) -> DisplayParts {
        let mut parts = DisplayParts::new();

        self.names
            .with_format(
                self.names
                    .format
                    .with_miscellaneous(MiscellaneousOptions::REMOVE_ATTRIBUTE_SUFFIX),
            )
            .named_type(&mut parts, attribute.attribute_class, None, false);

        if self.has(DefinitionDisplayOptions::INCLUDE_ATTRIBUTE_ARGUMENTS) && attribute.has_arguments() {
            parts.punctuation("(");
            let mut first = true;
            for argument in &attribute.constructor_arguments {
                if !first {
                    parts.comma_space();
                }
                first = false;
                self.names.typed_constant(&mut parts, argument);
            }
            for (name, argument) in &attribute.named_arguments {
                if !first {
                    parts.comma_space();
                }
                first = false;
                parts.text(name);
                parts.space();
                parts.punctuation("=");
                parts.space();
                self.names.typed_constant(&mut parts, argument);
            }
            parts.punctuation(")");
        }

        parts
    }

    fn parameter_list(&self, id: SymbolId) -> Option<ParameterList> {
        let registry = self.registry;
        let symbol = registry.get(id);
        let format = &self.renderer.format;

        let has_list = match symbol.kind() {
            SymbolKind::Method => format.members.contains(MemberOptions::PARAMETERS),
            SymbolKind::Property => {
                symbol.is_indexer() && format.members.contains(MemberOptions::PARAMETERS)
            }
            SymbolKind::NamedType => {
                symbol.is_type_kind(TypeKind::Delegate) && format.delegate_style != DelegateStyle::NameOnly
            }
            _ => false,
        };

        if !has_list {
            return None;
        }

        let (open, close) = self.renderer.parameter_delimiters(id);
        let parameters = registry
            .parameters(id)
            .iter()
            .map(|parameter| {
                let mut parts = DisplayParts::new();
                self.renderer.parameter(&mut parts, *parameter);
                ParameterDeclaration {
                    symbol: *parameter,
                    attributes: if self.has(DefinitionDisplayOptions::INCLUDE_PARAMETER_ATTRIBUTES) {
                        self.attributes(*parameter)
                    } else {
                        Vec::new()
                    },
                    parameter: parts,
                }
            })
            .collect();

        Some(ParameterList {
            open,
            close,
            parameters,
        })
    }

    fn accessor_attributes(&self, accessor: SymbolId) -> Vec<DisplayParts> {
        if self.has(DefinitionDisplayOptions::INCLUDE_ACCESSOR_ATTRIBUTES) {
            self.attributes(accessor)
        } else {
            Vec::new()
        }
    }

    fn accessors(&self, id: SymbolId) -> Option<Vec<AccessorDeclaration>> {
        let symbol = self.registry.get(id);

        match &symbol.data {
            SymbolData::Property(_) => {
                let accessors = self.renderer.accessors(id)?;
                Some(
                    accessors
                        .iter()
                        .map(|accessor| self.accessor(accessor))
                        .collect(),
                )
            }
            SymbolData::Event(data) => {
                if !self.has(DefinitionDisplayOptions::INCLUDE_ACCESSOR_ATTRIBUTES) {
                    return None;
                }

                let accessors: Vec<AccessorDeclaration> = [(data.add, "add"), (data.remove, "remove")]
                    .into_iter()
                    .filter_map(|(accessor, keyword)| {
                        accessor.map(|accessor| {
                            self.accessor(&AccessorDisplay {
                                symbol: accessor,
                                accessibility: None,
                                keyword,
                            })
                        })
                    })
                    .collect();

                accessors
                    .iter()
                    .any(|accessor| !accessor.attributes.is_empty())
                    .then_some(accessors)
            }
            _ => None,
        }
    }

    fn accessor(&self, accessor: &AccessorDisplay) -> AccessorDeclaration {
        let mut parts = DisplayParts::new();
        if let Some(accessibility) = accessor.accessibility {
            for keyword in accessibility.keywords() {
                parts.keyword_space(keyword);
            }
        }
        parts.keyword(accessor.keyword);

        AccessorDeclaration {
            symbol: accessor.symbol,
            attributes: self.accessor_attributes(accessor.symbol),
            accessor: parts,
        }
    }

    /// Base type and interfaces of a type declaration
    fn base_list(&self, id: SymbolId) -> (Option<DisplayParts>, Vec<DisplayParts>) {
        let registry = self.registry;
        let symbol = registry.get(id);
        let Some(data) = symbol.as_type() else {
            return (None, Vec::new());
        };

        let base_type = match data.type_kind {
            TypeKind::Class => data
                .base_type
                .as_ref()
                .filter(|base| registry.special_type_of(base) != SpecialType::Object)
                .map(|base| self.base_name(base)),
            TypeKind::Enum => data
                .enum_underlying_type
                .as_ref()
                .filter(|underlying| registry.special_type_of(underlying) != SpecialType::Int32)
                .map(|underlying| {
                    let mut parts = DisplayParts::new();
                    self.renderer.type_ref(&mut parts, underlying);
                    parts
                }),
            _ => None,
        };

        let mut interfaces = match data.type_kind {
            TypeKind::Class | TypeKind::Struct | TypeKind::Interface => registry.all_interfaces(id),
            _ => Vec::new(),
        };

        if self.has(DefinitionDisplayOptions::OMIT_IENUMERABLE)
            && interfaces
                .iter()
                .any(|interface| registry.special_type_of(interface) == SpecialType::IEnumerableT)
        {
            interfaces.retain(|interface| registry.special_type_of(interface) != SpecialType::IEnumerable);
        }

        let comparer = SymbolDefinitionComparer::system_first();
        interfaces.sort_by(|a, b| comparer.types.compare_refs(registry, a, b));

        (
            base_type,
            interfaces.iter().map(|interface| self.base_name(interface)).collect(),
        )
    }

    fn base_name(&self, ty: &TypeRef) -> DisplayParts {
        let mut parts = DisplayParts::new();
        self.names.type_ref(&mut parts, ty);
        parts
    }
}

/// Renders the declaration of `symbol` in one call
pub fn definition_display_parts<F>(
    registry: &SymbolRegistry,
    symbol: SymbolId,
    format: &DisplayFormat,
    options: DefinitionDisplayOptions,
    indent: &str,
    attribute_filter: F,
) -> RenderedDeclaration
where
    F: Fn(SymbolId, &AttributeData) -> bool,
{
    Declaration::build(registry, symbol, format, options, attribute_filter).render(options, indent)
}

/// Returns the non-whitespace fragments of a range, for comparing layouts
#[must_use]
pub fn significant_parts(parts: &DisplayParts, range: Range<usize>) -> Vec<&str> {
    parts.as_slice()[range]
        .iter()
        .filter(|part| {
            !matches!(
                part.kind,
                DisplayPartKind::Space | DisplayPartKind::LineBreak | DisplayPartKind::Indentation
            )
        })
        .map(|part| part.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories::fixture;
    use pretty_assertions::assert_eq;

    fn all() -> DefinitionDisplayOptions {
        DefinitionDisplayOptions::INCLUDE_ATTRIBUTES
            | DefinitionDisplayOptions::INCLUDE_ATTRIBUTE_ARGUMENTS
            | DefinitionDisplayOptions::INCLUDE_ACCESSOR_ATTRIBUTES
            | DefinitionDisplayOptions::INCLUDE_PARAMETER_ATTRIBUTES
            | DefinitionDisplayOptions::INCLUDE_TRAILING_SEMICOLON
    }

    #[test]
    fn attributes_and_arguments() {
        let fixture = fixture();
        let rendered = definition_display_parts(
            &fixture.registry,
            fixture.repository,
            &DisplayFormat::FULL_DECLARATION,
            all(),
            "    ",
            |_, _| true,
        );

        assert_eq!(
            rendered.text(),
            "[System.Obsolete(\"Use Store\", false)]\n\
             public class Repository<T> : System.IDisposable, Acme.Data.IReader<T> where T : class, new()"
        );
        let range = rendered.attribute_range.unwrap();
        assert_eq!(
            rendered.parts.text_of(range),
            "[System.Obsolete(\"Use Store\", false)]"
        );
    }

    #[test]
    fn enum_arguments_decompose() {
        let fixture = fixture();
        let rendered = definition_display_parts(
            &fixture.registry,
            fixture.painter,
            &DisplayFormat::FULL_DECLARATION,
            all() | DefinitionDisplayOptions::OMIT_CONTAINING_NAMESPACE,
            "    ",
            |_, _| true,
        );

        assert_eq!(
            rendered.text(),
            "[Palette(Color.Red | Color.Blue, Mode = (Color)64)]\npublic class Painter"
        );
    }

    #[test]
    fn parameters_wrap() {
        let fixture = fixture();
        let options = all() | DefinitionDisplayOptions::FORMAT_PARAMETERS;
        let rendered = definition_display_parts(
            &fixture.registry,
            fixture.find,
            &DisplayFormat::FULL_DECLARATION,
            options,
            "    ",
            |_, _| true,
        );

        assert_eq!(
            rendered.text(),
            "public T Find(\n    int id,\n    string name = null);"
        );
        let range = rendered.parameter_range.unwrap();
        assert_eq!(rendered.parts.as_slice()[range.start].text, "(");
        assert_eq!(rendered.parts.as_slice()[range.end - 1].text, ")");
    }

    #[test]
    fn default_literal() {
        let fixture = fixture();
        let text = |options| {
            definition_display_parts(
                &fixture.registry,
                fixture.resize,
                &DisplayFormat::FULL_DECLARATION,
                options,
                "    ",
                |_, _| true,
            )
            .text()
        };

        assert_eq!(
            text(DefinitionDisplayOptions::empty()),
            "public void Resize(Size size = default(Size), int? limit = null)"
        );
        assert_eq!(
            text(DefinitionDisplayOptions::PREFER_DEFAULT_LITERAL),
            "public void Resize(Size size = default, int? limit = null)"
        );
    }

    #[test]
    fn unconstrained_type_parameter_default() {
        use crate::symbols::{
            ConstantValue, MethodBuilder, ParameterBuilder, SymbolRegistry, TypeBuilder,
            TypeParameterBuilder, TypeRef,
        };

        let mut registry = SymbolRegistry::new();
        let assembly = registry.add_assembly("Acme", "1.0.0.0");
        let namespace = registry.namespace(assembly, "Acme").unwrap();
        let holder = TypeBuilder::class("Holder")
            .public()
            .type_parameter("T")
            .type_parameter(TypeParameterBuilder::new("U").class_constraint())
            .build(&mut registry, namespace)
            .unwrap();
        let t = TypeRef::TypeParameter(registry.get(holder).type_parameters()[0]);
        let u = TypeRef::TypeParameter(registry.get(holder).type_parameters()[1]);
        let store = MethodBuilder::new("Store")
            .public()
            .parameter_with(ParameterBuilder::new("value", t).default_value(ConstantValue::Null))
            .parameter_with(ParameterBuilder::new("other", u).default_value(ConstantValue::Null))
            .build(&mut registry, holder)
            .unwrap();

        let text = |options| {
            definition_display_parts(
                &registry,
                store,
                &DisplayFormat::FULL_DECLARATION,
                options,
                "    ",
                |_, _| true,
            )
            .text()
        };

        assert_eq!(
            text(DefinitionDisplayOptions::empty()),
            "public void Store(T value = default(T), U other = null)"
        );
        assert_eq!(
            text(DefinitionDisplayOptions::PREFER_DEFAULT_LITERAL),
            "public void Store(T value = default, U other = null)"
        );
    }

    #[test]
    fn accessor_attributes() {
        let fixture = fixture();
        let rendered = definition_display_parts(
            &fixture.registry,
            fixture.count,
            &DisplayFormat::FULL_DECLARATION,
            all(),
            "    ",
            |_, _| true,
        );

        assert_eq!(
            rendered.text(),
            "public int Count { [System.Diagnostics.DebuggerStepThrough] get; private set; }"
        );
    }

    #[test]
    fn base_list_layout_keeps_tokens() {
        let fixture = fixture();
        let render = |options| {
            definition_display_parts(
                &fixture.registry,
                fixture.collection,
                &DisplayFormat::FULL_DECLARATION,
                options,
                "    ",
                |_, _| true,
            )
        };

        let flat = render(DefinitionDisplayOptions::OMIT_IENUMERABLE);
        let wrapped = render(
            DefinitionDisplayOptions::OMIT_IENUMERABLE | DefinitionDisplayOptions::FORMAT_BASE_LIST,
        );

        let flat_range = flat.base_list_range.clone().unwrap();
        let wrapped_range = wrapped.base_list_range.clone().unwrap();
        assert_eq!(
            significant_parts(&flat.parts, flat_range.clone()),
            significant_parts(&wrapped.parts, wrapped_range.clone())
        );
        assert_eq!(flat_range.end, flat.parts.len());
        assert_eq!(wrapped_range.end, wrapped.parts.len());
        assert_eq!(
            flat.text(),
            "public class WidgetCollection : System.IDisposable, System.Collections.Generic.IEnumerable<Acme.Data.Widget>"
        );
        assert_eq!(
            wrapped.text(),
            "public class WidgetCollection : System.IDisposable,\n    System.Collections.Generic.IEnumerable<Acme.Data.Widget>"
        );
    }
}
