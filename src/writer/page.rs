use std::{
    ops::{Deref, DerefMut},
    sync::Arc,
};

use crate::{
    comparers::{SymbolComparer, SymbolDefinitionComparer},
    display::{
        definition_display_parts, format_primitive, to_display_string, type_display_parts,
        AdditionalMemberOptions, DefinitionDisplayOptions, DisplayFormat,
    },
    enums::{get_constituent_fields, get_fields, is_flags, minimal_constituent_fields},
    model::{DocumentationModel, SymbolXmlDocumentation, TypeHierarchy, XmlElement},
    options::{DocumentationOptions, IncludeContainingNamespaceFilter, InheritanceStyle},
    resources::DocumentationResources,
    symbols::{
        ConstantValue, MethodKind, SpecialType, SymbolId, SymbolKind, SymbolRegistry, TypeKind,
        TypedConstant, TypeRef,
    },
    urls::{get_heading_fragment, get_overloads_fragment, DocumentationUrlProvider, TOP_FRAGMENT},
    writer::DocumentationWriter,
    Result,
};

const OBSOLETE_ATTRIBUTE: &str = "System.ObsoleteAttribute";
const ATTRIBUTE_USAGE_ATTRIBUTE: &str = "System.AttributeUsageAttribute";

/// Writes the documentation sections of one page
///
/// A page writer wraps one [`DocumentationWriter`] and knows the page it writes (the current
/// symbol and its folders), so every link it emits is relative to that page. Sections that
/// read documentation comments return [`Result`] because comments are loaded lazily and may
/// turn out to be malformed.
///
/// The primitive writer stays reachable through `Deref`, so headings, lists and plain text
/// can be mixed freely with the sections.
pub struct PageWriter<'m, 'a, W: DocumentationWriter> {
    writer: W,
    model: &'m DocumentationModel<'a>,
    options: &'m DocumentationOptions,
    resources: &'m DocumentationResources,
    url_provider: &'m dyn DocumentationUrlProvider,
    comparer: SymbolDefinitionComparer,
    current_symbol: Option<SymbolId>,
    current_folders: Option<Vec<String>>,
    can_create_member_local_url: bool,
    can_create_type_local_url: bool,
    can_create_external_url: bool,
}

impl<W: DocumentationWriter> Deref for PageWriter<'_, '_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        &self.writer
    }
}

impl<W: DocumentationWriter> DerefMut for PageWriter<'_, '_, W> {
    fn deref_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<'m, 'a, W: DocumentationWriter> PageWriter<'m, 'a, W> {
    /// Creates a writer for the root page
    pub fn new(
        writer: W,
        model: &'m DocumentationModel<'a>,
        options: &'m DocumentationOptions,
        resources: &'m DocumentationResources,
        url_provider: &'m dyn DocumentationUrlProvider,
    ) -> Self {
        let comparer = if options.place_system_namespace_first() {
            SymbolDefinitionComparer::system_first()
        } else {
            SymbolDefinitionComparer::default()
        };

        PageWriter {
            writer,
            model,
            options,
            resources,
            url_provider,
            comparer,
            current_symbol: None,
            current_folders: None,
            can_create_member_local_url: true,
            can_create_type_local_url: true,
            can_create_external_url: true,
        }
    }

    /// Only link members when member pages are generated
    #[must_use]
    pub fn with_member_local_urls(mut self, value: bool) -> Self {
        self.can_create_member_local_url = value;
        self
    }

    /// Only link types when type pages are generated
    #[must_use]
    pub fn with_type_local_urls(mut self, value: bool) -> Self {
        self.can_create_type_local_url = value;
        self
    }

    /// The symbol graph
    pub fn registry(&self) -> &'a SymbolRegistry {
        self.model.registry()
    }

    /// The documentation model
    pub fn model(&self) -> &'m DocumentationModel<'a> {
        self.model
    }

    /// The generation options
    pub fn options(&self) -> &'m DocumentationOptions {
        self.options
    }

    /// The titles
    pub fn resources(&self) -> &'m DocumentationResources {
        self.resources
    }

    /// The comparers used for every sorted list
    pub fn comparer(&self) -> &SymbolDefinitionComparer {
        &self.comparer
    }

    /// The symbol whose page is written, `None` for the root page
    pub fn current_symbol(&self) -> Option<SymbolId> {
        self.current_symbol
    }

    /// Sets the page being written; its folders become the base of relative links
    pub fn set_current_symbol(&mut self, symbol: Option<SymbolId>) {
        self.current_symbol = symbol;
        self.current_folders = symbol.and_then(|symbol| self.url_provider.get_folders(self.registry(), symbol));
    }

    /// Sets the folders of a page that belongs to no symbol
    pub fn set_current_folders(&mut self, folders: Option<Vec<String>>) {
        self.current_folders = folders;
    }

    /// Enables or disables links to external documentation
    pub fn set_external_urls(&mut self, value: bool) {
        self.can_create_external_url = value;
    }

    /// Finishes the page and returns the primitive writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Returns the documentation comment of `symbol` in the preferred culture
    ///
    /// # Errors
    /// Returns an error when the comment or its XML file is malformed.
    pub fn documentation(&self, symbol: SymbolId) -> Result<Option<Arc<SymbolXmlDocumentation>>> {
        self.model
            .get_xml_documentation(symbol, self.options.preferred_culture())
    }

    fn display(&self, symbol: SymbolId, format: &DisplayFormat) -> String {
        to_display_string(self.registry(), symbol, format)
    }

    fn sort_by_display(&self, symbols: &mut [SymbolId], format: &DisplayFormat) {
        let registry = self.registry();
        symbols.sort_by_cached_key(|symbol| (to_display_string(registry, *symbol, format), *symbol));
    }

    fn is_obsolete(&self, symbol: SymbolId) -> bool {
        self.registry().has_attribute(symbol, OBSOLETE_ATTRIBUTE)
    }

    fn page_depth(&self) -> usize {
        self.current_folders.as_ref().map_or(0, Vec::len)
    }

    /// URL of the page of `symbol` relative to the current page
    ///
    /// External symbols link to external documentation when a provider knows them, or to their
    /// local extensions page when external links are turned off. Links to
    /// overloaded methods and indexers point at the anchor the overloads share; other links
    /// point at the top of the page when scrolling to content is enabled. Parameters, type
    /// parameters, assemblies and symbols whose pages are not generated have no URL.
    #[must_use]
    pub fn get_url(&self, symbol: SymbolId) -> Option<String> {
        let registry = self.registry();
        let data = registry.get(symbol);
        let is_external = self.model.is_external(symbol);

        match data.kind() {
            SymbolKind::Assembly | SymbolKind::Parameter | SymbolKind::TypeParameter => return None,
            SymbolKind::NamedType if !is_external && !self.can_create_type_local_url => return None,
            SymbolKind::Field
                if !is_external
                    && registry
                        .containing_type(symbol)
                        .is_some_and(|ty| registry.get(ty).is_type_kind(TypeKind::Enum)) =>
            {
                return registry.containing_type(symbol).and_then(|ty| self.get_url(ty));
            }
            SymbolKind::Method | SymbolKind::Property | SymbolKind::Field | SymbolKind::Event
                if !is_external && !self.can_create_member_local_url =>
            {
                return None;
            }
            _ => {}
        }

        let folders = self.url_provider.get_folders(registry, symbol)?;

        if is_external {
            if data.is_global_namespace() {
                return None;
            }
            if self.can_create_external_url {
                return self.url_provider.get_external_url(&folders);
            }
        }

        let fragment = match self.overloads_fragment(symbol) {
            Some(fragment) => Some(format!("#{fragment}")),
            None if self.options.scroll_to_content() => Some(format!("#{TOP_FRAGMENT}")),
            None => None,
        };

        Some(match self.options.root_directory_url() {
            Some(root) => format!(
                "{root}{}",
                self.url_provider.get_local_url(&folders, None, fragment.as_deref())
            ),
            None => self.url_provider.get_local_url(
                &folders,
                self.current_folders.as_deref(),
                fragment.as_deref(),
            ),
        })
    }

    fn overloads_fragment(&self, symbol: SymbolId) -> Option<String> {
        let registry = self.registry();
        let data = registry.get(symbol);
        let ty = registry.containing_type(symbol)?;

        let siblings = match data.kind() {
            SymbolKind::Property if data.is_indexer() => self.model.get_type_model(ty).indexers(false),
            SymbolKind::Method => {
                let model = self.model.get_type_model(ty);
                match data.method_kind()? {
                    MethodKind::Constructor => model.constructors(),
                    MethodKind::Ordinary => model.methods(false),
                    MethodKind::UserDefinedOperator | MethodKind::Conversion => model.operators(false),
                    MethodKind::ExplicitInterfaceImplementation => model.explicit_interface_implementations(),
                    _ => return None,
                }
            }
            _ => return None,
        };

        let folders = self.url_provider.get_folders(registry, symbol);
        let overloads = siblings
            .iter()
            .filter(|sibling| self.url_provider.get_folders(registry, **sibling) == folders)
            .count();

        if overloads > 1 {
            get_overloads_fragment(registry, symbol)
        } else {
            None
        }
    }

    /// Writes a link to the page of `symbol`, or its name when it has no page
    pub fn write_symbol_link(&mut self, symbol: SymbolId, format: &DisplayFormat) {
        let text = self.display(symbol, format);
        let url = self.get_url(symbol);
        self.writer.write_link_or_text(&text, url.as_deref(), None);
    }

    /// Writes `Namespace.` before a type name
    ///
    /// Nothing is written for the global namespace, nor for `System` namespaces unless they
    /// are explicitly included.
    pub fn write_containing_namespace_prefix(&mut self, namespace: SymbolId) {
        let registry = self.registry();
        if registry.get(namespace).is_global_namespace() {
            return;
        }

        let name = registry.namespace_name(namespace);
        if !self.options.include_system_namespace() && is_system_namespace(&name) {
            return;
        }

        self.writer.write_string(&name);
        self.writer.write_string(".");
    }

    fn write_namespace_prefix_of(&mut self, symbol: SymbolId) {
        let registry = self.registry();
        let ty = registry
            .containing_types(symbol)
            .first()
            .copied()
            .unwrap_or(symbol);
        if let Some(namespace) = registry.containing_namespace(ty) {
            self.write_containing_namespace_prefix(namespace);
        }
    }

    /// Writes a type reference with every named type in it linked
    ///
    /// The namespace is written in front when the containing namespace filter includes
    /// `context`.
    pub fn write_type_link(&mut self, ty: &TypeRef, context: IncludeContainingNamespaceFilter) {
        if self.options.include_containing_namespace().contains(context) {
            if let Some(definition) = ty.definition() {
                self.write_namespace_prefix_of(definition);
            }
        }

        let parts = type_display_parts(
            self.registry(),
            ty,
            &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS,
        );
        for part in parts.iter() {
            match part.symbol {
                Some(symbol) if part.kind.is_type_name() => {
                    let url = self.get_url(symbol);
                    self.writer.write_link_or_text(&part.text, url.as_deref(), None);
                }
                _ => self.writer.write_string(&part.text),
            }
        }
    }

    fn write_member_link(&mut self, member: SymbolId, context: IncludeContainingNamespaceFilter) {
        if self.options.include_containing_namespace().contains(context) {
            self.write_namespace_prefix_of(member);
        }
        let format = DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS
            .with_additional(AdditionalMemberOptions::USE_ITEM_PROPERTY_NAME | AdditionalMemberOptions::USE_OPERATOR_NAME);
        self.write_symbol_link(member, &format);
    }

    fn write_separator(&mut self) {
        self.writer.write_string(" ");
        self.writer.write_char_entity(self.resources.inline_separator_char);
        self.writer.write_string(" ");
    }

    fn write_obsolete_marker(&mut self) {
        self.writer.write_string("[");
        self.writer.write_string(self.resources.deprecated_title);
        self.writer.write_string("] ");
    }

    /// Writes the navigation line of a page: a link home and links to its sections
    pub fn write_content(&mut self, names: &[&str], add_link_to_root: bool, begin_with_separator: bool) {
        if names.is_empty() && !add_link_to_root {
            return;
        }

        let mut first = !begin_with_separator;
        if add_link_to_root {
            let url = self
                .url_provider
                .get_url_to_root(self.page_depth(), '/', self.options.scroll_to_content());
            self.writer.write_link(self.resources.home_title, &url, None);
            first = false;
        }

        for name in names {
            if first {
                first = false;
            } else {
                self.write_separator();
            }
            let fragment = format!("#{}", get_heading_fragment(name));
            self.writer.write_link(name, &fragment, None);
        }

        self.writer.write_line();
        self.writer.write_line();
    }

    /// Writes the heading of a namespace, type or extended type page
    pub fn write_symbol_heading(
        &mut self,
        level: usize,
        symbol: SymbolId,
        format: &DisplayFormat,
        add_link: bool,
        link_destination: Option<&str>,
    ) {
        if let Some(destination) = link_destination {
            self.writer.write_link_destination(destination);
            self.writer.write_line();
        }

        self.writer.write_start_heading(level);
        if add_link {
            self.write_symbol_link(symbol, format);
        } else {
            let text = self.display(symbol, format);
            self.writer.write_string(&text);
        }

        let registry = self.registry();
        if !registry.get(symbol).is_global_namespace() {
            self.writer.write_string(" ");
            self.writer.write_string(self.resources.get_name(registry, symbol));
        }
        self.writer.write_end_heading();
    }

    /// Writes the title of a member page
    ///
    /// `overloaded` pages title the member name without parameters; constructors are titled
    /// by their type.
    pub fn write_member_title(&mut self, member: SymbolId, overloaded: bool) {
        if self.options.scroll_to_content() {
            self.writer.write_link_destination(TOP_FRAGMENT);
            self.writer.write_line();
        }

        let registry = self.registry();
        let data = registry.get(member);
        let title = if data.method_kind() == Some(MethodKind::Constructor) {
            if overloaded {
                let ty = registry.containing_type(member).unwrap_or(member);
                format!(
                    "{} {}",
                    self.display(ty, &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS),
                    self.resources.constructors_title
                )
            } else {
                format!(
                    "{} {}",
                    self.display(member, &DisplayFormat::SIMPLE_DECLARATION),
                    self.resources.constructor_title
                )
            }
        } else {
            let format = if overloaded {
                DisplayFormat::OVERLOADED_MEMBER_TITLE
            } else {
                DisplayFormat::MEMBER_TITLE
            }
            .with_additional(AdditionalMemberOptions::USE_ITEM_PROPERTY_NAME | AdditionalMemberOptions::USE_OPERATOR_NAME);
            format!(
                "{} {}",
                self.display(member, &format),
                self.resources.get_name(registry, member)
            )
        };

        self.writer.write_heading(1, &title);
    }

    /// `**Namespace**: [Acme.Data](../README.md)`
    pub fn write_containing_namespace(&mut self, symbol: SymbolId, title: &str) {
        let Some(namespace) = self.registry().containing_namespace(symbol) else {
            return;
        };
        self.writer.write_bold(title);
        self.writer.write_string(self.resources.colon);
        self.writer.write_space();
        self.write_symbol_link(namespace, &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES);
        self.writer.write_line();
        self.writer.write_line();
    }

    /// `**Containing Type**: [Repository<T>](../README.md)`
    pub fn write_containing_type(&mut self, member: SymbolId) {
        let Some(ty) = self.registry().containing_type(member) else {
            return;
        };
        self.writer.write_bold(self.resources.containing_type_title);
        self.writer.write_string(self.resources.colon);
        self.writer.write_space();
        if self
            .options
            .include_containing_namespace()
            .contains(IncludeContainingNamespaceFilter::CONTAINING_TYPE)
        {
            self.write_namespace_prefix_of(ty);
        }
        self.write_symbol_link(ty, &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS);
        self.writer.write_line();
        self.writer.write_line();
    }

    /// `**Assembly**: Acme.dll`
    pub fn write_containing_assembly(&mut self, symbol: SymbolId) {
        let registry = self.registry();
        let Some(assembly) = registry.containing_assembly(symbol) else {
            return;
        };
        self.writer.write_bold(self.resources.assembly_title);
        self.writer.write_string(self.resources.colon);
        self.writer.write_space();
        self.writer.write_string(&registry.get(assembly).name);
        self.writer.write_string(".");
        self.writer.write_string(self.resources.dll_extension);
        self.writer.write_line();
        self.writer.write_line();
    }

    /// The obsolete warning followed by the message of `[Obsolete]`, if any
    pub fn write_obsolete_message(&mut self, symbol: SymbolId) {
        let registry = self.registry();
        let Some(attribute) = registry.attribute(symbol, OBSOLETE_ATTRIBUTE) else {
            return;
        };

        self.writer.write_bold(self.resources.obsolete_message);
        self.writer.write_line();
        self.writer.write_line();

        let message = attribute.constructor_arguments.iter().find_map(|argument| match argument {
            TypedConstant::Primitive(ConstantValue::String(message)) => Some(message.as_str()),
            _ => None,
        });
        if let Some(message) = message {
            self.writer.write_string(message);
            self.writer.write_line();
            self.writer.write_line();
        }
    }

    /// The summary as a paragraph without heading
    pub fn write_summary(&mut self, documentation: Option<&SymbolXmlDocumentation>) {
        if let Some(summary) = documentation.and_then(SymbolXmlDocumentation::summary) {
            self.write_xml_content(summary, false);
            self.writer.write_line();
            self.writer.write_line();
        }
    }

    /// A section of the comment under its own heading
    pub fn write_section(&mut self, heading: &str, level: usize, element: Option<&XmlElement>) {
        let Some(element) = element.filter(|element| !element.is_empty()) else {
            return;
        };
        self.writer.write_heading(level, heading);
        self.write_xml_content(element, false);
        self.writer.write_line();
        self.writer.write_line();
    }

    /// The declaration in a C# code block
    pub fn write_declaration(&mut self, symbol: SymbolId) {
        let mut options = DefinitionDisplayOptions::FORMAT_ATTRIBUTES | DefinitionDisplayOptions::INCLUDE_ATTRIBUTES;
        if self.options.include_attribute_arguments() {
            options |= DefinitionDisplayOptions::INCLUDE_ATTRIBUTE_ARGUMENTS;
        }
        if self.options.wrap_declaration_base_types() {
            options |= DefinitionDisplayOptions::FORMAT_BASE_LIST;
        }
        if self.options.wrap_declaration_constraints() {
            options |= DefinitionDisplayOptions::FORMAT_CONSTRAINTS;
        }
        if self.options.omit_ienumerable() {
            options |= DefinitionDisplayOptions::OMIT_IENUMERABLE;
        }

        let registry = self.registry();
        let filter = self.model.filter();
        let declaration = definition_display_parts(
            registry,
            symbol,
            &DisplayFormat::FULL_DECLARATION,
            options,
            "    ",
            |owner, attribute| filter.is_attribute_match(registry, owner, attribute),
        );

        self.writer.write_code_block(&declaration.text(), Some("csharp"));
    }

    /// Names and descriptions of the type parameters
    pub fn write_type_parameters(
        &mut self,
        symbol: SymbolId,
        documentation: Option<&SymbolXmlDocumentation>,
        level: usize,
    ) {
        let registry = self.registry();
        let type_parameters = registry.get(symbol).type_parameters();
        if type_parameters.is_empty() {
            return;
        }

        self.writer.write_heading(level, self.resources.type_parameters_title);
        for (index, parameter) in type_parameters.iter().enumerate() {
            if index > 0 {
                self.writer.write_line();
                self.writer.write_line();
            }
            let name = &registry.get(*parameter).name;
            self.writer.write_bold(name);

            if let Some(content) = documentation
                .and_then(|documentation| documentation.type_param(name))
                .filter(|content| !content.is_empty())
            {
                self.writer.write_line();
                self.writer.write_line();
                self.write_xml_content(content, false);
            }
        }
        self.writer.write_line();
        self.writer.write_line();
    }

    /// Names, types and descriptions of the parameters
    pub fn write_parameters(
        &mut self,
        symbol: SymbolId,
        documentation: Option<&SymbolXmlDocumentation>,
        level: usize,
    ) {
        let registry = self.registry();
        let parameters = registry.parameters(symbol);
        if parameters.is_empty() {
            return;
        }

        self.writer.write_heading(level, self.resources.parameters_title);
        for (index, parameter) in parameters.iter().enumerate() {
            if index > 0 {
                self.writer.write_line();
                self.writer.write_line();
            }
            let data = registry.get(*parameter);
            self.writer.write_bold(&data.name);
            self.writer.write_string(" ");
            self.writer.write_entity_ref("ensp");
            self.writer.write_string(" ");
            if let Some(parameter_data) = data.as_parameter() {
                self.write_type_link(&parameter_data.ty, IncludeContainingNamespaceFilter::PARAMETER);
            }

            if let Some(content) = documentation
                .and_then(|documentation| documentation.param(&data.name))
                .filter(|content| !content.is_empty())
            {
                self.writer.write_line_break();
                self.write_xml_content(content, false);
            }
        }
        self.writer.write_line();
        self.writer.write_line();
    }

    /// `Returns`, `Return Value`, `Field Value` or `Property Value`, depending on the kind
    pub fn write_return_type(
        &mut self,
        symbol: SymbolId,
        documentation: Option<&SymbolXmlDocumentation>,
        level: usize,
    ) {
        let registry = self.registry();
        let data = registry.get(symbol);
        let returns = documentation.and_then(SymbolXmlDocumentation::returns);
        let value = documentation.and_then(SymbolXmlDocumentation::value);

        let (title, ty, content) = match data.kind() {
            SymbolKind::NamedType => {
                let Some(ty) = self.model.get_type_model(symbol).return_type() else {
                    return;
                };
                if is_void(registry, ty) {
                    return;
                }
                (self.resources.return_value_title, ty, returns)
            }
            SymbolKind::Field => match data.as_field() {
                Some(field) => (self.resources.field_value_title, &field.ty, None),
                None => return,
            },
            SymbolKind::Property => match data.as_property() {
                Some(property) => {
                    let content = if data.is_indexer() { value.or(returns) } else { value };
                    (self.resources.property_value_title, &property.ty, content)
                }
                None => return,
            },
            SymbolKind::Method => {
                let Some(method) = data.as_method() else {
                    return;
                };
                let is_operator = matches!(
                    method.method_kind,
                    MethodKind::UserDefinedOperator | MethodKind::Conversion
                );
                if !is_operator && is_void(registry, &method.return_type) {
                    return;
                }
                (self.resources.returns_title, &method.return_type, returns)
            }
            _ => return,
        };

        self.writer.write_heading(level, title);
        self.write_type_link(ty, IncludeContainingNamespaceFilter::RETURN_TYPE);
        if let Some(content) = content.filter(|content| !content.is_empty()) {
            self.writer.write_line();
            self.writer.write_line();
            self.write_xml_content(content, false);
        }
        self.writer.write_line();
        self.writer.write_line();
    }

    /// The base type chain down to the type itself
    ///
    /// Interfaces, static classes and types without a base type have no inheritance section.
    pub fn write_inheritance(&mut self, ty: SymbolId) {
        let registry = self.registry();
        let data = registry.get(ty);
        if data.is_type_kind(TypeKind::Interface) || registry.is_static_class(ty) {
            return;
        }

        let mut bases = registry.base_types(ty);
        if bases.is_empty() {
            return;
        }
        bases.reverse();

        self.writer.write_heading(3, self.resources.inheritance_title);
        let name = self.display(ty, &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS);

        match self.options.inheritance_style() {
            InheritanceStyle::Horizontal => {
                for base in &bases {
                    self.write_type_link(&TypeRef::named(*base), IncludeContainingNamespaceFilter::BASE_TYPE);
                    self.writer.write_string(" ");
                    self.writer.write_char_entity(self.resources.inheritance_char);
                    self.writer.write_string(" ");
                }
                self.writer.write_string(&name);
            }
            InheritanceStyle::Vertical => {
                for (depth, base) in bases.iter().enumerate() {
                    for _ in 0..depth {
                        self.writer.write_entity_ref("emsp");
                    }
                    self.write_type_link(&TypeRef::named(*base), IncludeContainingNamespaceFilter::BASE_TYPE);
                    self.writer.write_line_break();
                }
                for _ in 0..bases.len() {
                    self.writer.write_entity_ref("emsp");
                }
                self.writer.write_string(&name);
            }
        }

        self.writer.write_line();
        self.writer.write_line();
    }

    /// Applied attributes accepted by the filter, with the inherited ones of a type
    pub fn write_attributes(&mut self, symbol: SymbolId, level: usize) {
        let registry = self.registry();
        let filter = self.model.filter();

        let mut attributes: Vec<(SymbolId, Option<SymbolId>)> = registry
            .get(symbol)
            .attributes
            .iter()
            .filter(|attribute| filter.is_attribute_match(registry, symbol, attribute))
            .map(|attribute| (attribute.attribute_class, None))
            .collect();

        if registry.get(symbol).kind() == SymbolKind::NamedType && self.options.include_inherited_attributes() {
            for base in registry.base_types(symbol) {
                for attribute in &registry.get(base).attributes {
                    if attributes.iter().any(|(class, _)| *class == attribute.attribute_class) {
                        continue;
                    }
                    if is_inheritable(registry, attribute.attribute_class)
                        && filter.is_attribute_match(registry, base, attribute)
                    {
                        attributes.push((attribute.attribute_class, Some(base)));
                    }
                }
            }
        }

        if attributes.is_empty() {
            return;
        }

        let format = DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES_AND_TYPE_PARAMETERS;
        attributes.sort_by_cached_key(|(class, _)| (to_display_string(registry, *class, &format), *class));

        self.writer.write_heading(level, self.resources.attributes_title);
        self.writer.write_start_bullet_list();
        for (class, inherited_from) in attributes {
            self.writer.write_start_bullet_item();
            self.write_type_link(&TypeRef::named(class), IncludeContainingNamespaceFilter::ATTRIBUTE);
            if let Some(base) = inherited_from {
                self.writer.write_string(" (");
                self.writer.write_string(self.resources.inherited_from);
                self.writer.write_string(" ");
                self.write_type_link(&TypeRef::named(base), IncludeContainingNamespaceFilter::ATTRIBUTE);
                self.writer.write_string(")");
            }
            self.writer.write_end_bullet_item();
        }
        self.writer.write_end_bullet_list();
    }

    /// Derived types, truncated to the configured maximum
    pub fn write_derived_types(&mut self, derived: &[SymbolId]) {
        if derived.is_empty() {
            return;
        }
        self.writer.write_heading(3, self.resources.derived_title);
        let include_namespace = self
            .options
            .include_containing_namespace()
            .contains(IncludeContainingNamespaceFilter::DERIVED_TYPE);
        self.write_type_list(derived, include_namespace, Some(self.options.max_derived_types()));
    }

    /// The complete list of derived types written after the other sections
    pub fn write_all_derived_types(&mut self, derived: &[SymbolId]) {
        self.writer.write_heading(2, self.resources.derived_all_title);
        let include_namespace = self
            .options
            .include_containing_namespace()
            .contains(IncludeContainingNamespaceFilter::DERIVED_TYPE);
        self.write_type_list(derived, include_namespace, None);
    }

    /// Interfaces a type implements
    pub fn write_implemented_interfaces(&mut self, interfaces: &[TypeRef]) {
        if interfaces.is_empty() {
            return;
        }

        let registry = self.registry();
        let mut interfaces = interfaces.to_vec();
        let comparer = self.comparer.types;
        interfaces.sort_by(|x, y| comparer.compare_refs(registry, x, y));

        self.writer.write_heading(3, self.resources.implements_title);
        self.writer.write_start_bullet_list();
        for interface in &interfaces {
            self.writer.write_start_bullet_item();
            self.write_type_link(interface, IncludeContainingNamespaceFilter::IMPLEMENTED_INTERFACE);
            self.writer.write_end_bullet_item();
        }
        self.writer.write_end_bullet_list();
    }

    /// Interface members a member implements, explicitly or implicitly
    pub fn write_implemented_members(&mut self, member: SymbolId, level: usize) {
        let implemented = implemented_interface_members(self.registry(), member);
        if implemented.is_empty() {
            return;
        }

        self.writer.write_heading(level, self.resources.implements_title);
        self.writer.write_start_bullet_list();
        for interface_member in implemented {
            self.writer.write_start_bullet_item();
            self.write_member_link(interface_member, IncludeContainingNamespaceFilter::IMPLEMENTED_MEMBER);
            self.writer.write_end_bullet_item();
        }
        self.writer.write_end_bullet_list();
    }

    /// Documented exceptions whose type can be resolved
    pub fn write_exceptions(&mut self, documentation: Option<&SymbolXmlDocumentation>, level: usize) {
        let Some(documentation) = documentation else {
            return;
        };

        let exceptions: Vec<(SymbolId, &XmlElement)> = documentation
            .exceptions()
            .filter_map(|element| {
                let symbol = self
                    .model
                    .get_first_symbol_for_declaration_id(element.attribute("cref")?)?;
                Some((symbol, element))
            })
            .collect();
        if exceptions.is_empty() {
            return;
        }

        self.writer.write_heading(level, self.resources.exceptions_title);
        for (symbol, element) in exceptions {
            self.write_type_link(&TypeRef::named(symbol), IncludeContainingNamespaceFilter::EXCEPTION);
            self.writer.write_line();
            self.writer.write_line();
            if !element.is_empty() {
                self.write_xml_content(element, false);
                self.writer.write_line();
                self.writer.write_line();
            }
        }
    }

    /// `<seealso>` links of a comment
    pub fn write_see_also(&mut self, documentation: Option<&SymbolXmlDocumentation>, level: usize) {
        let Some(documentation) = documentation else {
            return;
        };

        let items: Vec<&XmlElement> = documentation
            .see_also()
            .filter(|element| {
                element.attribute("href").is_some()
                    || element
                        .attribute("cref")
                        .and_then(|cref| self.model.get_first_symbol_for_declaration_id(cref))
                        .is_some()
            })
            .collect();
        if items.is_empty() {
            return;
        }

        self.writer.write_heading(level, self.resources.see_also_title);
        self.writer.write_start_bullet_list();
        for item in items {
            self.writer.write_start_bullet_item();
            if let Some(symbol) = item
                .attribute("cref")
                .and_then(|cref| self.model.get_first_symbol_for_declaration_id(cref))
            {
                self.write_member_link(symbol, IncludeContainingNamespaceFilter::SEE_ALSO);
            } else if let Some(href) = item.attribute("href") {
                let text = item.text();
                let text = if text.trim().is_empty() { href.to_string() } else { text };
                self.writer.write_link(text.trim(), href, None);
            }
            self.writer.write_end_bullet_item();
        }
        self.writer.write_end_bullet_list();
    }

    /// Versions whose sources declare `symbol`, newest first
    pub fn write_applies_to(&mut self, symbol: SymbolId, level: usize) {
        let mut references = self.model.source_references(symbol).to_vec();
        if references.is_empty() {
            return;
        }
        references.sort_by(|x, y| y.version.cmp(&x.version));

        self.writer.write_heading(level, self.resources.applies_to_title);
        for (index, reference) in references.iter().enumerate() {
            if index > 0 {
                self.writer.write_string(self.resources.comma);
                self.writer.write_string(" ");
            }
            self.writer
                .write_link_or_text(&reference.version, Some(&reference.url), None);
        }
        self.writer.write_line();
        self.writer.write_line();
    }

    /// A bullet list of types
    ///
    /// Types whose names clash get their namespace even when `include_namespace` is off.
    /// With `max_items`, the rest of the list is replaced by a link to the complete list of
    /// derived types.
    pub fn write_type_list(&mut self, types: &[SymbolId], include_namespace: bool, max_items: Option<usize>) {
        if types.is_empty() {
            return;
        }

        let registry = self.registry();
        let mut types = types.to_vec();
        let comparer = self.comparer.types;
        types.sort_by(|x, y| comparer.compare(registry, *x, *y));

        let format = DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS;
        let names: Vec<String> = types.iter().map(|ty| self.display(*ty, &format)).collect();

        self.writer.write_start_bullet_list();
        for (index, ty) in types.iter().enumerate() {
            if max_items.is_some_and(|max| index >= max) {
                self.writer.write_start_bullet_item();
                let url = format!("#{}", get_heading_fragment(self.resources.derived_all_title));
                self.writer
                    .write_link(self.resources.ellipsis, &url, Some(self.resources.see_all_derived_types));
                self.writer.write_end_bullet_item();
                break;
            }

            let clashes = names.iter().filter(|name| **name == names[index]).count() > 1;
            self.writer.write_start_bullet_item();
            self.write_type_list_item(*ty, include_namespace || clashes);
            self.writer.write_end_bullet_item();
        }
        self.writer.write_end_bullet_list();
    }

    fn write_type_list_item(&mut self, ty: SymbolId, include_namespace: bool) {
        if self.options.mark_obsolete() && self.is_obsolete(ty) {
            self.write_obsolete_marker();
        }
        if include_namespace {
            self.write_namespace_prefix_of(ty);
        }
        self.write_symbol_link(ty, &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS);
    }

    /// A bullet list of namespaces
    pub fn write_namespace_list(&mut self, namespaces: &[SymbolId]) {
        if namespaces.is_empty() {
            return;
        }

        let registry = self.registry();
        let mut namespaces = namespaces.to_vec();
        let comparer = self.comparer.namespaces;
        namespaces.sort_by(|x, y| comparer.compare(registry, *x, *y));

        self.writer.write_start_bullet_list();
        for namespace in namespaces {
            self.writer.write_start_bullet_item();
            self.write_symbol_link(namespace, &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES);
            self.writer.write_end_bullet_item();
        }
        self.writer.write_end_bullet_list();
    }

    /// The classes as an indented tree below `System.Object`
    pub fn write_class_hierarchy(&mut self, classes: &[SymbolId]) {
        if classes.is_empty() {
            return;
        }

        let registry = self.registry();
        let hierarchy = TypeHierarchy::create(registry, classes, None, &self.comparer.types);
        let items: Vec<(Option<SymbolId>, bool, usize)> = hierarchy
            .descendants(hierarchy.root())
            .map(|item| (item.symbol, item.is_external, item.depth))
            .collect();

        self.writer.write_start_bullet_list();
        for (symbol, is_external, depth) in items {
            let Some(symbol) = symbol else {
                continue;
            };
            self.writer.write_start_bullet_item();
            for _ in 0..depth {
                self.writer.write_entity_ref("ensp");
                self.writer.write_entity_ref("ensp");
            }
            if is_external {
                let text = self.display(
                    symbol,
                    &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES_AND_TYPE_PARAMETERS,
                );
                let url = self.get_url(symbol);
                self.writer.write_link_or_text(&text, url.as_deref(), None);
            } else {
                self.write_type_list_item(symbol, false);
            }
            self.writer.write_end_bullet_item();
        }
        self.writer.write_end_bullet_list();
    }

    /// Values of an enum with their numeric value, their flags and their summary
    ///
    /// # Errors
    /// Returns an error when a field comment is malformed.
    pub fn write_enum_fields(&mut self, enum_type: SymbolId, fields: &[SymbolId]) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }

        let registry = self.registry();
        let table = get_fields(registry, enum_type);
        let flags = is_flags(registry, enum_type);
        let combinations: Vec<Vec<SymbolId>> = fields
            .iter()
            .map(|field| {
                let value = field_value(registry, *field).and_then(ConstantValue::to_u64);
                value
                    .map(|value| {
                        minimal_constituent_fields(&table, value, flags)
                            .into_iter()
                            .map(|info| info.symbol)
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect();
        let has_combinations = combinations.iter().any(|fields| fields.len() > 1);

        self.writer.write_heading(2, self.resources.fields_title);
        let columns = if has_combinations { 4 } else { 3 };
        self.writer.write_start_table(columns);
        self.writer.write_start_table_row();
        self.writer.write_table_cell(self.resources.name_title);
        self.writer.write_table_cell(self.resources.value_title);
        if has_combinations {
            self.writer.write_table_cell(self.resources.combination_of_title);
        }
        self.writer.write_table_cell(self.resources.summary_title);
        self.writer.write_end_table_row();
        self.writer.write_table_header_separator();

        for (field, combination) in fields.iter().zip(&combinations) {
            self.writer.write_start_table_row();
            self.writer.write_table_cell(&registry.get(*field).name);

            let value = field_value(registry, *field).map(format_primitive).unwrap_or_default();
            self.writer.write_table_cell(&value);

            if has_combinations {
                self.writer.write_start_table_cell();
                if combination.len() > 1 {
                    for (index, part) in combination.iter().enumerate() {
                        if index > 0 {
                            self.writer.write_string(" | ");
                        }
                        self.writer.write_string(&registry.get(*part).name);
                    }
                }
                self.writer.write_end_table_cell();
            }

            self.writer.write_start_table_cell();
            self.write_inline_summary(*field)?;
            self.writer.write_end_table_cell();
            self.writer.write_end_table_row();
        }
        self.writer.write_end_table();
        Ok(())
    }

    /// The summary of `symbol` on one line
    ///
    /// # Errors
    /// Returns an error when the comment is malformed.
    pub fn write_inline_summary(&mut self, symbol: SymbolId) -> Result<()> {
        if let Some(documentation) = self.documentation(symbol)? {
            if let Some(summary) = documentation.summary() {
                self.write_xml_content(summary, true);
            }
        }
        Ok(())
    }

    /// A two-column table of members: a link and the summary with annotations
    ///
    /// Members declared outside `containing_type` are annotated with the type they are
    /// inherited from; the others with what they override and implement and with their
    /// constant value, as far as the options ask for it.
    ///
    /// # Errors
    /// Returns an error when a member comment is malformed.
    #[allow(clippy::too_many_arguments)]
    pub fn write_member_table(
        &mut self,
        heading: &str,
        level: usize,
        header: &str,
        members: &[SymbolId],
        format: &DisplayFormat,
        containing_type: Option<SymbolId>,
        annotate_implements: bool,
    ) -> Result<()> {
        if members.is_empty() {
            return Ok(());
        }

        let mut members = members.to_vec();
        self.sort_by_display(&mut members, format);

        self.writer.write_heading(level, heading);
        self.writer.write_start_table(2);
        self.writer.write_start_table_row();
        self.writer.write_table_cell(header);
        self.writer.write_table_cell(self.resources.summary_title);
        self.writer.write_end_table_row();
        self.writer.write_table_header_separator();

        for member in members {
            self.writer.write_start_table_row();
            self.writer.write_start_table_cell();
            self.write_symbol_link(member, format);
            self.writer.write_end_table_cell();

            self.writer.write_start_table_cell();
            if self.options.mark_obsolete() && self.is_obsolete(member) {
                self.write_obsolete_marker();
            }
            self.write_inline_summary(member)?;
            self.write_member_annotations(member, containing_type, annotate_implements);
            self.writer.write_end_table_cell();
            self.writer.write_end_table_row();
        }
        self.writer.write_end_table();
        Ok(())
    }

    fn write_member_annotations(
        &mut self,
        member: SymbolId,
        containing_type: Option<SymbolId>,
        annotate_implements: bool,
    ) {
        let registry = self.registry();
        let declaring_type = registry.containing_type(member);

        if containing_type.is_some() && declaring_type != containing_type {
            if self.options.include_member_inherited_from() {
                if let Some(declaring_type) = declaring_type {
                    self.writer.write_string(" (");
                    self.writer.write_string(self.resources.inherited_from);
                    self.writer.write_string(" ");
                    self.write_symbol_link(
                        declaring_type,
                        &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS,
                    );
                    self.writer.write_string(")");
                }
            }
            return;
        }

        if self.options.include_member_overrides() {
            if let Some(overridden) = registry.get(member).overridden() {
                self.writer.write_string(" (");
                self.writer.write_string(self.resources.overrides_title);
                self.writer.write_string(" ");
                self.write_member_link(overridden, IncludeContainingNamespaceFilter::empty());
                self.writer.write_string(")");
            }
        }

        if annotate_implements && self.options.include_member_implements() {
            let implemented = implemented_interface_members(registry, member);
            if !implemented.is_empty() {
                self.writer.write_string(" (");
                self.writer.write_string(self.resources.implements_title);
                self.writer.write_string(" ");
                for (index, interface_member) in implemented.into_iter().enumerate() {
                    if index > 0 {
                        self.writer.write_string(self.resources.comma);
                        self.writer.write_string(" ");
                    }
                    self.write_member_link(interface_member, IncludeContainingNamespaceFilter::empty());
                }
                self.writer.write_string(")");
            }
        }

        if self.options.include_member_constant_value() {
            if let Some(value) = self.constant_text(member) {
                self.writer.write_string(" (");
                self.writer.write_string(self.resources.value_title);
                self.writer.write_string(" ");
                self.writer.write_string(self.resources.equals_sign);
                self.writer.write_string(" ");
                self.writer.write_string(&value);
                self.writer.write_string(")");
            }
        }
    }

    /// Constant value of a field: enum constants by their field names, others as literals
    fn constant_text(&self, field: SymbolId) -> Option<String> {
        let registry = self.registry();
        let data = registry.get(field).as_field()?;
        let value = data.constant.as_ref()?;

        if let Some(enum_type) = data
            .ty
            .definition()
            .filter(|ty| registry.get(*ty).is_type_kind(TypeKind::Enum))
        {
            if let Some(bits) = value.to_u64() {
                let fields = get_constituent_fields(registry, bits, enum_type);
                if !fields.is_empty() {
                    let names: Vec<&str> = fields
                        .iter()
                        .map(|info| registry.get(info.symbol).name.as_str())
                        .collect();
                    return Some(names.join(" | "));
                }
            }
        }

        Some(format_primitive(value))
    }
}

fn is_void(registry: &SymbolRegistry, ty: &TypeRef) -> bool {
    registry.special_type_of(ty) == SpecialType::Void
}

/// `System` and its sub-namespaces
pub(crate) fn is_system_namespace(name: &str) -> bool {
    name == "System" || name.starts_with("System.")
}

fn field_value(registry: &SymbolRegistry, field: SymbolId) -> Option<&ConstantValue> {
    registry.get(field).as_field()?.constant.as_ref()
}

/// `[AttributeUsage(Inherited = false)]` turns inheritance off
fn is_inheritable(registry: &SymbolRegistry, attribute_class: SymbolId) -> bool {
    let usage = registry
        .base_types(attribute_class)
        .into_iter()
        .chain(std::iter::once(attribute_class))
        .find_map(|class| registry.attribute(class, ATTRIBUTE_USAGE_ATTRIBUTE));

    !usage.is_some_and(|usage| {
        usage.named_arguments.iter().any(|(name, value)| {
            name == "Inherited" && *value == TypedConstant::Primitive(ConstantValue::Bool(false))
        })
    })
}

/// Interface members `member` implements
///
/// Explicit implementations name their interface member. Other public instance members
/// implement the members of the interfaces of their type that have the same kind, name and
/// parameter types, after substituting the interface's type arguments.
pub(crate) fn implemented_interface_members(registry: &SymbolRegistry, member: SymbolId) -> Vec<SymbolId> {
    let data = registry.get(member);
    let explicit = data.explicit_interface_implementations();
    if !explicit.is_empty() {
        return explicit.to_vec();
    }

    let implementable = match data.kind() {
        SymbolKind::Method => data.method_kind() == Some(MethodKind::Ordinary),
        SymbolKind::Property | SymbolKind::Event => true,
        _ => false,
    };
    if !implementable || data.is_static() {
        return Vec::new();
    }

    let Some(ty) = registry.containing_type(member) else {
        return Vec::new();
    };
    if registry.get(ty).is_type_kind(TypeKind::Interface) {
        return Vec::new();
    }

    let own_types: Vec<&TypeRef> = parameter_types(registry, member);
    let mut result = Vec::new();

    for interface in registry.all_interfaces(ty) {
        let Some(definition) = interface.definition() else {
            continue;
        };
        let type_parameters = registry.get(definition).type_parameters();
        for candidate in registry.members(definition) {
            let candidate_data = registry.get(*candidate);
            if candidate_data.kind() != data.kind()
                || candidate_data.name != data.name
                || candidate_data.is_static()
            {
                continue;
            }

            let candidate_types = parameter_types(registry, *candidate);
            let matches = candidate_types.len() == own_types.len()
                && candidate_types.iter().zip(&own_types).all(|(theirs, ours)| {
                    registry.substitute(theirs, type_parameters, interface.type_arguments()) == **ours
                });
            if matches && !result.contains(candidate) {
                result.push(*candidate);
            }
        }
    }

    result
}

fn parameter_types(registry: &SymbolRegistry, member: SymbolId) -> Vec<&TypeRef> {
    registry
        .parameters(member)
        .iter()
        .filter_map(|parameter| registry.get(*parameter).as_parameter())
        .map(|parameter| &parameter.ty)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filter::SymbolFilterOptions,
        symbols::{MethodBuilder, TypeBuilder},
        test::factories::fixture,
        urls::MarkdownUrlProvider,
        writer::MarkdownWriter,
    };
    use pretty_assertions::assert_eq;

    fn options() -> DocumentationOptions {
        DocumentationOptions::builder().scroll_to_content(false).build().unwrap()
    }

    #[test]
    fn urls_are_relative_to_the_current_page() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let options = options();
        let resources = DocumentationResources::default();
        let provider = MarkdownUrlProvider::default();
        let mut page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider);

        assert_eq!(
            page.get_url(fixture.repository).unwrap(),
            "Acme/Data/Repository-1/README.md"
        );

        page.set_current_symbol(Some(fixture.repository));
        assert_eq!(page.get_url(fixture.find).unwrap(), "./Find/README.md");
        assert_eq!(page.get_url(fixture.constructor).unwrap(), "./-ctor/README.md");
        assert_eq!(page.get_url(fixture.repository).unwrap(), "./README.md");
        assert_eq!(page.get_url(fixture.widget).unwrap(), "../Widget/README.md");

        let parameter = fixture.registry.get(fixture.find).parameters()[0];
        assert_eq!(page.get_url(parameter), None);
    }

    #[test]
    fn overloads_share_one_anchor() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let options = options();
        let resources = DocumentationResources::default();
        let provider = MarkdownUrlProvider::default();
        let mut page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider);
        page.set_current_symbol(Some(fixture.repository));

        let save = page.get_url(fixture.save).unwrap();
        assert_eq!(save, "./Save/README.md#Acme_Data_Repository_1_Save");
        assert_eq!(page.get_url(fixture.save_overwrite).unwrap(), save);
    }

    #[test]
    fn local_urls_follow_the_depth() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let options = options();
        let resources = DocumentationResources::default();
        let provider = MarkdownUrlProvider::default();
        let page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider)
            .with_member_local_urls(false);

        assert_eq!(page.get_url(fixture.find), None);
        assert!(page.get_url(fixture.repository).is_some());
    }

    #[test]
    fn external_types_link_to_external_documentation() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let options = options();
        let resources = DocumentationResources::default();
        let provider = MarkdownUrlProvider::default();
        let mut page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider);

        let object = fixture.registry.special_type(SpecialType::Object);
        assert_eq!(
            page.get_url(object).unwrap(),
            "https://docs.microsoft.com/en-us/dotnet/api/system.object"
        );

        page.set_external_urls(false);
        assert_eq!(page.get_url(object).unwrap(), "System/Object/README.md");
    }

    #[test]
    fn content_links_home_and_sections() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let options = options();
        let resources = DocumentationResources::default();
        let provider = MarkdownUrlProvider::default();
        let mut page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider);
        page.set_current_symbol(Some(fixture.namespace));

        page.write_content(&["Classes", "Derived (All)"], true, false);

        assert_eq!(
            page.content(),
            "[Home](../../README.md) &#x2022; [Classes](#classes) &#x2022; [Derived (All)](#derived-all)\n\n"
        );
    }

    #[test]
    fn enum_fields_show_combinations() {
        let mut fixture = fixture();
        let both = {
            let registry = &mut fixture.registry;
            let flags = registry.find_type("System.FlagsAttribute").unwrap();
            TypeBuilder::enumeration("Access")
                .public()
                .attribute(crate::symbols::AttributeData::new(flags))
                .enum_field("Read", 1)
                .enum_field("Write", 2)
                .enum_field("ReadWrite", 3)
                .build(registry, fixture.namespace)
                .unwrap()
        };
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let options = options();
        let resources = DocumentationResources::default();
        let provider = MarkdownUrlProvider::default();
        let mut page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider);

        let fields = model.get_type_model(both).fields(false);
        page.write_enum_fields(both, &fields).unwrap();

        assert_eq!(
            page.content(),
            "## Fields\n\n\
             | Name | Value | Combination of | Summary |\n\
             | --- | --- | --- | --- |\n\
             | Read | 1 |  |  |\n\
             | Write | 2 |  |  |\n\
             | ReadWrite | 3 | Read \\| Write |  |\n\n"
        );
    }

    #[test]
    fn member_table_annotates_constants_and_implementations() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let options = options();
        let resources = DocumentationResources::default();
        let provider = MarkdownUrlProvider::default();
        let mut page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider);
        page.set_current_symbol(Some(fixture.repository));

        page.write_member_table(
            "Fields",
            2,
            "Field",
            &[fixture.max_size],
            &DisplayFormat::SIMPLE_DECLARATION,
            Some(fixture.repository),
            true,
        )
        .unwrap();

        assert!(page.content().contains("| [MaxSize](./MaxSize/README.md) |  (Value = 100) |"));
    }

    #[test]
    fn implicit_implementations_are_found() {
        let mut fixture = fixture();
        let registry = &mut fixture.registry;
        let interface = TypeBuilder::interface("IRunner").public().build(registry, fixture.namespace).unwrap();
        let run = MethodBuilder::new("Run").public().build(registry, interface).unwrap();
        let runner = TypeBuilder::class("Runner")
            .public()
            .implements(TypeRef::named(interface))
            .build(registry, fixture.namespace)
            .unwrap();
        let implementation = MethodBuilder::new("Run").public().build(registry, runner).unwrap();

        assert_eq!(implemented_interface_members(registry, implementation), vec![run]);
        assert_eq!(implemented_interface_members(registry, fixture.explicit_read), vec![fixture.read]);
        assert!(implemented_interface_members(registry, fixture.find).is_empty());
    }

    #[test]
    fn inheritance_is_written_root_first() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let options = options();
        let resources = DocumentationResources::default();
        let provider = MarkdownUrlProvider::default();
        let mut page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider);
        page.set_current_symbol(Some(fixture.widget));

        page.write_inheritance(fixture.widget);
        page.write_inheritance(fixture.reader);

        assert_eq!(
            page.content(),
            "### Inheritance\n\n\
             [Object](https://docs.microsoft.com/en-us/dotnet/api/system.object) &#x2192; Widget\n\n"
        );
    }
}
