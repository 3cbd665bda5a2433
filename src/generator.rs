//! Page generation.
//!
//! [`DocumentationGenerator`] walks a [`DocumentationModel`] in a fixed order and renders one
//! page per unit: the root page, one page per namespace, one page per type and one page per
//! member name of a type (overloads share a page). When documented extension methods extend
//! types of other assemblies, a page listing those types and one page per extended type
//! follow.
//!
//! [`DocumentationGenerator::generate`] returns a lazy iterator; a page is only rendered when
//! it is requested, and a [`CancellationToken`] stops the walk between two pages.
//!
//! # Example
//!
//! ```rust
//! use cildoc::generator::{CancellationToken, DocumentationFileKind, DocumentationGenerator};
//! use cildoc::filter::SymbolFilterOptions;
//! use cildoc::model::DocumentationModel;
//! use cildoc::resources::DocumentationResources;
//! use cildoc::symbols::{SymbolRegistry, TypeBuilder};
//! use cildoc::urls::MarkdownUrlProvider;
//! use cildoc::DocumentationOptions;
//!
//! let mut registry = SymbolRegistry::new();
//! let assembly = registry.add_assembly("Acme", "1.0.0.0");
//! let namespace = registry.namespace(assembly, "Acme")?;
//! TypeBuilder::class("Widget").public().build(&mut registry, namespace)?;
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
//! let pages = generator
//!     .generate("Acme API", &CancellationToken::new())
//!     .collect::<cildoc::Result<Vec<_>>>()?;
//!
//! assert_eq!(pages[0].kind, DocumentationFileKind::Root);
//! assert_eq!(pages[1].file_path, "Acme/README.md");
//! assert_eq!(pages[2].file_path, "Acme/Widget/README.md");
//! # Ok::<(), cildoc::Error>(())
//! ```

use std::{
    collections::{HashSet, VecDeque},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use log::{info, trace};
use strum::Display;

use crate::{
    display::{to_display_string, AdditionalMemberOptions, DisplayFormat},
    model::{DocumentationModel, SymbolXmlDocumentation, TypeDocumentationModel},
    options::{DocumentationDepth, DocumentationOptions, IncludeContainingNamespaceFilter},
    parts::{
        MemberDocumentationParts, NamespaceDocumentationParts, RootDocumentationParts,
        TypeDocumentationParts,
    },
    resources::DocumentationResources,
    symbols::{SymbolId, SymbolKind, TypeKind},
    urls::{
        get_fragment, get_overloads_fragment, join_path, DocumentationUrlProvider, EXTENSIONS_FOLDER,
        OBJECT_MODEL_FOLDER, TOP_FRAGMENT,
    },
    writer::{DocumentationWriter, MarkdownWriter, PageWriter},
    Result,
};

/// Kind of a generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DocumentationFileKind {
    /// The page listing namespaces and types
    Root,
    /// A namespace page
    Namespace,
    /// A type page, also used for the extensions of an external type
    Type,
    /// A member page
    Member,
    /// The page listing the extended external types
    Extensions,
    /// The class and interface trees on one page
    ObjectModel,
}

/// One rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationGeneratorResult {
    /// The page text
    pub content: String,
    /// Path of the page relative to the root directory, `/`-separated
    pub file_path: String,
    /// What the page documents
    pub kind: DocumentationFileKind,
}

/// Cooperative cancellation of a generation run
///
/// Clones share one flag. Cancelling stops the page iterator before the next namespace, type
/// or member page; pages already returned stay valid.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled
    #[must_use]
    pub fn new() -> Self {
        CancellationToken {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Requests cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once [`CancellationToken::cancel`] was called on any clone
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Renders the pages of a documentation model
///
/// The sections written on each page, and their order, are computed once from the ignored
/// parts of the options. `W` is the output format; every page gets a fresh writer.
pub struct DocumentationGenerator<'m, 'a, W = MarkdownWriter> {
    model: &'m DocumentationModel<'a>,
    url_provider: &'m dyn DocumentationUrlProvider,
    options: DocumentationOptions,
    resources: DocumentationResources,
    root_parts: Vec<RootDocumentationParts>,
    namespace_parts: Vec<NamespaceDocumentationParts>,
    type_parts: Vec<TypeDocumentationParts>,
    member_parts: Vec<MemberDocumentationParts>,
    writer: std::marker::PhantomData<fn() -> W>,
}

impl<'m, 'a> DocumentationGenerator<'m, 'a, MarkdownWriter> {
    /// Creates a generator writing Markdown
    #[must_use]
    pub fn new(
        model: &'m DocumentationModel<'a>,
        url_provider: &'m dyn DocumentationUrlProvider,
        options: DocumentationOptions,
        resources: DocumentationResources,
    ) -> Self {
        Self::with_writer(model, url_provider, options, resources)
    }
}

impl<'m, 'a, W: DocumentationWriter + Default> DocumentationGenerator<'m, 'a, W> {
    /// Creates a generator writing pages with `W`
    #[must_use]
    pub fn with_writer(
        model: &'m DocumentationModel<'a>,
        url_provider: &'m dyn DocumentationUrlProvider,
        options: DocumentationOptions,
        resources: DocumentationResources,
    ) -> Self {
        DocumentationGenerator {
            model,
            url_provider,
            root_parts: RootDocumentationParts::enabled_and_sorted(options.ignored_root_parts()),
            namespace_parts: NamespaceDocumentationParts::enabled_and_sorted(options.ignored_namespace_parts()),
            type_parts: TypeDocumentationParts::enabled_and_sorted(options.ignored_type_parts()),
            member_parts: MemberDocumentationParts::enabled_and_sorted(options.ignored_member_parts()),
            options,
            resources,
            writer: std::marker::PhantomData,
        }
    }

    /// The documented model
    #[must_use]
    pub fn model(&self) -> &'m DocumentationModel<'a> {
        self.model
    }

    /// The generation options
    #[must_use]
    pub fn options(&self) -> &DocumentationOptions {
        &self.options
    }

    /// Returns every page, lazily, in traversal order
    ///
    /// The root page comes first, then all namespace pages, then each type page followed by
    /// the pages of its members, and finally the extensions of external types. Which levels
    /// are generated depends on [`DocumentationOptions::depth`].
    ///
    /// The iterator stops after the first error, and before the next page once
    /// `cancellation` is cancelled.
    pub fn generate<'g>(&'g self, heading: &str, cancellation: &CancellationToken) -> Pages<'g, 'm, 'a, W> {
        let depth = self.options.depth();
        let types = self.documented_types();
        let extended = self.extended_external_types();

        let mut pending = VecDeque::new();
        pending.push_back(Job::Root {
            add_extensions_link: !extended.is_empty(),
        });
        pending.extend(self.distinct_namespaces(&types).into_iter().map(Job::Namespace));
        if depth >= DocumentationDepth::Type {
            pending.extend(types.into_iter().map(Job::Type));
        }
        if !extended.is_empty() {
            pending.push_back(Job::Extensions);
            pending.extend(extended.into_iter().map(Job::ExtendedType));
        }

        Pages {
            generator: self,
            heading: heading.to_string(),
            cancellation: cancellation.clone(),
            pending,
        }
    }

    fn create_writer(&self, symbol: Option<SymbolId>) -> PageWriter<'_, 'a, W> {
        let depth = self.options.depth();
        let mut writer = PageWriter::new(
            W::default(),
            self.model,
            &self.options,
            &self.resources,
            self.url_provider,
        )
        .with_member_local_urls(depth == DocumentationDepth::Member)
        .with_type_local_urls(depth >= DocumentationDepth::Type);
        writer.set_current_symbol(symbol);
        writer.write_start_document();
        writer
    }

    fn create_result(
        &self,
        mut writer: PageWriter<'_, 'a, W>,
        kind: DocumentationFileKind,
        symbol: Option<SymbolId>,
    ) -> DocumentationGeneratorResult {
        writer.write_end_document();
        let file_name = self.url_provider.get_file_name(kind);

        let file_path = match (kind, symbol) {
            (DocumentationFileKind::Root, _) => file_name.to_string(),
            (DocumentationFileKind::Extensions, _) => join_path(file_name, &[EXTENSIONS_FOLDER.to_string()], '/'),
            (DocumentationFileKind::ObjectModel, _) => join_path(file_name, &[OBJECT_MODEL_FOLDER.to_string()], '/'),
            (_, Some(symbol)) => {
                let Some(folders) = self.url_provider.get_folders(self.model.registry(), symbol) else {
                    panic!("{symbol:?} has no folders");
                };
                join_path(file_name, &folders, '/')
            }
            (_, None) => panic!("a {kind} page needs a symbol"),
        };

        trace!("generated {file_path}");
        DocumentationGeneratorResult {
            content: writer.into_inner().content().to_string(),
            file_path,
            kind,
        }
    }

    fn top_destination(&self) -> Option<&'static str> {
        self.options.scroll_to_content().then_some(TOP_FRAGMENT)
    }

    fn documentation(&self, symbol: SymbolId) -> Result<Option<Arc<SymbolXmlDocumentation>>> {
        self.model
            .get_xml_documentation(symbol, self.options.preferred_culture())
    }

    /// Documented types without the ignored ones, in model order
    fn documented_types(&self) -> Vec<SymbolId> {
        let registry = self.model.registry();
        self.model
            .types()
            .filter(|ty| !self.options.should_be_ignored(registry, *ty))
            .collect()
    }

    /// Containing namespaces of `types`, one per name
    fn distinct_namespaces(&self, types: &[SymbolId]) -> Vec<SymbolId> {
        let registry = self.model.registry();
        let mut names = HashSet::new();
        types
            .iter()
            .filter_map(|ty| registry.containing_namespace(*ty))
            .filter(|namespace| names.insert(registry.namespace_name(*namespace)))
            .collect()
    }

    fn extended_external_types(&self) -> Vec<SymbolId> {
        if !self.options.include_extended_external_types() {
            return Vec::new();
        }
        let registry = self.model.registry();
        self.model
            .get_extended_external_types()
            .into_iter()
            .filter(|ty| !self.options.should_be_ignored(registry, *ty))
            .collect()
    }

    /// Renders the root page
    ///
    /// # Errors
    /// Never fails today; the signature matches the other pages.
    pub fn generate_root(&self, heading: &str, add_extensions_link: bool) -> Result<DocumentationGeneratorResult> {
        let registry = self.model.registry();
        let mut writer = self.create_writer(None);

        if let Some(destination) = self.top_destination() {
            writer.write_link_destination(destination);
            writer.write_line();
        }
        writer.write_heading(1, heading);

        let types = self.documented_types();
        let namespaces = self.distinct_namespaces(&types);
        let class_hierarchy = !self
            .options
            .ignored_root_parts()
            .contains(RootDocumentationParts::CLASS_HIERARCHY);
        let include_namespace = self
            .options
            .include_containing_namespace()
            .contains(IncludeContainingNamespaceFilter::ROOT);

        let of_kind = |kind: TypeKind| -> Vec<SymbolId> {
            types
                .iter()
                .copied()
                .filter(|ty| registry.get(*ty).is_type_kind(kind))
                .collect()
        };
        let classes: Vec<SymbolId> = of_kind(TypeKind::Class)
            .into_iter()
            .filter(|ty| !class_hierarchy || !registry.is_static_class(*ty))
            .collect();
        let static_classes: Vec<SymbolId> = if class_hierarchy {
            of_kind(TypeKind::Class)
                .into_iter()
                .filter(|ty| registry.is_static_class(*ty))
                .collect()
        } else {
            Vec::new()
        };

        let section = |part: RootDocumentationParts| -> Vec<SymbolId> {
            match part {
                RootDocumentationParts::NAMESPACES => namespaces.clone(),
                RootDocumentationParts::CLASSES => classes.clone(),
                RootDocumentationParts::STATIC_CLASSES => static_classes.clone(),
                RootDocumentationParts::STRUCTS => of_kind(TypeKind::Struct),
                RootDocumentationParts::INTERFACES => of_kind(TypeKind::Interface),
                RootDocumentationParts::ENUMS => of_kind(TypeKind::Enum),
                RootDocumentationParts::DELEGATES => of_kind(TypeKind::Delegate),
                _ => Vec::new(),
            }
        };

        for part in &self.root_parts {
            match *part {
                RootDocumentationParts::CONTENT => {
                    let names: Vec<&str> = self
                        .root_parts
                        .iter()
                        .filter(|part| match **part {
                            RootDocumentationParts::CONTENT => false,
                            RootDocumentationParts::OTHER => add_extensions_link,
                            part => !section(part).is_empty(),
                        })
                        .map(|part| self.resources.root_heading(*part))
                        .collect();
                    writer.write_content(&names, false, false);
                }
                RootDocumentationParts::NAMESPACES => {
                    if !namespaces.is_empty() {
                        writer.write_heading(2, self.resources.namespaces_title);
                        writer.write_namespace_list(&namespaces);
                    }
                }
                RootDocumentationParts::CLASSES => {
                    if classes.is_empty() {
                        continue;
                    }
                    writer.write_heading(2, self.resources.classes_title);
                    if class_hierarchy {
                        writer.write_class_hierarchy(&classes);
                    } else {
                        writer.write_type_list(&classes, include_namespace, None);
                    }
                }
                RootDocumentationParts::OTHER => {
                    if add_extensions_link {
                        writer.write_heading(2, self.resources.other_title);
                        let mut url = join_path(
                            self.url_provider.get_file_name(DocumentationFileKind::Extensions),
                            &[EXTENSIONS_FOLDER.to_string()],
                            '/',
                        );
                        if self.options.scroll_to_content() {
                            url.push('#');
                            url.push_str(TOP_FRAGMENT);
                        }
                        writer.write_start_bullet_list();
                        writer.write_start_bullet_item();
                        writer.write_link(self.resources.extensions_of_external_types_title, &url, None);
                        writer.write_end_bullet_item();
                        writer.write_end_bullet_list();
                    }
                }
                part => {
                    let types = section(part);
                    if !types.is_empty() {
                        writer.write_heading(2, self.resources.root_heading(part));
                        writer.write_type_list(&types, include_namespace, None);
                    }
                }
            }
        }

        Ok(self.create_result(writer, DocumentationFileKind::Root, None))
    }

    /// Renders the page of a namespace
    ///
    /// Types of every namespace with the same name are listed.
    ///
    /// # Errors
    /// Returns an error when a documentation comment is malformed.
    pub fn generate_namespace(&self, namespace: SymbolId) -> Result<DocumentationGeneratorResult> {
        let registry = self.model.registry();
        let types: Vec<SymbolId> = self
            .model
            .types_in(namespace)
            .into_iter()
            .filter(|ty| !self.options.should_be_ignored(registry, *ty))
            .collect();
        let documentation = self.documentation(namespace)?;
        let documentation = documentation.as_deref();

        let mut writer = self.create_writer(Some(namespace));
        writer.write_symbol_heading(
            1,
            namespace,
            &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES,
            false,
            self.top_destination(),
        );

        let of_kind = |kind: TypeKind| -> Vec<SymbolId> {
            types
                .iter()
                .copied()
                .filter(|ty| registry.get(*ty).is_type_kind(kind))
                .collect()
        };
        let has_content = |part: NamespaceDocumentationParts| -> bool {
            match part {
                NamespaceDocumentationParts::EXAMPLES => has_element(documentation, "example"),
                NamespaceDocumentationParts::REMARKS => has_element(documentation, "remarks"),
                NamespaceDocumentationParts::SEE_ALSO => has_element(documentation, "seealso"),
                part => namespace_type_kind(part).is_some_and(|kind| !of_kind(kind).is_empty()),
            }
        };

        for part in &self.namespace_parts {
            match *part {
                NamespaceDocumentationParts::CONTENT => {
                    let names: Vec<&str> = self
                        .namespace_parts
                        .iter()
                        .filter(|part| has_content(**part))
                        .map(|part| self.resources.namespace_heading(*part))
                        .collect();
                    writer.write_content(&names, true, false);
                }
                NamespaceDocumentationParts::CONTAINING_NAMESPACE => {
                    let parent = registry
                        .containing_namespace(namespace)
                        .filter(|parent| !registry.get(*parent).is_global_namespace());
                    if parent.is_some() {
                        writer.write_containing_namespace(namespace, self.resources.containing_namespace_title);
                    }
                }
                NamespaceDocumentationParts::SUMMARY => writer.write_summary(documentation),
                NamespaceDocumentationParts::EXAMPLES => writer.write_section(
                    self.resources.examples_title,
                    2,
                    documentation.and_then(SymbolXmlDocumentation::example),
                ),
                NamespaceDocumentationParts::REMARKS => writer.write_section(
                    self.resources.remarks_title,
                    2,
                    documentation.and_then(SymbolXmlDocumentation::remarks),
                ),
                NamespaceDocumentationParts::SEE_ALSO => writer.write_see_also(documentation, 2),
                part => {
                    let Some(kind) = namespace_type_kind(part) else {
                        panic!("{part:?} is not a namespace section");
                    };
                    writer.write_member_table(
                        self.resources.get_type_kind_plural_name(kind),
                        2,
                        self.resources.get_type_kind_name(kind),
                        &of_kind(kind),
                        &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS,
                        None,
                        false,
                    )?;
                }
            }
        }

        Ok(self.create_result(writer, DocumentationFileKind::Namespace, Some(namespace)))
    }

    /// Renders the page of a type
    ///
    /// # Errors
    /// Returns an error when a documentation comment is malformed.
    pub fn generate_type(&self, ty: SymbolId) -> Result<DocumentationGeneratorResult> {
        let registry = self.model.registry();
        let type_model = self.model.get_type_model(ty);
        let documentation = self.documentation(ty)?;
        let documentation = documentation.as_deref();

        let derived: Vec<SymbolId> = if self.type_parts.contains(&TypeDocumentationParts::DERIVED) {
            let derived = if self.options.include_all_derived_types() {
                self.model.get_all_derived_types(ty)
            } else {
                self.model.get_derived_types(ty)
            };
            derived
                .into_iter()
                .filter(|derived| !self.options.should_be_ignored(registry, *derived))
                .collect()
        } else {
            Vec::new()
        };

        let include_inherited = type_model.type_kind() != TypeKind::Interface
            || self.options.include_inherited_interface_members();
        let tables = TypeTables::new(self.model, &type_model, include_inherited, self.options.omit_ienumerable());

        let mut writer = self.create_writer(Some(ty));
        writer.write_symbol_heading(
            1,
            ty,
            &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS.with_additional(
                AdditionalMemberOptions::USE_ITEM_PROPERTY_NAME | AdditionalMemberOptions::USE_OPERATOR_NAME,
            ),
            false,
            self.top_destination(),
        );

        let has_content = |part: TypeDocumentationParts| -> bool {
            match part {
                TypeDocumentationParts::EXAMPLES => has_element(documentation, "example"),
                TypeDocumentationParts::REMARKS => has_element(documentation, "remarks"),
                TypeDocumentationParts::SEE_ALSO => has_element(documentation, "seealso"),
                part => tables.get(part).is_some_and(|members| !members.is_empty()),
            }
        };

        let simple = DisplayFormat::SIMPLE_DECLARATION
            .with_additional(AdditionalMemberOptions::USE_ITEM_PROPERTY_NAME | AdditionalMemberOptions::USE_OPERATOR_NAME);

        for part in &self.type_parts {
            let part = *part;
            match part {
                TypeDocumentationParts::CONTENT => {
                    let names: Vec<&str> = self
                        .type_parts
                        .iter()
                        .filter(|part| has_content(**part))
                        .map(|part| self.resources.type_heading(*part))
                        .collect();
                    writer.write_content(&names, true, false);
                }
                TypeDocumentationParts::CONTAINING_NAMESPACE => {
                    writer.write_containing_namespace(ty, self.resources.namespace_title);
                }
                TypeDocumentationParts::CONTAINING_ASSEMBLY => writer.write_containing_assembly(ty),
                TypeDocumentationParts::OBSOLETE_MESSAGE => {
                    if type_model.is_obsolete() {
                        writer.write_obsolete_message(ty);
                    }
                }
                TypeDocumentationParts::SUMMARY => writer.write_summary(documentation),
                TypeDocumentationParts::DECLARATION => writer.write_declaration(ty),
                TypeDocumentationParts::TYPE_PARAMETERS => writer.write_type_parameters(ty, documentation, 3),
                TypeDocumentationParts::PARAMETERS => writer.write_parameters(ty, documentation, 3),
                TypeDocumentationParts::RETURN_VALUE => writer.write_return_type(ty, documentation, 3),
                TypeDocumentationParts::INHERITANCE => writer.write_inheritance(ty),
                TypeDocumentationParts::ATTRIBUTES => writer.write_attributes(ty, 3),
                TypeDocumentationParts::DERIVED => writer.write_derived_types(&derived),
                TypeDocumentationParts::IMPLEMENTS => writer.write_implemented_interfaces(&tables.interfaces),
                TypeDocumentationParts::EXAMPLES => writer.write_section(
                    self.resources.examples_title,
                    2,
                    documentation.and_then(SymbolXmlDocumentation::example),
                ),
                TypeDocumentationParts::REMARKS => writer.write_section(
                    self.resources.remarks_title,
                    2,
                    documentation.and_then(SymbolXmlDocumentation::remarks),
                ),
                TypeDocumentationParts::SEE_ALSO => writer.write_see_also(documentation, 2),
                TypeDocumentationParts::FIELDS if type_model.type_kind() == TypeKind::Enum => {
                    writer.write_enum_fields(ty, &tables.fields)?;
                }
                TypeDocumentationParts::EXPLICIT_INTERFACE_IMPLEMENTATIONS => {
                    writer.write_member_table(
                        self.resources.explicit_interface_implementations_title,
                        2,
                        self.resources.member_title,
                        &tables.explicit_implementations,
                        &DisplayFormat::EXPLICIT_IMPLEMENTATION_FULL_NAME.with_additional(
                            AdditionalMemberOptions::USE_ITEM_PROPERTY_NAME | AdditionalMemberOptions::USE_OPERATOR_NAME,
                        ),
                        None,
                        false,
                    )?;
                }
                TypeDocumentationParts::EXTENSION_METHODS => {
                    writer.write_member_table(
                        self.resources.extension_methods_title,
                        2,
                        self.resources.extension_method_title,
                        &tables.extension_methods,
                        &simple,
                        None,
                        false,
                    )?;
                }
                part => {
                    let Some(members) = tables.get(part) else {
                        panic!("{part:?} is not a type section");
                    };
                    let (header, format) = match nested_type_kind(part) {
                        Some(kind) => (
                            self.resources.get_type_kind_name(kind),
                            DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS,
                        ),
                        None => (self.member_header(part), simple),
                    };
                    writer.write_member_table(
                        self.resources.type_heading(part),
                        2,
                        header,
                        members,
                        &format,
                        Some(ty),
                        nested_type_kind(part).is_none(),
                    )?;
                }
            }
        }

        if derived.len() > self.options.max_derived_types() {
            writer.write_all_derived_types(&derived);
        }

        Ok(self.create_result(writer, DocumentationFileKind::Type, Some(ty)))
    }

    fn member_header(&self, part: TypeDocumentationParts) -> &'static str {
        match part {
            TypeDocumentationParts::CONSTRUCTORS => self.resources.constructor_title,
            TypeDocumentationParts::FIELDS => self.resources.field_title,
            TypeDocumentationParts::INDEXERS => self.resources.indexer_title,
            TypeDocumentationParts::PROPERTIES => self.resources.property_title,
            TypeDocumentationParts::METHODS => self.resources.method_title,
            TypeDocumentationParts::OPERATORS => self.resources.operator_title,
            TypeDocumentationParts::EVENTS => self.resources.event_title,
            _ => panic!("{part:?} is not a member table"),
        }
    }

    /// Members of `ty` with a page, grouped by page
    ///
    /// Overloads share the folders of their page, so they end up in one group. Groups keep the
    /// table order of [`TypeDocumentationModel::documented_members`].
    #[must_use]
    pub fn member_groups(&self, ty: SymbolId) -> Vec<Vec<SymbolId>> {
        let registry = self.model.registry();
        let type_model = self.model.get_type_model(ty);
        let mut groups: Vec<(Option<Vec<String>>, Vec<SymbolId>)> = Vec::new();

        for member in type_model.documented_members(self.options.ignored_type_parts()) {
            let folders = self.url_provider.get_folders(registry, member);
            match groups.iter_mut().find(|(key, _)| *key == folders) {
                Some((_, group)) => group.push(member),
                None => groups.push((folders, vec![member])),
            }
        }

        groups.into_iter().map(|(_, group)| group).collect()
    }

    /// Renders the page shared by the members of one group
    ///
    /// # Errors
    /// Returns an error when a documentation comment is malformed.
    ///
    /// # Panics
    /// Panics if `members` is empty.
    pub fn generate_member(&self, members: &[SymbolId]) -> Result<DocumentationGeneratorResult> {
        let Some(&first) = members.first() else {
            panic!("a member page needs at least one member");
        };
        let registry = self.model.registry();
        let overloaded = members.len() > 1;

        let mut writer = self.create_writer(Some(first));
        writer.write_member_title(first, overloaded);
        writer.write_content(&[], true, false);

        if !self
            .options
            .ignored_member_parts()
            .contains(MemberDocumentationParts::CONTAINING_TYPE)
        {
            writer.write_containing_type(first);
        }
        if !self
            .options
            .ignored_member_parts()
            .contains(MemberDocumentationParts::CONTAINING_ASSEMBLY)
        {
            writer.write_containing_assembly(first);
        }

        if overloaded {
            let format = DisplayFormat::SIMPLE_DECLARATION.with_additional(
                AdditionalMemberOptions::USE_ITEM_PROPERTY_NAME | AdditionalMemberOptions::USE_OPERATOR_NAME,
            );

            if let Some(anchor) = get_overloads_fragment(registry, first) {
                writer.write_link_destination(&anchor);
                writer.write_line();
            }
            writer.write_member_table(
                self.resources.overloads_title,
                2,
                self.resources.get_name(registry, first),
                members,
                &format,
                None,
                false,
            )?;

            let mut overloads = members.to_vec();
            overloads.sort_by_cached_key(|member| (to_display_string(registry, *member, &format), *member));
            for overload in overloads {
                writer.write_start_heading(2);
                writer.write_string(&to_display_string(registry, overload, &format));
                if let Some(anchor) = get_fragment(registry, overload) {
                    writer.write_space();
                    writer.write_link_destination(&anchor);
                }
                writer.write_end_heading();
                self.write_member_content(&mut writer, overload, 1)?;
            }
        } else {
            self.write_member_content(&mut writer, first, 0)?;
        }

        Ok(self.create_result(writer, DocumentationFileKind::Member, Some(first)))
    }

    /// Renders every member page of `ty`
    ///
    /// # Errors
    /// Returns the first error of [`DocumentationGenerator::generate_member`].
    pub fn generate_members(&self, ty: SymbolId) -> Result<Vec<DocumentationGeneratorResult>> {
        self.member_groups(ty)
            .iter()
            .map(|group| self.generate_member(group))
            .collect()
    }

    fn write_member_content(
        &self,
        writer: &mut PageWriter<'_, 'a, W>,
        member: SymbolId,
        level_base: usize,
    ) -> Result<()> {
        let documentation = self.documentation(member)?;
        let documentation = documentation.as_deref();

        for part in &self.member_parts {
            match *part {
                MemberDocumentationParts::OBSOLETE_MESSAGE => writer.write_obsolete_message(member),
                MemberDocumentationParts::SUMMARY => writer.write_summary(documentation),
                MemberDocumentationParts::DECLARATION => writer.write_declaration(member),
                MemberDocumentationParts::TYPE_PARAMETERS => {
                    writer.write_type_parameters(member, documentation, 3 + level_base);
                }
                MemberDocumentationParts::PARAMETERS => writer.write_parameters(member, documentation, 3 + level_base),
                MemberDocumentationParts::RETURN_VALUE => {
                    writer.write_return_type(member, documentation, 3 + level_base);
                }
                MemberDocumentationParts::IMPLEMENTS => writer.write_implemented_members(member, 3 + level_base),
                MemberDocumentationParts::ATTRIBUTES => writer.write_attributes(member, 3 + level_base),
                MemberDocumentationParts::EXCEPTIONS => writer.write_exceptions(documentation, 3 + level_base),
                MemberDocumentationParts::EXAMPLES => writer.write_section(
                    self.resources.examples_title,
                    2 + level_base,
                    documentation.and_then(SymbolXmlDocumentation::example),
                ),
                MemberDocumentationParts::REMARKS => writer.write_section(
                    self.resources.remarks_title,
                    2 + level_base,
                    documentation.and_then(SymbolXmlDocumentation::remarks),
                ),
                MemberDocumentationParts::SEE_ALSO => writer.write_see_also(documentation, 2 + level_base),
                MemberDocumentationParts::SOURCE_REFERENCES => writer.write_applies_to(member, 2 + level_base),
                part => panic!("{part:?} is not a member section"),
            }
        }
        Ok(())
    }

    /// Renders the page listing the external types extended by documented extension methods
    ///
    /// Returns `None` when there are none.
    ///
    /// # Errors
    /// Never fails today; the signature matches the other pages.
    pub fn generate_extensions(&self) -> Result<Option<DocumentationGeneratorResult>> {
        let registry = self.model.registry();
        let types = self.extended_external_types();
        if types.is_empty() {
            return Ok(None);
        }

        let mut names = HashSet::new();
        let namespaces: Vec<SymbolId> = types
            .iter()
            .filter_map(|ty| registry.containing_namespace(*ty))
            .filter(|namespace| names.insert(registry.namespace_name(*namespace)))
            .collect();

        let ignored = self.options.ignored_namespace_parts();
        let sections: Vec<(NamespaceDocumentationParts, Vec<SymbolId>)> = self
            .namespace_parts
            .iter()
            .filter_map(|part| {
                let kind = namespace_type_kind(*part)?;
                let types: Vec<SymbolId> = types
                    .iter()
                    .copied()
                    .filter(|ty| registry.get(*ty).is_type_kind(kind))
                    .collect();
                (!ignored.contains(*part) && !types.is_empty()).then_some((*part, types))
            })
            .collect();

        let mut writer = self.create_writer(None);
        writer.set_current_folders(Some(vec![EXTENSIONS_FOLDER.to_string()]));

        if let Some(destination) = self.top_destination() {
            writer.write_link_destination(destination);
            writer.write_line();
        }
        writer.write_heading(1, self.resources.extensions_of_external_types_title);

        let mut content = vec![self.resources.namespaces_title];
        content.extend(sections.iter().map(|(part, _)| self.resources.namespace_heading(*part)));
        writer.write_content(&content, true, false);

        writer.write_heading(2, self.resources.namespaces_title);
        writer.write_namespace_list(&namespaces);

        writer.set_external_urls(false);
        for (part, types) in &sections {
            writer.write_heading(2, self.resources.namespace_heading(*part));
            writer.write_type_list(types, true, None);
        }

        Ok(Some(self.create_result(writer, DocumentationFileKind::Extensions, None)))
    }

    /// Renders the page of the extension methods of one external type
    ///
    /// # Errors
    /// Returns an error when a documentation comment is malformed.
    pub fn generate_extended_external_type(&self, ty: SymbolId) -> Result<DocumentationGeneratorResult> {
        let registry = self.model.registry();
        let mut writer = self.create_writer(Some(ty));

        if let Some(destination) = self.top_destination() {
            writer.write_link_destination(destination);
            writer.write_line();
        }

        writer.write_start_heading(1);
        writer.write_symbol_link(ty, &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS);
        writer.write_space();
        if let Some(kind) = registry.get(ty).type_kind() {
            writer.write_string(self.resources.get_type_kind_name(kind));
            writer.write_space();
        }
        writer.write_string(self.resources.extensions_title);
        writer.write_end_heading();
        writer.write_content(&[], true, false);

        writer.write_member_table(
            self.resources.extension_methods_title,
            2,
            self.resources.extension_method_title,
            &self.model.get_extension_methods_for(ty),
            &DisplayFormat::SIMPLE_DECLARATION,
            None,
            false,
        )?;

        Ok(self.create_result(writer, DocumentationFileKind::Type, Some(ty)))
    }

    /// Renders every documented type as one inheritance tree, with interfaces listed after it
    ///
    /// # Errors
    /// Never fails today; the signature matches the other pages.
    pub fn generate_object_model(&self, heading: &str) -> Result<DocumentationGeneratorResult> {
        let registry = self.model.registry();
        let types = self.documented_types();
        let (interfaces, others): (Vec<SymbolId>, Vec<SymbolId>) = types
            .iter()
            .copied()
            .partition(|ty| registry.get(*ty).is_type_kind(TypeKind::Interface));

        let mut writer = self.create_writer(None);
        writer.set_current_folders(Some(vec![OBJECT_MODEL_FOLDER.to_string()]));

        if let Some(destination) = self.top_destination() {
            writer.write_link_destination(destination);
            writer.write_line();
        }
        writer.write_heading(1, heading);
        writer.write_content(&[], true, false);

        if !others.is_empty() {
            writer.write_heading(2, self.resources.object_model_title);
            writer.write_class_hierarchy(&others);
        }
        if !interfaces.is_empty() {
            writer.write_heading(2, self.resources.interfaces_title);
            writer.write_type_list(&interfaces, false, None);
        }

        Ok(self.create_result(writer, DocumentationFileKind::ObjectModel, None))
    }
}

/// Member lists of one type page, computed once
struct TypeTables {
    constructors: Vec<SymbolId>,
    fields: Vec<SymbolId>,
    indexers: Vec<SymbolId>,
    properties: Vec<SymbolId>,
    methods: Vec<SymbolId>,
    operators: Vec<SymbolId>,
    events: Vec<SymbolId>,
    explicit_implementations: Vec<SymbolId>,
    extension_methods: Vec<SymbolId>,
    classes: Vec<SymbolId>,
    structs: Vec<SymbolId>,
    interfaces_nested: Vec<SymbolId>,
    enums: Vec<SymbolId>,
    delegates: Vec<SymbolId>,
    interfaces: Vec<crate::symbols::TypeRef>,
}

impl TypeTables {
    fn new(
        model: &DocumentationModel<'_>,
        type_model: &TypeDocumentationModel<'_>,
        include_inherited: bool,
        omit_ienumerable: bool,
    ) -> Self {
        let is_enum = type_model.type_kind() == TypeKind::Enum;
        TypeTables {
            constructors: type_model.constructors(),
            fields: type_model.fields(include_inherited && !is_enum),
            indexers: type_model.indexers(include_inherited),
            properties: type_model.properties(include_inherited),
            methods: type_model.methods(include_inherited),
            operators: type_model.operators(true),
            events: type_model.events(include_inherited),
            explicit_implementations: type_model.explicit_interface_implementations(),
            extension_methods: model.get_extension_methods_for(type_model.symbol()),
            classes: type_model.classes(),
            structs: type_model.structs(),
            interfaces_nested: type_model.interfaces(),
            enums: type_model.enums(),
            delegates: type_model.delegates(),
            interfaces: type_model.implemented_interfaces(omit_ienumerable),
        }
    }

    /// The members of a table section, `None` for sections that are not tables
    fn get(&self, part: TypeDocumentationParts) -> Option<&[SymbolId]> {
        let members = match part {
            TypeDocumentationParts::CONSTRUCTORS => &self.constructors,
            TypeDocumentationParts::FIELDS => &self.fields,
            TypeDocumentationParts::INDEXERS => &self.indexers,
            TypeDocumentationParts::PROPERTIES => &self.properties,
            TypeDocumentationParts::METHODS => &self.methods,
            TypeDocumentationParts::OPERATORS => &self.operators,
            TypeDocumentationParts::EVENTS => &self.events,
            TypeDocumentationParts::EXPLICIT_INTERFACE_IMPLEMENTATIONS => &self.explicit_implementations,
            TypeDocumentationParts::EXTENSION_METHODS => &self.extension_methods,
            TypeDocumentationParts::CLASSES => &self.classes,
            TypeDocumentationParts::STRUCTS => &self.structs,
            TypeDocumentationParts::INTERFACES => &self.interfaces_nested,
            TypeDocumentationParts::ENUMS => &self.enums,
            TypeDocumentationParts::DELEGATES => &self.delegates,
            _ => return None,
        };
        Some(members)
    }
}

fn has_element(documentation: Option<&SymbolXmlDocumentation>, name: &str) -> bool {
    documentation.is_some_and(|documentation| documentation.has_element(name))
}

fn namespace_type_kind(part: NamespaceDocumentationParts) -> Option<TypeKind> {
    match part {
        NamespaceDocumentationParts::CLASSES => Some(TypeKind::Class),
        NamespaceDocumentationParts::STRUCTS => Some(TypeKind::Struct),
        NamespaceDocumentationParts::INTERFACES => Some(TypeKind::Interface),
        NamespaceDocumentationParts::ENUMS => Some(TypeKind::Enum),
        NamespaceDocumentationParts::DELEGATES => Some(TypeKind::Delegate),
        _ => None,
    }
}

fn nested_type_kind(part: TypeDocumentationParts) -> Option<TypeKind> {
    match part {
        TypeDocumentationParts::CLASSES => Some(TypeKind::Class),
        TypeDocumentationParts::STRUCTS => Some(TypeKind::Struct),
        TypeDocumentationParts::INTERFACES => Some(TypeKind::Interface),
        TypeDocumentationParts::ENUMS => Some(TypeKind::Enum),
        TypeDocumentationParts::DELEGATES => Some(TypeKind::Delegate),
        _ => None,
    }
}

enum Job {
    Root { add_extensions_link: bool },
    Namespace(SymbolId),
    Type(SymbolId),
    Members(Vec<SymbolId>),
    Extensions,
    ExtendedType(SymbolId),
}

/// Lazy page iterator returned by [`DocumentationGenerator::generate`]
pub struct Pages<'g, 'm, 'a, W> {
    generator: &'g DocumentationGenerator<'m, 'a, W>,
    heading: String,
    cancellation: CancellationToken,
    pending: VecDeque<Job>,
}

impl<W: DocumentationWriter + Default> Iterator for Pages<'_, '_, '_, W> {
    type Item = Result<DocumentationGeneratorResult>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let job = self.pending.pop_front()?;

            if self.cancellation.is_cancelled() {
                info!("documentation generation cancelled, {} pages skipped", self.pending.len() + 1);
                self.pending.clear();
                return None;
            }

            let generator = self.generator;
            let result = match job {
                Job::Root { add_extensions_link } => generator.generate_root(&self.heading, add_extensions_link),
                Job::Namespace(namespace) => generator.generate_namespace(namespace),
                Job::Type(ty) => {
                    let result = generator.generate_type(ty);
                    if result.is_ok() && generator.options.depth() == DocumentationDepth::Member {
                        for group in generator.member_groups(ty).into_iter().rev() {
                            self.pending.push_front(Job::Members(group));
                        }
                    }
                    result
                }
                Job::Members(members) => generator.generate_member(&members),
                Job::Extensions => match generator.generate_extensions() {
                    Ok(Some(page)) => Ok(page),
                    Ok(None) => continue,
                    Err(error) => Err(error),
                },
                Job::ExtendedType(ty) => generator.generate_extended_external_type(ty),
            };

            if result.is_err() {
                self.pending.clear();
            }
            return Some(result);
        }
    }
}

/// Kind of the symbol a page documents
///
/// # Panics
/// Panics for symbols that never get a page.
#[must_use]
pub fn file_kind_of(kind: SymbolKind) -> DocumentationFileKind {
    match kind {
        SymbolKind::Namespace => DocumentationFileKind::Namespace,
        SymbolKind::NamedType => DocumentationFileKind::Type,
        SymbolKind::Method | SymbolKind::Property | SymbolKind::Field | SymbolKind::Event => {
            DocumentationFileKind::Member
        }
        kind => panic!("{kind:?} symbols have no page"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filter::SymbolFilterOptions,
        symbols::{MethodBuilder, Modifiers, SpecialType, TypeBuilder},
        test::factories::fixture,
        urls::MarkdownUrlProvider,
    };
    use pretty_assertions::assert_eq;

    fn options() -> DocumentationOptions {
        DocumentationOptions::builder().build().unwrap()
    }

    #[test]
    fn pages_in_traversal_order() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let provider = MarkdownUrlProvider::default();
        let generator = DocumentationGenerator::new(&model, &provider, options(), DocumentationResources::default());

        let pages: Vec<DocumentationGeneratorResult> = generator
            .generate("Acme", &CancellationToken::new())
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(pages[0].kind, DocumentationFileKind::Root);
        assert_eq!(pages[0].file_path, "README.md");
        assert_eq!(pages[1].kind, DocumentationFileKind::Namespace);
        assert_eq!(pages[1].file_path, "Acme/Data/README.md");

        let paths: Vec<&str> = pages.iter().map(|page| page.file_path.as_str()).collect();
        let repository = paths
            .iter()
            .position(|path| *path == "Acme/Data/Repository-1/README.md")
            .unwrap();
        assert_eq!(paths[repository + 1], "Acme/Data/Repository-1/-ctor/README.md");
        assert!(paths.contains(&"Acme/Data/Repository-1/Save/README.md"));
        assert_eq!(
            paths.iter().filter(|path| **path == "Acme/Data/Repository-1/Save/README.md").count(),
            1
        );
        assert!(!paths.contains(&"Acme/Data/Repository-1/secret/README.md"));
    }

    #[test]
    fn depth_limits_the_pages() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let provider = MarkdownUrlProvider::default();
        let options = DocumentationOptions::builder()
            .depth(DocumentationDepth::Namespace)
            .build()
            .unwrap();
        let generator = DocumentationGenerator::new(&model, &provider, options, DocumentationResources::default());

        let kinds: Vec<DocumentationFileKind> = generator
            .generate("Acme", &CancellationToken::new())
            .map(|page| page.unwrap().kind)
            .collect();

        assert_eq!(kinds, vec![DocumentationFileKind::Root, DocumentationFileKind::Namespace]);
    }

    #[test]
    fn cancellation_stops_the_walk() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let provider = MarkdownUrlProvider::default();
        let generator = DocumentationGenerator::new(&model, &provider, options(), DocumentationResources::default());
        let token = CancellationToken::new();

        let mut pages = generator.generate("Acme", &token);
        assert!(pages.next().is_some());
        token.clone().cancel();
        assert!(pages.next().is_none());
        assert!(pages.next().is_none());
    }

    #[test]
    fn overloads_share_a_page() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let provider = MarkdownUrlProvider::default();
        let generator = DocumentationGenerator::new(&model, &provider, options(), DocumentationResources::default());

        let groups = generator.member_groups(fixture.repository);
        let save = groups.iter().find(|group| group.contains(&fixture.save)).unwrap();
        assert_eq!(save.len(), 2);
        assert!(save.contains(&fixture.save_overwrite));

        let page = generator.generate_member(save).unwrap();
        assert_eq!(page.file_path, "Acme/Data/Repository-1/Save/README.md");
        assert!(page.content.starts_with("# Repository.Save Method\n"));
        assert!(page.content.contains("<a id=\"Acme_Data_Repository_1_Save\"></a>"));
        assert!(page.content.contains("## Overloads\n"));
        assert!(page.content.contains("<a id=\"Acme_Data_Repository_1_Save__0_\"></a>"));
        assert!(page.content.contains("<a id=\"Acme_Data_Repository_1_Save__0_System_Boolean_\"></a>"));
    }

    #[test]
    fn type_page_sections() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let provider = MarkdownUrlProvider::default();
        let generator = DocumentationGenerator::new(&model, &provider, options(), DocumentationResources::default());

        let page = generator.generate_type(fixture.repository).unwrap();
        let content = page.content.as_str();

        assert!(content.starts_with("# Repository\\<T\\> Class\n\n[Home](../../../README.md)"));
        assert!(content.contains("**Namespace**: [Acme.Data](../README.md)"));
        assert!(content.contains("**Assembly**: Acme.dll"));
        assert!(content.contains("**WARNING: This API is now obsolete.**"));
        assert!(content.contains("```csharp\n"));

        let headings: Vec<&str> = content.lines().filter(|line| line.starts_with("## ")).collect();
        let position = |heading: &str| headings.iter().position(|line| *line == heading).unwrap();
        assert!(position("## Constructors") < position("## Fields"));
        assert!(position("## Fields") < position("## Indexers"));
        assert!(position("## Properties") < position("## Methods"));
        assert!(position("## Events") < position("## Explicit Interface Implementations"));
        assert!(!headings.contains(&"## Remarks"));
    }

    #[test]
    fn extensions_of_external_types() {
        let mut fixture = fixture();
        let string = fixture.registry.special(SpecialType::String);
        let extensions = TypeBuilder::class("StringExtensions")
            .public()
            .modifiers(Modifiers::STATIC)
            .build(&mut fixture.registry, fixture.namespace)
            .unwrap();
        MethodBuilder::new("Shout")
            .public()
            .extension()
            .parameter("value", string.clone())
            .returns(string)
            .build(&mut fixture.registry, extensions)
            .unwrap();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let provider = MarkdownUrlProvider::default();
        let generator = DocumentationGenerator::new(&model, &provider, options(), DocumentationResources::default());

        let pages: Vec<DocumentationGeneratorResult> = generator
            .generate("Acme", &CancellationToken::new())
            .collect::<Result<_>>()
            .unwrap();

        assert!(pages[0].content.contains("* [Extensions of External Types](_Extensions/README.md)"));

        let extensions_page = pages
            .iter()
            .find(|page| page.kind == DocumentationFileKind::Extensions)
            .unwrap();
        assert_eq!(extensions_page.file_path, "_Extensions/README.md");
        assert!(extensions_page.content.contains("* [String](../System/String/README.md)"));

        let string_page = pages.last().unwrap();
        assert_eq!(string_page.file_path, "System/String/README.md");
        assert!(string_page.content.starts_with(
            "# [String](https://docs.microsoft.com/en-us/dotnet/api/system.string) Class Extensions\n"
        ));
        assert!(string_page.content.contains("Shout"));
    }

    #[test]
    fn object_model_page() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let provider = MarkdownUrlProvider::default();
        let generator = DocumentationGenerator::new(&model, &provider, options(), DocumentationResources::default());

        let page = generator.generate_object_model("Acme").unwrap();
        assert_eq!(page.file_path, "_ObjectModel/README.md");
        assert!(page.content.contains("## Object Model"));
        assert!(page.content.contains("[Widget](../Acme/Data/Widget/README.md)"));
        assert!(page.content.contains("## Interfaces"));
    }

    #[test]
    fn page_kinds_by_symbol() {
        assert_eq!(file_kind_of(SymbolKind::NamedType), DocumentationFileKind::Type);
        assert_eq!(file_kind_of(SymbolKind::Event), DocumentationFileKind::Member);
        assert_eq!(DocumentationFileKind::Extensions.to_string(), "Extensions");
    }
}
