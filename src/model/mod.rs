//! The documentation model: which types are documented and what their comments say.
//!
//! [`DocumentationModel`] sits between the symbol graph and the writers. It answers three kinds
//! of questions:
//!
//! - **What is documented**: [`DocumentationModel::types`] walks the documented assemblies and
//!   yields every named type accepted by the filter, nested types included. The walk is lazy and
//!   restartable; each call starts over.
//! - **How types relate**: derived types, extension methods and the external types they extend,
//!   and the per-type member lists of [`TypeDocumentationModel`].
//! - **What the comments say**: [`DocumentationModel::get_xml_documentation`] finds the comment
//!   of a symbol in the assembly's XML documentation file, in the comment attached to the symbol,
//!   by following `<inheritdoc/>`, or in additional XML files, in that order.
//!
//! # Caching
//!
//! Type models, resolved comments (including the fact that a symbol has none) and loaded XML
//! files are cached in concurrent maps. Every cached value is a pure function of the model's
//! inputs, so a value computed twice by racing callers is simply published twice.
//!
//! # Example
//!
//! ```rust
//! use cildoc::filter::SymbolFilterOptions;
//! use cildoc::model::DocumentationModel;
//! use cildoc::symbols::{SymbolRegistry, TypeBuilder};
//!
//! let mut registry = SymbolRegistry::new();
//! let assembly = registry.add_assembly("Acme", "1.0.0.0");
//! let namespace = registry.namespace(assembly, "Acme")?;
//! let widget = TypeBuilder::class("Widget")
//!     .public()
//!     .documentation("<summary>A widget.</summary>")
//!     .build(&mut registry, namespace)?;
//!
//! let model = DocumentationModel::new(&registry, [assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
//! assert_eq!(model.types().collect::<Vec<_>>(), vec![widget]);
//!
//! let documentation = model.get_xml_documentation(widget, None)?.unwrap();
//! assert_eq!(documentation.summary().unwrap().text(), "A widget.");
//! # Ok::<(), cildoc::Error>(())
//! ```

pub mod hierarchy;
pub mod source;
mod type_model;
pub mod xml;

pub use hierarchy::{TypeHierarchy, TypeHierarchyItem};
pub use source::{SourceReference, SourceReferenceProvider};
pub use type_model::TypeDocumentationModel;
pub use xml::{SymbolXmlDocumentation, XmlDocumentation, XmlElement, XmlNode};

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use dashmap::DashMap;

use crate::{
    filter::SymbolFilterOptions,
    symbols::{
        documentation_comment_id, MethodKind, SymbolId, SymbolKind, SymbolRegistry, TypeKind,
        TypeRef,
    },
    Result,
};

type CultureKey = (SymbolId, Option<String>);

/// Documented assemblies of a registry plus the caches derived from them
pub struct DocumentationModel<'a> {
    registry: &'a SymbolRegistry,
    assemblies: Vec<SymbolId>,
    filter: SymbolFilterOptions,
    additional_xml_paths: Vec<PathBuf>,
    additional_xml: OnceLock<Vec<XmlDocumentation>>,
    assembly_xml: DashMap<CultureKey, Option<Arc<XmlDocumentation>>>,
    comments: DashMap<CultureKey, Option<Arc<SymbolXmlDocumentation>>>,
    type_models: DashMap<SymbolId, Arc<TypeDocumentationModel<'a>>>,
    declaration_ids: OnceLock<HashMap<String, SymbolId>>,
    source_references: Option<SourceReferenceProvider>,
}

impl std::fmt::Debug for DocumentationModel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentationModel")
            .field("assemblies", &self.assemblies)
            .field("filter", &self.filter)
            .field("additional_xml_paths", &self.additional_xml_paths)
            .field("type_models", &self.type_models.len())
            .finish_non_exhaustive()
    }
}

impl<'a> DocumentationModel<'a> {
    /// Creates a model documenting `assemblies` of `registry`
    ///
    /// `additional_xml_paths` name XML documentation files consulted for symbols whose own
    /// assembly has no documentation; they are loaded on first use.
    pub fn new<A, P>(
        registry: &'a SymbolRegistry,
        assemblies: A,
        filter: SymbolFilterOptions,
        additional_xml_paths: impl IntoIterator<Item = P>,
    ) -> Self
    where
        A: IntoIterator<Item = SymbolId>,
        P: AsRef<Path>,
    {
        DocumentationModel {
            registry,
            assemblies: assemblies.into_iter().collect(),
            filter,
            additional_xml_paths: additional_xml_paths
                .into_iter()
                .map(|path| path.as_ref().to_path_buf())
                .collect(),
            additional_xml: OnceLock::new(),
            assembly_xml: DashMap::new(),
            comments: DashMap::new(),
            type_models: DashMap::new(),
            declaration_ids: OnceLock::new(),
            source_references: None,
        }
    }

    /// Attaches source references used for "Applies to" sections
    #[must_use]
    pub fn with_source_references(mut self, provider: SourceReferenceProvider) -> Self {
        self.source_references = Some(provider);
        self
    }

    /// The symbol graph
    #[must_use]
    pub fn registry(&self) -> &'a SymbolRegistry {
        self.registry
    }

    /// The documented assemblies
    #[must_use]
    pub fn assemblies(&self) -> &[SymbolId] {
        &self.assemblies
    }

    /// The filter deciding which symbols are documented
    #[must_use]
    pub fn filter(&self) -> &SymbolFilterOptions {
        &self.filter
    }

    /// Returns `true` if the filter accepts `symbol`
    #[must_use]
    pub fn is_visible(&self, symbol: SymbolId) -> bool {
        self.filter.is_match(self.registry, symbol)
    }

    /// Returns `true` if `symbol` is not declared in a documented assembly
    #[must_use]
    pub fn is_external(&self, symbol: SymbolId) -> bool {
        let assembly = if self.registry.get(symbol).kind() == SymbolKind::Assembly {
            Some(symbol)
        } else {
            self.registry.containing_assembly(symbol)
        };
        !assembly.is_some_and(|assembly| self.assemblies.contains(&assembly))
    }

    /// Every documented named type, nested types after their containing type
    ///
    /// Nested types are only visited below types that are documented themselves.
    pub fn types(&self) -> impl Iterator<Item = SymbolId> + use<'_, 'a> {
        let mut stack: Vec<SymbolId> = self
            .assemblies
            .iter()
            .rev()
            .filter_map(|assembly| self.registry.global_namespace(*assembly))
            .collect();

        std::iter::from_fn(move || {
            while let Some(current) = stack.pop() {
                let symbol = self.registry.get(current);
                match symbol.kind() {
                    SymbolKind::Namespace => {
                        stack.extend(self.registry.members(current).iter().rev());
                    }
                    SymbolKind::NamedType if self.is_visible(current) => {
                        stack.extend(
                            self.registry
                                .members(current)
                                .iter()
                                .rev()
                                .filter(|member| self.registry.get(**member).kind() == SymbolKind::NamedType),
                        );
                        return Some(current);
                    }
                    _ => {}
                }
            }
            None
        })
    }

    /// Documented top-level types declared in the namespace named like `namespace`
    ///
    /// Namespaces are matched by name, so a namespace spread over several assemblies lists the
    /// types of all of them.
    #[must_use]
    pub fn types_in(&self, namespace: SymbolId) -> Vec<SymbolId> {
        let name = self.registry.namespace_name(namespace);
        self.types()
            .filter(|ty| self.registry.containing_type(*ty).is_none())
            .filter(|ty| self.registry.containing_namespace_name(*ty) == name)
            .collect()
    }

    /// Namespaces containing at least one documented type, one per distinct name, in type order
    #[must_use]
    pub fn namespaces(&self) -> Vec<SymbolId> {
        let mut names = HashSet::new();
        self.types()
            .filter_map(|ty| self.registry.containing_namespace(ty))
            .filter(|namespace| names.insert(self.registry.namespace_name(*namespace)))
            .collect()
    }

    /// Returns the cached model of a documented type
    ///
    /// # Panics
    /// Panics if `ty` is not a named type.
    #[must_use]
    pub fn get_type_model(&self, ty: SymbolId) -> Arc<TypeDocumentationModel<'a>> {
        if let Some(model) = self.type_models.get(&ty) {
            return Arc::clone(&model);
        }

        let model = Arc::new(TypeDocumentationModel::new(self.registry, ty, self.filter.clone()));
        self.type_models.insert(ty, Arc::clone(&model));
        model
    }

    /// Documented types that directly derive from or directly implement `ty`
    ///
    /// Only non-static classes and interfaces have derived types.
    #[must_use]
    pub fn get_derived_types(&self, ty: SymbolId) -> Vec<SymbolId> {
        if !self.can_be_derived(ty) {
            return Vec::new();
        }

        self.types()
            .filter(|candidate| {
                self.registry.base_type(*candidate) == Some(ty)
                    || self
                        .registry
                        .interfaces(*candidate)
                        .iter()
                        .any(|interface| interface.definition() == Some(ty))
            })
            .collect()
    }

    /// Documented types that derive from or implement `ty`, directly or indirectly
    #[must_use]
    pub fn get_all_derived_types(&self, ty: SymbolId) -> Vec<SymbolId> {
        if !self.can_be_derived(ty) {
            return Vec::new();
        }

        self.types()
            .filter(|candidate| self.registry.inherits_from(*candidate, ty, true))
            .collect()
    }

    fn can_be_derived(&self, ty: SymbolId) -> bool {
        let symbol = self.registry.get(ty);
        matches!(symbol.type_kind(), Some(TypeKind::Class | TypeKind::Interface))
            && !self.registry.is_static_class(ty)
    }

    /// Every documented extension method
    #[must_use]
    pub fn get_extension_methods(&self) -> Vec<SymbolId> {
        self.types()
            .filter(|ty| self.might_contain_extension_methods(*ty))
            .flat_map(|ty| {
                let model = self.get_type_model(ty);
                model
                    .members()
                    .iter()
                    .copied()
                    .filter(|member| self.is_extension_method(*member))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Documented extension methods whose extended type is `ty`
    #[must_use]
    pub fn get_extension_methods_for(&self, ty: SymbolId) -> Vec<SymbolId> {
        self.get_extension_methods()
            .into_iter()
            .filter(|method| self.extended_type(*method) == Some(ty))
            .collect()
    }

    /// Types outside the documented assemblies that documented extension methods extend
    #[must_use]
    pub fn get_extended_external_types(&self) -> Vec<SymbolId> {
        let mut seen = HashSet::new();
        self.get_extension_methods()
            .into_iter()
            .filter_map(|method| self.extended_type(method))
            .filter(|ty| self.is_external(*ty))
            .filter(|ty| seen.insert(*ty))
            .collect()
    }

    fn might_contain_extension_methods(&self, ty: SymbolId) -> bool {
        self.registry.is_static_class(ty)
            && self.registry.get(ty).arity() == 0
            && self.registry.containing_type(ty).is_none()
    }

    fn is_extension_method(&self, member: SymbolId) -> bool {
        let symbol = self.registry.get(member);
        symbol.is_static()
            && symbol.method_kind() == Some(MethodKind::Ordinary)
            && symbol.as_method().is_some_and(|method| method.is_extension)
            && self.is_visible(member)
    }

    /// Returns the type an extension method extends
    ///
    /// A generic `this T` parameter extends the class its constraint names, following
    /// constraints on other type parameters.
    #[must_use]
    pub fn extended_type(&self, method: SymbolId) -> Option<SymbolId> {
        let first = *self.registry.get(method).parameters().first()?;
        let ty = &self.registry.get(first).as_parameter()?.ty;
        self.constraint_class(ty, 0)
    }

    fn constraint_class(&self, ty: &TypeRef, depth: usize) -> Option<SymbolId> {
        match ty {
            TypeRef::Named { definition, .. } => Some(*definition),
            TypeRef::TypeParameter(parameter) if depth < 16 => self
                .registry
                .get(*parameter)
                .as_type_parameter()?
                .constraint_types
                .iter()
                .find_map(|constraint| match constraint {
                    TypeRef::Named { definition, .. }
                        if self.registry.get(*definition).is_type_kind(TypeKind::Class) =>
                    {
                        Some(*definition)
                    }
                    TypeRef::TypeParameter(_) => self.constraint_class(constraint, depth + 1),
                    _ => None,
                }),
            _ => None,
        }
    }

    /// Resolves a documentation comment ID (`T:Acme.Widget`) to the first symbol that has it
    #[must_use]
    pub fn get_first_symbol_for_declaration_id(&self, id: &str) -> Option<SymbolId> {
        let ids = self.declaration_ids.get_or_init(|| {
            let mut ids = HashMap::new();
            for symbol in self.registry.iter() {
                if let Some(comment_id) = documentation_comment_id(self.registry, symbol.id) {
                    ids.entry(comment_id).or_insert(symbol.id);
                }
            }
            ids
        });
        ids.get(id).copied()
    }

    /// Source code locations of `symbol`, empty without a source reference provider
    #[must_use]
    pub fn source_references(&self, symbol: SymbolId) -> &[SourceReference] {
        match (&self.source_references, documentation_comment_id(self.registry, symbol)) {
            (Some(provider), Some(id)) => provider.get_source_references(&id),
            _ => &[],
        }
    }

    /// Returns the documentation comment of `symbol`
    ///
    /// The comment is looked up in the XML documentation file next to the assembly (in the
    /// `culture` subdirectory first), then in the comment attached to the symbol. A comment that
    /// is nothing but `<inheritdoc/>` is replaced by the comment of the overridden member, the
    /// base constructor with the same parameter types, the implemented interface member, or
    /// the base type and implemented interfaces of a type. Symbols without any comment are
    /// looked up in the additional XML files.
    ///
    /// # Errors
    /// Returns [`crate::Error::Xml`] or [`crate::Error::Malformed`] when a comment or an XML
    /// file is malformed, and [`crate::Error::FileError`] when an XML file cannot be read.
    pub fn get_xml_documentation(
        &self,
        symbol: SymbolId,
        culture: Option<&str>,
    ) -> Result<Option<Arc<SymbolXmlDocumentation>>> {
        let key = (symbol, culture.map(str::to_string));
        if let Some(cached) = self.comments.get(&key).map(|entry| entry.clone()) {
            return Ok(cached);
        }

        let mut visited = HashSet::new();
        let documentation = self.resolve(symbol, culture, &mut visited)?;
        self.comments.insert(key, documentation.clone());
        Ok(documentation)
    }

    fn resolve(
        &self,
        symbol: SymbolId,
        culture: Option<&str>,
        visited: &mut HashSet<SymbolId>,
    ) -> Result<Option<Arc<SymbolXmlDocumentation>>> {
        if !visited.insert(symbol) {
            return Ok(None);
        }

        let own = self.own_documentation(symbol, culture)?;
        if let Some(documentation) = &own {
            if !documentation.is_inheritdoc_only() {
                return Ok(own);
            }
            for candidate in self.inheritance_candidates(symbol) {
                if let Some(inherited) = self.resolve(candidate, culture, visited)? {
                    if !inherited.is_inheritdoc_only() {
                        return Ok(Some(Arc::new(inherited.with_symbol(symbol))));
                    }
                }
            }
        }

        if let Some(additional) = self.additional_documentation(symbol)? {
            return Ok(Some(additional));
        }

        Ok(own)
    }

    fn own_documentation(
        &self,
        symbol: SymbolId,
        culture: Option<&str>,
    ) -> Result<Option<Arc<SymbolXmlDocumentation>>> {
        let Some(assembly) = self
            .registry
            .containing_assembly(symbol)
            .filter(|assembly| self.assemblies.contains(assembly))
        else {
            return Ok(None);
        };

        let comment_id = documentation_comment_id(self.registry, symbol);
        if let (Some(file), Some(id)) = (self.assembly_documentation(assembly, culture)?, &comment_id) {
            if let Some(documentation) = file.get_xml_documentation(symbol, id) {
                return Ok(Some(Arc::new(documentation)));
            }
        }

        let Some(text) = self
            .registry
            .get(symbol)
            .documentation
            .as_deref()
            .filter(|text| !text.trim().is_empty())
        else {
            return Ok(None);
        };

        let element = XmlElement::parse_comment(&xml::unindent(text)).map_err(|error| {
            let origin = comment_id.unwrap_or_else(|| self.registry.get(symbol).name.clone());
            error.at(Path::new(&origin))
        })?;
        Ok(Some(Arc::new(SymbolXmlDocumentation::new(symbol, Arc::new(element)))))
    }

    fn assembly_documentation(
        &self,
        assembly: SymbolId,
        culture: Option<&str>,
    ) -> Result<Option<Arc<XmlDocumentation>>> {
        let key = (assembly, culture.map(str::to_string));
        if let Some(cached) = self.assembly_xml.get(&key).map(|entry| entry.clone()) {
            return Ok(cached);
        }

        let documentation = match self.assembly_xml_path(assembly, culture) {
            Some(path) => Some(Arc::new(XmlDocumentation::load(&path)?)),
            None => {
                log::debug!(
                    "no XML documentation file for assembly '{}'",
                    self.registry.get(assembly).name
                );
                None
            }
        };

        self.assembly_xml.insert(key, documentation.clone());
        Ok(documentation)
    }

    fn assembly_xml_path(&self, assembly: SymbolId, culture: Option<&str>) -> Option<PathBuf> {
        let location = self.registry.get(assembly).as_assembly()?.location.as_ref()?;

        if let (Some(culture), Some(directory), Some(stem)) =
            (culture, location.parent(), location.file_stem())
        {
            let localized = directory
                .join(culture)
                .join(Path::new(stem).with_extension("xml"));
            if localized.is_file() {
                return Some(localized);
            }
        }

        let neutral = location.with_extension("xml");
        neutral.is_file().then_some(neutral)
    }

    fn additional_documentation(&self, symbol: SymbolId) -> Result<Option<Arc<SymbolXmlDocumentation>>> {
        if self.additional_xml_paths.is_empty() {
            return Ok(None);
        }
        let Some(comment_id) = documentation_comment_id(self.registry, symbol) else {
            return Ok(None);
        };

        if self.additional_xml.get().is_none() {
            let loaded = self
                .additional_xml_paths
                .iter()
                .map(XmlDocumentation::load)
                .collect::<Result<Vec<_>>>()?;
            let _ = self.additional_xml.set(loaded);
        }

        Ok(self
            .additional_xml
            .get()
            .into_iter()
            .flatten()
            .find_map(|file| file.get_xml_documentation(symbol, &comment_id))
            .map(Arc::new))
    }

    fn inheritance_candidates(&self, symbol: SymbolId) -> Vec<SymbolId> {
        let registry = self.registry;
        let data = registry.get(symbol);
        let mut candidates = Vec::new();

        if data.kind() == SymbolKind::NamedType {
            candidates.extend(registry.base_type(symbol));
            candidates.extend(
                registry
                    .all_interfaces(symbol)
                    .iter()
                    .filter_map(TypeRef::definition),
            );
            return candidates;
        }

        candidates.extend(data.overridden());

        if data.method_kind() == Some(MethodKind::Constructor) {
            let parameter_types = self.parameter_types(symbol);
            if let Some(base) = registry.containing_type(symbol).and_then(|ty| registry.base_type(ty)) {
                candidates.extend(registry.members(base).iter().copied().filter(|member| {
                    registry.get(*member).method_kind() == Some(MethodKind::Constructor)
                        && self.parameter_types(*member) == parameter_types
                }));
            }
        }

        candidates.extend(data.explicit_interface_implementations().iter().copied());

        if let Some(ty) = registry.containing_type(symbol) {
            let kind = data.kind();
            let parameter_types: Vec<TypeRef> = self.parameter_types(symbol).into_iter().cloned().collect();
            let method_arguments: Vec<TypeRef> = data
                .type_parameters()
                .iter()
                .map(|parameter| TypeRef::TypeParameter(*parameter))
                .collect();

            for interface in registry.all_interfaces(ty) {
                let Some(definition) = interface.definition() else {
                    continue;
                };
                let interface_parameters = registry.get(definition).type_parameters();
                candidates.extend(registry.members(definition).iter().copied().filter(|member| {
                    let candidate = registry.get(*member);
                    if candidate.kind() != kind
                        || candidate.name != data.name
                        || candidate.type_parameters().len() != method_arguments.len()
                    {
                        return false;
                    }

                    let candidate_types = self.parameter_types(*member);
                    candidate_types.len() == parameter_types.len()
                        && candidate_types.iter().zip(&parameter_types).all(|(candidate_type, own)| {
                            let substituted = registry.substitute(
                                candidate_type,
                                interface_parameters,
                                interface.type_arguments(),
                            );
                            let substituted = registry.substitute(
                                &substituted,
                                candidate.type_parameters(),
                                &method_arguments,
                            );
                            &substituted == own
                        })
                }));
            }
        }

        candidates
    }

    fn parameter_types(&self, method: SymbolId) -> Vec<&TypeRef> {
        self.registry
            .parameters(method)
            .iter()
            .filter_map(|parameter| self.registry.get(*parameter).as_parameter())
            .map(|parameter| &parameter.ty)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        symbols::{MethodBuilder, Modifiers, SpecialType, TypeBuilder},
        test::{factories::fixture, write_file},
    };

    fn model(registry: &SymbolRegistry, assembly: SymbolId) -> DocumentationModel<'_> {
        DocumentationModel::new(registry, [assembly], SymbolFilterOptions::default(), Vec::<PathBuf>::new())
    }

    #[test]
    fn types_are_restartable() {
        let fixture = fixture();
        let model = model(&fixture.registry, fixture.assembly);

        let first: Vec<SymbolId> = model.types().collect();
        let second: Vec<SymbolId> = model.types().collect();
        assert_eq!(first, second);
        assert_eq!(first.first(), Some(&fixture.color));
        assert!(first.contains(&fixture.collection));
        assert_eq!(model.namespaces(), vec![fixture.namespace]);
        assert_eq!(model.types_in(fixture.namespace).len(), first.len());
    }

    #[test]
    fn derived_types() {
        let fixture = fixture();
        let model = model(&fixture.registry, fixture.assembly);

        assert_eq!(model.get_derived_types(fixture.reader), vec![fixture.repository]);
        assert!(model.get_derived_types(fixture.color).is_empty());
        assert!(model.is_external(fixture.registry.special_type(SpecialType::Object)));
        assert!(!model.is_external(fixture.widget));
    }

    #[test]
    fn inherited_comment() {
        let fixture = fixture();
        let model = model(&fixture.registry, fixture.assembly);

        let own = model.get_xml_documentation(fixture.read, None).unwrap().unwrap();
        assert_eq!(own.summary().unwrap().text(), "Reads the next value.");

        // `Save(T, bool)` only says <inheritdoc/> and has nothing to inherit from
        let unresolved = model.get_xml_documentation(fixture.save_overwrite, None).unwrap().unwrap();
        assert!(unresolved.is_inheritdoc_only());

        assert!(model.get_xml_documentation(fixture.widget, None).unwrap().is_none());
        assert!(model.get_xml_documentation(fixture.widget, None).unwrap().is_none());
    }

    #[test]
    fn inheritdoc_follows_implemented_member() {
        let mut fixture = fixture();
        let registry = &mut fixture.registry;
        let reader_t = TypeRef::TypeParameter(registry.get(fixture.reader).type_parameters()[0]);
        let text_reader = TypeBuilder::class("TextReader")
            .public()
            .implements(TypeRef::generic(fixture.reader, vec![reader_t.clone()]))
            .build(registry, fixture.namespace)
            .unwrap();
        let read = MethodBuilder::new("Read")
            .public()
            .returns(reader_t)
            .documentation("<inheritdoc/>")
            .build(registry, text_reader)
            .unwrap();

        let model = model(&fixture.registry, fixture.assembly);
        let documentation = model.get_xml_documentation(read, None).unwrap().unwrap();
        assert_eq!(documentation.symbol(), read);
        assert_eq!(documentation.returns().unwrap().text(), "The value.");
    }

    #[test]
    fn inheritdoc_matches_overload_by_parameter_types() {
        let mut fixture = fixture();
        let registry = &mut fixture.registry;
        let int = registry.special(SpecialType::Int32);
        let string = registry.special(SpecialType::String);

        let formatter = TypeBuilder::interface("IFormatter")
            .public()
            .build(registry, fixture.namespace)
            .unwrap();
        MethodBuilder::new("Format")
            .parameter("value", int)
            .documentation("<summary>Formats a number.</summary>")
            .build(registry, formatter)
            .unwrap();
        MethodBuilder::new("Format")
            .parameter("value", string.clone())
            .documentation("<summary>Formats a text.</summary>")
            .build(registry, formatter)
            .unwrap();

        let plain = TypeBuilder::class("PlainFormatter")
            .public()
            .implements(TypeRef::named(formatter))
            .build(registry, fixture.namespace)
            .unwrap();
        let format = MethodBuilder::new("Format")
            .public()
            .parameter("value", string)
            .documentation("<inheritdoc/>")
            .build(registry, plain)
            .unwrap();

        let model = model(&fixture.registry, fixture.assembly);
        let documentation = model.get_xml_documentation(format, None).unwrap().unwrap();
        assert_eq!(documentation.summary().unwrap().text(), "Formats a text.");
    }

    #[test]
    fn assembly_file_takes_precedence() {
        let mut fixture = fixture();
        let directory = tempfile::tempdir().unwrap();
        write_file(
            directory.path(),
            "Acme.xml",
            r#"<doc><assembly><name>Acme</name></assembly><members>
                 <member name="T:Acme.Data.Widget"><summary>Neutral.</summary></member>
               </members></doc>"#,
        );
        write_file(
            directory.path(),
            "de/Acme.xml",
            r#"<doc><members><member name="T:Acme.Data.Widget"><summary>Lokal.</summary></member></members></doc>"#,
        );
        fixture
            .registry
            .set_assembly_location(fixture.assembly, directory.path().join("Acme.dll"))
            .unwrap();

        let model = model(&fixture.registry, fixture.assembly);
        let neutral = model.get_xml_documentation(fixture.widget, None).unwrap().unwrap();
        assert_eq!(neutral.summary().unwrap().text(), "Neutral.");
        let localized = model.get_xml_documentation(fixture.widget, Some("de")).unwrap().unwrap();
        assert_eq!(localized.summary().unwrap().text(), "Lokal.");
        let fallback = model.get_xml_documentation(fixture.widget, Some("fr")).unwrap().unwrap();
        assert_eq!(fallback.summary().unwrap().text(), "Neutral.");
    }

    #[test]
    fn additional_files_and_errors() {
        let fixture = fixture();
        let directory = tempfile::tempdir().unwrap();
        write_file(
            directory.path(),
            "extra.xml",
            r#"<doc><members><member name="T:Acme.Data.Widget"><summary>Extra.</summary></member></members></doc>"#,
        );
        write_file(directory.path(), "broken.xml", "<doc><members>");

        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            [directory.path().join("extra.xml")],
        );
        let extra = model.get_xml_documentation(fixture.widget, None).unwrap().unwrap();
        assert_eq!(extra.summary().unwrap().text(), "Extra.");

        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            [directory.path().join("broken.xml")],
        );
        assert!(model.get_xml_documentation(fixture.widget, None).is_err());
    }

    #[test]
    fn extension_methods() {
        let mut fixture = fixture();
        let registry = &mut fixture.registry;
        let extensions = TypeBuilder::class("WidgetExtensions")
            .public()
            .modifiers(Modifiers::STATIC | Modifiers::ABSTRACT | Modifiers::SEALED)
            .build(registry, fixture.namespace)
            .unwrap();
        let string = registry.special(SpecialType::String);
        let shout = MethodBuilder::new("Shout")
            .public()
            .extension()
            .parameter("text", string)
            .build(registry, extensions)
            .unwrap();
        let model = model(&fixture.registry, fixture.assembly);
        let string_type = fixture.registry.special_type(SpecialType::String);
        assert_eq!(model.get_extension_methods(), vec![shout]);
        assert_eq!(model.get_extension_methods_for(string_type), vec![shout]);
        assert_eq!(model.get_extended_external_types(), vec![string_type]);
        assert_eq!(
            model.get_first_symbol_for_declaration_id("T:Acme.Data.WidgetExtensions"),
            Some(extensions)
        );
    }
}
