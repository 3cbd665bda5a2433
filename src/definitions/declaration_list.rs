//! Brace-style declaration lists.
//!
//! The output reads like a C# source file stripped of bodies: `namespace N { ... }` blocks,
//! type declarations with their members ending in `;`, enum fields ending in `,`, nested types
//! inside their container. Only publicly visible API is listed.

use std::collections::{HashMap, HashSet};

use crate::{
    comparers::{member_rank, SymbolComparer, SymbolDefinitionComparer},
    definitions::{
        format::display_options, DefinitionParts, DefinitionWrapping,
    },
    display::{Declaration, DefinitionDisplayOptions, DisplayFormat, DisplayPartKind, DisplayParts, TypeQualification},
    filter::{MetadataName, SymbolFilterOptions, Visibility},
    options::DocumentationDepth,
    symbols::{MethodKind, SymbolId, SymbolKind, SymbolRegistry, TypeKind},
};

/// Settings of a [`DeclarationListBuilder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationListOptions {
    ignored_names: Vec<MetadataName>,
    indent_chars: String,
    new_line_before_open_brace: bool,
    empty_line_between_members: bool,
    nest_namespaces: bool,
    parts: DefinitionParts,
    wrapping: DefinitionWrapping,
    depth: DocumentationDepth,
    omit_ienumerable: bool,
}

impl Default for DeclarationListOptions {
    fn default() -> Self {
        DeclarationListOptions {
            ignored_names: Vec::new(),
            indent_chars: "    ".to_string(),
            new_line_before_open_brace: true,
            empty_line_between_members: false,
            nest_namespaces: false,
            parts: DefinitionParts::all(),
            wrapping: DefinitionWrapping::empty(),
            depth: DocumentationDepth::Member,
            omit_ienumerable: true,
        }
    }
}

impl DeclarationListOptions {
    /// Leaves out types and namespaces with these dotted metadata names
    #[must_use]
    pub fn with_ignored_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored_names = names
            .into_iter()
            .map(|name| MetadataName::new(name.as_ref()))
            .filter(|name| !name.as_str().is_empty())
            .collect();
        self
    }

    /// Sets the unit of indentation
    #[must_use]
    pub fn with_indent_chars(mut self, indent_chars: impl Into<String>) -> Self {
        self.indent_chars = indent_chars.into();
        self
    }

    /// Puts `{` on its own line
    #[must_use]
    pub fn with_new_line_before_open_brace(mut self, value: bool) -> Self {
        self.new_line_before_open_brace = value;
        self
    }

    /// Separates every two members by an empty line
    #[must_use]
    pub fn with_empty_line_between_members(mut self, value: bool) -> Self {
        self.empty_line_between_members = value;
        self
    }

    /// Nests `namespace` blocks by name segment
    #[must_use]
    pub fn with_nest_namespaces(mut self, value: bool) -> Self {
        self.nest_namespaces = value;
        self
    }

    /// Sets the written parts
    #[must_use]
    pub fn with_parts(mut self, parts: DefinitionParts) -> Self {
        self.parts = parts;
        self
    }

    /// Sets the wrapped constructs
    #[must_use]
    pub fn with_wrapping(mut self, wrapping: DefinitionWrapping) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Stops at namespaces, types or members
    #[must_use]
    pub fn with_depth(mut self, depth: DocumentationDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Drops `IEnumerable` from base lists that contain `IEnumerable<T>`
    #[must_use]
    pub fn with_omit_ienumerable(mut self, value: bool) -> Self {
        self.omit_ienumerable = value;
        self
    }

    /// The ignored names
    #[must_use]
    pub fn ignored_names(&self) -> &[MetadataName] {
        &self.ignored_names
    }

    /// The unit of indentation
    #[must_use]
    pub fn indent_chars(&self) -> &str {
        &self.indent_chars
    }

    /// Whether `{` goes on its own line
    #[must_use]
    pub fn new_line_before_open_brace(&self) -> bool {
        self.new_line_before_open_brace
    }

    /// Whether every two members are separated by an empty line
    #[must_use]
    pub fn empty_line_between_members(&self) -> bool {
        self.empty_line_between_members
    }

    /// Whether namespace blocks are nested
    #[must_use]
    pub fn nest_namespaces(&self) -> bool {
        self.nest_namespaces
    }

    /// The written parts
    #[must_use]
    pub fn parts(&self) -> DefinitionParts {
        self.parts
    }

    /// The listing depth
    #[must_use]
    pub fn depth(&self) -> DocumentationDepth {
        self.depth
    }

    fn display_options(&self) -> DefinitionDisplayOptions {
        display_options(self.parts, self.wrapping, self.omit_ienumerable, true)
    }
}

/// Accumulates a declaration list
///
/// ```rust
/// use cildoc::definitions::{DeclarationListBuilder, DeclarationListOptions};
/// use cildoc::symbols::{SymbolRegistry, TypeBuilder};
///
/// let mut registry = SymbolRegistry::new();
/// let assembly = registry.add_assembly("Acme", "1.0.0.0");
/// let namespace = registry.namespace(assembly, "Acme")?;
/// TypeBuilder::class("Widget").public().build(&mut registry, namespace)?;
///
/// let mut builder = DeclarationListBuilder::new(&registry, DeclarationListOptions::default());
/// builder.append_assemblies(&[assembly]);
///
/// assert_eq!(
///     builder.as_str(),
///     "namespace Acme\n{\n    public class Widget\n    {\n    }\n}\n"
/// );
/// # Ok::<(), cildoc::Error>(())
/// ```
pub struct DeclarationListBuilder<'r> {
    registry: &'r SymbolRegistry,
    options: DeclarationListOptions,
    filter: SymbolFilterOptions,
    comparer: SymbolDefinitionComparer,
    buffer: String,
    level: usize,
    pending_indentation: bool,
    current_namespace: String,
    namespaces: HashSet<String>,
}

impl<'r> DeclarationListBuilder<'r> {
    /// Creates an empty list over `registry`
    #[must_use]
    pub fn new(registry: &'r SymbolRegistry, options: DeclarationListOptions) -> Self {
        let filter = SymbolFilterOptions::default()
            .with_visibility(Visibility::Public)
            .with_ignored_names(options.ignored_names.iter().map(MetadataName::as_str));

        DeclarationListBuilder {
            registry,
            options,
            filter,
            comparer: SymbolDefinitionComparer::system_first(),
            buffer: String::new(),
            level: 0,
            pending_indentation: true,
            current_namespace: String::new(),
            namespaces: HashSet::new(),
        }
    }

    /// The text written so far
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns the text and consumes the builder
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Namespaces of types referenced from outside their own namespace, sorted
    ///
    /// These are the namespaces a `using` block above the list would have to import.
    #[must_use]
    pub fn namespaces(&self) -> Vec<String> {
        let mut namespaces: Vec<String> = self.namespaces.iter().cloned().collect();
        namespaces.sort_by(|x, y| self.comparer.namespaces.compare_names(x, y));
        namespaces
    }

    /// Appends the assembly attributes and the public types of `assemblies`
    pub fn append_assemblies(&mut self, assemblies: &[SymbolId]) {
        let mut assemblies = assemblies.to_vec();
        self.comparer.sort(self.registry, &mut assemblies);

        if self.options.parts.contains(DefinitionParts::ASSEMBLY_ATTRIBUTES) {
            for assembly in &assemblies {
                self.append_assembly_attributes(*assembly);
            }
        }

        let registry = self.registry;
        let mut types = Vec::new();
        for assembly in &assemblies {
            let Some(global) = registry.global_namespace(*assembly) else {
                continue;
            };
            let mut stack = vec![global];
            while let Some(current) = stack.pop() {
                for member in registry.members(current) {
                    match registry.get(*member).kind() {
                        SymbolKind::Namespace => stack.push(*member),
                        SymbolKind::NamedType => types.push(*member),
                        _ => {}
                    }
                }
            }
        }
        self.append_types(&types);
    }

    /// Appends `// <assembly>` followed by one `[assembly: ...]` line per shown attribute
    ///
    /// Nothing is written for an assembly without shown attributes.
    pub fn append_assembly_attributes(&mut self, assembly: SymbolId) {
        let mut declaration = self.declaration(assembly, &DisplayFormat::FULL_DECLARATION);
        let attributes = std::mem::take(&mut declaration.attributes);
        if attributes.is_empty() {
            return;
        }

        let identity = declaration.render(self.options.display_options(), "").parts;
        self.write(&format!("// {identity}"));
        self.write_line();
        for attribute in &attributes {
            self.write("[assembly: ");
            self.append_parts(attribute);
            self.write("]");
            self.write_line();
        }
        self.write_line();
    }

    /// Appends the public top-level types among `types`, grouped into namespace blocks
    pub fn append_types(&mut self, types: &[SymbolId]) {
        let registry = self.registry;
        let mut by_namespace: HashMap<String, Vec<SymbolId>> = HashMap::new();
        for ty in types.iter().copied() {
            if registry.containing_type(ty).is_none() && self.filter.is_match(registry, ty) {
                by_namespace
                    .entry(registry.containing_namespace_name(ty))
                    .or_default()
                    .push(ty);
            }
        }
        for types in by_namespace.values_mut() {
            types.sort_by(|x, y| self.comparer.types.compare(registry, *x, *y));
            types.dedup();
        }

        let mut names: Vec<String> = by_namespace.keys().cloned().collect();
        names.sort_by(|x, y| self.comparer.namespaces.compare_names(x, y));

        if let Some(global) = by_namespace.remove("") {
            self.current_namespace.clear();
            self.append_type_block(&global);
        }

        if self.options.nest_namespaces {
            self.append_nested_namespaces("", &names, &mut by_namespace);
        } else {
            for name in names.iter().filter(|name| !name.is_empty()) {
                let types = by_namespace.remove(name).unwrap_or_default();
                self.separate_block();
                self.write(&format!("namespace {name}"));
                self.open_brace();
                self.current_namespace = name.clone();
                self.append_type_block(&types);
                self.close_brace();
            }
        }
        self.current_namespace.clear();
    }

    fn append_nested_namespaces(
        &mut self,
        parent: &str,
        names: &[String],
        by_namespace: &mut HashMap<String, Vec<SymbolId>>,
    ) {
        // Child segments of `parent`, each leading to at least one listed namespace
        let mut children: Vec<String> = Vec::new();
        for name in names.iter().filter(|name| !name.is_empty()) {
            let rest = if parent.is_empty() {
                Some(name.as_str())
            } else {
                name.strip_prefix(parent).and_then(|rest| rest.strip_prefix('.'))
            };
            if let Some(rest) = rest {
                let segment = rest.split('.').next().unwrap_or(rest);
                let child = if parent.is_empty() {
                    segment.to_string()
                } else {
                    format!("{parent}.{segment}")
                };
                if !children.contains(&child) {
                    children.push(child);
                }
            }
        }

        for child in children {
            self.separate_block();
            if !parent.is_empty() {
                self.write(&format!("// {child}"));
                self.write_line();
            }
            let segment = child.rsplit('.').next().unwrap_or(&child);
            self.write(&format!("namespace {segment}"));
            self.open_brace();

            self.current_namespace = child.clone();
            let types = by_namespace.remove(&child).unwrap_or_default();
            self.append_type_block(&types);
            self.append_nested_namespaces(&child, names, by_namespace);

            self.close_brace();
        }
    }

    fn append_type_block(&mut self, types: &[SymbolId]) {
        if self.options.depth == DocumentationDepth::Namespace {
            return;
        }
        for ty in types {
            self.separate_block();
            self.append_type(*ty);
        }
    }

    fn append_type(&mut self, ty: SymbolId) {
        let registry = self.registry;
        let format = DisplayFormat::FULL_DECLARATION.with_qualification(TypeQualification::NameOnly);
        let definition = self.definition(ty, &format);
        self.append_parts(&definition);

        if registry.get(ty).is_type_kind(TypeKind::Delegate) {
            self.write_line();
            return;
        }

        self.open_brace();
        if self.options.depth == DocumentationDepth::Member {
            let has_members = if registry.get(ty).is_type_kind(TypeKind::Enum) {
                self.append_enum_fields(ty)
            } else {
                self.append_members(ty)
            };

            let mut nested: Vec<SymbolId> = registry
                .members(ty)
                .iter()
                .copied()
                .filter(|member| registry.get(*member).kind() == SymbolKind::NamedType)
                .filter(|member| self.filter.is_match(registry, *member))
                .collect();
            nested.sort_by(|x, y| self.comparer.types.compare(registry, *x, *y));
            for (index, nested) in nested.into_iter().enumerate() {
                if index > 0 || has_members {
                    self.write_line();
                }
                self.append_type(nested);
            }
        }
        self.close_brace();
    }

    fn append_members(&mut self, ty: SymbolId) -> bool {
        let registry = self.registry;
        let mut members: Vec<SymbolId> = registry
            .members(ty)
            .iter()
            .copied()
            .filter(|member| self.is_visible_member(*member))
            .collect();
        members.sort_by(|x, y| self.comparer.members.compare(registry, *x, *y));

        let mut previous_rank = None;
        for member in &members {
            let rank = member_rank(registry, *member);
            if previous_rank.is_some_and(|previous| previous != rank || self.options.empty_line_between_members) {
                self.write_line();
            }
            previous_rank = Some(rank);

            let definition = self.definition(*member, &DisplayFormat::FULL_DECLARATION);
            self.append_parts(&definition);
            self.write_line();
        }
        !members.is_empty()
    }

    fn append_enum_fields(&mut self, ty: SymbolId) -> bool {
        let registry = self.registry;
        let fields: Vec<SymbolId> = registry
            .members(ty)
            .iter()
            .copied()
            .filter(|member| registry.get(*member).kind() == SymbolKind::Field)
            .filter(|member| self.filter.is_match(registry, *member))
            .collect();

        for (index, field) in fields.iter().enumerate() {
            if index > 0 && self.options.empty_line_between_members {
                self.write_line();
            }
            let definition = self.definition(*field, &DisplayFormat::FULL_DECLARATION);
            self.append_parts(&definition);
            if self.options.parts.contains(DefinitionParts::TRAILING_COMMA) {
                self.write(",");
            }
            self.write_line();
        }
        !fields.is_empty()
    }

    /// Public members a caller can use directly
    ///
    /// Explicit implementations, accessors, finalizers, static constructors and the implicit
    /// parameterless constructor of a struct are not part of a declaration list.
    fn is_visible_member(&self, member: SymbolId) -> bool {
        let registry = self.registry;
        let symbol = registry.get(member);
        match symbol.kind() {
            SymbolKind::NamedType => return false,
            SymbolKind::Method => match symbol.method_kind() {
                Some(MethodKind::Constructor) => {
                    let in_struct = registry
                        .containing_type(member)
                        .is_some_and(|ty| registry.get(ty).is_type_kind(TypeKind::Struct));
                    if in_struct && registry.parameters(member).is_empty() {
                        return false;
                    }
                }
                Some(MethodKind::Ordinary | MethodKind::UserDefinedOperator | MethodKind::Conversion) => {}
                _ => return false,
            },
            _ => {}
        }
        self.filter.is_match(registry, member)
    }

    fn declaration(&self, symbol: SymbolId, format: &DisplayFormat) -> Declaration {
        let registry = self.registry;
        let filter = &self.filter;
        let mut declaration = Declaration::build(
            registry,
            symbol,
            format,
            self.options.display_options(),
            |owner, attribute| filter.is_attribute_match(registry, owner, attribute),
        );
        if !self.options.parts.contains(DefinitionParts::BASE_TYPE) {
            declaration.base_type = None;
        }
        if !self.options.parts.contains(DefinitionParts::BASE_INTERFACES) {
            declaration.interfaces.clear();
        }
        if !self.options.parts.contains(DefinitionParts::CONSTRAINTS) {
            declaration.constraints.clear();
        }
        declaration
    }

    fn definition(&self, symbol: SymbolId, format: &DisplayFormat) -> DisplayParts {
        self.declaration(symbol, format)
            .render(self.options.display_options(), &self.options.indent_chars)
            .parts
    }

    /// Writes rendered parts, indenting continuation lines and recording referenced namespaces
    fn append_parts(&mut self, parts: &DisplayParts) {
        for part in parts.iter() {
            match part.kind {
                DisplayPartKind::LineBreak => self.write_line(),
                _ => self.write(&part.text),
            }
        }

        let registry = self.registry;
        for ty in parts.referenced_types(registry) {
            let namespace = registry.containing_namespace_name(ty);
            if !namespace.is_empty() && !self.is_in_scope(&namespace) {
                self.namespaces.insert(namespace);
            }
        }
    }

    fn is_in_scope(&self, namespace: &str) -> bool {
        let current = self.current_namespace.as_str();
        current == namespace
            || (current.len() > namespace.len()
                && current.starts_with(namespace)
                && current.as_bytes()[namespace.len()] == b'.')
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.pending_indentation {
            for _ in 0..self.level {
                self.buffer.push_str(&self.options.indent_chars);
            }
            self.pending_indentation = false;
        }
        self.buffer.push_str(text);
    }

    fn write_line(&mut self) {
        self.buffer.push('\n');
        self.pending_indentation = true;
    }

    /// Starts a namespace or type after an empty line, unless it opens its block
    fn separate_block(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with("{\n") && !self.buffer.ends_with("\n\n") {
            self.write_line();
        }
    }

    fn open_brace(&mut self) {
        if self.options.new_line_before_open_brace {
            self.write_line();
            self.write("{");
        } else {
            self.write(" {");
        }
        self.write_line();
        self.level += 1;
    }

    fn close_brace(&mut self) {
        assert!(self.level > 0, "unbalanced braces in declaration list");
        self.level -= 1;
        self.write("}");
        self.write_line();
    }
}

/// Builds the declaration list of the public API of `assemblies`
#[must_use]
pub fn declaration_list(registry: &SymbolRegistry, assemblies: &[SymbolId], options: &DeclarationListOptions) -> String {
    let mut builder = DeclarationListBuilder::new(registry, options.clone());
    builder.append_assemblies(assemblies);
    builder.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        symbols::{AttributeData, FieldBuilder, MethodBuilder, SpecialType, TypeBuilder},
        test::factories::fixture,
    };
    use pretty_assertions::assert_eq;

    struct Sample {
        registry: SymbolRegistry,
        assembly: SymbolId,
    }

    fn sample() -> Sample {
        let mut registry = SymbolRegistry::new();
        let assembly = registry.add_assembly("Acme", "1.0.0.0");
        let acme = registry.namespace(assembly, "Acme").unwrap();
        let data = registry.namespace(assembly, "Acme.Data").unwrap();
        let int = registry.special(SpecialType::Int32);

        let widget = TypeBuilder::class("Widget").public().build(&mut registry, acme).unwrap();
        FieldBuilder::new("Size", int)
            .public()
            .build(&mut registry, widget)
            .unwrap();
        MethodBuilder::new("Run").public().build(&mut registry, widget).unwrap();
        MethodBuilder::new("Reset").public().build(&mut registry, widget).unwrap();

        let point = TypeBuilder::structure("Point").public().build(&mut registry, acme).unwrap();
        MethodBuilder::constructor().public().build(&mut registry, point).unwrap();

        TypeBuilder::class("Store").public().build(&mut registry, data).unwrap();
        TypeBuilder::class("Hidden").build(&mut registry, data).unwrap();

        Sample { registry, assembly }
    }

    #[test]
    fn namespace_blocks() {
        let sample = sample();
        let text = declaration_list(&sample.registry, &[sample.assembly], &DeclarationListOptions::default());

        assert_eq!(
            text,
            "namespace Acme\n\
             {\n\
             \x20   public class Widget\n\
             \x20   {\n\
             \x20       public int Size;\n\
             \n\
             \x20       public void Reset();\n\
             \x20       public void Run();\n\
             \x20   }\n\
             \n\
             \x20   public struct Point\n\
             \x20   {\n\
             \x20   }\n\
             }\n\
             \n\
             namespace Acme.Data\n\
             {\n\
             \x20   public class Store\n\
             \x20   {\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn nested_namespaces_and_braces() {
        let sample = sample();
        let options = DeclarationListOptions::default()
            .with_nest_namespaces(true)
            .with_new_line_before_open_brace(false)
            .with_indent_chars("  ")
            .with_depth(DocumentationDepth::Type);
        let text = declaration_list(&sample.registry, &[sample.assembly], &options);

        assert_eq!(
            text,
            "namespace Acme {\n\
             \x20 public class Widget {\n\
             \x20 }\n\
             \n\
             \x20 public struct Point {\n\
             \x20 }\n\
             \n\
             \x20 // Acme.Data\n\
             \x20 namespace Data {\n\
             \x20   public class Store {\n\
             \x20   }\n\
             \x20 }\n\
             }\n"
        );
    }

    #[test]
    fn ignored_names_and_member_spacing() {
        let sample = sample();
        let options = DeclarationListOptions::default()
            .with_ignored_names(["Acme.Data", "Acme.Point"])
            .with_empty_line_between_members(true);
        let text = declaration_list(&sample.registry, &[sample.assembly], &options);

        assert!(!text.contains("Store"));
        assert!(!text.contains("Point"));
        assert!(text.contains("    public void Reset();\n\n        public void Run();\n"));
    }

    #[test]
    fn assembly_attributes_come_first() {
        let mut sample = sample();
        let obsolete = sample.registry.find_type("System.ObsoleteAttribute").unwrap();
        sample
            .registry
            .get_mut(sample.assembly)
            .attributes
            .push(AttributeData::new(obsolete));

        let text = declaration_list(&sample.registry, &[sample.assembly], &DeclarationListOptions::default());
        assert!(text.starts_with(
            "// Acme, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null\n\
             [assembly: System.Obsolete]\n\
             \n\
             namespace Acme\n"
        ));

        let options = DeclarationListOptions::default().with_parts(DefinitionParts::all() - DefinitionParts::ASSEMBLY_ATTRIBUTES);
        let text = declaration_list(&sample.registry, &[sample.assembly], &options);
        assert!(text.starts_with("namespace Acme\n"));
    }

    #[test]
    fn referenced_namespaces() {
        let fixture = fixture();
        let mut builder = DeclarationListBuilder::new(&fixture.registry, DeclarationListOptions::default());
        builder.append_assemblies(&[fixture.assembly]);

        let namespaces = builder.namespaces();
        assert!(namespaces.contains(&"System".to_string()));
        assert!(!namespaces.contains(&"Acme.Data".to_string()));

        let text = builder.into_string();
        assert!(text.contains("        None = 0,\n        Red = 1,\n"));
        assert!(text.contains("    public delegate void Callback(string message);\n"));
        assert!(!text.contains("secret"));
        assert!(!text.contains("IReader<T>.Read"));
    }
}
