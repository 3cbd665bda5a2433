use std::collections::HashMap;

use crate::{
    comparers::{member_rank, SymbolComparer, SymbolDefinitionComparer},
    definitions::{DefinitionListFormat, DefinitionListLayout, DefinitionParts, DefinitionSink},
    display::{symbol_display_parts, Declaration, DisplayFormat, DisplayParts, TypeQualification},
    filter::SymbolGroupFilter,
    model::{DocumentationModel, TypeHierarchy},
    symbols::{SymbolId, SymbolKind, TypeKind},
};

/// A namespace name together with one namespace symbol carrying it
#[derive(Debug, Clone)]
struct NamespaceEntry {
    name: String,
    symbol: SymbolId,
}

/// Walks a documentation model and sends every definition to a [`DefinitionSink`]
///
/// Assemblies come first, ordered by name and version. Without
/// [`DefinitionListFormat::group_by_assembly`] the namespaces of all assemblies follow as one
/// list; with it, each assembly is followed by its own namespaces one level deeper. Types are
/// ordered by kind and name, members by kind, name and signature, `System` namespaces first.
pub struct SymbolDefinitionWriter<'m, 'a, S> {
    model: &'m DocumentationModel<'a>,
    format: &'m DefinitionListFormat,
    comparer: SymbolDefinitionComparer,
    sink: S,
}

impl<'m, 'a, S: DefinitionSink> SymbolDefinitionWriter<'m, 'a, S> {
    /// Creates a writer sending the definitions of `model` to `sink`
    pub fn new(model: &'m DocumentationModel<'a>, format: &'m DefinitionListFormat, sink: S) -> Self {
        SymbolDefinitionWriter {
            model,
            format,
            comparer: SymbolDefinitionComparer::system_first(),
            sink,
        }
    }

    /// The receiving sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the sink and consumes the writer
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Writes the whole list
    pub fn write_document(&mut self) {
        self.sink.write_start_document();

        let mut assemblies = self.model.assemblies().to_vec();
        self.comparer.sort(self.model.registry(), &mut assemblies);

        if !assemblies.is_empty() {
            self.write_assemblies(&assemblies);
        }

        if !self.format.group_by_assembly() {
            if !assemblies.is_empty() {
                self.sink.write_namespace_separator();
            }
            self.write_namespaces(&assemblies);
        }

        self.sink.write_end_document();
    }

    fn write_assemblies(&mut self, assemblies: &[SymbolId]) {
        self.sink.write_start_assemblies();
        for (index, assembly) in assemblies.iter().copied().enumerate() {
            if index > 0 {
                self.sink.write_assembly_separator();
            }
            self.sink.write_start_assembly(assembly);

            let mut declaration = self.declaration(assembly, &DisplayFormat::FULL_DECLARATION);
            let attributes = std::mem::take(&mut declaration.attributes);
            let definition = declaration.render(self.format.display_options(), self.format.indent_chars()).parts;
            self.sink.write_assembly_definition(assembly, &definition);

            if self.format.includes(DefinitionParts::ASSEMBLY_ATTRIBUTES) && !attributes.is_empty() {
                self.sink.increase_depth();
                self.write_attributes(assembly, &attributes);
                self.sink.decrease_depth();
            }

            if self.format.group_by_assembly() {
                self.sink.increase_depth();
                self.write_namespaces(&[assembly]);
                self.sink.decrease_depth();
            }

            self.sink.write_end_assembly(assembly);
        }
        self.sink.write_end_assemblies();
    }

    fn write_attributes(&mut self, symbol: SymbolId, attributes: &[DisplayParts]) {
        self.sink.write_start_attributes(symbol);
        for (index, attribute) in attributes.iter().enumerate() {
            if index > 0 {
                self.sink.write_attribute_separator(symbol);
            }
            self.sink.write_attribute(symbol, attribute);
        }
        self.sink.write_end_attributes(symbol);
    }

    fn write_namespaces(&mut self, assemblies: &[SymbolId]) {
        let types = self.documented_types(assemblies);
        match self.format.layout() {
            DefinitionListLayout::NamespaceList => self.write_namespace_list(&types),
            DefinitionListLayout::NamespaceHierarchy => self.write_namespace_hierarchy(&types),
            DefinitionListLayout::TypeHierarchy => self.write_type_hierarchy(&types),
        }
    }

    /// Documented types of `assemblies`, nested types included
    fn documented_types(&self, assemblies: &[SymbolId]) -> Vec<SymbolId> {
        let registry = self.model.registry();
        self.model
            .types()
            .filter(|ty| {
                registry
                    .containing_assembly(*ty)
                    .is_some_and(|assembly| assemblies.contains(&assembly))
            })
            .collect()
    }

    fn lists_types(&self) -> bool {
        self.model.filter().symbol_groups.intersects(SymbolGroupFilter::TYPE)
    }

    /// Top-level types grouped by the name of their namespace, the global namespace as `""`
    fn types_by_namespace(&self, types: &[SymbolId]) -> (Vec<NamespaceEntry>, HashMap<String, Vec<SymbolId>>) {
        let registry = self.model.registry();
        let mut namespaces = Vec::new();
        let mut members: HashMap<String, Vec<SymbolId>> = HashMap::new();

        for ty in types.iter().copied().filter(|ty| registry.containing_type(*ty).is_none()) {
            let Some(namespace) = registry.containing_namespace(ty) else {
                continue;
            };
            let name = registry.namespace_name(namespace);
            let entry = members.entry(name.clone()).or_default();
            if entry.is_empty() {
                namespaces.push(NamespaceEntry { name, symbol: namespace });
            }
            entry.push(ty);
        }

        namespaces.sort_by(|x, y| self.comparer.namespaces.compare_names(&x.name, &y.name));
        for types in members.values_mut() {
            types.sort_by(|x, y| self.comparer.types.compare(registry, *x, *y));
        }
        (namespaces, members)
    }

    fn write_namespace_list(&mut self, types: &[SymbolId]) {
        let (namespaces, mut members) = self.types_by_namespace(types);

        self.sink.write_start_namespaces();
        for (index, namespace) in namespaces.iter().enumerate() {
            if index > 0 {
                self.sink.write_namespace_separator();
            }
            let types = members.remove(&namespace.name).unwrap_or_default();
            if namespace.name.is_empty() {
                self.write_types(&types);
                continue;
            }

            self.sink.write_start_namespace(namespace.symbol);
            let definition = self.namespace_definition(namespace.symbol, TypeQualification::NameAndContainingTypesAndNamespaces);
            self.sink.write_namespace_definition(namespace.symbol, &definition);
            self.sink.increase_depth();
            self.write_types(&types);
            self.sink.decrease_depth();
            self.sink.write_end_namespace(namespace.symbol);
        }
        self.sink.write_end_namespaces();
    }

    fn write_namespace_hierarchy(&mut self, types: &[SymbolId]) {
        let registry = self.model.registry();
        let (namespaces, mut members) = self.types_by_namespace(types);

        // Every ancestor of a documented namespace is a node of the tree
        let mut nodes: HashMap<String, SymbolId> = HashMap::new();
        for namespace in &namespaces {
            let mut current = Some(namespace.symbol);
            while let Some(id) = current {
                let symbol = registry.get(id);
                if symbol.kind() != SymbolKind::Namespace || symbol.is_global_namespace() {
                    break;
                }
                nodes.entry(registry.namespace_name(id)).or_insert(id);
                current = symbol.containing;
            }
        }

        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        for name in nodes.keys() {
            let parent = name.rsplit_once('.').map_or("", |(parent, _)| parent);
            children.entry(parent).or_default().push(name.as_str());
        }
        for names in children.values_mut() {
            names.sort_by(|x, y| self.comparer.namespaces.compare_names(x, y));
        }

        self.sink.write_start_namespaces();
        let global = members.remove("").unwrap_or_default();
        let has_global = !global.is_empty();
        if has_global {
            self.write_types(&global);
        }

        let roots = children.get("").cloned().unwrap_or_default();
        for (index, name) in roots.into_iter().enumerate() {
            if index > 0 || has_global {
                self.sink.write_namespace_separator();
            }
            self.write_namespace_node(name, &nodes, &children, &mut members);
        }
        self.sink.write_end_namespaces();
    }

    fn write_namespace_node(
        &mut self,
        name: &str,
        nodes: &HashMap<String, SymbolId>,
        children: &HashMap<&str, Vec<&str>>,
        members: &mut HashMap<String, Vec<SymbolId>>,
    ) {
        let Some(&symbol) = nodes.get(name) else {
            return;
        };

        self.sink.write_start_namespace(symbol);
        let definition = self.namespace_definition(symbol, TypeQualification::NameOnly);
        self.sink.write_namespace_definition(symbol, &definition);
        self.sink.increase_depth();

        let types = members.remove(name).unwrap_or_default();
        let has_types = !types.is_empty();
        self.write_types(&types);

        if let Some(nested) = children.get(name) {
            for (index, child) in nested.iter().enumerate() {
                if index > 0 || has_types {
                    self.sink.write_namespace_separator();
                }
                self.write_namespace_node(child, nodes, children, members);
            }
        }

        self.sink.decrease_depth();
        self.sink.write_end_namespace(symbol);
    }

    fn write_type_hierarchy(&mut self, types: &[SymbolId]) {
        if !self.lists_types() {
            return;
        }

        let registry = self.model.registry();
        let hierarchy = TypeHierarchy::create(registry, types, None, &self.comparer.types);

        self.sink.write_start_types();
        self.write_hierarchy_item(&hierarchy, hierarchy.root());

        let interfaces = hierarchy.children(hierarchy.interface_root()).to_vec();
        if !interfaces.is_empty() {
            self.sink.write_type_separator();
        }
        for (index, item) in interfaces.into_iter().enumerate() {
            if index > 0 {
                self.sink.write_type_separator();
            }
            self.write_hierarchy_item(&hierarchy, item);
        }
        self.sink.write_end_types();
    }

    fn write_hierarchy_item(&mut self, hierarchy: &TypeHierarchy, index: usize) {
        let item = hierarchy.item(index);
        let Some(ty) = item.symbol else {
            return;
        };
        let is_external = item.is_external;

        self.sink.write_start_type(ty);
        let definition = self.type_definition(ty);
        self.sink.write_type_definition(ty, &definition);

        self.sink.increase_depth();
        if !is_external {
            self.write_type_content(ty);
        }
        let children = hierarchy.children(index).to_vec();
        for (position, child) in children.into_iter().enumerate() {
            if position > 0 {
                self.sink.write_type_separator();
            }
            self.write_hierarchy_item(hierarchy, child);
        }
        self.sink.decrease_depth();

        self.sink.write_end_type(ty);
    }

    fn write_types(&mut self, types: &[SymbolId]) {
        if types.is_empty() || !self.lists_types() {
            return;
        }

        self.sink.write_start_types();
        for (index, ty) in types.iter().copied().enumerate() {
            if index > 0 {
                self.sink.write_type_separator();
            }
            self.write_type(ty);
        }
        self.sink.write_end_types();
    }

    fn write_type(&mut self, ty: SymbolId) {
        self.sink.write_start_type(ty);
        let definition = self.type_definition(ty);
        self.sink.write_type_definition(ty, &definition);

        self.sink.increase_depth();
        let has_members = self.write_type_content(ty);

        let registry = self.model.registry();
        let mut nested: Vec<SymbolId> = registry
            .members(ty)
            .iter()
            .copied()
            .filter(|member| registry.get(*member).kind() == SymbolKind::NamedType && self.model.is_visible(*member))
            .collect();
        nested.sort_by(|x, y| self.comparer.types.compare(registry, *x, *y));
        if !nested.is_empty() && has_members {
            self.sink.write_type_separator();
        }
        self.write_types(&nested);
        self.sink.decrease_depth();

        self.sink.write_end_type(ty);
    }

    /// Writes the members or enum fields of `ty`, returning `true` if any were written
    fn write_type_content(&mut self, ty: SymbolId) -> bool {
        if self.model.registry().get(ty).is_type_kind(TypeKind::Enum) {
            self.write_enum_members(ty)
        } else {
            self.write_members(ty)
        }
    }

    fn write_members(&mut self, ty: SymbolId) -> bool {
        if !self.model.filter().symbol_groups.intersects(SymbolGroupFilter::MEMBER) {
            return false;
        }

        let registry = self.model.registry();
        let mut members: Vec<SymbolId> = registry
            .members(ty)
            .iter()
            .copied()
            .filter(|member| registry.get(*member).kind() != SymbolKind::NamedType && self.model.is_visible(*member))
            .collect();
        if members.is_empty() {
            return false;
        }
        members.sort_by(|x, y| self.comparer.members.compare(registry, *x, *y));

        self.sink.write_start_members();
        let mut previous_rank = None;
        for (index, member) in members.into_iter().enumerate() {
            let rank = member_rank(registry, member);
            if index > 0
                && (self.format.empty_line_between_members()
                    || (self.format.empty_line_between_member_groups() && previous_rank != Some(rank)))
            {
                self.sink.write_member_separator();
            }
            previous_rank = Some(rank);

            self.sink.write_start_member(member);
            let definition = self.definition(member, &DisplayFormat::FULL_DECLARATION);
            self.sink.write_member_definition(member, &definition);
            self.sink.write_end_member(member);
        }
        self.sink.write_end_members();
        true
    }

    fn write_enum_members(&mut self, ty: SymbolId) -> bool {
        if !self.model.filter().symbol_groups.contains(SymbolGroupFilter::ENUM_FIELD) {
            return false;
        }

        let registry = self.model.registry();
        let fields: Vec<SymbolId> = registry
            .members(ty)
            .iter()
            .copied()
            .filter(|member| registry.get(*member).kind() == SymbolKind::Field && self.model.is_visible(*member))
            .collect();
        if fields.is_empty() {
            return false;
        }

        self.sink.write_start_enum_members();
        for (index, field) in fields.into_iter().enumerate() {
            if index > 0 && self.format.empty_line_between_members() {
                self.sink.write_enum_member_separator();
            }
            self.sink.write_start_enum_member(field);
            let definition = self.definition(field, &DisplayFormat::FULL_DECLARATION);
            self.sink.write_enum_member_definition(field, &definition);
            self.sink.write_end_enum_member(field);
        }
        self.sink.write_end_enum_members();
        true
    }

    fn namespace_definition(&self, namespace: SymbolId, qualification: TypeQualification) -> DisplayParts {
        let format = DisplayFormat::NAMESPACE_DECLARATION.with_qualification(qualification);
        symbol_display_parts(self.model.registry(), namespace, &format)
    }

    fn type_definition(&self, ty: SymbolId) -> DisplayParts {
        let qualification = if self.format.layout() == DefinitionListLayout::TypeHierarchy {
            TypeQualification::NameAndContainingTypesAndNamespaces
        } else {
            TypeQualification::NameOnly
        };
        self.definition(ty, &DisplayFormat::FULL_DECLARATION.with_qualification(qualification))
    }

    fn declaration(&self, symbol: SymbolId, format: &DisplayFormat) -> Declaration {
        let registry = self.model.registry();
        let filter = self.model.filter();
        let mut declaration = Declaration::build(
            registry,
            symbol,
            format,
            self.format.display_options(),
            |owner, attribute| filter.is_attribute_match(registry, owner, attribute),
        );

        if !self.format.includes(DefinitionParts::BASE_TYPE) {
            declaration.base_type = None;
        }
        if !self.format.includes(DefinitionParts::BASE_INTERFACES) {
            declaration.interfaces.clear();
        }
        if !self.format.includes(DefinitionParts::CONSTRAINTS) {
            declaration.constraints.clear();
        }
        declaration
    }

    fn definition(&self, symbol: SymbolId, format: &DisplayFormat) -> DisplayParts {
        self.declaration(symbol, format)
            .render(self.format.display_options(), self.format.indent_chars())
            .parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        definitions::{write_definitions, TextDefinitionSink},
        filter::SymbolFilterOptions,
        test::factories::fixture,
    };
    use pretty_assertions::assert_eq;

    /// Records the event sequence
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        depth: usize,
    }

    impl DefinitionSink for Recorder {
        fn write_assembly_definition(&mut self, _assembly: SymbolId, definition: &DisplayParts) {
            self.events.push(format!("{}assembly {definition}", "  ".repeat(self.depth)));
        }

        fn write_namespace_definition(&mut self, _namespace: SymbolId, definition: &DisplayParts) {
            self.events.push(format!("{}{definition}", "  ".repeat(self.depth)));
        }

        fn write_type_definition(&mut self, _ty: SymbolId, definition: &DisplayParts) {
            self.events.push(format!("{}{}", "  ".repeat(self.depth), definition.to_single_line()));
        }

        fn write_member_definition(&mut self, _member: SymbolId, definition: &DisplayParts) {
            self.events.push(format!("{}{}", "  ".repeat(self.depth), definition.to_single_line()));
        }

        fn write_member_separator(&mut self) {
            self.events.push("-".to_string());
        }

        fn write_enum_member_definition(&mut self, _member: SymbolId, definition: &DisplayParts) {
            self.events.push(format!("{}{definition}", "  ".repeat(self.depth)));
        }

        fn write_attribute(&mut self, _symbol: SymbolId, attribute: &DisplayParts) {
            self.events.push(format!("[assembly: {attribute}]"));
        }

        fn increase_depth(&mut self) {
            self.depth += 1;
        }

        fn decrease_depth(&mut self) {
            self.depth -= 1;
        }
    }

    fn record(format: &DefinitionListFormat, filter: SymbolFilterOptions) -> Vec<String> {
        let fixture = fixture();
        let model = DocumentationModel::new(&fixture.registry, [fixture.assembly], filter, Vec::<&str>::new());
        let mut writer = SymbolDefinitionWriter::new(&model, format, Recorder::default());
        writer.write_document();
        assert_eq!(writer.sink().depth, 0);
        writer.into_sink().events
    }

    #[test]
    fn namespace_list() {
        let events = record(&DefinitionListFormat::default(), SymbolFilterOptions::default());

        assert_eq!(events[0], "assembly Acme, Version=1.2.0.0, Culture=neutral, PublicKeyToken=null");
        assert_eq!(events[1], "namespace Acme.Data");
        assert!(events.iter().any(|event| event == "  public class Widget"));
        assert!(events.iter().any(|event| event == "    Red = 1"));
        assert!(!events.iter().any(|event| event.contains("secret")));

        let find = events
            .iter()
            .position(|event| event == "    public T Find(int id, string name = null);")
            .unwrap();
        let save = events.iter().position(|event| event.starts_with("    public void Save(")).unwrap();
        assert!(find < save);
    }

    #[test]
    fn member_groups_are_separated() {
        let events = record(&DefinitionListFormat::default(), SymbolFilterOptions::default());
        let max_size = events.iter().position(|event| event.contains("MaxSize")).unwrap();
        assert_eq!(events[max_size + 1], "-");

        let format = DefinitionListFormat::default().with_empty_line_between_member_groups(false);
        let events = record(&format, SymbolFilterOptions::default());
        assert!(!events.contains(&"-".to_string()));
    }

    #[test]
    fn namespace_hierarchy() {
        let format = DefinitionListFormat::default().with_layout(DefinitionListLayout::NamespaceHierarchy);
        let events = record(&format, SymbolFilterOptions::default());

        assert_eq!(events[1], "namespace Acme");
        assert_eq!(events[2], "  namespace Data");
        assert!(events.iter().any(|event| event == "    public class Widget"));
    }

    #[test]
    fn type_hierarchy() {
        let format = DefinitionListFormat::default().with_layout(DefinitionListLayout::TypeHierarchy);
        let events = record(&format, SymbolFilterOptions::default());

        assert!(events[1].starts_with("public class "));
        assert!(events.iter().any(|event| event == "  public class Acme.Data.Widget"));
        assert!(events.iter().any(|event| event == "public interface Acme.Data.IReader<out T>"));
    }

    #[test]
    fn groups_restrict_the_list() {
        let filter = SymbolFilterOptions::default().with_symbol_groups(SymbolGroupFilter::TYPE);
        let events = record(&DefinitionListFormat::default(), filter);
        assert_eq!(events[1], "namespace Acme.Data");
        assert!(events.iter().any(|event| event == "  public class Widget"));
        assert!(!events.iter().any(|event| event.starts_with("    ")));
    }

    #[test]
    fn text_output() {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let text = write_definitions(&model, &DefinitionListFormat::default());

        assert!(text.starts_with(
            "assembly Acme, Version=1.2.0.0, Culture=neutral, PublicKeyToken=null\n\nnamespace Acme.Data\n"
        ));
        assert!(text.contains(
            "\n  [System.Obsolete(\"Use Store\", false)]\n  \
             public class Repository<T> : System.IDisposable, Acme.Data.IReader<T> where T : class, new()\n"
        ));
        assert!(text.contains("\n    None = 0,\n    Red = 1,\n"));
        assert!(text.ends_with('\n') && !text.ends_with("\n\n"));

        let format = DefinitionListFormat::default();
        let mut writer = SymbolDefinitionWriter::new(&model, &format, TextDefinitionSink::new(&format));
        writer.write_document();
        let sink = writer.into_sink();
        assert_eq!(sink.depth(), 0);
        assert_eq!(sink.into_string(), text);
    }
}
