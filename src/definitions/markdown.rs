use std::collections::HashSet;

use crate::{
    definitions::{DefinitionListFormat, DefinitionParts, DefinitionSink, SymbolDefinitionWriter},
    display::{DisplayPartKind, DisplayParts},
    model::DocumentationModel,
    symbols::{SymbolId, SymbolRegistry},
    urls::{get_fragment, DocumentationUrlProvider},
    writer::{DocumentationWriter, MarkdownWriter},
};

/// Prefix of the anchors written after every type definition
const LOCAL_LINK_PREFIX: &str = "__cildoc-";

/// Definition list as a Markdown bullet list with linked type names
///
/// Every definition is one bullet item on one line; wrapped definitions are joined back into a
/// single line. Depth is shown by `&emsp;` runs separated by ` | `. The name of a defined type or
/// member is bold.
///
/// Type names link to the definition of the type further up or down the same list when the
/// type is documented, or to the external URL the provider knows for it. Keywords of special
/// types such as `string` link the same way. With
/// [`MarkdownDefinitionSink::with_page_links`] documented types link to their generated pages
/// instead.
pub struct MarkdownDefinitionSink<'a> {
    writer: MarkdownWriter,
    registry: &'a SymbolRegistry,
    url_provider: &'a dyn DocumentationUrlProvider,
    documented: HashSet<SymbolId>,
    page_links: bool,
    trailing_comma: bool,
    depth: usize,
}

impl<'a> MarkdownDefinitionSink<'a> {
    /// Creates an empty sink for the types of `model`
    pub fn new<'m: 'a>(
        model: &DocumentationModel<'m>,
        format: &DefinitionListFormat,
        url_provider: &'a dyn DocumentationUrlProvider,
    ) -> Self {
        MarkdownDefinitionSink {
            writer: MarkdownWriter::new(),
            registry: model.registry(),
            url_provider,
            documented: model.types().collect(),
            page_links: false,
            trailing_comma: format.includes(DefinitionParts::TRAILING_COMMA),
            depth: 0,
        }
    }

    /// Links documented types to their pages rather than to their definition in the list
    #[must_use]
    pub fn with_page_links(mut self, page_links: bool) -> Self {
        self.page_links = page_links;
        self
    }

    /// The current nesting level
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The Markdown written so far
    #[must_use]
    pub fn content(&self) -> &str {
        self.writer.content()
    }

    /// Returns the written Markdown and consumes the sink
    #[must_use]
    pub fn into_string(self) -> String {
        self.writer.into_string()
    }

    fn write_indentation(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.writer.write_entity_ref("emsp");
        for _ in 1..self.depth {
            self.writer.write_raw(" | ");
            self.writer.write_entity_ref("emsp");
        }
        self.writer.write_space();
    }

    fn write_item(&mut self, defined: Option<SymbolId>, prefix: &str, definition: &DisplayParts, suffix: &str) {
        self.writer.write_start_bullet_item();
        self.write_indentation();
        self.writer.write_raw(prefix);
        self.write_parts(defined, definition);
        self.writer.write_raw(suffix);
        self.writer.write_end_bullet_item();
    }

    /// Writes `definition` on one line, the name of `defined` in bold
    fn write_parts(&mut self, defined: Option<SymbolId>, definition: &DisplayParts) {
        let mut parts = definition.iter().peekable();
        let mut last = None;

        while let Some(part) = parts.next() {
            match part.kind {
                DisplayPartKind::LineBreak => {
                    while parts
                        .peek()
                        .is_some_and(|next| next.kind == DisplayPartKind::Indentation)
                    {
                        parts.next();
                    }
                    if !matches!(last, Some('(' | '[' | ' ')) {
                        self.writer.write_space();
                        last = Some(' ');
                    }
                    continue;
                }
                DisplayPartKind::Indentation => continue,
                _ => {}
            }

            let is_name = defined.is_some() && part.kind != DisplayPartKind::Keyword && part.symbol == defined;
            if is_name {
                self.writer.write_start_bold();
            }

            let linked = part.symbol.filter(|symbol| {
                part.kind.is_type_name()
                    || (part.kind == DisplayPartKind::Keyword && self.registry.get(*symbol).as_type().is_some())
            });
            match linked {
                Some(ty) if Some(ty) != defined => {
                    let url = self.type_url(ty);
                    self.writer.write_link_or_text(&part.text, url.as_deref(), None);
                }
                Some(ty) => {
                    let url = self.external_url(ty);
                    self.writer.write_link_or_text(&part.text, url.as_deref(), None);
                }
                None => self.writer.write_string(&part.text),
            }

            if is_name {
                self.writer.write_end_bold();
            }
            last = part.text.chars().last().or(last);
        }
    }

    fn type_url(&self, ty: SymbolId) -> Option<String> {
        if !self.documented.contains(&ty) {
            return self.external_url(ty);
        }

        if self.page_links {
            let folders = self.url_provider.get_folders(self.registry, ty)?;
            Some(self.url_provider.get_local_url(&folders, None, None))
        } else {
            local_link(self.registry, ty).map(|anchor| format!("#{anchor}"))
        }
    }

    fn external_url(&self, ty: SymbolId) -> Option<String> {
        let folders = self.url_provider.get_folders(self.registry, ty)?;
        self.url_provider.get_external_url(&folders)
    }
}

fn local_link(registry: &SymbolRegistry, ty: SymbolId) -> Option<String> {
    get_fragment(registry, ty).map(|fragment| format!("{LOCAL_LINK_PREFIX}{fragment}"))
}

impl DefinitionSink for MarkdownDefinitionSink<'_> {
    fn write_start_document(&mut self) {
        self.writer.write_start_document();
    }

    fn write_end_document(&mut self) {
        self.writer.write_end_document();
    }

    fn write_assembly_definition(&mut self, _assembly: SymbolId, definition: &DisplayParts) {
        self.write_item(None, "assembly ", definition, "");
    }

    fn write_namespace_definition(&mut self, _namespace: SymbolId, definition: &DisplayParts) {
        self.write_item(None, "", definition, "");
    }

    fn write_type_definition(&mut self, ty: SymbolId, definition: &DisplayParts) {
        self.writer.write_start_bullet_item();
        self.write_indentation();
        self.write_parts(Some(ty), definition);
        if let Some(anchor) = local_link(self.registry, ty) {
            self.writer.write_link_destination(&anchor);
        }
        self.writer.write_end_bullet_item();
    }

    fn write_member_definition(&mut self, member: SymbolId, definition: &DisplayParts) {
        self.write_item(Some(member), "", definition, "");
    }

    fn write_enum_member_definition(&mut self, member: SymbolId, definition: &DisplayParts) {
        let suffix = if self.trailing_comma { "," } else { "" };
        self.write_item(Some(member), "", definition, suffix);
    }

    fn write_attribute(&mut self, _symbol: SymbolId, attribute: &DisplayParts) {
        self.write_item(None, "[assembly: ", attribute, "]");
    }

    fn increase_depth(&mut self) {
        self.depth += 1;
    }

    fn decrease_depth(&mut self) {
        assert!(self.depth > 0, "cannot decrease depth below zero");
        self.depth -= 1;
    }
}

/// Writes the definitions of every documented symbol of `model` as a Markdown list
#[must_use]
pub fn write_markdown_definitions(
    model: &DocumentationModel<'_>,
    format: &DefinitionListFormat,
    url_provider: &dyn DocumentationUrlProvider,
) -> String {
    let sink = MarkdownDefinitionSink::new(model, format, url_provider);
    let mut writer = SymbolDefinitionWriter::new(model, format, sink);
    writer.write_document();
    writer.into_sink().into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        display::DisplayPart,
        filter::SymbolFilterOptions,
        test::factories::fixture,
        urls::MarkdownUrlProvider,
    };
    use pretty_assertions::assert_eq;

    fn parts(text: &str) -> DisplayParts {
        let mut parts = DisplayParts::new();
        parts.text(text);
        parts
    }

    #[test]
    fn definitions_are_bullets_with_depth() {
        let fixture = fixture();
        let model = DocumentationModel::new(&fixture.registry, [fixture.assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
        let provider = MarkdownUrlProvider::default();
        let mut sink = MarkdownDefinitionSink::new(&model, &DefinitionListFormat::default(), &provider);

        sink.write_namespace_definition(fixture.namespace, &parts("namespace Acme"));
        sink.increase_depth();
        sink.increase_depth();
        sink.write_member_definition(fixture.count, &parts("int Count { get; }"));
        sink.decrease_depth();
        sink.decrease_depth();
        sink.write_end_document();

        assert_eq!(
            sink.content(),
            "* namespace Acme\n* &emsp; | &emsp; int Count { get; }\n"
        );
    }

    #[test]
    fn type_names_link_to_local_or_external_targets() {
        let fixture = fixture();
        let registry = &fixture.registry;
        let model = DocumentationModel::new(registry, [fixture.assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
        let provider = MarkdownUrlProvider::default();
        let disposable = registry.find_type("System.IDisposable").unwrap();

        let mut definition = DisplayParts::new();
        definition.keyword_space("class");
        definition.push(DisplayPart::with_symbol(DisplayPartKind::ClassName, fixture.widget, "Widget"));
        definition.text(" : ");
        definition.push(DisplayPart::with_symbol(DisplayPartKind::InterfaceName, disposable, "IDisposable"));
        definition.text(", ");
        definition.push(DisplayPart::with_symbol(DisplayPartKind::InterfaceName, fixture.reader, "IReader"));

        let mut sink = MarkdownDefinitionSink::new(&model, &DefinitionListFormat::default(), &provider);
        sink.write_type_definition(fixture.widget, &definition);
        let content = sink.into_string();

        let widget_anchor = local_link(registry, fixture.widget).unwrap();
        let reader_anchor = local_link(registry, fixture.reader).unwrap();
        assert!(content.starts_with("* class **Widget** : [IDisposable](https://docs.microsoft.com/"));
        assert!(content.contains(&format!("[IReader](#{reader_anchor})")));
        assert!(content.ends_with(&format!("<a id=\"{widget_anchor}\"></a>\n")));

        let mut sink = MarkdownDefinitionSink::new(&model, &DefinitionListFormat::default(), &provider)
            .with_page_links(true);
        sink.write_member_definition(fixture.widget, &definition);
        assert!(sink.content().contains("[IReader](Acme/Data/IReader-1/README.md)"));
    }

    #[test]
    fn wrapped_definitions_become_one_line() {
        let fixture = fixture();
        let model = DocumentationModel::new(&fixture.registry, [fixture.assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
        let provider = MarkdownUrlProvider::default();
        let mut sink = MarkdownDefinitionSink::new(&model, &DefinitionListFormat::default(), &provider);

        let mut definition = DisplayParts::new();
        definition.text("void Run(");
        definition.line_break();
        definition.indentation("    ");
        definition.text("int count)");
        sink.write_member_definition(fixture.count, &definition);

        assert_eq!(sink.content(), "* void Run(int count)\n");
    }

    #[test]
    #[should_panic(expected = "cannot decrease depth")]
    fn depth_cannot_go_below_zero() {
        let fixture = fixture();
        let model = DocumentationModel::new(&fixture.registry, [fixture.assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
        let provider = MarkdownUrlProvider::default();
        MarkdownDefinitionSink::new(&model, &DefinitionListFormat::default(), &provider).decrease_depth();
    }
}
