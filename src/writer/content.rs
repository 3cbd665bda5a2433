//! Rendering of documentation comment XML.

use crate::{
    display::{AdditionalMemberOptions, DisplayFormat},
    model::{xml::unindent, XmlElement, XmlNode},
    writer::{DocumentationWriter, PageWriter},
};

/// Elements that structure a comment and are rendered by their own sections
const SECTION_ELEMENTS: &[&str] = &[
    "summary",
    "remarks",
    "returns",
    "value",
    "example",
    "param",
    "typeparam",
    "exception",
    "seealso",
    "inheritdoc",
    "include",
    "permission",
    "filterpriority",
];

impl<W: DocumentationWriter> PageWriter<'_, '_, W> {
    /// Writes the content of a comment element
    ///
    /// With `inline_only`, everything goes on one line and code blocks are dropped, which is
    /// what table cells need.
    pub fn write_xml_content(&mut self, element: &XmlElement, inline_only: bool) {
        let count = element.children.len();
        for (index, node) in element.children.iter().enumerate() {
            match node {
                XmlNode::Text(text) => {
                    let mut text = text.as_str();
                    if index == 0 {
                        text = text.trim_start();
                    }
                    if index + 1 == count {
                        text = text.trim_end();
                    }
                    self.write_xml_text(text, inline_only);
                }
                XmlNode::Element(child) => self.write_xml_element(child, inline_only),
            }
        }
    }

    fn write_xml_text(&mut self, text: &str, inline_only: bool) {
        if text.is_empty() {
            return;
        }

        if inline_only {
            self.write_string(&single_line(text));
            return;
        }

        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_string(first.trim_end_matches('\r'));
        }
        for line in lines {
            self.write_line();
            self.write_string(line.trim_start().trim_end_matches('\r'));
        }
    }

    fn write_xml_element(&mut self, element: &XmlElement, inline_only: bool) {
        match element.name.as_str() {
            "c" => self.write_inline_code(&single_line(element.text().trim())),
            "code" => {
                if !inline_only {
                    let code = unindent(element.text().trim_matches('\n'));
                    let language = element.attribute("language").or_else(|| element.attribute("lang"));
                    self.write_code_block(&code, language);
                }
            }
            "para" => {
                if inline_only {
                    self.write_string(" ");
                    self.write_xml_content(element, true);
                    self.write_string(" ");
                } else {
                    self.write_line();
                    self.write_line();
                    self.write_xml_content(element, false);
                    self.write_line();
                    self.write_line();
                }
            }
            "b" | "strong" => {
                self.write_start_bold();
                self.write_xml_content(element, inline_only);
                self.write_end_bold();
            }
            "i" | "em" => {
                self.write_start_italic();
                self.write_xml_content(element, inline_only);
                self.write_end_italic();
            }
            "br" => {
                if inline_only {
                    self.write_string(" ");
                } else {
                    self.write_line_break();
                }
            }
            "paramref" | "typeparamref" => {
                if let Some(name) = element.attribute("name") {
                    self.write_bold(name);
                }
            }
            "see" => self.write_see(element),
            "list" => self.write_list(element, inline_only),
            name if SECTION_ELEMENTS.contains(&name) => {}
            _ => self.write_xml_content(element, inline_only),
        }
    }

    fn write_see(&mut self, element: &XmlElement) {
        if let Some(cref) = element.attribute("cref") {
            match self.model().get_first_symbol_for_declaration_id(cref) {
                Some(symbol) => {
                    let format = DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS.with_additional(
                        AdditionalMemberOptions::USE_ITEM_PROPERTY_NAME | AdditionalMemberOptions::USE_OPERATOR_NAME,
                    );
                    self.write_symbol_link(symbol, &format);
                }
                None => {
                    log::warn!("cannot resolve cref '{cref}'");
                    let name = cref.split_once(':').map_or(cref, |(_, name)| name);
                    self.write_bold(name);
                }
            }
        } else if let Some(langword) = element.attribute("langword") {
            self.write_inline_code(langword);
        } else if let Some(href) = element.attribute("href") {
            let text = element.text();
            let text = text.trim();
            let text = if text.is_empty() { href } else { text };
            self.write_link(text, href, None);
        }
    }

    fn write_list(&mut self, list: &XmlElement, inline_only: bool) {
        let items: Vec<&XmlElement> = list.elements_named("item").collect();

        if inline_only {
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    self.write_string(" ");
                }
                self.write_xml_content(item_content(item), true);
            }
            return;
        }

        match list.attribute("type") {
            Some("table") => self.write_table_list(list, &items),
            Some("number") => {
                self.write_start_ordered_list();
                for (index, item) in items.iter().enumerate() {
                    self.write_start_ordered_item(index + 1);
                    self.write_xml_content(item_content(item), true);
                    self.write_end_ordered_item();
                }
                self.write_end_ordered_list();
            }
            _ => {
                self.write_start_bullet_list();
                for item in &items {
                    self.write_start_bullet_item();
                    self.write_xml_content(item_content(item), true);
                    self.write_end_bullet_item();
                }
                self.write_end_bullet_list();
            }
        }
    }

    fn write_table_list(&mut self, list: &XmlElement, items: &[&XmlElement]) {
        let header = list.element("listheader");
        let columns = header
            .into_iter()
            .chain(items.iter().copied())
            .map(|row| row.elements().count())
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return;
        }

        self.write_start_table(columns);
        self.write_table_row(header, columns);
        self.write_table_header_separator();
        for item in items {
            self.write_table_row(Some(item), columns);
        }
        self.write_end_table();
    }

    fn write_table_row(&mut self, row: Option<&XmlElement>, columns: usize) {
        self.write_start_table_row();
        let cells: Vec<&XmlElement> = row.map(|row| row.elements().collect()).unwrap_or_default();
        for column in 0..columns {
            self.write_start_table_cell();
            if let Some(cell) = cells.get(column) {
                self.write_xml_content(cell, true);
            }
            self.write_end_table_cell();
        }
        self.write_end_table_row();
    }
}

/// The description of a list item, or the item itself when it has none
fn item_content(item: &XmlElement) -> &XmlElement {
    item.element("description").unwrap_or(item)
}

/// Folds line breaks and the indentation around them into single spaces
fn single_line(text: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    if text.starts_with(char::is_whitespace) {
        result.push(' ');
    }
    let words: Vec<&str> = text.split('\n').map(str::trim).filter(|line| !line.is_empty()).collect();
    result.push_str(&words.join(" "));
    if text.ends_with(char::is_whitespace) && !result.ends_with(' ') {
        result.push(' ');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filter::SymbolFilterOptions, model::DocumentationModel, options::DocumentationOptions,
        resources::DocumentationResources, test::factories::fixture, urls::MarkdownUrlProvider,
        writer::MarkdownWriter,
    };
    use pretty_assertions::assert_eq;

    fn render(xml: &str, inline_only: bool) -> String {
        let fixture = fixture();
        let model = DocumentationModel::new(
            &fixture.registry,
            [fixture.assembly],
            SymbolFilterOptions::default(),
            Vec::<&str>::new(),
        );
        let options = DocumentationOptions::default();
        let resources = DocumentationResources::default();
        let provider = MarkdownUrlProvider::default();
        let mut page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider);
        page.set_current_symbol(Some(fixture.repository));

        let element = XmlElement::parse(xml).unwrap();
        page.write_xml_content(&element, inline_only);
        page.into_inner().into_string()
    }

    #[test]
    fn inline_elements() {
        assert_eq!(
            render(
                "<summary>\n    Finds <paramref name=\"id\"/> or returns <see langword=\"null\"/>.\n</summary>",
                true
            ),
            "Finds **id** or returns `null`."
        );
    }

    #[test]
    fn cref_links_are_resolved() {
        assert_eq!(
            render("<summary>See <see cref=\"M:Acme.Data.Repository`1.Find(System.Int32,System.String)\"/>.</summary>", true),
            "See [Repository\\<T\\>.Find](./Find/README.md)."
        );
        assert_eq!(
            render("<summary>See <see cref=\"T:Acme.Missing\"/>.</summary>", true),
            "See **Acme.Missing**."
        );
    }

    #[test]
    fn code_blocks_are_dropped_inline() {
        let xml = "<remarks>Use it:<code>\n    var x = 1;\n</code></remarks>";
        assert_eq!(render(xml, true), "Use it:");
        assert_eq!(render(xml, false), "Use it:\n\n```\nvar x = 1;\n```\n\n");
    }

    #[test]
    fn lists() {
        let xml = "<remarks><list type=\"bullet\">\
                   <item><description>One</description></item>\
                   <item><description>Two</description></item>\
                   </list></remarks>";
        assert_eq!(render(xml, false), "* One\n* Two\n\n");

        let table = "<remarks><list type=\"table\">\
                     <listheader><term>Key</term><description>Meaning</description></listheader>\
                     <item><term>a</term><description>first</description></item>\
                     </list></remarks>";
        assert_eq!(
            render(table, false),
            "| Key | Meaning |\n| --- | --- |\n| a | first |\n\n"
        );
    }
}
