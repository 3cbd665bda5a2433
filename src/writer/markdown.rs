use std::fmt::Write as _;

use crate::writer::DocumentationWriter;

/// Characters escaped by [`MarkdownWriter::write_string`]
const ESCAPED: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '|', '#', '~'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    Heading,
    BulletItem,
    OrderedItem,
    BlockQuote,
    Table,
}

/// GitHub-flavored Markdown output
///
/// Blocks (headings, lists, tables, code blocks) are separated by one empty line. Inside a
/// table cell, line breaks are written as `<br />` and pipes are escaped.
///
/// ```rust
/// use cildoc::writer::{DocumentationWriter, MarkdownWriter};
///
/// let mut writer = MarkdownWriter::new();
/// writer.write_heading(1, "Widget<T> Class");
/// writer.write_start_bullet_list();
/// writer.write_start_bullet_item();
/// writer.write_link("Home", "../README.md", None);
/// writer.write_end_bullet_item();
/// writer.write_end_bullet_list();
///
/// assert_eq!(writer.content(), "# Widget\\<T\\> Class\n\n* [Home](../README.md)\n\n");
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownWriter {
    buffer: String,
    block: Block,
    table_columns: usize,
    table_cell: usize,
}

impl Default for MarkdownWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownWriter {
    /// Creates an empty writer
    #[must_use]
    pub fn new() -> Self {
        MarkdownWriter {
            buffer: String::new(),
            block: Block::None,
            table_columns: 0,
            table_cell: 0,
        }
    }

    /// Returns the written text and consumes the writer
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Ends the current paragraph with one empty line, unless the buffer is at a block boundary
    fn start_block(&mut self) {
        if self.buffer.is_empty() || self.buffer.ends_with("\n\n") {
            return;
        }
        if self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        } else {
            self.buffer.push_str("\n\n");
        }
    }

    fn end_block(&mut self) {
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer.push('\n');
        self.block = Block::None;
    }

    fn escape_into(&mut self, text: &str) {
        let in_table = self.block == Block::Table;
        for c in text.chars() {
            match c {
                '\n' if in_table => self.buffer.push_str("<br />"),
                '\r' => {}
                c if ESCAPED.contains(&c) => {
                    self.buffer.push('\\');
                    self.buffer.push(c);
                }
                c => self.buffer.push(c),
            }
        }
    }

    fn escape_link_text(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '\\' | '[' | ']' | '<' | '>' | '|' | '`' | '*' | '_') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    fn write_title(&mut self, title: Option<&str>) {
        if let Some(title) = title.filter(|title| !title.is_empty()) {
            let _ = write!(self.buffer, " \"{}\"", title.replace('"', "\\\""));
        }
    }
}

impl DocumentationWriter for MarkdownWriter {
    fn write_start_document(&mut self) {
        self.buffer.clear();
        self.block = Block::None;
    }

    fn write_end_document(&mut self) {
        let trimmed = self.buffer.trim_end_matches('\n').len();
        self.buffer.truncate(trimmed);
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
    }

    fn write_start_heading(&mut self, level: usize) {
        assert!((1..=6).contains(&level), "heading level {level} is out of range");
        self.start_block();
        self.buffer.push_str(&"#".repeat(level));
        self.buffer.push(' ');
        self.block = Block::Heading;
    }

    fn write_end_heading(&mut self) {
        self.end_block();
    }

    fn write_start_bold(&mut self) {
        self.buffer.push_str("**");
    }

    fn write_end_bold(&mut self) {
        self.buffer.push_str("**");
    }

    fn write_start_italic(&mut self) {
        self.buffer.push('_');
    }

    fn write_end_italic(&mut self) {
        self.buffer.push('_');
    }

    fn write_start_strikethrough(&mut self) {
        self.buffer.push_str("~~");
    }

    fn write_end_strikethrough(&mut self) {
        self.buffer.push_str("~~");
    }

    fn write_inline_code(&mut self, text: &str) {
        let text = if self.block == Block::Table {
            text.replace('\n', " ").replace('|', "\\|")
        } else {
            text.to_string()
        };

        if text.contains('`') {
            let _ = write!(self.buffer, "`` {text} ``");
        } else {
            let _ = write!(self.buffer, "`{text}`");
        }
    }

    fn write_code_block(&mut self, text: &str, language: Option<&str>) {
        self.start_block();
        let fence = if text.contains("```") { "~~~" } else { "```" };
        self.buffer.push_str(fence);
        self.buffer.push_str(language.unwrap_or_default());
        self.buffer.push('\n');
        self.buffer.push_str(text.trim_end_matches('\n'));
        self.buffer.push('\n');
        self.buffer.push_str(fence);
        self.end_block();
    }

    fn write_start_block_quote(&mut self) {
        self.start_block();
        self.buffer.push_str("> ");
        self.block = Block::BlockQuote;
    }

    fn write_end_block_quote(&mut self) {
        self.end_block();
    }

    fn write_start_bullet_list(&mut self) {
        self.start_block();
    }

    fn write_end_bullet_list(&mut self) {
        self.end_block();
    }

    fn write_start_bullet_item(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer.push_str("* ");
        self.block = Block::BulletItem;
    }

    fn write_end_bullet_item(&mut self) {
        self.buffer.push('\n');
        self.block = Block::None;
    }

    fn write_start_ordered_list(&mut self) {
        self.start_block();
    }

    fn write_end_ordered_list(&mut self) {
        self.end_block();
    }

    fn write_start_ordered_item(&mut self, number: usize) {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        let _ = write!(self.buffer, "{number}. ");
        self.block = Block::OrderedItem;
    }

    fn write_end_ordered_item(&mut self) {
        self.buffer.push('\n');
        self.block = Block::None;
    }

    fn write_start_table(&mut self, columns: usize) {
        self.start_block();
        self.table_columns = columns;
        self.block = Block::Table;
    }

    fn write_end_table(&mut self) {
        self.table_columns = 0;
        self.end_block();
    }

    fn write_start_table_row(&mut self) {
        self.table_cell = 0;
        self.buffer.push('|');
    }

    fn write_end_table_row(&mut self) {
        self.buffer.push('\n');
    }

    fn write_start_table_cell(&mut self) {
        self.buffer.push(' ');
    }

    fn write_end_table_cell(&mut self) {
        self.buffer.push_str(" |");
        self.table_cell += 1;
    }

    fn write_table_header_separator(&mut self) {
        self.buffer.push('|');
        for _ in 0..self.table_columns {
            self.buffer.push_str(" --- |");
        }
        self.buffer.push('\n');
    }

    fn write_link(&mut self, text: &str, url: &str, title: Option<&str>) {
        let text = Self::escape_link_text(text);
        let _ = write!(self.buffer, "[{text}]({}", url.replace(' ', "%20"));
        self.write_title(title);
        self.buffer.push(')');
    }

    fn write_image(&mut self, text: &str, url: &str, title: Option<&str>) {
        let text = Self::escape_link_text(text);
        let _ = write!(self.buffer, "![{text}]({}", url.replace(' ', "%20"));
        self.write_title(title);
        self.buffer.push(')');
    }

    fn write_link_destination(&mut self, name: &str) {
        let _ = write!(self.buffer, "<a id=\"{name}\"></a>");
    }

    fn write_horizontal_rule(&mut self) {
        self.start_block();
        self.buffer.push_str("---");
        self.end_block();
    }

    fn write_entity_ref(&mut self, name: &str) {
        let _ = write!(self.buffer, "&{name};");
    }

    fn write_char_entity(&mut self, value: char) {
        let _ = write!(self.buffer, "&#x{:X};", value as u32);
    }

    fn write_comment(&mut self, text: &str) {
        let _ = write!(self.buffer, "<!-- {text} -->");
    }

    fn write_string(&mut self, text: &str) {
        self.escape_into(text);
    }

    fn write_raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn write_line(&mut self) {
        match self.block {
            Block::Table => self.buffer.push_str("<br />"),
            Block::BlockQuote => self.buffer.push_str("\n> "),
            _ => self.buffer.push('\n'),
        }
    }

    fn write_line_break(&mut self) {
        match self.block {
            Block::Table => self.buffer.push_str("<br />"),
            Block::BlockQuote => self.buffer.push_str("  \n> "),
            _ => self.buffer.push_str("  \n"),
        }
    }

    fn content(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table() {
        let mut writer = MarkdownWriter::new();
        writer.write_string("Intro");
        writer.write_start_table(2);
        writer.write_start_table_row();
        writer.write_table_cell("Name");
        writer.write_table_cell("Summary");
        writer.write_end_table_row();
        writer.write_table_header_separator();
        writer.write_start_table_row();
        writer.write_start_table_cell();
        writer.write_link("Find(int)", "Find/README.md", None);
        writer.write_end_table_cell();
        writer.write_table_cell("a | b\nc");
        writer.write_end_table_row();
        writer.write_end_table();
        writer.write_end_document();

        assert_eq!(
            writer.content(),
            "Intro\n\n\
             | Name | Summary |\n\
             | --- | --- |\n\
             | [Find(int)](Find/README.md) | a \\| b<br />c |\n"
        );
    }

    #[test]
    fn code_block_and_emphasis() {
        let mut writer = MarkdownWriter::new();
        writer.write_bold("Warning:");
        writer.write_space();
        writer.write_inline_code("a`b");
        writer.write_code_block("public class A\n", Some("csharp"));
        writer.write_italic("done");
        writer.write_end_document();

        assert_eq!(
            writer.content(),
            "**Warning:** `` a`b ``\n\n```csharp\npublic class A\n```\n\n_done_\n"
        );
    }

    #[test]
    fn anchors_and_entities() {
        let mut writer = MarkdownWriter::new();
        writer.write_link_destination("top");
        writer.write_line();
        writer.write_heading(2, "Title");
        writer.write_entity_ref("emsp");
        writer.write_char_entity('\u{2022}');
        writer.write_link("Home", "../README.md", Some("Go \"home\""));

        assert_eq!(
            writer.content(),
            "<a id=\"top\"></a>\n\n## Title\n\n&emsp;&#x2022;[Home](../README.md \"Go \\\"home\\\"\")"
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn heading_level_is_checked() {
        MarkdownWriter::new().write_start_heading(7);
    }
}
