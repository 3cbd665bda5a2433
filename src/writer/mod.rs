//! Output of generated pages.
//!
//! Two layers cooperate:
//!
//! - [`DocumentationWriter`] is the format-specific primitive layer: headings, emphasis, lists,
//!   tables, links and anchors. [`MarkdownWriter`] renders GitHub-flavored Markdown.
//! - [`PageWriter`] composes those primitives into documentation sections (declarations,
//!   parameter lists, member tables, inheritance diagrams, ...) for the symbols of a
//!   [`crate::model::DocumentationModel`]. It owns one primitive writer per page.

mod content;
mod markdown;
mod page;

pub use markdown::MarkdownWriter;
pub use page::PageWriter;

/// Formatting primitives of a page
///
/// Every `start_*` call is matched by the corresponding `end_*` call. Text passed to
/// [`DocumentationWriter::write_string`] is escaped; [`DocumentationWriter::write_raw`] is not.
pub trait DocumentationWriter {
    /// Begins a page
    fn write_start_document(&mut self);

    /// Ends a page
    fn write_end_document(&mut self);

    /// Begins a heading of level 1 to 6
    fn write_start_heading(&mut self, level: usize);

    /// Ends a heading
    fn write_end_heading(&mut self);

    /// Begins bold text
    fn write_start_bold(&mut self);

    /// Ends bold text
    fn write_end_bold(&mut self);

    /// Begins italic text
    fn write_start_italic(&mut self);

    /// Ends italic text
    fn write_end_italic(&mut self);

    /// Begins struck-through text
    fn write_start_strikethrough(&mut self);

    /// Ends struck-through text
    fn write_end_strikethrough(&mut self);

    /// Writes inline code
    fn write_inline_code(&mut self, text: &str);

    /// Writes a fenced code block
    fn write_code_block(&mut self, text: &str, language: Option<&str>);

    /// Begins a block quote
    fn write_start_block_quote(&mut self);

    /// Ends a block quote
    fn write_end_block_quote(&mut self);

    /// Begins a bullet list
    fn write_start_bullet_list(&mut self);

    /// Ends a bullet list
    fn write_end_bullet_list(&mut self);

    /// Begins a bullet list item
    fn write_start_bullet_item(&mut self);

    /// Ends a bullet list item
    fn write_end_bullet_item(&mut self);

    /// Begins an ordered list
    fn write_start_ordered_list(&mut self);

    /// Ends an ordered list
    fn write_end_ordered_list(&mut self);

    /// Begins an ordered list item
    fn write_start_ordered_item(&mut self, number: usize);

    /// Ends an ordered list item
    fn write_end_ordered_item(&mut self);

    /// Begins a table with `columns` columns
    fn write_start_table(&mut self, columns: usize);

    /// Ends a table
    fn write_end_table(&mut self);

    /// Begins a table row
    fn write_start_table_row(&mut self);

    /// Ends a table row
    fn write_end_table_row(&mut self);

    /// Begins a table cell
    fn write_start_table_cell(&mut self);

    /// Ends a table cell
    fn write_end_table_cell(&mut self);

    /// Writes the line separating the header row from the body
    fn write_table_header_separator(&mut self);

    /// Writes a link
    fn write_link(&mut self, text: &str, url: &str, title: Option<&str>);

    /// Writes an image
    fn write_image(&mut self, text: &str, url: &str, title: Option<&str>);

    /// Writes an anchor other links can point at
    fn write_link_destination(&mut self, name: &str);

    /// Writes a horizontal rule
    fn write_horizontal_rule(&mut self);

    /// Writes a named entity such as `&emsp;`
    fn write_entity_ref(&mut self, name: &str);

    /// Writes a numeric character entity
    fn write_char_entity(&mut self, value: char);

    /// Writes a comment that is not rendered
    fn write_comment(&mut self, text: &str);

    /// Writes escaped text
    fn write_string(&mut self, text: &str);

    /// Writes text as is
    fn write_raw(&mut self, text: &str);

    /// Ends the current line
    fn write_line(&mut self);

    /// Writes a hard line break inside a paragraph
    fn write_line_break(&mut self);

    /// The text written so far
    fn content(&self) -> &str;

    /// Writes a complete heading
    fn write_heading(&mut self, level: usize, text: &str) {
        self.write_start_heading(level);
        self.write_string(text);
        self.write_end_heading();
    }

    /// Writes bold text
    fn write_bold(&mut self, text: &str) {
        self.write_start_bold();
        self.write_string(text);
        self.write_end_bold();
    }

    /// Writes italic text
    fn write_italic(&mut self, text: &str) {
        self.write_start_italic();
        self.write_string(text);
        self.write_end_italic();
    }

    /// Writes struck-through text
    fn write_strikethrough(&mut self, text: &str) {
        self.write_start_strikethrough();
        self.write_string(text);
        self.write_end_strikethrough();
    }

    /// Writes a bullet item holding `text`
    fn write_bullet_item(&mut self, text: &str) {
        self.write_start_bullet_item();
        self.write_string(text);
        self.write_end_bullet_item();
    }

    /// Writes an ordered item holding `text`
    fn write_ordered_item(&mut self, number: usize, text: &str) {
        self.write_start_ordered_item(number);
        self.write_string(text);
        self.write_end_ordered_item();
    }

    /// Writes a table cell holding `text`
    fn write_table_cell(&mut self, text: &str) {
        self.write_start_table_cell();
        self.write_string(text);
        self.write_end_table_cell();
    }

    /// Writes a block quote holding `text`
    fn write_block_quote(&mut self, text: &str) {
        self.write_start_block_quote();
        self.write_string(text);
        self.write_end_block_quote();
    }

    /// Writes a link when `url` is known, plain text otherwise
    fn write_link_or_text(&mut self, text: &str, url: Option<&str>, title: Option<&str>) {
        match url {
            Some(url) if !url.is_empty() => self.write_link(text, url, title),
            _ => self.write_string(text),
        }
    }

    /// Writes a single space
    fn write_space(&mut self) {
        self.write_string(" ");
    }
}
