use std::io;

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::{
    definitions::{DefinitionListFormat, DefinitionSink, SymbolDefinitionWriter},
    display::DisplayParts,
    model::DocumentationModel,
    symbols::SymbolId,
    Error, Result,
};

/// Definition list as an XML document
///
/// The document mirrors the walk: `<root>` holds `<assemblies>` and `<namespaces>`, every
/// namespace holds `<types>`, every type holds `<members>`. Assemblies and namespaces carry their
/// definition in a `name` attribute, types and members in a `def` attribute; wrapped definitions
/// are joined into one line. Assembly attributes become `<attribute>` elements.
///
/// The sink never fails while events arrive. The first write error is kept and reported by
/// [`XmlDefinitionSink::finish`].
pub struct XmlDefinitionSink {
    writer: Writer<Vec<u8>>,
    pending: Option<BytesStart<'static>>,
    error: Option<io::Error>,
    depth: usize,
}

impl XmlDefinitionSink {
    /// Creates an empty sink indenting nested elements by the format's indentation unit
    #[must_use]
    pub fn new(format: &DefinitionListFormat) -> Self {
        let indent = format.indent_chars();
        let writer = match indent.as_bytes().first() {
            Some(&c) => Writer::new_with_indent(Vec::new(), c, indent.len()),
            None => Writer::new(Vec::new()),
        };

        XmlDefinitionSink {
            writer,
            pending: None,
            error: None,
            depth: 0,
        }
    }

    /// The current nesting level of the definitions
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the written document and consumes the sink
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`] if an element could not be written.
    pub fn finish(mut self) -> Result<String> {
        self.flush_pending();
        if let Some(error) = self.error {
            return Err(Error::FileError(error));
        }
        String::from_utf8(self.writer.into_inner()).map_err(|error| Error::Error(error.to_string()))
    }

    fn emit(&mut self, event: Event<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.writer.write_event(event) {
            self.error = Some(error);
        }
    }

    /// Writes the start tag left open for the next definition
    fn flush_pending(&mut self) {
        if let Some(start) = self.pending.take() {
            self.emit(Event::Start(start));
        }
    }

    fn start(&mut self, name: &'static str) {
        self.flush_pending();
        self.emit(Event::Start(BytesStart::new(name)));
    }

    fn start_with_definition(&mut self, name: &'static str) {
        self.flush_pending();
        self.pending = Some(BytesStart::new(name));
    }

    fn end(&mut self, name: &'static str) {
        self.flush_pending();
        self.emit(Event::End(BytesEnd::new(name)));
    }

    fn define(&mut self, attribute: &str, definition: &DisplayParts) {
        let value = definition.to_single_line();
        match self.pending.as_mut() {
            Some(start) => start.push_attribute((attribute, value.as_str())),
            None => log::warn!("definition '{value}' arrived without an open element"),
        }
        self.flush_pending();
    }
}

impl DefinitionSink for XmlDefinitionSink {
    fn write_start_document(&mut self) {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)));
        self.start("root");
    }

    fn write_end_document(&mut self) {
        self.end("root");
    }

    fn write_start_assemblies(&mut self) {
        self.start("assemblies");
    }

    fn write_end_assemblies(&mut self) {
        self.end("assemblies");
    }

    fn write_start_assembly(&mut self, _assembly: SymbolId) {
        self.start_with_definition("assembly");
    }

    fn write_assembly_definition(&mut self, _assembly: SymbolId, definition: &DisplayParts) {
        self.define("name", definition);
    }

    fn write_end_assembly(&mut self, _assembly: SymbolId) {
        self.end("assembly");
    }

    fn write_start_namespaces(&mut self) {
        self.start("namespaces");
    }

    fn write_end_namespaces(&mut self) {
        self.end("namespaces");
    }

    fn write_start_namespace(&mut self, _namespace: SymbolId) {
        self.start_with_definition("namespace");
    }

    fn write_namespace_definition(&mut self, _namespace: SymbolId, definition: &DisplayParts) {
        self.define("name", definition);
    }

    fn write_end_namespace(&mut self, _namespace: SymbolId) {
        self.end("namespace");
    }

    fn write_start_types(&mut self) {
        self.start("types");
    }

    fn write_end_types(&mut self) {
        self.end("types");
    }

    fn write_start_type(&mut self, _ty: SymbolId) {
        self.start_with_definition("type");
    }

    fn write_type_definition(&mut self, _ty: SymbolId, definition: &DisplayParts) {
        self.define("def", definition);
    }

    fn write_end_type(&mut self, _ty: SymbolId) {
        self.end("type");
    }

    fn write_start_members(&mut self) {
        self.start("members");
    }

    fn write_end_members(&mut self) {
        self.end("members");
    }

    fn write_start_member(&mut self, _member: SymbolId) {
        self.start_with_definition("member");
    }

    fn write_member_definition(&mut self, _member: SymbolId, definition: &DisplayParts) {
        self.define("def", definition);
    }

    fn write_end_member(&mut self, _member: SymbolId) {
        self.end("member");
    }

    fn write_start_enum_members(&mut self) {
        self.start("members");
    }

    fn write_end_enum_members(&mut self) {
        self.end("members");
    }

    fn write_start_enum_member(&mut self, _member: SymbolId) {
        self.start_with_definition("member");
    }

    fn write_enum_member_definition(&mut self, _member: SymbolId, definition: &DisplayParts) {
        self.define("def", definition);
    }

    fn write_end_enum_member(&mut self, _member: SymbolId) {
        self.end("member");
    }

    fn write_start_attributes(&mut self, _symbol: SymbolId) {
        self.start("attributes");
    }

    fn write_attribute(&mut self, _symbol: SymbolId, attribute: &DisplayParts) {
        self.start("attribute");
        let text = attribute.to_single_line();
        self.emit(Event::Text(BytesText::new(&text)));
        self.end("attribute");
    }

    fn write_end_attributes(&mut self, _symbol: SymbolId) {
        self.end("attributes");
    }

    fn increase_depth(&mut self) {
        self.depth += 1;
    }

    fn decrease_depth(&mut self) {
        assert!(self.depth > 0, "cannot decrease depth below zero");
        self.depth -= 1;
    }
}

/// Writes the definitions of every documented symbol of `model` as an XML document
///
/// # Errors
///
/// Returns an error if the document could not be written.
pub fn write_xml_definitions(model: &DocumentationModel<'_>, format: &DefinitionListFormat) -> Result<String> {
    let mut writer = SymbolDefinitionWriter::new(model, format, XmlDefinitionSink::new(format));
    writer.write_document();
    writer.into_sink().finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts(text: &str) -> DisplayParts {
        let mut parts = DisplayParts::new();
        parts.text(text);
        parts
    }

    #[test]
    fn definitions_become_attributes() -> crate::Result<()> {
        let format = DefinitionListFormat::default();
        let mut sink = XmlDefinitionSink::new(&format);
        let id = SymbolId::new(0);

        sink.write_start_document();
        sink.write_start_namespaces();
        sink.write_start_namespace(id);
        sink.write_namespace_definition(id, &parts("Acme"));
        sink.write_start_types();
        sink.write_start_type(id);
        sink.write_type_definition(id, &parts("public class Box<T>"));
        sink.write_end_type(id);
        sink.write_end_types();
        sink.write_end_namespace(id);
        sink.write_end_namespaces();
        sink.write_end_document();

        assert_eq!(
            sink.finish()?,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <root>\n  \
               <namespaces>\n    \
                 <namespace name=\"Acme\">\n      \
                   <types>\n        \
                     <type def=\"public class Box&lt;T&gt;\">\n        \
                     </type>\n      \
                   </types>\n    \
                 </namespace>\n  \
               </namespaces>\n\
             </root>"
        );
        Ok(())
    }

    #[test]
    fn wrapped_definition_is_one_line() -> crate::Result<()> {
        let mut sink = XmlDefinitionSink::new(&DefinitionListFormat::default().with_indent_chars(""));
        let mut definition = DisplayParts::new();
        definition.text("void Run(");
        definition.line_break();
        definition.indentation("    ");
        definition.text("int count)");

        sink.write_start_member(SymbolId::new(0));
        sink.write_member_definition(SymbolId::new(0), &definition);
        sink.write_end_member(SymbolId::new(0));

        assert_eq!(sink.finish()?, "<member def=\"void Run(int count)\"></member>");
        Ok(())
    }

    #[test]
    fn attributes_are_elements() -> crate::Result<()> {
        let mut sink = XmlDefinitionSink::new(&DefinitionListFormat::default().with_indent_chars(""));
        let id = SymbolId::new(0);

        sink.write_start_assembly(id);
        sink.write_assembly_definition(id, &parts("Acme, Version=1.0.0.0"));
        sink.write_start_attributes(id);
        sink.write_attribute(id, &parts("CLSCompliant(true)"));
        sink.write_end_attributes(id);
        sink.write_end_assembly(id);

        assert_eq!(
            sink.finish()?,
            "<assembly name=\"Acme, Version=1.0.0.0\"><attributes><attribute>CLSCompliant(true)</attribute></attributes></assembly>"
        );
        Ok(())
    }

    #[test]
    #[should_panic(expected = "cannot decrease depth")]
    fn depth_cannot_go_below_zero() {
        XmlDefinitionSink::new(&DefinitionListFormat::default()).decrease_depth();
    }
}
