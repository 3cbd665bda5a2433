//! Documentation-comment XML: an owned element tree, loaded documentation files and the
//! per-symbol view the page writer reads from.
//!
//! Documentation comments are small and are read many times while pages are written, so every
//! document is parsed once with `quick-xml` into an [`XmlElement`] tree and kept in memory.
//! Whitespace in text nodes is preserved; normalisation happens when content is written.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{symbols::SymbolId, Error, Result};

/// A node of an [`XmlElement`]'s content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A nested element
    Element(XmlElement),
    /// Text with entities already resolved
    Text(String),
}

/// An XML element with its attributes and content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    /// Local element name
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Creates an empty element
    #[must_use]
    pub fn new(name: &str) -> Self {
        XmlElement {
            name: name.to_string(),
            ..XmlElement::default()
        }
    }

    /// Parses a document and returns its root element
    ///
    /// # Errors
    /// Returns the reader error for malformed input, or [`Error::Malformed`] for a document
    /// without a root element.
    pub fn parse(text: &str) -> std::result::Result<XmlElement, ParseError> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(element)),
                        None => root = Some(element),
                    }
                }
                Event::End(_) => {
                    let Some(element) = stack.pop() else {
                        return Err(ParseError::Structure("unbalanced end tag".to_string()));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(element)),
                        None => root = Some(element),
                    }
                }
                Event::Text(text) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_text(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = stack.last_mut() {
                        let bytes = data.into_inner();
                        parent.push_text(&String::from_utf8_lossy(&bytes));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(ParseError::Structure(format!("unclosed element <{}>", stack[0].name)));
        }
        root.ok_or_else(|| ParseError::Structure("document has no root element".to_string()))
    }

    /// Parses the content of a documentation comment
    ///
    /// Comments attached to a symbol may be a complete `<member>` element or just its content
    /// (`<summary>..</summary><returns>..</returns>`); both yield a `member` element.
    ///
    /// # Errors
    /// See [`XmlElement::parse`].
    pub fn parse_comment(text: &str) -> std::result::Result<XmlElement, ParseError> {
        let trimmed = text.trim_start();
        if trimmed.starts_with("<member ") || trimmed.starts_with("<member>") {
            Self::parse(text)
        } else {
            Self::parse(&format!("<member>{text}</member>"))
        }
    }

    fn from_start(start: &BytesStart<'_>) -> std::result::Result<XmlElement, ParseError> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(XmlElement {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    fn push_text(&mut self, text: &str) {
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_string()));
        }
    }

    /// Returns the value of attribute `name`
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the child elements
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Iterates over the child elements named `name`
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.elements().filter(move |element| element.name == name)
    }

    /// Returns the first child element named `name`
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|element| element.name == name)
    }

    /// Returns the concatenated text of this element and all descendants
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Returns `true` if the element has neither child elements nor non-whitespace text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(|node| match node {
            XmlNode::Text(text) => text.trim().is_empty(),
            XmlNode::Element(_) => false,
        })
    }
}

/// Failure while building an [`XmlElement`] tree
#[derive(Debug)]
pub enum ParseError {
    /// The reader rejected the input
    Reader(quick_xml::Error),
    /// The input parsed but has no single balanced root
    Structure(String),
}

impl From<quick_xml::Error> for ParseError {
    fn from(error: quick_xml::Error) -> Self {
        ParseError::Reader(error)
    }
}

impl ParseError {
    /// Attaches the source of the document
    pub(crate) fn at(self, path: &Path) -> Error {
        match self {
            ParseError::Reader(source) => Error::Xml {
                path: path.to_path_buf(),
                source,
            },
            ParseError::Structure(message) => {
                malformed_error!("{}: {}", path.display(), message)
            }
        }
    }
}

/// Removes the indentation shared by all non-blank lines of `text`
///
/// Documentation comments are extracted from indented source, so every line carries the same
/// leading whitespace; code samples need it stripped to render correctly.
#[must_use]
pub fn unindent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let lines: Vec<&str> = text
        .lines()
        .map(|line| if line.len() >= indent { &line[indent..] } else { line.trim_start() })
        .collect();
    lines.join("\n")
}

/// One loaded XML documentation file (`<doc><members><member name="..">`)
#[derive(Debug, Clone)]
pub struct XmlDocumentation {
    path: PathBuf,
    assembly_name: Option<String>,
    members: HashMap<String, Arc<XmlElement>>,
}

impl XmlDocumentation {
    /// Loads a documentation file from disk
    ///
    /// # Errors
    /// Returns [`Error::FileError`] if the file cannot be read, [`Error::Xml`] if it is not
    /// well-formed and [`Error::Malformed`] if it is not a documentation file.
    pub fn load(path: impl AsRef<Path>) -> Result<XmlDocumentation> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let documentation = Self::parse(&text, path)?;
        log::debug!(
            "loaded {} documented members from {}",
            documentation.members.len(),
            path.display()
        );
        Ok(documentation)
    }

    /// Parses documentation file content; `path` is only used in errors
    ///
    /// # Errors
    /// See [`XmlDocumentation::load`].
    pub fn parse(text: &str, path: &Path) -> Result<XmlDocumentation> {
        let root = XmlElement::parse(text).map_err(|error| error.at(path))?;
        if root.name != "doc" {
            return Err(malformed_error!(
                "{}: expected <doc> root element, found <{}>",
                path.display(),
                root.name
            ));
        }

        let assembly_name = root
            .element("assembly")
            .and_then(|assembly| assembly.element("name"))
            .map(|name| name.text().trim().to_string());

        let mut members = HashMap::new();
        if let Some(list) = root.element("members") {
            for member in list.elements_named("member") {
                match member.attribute("name") {
                    Some(name) => {
                        members.insert(name.to_string(), Arc::new(member.clone()));
                    }
                    None => log::warn!("skipping <member> without name in {}", path.display()),
                }
            }
        }

        Ok(XmlDocumentation {
            path: path.to_path_buf(),
            assembly_name,
            members,
        })
    }

    /// Returns the file this documentation was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the assembly name declared in the file
    #[must_use]
    pub fn assembly_name(&self) -> Option<&str> {
        self.assembly_name.as_deref()
    }

    /// Returns the number of documented members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the file documents no member
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the `<member>` element for a documentation comment ID
    #[must_use]
    pub fn member(&self, comment_id: &str) -> Option<&Arc<XmlElement>> {
        self.members.get(comment_id)
    }

    /// Returns the documentation of `symbol` whose comment ID is `comment_id`
    #[must_use]
    pub fn get_xml_documentation(
        &self,
        symbol: SymbolId,
        comment_id: &str,
    ) -> Option<SymbolXmlDocumentation> {
        self.member(comment_id)
            .map(|element| SymbolXmlDocumentation::new(symbol, Arc::clone(element)))
    }
}

/// Parsed documentation comment of one symbol
///
/// When the comment of a symbol consists only of `<inheritdoc/>`, the documentation model
/// resolves it and the element held here is the one of the member it was inherited from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolXmlDocumentation {
    symbol: SymbolId,
    element: Arc<XmlElement>,
}

impl SymbolXmlDocumentation {
    /// Wraps a `<member>` element
    #[must_use]
    pub fn new(symbol: SymbolId, element: Arc<XmlElement>) -> Self {
        SymbolXmlDocumentation { symbol, element }
    }

    /// Returns the documented symbol
    #[must_use]
    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    /// Returns the `<member>` element
    #[must_use]
    pub fn element(&self) -> &XmlElement {
        &self.element
    }

    pub(crate) fn with_symbol(&self, symbol: SymbolId) -> Self {
        SymbolXmlDocumentation {
            symbol,
            element: Arc::clone(&self.element),
        }
    }

    /// Returns the first top-level element named `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&XmlElement> {
        self.element.element(name)
    }

    /// Returns `true` if a top-level element named `name` exists
    #[must_use]
    pub fn has_element(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// `<summary>`
    #[must_use]
    pub fn summary(&self) -> Option<&XmlElement> {
        self.get("summary")
    }

    /// `<remarks>`
    #[must_use]
    pub fn remarks(&self) -> Option<&XmlElement> {
        self.get("remarks")
    }

    /// `<returns>`
    #[must_use]
    pub fn returns(&self) -> Option<&XmlElement> {
        self.get("returns")
    }

    /// `<value>`
    #[must_use]
    pub fn value(&self) -> Option<&XmlElement> {
        self.get("value")
    }

    /// `<example>`
    #[must_use]
    pub fn example(&self) -> Option<&XmlElement> {
        self.get("example")
    }

    /// `<param name="..">`
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&XmlElement> {
        self.named("param", name)
    }

    /// `<typeparam name="..">`
    #[must_use]
    pub fn type_param(&self, name: &str) -> Option<&XmlElement> {
        self.named("typeparam", name)
    }

    fn named(&self, element: &str, name: &str) -> Option<&XmlElement> {
        self.element
            .elements()
            .find(|candidate| candidate.name == element && candidate.attribute("name") == Some(name))
    }

    /// `<exception cref="..">` elements
    pub fn exceptions(&self) -> impl Iterator<Item = &XmlElement> {
        self.element.elements_named("exception")
    }

    /// `<seealso>` elements
    pub fn see_also(&self) -> impl Iterator<Item = &XmlElement> {
        self.element.elements_named("seealso")
    }

    /// Returns `true` if the comment contains `<inheritdoc/>`
    #[must_use]
    pub fn has_inheritdoc(&self) -> bool {
        self.has_element("inheritdoc")
    }

    /// Returns `true` if the comment consists of nothing but `<inheritdoc/>`
    #[must_use]
    pub fn is_inheritdoc_only(&self) -> bool {
        let mut elements = self.element.elements();
        let only = matches!(
            (elements.next(), elements.next()),
            (Some(element), None) if element.name == "inheritdoc"
        );
        only && self.element.children.iter().all(|node| match node {
            XmlNode::Text(text) => text.trim().is_empty(),
            XmlNode::Element(_) => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tree() {
        let root = XmlElement::parse_comment(
            "<summary>Finds <see cref=\"T:A.B\"/> &amp; more.</summary><param name=\"id\">x</param>",
        )
        .unwrap();

        assert_eq!(root.name, "member");
        let summary = root.element("summary").unwrap();
        assert_eq!(summary.text(), "Finds  & more.");
        assert_eq!(summary.element("see").unwrap().attribute("cref"), Some("T:A.B"));
        assert_eq!(root.elements_named("param").count(), 1);
    }

    #[test]
    fn parameters_are_found_by_name() {
        let root = XmlElement::parse_comment(
            "<param name=\"count\">How many.</param><typeparam name=\"count\">Type.</typeparam>\
             <param name=\"delay\">How long.</param>",
        )
        .unwrap();
        let documentation = SymbolXmlDocumentation::new(SymbolId::new(0), Arc::new(root));

        assert_eq!(documentation.param("delay").unwrap().text(), "How long.");
        assert_eq!(documentation.param("count").unwrap().text(), "How many.");
        assert_eq!(documentation.type_param("count").unwrap().text(), "Type.");
        assert!(documentation.param("missing").is_none());
        assert!(documentation.type_param("delay").is_none());
    }

    #[test]
    fn rejects_unbalanced() {
        assert!(XmlElement::parse("<a><b></a>").is_err());
        assert!(XmlElement::parse("").is_err());
    }

    #[test]
    fn documentation_file() {
        let documentation = XmlDocumentation::parse(
            "<?xml version=\"1.0\"?>\n<doc><assembly><name>Acme</name></assembly><members>\
             <member name=\"T:Acme.Widget\"><summary>A widget.</summary></member>\
             <member name=\"M:Acme.Widget.Run\"><inheritdoc/></member>\
             </members></doc>",
            Path::new("Acme.xml"),
        )
        .unwrap();

        assert_eq!(documentation.assembly_name(), Some("Acme"));
        assert_eq!(documentation.len(), 2);

        let symbol = SymbolId::new(1);
        let widget = documentation.get_xml_documentation(symbol, "T:Acme.Widget").unwrap();
        assert_eq!(widget.summary().unwrap().text(), "A widget.");
        assert!(!widget.is_inheritdoc_only());

        let run = documentation.get_xml_documentation(symbol, "M:Acme.Widget.Run").unwrap();
        assert!(run.is_inheritdoc_only());
    }

    #[test]
    fn wrong_root_is_malformed() {
        let error = XmlDocumentation::parse("<root/>", Path::new("x.xml")).unwrap_err();
        assert!(matches!(error, Error::Malformed { .. }));
    }

    #[test]
    fn unindents() {
        assert_eq!(unindent("    a\n      b\n\n    c"), "a\n  b\n\nc");
    }
}
