//! quick-xml backed document.
//!
//! The document is kept as a flat list of nodes in source order. Start and
//! empty-element tags become [`Element`]s, everything else (text, comments,
//! end tags, declarations, entity references) is stored as the original event
//! and written back untouched. An element is only re-rendered after one of its
//! attributes was changed, so an unmodified document serializes to exactly the
//! text it was parsed from, leading byte order mark included.

use std::borrow::Cow;

use quick_xml::{
    Reader, Writer,
    escape::{escape, unescape},
    events::{BytesStart, Event, attributes::Attribute},
    name::QName,
};

use super::{SvgError, XmlDocument};

const BOM: &str = "\u{feff}";

/// Handle to an element of an [`SvgDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Parsed XML/SVG document.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    nodes: Vec<Node>,
    /// Leading UTF-8 byte order mark, which the reader skips.
    bom: bool,
}

#[derive(Debug, Clone)]
enum Node {
    Element(Element),
    Markup(Event<'static>),
}

#[derive(Debug, Clone)]
struct Element {
    /// Qualified name as written in the source.
    name: String,
    /// Lowercase copy of `name`, used for tag lookups.
    tag: String,
    attributes: Vec<RawAttribute>,
    self_closing: bool,
    /// Original start tag, written back verbatim while `dirty` is false.
    source: BytesStart<'static>,
    dirty: bool,
}

/// Attribute with its value kept in escaped (source) form.
#[derive(Debug, Clone)]
struct RawAttribute {
    name: String,
    raw: String,
}

impl SvgDocument {
    /// Parse XML text.
    ///
    /// # Errors
    /// - [`SvgError::Parse`] for malformed XML (mismatched end tags, broken
    ///   markup)
    /// - [`SvgError::Attribute`] for malformed attribute lists
    /// - [`SvgError::NoRootElement`] when the text contains no element
    pub fn parse(text: &str) -> Result<Self, SvgError> {
        let mut reader = Reader::from_str(text);
        let mut nodes = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    nodes.push(Node::Element(Element::from_start(start, false)?));
                }
                Ok(Event::Empty(start)) => {
                    nodes.push(Node::Element(Element::from_start(start, true)?));
                }
                Ok(Event::Eof) => break,
                Ok(event) => nodes.push(Node::Markup(event.into_owned())),
                Err(source) => {
                    return Err(SvgError::Parse {
                        position: reader.error_position() as u64,
                        source,
                    });
                }
            }
        }

        if !nodes.iter().any(|node| matches!(node, Node::Element(_))) {
            return Err(SvgError::NoRootElement);
        }

        Ok(Self {
            nodes,
            bom: text.starts_with(BOM),
        })
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        match self.nodes.get(id.0) {
            Some(Node::Element(element)) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        match self.nodes.get_mut(id.0) {
            Some(Node::Element(element)) => Some(element),
            _ => None,
        }
    }
}

impl Element {
    fn from_start(start: BytesStart<'_>, self_closing: bool) -> Result<Self, SvgError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let tag = name.to_ascii_lowercase();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let raw = String::from_utf8_lossy(&attr.value);
            // Single-quoted values may hold a bare `"`, which breaks once the
            // tag is re-rendered with double quotes.
            let raw = if raw.contains('"') {
                raw.replace('"', "&quot;")
            } else {
                raw.into_owned()
            };
            attributes.push(RawAttribute {
                name: String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                raw,
            });
        }

        Ok(Self {
            name,
            tag,
            attributes,
            self_closing,
            source: start.into_owned(),
            dirty: false,
        })
    }

    fn find(&self, name: &str) -> Option<&RawAttribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Start tag to write: the source tag, or a fresh one after edits.
    fn start_tag(&self) -> BytesStart<'_> {
        if !self.dirty {
            return self.source.borrow();
        }

        let mut start = BytesStart::new(self.name.as_str());
        for attr in &self.attributes {
            start.push_attribute(Attribute {
                key: QName(attr.name.as_bytes()),
                value: Cow::Borrowed(attr.raw.as_bytes()),
            });
        }
        start
    }
}

impl XmlDocument for SvgDocument {
    type Element = ElementId;

    fn elements(&self) -> Vec<ElementId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| matches!(node, Node::Element(_)))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn tag_name(&self, element: ElementId) -> Cow<'_, str> {
        self.element(element)
            .map_or(Cow::Borrowed(""), |el| Cow::Borrowed(el.tag.as_str()))
    }

    fn has_attribute(&self, element: ElementId, name: &str) -> bool {
        self.element(element).is_some_and(|el| el.find(name).is_some())
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<Cow<'_, str>> {
        let attr = self.element(element)?.find(name)?;
        // Undecodable entities are handed out as written.
        Some(unescape(&attr.raw).unwrap_or(Cow::Borrowed(attr.raw.as_str())))
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let Some(el) = self.element_mut(element) else {
            return;
        };

        let raw = escape(value).into_owned();
        match el.attributes.iter_mut().find(|attr| attr.name == name) {
            Some(attr) if attr.raw == raw => return,
            Some(attr) => attr.raw = raw,
            None => el.attributes.push(RawAttribute {
                name: name.to_string(),
                raw,
            }),
        }
        el.dirty = true;
    }

    fn serialize(&self) -> Result<String, SvgError> {
        let mut buf = Vec::new();
        if self.bom {
            buf.extend_from_slice(BOM.as_bytes());
        }
        let mut writer = Writer::new(buf);

        for node in &self.nodes {
            let written = match node {
                Node::Element(el) if el.self_closing => {
                    writer.write_event(Event::Empty(el.start_tag()))
                }
                Node::Element(el) => writer.write_event(Event::Start(el.start_tag())),
                Node::Markup(event) => writer.write_event(event.borrow()),
            };
            written.map_err(|e| SvgError::Serialize(e.to_string()))?;
        }

        String::from_utf8(writer.into_inner()).map_err(|e| SvgError::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- logo -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <g id='outer' class="a &amp; b">
    <rect x="10" y="20.5"  width="30" height="40"/>
    <text x="1">Tom &amp; Jerry<![CDATA[ <raw> ]]></text>
  </g>
</svg>
"#;

    #[test]
    fn test_unmodified_document_roundtrips_verbatim() {
        let doc = SvgDocument::parse(SAMPLE).unwrap();
        assert_eq!(doc.serialize().unwrap(), SAMPLE);
    }

    #[test]
    fn test_elements_in_document_order() {
        let doc = SvgDocument::parse(SAMPLE).unwrap();
        let tags: Vec<_> = doc
            .elements()
            .into_iter()
            .map(|el| doc.tag_name(el).into_owned())
            .collect();
        assert_eq!(tags, ["svg", "g", "rect", "text"]);
    }

    #[test]
    fn test_byte_order_mark_kept() {
        let src = "\u{feff}<svg><rect x=\"1\"/></svg>";
        let mut doc = SvgDocument::parse(src).unwrap();
        assert_eq!(doc.serialize().unwrap(), src);

        let rect = doc.elements()[1];
        doc.set_attribute(rect, "x", "1.001");
        assert_eq!(
            doc.serialize().unwrap(),
            "\u{feff}<svg><rect x=\"1.001\"/></svg>"
        );
    }

    #[test]
    fn test_tag_name_is_lowercase() {
        let doc = SvgDocument::parse(r#"<SVG><Circle cx="1"/></SVG>"#).unwrap();
        let circle = doc.elements()[1];
        assert_eq!(doc.tag_name(circle), "circle");
        assert!(doc.has_attribute(circle, "cx"));
        assert!(!doc.has_attribute(circle, "CX"));
    }

    #[test]
    fn test_attribute_is_unescaped() {
        let doc = SvgDocument::parse(SAMPLE).unwrap();
        let g = doc.elements()[1];
        assert_eq!(doc.attribute(g, "class").as_deref(), Some("a & b"));
        assert_eq!(doc.attribute(g, "id").as_deref(), Some("outer"));
        assert_eq!(doc.attribute(g, "missing"), None);
    }

    #[test]
    fn test_set_attribute_rewrites_only_that_element() {
        let mut doc = SvgDocument::parse(SAMPLE).unwrap();
        let rect = doc.elements()[2];
        doc.set_attribute(rect, "y", "20.501");

        let out = doc.serialize().unwrap();
        assert!(out.contains(r#"<rect x="10" y="20.501" width="30" height="40"/>"#));
        // Untouched markup keeps its original spelling.
        assert!(out.contains(r#"<g id='outer' class="a &amp; b">"#));
        assert!(out.contains("<![CDATA[ <raw> ]]>"));
        assert!(out.contains("<!-- logo -->"));
    }

    #[test]
    fn test_set_same_value_keeps_source_tag() {
        let mut doc = SvgDocument::parse(SAMPLE).unwrap();
        let rect = doc.elements()[2];
        doc.set_attribute(rect, "x", "10");
        assert_eq!(doc.serialize().unwrap(), SAMPLE);
    }

    #[test]
    fn test_set_attribute_escapes_and_appends() {
        let mut doc = SvgDocument::parse(r#"<svg><rect x="1"/></svg>"#).unwrap();
        let rect = doc.elements()[1];
        doc.set_attribute(rect, "data-note", "a<b");

        let out = doc.serialize().unwrap();
        assert_eq!(out, r#"<svg><rect x="1" data-note="a&lt;b"/></svg>"#);

        let reparsed = SvgDocument::parse(&out).unwrap();
        let rect = reparsed.elements()[1];
        assert_eq!(reparsed.attribute(rect, "data-note").as_deref(), Some("a<b"));
    }

    #[test]
    fn test_single_quoted_value_with_double_quote() {
        let mut doc = SvgDocument::parse(r#"<svg><rect id='say "hi"' x="1"/></svg>"#).unwrap();
        let rect = doc.elements()[1];
        doc.set_attribute(rect, "x", "1.001");

        let reparsed = SvgDocument::parse(&doc.serialize().unwrap()).unwrap();
        let rect = reparsed.elements()[1];
        assert_eq!(reparsed.attribute(rect, "id").as_deref(), Some(r#"say "hi""#));
        assert_eq!(reparsed.attribute(rect, "x").as_deref(), Some("1.001"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            SvgDocument::parse("<svg><rect></svg>"),
            Err(SvgError::Parse { .. })
        ));
        assert!(matches!(
            SvgDocument::parse("just text"),
            Err(SvgError::NoRootElement)
        ));
        assert!(matches!(
            SvgDocument::parse(""),
            Err(SvgError::NoRootElement)
        ));
    }
}
