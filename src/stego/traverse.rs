//! Deterministic slot traversal.
//!
//! Capacity counting, embedding and extraction all walk the same sequence of
//! `(element, attribute)` pairs:
//!
//! 1. elements in document order
//! 2. per element, the carrier attributes of its tag in [`TARGETS`] order
//!    (never source or hash-map order)
//! 3. attributes the element lacks, or that are blacklisted, are skipped
//!
//! Changing [`TARGETS`] or [`BLACKLIST`] breaks every previously encoded file.

use crate::svg::XmlDocument;

/// Carrier attributes per lowercase tag name.
pub const TARGETS: &[(&str, &[&str])] = &[
    ("path", &["d"]),
    ("circle", &["cx", "cy", "r"]),
    ("ellipse", &["cx", "cy", "rx", "ry"]),
    ("rect", &["x", "y", "width", "height", "rx", "ry"]),
    ("line", &["x1", "y1", "x2", "y2"]),
    ("polyline", &["points"]),
    ("polygon", &["points"]),
];

/// Attributes that never carry bits, whatever the tag.
pub const BLACKLIST: &[&str] = &[
    "viewBox",
    "version",
    "stroke-width",
    "opacity",
    "xmlns",
    "fill",
    "stroke",
    "encoding",
];

/// One visited `(element, attribute)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<E> {
    pub element: E,
    pub attribute: &'static str,
}

/// Carrier attributes of `tag`, in visiting order.
pub fn carrier_attributes(tag: &str) -> Option<&'static [&'static str]> {
    TARGETS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, attributes)| *attributes)
}

/// Exact-name blacklist check.
#[inline]
pub fn is_blacklisted(attribute: &str) -> bool {
    BLACKLIST.contains(&attribute)
}

/// Visit every carrier attribute of `doc` in slot order.
pub fn walk<D, F>(doc: &D, mut visit: F)
where
    D: XmlDocument,
    F: FnMut(D::Element, &'static str),
{
    for element in doc.elements() {
        let Some(attributes) = carrier_attributes(&doc.tag_name(element)) else {
            continue;
        };
        for &attribute in attributes {
            if doc.has_attribute(element, attribute) && !is_blacklisted(attribute) {
                visit(element, attribute);
            }
        }
    }
}

/// Collect the [`walk`] sequence, for passes that mutate the document.
pub fn targets<D: XmlDocument>(doc: &D) -> Vec<Target<D::Element>> {
    let mut targets = Vec::new();
    walk(doc, |element, attribute| targets.push(Target { element, attribute }));
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::{SvgDocument, SvgError};
    use std::borrow::Cow;
    use std::collections::HashMap;

    /// Document whose attributes live in hash maps, so any dependence on
    /// storage order would show up as flaky visiting order.
    struct MapDocument {
        elements: Vec<(String, HashMap<String, String>)>,
    }

    impl MapDocument {
        fn new(elements: Vec<(&str, Vec<(&str, &str)>)>) -> Self {
            Self {
                elements: elements
                    .into_iter()
                    .map(|(tag, attrs)| {
                        let attrs = attrs
                            .into_iter()
                            .map(|(k, v)| (k.to_string(), v.to_string()))
                            .collect();
                        (tag.to_string(), attrs)
                    })
                    .collect(),
            }
        }
    }

    impl XmlDocument for MapDocument {
        type Element = usize;

        fn elements(&self) -> Vec<usize> {
            (0..self.elements.len()).collect()
        }

        fn tag_name(&self, element: usize) -> Cow<'_, str> {
            Cow::Owned(self.elements[element].0.to_lowercase())
        }

        fn has_attribute(&self, element: usize, name: &str) -> bool {
            self.elements[element].1.contains_key(name)
        }

        fn attribute(&self, element: usize, name: &str) -> Option<Cow<'_, str>> {
            self.elements[element].1.get(name).map(|v| Cow::Borrowed(v.as_str()))
        }

        fn set_attribute(&mut self, element: usize, name: &str, value: &str) {
            self.elements[element].1.insert(name.to_string(), value.to_string());
        }

        fn serialize(&self) -> Result<String, SvgError> {
            Ok(String::new())
        }
    }

    fn visited<D: XmlDocument>(doc: &D) -> Vec<(D::Element, &'static str)> {
        targets(doc)
            .into_iter()
            .map(|t| (t.element, t.attribute))
            .collect()
    }

    #[test]
    fn test_attribute_order_follows_table() {
        let doc = SvgDocument::parse(
            r#"<svg><rect ry="1" height="4" x="1" width="3" y="2" rx="1"/></svg>"#,
        )
        .unwrap();
        let attrs: Vec<_> = visited(&doc).into_iter().map(|(_, a)| a).collect();
        assert_eq!(attrs, ["x", "y", "width", "height", "rx", "ry"]);
    }

    #[test]
    fn test_order_independent_of_map_storage() {
        let doc = MapDocument::new(vec![
            ("ellipse", vec![("ry", "4"), ("cx", "1"), ("rx", "3"), ("cy", "2")]),
            ("LINE", vec![("y2", "1"), ("x1", "1"), ("x2", "1"), ("y1", "1")]),
        ]);
        for _ in 0..8 {
            assert_eq!(
                visited(&doc),
                [
                    (0, "cx"),
                    (0, "cy"),
                    (0, "rx"),
                    (0, "ry"),
                    (1, "x1"),
                    (1, "y1"),
                    (1, "x2"),
                    (1, "y2"),
                ]
            );
        }
    }

    #[test]
    fn test_skips_untargeted_elements_and_attributes() {
        let doc = SvgDocument::parse(concat!(
            r#"<svg viewBox="0 0 10 10" width="10">"#,
            r#"<g x="5"><text x="1" y="2">t</text></g>"#,
            r#"<circle cx="1" fill="red" stroke-width="2"/>"#,
            r#"<polygon points="0,0 1,1"/><path fill="none"/>"#,
            "</svg>",
        ))
        .unwrap();
        let attrs: Vec<_> = visited(&doc).into_iter().map(|(_, a)| a).collect();
        assert_eq!(attrs, ["cx", "points"]);
    }

    #[test]
    fn test_elements_in_document_order() {
        let doc = SvgDocument::parse(concat!(
            r#"<svg><g><circle r="1"/><g><line x1="1"/></g></g>"#,
            r#"<polyline points="1 2"/></svg>"#,
        ))
        .unwrap();
        let tags: Vec<_> = visited(&doc)
            .into_iter()
            .map(|(el, _)| doc.tag_name(el).into_owned())
            .collect();
        assert_eq!(tags, ["circle", "line", "polyline"]);
    }

    #[test]
    fn test_blacklist() {
        for name in BLACKLIST {
            assert!(is_blacklisted(name));
        }
        assert!(!is_blacklisted("viewbox"));
        assert!(!is_blacklisted("x"));
        assert_eq!(carrier_attributes("rect").map(<[_]>::len), Some(6));
        assert_eq!(carrier_attributes("text"), None);
    }
}
