//! Embedding: plant the bitstream into numeric literals.

use regex::Captures;

use super::StegoError;
use super::bits::message_to_bits;
use super::capacity::capacity_check;
use super::numeric::{pattern_for, plant_bit};
use super::traverse::targets;
use crate::debug;
use crate::svg::XmlDocument;

/// Hide `message` in `doc` and return the serialized result.
///
/// Capacity is recounted on the document every call. Literals are rewritten
/// in slot order until the bitstream (terminator included) is used up; later
/// literals stay exactly as written.
///
/// `doc` is modified in place. On error it is left untouched.
///
/// # Errors
/// - [`StegoError::UnsupportedCharacter`] for characters above U+00FF
/// - [`StegoError::CapacityExceeded`] when the bitstream does not fit
/// - [`StegoError::Svg`] when serialization fails
pub fn hide_in_universal<D: XmlDocument>(doc: &mut D, message: &str) -> Result<String, StegoError> {
    let bits = message_to_bits(message)?;
    let available = capacity_check(doc);

    debug!("embed"; "{} bits to plant, {} slots available", bits.len(), available);

    if bits.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: bits.len(),
            available,
        });
    }

    let mut pending = bits.chars();
    let mut planted = 0usize;

    for target in targets(doc) {
        let rewritten = {
            let Some(value) = doc.attribute(target.element, target.attribute) else {
                continue;
            };
            let replaced =
                pattern_for(target.attribute).replace_all(&value, |caps: &Captures| {
                    match pending.next() {
                        Some(bit) => {
                            planted += 1;
                            plant_bit(&caps[0], bit)
                        }
                        None => caps[0].to_string(),
                    }
                });
            (replaced != value).then(|| replaced.into_owned())
        };

        if let Some(rewritten) = rewritten {
            doc.set_attribute(target.element, target.attribute, &rewritten);
        }
    }

    debug!("embed"; "planted {} bits", planted);

    Ok(doc.serialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::SvgDocument;

    #[test]
    fn test_embed_rewrites_in_slot_order() {
        // 16 bits for "A": 01000001 00000000
        let mut doc = SvgDocument::parse(concat!(
            "<svg>",
            r#"<rect x="1" y="2" width="3" height="4"/>"#,
            r#"<polyline points="5 6 7 8 9 10 11 12 13 14 15 16 17 18"/>"#,
            "</svg>",
        ))
        .unwrap();

        let out = hide_in_universal(&mut doc, "A").unwrap();
        assert_eq!(
            out,
            concat!(
                "<svg>",
                r#"<rect x="1.000" y="2.001" width="3.000" height="4.000"/>"#,
                r#"<polyline points="5.000 6.000 7.000 8.001 9.000 10.000 11.000 12.000 "#,
                r#"13.000 14.000 15.000 16.000 17 18"/>"#,
                "</svg>",
            )
        );
    }

    #[test]
    fn test_unused_slots_stay_verbatim() {
        let src = r#"<svg><polygon points="0.5,1.25 2,3 4,5 6,7 8,9 10,11 12,13 14.75,15.125"/></svg>"#;
        let mut doc = SvgDocument::parse(src).unwrap();
        let out = hide_in_universal(&mut doc, "").unwrap();
        // Eight terminator bits use the first eight literals only.
        assert!(out.contains("0.500,1.250 2.000,3.000 4.000,5.000 6.000,7.000 8,9"));
        assert!(out.ends_with(r#"14.75,15.125"/></svg>"#));
    }

    #[test]
    fn test_non_numeric_text_preserved() {
        let mut doc = SvgDocument::parse(concat!(
            r#"<svg><path d="M10 20 L30.5 40 C1.5,2.5 3.5,4.5 5.5,6.5 7.5,8.5 z"/></svg>"#,
        ))
        .unwrap();
        let out = hide_in_universal(&mut doc, "").unwrap();
        assert!(out.contains(
            r#"d="M10 20 L30.500 40 C1.500,2.500 3.500,4.500 5.500,6.500 7.500,8.5 z""#
        ));
    }

    #[test]
    fn test_capacity_exceeded_leaves_document_untouched() {
        let src = r#"<svg><rect x="1" y="2" width="3" height="4" rx="5" ry="6"/><circle r="7"/></svg>"#;
        let mut doc = SvgDocument::parse(src).unwrap();
        assert_eq!(capacity_check(&doc), 7);

        match hide_in_universal(&mut doc, "") {
            Err(StegoError::CapacityExceeded {
                required,
                available,
            }) => {
                assert_eq!(required, 8);
                assert_eq!(available, 7);
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
        assert_eq!(doc.serialize().unwrap(), src);
    }

    #[test]
    fn test_unsupported_character_leaves_document_untouched() {
        let src = r#"<svg><polyline points="1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16"/></svg>"#;
        let mut doc = SvgDocument::parse(src).unwrap();
        assert!(matches!(
            hide_in_universal(&mut doc, "\u{3b1}"),
            Err(StegoError::UnsupportedCharacter { .. })
        ));
        assert_eq!(doc.serialize().unwrap(), src);
    }

    #[test]
    fn test_viewbox_never_altered() {
        let mut doc = SvgDocument::parse(concat!(
            r#"<svg viewBox="0 0 10 10">"#,
            r#"<rect viewBox="0 0 10 10" x="1" y="2" width="3" height="4"/>"#,
            r#"<polyline points="1 2 3 4"/>"#,
            "</svg>",
        ))
        .unwrap();
        let out = hide_in_universal(&mut doc, "").unwrap();
        assert_eq!(out.matches(r#"viewBox="0 0 10 10""#).count(), 2);
    }
}
