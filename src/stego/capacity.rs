//! Capacity analysis.
//!
//! Every numeric literal in a carrier attribute is one slot, and one slot
//! holds one bit. A message of `n` characters needs `8 * (n + 1)` slots
//! (the extra byte is the terminator).

use serde::Serialize;

use super::bits::BITS_PER_CHAR;
use super::numeric::slot_count;
use super::traverse::walk;
use crate::svg::XmlDocument;

/// Total number of embedding slots in `doc`. Read-only.
pub fn capacity_check<D: XmlDocument>(doc: &D) -> usize {
    let mut slots = 0;
    walk(doc, |element, attribute| {
        if let Some(value) = doc.attribute(element, attribute) {
            slots += slot_count(attribute, &value);
        }
    });
    slots
}

/// Detailed capacity figures for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacityReport {
    /// Embedding slots (bits).
    pub slots: usize,
    /// Elements with at least one visited carrier attribute.
    pub elements: usize,
    /// Visited carrier attributes.
    pub attributes: usize,
    /// Longest message, in characters, that fits.
    pub max_message_len: usize,
}

impl CapacityReport {
    /// Whether a message of `len` characters fits.
    pub fn fits(&self, len: usize) -> bool {
        required_bits(len) <= self.slots
    }
}

/// Bits needed for a message of `len` characters, terminator included.
#[inline]
pub fn required_bits(len: usize) -> usize {
    (len + 1) * BITS_PER_CHAR
}

/// Build a [`CapacityReport`] for `doc`.
pub fn capacity_report<D>(doc: &D) -> CapacityReport
where
    D: XmlDocument,
    D::Element: PartialEq,
{
    let mut slots = 0;
    let mut attributes = 0;
    let mut elements = 0;
    let mut last = None;

    walk(doc, |element, attribute| {
        attributes += 1;
        if last != Some(element) {
            elements += 1;
            last = Some(element);
        }
        if let Some(value) = doc.attribute(element, attribute) {
            slots += slot_count(attribute, &value);
        }
    });

    CapacityReport {
        slots,
        elements,
        attributes,
        max_message_len: (slots / BITS_PER_CHAR).saturating_sub(1),
    }
}
