//! Extraction: read the planted digits back in slot order.

use serde::{Deserialize, Serialize};

use super::StegoError;
use super::bits::{BITS_PER_CHAR, TERMINATOR, bits_to_message};
use super::numeric::{carried_digit, pattern_for};
use super::traverse::walk;
use crate::debug;
use crate::svg::XmlDocument;

/// How extraction treats a planted digit other than `0` or `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitPolicy {
    /// Anything but `1` reads as bit 0. Compatible with other decoders.
    #[default]
    Lenient,
    /// Digits 2-9 inside the message are reported as corruption.
    Strict,
}

/// Recover the message hidden in `doc`. Read-only.
///
/// Digits other than `1` read as 0. A document that runs out of slots before
/// the terminator yields the characters decoded so far.
pub fn reveal_from_universal<D: XmlDocument>(doc: &D) -> String {
    bits_to_message(&collect_digits(doc))
}

/// Recover the message hidden in `doc` under `policy`.
///
/// # Errors
/// [`StegoError::CorruptDigit`] under [`DigitPolicy::Strict`] when a slot read
/// before the terminator holds a digit other than `0` or `1`.
pub fn reveal_with_policy<D: XmlDocument>(
    doc: &D,
    policy: DigitPolicy,
) -> Result<String, StegoError> {
    let digits = collect_digits(doc);

    if policy == DigitPolicy::Strict {
        check_digits(&digits)?;
    }

    Ok(bits_to_message(&digits))
}

/// Planted digit of every slot, in slot order.
fn collect_digits<D: XmlDocument>(doc: &D) -> String {
    let mut digits = String::new();

    walk(doc, |element, attribute| {
        let Some(value) = doc.attribute(element, attribute) else {
            return;
        };
        for literal in pattern_for(attribute).find_iter(&value) {
            digits.push(carried_digit(literal.as_str()));
        }
    });

    debug!("extract"; "read {} slots", digits.len());
    digits
}

/// Reject digits outside `0`/`1` up to and including the terminator group.
fn check_digits(digits: &str) -> Result<(), StegoError> {
    for (group_index, group) in digits.as_bytes().chunks(BITS_PER_CHAR).enumerate() {
        if let Some(offset) = group.iter().position(|&d| d != b'0' && d != b'1') {
            return Err(StegoError::CorruptDigit {
                slot: group_index * BITS_PER_CHAR + offset,
                digit: char::from(group[offset]),
            });
        }
        if group.len() < BITS_PER_CHAR || group == TERMINATOR.as_bytes() {
            break;
        }
    }
    Ok(())
}
