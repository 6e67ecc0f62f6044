//! Error types for the codec.

use thiserror::Error;

use crate::svg::SvgError;

/// Errors that can occur while hiding or revealing a message.
#[derive(Debug, Error)]
pub enum StegoError {
    /// The message needs more bits than the document has numeric slots.
    #[error("message needs {required} bits but the document only has {available} slots")]
    CapacityExceeded { required: usize, available: usize },

    /// The message holds a character whose code point does not fit in one byte.
    #[error("character {ch:?} at position {index} does not fit in a single byte")]
    UnsupportedCharacter { ch: char, index: usize },

    /// Strict extraction found a slot whose planted digit is neither 0 nor 1.
    #[error("slot {slot} carries digit {digit:?}, expected '0' or '1'")]
    CorruptDigit { slot: usize, digit: char },

    #[error(transparent)]
    Svg(#[from] SvgError),
}
