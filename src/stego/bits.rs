//! Message ⇄ bitstream conversion.
//!
//! A bitstream is a string of `'0'`/`'1'` characters: every message character
//! contributes its code point as 8 big-endian binary digits, and the stream
//! closes with one all-zero byte. The terminator is indistinguishable from an
//! encoded NUL, so a message containing `'\0'` decodes only up to that point.

use super::StegoError;

/// End-of-message marker.
pub const TERMINATOR: &str = "00000000";

/// Bits per message character.
pub const BITS_PER_CHAR: usize = 8;

/// Encode `message` as a terminated bitstream.
///
/// # Errors
/// [`StegoError::UnsupportedCharacter`] for characters above U+00FF.
pub fn message_to_bits(message: &str) -> Result<String, StegoError> {
    let mut bits = String::with_capacity((message.len() + 1) * BITS_PER_CHAR);

    for (index, ch) in message.chars().enumerate() {
        let code = u8::try_from(u32::from(ch))
            .map_err(|_| StegoError::UnsupportedCharacter { ch, index })?;
        bits.push_str(&format!("{code:08b}"));
    }

    bits.push_str(TERMINATOR);
    Ok(bits)
}

/// Decode a bitstream produced by [`message_to_bits`].
///
/// Stops at the first terminator or at a trailing group shorter than 8 bits,
/// whichever comes first, so a truncated stream yields whatever characters it
/// fully contains. Any digit other than `'1'` reads as 0.
pub fn bits_to_message(bits: &str) -> String {
    let mut message = String::new();

    for group in bits.as_bytes().chunks(BITS_PER_CHAR) {
        if group.len() < BITS_PER_CHAR || group == TERMINATOR.as_bytes() {
            break;
        }
        let code = group
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit == b'1'));
        message.push(char::from(code));
    }

    message
}
