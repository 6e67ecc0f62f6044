//! Steganographic codec for numeric SVG attributes.
//!
//! A message is turned into a bitstream ([`bits`]) and planted one bit per
//! numeric literal: the literal is normalized to three decimals and its last
//! digit becomes the bit ([`numeric`]). Which literals carry bits, and in what
//! order, is fixed by the traversal ([`traverse`]).
//!
//! | Module     | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `bits`     | message ⇄ bitstream, NUL-byte terminator        |
//! | `numeric`  | literal patterns, `toFixed(3)` normalization    |
//! | `traverse` | target table, blacklist, slot order             |
//! | `capacity` | slot counting and capacity reports              |
//! | `embed`    | [`hide_in_universal`]                           |
//! | `extract`  | [`reveal_from_universal`], [`reveal_with_policy`] |
//!
//! # Example
//!
//! ```
//! use svgstego::stego::{hide_in_universal, reveal_from_universal};
//! use svgstego::svg::SvgDocument;
//!
//! let points = (0..24).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
//! let cover = format!(r#"<svg><polyline points="{points}"/></svg>"#);
//!
//! let mut doc = SvgDocument::parse(&cover).unwrap();
//! let stego = hide_in_universal(&mut doc, "hi").unwrap();
//!
//! let doc = SvgDocument::parse(&stego).unwrap();
//! assert_eq!(reveal_from_universal(&doc), "hi");
//! ```

pub mod bits;
pub mod capacity;
mod embed;
mod error;
mod extract;
pub mod numeric;
pub mod traverse;


pub use bits::{bits_to_message, message_to_bits};
pub use capacity::{CapacityReport, capacity_check, capacity_report};
pub use embed::hide_in_universal;
pub use error::StegoError;
pub use extract::{DigitPolicy, reveal_from_universal, reveal_with_policy};
pub use traverse::walk;
