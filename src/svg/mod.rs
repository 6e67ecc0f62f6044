//! XML/SVG document model.
//!
//! The codec never touches XML syntax directly. It works through the small
//! [`XmlDocument`] trait, which exposes exactly what a steganographic pass
//! needs: a flat element list in document order, tag names, and string
//! attribute access.
//!
//! # Modules
//!
//! - `document`: [`SvgDocument`], a quick-xml backed implementation that keeps
//!   everything it does not understand byte-for-byte
//! - `error`: [`SvgError`]
//!
//! # Round trip
//!
//! ```text
//! SVG text
//!     │  SvgDocument::parse
//!     ▼
//! ┌─────────────┐
//! │ element list │ ──► codec reads / rewrites attribute values
//! └──────┬──────┘
//!        │  SvgDocument::serialize
//!        ▼
//! SVG text (only rewritten values differ)
//! ```

mod document;
mod error;

use std::borrow::Cow;

pub use document::{ElementId, SvgDocument};
pub use error::SvgError;

/// Mutable view of a parsed XML document.
///
/// Element handles are cheap copies. They stay valid for the lifetime of the
/// document because no implementation adds or removes elements.
pub trait XmlDocument {
    /// Opaque element handle.
    type Element: Copy;

    /// Every element of the document, in document (depth-first) order.
    fn elements(&self) -> Vec<Self::Element>;

    /// Lowercase tag name of `element`.
    fn tag_name(&self, element: Self::Element) -> Cow<'_, str>;

    /// Whether `element` carries attribute `name`.
    fn has_attribute(&self, element: Self::Element, name: &str) -> bool;

    /// Current (unescaped) value of attribute `name`.
    fn attribute(&self, element: Self::Element, name: &str) -> Option<Cow<'_, str>>;

    /// Replace the value of attribute `name`, adding it when absent.
    fn set_attribute(&mut self, element: Self::Element, name: &str, value: &str);

    /// Serialize the whole document back to XML text.
    fn serialize(&self) -> Result<String, SvgError>;
}
