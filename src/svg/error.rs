//! Document model error types.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Failures while reading or writing an XML document.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("XML parse error at position {position}")]
    Parse {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute list")]
    Attribute(#[from] AttrError),

    #[error("document contains no element")]
    NoRootElement,

    #[error("failed to write XML: {0}")]
    Serialize(String),
}
