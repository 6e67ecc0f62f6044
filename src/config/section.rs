//! `[codec]` and `[output]` sections.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;
use crate::stego::DigitPolicy;

/// `[codec]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// How `reveal` treats planted digits other than 0 and 1.
    pub digits: DigitPolicy,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Appended to the input file stem to name `hide` output.
    pub suffix: String,

    /// Directory for `hide` output. Defaults to the input's directory.
    pub dir: Option<PathBuf>,

    /// Replace existing output files.
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: ".stego".into(),
            dir: None,
            overwrite: false,
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix.is_empty() {
            return Err(ConfigError::Validation(
                "`output.suffix` must not be empty".into(),
            ));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "`output.suffix` must not contain a path separator: {:?}",
                self.suffix
            )));
        }
        Ok(())
    }
}
