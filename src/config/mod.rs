//! Configuration management for `svgstego.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError
//! ├── section    # [codec] and [output]
//! ├── util       # config file lookup, directory resolution
//! └── mod.rs     # StegoConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `[codec]`  | Digit policy used by `reveal`                    |
//! | `[output]` | Naming, location and overwrite rules for `hide`  |
//!
//! The file is optional. Without one every field takes its default.

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{CodecConfig, OutputConfig};
pub use util::find_config_file;

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing svgstego.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Codec settings
    pub codec: CodecConfig,

    /// Output file settings
    pub output: OutputConfig,
}

impl StegoConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing file yields
    /// the defaults. Command flags are applied on top, then the result is
    /// validated.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let base = match &config.config_path {
            Some(path) => path.parent().map(Path::to_path_buf).unwrap_or_default(),
            None => std::env::current_dir().context("Failed to get current working directory")?,
        };
        config.normalize_paths(&base);
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Hide { args } => {
                self.output.overwrite |= args.force;
            }
            Commands::Reveal { args } => {
                if args.strict {
                    self.codec.digits = crate::stego::DigitPolicy::Strict;
                }
            }
            // Capacity is read-only and has no tunables
            Commands::Capacity { .. } => {}
        }
    }

    /// Resolve `output.dir` (tilde, relative paths) against `base`.
    fn normalize_paths(&mut self, base: &Path) {
        if let Some(dir) = self.output.dir.take() {
            self.output.dir = Some(util::resolve_dir(&dir, base));
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate()
    }
}

// ============================================================================
// tests
// ============================================================================
