//! Configuration system for x12path.
//!
//! Settings live in `~/.config/x12path/config.toml`. Every field has a
//! default, so a partial file (or no file at all) is fine. Command-line
//! flags override what the file says.
//!
//! # Example
//!
//! ```
//! use x12path::config::Config;
//! use x12path::report::OutputFormat;
//!
//! let config = Config::default();
//! assert!(!config.strict);
//! assert_eq!(config.output, OutputFormat::Text);
//!
//! let custom = Config {
//!     strict: true,
//!     ..Config::default()
//! };
//! assert!(custom.parse_options().trailing_token == x12path::path::TrailingTokenMode::Strict);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::path::ParseOptions;
use crate::report::OutputFormat;

/// Configuration for the x12path tool.
///
/// * `strict` - Reject paths whose trailing token is not a reference (default: false)
/// * `output` - Report format: "text", "json" or "yaml" (default: "text")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Reject unrecognized trailing tokens instead of treating them as loop ids
    #[serde(default)]
    pub strict: bool,

    /// Report format for parsed paths
    #[serde(default)]
    pub output: OutputFormat,
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/x12path/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("x12path");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                Self::default()
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read config file");
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Parser options implied by this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        if self.strict {
            ParseOptions::strict()
        } else {
            ParseOptions::default()
        }
    }
}
