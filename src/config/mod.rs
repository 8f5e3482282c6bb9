//! Configuration system for jqxpath.
//!
//! This module provides the configuration structure for jqxpath with sensible defaults
//! and support for serialization/deserialization via serde. Configuration is loaded
//! from a TOML file and merged with command-line arguments, which take precedence.
//!
//! # Example
//!
//! ```
//! use jqxpath::config::Config;
//! use jqxpath::report::OutputFormat;
//! use jqxpath::RootMode;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.root_mode, RootMode::AbsoluteFromRoot);
//! assert_eq!(config.output_format, OutputFormat::Plain);
//!
//! // Create custom configuration
//! let custom = Config {
//!     root_mode: RootMode::AbsoluteAnywhere,
//!     keep_going: true,
//!     ..Config::default()
//! };
//! assert!(custom.keep_going);
//! ```

use crate::report::OutputFormat;
use crate::xpath::RootMode;
use serde::{Deserialize, Serialize};

/// Configuration for the jqxpath command-line tool.
///
/// # Fields
///
/// * `root_mode` - Leading marker of generated paths: "relative", "root" or "anywhere" (default: "root")
/// * `output_format` - "plain" or "json" (default: "plain")
/// * `keep_going` - Continue converting after a failing selector (default: false)
/// * `echo_selector` - Print `selector => xpath` in plain output (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Leading marker of generated paths
    #[serde(default)]
    pub root_mode: RootMode,

    /// Output format for conversion results
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Continue after a selector fails to convert
    #[serde(default)]
    pub keep_going: bool,

    /// Print the selector next to its XPath in plain output
    #[serde(default)]
    pub echo_selector: bool,
}

impl Default for Config {
    /// Creates a new configuration with default values.
    ///
    /// # Default Values
    ///
    /// * `root_mode`: `RootMode::AbsoluteFromRoot`
    /// * `output_format`: `OutputFormat::Plain`
    /// * `keep_going`: false
    /// * `echo_selector`: false
    fn default() -> Self {
        Self {
            root_mode: RootMode::default(),
            output_format: OutputFormat::default(),
            keep_going: false,
            echo_selector: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jqxpath/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jqxpath");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults on any error.
    pub fn load_from(path: &std::path::Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("ignoring invalid config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_mode_default() {
        let config = Config::default();
        assert_eq!(config.root_mode, RootMode::AbsoluteFromRoot);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("keep_going = true").unwrap();
        assert!(config.keep_going);
        assert_eq!(config.root_mode, RootMode::AbsoluteFromRoot);
        assert_eq!(config.output_format, OutputFormat::Plain);
    }
}
