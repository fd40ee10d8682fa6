//! Host configuration loaded from TOML.
//!
//! ```toml
//! # tmplkit.toml
//! rename = "basename"
//!
//! [options]
//! layout = "default"
//!
//! [options.engine]
//! default = ".hbs"
//! cache = true
//! ```

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::parse_config;
use crate::core::Result;
use crate::options::RenameStrategy;

/// Initial state for a [`crate::host::App`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Seed values for the host's `options` tree
    #[serde(default)]
    pub options: Map<String, Value>,

    /// Built-in rename transform to install
    #[serde(default)]
    pub rename: RenameStrategy,
}

impl AppConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::core::TmplError::ConfigParse`] if the text is not
    /// valid TOML or does not fit the expected shape.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        debug!("Parsed config with {} top-level options", config.options.len());
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing `[options]` or `rename` entries fall back to their defaults,
    /// so an empty file yields [`AppConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns an error naming `path` if the file cannot be read, is not valid
    /// TOML, or has an unknown `rename` strategy. See
    /// [`parse_config`](super::parse_config) for the message format.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        debug!("Loading config from {}", path.display());
        parse_config(path)
    }
}
