//! Generic TOML configuration parsing.
//!
//! [`parse_config`] reads one TOML file into any `DeserializeOwned` type.
//! [`AppConfig::load`](super::AppConfig::load) is built on it, and callers
//! with their own settings structs can use it directly.
//!
//! # Features
//!
//! - **Any target type**: the same reader serves host config and caller-defined
//!   structs
//! - **Path context**: every failure names the file it came from
//! - **Two failure stages**: reading and parsing are reported separately
//!
//! # Error Handling
//!
//! Errors are [`anyhow::Error`] values with the path attached as context. A
//! missing or unreadable file reports `Failed to read config file: <path>`;
//! malformed TOML, or TOML that does not fit `T`, reports
//! `Failed to parse config file: <path>`. The I/O or TOML error underneath is
//! kept as the cause:
//!
//! ```text
//! Failed to parse config file: /srv/site/tmplkit.toml
//!
//! Caused by:
//!     invalid type: integer `3`, expected a string
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use tmplkit::config::parse_config;
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Deserialize)]
//! struct Settings {
//!     layout: String,
//! }
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings: Settings = parse_config(Path::new("tmplkit.toml"))?;
//! println!("Default layout: {}", settings.layout);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Reads and deserializes a TOML file, attaching the path to any error.
///
/// # Errors
///
/// Returns an error if the file cannot be read, if it is not valid TOML, or
/// if its contents do not deserialize into `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
