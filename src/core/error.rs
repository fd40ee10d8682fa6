//! Error handling for tmplkit.
//!
//! Failures fall into two tiers. Malformed calls (a non-string extension, an
//! option key that is neither a string nor a mapping, an unparseable glob) are
//! reported through [`TmplError`] and should be fixed at the call site. Expected
//! absence (no matching key, an unrecognised content kind) is never an error and
//! is encoded in return values instead.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = TmplError> = std::result::Result<T, E>;

/// The error type for tmplkit operations.
///
/// # Examples
///
/// ```rust
/// use tmplkit::core::TmplError;
/// use tmplkit::utils::format_ext_value;
/// use serde_json::json;
///
/// let err = format_ext_value(&json!(3)).unwrap_err();
/// assert!(matches!(err, TmplError::InvalidExtension { .. }));
/// ```
#[derive(Error, Debug)]
pub enum TmplError {
    /// An argument had a shape the operation does not accept
    ///
    /// Raised by the untyped option dispatcher when the key is neither a
    /// string nor a mapping.
    #[error("Invalid argument for `{operation}`: expected {expected}, got {found}")]
    InvalidArgument {
        /// The operation that rejected the argument
        operation: &'static str,
        /// Description of the accepted shapes
        expected: &'static str,
        /// JSON type name of the rejected value
        found: &'static str,
    },

    /// A file extension was not given as a string
    #[error("Expected `{operation}` to receive a string extension, got {found}")]
    InvalidExtension {
        /// `format_ext` or `strip_dot`
        operation: &'static str,
        /// JSON type name of the rejected value
        found: &'static str,
    },

    /// A glob pattern could not be compiled
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as written by the caller
        pattern: String,
        /// The underlying glob error
        source: glob::PatternError,
    },

    /// Batch configuration was requested on a host that cannot visit mappings
    #[error("Host does not support batch option assignment")]
    VisitUnsupported,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Template engine error
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Returns the JSON type name of a value for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
