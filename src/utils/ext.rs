//! File extension helpers.
//!
//! Engines are registered under extensions with or without a leading dot
//! (`"hbs"`, `".hbs"`). These helpers move between the two spellings. The
//! `*_value` variants accept untyped input and reject anything that is not a
//! string.

use serde_json::Value;

use crate::core::error::json_type_name;
use crate::core::{Result, TmplError};

/// Prefixes `ext` with a `.` unless it already has one.
///
/// # Examples
///
/// ```rust
/// use tmplkit::utils::format_ext;
///
/// assert_eq!(format_ext("hbs"), ".hbs");
/// assert_eq!(format_ext(".hbs"), ".hbs");
/// ```
pub fn format_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Removes a single leading `.` from `ext` if present.
///
/// # Examples
///
/// ```rust
/// use tmplkit::utils::strip_dot;
///
/// assert_eq!(strip_dot(".md"), "md");
/// assert_eq!(strip_dot("md"), "md");
/// ```
pub fn strip_dot(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

/// Untyped [`format_ext`].
///
/// # Errors
///
/// Returns [`TmplError::InvalidExtension`] when `ext` is not a JSON string.
pub fn format_ext_value(ext: &Value) -> Result<String> {
    match ext {
        Value::String(s) => Ok(format_ext(s)),
        other => Err(TmplError::InvalidExtension {
            operation: "format_ext",
            found: json_type_name(other),
        }),
    }
}

/// Untyped [`strip_dot`].
///
/// # Errors
///
/// Returns [`TmplError::InvalidExtension`] when `ext` is not a JSON string.
pub fn strip_dot_value(ext: &Value) -> Result<String> {
    match ext {
        Value::String(s) => Ok(strip_dot(s).to_string()),
        other => Err(TmplError::InvalidExtension {
            operation: "strip_dot",
            found: json_type_name(other),
        }),
    }
}
