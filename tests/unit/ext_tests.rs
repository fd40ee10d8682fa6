//! Unit tests for extension helpers.

use serde_json::json;
use tmplkit::core::TmplError;
use tmplkit::utils::{format_ext, format_ext_value, strip_dot, strip_dot_value};

#[test]
fn format_ext_is_idempotent() {
    assert_eq!(format_ext("hbs"), ".hbs");
    assert_eq!(format_ext(&format_ext("hbs")), ".hbs");
}

#[test]
fn strip_dot_inverts_format_ext() {
    for ext in ["md", "hbs", "tmpl.html"] {
        assert_eq!(strip_dot(&format_ext(ext)), ext);
    }
}

#[test]
fn untyped_helpers_fail_on_non_strings() {
    assert!(matches!(format_ext_value(&json!(3)), Err(TmplError::InvalidExtension { .. })));
    assert!(matches!(strip_dot_value(&json!(["md"])), Err(TmplError::InvalidExtension { .. })));
    assert_eq!(format_ext_value(&json!(".hbs")).unwrap(), ".hbs");
}
