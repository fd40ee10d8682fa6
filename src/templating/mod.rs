//! Templating support for helper invocations.
//!
//! This module prepares the data a render engine consumes. It does not compile
//! or render templates itself; [`to_tera_context`] hands a resolved context to
//! Tera, which does.
//!
//! # Helper Contexts
//!
//! Helpers receive ambient `locals` plus invocation `options` whose `hash`
//! member carries keyword arguments from the call site:
//!
//! ```text
//! {{ button label="Save" }}   ->   options = { "hash": { "label": "Save" } }
//! ```
//!
//! [`get_locals`] merges the two according to the precedence rules documented
//! in [`context`].
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tmplkit::templating::{get_locals, to_tera_context, ContextSource};
//!
//! # fn example() -> tmplkit::core::Result<()> {
//! let locals = ContextSource::from_value(&json!({ "label": "Cancel", "size": "sm" }));
//! let options = ContextSource::from_value(&json!({ "hash": { "label": "Save" } }));
//!
//! let context = get_locals(Some(&locals), Some(&options));
//! let tera_ctx = to_tera_context(&context)?;
//! let html = tera::Tera::one_off("<b class=\"{{ size }}\">{{ label }}</b>", &tera_ctx, false)?;
//! assert_eq!(html, "<b class=\"sm\">Save</b>");
//! # Ok(())
//! # }
//! ```

pub mod context;

pub use context::{ContextSource, get_locals, get_locals_from_values, to_tera_context};
