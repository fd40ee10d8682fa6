//! Small helpers shared by the rest of the crate.
//!
//! # Modules
//!
//! - [`ext`] - File extension normalisation (`format_ext`, `strip_dot`)
//! - [`json_path`] - Dot-delimited lookups and writes into `serde_json` trees
//!
//! # Example
//!
//! ```rust
//! use tmplkit::utils::{format_ext, strip_dot};
//!
//! assert_eq!(format_ext("hbs"), ".hbs");
//! assert_eq!(strip_dot(".hbs"), "hbs");
//! ```

pub mod ext;
pub mod json_path;

pub use ext::{format_ext, format_ext_value, strip_dot, strip_dot_value};
pub use json_path::{deep_merge_json, get_path, set_path};
