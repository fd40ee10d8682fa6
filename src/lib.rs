//! tmplkit - key resolution and context configuration for template pipelines
//!
//! tmplkit supplies the lookup, option and context-merging primitives that a
//! view/engine/helper layer builds on. It does not compile or render templates.
//!
//! # Core Modules
//!
//! - [`pattern`] - Glob-based key lookup over mappings (`match_key`, `match_keys`)
//! - [`view`] - Views with synchronised text and binary content
//! - [`templating`] - Helper render contexts from locals and invocation options
//! - [`options`] - Hierarchical options and key renaming for host objects
//! - [`host`] - A ready-made host object with events
//!
//! ## Supporting Modules
//!
//! - [`config`] - TOML configuration for hosts
//! - [`core`] - Error types
//! - [`utils`] - Extension helpers and dotted-path access
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tmplkit::host::App;
//! use tmplkit::options::{KeyRenamer, OptionStore};
//! use tmplkit::pattern::match_key;
//! use tmplkit::view::View;
//!
//! # fn example() -> tmplkit::core::Result<()> {
//! let mut app = App::new();
//! app.set_option("layout", "layouts/default*");
//!
//! let layouts = json!({
//!     "layouts/blog.hbs": "<main>{{ body }}</main>",
//!     "layouts/default.hbs": "<div>{{ body }}</div>",
//! });
//! let pattern = app.option("layout").and_then(|v| v.as_str().map(str::to_string));
//! let layout = match_key(&layouts, pattern.as_deref().unwrap_or("*"), None)?;
//! assert_eq!(layout, Some(&json!("<div>{{ body }}</div>")));
//!
//! let view = View::with_contents("pages/about.hbs", "About us");
//! assert_eq!(app.rename_key(&view.path), "about");
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Everything here is synchronous. Hosts provide no locking; callers that share
//! a host across threads must serialise option writes themselves.

pub mod config;
pub mod core;
pub mod host;
pub mod options;
pub mod pattern;
pub mod templating;
pub mod utils;
pub mod view;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
