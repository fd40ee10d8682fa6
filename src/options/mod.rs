//! Hierarchical options and key renaming for host objects.
//!
//! A host is anything implementing [`Configurable`]: it stores values at
//! dot-delimited paths and emits named events. The extension traits in this
//! module add behaviour on top of that capability without the host having to
//! implement anything else:
//!
//! - [`OptionStore`] reads and writes values under the host's `options.`
//!   namespace and announces every write with an `"option"` event.
//! - [`KeyRenamer`] maps path-like keys to the names views are registered
//!   under, using a transform the host can replace.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tmplkit::host::App;
//! use tmplkit::options::{KeyRenamer, OptionStore};
//!
//! let mut app = App::new();
//! app.set_option("engine.default", ".hbs").enable("cache");
//!
//! assert_eq!(app.option("engine.default"), Some(json!(".hbs")));
//! assert!(app.enabled("cache"));
//! assert_eq!(app.rename_key("templates/pages/home.hbs"), "home");
//! ```

mod rename;
mod store;

pub use rename::{KeyRenamer, RenameFn, RenameStrategy, default_rename_key, identity_rename_key};
pub use store::{OPTION_EVENT, OptionResult, OptionStore};

use serde_json::Value;

/// Capability a host object must provide for [`OptionStore`].
pub trait Configurable {
    /// Returns the value stored at a dotted `path`.
    fn get(&self, path: &str) -> Option<Value>;

    /// Stores `value` at a dotted `path`.
    fn set(&mut self, path: &str, value: Value);

    /// Delivers `event` with `args` to every registered listener before
    /// returning.
    fn emit(&mut self, event: &str, args: &[Value]);

    /// Whether the host accepts batch assignment from a mapping.
    fn supports_visit(&self) -> bool {
        true
    }
}

/// Storage for a host's rename transform.
///
/// Transforms are functions and cannot live in the JSON option tree, so hosts
/// keep them in a dedicated slot.
pub trait RenameSlot {
    /// Returns the configured transform, if one was ever set.
    fn rename_fn(&self) -> Option<RenameFn>;

    /// Replaces the configured transform.
    fn set_rename_fn(&mut self, rename: RenameFn);
}
