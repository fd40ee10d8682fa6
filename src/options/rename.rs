//! Path-to-key renaming.
//!
//! Views are usually loaded from files but registered under short names. The
//! rename transform decides that mapping; by default it keeps the file stem.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::store::OPTION_EVENT;
use super::{Configurable, RenameSlot};

/// A rename transform.
pub type RenameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Option name announced when the transform is replaced.
const RENAME_OPTION: &str = "renameKey";

/// Strips the directory and extension from a path-like key.
///
/// Keys without a file stem (such as `"/"`) rename to the empty string.
///
/// ```rust
/// use tmplkit::options::default_rename_key;
///
/// assert_eq!(default_rename_key("/tmp/foo/bar.hbs"), "bar");
/// assert_eq!(default_rename_key("partials/nav"), "nav");
/// ```
pub fn default_rename_key(key: &str) -> String {
    Path::new(key).file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Returns `key` unchanged.
pub fn identity_rename_key(key: &str) -> String {
    key.to_string()
}

fn basename_rename_key(key: &str) -> String {
    Path::new(key).file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Built-in transforms selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameStrategy {
    /// File name without directory or extension
    #[default]
    Stem,
    /// File name with its extension
    Basename,
    /// The key unchanged
    Identity,
}

impl RenameStrategy {
    /// Returns the transform for this strategy.
    pub fn to_fn(self) -> RenameFn {
        match self {
            Self::Stem => Arc::new(default_rename_key),
            Self::Basename => Arc::new(basename_rename_key),
            Self::Identity => Arc::new(identity_rename_key),
        }
    }
}

/// Key renaming for any host with a [`RenameSlot`].
pub trait KeyRenamer: Configurable + RenameSlot {
    /// Replaces the host's transform and announces it as the `renameKey`
    /// option.
    fn set_rename_key<F>(&mut self, rename: F) -> &mut Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
        Self: Sized,
    {
        debug!("Replacing rename transform");
        self.set_rename_fn(Arc::new(rename));
        self.emit(OPTION_EVENT, &[Value::String(RENAME_OPTION.to_string())]);
        self
    }

    /// Applies the host's transform to `key`, or returns `key` unchanged if
    /// no transform was ever configured.
    fn rename_key(&self, key: &str) -> String {
        match self.rename_fn() {
            Some(rename) => rename(key),
            None => identity_rename_key(key),
        }
    }

    /// Applies `rename` to `key`, bypassing the host's transform.
    fn rename_key_with(&self, key: &str, rename: &dyn Fn(&str) -> String) -> String {
        rename(key)
    }

    /// Returns the transform [`rename_key`](Self::rename_key) would use.
    fn rename_key_fn(&self) -> RenameFn {
        self.rename_fn().unwrap_or_else(|| {
            let identity: RenameFn = Arc::new(identity_rename_key);
            identity
        })
    }
}

impl<T: Configurable + RenameSlot + ?Sized> KeyRenamer for T {}
