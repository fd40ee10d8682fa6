//! Render context construction for helper invocations.
//!
//! When a helper is invoked it receives two context-like mappings: the ambient
//! `locals` and the invocation `options`. Either may carry a `hash` member
//! holding the keyword arguments written at the call site. [`get_locals`]
//! folds the two into the flat mapping the helper renders with:
//!
//! 1. `options` carries a hash: start from `locals`, then apply `options.hash`
//!    (hash entries win).
//! 2. otherwise, `locals` carries a hash: the context is exactly `locals.hash`
//!    and `options` is ignored.
//! 3. otherwise: start from `options`, then apply `locals` (locals win).
//!
//! All merges are shallow.

use serde_json::{Map, Value};
use tera::Context as TeraContext;
use tracing::trace;

use crate::core::Result;

/// Name of the member holding call-site keyword arguments.
const HASH_KEY: &str = "hash";

/// A context-like mapping, classified by whether it carries a hash.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextSource {
    /// A mapping without a `hash` member
    Plain(Map<String, Value>),
    /// A mapping whose `hash` member is itself a mapping
    WithHash {
        /// Every member except `hash`
        fields: Map<String, Value>,
        /// The `hash` member
        hash: Map<String, Value>,
    },
}

impl Default for ContextSource {
    fn default() -> Self {
        Self::Plain(Map::new())
    }
}

impl ContextSource {
    /// Classifies a mapping.
    ///
    /// A `hash` member that is not an object does not count as a hash and
    /// stays an ordinary field.
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        if !matches!(map.get(HASH_KEY), Some(Value::Object(_))) {
            return Self::Plain(map);
        }
        let hash = match map.shift_remove(HASH_KEY) {
            Some(Value::Object(hash)) => hash,
            _ => Map::new(),
        };
        Self::WithHash { fields: map, hash }
    }

    /// Classifies an untyped value. Non-objects become an empty plain source.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map.clone()),
            _ => Self::default(),
        }
    }

    /// Returns the hash, if this source carries one.
    pub fn hash(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Plain(_) => None,
            Self::WithHash { hash, .. } => Some(hash),
        }
    }

    /// Rebuilds the full mapping, including the `hash` member when present.
    pub fn to_map(&self) -> Map<String, Value> {
        match self {
            Self::Plain(map) => map.clone(),
            Self::WithHash { fields, hash } => {
                let mut map = fields.clone();
                map.insert(HASH_KEY.to_string(), Value::Object(hash.clone()));
                map
            }
        }
    }
}

impl From<Map<String, Value>> for ContextSource {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

fn extend(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

/// Builds the render context for a helper invocation.
///
/// Absent arguments default to empty mappings. The result is always a fresh
/// mapping; neither input is modified.
///
/// ```rust
/// use serde_json::json;
/// use tmplkit::templating::get_locals_from_values;
///
/// let ctx = get_locals_from_values(Some(&json!({"a": 1})), Some(&json!({"hash": {"a": 2, "b": 3}})));
/// assert_eq!(serde_json::Value::Object(ctx), json!({"a": 2, "b": 3}));
/// ```
pub fn get_locals(
    locals: Option<&ContextSource>,
    options: Option<&ContextSource>,
) -> Map<String, Value> {
    let empty = ContextSource::default();
    let locals = locals.unwrap_or(&empty);
    let options = options.unwrap_or(&empty);

    let mut context = Map::new();
    match (locals, options) {
        (_, ContextSource::WithHash { hash, .. }) => {
            trace!("Building helper context from locals overridden by options hash");
            extend(&mut context, &locals.to_map());
            extend(&mut context, hash);
        }
        (ContextSource::WithHash { hash, .. }, ContextSource::Plain(_)) => {
            trace!("Building helper context from locals hash");
            extend(&mut context, hash);
        }
        (ContextSource::Plain(locals), ContextSource::Plain(options)) => {
            extend(&mut context, options);
            extend(&mut context, locals);
        }
    }
    context
}

/// Untyped [`get_locals`].
pub fn get_locals_from_values(
    locals: Option<&Value>,
    options: Option<&Value>,
) -> Map<String, Value> {
    let locals = locals.map(ContextSource::from_value);
    let options = options.map(ContextSource::from_value);
    get_locals(locals.as_ref(), options.as_ref())
}

/// Converts a resolved context into a Tera rendering context.
///
/// # Errors
///
/// Returns a template error if Tera rejects the value.
pub fn to_tera_context(context: &Map<String, Value>) -> Result<TeraContext> {
    Ok(TeraContext::from_value(Value::Object(context.clone()))?)
}
