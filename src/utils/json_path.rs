//! Dot-delimited access into `serde_json` trees.
//!
//! Paths such as `"options.engine.default"` address nested object members.
//! There is no escaping: a key that itself contains a `.` cannot be reached.

use serde_json::{Map, Value};

/// Looks up a dotted path, returning `None` if any segment is missing or a
/// non-object is traversed.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tmplkit::utils::get_path;
///
/// let root = json!({ "options": { "engine": { "default": ".hbs" } } });
/// assert_eq!(get_path(&root, "options.engine.default"), Some(&json!(".hbs")));
/// assert_eq!(get_path(&root, "options.missing"), None);
/// ```
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |current, segment| current.as_object()?.get(segment))
}

/// Writes `value` at a dotted path, creating intermediate objects.
///
/// Any non-object found on the way (including `root` itself) is replaced by an
/// empty object so the write always lands.
pub fn set_path(root: &mut Value, path: &str, value: Value) {
    let mut segments = path.split('.').peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        let Some(map) = ensure_object(current) else {
            return;
        };
        if segments.peek().is_none() {
            map.insert(segment.to_string(), value);
            return;
        }
        current = map.entry(segment.to_string()).or_insert_with(|| Value::Object(Map::new()));
    }
}

/// Replaces a non-object `value` with an empty object and borrows its map.
fn ensure_object(value: &mut Value) -> Option<&mut Map<String, Value>> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut()
}

/// Perform a deep merge of two JSON values.
///
/// Objects are merged key by key; arrays and primitives in `overrides`
/// replace whatever `base` held.
///
/// ```rust
/// use serde_json::json;
/// use tmplkit::utils::deep_merge_json;
///
/// let base = json!({ "engine": { "default": ".hbs", "cache": true } });
/// let overrides = json!({ "engine": { "default": ".md" } });
///
/// let merged = deep_merge_json(base, &overrides);
/// assert_eq!(merged, json!({ "engine": { "default": ".md", "cache": true } }));
/// ```
pub fn deep_merge_json(mut base: Value, overrides: &Value) -> Value {
    match (base.as_object_mut(), overrides.as_object()) {
        (Some(base_obj), Some(override_obj)) => {
            for (key, override_value) in override_obj {
                match base_obj.get_mut(key) {
                    Some(base_value) if base_value.is_object() && override_value.is_object() => {
                        let merged = deep_merge_json(base_value.take(), override_value);
                        *base_value = merged;
                    }
                    _ => {
                        base_obj.insert(key.clone(), override_value.clone());
                    }
                }
            }
            base
        }
        _ => overrides.clone(),
    }
}
