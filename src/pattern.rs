//! Glob-based key matching over mappings.
//!
//! Views, layouts and helper options are stored in mappings keyed by name or
//! path. This module finds entries whose keys match one or more glob patterns,
//! so callers can ask for "the layout matching `layouts/*.hbs`" or "every
//! option under `helper.**`".
//!
//! # Pattern Syntax
//!
//! Patterns follow [`glob::Pattern`] semantics:
//!
//! - `*` matches any sequence of characters within one `/`-separated segment
//! - `**` matches across segments
//! - `*` and `?` do not match a leading `.` in a segment
//! - `?` matches any single character
//! - `[abc]` / `[a-z]` match character sets and ranges
//! - a leading `!` negates the pattern: keys it matches are excluded
//!
//! A key matches a pattern list when it matches at least one positive pattern
//! and none of the negated ones. A list made only of negations matches every
//! key that is not excluded. An empty list matches nothing.
//!
//! # Options
//!
//! Every entry point takes `Option<MatchOptions>`. `None` selects
//! [`default_match_options`]: case-sensitive, with a literal `/` and a literal
//! leading `.` required. Pass `Some(..)` to relax either rule.
//!
//! # Ordering
//!
//! [`match_key`] returns the value of the first matching key in the mapping's
//! own enumeration order (insertion order). [`match_keys`] sorts the matched
//! keys ascending so enumeration is deterministic.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tmplkit::pattern::{match_key, match_keys};
//!
//! # fn example() -> tmplkit::core::Result<()> {
//! let layouts = json!({
//!     "layouts/default.hbs": "default",
//!     "layouts/blog.hbs": "blog",
//!     "partials/nav.hbs": "nav",
//! });
//!
//! let first = match_key(&layouts, "layouts/*", None)?;
//! assert_eq!(first, Some(&json!("default")));
//!
//! let subset = match_keys(&layouts, ["**/*.hbs", "!partials/*"], None)?;
//! let keys: Vec<_> = subset.keys().cloned().collect();
//! assert_eq!(keys, ["layouts/blog.hbs", "layouts/default.hbs"]);
//! # Ok(())
//! # }
//! ```

pub use glob::MatchOptions;
use glob::Pattern;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::core::{Result, TmplError};

/// Options used when a caller passes `None`.
///
/// Matching is case-sensitive, `*` and `?` never cross a `/`, and a leading
/// `.` in a segment must be matched literally, so `layouts/*` finds
/// `layouts/base.hbs` but neither `layouts/blog/post.hbs` nor
/// `layouts/.hidden`.
pub fn default_match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// One glob or an ordered list of globs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPatterns(Vec<String>);

impl KeyPatterns {
    /// Returns the patterns in the order they were given.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for KeyPatterns {
    fn from(pattern: &str) -> Self {
        Self(vec![pattern.to_string()])
    }
}

impl From<String> for KeyPatterns {
    fn from(pattern: String) -> Self {
        Self(vec![pattern])
    }
}

impl From<Vec<String>> for KeyPatterns {
    fn from(patterns: Vec<String>) -> Self {
        Self(patterns)
    }
}

impl From<Vec<&str>> for KeyPatterns {
    fn from(patterns: Vec<&str>) -> Self {
        Self(patterns.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for KeyPatterns {
    fn from(patterns: &[&str]) -> Self {
        Self(patterns.iter().map(|p| (*p).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KeyPatterns {
    fn from(patterns: [&str; N]) -> Self {
        Self(patterns.iter().map(|p| (*p).to_string()).collect())
    }
}

/// Compiled key matcher.
///
/// Compiling once and reusing the matcher avoids re-parsing the globs when the
/// same lookup is performed against many mappings.
///
/// ```rust
/// use serde_json::json;
/// use tmplkit::pattern::KeyMatcher;
///
/// # fn example() -> tmplkit::core::Result<()> {
/// let matcher = KeyMatcher::new(["helper.*", "!helper.internal"], None)?;
/// assert!(matcher.is_match("helper.upper"));
/// assert!(!matcher.is_match("helper.internal"));
/// assert!(!matcher.is_match("layout"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KeyMatcher {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    options: MatchOptions,
}

impl KeyMatcher {
    /// Compiles `patterns` into a matcher.
    ///
    /// `None` options select [`default_match_options`].
    ///
    /// # Errors
    ///
    /// Returns [`TmplError::InvalidPattern`] if any glob fails to parse.
    pub fn new(patterns: impl Into<KeyPatterns>, options: Option<MatchOptions>) -> Result<Self> {
        let patterns = patterns.into();
        let options = options.unwrap_or_else(default_match_options);
        let mut include = Vec::new();
        let mut exclude = Vec::new();

        for raw in patterns.as_slice() {
            let (negated, glob) = match raw.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, raw.as_str()),
            };
            let compiled = Pattern::new(glob).map_err(|source| TmplError::InvalidPattern {
                pattern: raw.clone(),
                source,
            })?;
            if negated {
                exclude.push(compiled);
            } else {
                include.push(compiled);
            }
        }

        debug!(
            "Compiled key matcher with {} include and {} exclude patterns",
            include.len(),
            exclude.len()
        );

        Ok(Self {
            include,
            exclude,
            options,
        })
    }

    /// Returns `true` if `key` satisfies the pattern list.
    ///
    /// An empty pattern list matches no key.
    pub fn is_match(&self, key: &str) -> bool {
        if self.include.is_empty() && self.exclude.is_empty() {
            return false;
        }
        let included = self.include.is_empty()
            || self.include.iter().any(|p| p.matches_with(key, self.options));
        included && !self.exclude.iter().any(|p| p.matches_with(key, self.options))
    }

    /// Returns the matching keys of `map` in the map's enumeration order.
    pub fn matching_keys<'a>(&self, map: &'a Map<String, Value>) -> Vec<&'a str> {
        let keys: Vec<&str> =
            map.keys().map(String::as_str).filter(|key| self.is_match(key)).collect();
        trace!("Matched {} of {} keys", keys.len(), map.len());
        keys
    }

    /// Returns the value of the first matching key, if any.
    pub fn first<'a>(&self, map: &'a Map<String, Value>) -> Option<&'a Value> {
        map.iter().find(|(key, _)| self.is_match(key)).map(|(_, value)| value)
    }

    /// Collects every matching entry into a new map ordered by ascending key.
    pub fn collect(&self, map: &Map<String, Value>) -> Map<String, Value> {
        let mut keys = self.matching_keys(map);
        keys.sort_unstable();

        let mut result = Map::new();
        for key in keys {
            if let Some(value) = map.get(key) {
                result.insert(key.to_string(), value.clone());
            }
        }
        result
    }
}

/// Returns the value of the first key in `mapping` matching `patterns`.
///
/// Returns `Ok(None)` when `mapping` is not an object (a number, array,
/// string or `null`) and when no key matches; neither case is an error.
///
/// # Errors
///
/// Returns [`TmplError::InvalidPattern`] if a glob fails to parse.
pub fn match_key<'a>(
    mapping: &'a Value,
    patterns: impl Into<KeyPatterns>,
    options: Option<MatchOptions>,
) -> Result<Option<&'a Value>> {
    let Some(map) = mapping.as_object() else {
        trace!("match_key called on a non-object value; no match");
        return Ok(None);
    };
    let matcher = KeyMatcher::new(patterns, options)?;
    Ok(matcher.first(map))
}

/// Returns a new mapping holding every entry whose key matches `patterns`,
/// ordered by ascending key.
///
/// Zero matches (or a non-object `mapping`) yield an empty map.
///
/// # Errors
///
/// Returns [`TmplError::InvalidPattern`] if a glob fails to parse.
pub fn match_keys(
    mapping: &Value,
    patterns: impl Into<KeyPatterns>,
    options: Option<MatchOptions>,
) -> Result<Map<String, Value>> {
    let Some(map) = mapping.as_object() else {
        return Ok(Map::new());
    };
    let matcher = KeyMatcher::new(patterns, options)?;
    Ok(matcher.collect(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_key_single_match_returns_value() {
        let map = json!({ "a.hbs": 1, "b.md": 2 });
        assert_eq!(match_key(&map, "*.md", None).unwrap(), Some(&json!(2)));
    }

    #[test]
    fn test_match_key_uses_insertion_order() {
        let map = json!({ "zeta.hbs": "z", "alpha.hbs": "a" });
        assert_eq!(match_key(&map, "*.hbs", None).unwrap(), Some(&json!("z")));
    }

    #[test]
    fn test_match_key_non_object_inputs() {
        assert_eq!(match_key(&json!(42), "*", None).unwrap(), None);
        assert_eq!(match_key(&json!(["a", "b"]), "*", None).unwrap(), None);
        assert_eq!(match_key(&json!(null), "*", None).unwrap(), None);
        assert_eq!(match_key(&json!("a"), "*", None).unwrap(), None);
    }

    #[test]
    fn test_match_key_no_match_is_none() {
        let map = json!({ "a": 1 });
        assert_eq!(match_key(&map, "b*", None).unwrap(), None);
    }

    #[test]
    fn test_match_keys_sorted_ascending() {
        let map = json!({ "b": 2, "a": 1, "c": 3, "skip": 0 });
        let result = match_keys(&map, ["a", "b", "c"], None).unwrap();
        let keys: Vec<_> = result.keys().cloned().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(result["b"], json!(2));
    }

    #[test]
    fn test_match_keys_empty_on_no_match() {
        let map = json!({ "a": 1 });
        let result = match_keys(&map, "zzz", None).unwrap();
        assert!(result.is_empty());
        assert!(match_keys(&json!(7), "*", None).unwrap().is_empty());
    }

    #[test]
    fn test_negation_patterns() {
        let map = json!({ "a.hbs": 1, "b.hbs": 2, "c.md": 3 });
        let result = match_keys(&map, ["*.hbs", "!b.hbs"], None).unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), ["a.hbs"]);

        let only_negated = match_keys(&map, "!*.hbs", None).unwrap();
        assert_eq!(only_negated.keys().collect::<Vec<_>>(), ["c.md"]);
    }

    #[test]
    fn test_default_options_keep_star_within_one_segment() {
        let map = json!({
            "layouts/base.hbs": 1,
            "layouts/blog/post.hbs": 2,
            "layouts/.hidden": 3,
        });

        let shallow = match_keys(&map, "layouts/*", None).unwrap();
        assert_eq!(shallow.keys().collect::<Vec<_>>(), ["layouts/base.hbs"]);

        let deep = match_keys(&map, "layouts/**/*", None).unwrap();
        assert_eq!(deep.keys().collect::<Vec<_>>(), ["layouts/base.hbs", "layouts/blog/post.hbs"]);

        assert_eq!(match_key(&map, "layouts/.*", None).unwrap(), Some(&json!(3)));
    }

    #[test]
    fn test_relaxed_options_let_star_cross_separators() {
        let map = json!({ "layouts/base.hbs": 1, "layouts/blog/post.hbs": 2, "layouts/.hidden": 3 });
        let relaxed = MatchOptions {
            require_literal_separator: false,
            require_literal_leading_dot: false,
            ..default_match_options()
        };
        let result = match_keys(&map, "layouts/*", Some(relaxed)).unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_empty_pattern_list_matches_nothing() {
        let map = json!({ "a.hbs": 1, "b.md": 2 });
        assert!(match_keys(&map, Vec::<&str>::new(), None).unwrap().is_empty());
        assert_eq!(match_key(&map, Vec::<String>::new(), None).unwrap(), None);

        let matcher = KeyMatcher::new(Vec::<&str>::new(), None).unwrap();
        assert!(!matcher.is_match("a.hbs"));
        assert!(!matcher.is_match(""));
    }

    #[test]
    fn test_case_insensitive_option() {
        let map = json!({ "Layout.HBS": 1 });
        let insensitive = MatchOptions {
            case_sensitive: false,
            ..default_match_options()
        };
        assert_eq!(match_key(&map, "layout.hbs", None).unwrap(), None);
        assert_eq!(match_key(&map, "layout.hbs", Some(insensitive)).unwrap(), Some(&json!(1)));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let map = json!({ "a": 1 });
        let err = match_key(&map, "[", None).unwrap_err();
        assert!(matches!(err, TmplError::InvalidPattern { ref pattern, .. } if pattern == "["));
    }
}
