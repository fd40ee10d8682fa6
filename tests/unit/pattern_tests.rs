//! Unit tests for key matching.

use anyhow::Result;
use serde_json::json;
use tmplkit::pattern::{KeyMatcher, MatchOptions, default_match_options, match_key, match_keys};

#[test]
fn single_key_match_returns_its_value() -> Result<()> {
    let map = json!({ "layouts/base.hbs": "base", "pages/home.hbs": "home" });
    assert_eq!(match_key(&map, "pages/*", None)?, Some(&json!("home")));
    Ok(())
}

#[test]
fn non_mapping_inputs_never_fail() -> Result<()> {
    for input in [json!(1), json!([1, 2]), json!(true), json!(null)] {
        assert_eq!(match_key(&input, "*", None)?, None);
        assert!(match_keys(&input, "*", None)?.is_empty());
    }
    Ok(())
}

#[test]
fn collected_keys_enumerate_in_ascending_order() -> Result<()> {
    let map = json!({ "b": 2, "a": 1, "c": 3 });
    let result = match_keys(&map, "*", None)?;
    assert_eq!(result.keys().map(String::as_str).collect::<Vec<_>>(), ["a", "b", "c"]);
    Ok(())
}

#[test]
fn compiled_matcher_is_reusable() -> Result<()> {
    let matcher = KeyMatcher::new(vec!["*.hbs", "!_*"], None)?;
    let first = json!({ "_partial.hbs": 0, "page.hbs": 1 });
    let second = json!({ "about.hbs": 2, "readme.md": 3 });

    assert_eq!(matcher.first(first.as_object().unwrap()), Some(&json!(1)));
    assert_eq!(matcher.matching_keys(second.as_object().unwrap()), ["about.hbs"]);
    Ok(())
}

#[test]
fn default_options_stop_star_at_separators_and_dotfiles() -> Result<()> {
    let map = json!({
        "layouts/base.hbs": "base",
        "layouts/blog/post.hbs": "post",
        "layouts/.hidden": "hidden",
    });

    let shallow = match_keys(&map, "layouts/*", None)?;
    assert_eq!(shallow.keys().map(String::as_str).collect::<Vec<_>>(), ["layouts/base.hbs"]);

    let nested = match_keys(&map, "layouts/**/*", None)?;
    assert!(nested.contains_key("layouts/blog/post.hbs"));
    assert!(!nested.contains_key("layouts/.hidden"));
    Ok(())
}

#[test]
fn explicit_options_override_the_defaults() -> Result<()> {
    let map = json!({ "layouts/blog/post.hbs": "post" });
    let crossing = MatchOptions {
        require_literal_separator: false,
        ..default_match_options()
    };
    assert_eq!(match_key(&map, "layouts/*", None)?, None);
    assert_eq!(match_key(&map, "layouts/*", Some(crossing))?, Some(&json!("post")));
    Ok(())
}

#[test]
fn empty_pattern_list_matches_no_key() -> Result<()> {
    let map = json!({ "a": 1, "b": 2 });
    assert!(match_keys(&map, Vec::<String>::new(), None)?.is_empty());
    assert_eq!(match_key(&map, Vec::<&str>::new(), None)?, None);
    Ok(())
}
