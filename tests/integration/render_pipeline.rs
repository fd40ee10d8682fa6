//! Layout lookup, view content and helper contexts feeding a Tera render.

use anyhow::Result;
use serde_json::json;
use std::io::Cursor;
use tera::Tera;
use tmplkit::host::App;
use tmplkit::options::{KeyRenamer, OptionStore};
use tmplkit::pattern::{match_key, match_keys};
use tmplkit::templating::{ContextSource, get_locals, to_tera_context};
use tmplkit::view::{StreamHandle, View, ViewContents, sync_contents};

#[test]
fn layout_lookup_and_render() -> Result<()> {
    let mut app = App::new();
    app.set_option("layout", "layouts/default.*");

    let layouts = json!({
        "layouts/blog.tera": "<main>{{ body }}</main>",
        "layouts/default.tera": "<div class=\"{{ theme }}\">{{ body }}</div>",
    });
    let pattern = app.option("layout").and_then(|v| v.as_str().map(str::to_string)).unwrap();
    let layout = match_key(&layouts, pattern.as_str(), None)?
        .and_then(|v| v.as_str())
        .unwrap();

    let view = View::with_contents("pages/about.hbs", "About us");
    let locals = ContextSource::from_value(&json!({ "theme": "light", "body": view.content }));
    let options = ContextSource::from_value(&json!({ "hash": { "theme": "dark" } }));
    let context = to_tera_context(&get_locals(Some(&locals), Some(&options)))?;

    let html = Tera::one_off(layout, &context, false)?;
    assert_eq!(html, "<div class=\"dark\">About us</div>");
    Ok(())
}

#[test]
fn views_registered_under_renamed_keys() -> Result<()> {
    let app = App::new();
    let mut registry = serde_json::Map::new();
    for path in ["src/pages/home.hbs", "src/pages/about.hbs", "src/partials/nav.hbs"] {
        registry.insert(app.rename_key(path), json!(path));
    }

    let picked = match_keys(&serde_json::Value::Object(registry), ["*", "!nav"], None)?;
    assert_eq!(picked.keys().map(String::as_str).collect::<Vec<_>>(), ["about", "home"]);
    Ok(())
}

#[test]
fn streamed_view_renders_after_buffering() -> Result<()> {
    let mut view = View::new("stream.tera");
    sync_contents(&mut view, StreamHandle::new(Cursor::new(b"Hi {{ who }}".to_vec())).into());
    assert!(view.content.is_none());

    view.buffer_stream()?;
    let template = view.content.clone().unwrap();
    assert_eq!(view.contents, ViewContents::Bytes(template.as_bytes().to_vec()));

    let locals = ContextSource::from_value(&json!({ "hash": { "who": "there" } }));
    let context = to_tera_context(&get_locals(Some(&locals), None))?;
    assert_eq!(Tera::one_off(&template, &context, false)?, "Hi there");
    Ok(())
}
