//! Host configuration and option behaviour.

use anyhow::Result;
use serde_json::json;
use tempfile::TempDir;
use tmplkit::config::AppConfig;
use tmplkit::core::TmplError;
use tmplkit::host::App;
use tmplkit::options::{KeyRenamer, OptionResult, OptionStore};
use tmplkit::test_utils::{init_test_logging, recording_app};

#[test]
fn option_write_is_readable_and_announced_once() {
    init_test_logging(None);
    let (mut app, log) = recording_app(&["option"]);

    app.set_option("a.b", 5);

    assert_eq!(app.option("a.b"), Some(json!(5)));
    let events = log.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], ("option".to_string(), vec![json!("a.b"), json!(5)]));
}

#[test]
fn non_string_non_object_key_is_rejected() {
    let mut app = App::new();
    let err = app.option_value(&json!(42), None).unwrap_err();
    assert!(matches!(err, TmplError::InvalidArgument { .. }));
}

#[test]
fn batch_configuration_emits_per_entry() {
    let (mut app, log) = recording_app(&["option"]);
    let batch = json!({ "layout": "default", "engine": { "cache": true } });

    let result = app.option_value(&batch, None).unwrap();

    assert_eq!(result, OptionResult::Updated);
    assert_eq!(app.option("engine.cache"), Some(json!(true)));
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[test]
fn config_file_seeds_host() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("tmplkit.toml");
    std::fs::write(
        &path,
        r#"
rename = "basename"

[options]
layout = "default"

[options.engine]
default = ".hbs"
"#,
    )?;

    let app = App::with_config(AppConfig::load(&path)?);

    assert_eq!(app.option("layout"), Some(json!("default")));
    assert_eq!(app.option("engine.default"), Some(json!(".hbs")));
    assert_eq!(app.rename_key("views/page.hbs"), "page.hbs");
    Ok(())
}

#[test]
fn missing_config_file_reports_path() {
    let err = AppConfig::load(std::path::Path::new("/no/such/tmplkit.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/no/such/tmplkit.toml"));
}

#[test]
fn rename_key_default_and_override() {
    let (mut app, log) = recording_app(&["option"]);
    assert_eq!(app.rename_key("/tmp/foo/bar.hbs"), "bar");

    app.set_rename_key(|key: &str| key.replace('/', ":"));

    assert_eq!(app.rename_key("pages/home"), "pages:home");
    assert_eq!((app.rename_key_fn())("a/b"), "a:b");
    assert_eq!(log.lock().unwrap()[0].1, vec![json!("renameKey")]);
}
