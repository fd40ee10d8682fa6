//! Test utilities for tmplkit.
//!
//! Available to the crate's own unit tests and, through the `test-utils`
//! feature, to the integration suites.

use std::sync::{Arc, Mutex, Once};

use serde_json::Value;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::host::App;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, falls back to `RUST_LOG`, and stays silent if
/// neither is provided.
///
/// ```bash
/// RUST_LOG=tmplkit=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Events captured by [`recording_app`], as `(event, args)` pairs.
pub type EventLog = Arc<Mutex<Vec<(String, Vec<Value>)>>>;

/// Creates an [`App`] whose `events` are all recorded into the returned log.
pub fn recording_app(events: &[&str]) -> (App, EventLog) {
    let log: EventLog = Arc::new(Mutex::new(Vec::new()));
    let mut app = App::new();
    for event in events {
        let sink = Arc::clone(&log);
        let name = (*event).to_string();
        app.on(*event, move |args: &[Value]| {
            if let Ok(mut entries) = sink.lock() {
                entries.push((name.clone(), args.to_vec()));
            }
        });
    }
    (app, log)
}
