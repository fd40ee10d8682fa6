//! Reference host object.
//!
//! [`App`] is a ready-made [`Configurable`] host: it owns the JSON tree that
//! option paths address, a synchronous event router and the rename slot. View
//! and engine layers that do not already have a host of their own can embed
//! it.
//!
//! ```rust
//! use serde_json::{json, Value};
//! use std::sync::{Arc, Mutex};
//! use tmplkit::host::App;
//! use tmplkit::options::OptionStore;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut app = App::new();
//! app.on("option", move |args: &[Value]| sink.lock().unwrap().push(args.to_vec()));
//! app.set_option("layout", "default");
//!
//! assert_eq!(*seen.lock().unwrap(), vec![vec![json!("layout"), json!("default")]]);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::AppConfig;
use crate::options::{Configurable, RenameFn, RenameSlot, default_rename_key};
use crate::utils::{deep_merge_json, get_path, set_path};

type Listener = Box<dyn FnMut(&[Value]) + Send>;

/// Synchronous fan-out of named events to registered listeners.
///
/// Listeners run in registration order on the emitting thread, before
/// [`emit`](Self::emit) returns.
#[derive(Default)]
pub struct EventRouter {
    listeners: HashMap<String, Vec<Listener>>,
}

impl EventRouter {
    /// Creates a router with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for `event`.
    pub fn on<F>(&mut self, event: impl Into<String>, listener: F)
    where
        F: FnMut(&[Value]) + Send + 'static,
    {
        self.listeners.entry(event.into()).or_default().push(Box::new(listener));
    }

    /// Delivers `args` to every listener of `event`.
    pub fn emit(&mut self, event: &str, args: &[Value]) {
        let Some(listeners) = self.listeners.get_mut(event) else {
            trace!("No listeners for event '{}'", event);
            return;
        };
        trace!("Emitting '{}' to {} listeners", event, listeners.len());
        for listener in listeners.iter_mut() {
            listener(args);
        }
    }

    /// Number of listeners registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> =
            self.listeners.iter().map(|(event, l)| (event.as_str(), l.len())).collect();
        f.debug_struct("EventRouter").field("listeners", &counts).finish()
    }
}

/// A host object with an option tree, events and a rename transform.
pub struct App {
    cache: Value,
    events: EventRouter,
    rename: Option<RenameFn>,
}

impl App {
    /// Creates a host with an empty `options` tree and the default
    /// stem-based rename transform installed.
    pub fn new() -> Self {
        let mut cache = Map::new();
        cache.insert("options".to_string(), Value::Object(Map::new()));
        Self {
            cache: Value::Object(cache),
            events: EventRouter::new(),
            rename: Some(Arc::new(default_rename_key)),
        }
    }

    /// Creates a host seeded from `config`.
    ///
    /// Seeding writes the tree directly and emits no events.
    pub fn with_config(config: AppConfig) -> Self {
        let mut app = Self::new();
        let seed = Value::Object(config.options);
        let options = app.cache.get_mut("options").map(Value::take).unwrap_or_default();
        set_path(&mut app.cache, "options", deep_merge_json(options, &seed));
        app.rename = Some(config.rename.to_fn());
        debug!("Created host from config");
        app
    }

    /// Registers a listener for `event`.
    pub fn on<F>(&mut self, event: impl Into<String>, listener: F) -> &mut Self
    where
        F: FnMut(&[Value]) + Send + 'static,
    {
        self.events.on(event, listener);
        self
    }

    /// The host's event router.
    pub fn events(&self) -> &EventRouter {
        &self.events
    }

    /// The whole `options` tree.
    pub fn options(&self) -> Option<&Map<String, Value>> {
        get_path(&self.cache, "options").and_then(Value::as_object)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cache", &self.cache)
            .field("events", &self.events)
            .field("rename", &self.rename.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Configurable for App {
    fn get(&self, path: &str) -> Option<Value> {
        get_path(&self.cache, path).cloned()
    }

    fn set(&mut self, path: &str, value: Value) {
        set_path(&mut self.cache, path, value);
    }

    fn emit(&mut self, event: &str, args: &[Value]) {
        self.events.emit(event, args);
    }
}

impl RenameSlot for App {
    fn rename_fn(&self) -> Option<RenameFn> {
        self.rename.clone()
    }

    fn set_rename_fn(&mut self, rename: RenameFn) {
        self.rename = Some(rename);
    }
}
