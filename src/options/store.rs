//! Option reads and writes under a host's `options.` namespace.

use serde_json::{Map, Value};
use tracing::debug;

use super::Configurable;
use crate::core::error::json_type_name;
use crate::core::{Result, TmplError};

/// Event emitted after every option write.
pub const OPTION_EVENT: &str = "option";

/// Root of the option tree inside the host.
const OPTIONS_ROOT: &str = "options";

fn option_path(key: &str) -> String {
    format!("{OPTIONS_ROOT}.{key}")
}

/// Outcome of the untyped [`OptionStore::option_value`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionResult {
    /// A read: the stored value, if any
    Value(Option<Value>),
    /// A write: the host was updated and can be chained on
    Updated,
}

/// Option access for any [`Configurable`] host.
///
/// Blanket-implemented, so every host gains these methods by implementing the
/// capability alone.
pub trait OptionStore: Configurable {
    /// Reads `options.<key>`.
    fn option(&self, key: &str) -> Option<Value> {
        self.get(&option_path(key))
    }

    /// Writes `options.<key>` and emits `"option"` with `[key, value]`.
    fn set_option(&mut self, key: &str, value: impl Into<Value>) -> &mut Self
    where
        Self: Sized,
    {
        let value = value.into();
        debug!("Setting option '{}'", key);
        self.set(&option_path(key), value.clone());
        self.emit(OPTION_EVENT, &[Value::String(key.to_string()), value]);
        self
    }

    /// Writes every entry of `options`, one [`set_option`](Self::set_option)
    /// per entry.
    ///
    /// # Errors
    ///
    /// Returns [`TmplError::VisitUnsupported`] if the host cannot visit
    /// mappings; nothing is written in that case.
    fn set_options(&mut self, options: &Map<String, Value>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        if !self.supports_visit() {
            return Err(TmplError::VisitUnsupported);
        }
        for (key, value) in options {
            self.set_option(key, value.clone());
        }
        Ok(self)
    }

    /// Untyped entry point covering every call shape.
    ///
    /// - string key, no value: read
    /// - string key and value: write
    /// - object key: batch write (`value` is ignored)
    ///
    /// # Errors
    ///
    /// Returns [`TmplError::InvalidArgument`] when `key` is neither a string
    /// nor an object, and [`TmplError::VisitUnsupported`] for a batch write on
    /// a host that cannot visit.
    fn option_value(&mut self, key: &Value, value: Option<Value>) -> Result<OptionResult>
    where
        Self: Sized,
    {
        match (key, value) {
            (Value::String(key), None) => Ok(OptionResult::Value(self.option(key))),
            (Value::String(key), Some(value)) => {
                self.set_option(key, value);
                Ok(OptionResult::Updated)
            }
            (Value::Object(options), _) => {
                self.set_options(options)?;
                Ok(OptionResult::Updated)
            }
            (other, _) => Err(TmplError::InvalidArgument {
                operation: "option",
                expected: "a string or an object",
                found: json_type_name(other),
            }),
        }
    }

    /// Sets `options.<key>` to `true`.
    fn enable(&mut self, key: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.set_option(key, true)
    }

    /// Sets `options.<key>` to `false`.
    fn disable(&mut self, key: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.set_option(key, false)
    }

    /// Returns `true` if `options.<key>` holds a truthy value.
    fn enabled(&self, key: &str) -> bool {
        self.option(key).as_ref().is_some_and(is_truthy)
    }

    /// Returns `true` if `options.<key>` is unset or falsy.
    fn disabled(&self, key: &str) -> bool {
        !self.enabled(key)
    }
}

impl<T: Configurable + ?Sized> OptionStore for T {}

/// `null`, `false`, zero and the empty string are falsy; everything else,
/// including empty arrays and objects, is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
