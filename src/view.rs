//! Views and dual-representation content synchronisation.
//!
//! A [`View`] carries its content twice: as text (`content`) and as bytes
//! (`contents`). Every assignment goes through [`sync_contents`], which keeps
//! both fields describing the same data.
//!
//! Streams are the one kind that has no inspectable text. A view holding a
//! stream reports `content == None` and keeps the handle in `contents` until
//! [`View::buffer_stream`] drains it, after which the view is an ordinary
//! binary view again.

use std::fmt;
use std::io::Read;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{debug, trace};

use crate::core::Result;

/// Shared handle to a readable stream.
///
/// Cloning the handle shares the underlying reader.
#[derive(Clone)]
pub struct StreamHandle(Arc<Mutex<Box<dyn Read + Send>>>);

impl StreamHandle {
    /// Wraps a reader.
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Box::new(reader))))
    }

    /// Reads the remainder of the stream into memory.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the reader fails or its lock was poisoned by a
    /// panicking reader.
    pub fn read_to_end(&self) -> Result<Vec<u8>> {
        let mut reader = self
            .0
            .lock()
            .map_err(|_| std::io::Error::other("stream lock poisoned"))?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Returns `true` if both handles share the same reader.
    pub fn same_stream(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StreamHandle(..)")
    }
}

impl PartialEq for StreamHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_stream(other)
    }
}

/// A value assigned to a view's content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentValue {
    /// No content
    Empty,
    /// Textual content
    Text(String),
    /// Binary content
    Binary(Vec<u8>),
    /// A stream whose bytes have not been read yet
    Stream(StreamHandle),
}

impl ContentValue {
    /// Returns `true` for [`ContentValue::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns `true` for [`ContentValue::Binary`].
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    /// Returns `true` for [`ContentValue::Stream`].
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    /// Classifies an untyped value.
    ///
    /// `null` is empty, a string is text and an array of byte-sized integers is
    /// binary. Every other shape is unrecognised and yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Empty),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(Self::Binary),
            _ => None,
        }
    }
}

impl From<&str> for ContentValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ContentValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for ContentValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

impl From<StreamHandle> for ContentValue {
    fn from(stream: StreamHandle) -> Self {
        Self::Stream(stream)
    }
}

impl<T: Into<ContentValue>> From<Option<T>> for ContentValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// The binary side of a view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewContents {
    /// No content
    #[default]
    None,
    /// Bytes held in memory
    Bytes(Vec<u8>),
    /// An unread stream
    Stream(StreamHandle),
}

impl ViewContents {
    /// Returns the in-memory bytes, if any.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }
}

/// A rendering unit identified by its path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    /// Identity of the view, usually its source path
    pub path: String,
    /// Textual content
    pub content: Option<String>,
    /// Binary content
    pub contents: ViewContents,
}

impl View {
    /// Creates an empty view at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Creates a view at `path` already holding `value`.
    pub fn with_contents(path: impl Into<String>, value: impl Into<ContentValue>) -> Self {
        let mut view = Self::new(path);
        sync_contents(&mut view, value.into());
        view
    }

    /// Returns `true` while the view holds an unread stream.
    pub fn is_streaming(&self) -> bool {
        matches!(self.contents, ViewContents::Stream(_))
    }

    /// Drains a held stream and resynchronises the view as binary content.
    ///
    /// Views that are not streaming are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an IO error if reading the stream fails; the view keeps its
    /// stream in that case.
    pub fn buffer_stream(&mut self) -> Result<()> {
        let ViewContents::Stream(stream) = &self.contents else {
            return Ok(());
        };
        let bytes = stream.read_to_end()?;
        debug!("Buffered {} bytes from stream for view '{}'", bytes.len(), self.path);
        sync_contents(self, ContentValue::Binary(bytes));
        Ok(())
    }
}

/// Assigns `value` to `view`, updating both representations together.
///
/// | value      | `contents`            | `content`          |
/// |------------|-----------------------|--------------------|
/// | `Empty`    | none                  | `None`             |
/// | `Text`     | UTF-8 bytes of text   | the text           |
/// | `Binary`   | the bytes unchanged   | lossy UTF-8 decode |
/// | `Stream`   | the stream handle     | `None`             |
///
/// ```rust
/// use tmplkit::view::{sync_contents, View, ViewContents};
///
/// let mut view = View::new("pages/home.hbs");
/// sync_contents(&mut view, "hello".into());
/// assert_eq!(view.content.as_deref(), Some("hello"));
/// assert_eq!(view.contents, ViewContents::Bytes(b"hello".to_vec()));
/// ```
pub fn sync_contents(view: &mut View, value: ContentValue) {
    let (content, contents) = match value {
        ContentValue::Empty => (None, ViewContents::None),
        ContentValue::Text(text) => {
            let bytes = text.as_bytes().to_vec();
            (Some(text), ViewContents::Bytes(bytes))
        }
        ContentValue::Binary(bytes) => {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            (Some(text), ViewContents::Bytes(bytes))
        }
        ContentValue::Stream(stream) => (None, ViewContents::Stream(stream)),
    };
    trace!("Synchronised contents for view '{}'", view.path);
    view.content = content;
    view.contents = contents;
}

/// Untyped [`sync_contents`].
///
/// Returns `false` and leaves the view untouched when `value` is not a
/// recognised content kind (see [`ContentValue::from_json`]).
pub fn sync_contents_from_value(view: &mut View, value: &Value) -> bool {
    match ContentValue::from_json(value) {
        Some(content) => {
            sync_contents(view, content);
            true
        }
        None => {
            trace!("Ignoring unrecognised content kind for view '{}'", view.path);
            false
        }
    }
}

/// Returns `true` if `value` is an object carrying `content`, `contents` or
/// `path`.
pub fn is_view(value: &Value) -> bool {
    value.as_object().is_some_and(|map| {
        ["content", "contents", "path"].iter().any(|key| map.contains_key(*key))
    })
}
