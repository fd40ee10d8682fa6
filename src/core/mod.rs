//! Core types for tmplkit.
//!
//! - [`TmplError`] - every failure the crate reports
//! - [`Result`] - `Result` alias defaulting to [`TmplError`]

pub mod error;

pub use error::{Result, TmplError};
