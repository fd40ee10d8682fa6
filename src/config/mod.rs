//! Configuration loading.
//!
//! [`AppConfig`] describes the initial options and rename transform of a
//! host; [`parse_config`] is the generic TOML reader behind it.

mod app;
mod parser;

pub use app::AppConfig;
pub use parser::parse_config;
