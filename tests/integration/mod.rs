//! Integration test suite for tmplkit
//!
//! End-to-end flows combining configuration, hosts, key matching, views and
//! helper contexts.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **host_options**: config loading, option writes, events and renaming
//! - **render_pipeline**: layout lookup, view content and helper contexts fed to Tera

mod host_options;
mod render_pipeline;
