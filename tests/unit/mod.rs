//! Unit test suite for tmplkit
//!
//! Exercises the public API of individual modules from outside the crate.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod ext_tests;
mod pattern_tests;
