//! JSON Processor Library
//!
//! A terminal form that validates JSON, posts it to a `/bfhl` backend and
//! shows the response through three display filters.

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::{run, Options};
pub use headless::run_headless;
