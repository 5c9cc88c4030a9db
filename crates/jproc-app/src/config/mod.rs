//! Configuration for the JSON Processor
//!
//! Supports:
//! - `.jproc/config.toml` - Backend and UI settings
//! - `JPROC_BACKEND_URL` - Backend base URL override

pub mod settings;
pub mod types;

pub use settings::{
    endpoint_url, load_settings, resolve_backend, resolve_backend_from, BACKEND_URL_ENV,
    ENDPOINT_PATH,
};
pub use types::*;
