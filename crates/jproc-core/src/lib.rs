//! # jproc-core - Core Domain Types
//!
//! Foundation crate for the JSON Processor. Provides the response model, the
//! display filters, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ServerResponse`] - Decoded `/bfhl` response body
//! - [`FilterKind`], [`FilterSelection`] - The three display toggles
//! - [`FormError`] - The two user-facing failures
//! - [`AppPhase`] - Running or quitting
//!
//! ### Display (`display`)
//! - [`compute_displayed_data()`] - Pure filter over the last response
//! - [`DisplayedData`] - Full body or the selected concatenation
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use jproc_core::prelude::*;
//! ```

pub mod display;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all jproc crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use display::{compute_displayed_data, DisplayedData};
pub use error::{Error, Result, ResultExt};
pub use types::{
    AppPhase, FilterKind, FilterSelection, FormError, ServerResponse, INVALID_JSON_MESSAGE,
    REQUEST_FAILED_MESSAGE,
};
