//! jproc-app - Application state and orchestration for the JSON Processor
//!
//! This crate implements the TEA (The Elm Architecture) pattern: the form
//! controller and application state (model), messages, the update function,
//! and the actions the event loop performs on its behalf (the backend POST).
//! It has no terminal dependency; `jproc-tui` and the headless mode both
//! drive it.

pub mod actions;
pub mod backend;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use backend::{BackendClient, HttpBackend, LocalBackendClient};
pub use form::{FormPhase, FormState, PendingSubmit, SubmitOutcome};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Focus};
