//! Headless mode - JSON event output instead of the TUI
//!
//! Runs a single submit cycle and reports its outcome as NDJSON
//! (newline-delimited JSON) on stdout, one event per line. Each event has an
//! "event" field naming its type and a millisecond "timestamp".
//!
//! # Example Output
//!
//! ```json
//! {"event":"response","displayed":["A","b","1"],"timestamp":1704700001000}
//! {"event":"validation_failed","message":"Invalid JSON format. Please check your input.","timestamp":1704700002000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::error;

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Input was not valid JSON; no request was made
    ValidationFailed { message: String, timestamp: i64 },

    /// The backend call failed
    RequestFailed { message: String, timestamp: i64 },

    /// The backend answered; `displayed` is the filtered view
    Response { displayed: Value, timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// True for the outcome of a successful cycle
    pub fn is_success(&self) -> bool {
        matches!(self, HeadlessEvent::Response { .. })
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn validation_failed(message: &str) -> Self {
        HeadlessEvent::ValidationFailed {
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn request_failed(message: &str) -> Self {
        HeadlessEvent::RequestFailed {
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn response(displayed: Value) -> Self {
        HeadlessEvent::Response {
            displayed,
            timestamp: Self::now(),
        }
    }
}
