//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use jproc_core::{FilterKind, ServerResponse};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal
    Paste { text: String },

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Request to quit
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the input text
    InputChanged { text: String },

    /// Validate the input and post it
    Submit,

    /// A background request finished
    SubmitCompleted {
        /// Sequence number handed out by `FormState::begin_submit`
        seq: u64,
        /// Decoded response, or the concrete failure cause for the log
        result: Result<ServerResponse, String>,
    },

    /// Flip one display filter
    ToggleFilter(FilterKind),

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next control (Tab)
    FocusNext,
    /// Move focus to the previous control (Shift+Tab)
    FocusPrevious,
    /// Return focus to the input area
    FocusInput,
    /// Highlight the next filter row
    SelectNextFilter,
    /// Highlight the previous filter row
    SelectPreviousFilter,
    /// Toggle the highlighted filter row
    ToggleSelectedFilter,
    /// Scroll the response view up by n lines
    ScrollResponseUp(u16),
    /// Scroll the response view down by n lines
    ScrollResponseDown(u16),
}
