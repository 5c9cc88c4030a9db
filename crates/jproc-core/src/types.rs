//! Domain types shared by the form, the backend client and the UI

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// User-facing message when the input does not parse as JSON
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format. Please check your input.";

/// User-facing message when the backend call fails for any reason
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to fetch data from the API.";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The single error shown to the user. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// InputText failed JSON parsing
    InvalidJson,
    /// The backend call failed (transport, status or payload)
    RequestFailed,
}

impl FormError {
    pub fn message(&self) -> &'static str {
        match self {
            FormError::InvalidJson => INVALID_JSON_MESSAGE,
            FormError::RequestFailed => REQUEST_FAILED_MESSAGE,
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ─────────────────────────────────────────────────────────────────
// Filters
// ─────────────────────────────────────────────────────────────────

/// One of the three display filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Alphabets,
    Numbers,
    HighestAlphabet,
}

impl FilterKind {
    /// All filters in display and concatenation order
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Alphabets,
        FilterKind::Numbers,
        FilterKind::HighestAlphabet,
    ];

    /// Human-readable checkbox label
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Alphabets => "Alphabets",
            FilterKind::Numbers => "Numbers",
            FilterKind::HighestAlphabet => "Highest Alphabet",
        }
    }

    /// Canonical name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Alphabets => "alphabets",
            FilterKind::Numbers => "numbers",
            FilterKind::HighestAlphabet => "highestAlphabet",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alphabets" => Some(FilterKind::Alphabets),
            "numbers" => Some(FilterKind::Numbers),
            "highestAlphabet" | "highest_alphabet" | "highest-alphabet" => {
                Some(FilterKind::HighestAlphabet)
            }
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            FilterKind::Alphabets => 0,
            FilterKind::Numbers => 1,
            FilterKind::HighestAlphabet => 2,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!(
                "unknown filter '{}' (expected alphabets, numbers or highestAlphabet)",
                s
            )
        })
    }
}

/// Three independent display toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub alphabets: bool,
    pub numbers: bool,
    pub highest_alphabet: bool,
}

impl FilterSelection {
    pub fn is_set(&self, kind: FilterKind) -> bool {
        match kind {
            FilterKind::Alphabets => self.alphabets,
            FilterKind::Numbers => self.numbers,
            FilterKind::HighestAlphabet => self.highest_alphabet,
        }
    }

    /// Flip one toggle, leaving the others as they are
    pub fn toggle(&mut self, kind: FilterKind) {
        let flag = match kind {
            FilterKind::Alphabets => &mut self.alphabets,
            FilterKind::Numbers => &mut self.numbers,
            FilterKind::HighestAlphabet => &mut self.highest_alphabet,
        };
        *flag = !*flag;
    }

    /// True when at least one toggle is on
    pub fn any(&self) -> bool {
        self.alphabets || self.numbers || self.highest_alphabet
    }
}

// ─────────────────────────────────────────────────────────────────
// Server Response
// ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ResponseFields {
    alphabets: Vec<String>,
    numbers: Vec<Value>,
    highest_alphabet: Value,
}

/// A decoded `/bfhl` response body.
///
/// `body` keeps the full object as received (field order included) for the
/// unfiltered view; the typed fields feed the filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerResponse {
    pub body: Value,
    pub alphabets: Vec<String>,
    pub numbers: Vec<Value>,
    pub highest_alphabet: Value,
}

impl ServerResponse {
    /// Decode a response body, rejecting payloads without the required fields
    pub fn from_value(body: Value) -> Result<Self> {
        let fields = ResponseFields::deserialize(&body)
            .map_err(|e| Error::malformed_response(e.to_string()))?;

        Ok(Self {
            body,
            alphabets: fields.alphabets,
            numbers: fields.numbers,
            highest_alphabet: fields.highest_alphabet,
        })
    }
}
