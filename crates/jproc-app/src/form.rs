//! The form controller: input text, validity, error, filters and last response
//!
//! All mutation goes through the methods below. The network call itself is
//! not performed here; `begin_submit` hands back a [`PendingSubmit`] for the
//! event loop to execute and `complete_submit` applies its outcome.

use serde_json::Value;

use jproc_core::prelude::*;
use jproc_core::{
    compute_displayed_data, DisplayedData, FilterKind, FilterSelection, FormError, ServerResponse,
};

/// Whether a response has ever been received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    NoResponseYet,
    HasResponse,
}

/// A validated body waiting to be posted
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmit {
    /// Sequence number of this request; only the latest one is applied
    pub seq: u64,
    /// Parsed user input, sent verbatim
    pub body: Value,
}

/// What `complete_submit` did with a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Response stored
    Applied,
    /// Error message set, previous response kept
    Failed,
    /// A newer request was issued since; completion ignored
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: String,
    invalid_json: bool,
    error: Option<FormError>,
    filters: FilterSelection,
    response: Option<ServerResponse>,
    request_seq: u64,
    in_flight: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// False only after a submit found the input unparsable
    pub fn is_valid_json(&self) -> bool {
        !self.invalid_json
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    /// The user-facing error text, empty when there is none
    pub fn error_message(&self) -> &'static str {
        self.error.map(|e| e.message()).unwrap_or("")
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn response(&self) -> Option<&ServerResponse> {
        self.response.as_ref()
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    pub fn phase(&self) -> FormPhase {
        if self.has_response() {
            FormPhase::HasResponse
        } else {
            FormPhase::NoResponseYet
        }
    }

    /// True while the latest request has not completed
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }

    // ─────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────

    /// Replace the input text. Clears the validity flag and the error.
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.invalid_json = false;
        self.error = None;
    }

    /// Validate the input and, when it parses, allocate a new request.
    ///
    /// Returns `None` when the input is not valid JSON; no request must be
    /// issued in that case.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        match self.parse_input() {
            Ok(body) => {
                self.request_seq += 1;
                self.in_flight = true;
                Some(PendingSubmit {
                    seq: self.request_seq,
                    body,
                })
            }
            Err(e) => {
                debug!("Rejected submit: {}", e);
                self.invalid_json = true;
                self.error = Some(FormError::InvalidJson);
                None
            }
        }
    }

    /// Parse the current input.
    ///
    /// Nesting deeper than `serde_json`'s recursion limit of 128 is rejected.
    pub fn parse_input(&self) -> Result<Value> {
        serde_json::from_str(&self.input).map_err(|e| Error::invalid_input(e.to_string()))
    }

    /// Apply the outcome of request `seq`.
    ///
    /// A success replaces the response and leaves any error message alone.
    /// A failure sets the request error and keeps the previous response.
    pub fn complete_submit(
        &mut self,
        seq: u64,
        result: std::result::Result<ServerResponse, String>,
    ) -> SubmitOutcome {
        if seq != self.request_seq {
            debug!(
                "Discarding stale completion #{} (latest is #{})",
                seq, self.request_seq
            );
            return SubmitOutcome::Stale;
        }

        self.in_flight = false;
        match result {
            Ok(response) => {
                self.response = Some(response);
                SubmitOutcome::Applied
            }
            Err(cause) => {
                debug!("Request #{} failed: {}", seq, cause);
                self.error = Some(FormError::RequestFailed);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn toggle_filter(&mut self, kind: FilterKind) {
        self.filters.toggle(kind);
    }

    pub fn displayed_data(&self) -> Option<DisplayedData> {
        compute_displayed_data(self.response.as_ref(), &self.filters)
    }
}
