//! Headless mode runner - one submit cycle without the TUI
//!
//! Drives the same TEA loop as the TUI: the input and filters go in as
//! messages, the POST runs as a spawned action, and the completion comes back
//! over the message channel.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use jproc_app::config::BackendConfig;
use jproc_app::message::Message;
use jproc_app::process::process_message;
use jproc_app::state::AppState;
use jproc_app::{BackendClient, HttpBackend};
use jproc_core::prelude::*;
use jproc_core::{FilterKind, FormError, REQUEST_FAILED_MESSAGE};

use super::HeadlessEvent;

/// Run one submit cycle and print its outcome.
///
/// Returns whether the cycle produced a response.
pub async fn run_headless(
    backend: &BackendConfig,
    input: Option<&Path>,
    filters: &[FilterKind],
) -> Result<bool> {
    info!("Starting headless mode against {}", backend.endpoint);

    let text = read_input(input)?;
    let client = Arc::new(HttpBackend::new(backend)?);

    let event = run_cycle(text, filters, client).await?;
    event.emit();

    info!("Headless mode finished (success={})", event.is_success());
    Ok(event.is_success())
}

/// Read the input text from a file, or stdin for `None` and `-`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read input from stdin")?;
            Ok(text)
        }
    }
}

/// Feed `text` and `filters` through the form, submit once and wait for the
/// outcome
pub async fn run_cycle<C>(
    text: String,
    filters: &[FilterKind],
    client: Arc<C>,
) -> Result<HeadlessEvent>
where
    C: BackendClient + Send + Sync + 'static,
{
    let mut state = AppState::new();
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(8);

    process_message(&mut state, Message::InputChanged { text }, &msg_tx, &client);

    // Filters are a set here; naming one twice does not toggle it back off
    for kind in filters {
        if !state.form.filters().is_set(*kind) {
            process_message(&mut state, Message::ToggleFilter(*kind), &msg_tx, &client);
        }
    }

    process_message(&mut state, Message::Submit, &msg_tx, &client);
    if !state.form.is_in_flight() {
        warn!("Input is not valid JSON");
        return Ok(HeadlessEvent::validation_failed(state.form.error_message()));
    }

    while state.form.is_in_flight() {
        let msg = msg_rx.recv().await.ok_or(Error::ChannelClosed)?;
        process_message(&mut state, msg, &msg_tx, &client);
    }

    if state.form.error() == Some(FormError::RequestFailed) {
        return Ok(HeadlessEvent::request_failed(REQUEST_FAILED_MESSAGE));
    }

    Ok(match state.form.displayed_data() {
        Some(data) => HeadlessEvent::response(data.to_value()),
        None => HeadlessEvent::request_failed(REQUEST_FAILED_MESSAGE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jproc_core::{ServerResponse, INVALID_JSON_MESSAGE};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Replays a fixed reply and records what was posted
    struct StaticBackend {
        reply: std::result::Result<Value, u16>,
        seen: Mutex<Vec<Value>>,
    }

    impl StaticBackend {
        fn ok(payload: Value) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(payload),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl BackendClient for StaticBackend {
        async fn submit(&self, body: &Value) -> Result<ServerResponse> {
            self.seen.lock().unwrap().push(body.clone());
            match &self.reply {
                Ok(payload) => ServerResponse::from_value(payload.clone()),
                Err(status) => Err(Error::HttpStatus { status: *status }),
            }
        }
    }

    fn bfhl_reply() -> Value {
        json!({
            "is_success": true,
            "alphabets": ["A", "b"],
            "numbers": ["1"],
            "highest_alphabet": "b"
        })
    }

    #[tokio::test]
    async fn test_cycle_without_filters_shows_full_body() {
        let backend = StaticBackend::ok(bfhl_reply());

        let event = run_cycle(r#"{"data":["A","1","b"]}"#.to_string(), &[], backend.clone())
            .await
            .unwrap();

        let HeadlessEvent::Response { displayed, .. } = event else {
            panic!("expected response, got {:?}", event);
        };
        assert_eq!(displayed, bfhl_reply());
        assert_eq!(
            backend.seen.lock().unwrap().as_slice(),
            &[json!({"data": ["A", "1", "b"]})]
        );
    }

    #[tokio::test]
    async fn test_cycle_applies_filters_in_fixed_order() {
        let backend = StaticBackend::ok(bfhl_reply());
        let filters = [FilterKind::HighestAlphabet, FilterKind::Alphabets];

        let event = run_cycle("{}".to_string(), &filters, backend).await.unwrap();

        let HeadlessEvent::Response { displayed, .. } = event else {
            panic!("expected response, got {:?}", event);
        };
        assert_eq!(displayed, json!(["A", "b", "b"]));
    }

    #[tokio::test]
    async fn test_repeated_filter_stays_on() {
        let backend = StaticBackend::ok(bfhl_reply());
        let filters = [FilterKind::Numbers, FilterKind::Numbers];

        let event = run_cycle("{}".to_string(), &filters, backend).await.unwrap();

        let HeadlessEvent::Response { displayed, .. } = event else {
            panic!("expected response, got {:?}", event);
        };
        assert_eq!(displayed, json!(["1"]));
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_request() {
        let backend = StaticBackend::ok(bfhl_reply());

        let event = run_cycle("{not json".to_string(), &[], backend.clone())
            .await
            .unwrap();

        assert!(matches!(
            event,
            HeadlessEvent::ValidationFailed { ref message, .. } if message == INVALID_JSON_MESSAGE
        ));
        assert!(backend.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_reports_request_failed() {
        let backend = StaticBackend::failing(500);

        let event = run_cycle("[1, 2]".to_string(), &[], backend).await.unwrap();

        assert!(matches!(
            event,
            HeadlessEvent::RequestFailed { ref message, .. } if message == REQUEST_FAILED_MESSAGE
        ));
        assert!(!event.is_success());
    }

    #[tokio::test]
    async fn test_malformed_reply_reports_request_failed() {
        let backend = StaticBackend::ok(json!({"unexpected": true}));

        let event = run_cycle("{}".to_string(), &[], backend).await.unwrap();

        assert!(matches!(event, HeadlessEvent::RequestFailed { .. }));
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(&path, "{\"data\": []}\n").unwrap();

        let text = read_input(Some(&path)).unwrap();

        assert_eq!(text, "{\"data\": []}\n");
    }

    #[test]
    fn test_read_input_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(read_input(Some(&path)).is_err());
    }
}
