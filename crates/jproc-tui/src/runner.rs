//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use jproc_app::config::{BackendConfig, Settings};
use jproc_app::message::Message;
use jproc_app::process::process_message;
use jproc_app::signals;
use jproc_app::state::AppState;
use jproc_app::HttpBackend;
use jproc_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI against the resolved backend
pub async fn run(settings: Settings, backend: BackendConfig) -> Result<()> {
    // Build the client before touching the terminal so errors print normally
    let client = Arc::new(HttpBackend::new(&backend)?);

    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::terminal_init(e.to_string()))?;
    if let Err(e) = terminal::enable_bracketed_paste() {
        warn!("Bracketed paste unavailable: {}", e);
    }

    let mut state = AppState::with_settings(settings, Some(client.endpoint().to_string()));

    // Unified message channel: signal handler and request completions
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    if let Err(e) = terminal::disable_bracketed_paste() {
        debug!("Failed to disable bracketed paste: {}", e);
    }
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &Arc<HttpBackend>,
) -> Result<()> {
    while !state.should_quit() {
        // Process background messages (completions, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, client);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, client);
        }
    }

    info!("Exiting");
    Ok(())
}
