//! Main update function - handles state transitions (TEA pattern)

use crate::form::SubmitOutcome;
use crate::message::Message;
use crate::state::{AppState, Focus};
use jproc_core::prelude::*;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit | Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste { text } => {
            state.focus = Focus::Input;
            let mut input = state.form.input().to_string();
            input.push_str(&text);
            UpdateResult::message(Message::InputChanged { text: input })
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::InputChanged { text } => {
            state.form.update_input(text);
            UpdateResult::none()
        }

        Message::Submit => match state.form.begin_submit() {
            Some(pending) => {
                info!("Submitting request #{}", pending.seq);
                UpdateResult::action(UpdateAction::SubmitRequest(pending))
            }
            None => UpdateResult::none(),
        },

        Message::SubmitCompleted { seq, result } => {
            match state.form.complete_submit(seq, result) {
                SubmitOutcome::Applied => {
                    info!("Request #{} succeeded", seq);
                    state.response_scroll = 0;
                }
                SubmitOutcome::Failed => warn!("Request #{} failed", seq),
                SubmitOutcome::Stale => {}
            }
            UpdateResult::none()
        }

        Message::ToggleFilter(kind) => {
            state.form.toggle_filter(kind);
            state.selected_filter = kind.index();
            state.response_scroll = 0;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext | Message::FocusPrevious => {
            state.cycle_focus();
            UpdateResult::none()
        }

        Message::FocusInput => {
            state.focus = Focus::Input;
            UpdateResult::none()
        }

        Message::SelectNextFilter => {
            state.select_next_filter();
            UpdateResult::none()
        }

        Message::SelectPreviousFilter => {
            state.select_previous_filter();
            UpdateResult::none()
        }

        Message::ToggleSelectedFilter => {
            UpdateResult::message(Message::ToggleFilter(state.selected_filter_kind()))
        }

        Message::ScrollResponseUp(lines) => {
            state.scroll_response_up(lines);
            UpdateResult::none()
        }

        Message::ScrollResponseDown(lines) => {
            state.scroll_response_down(lines);
            UpdateResult::none()
        }
    }
}
