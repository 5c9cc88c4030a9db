//! Key event handlers for each focus

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use jproc_core::FilterKind;

/// Lines scrolled by PageUp/PageDown in the response view
const PAGE_SCROLL: u16 = 10;

/// Convert key events to messages based on the focused control
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Global bindings
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('s') | InputKey::F(5) => Some(Message::Submit),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),

        _ => match state.focus {
            Focus::Input => handle_key_input(state, key),
            Focus::Filters => handle_key_filters(key),
        },
    }
}

/// Handle keys while the text area is focused
fn handle_key_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::RequestQuit),

        InputKey::Enter => edit_input(state, |text| text.push('\n')),

        InputKey::Backspace => {
            if state.form.input().is_empty() {
                None
            } else {
                edit_input(state, |text| {
                    text.pop();
                })
            }
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::InputChanged {
            text: String::new(),
        }),

        InputKey::Char(c) => edit_input(state, |text| text.push(c)),

        InputKey::PageUp => Some(Message::ScrollResponseUp(PAGE_SCROLL)),
        InputKey::PageDown => Some(Message::ScrollResponseDown(PAGE_SCROLL)),

        _ => None,
    }
}

/// Produce an InputChanged message with `f` applied to the current text
fn edit_input(state: &AppState, f: impl FnOnce(&mut String)) -> Option<Message> {
    let mut text = state.form.input().to_string();
    f(&mut text);
    Some(Message::InputChanged { text })
}

/// Handle keys while the filter list is focused
fn handle_key_filters(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FocusInput),
        InputKey::Char('q') => Some(Message::RequestQuit),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousFilter),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextFilter),
        InputKey::Char(' ') | InputKey::Enter => Some(Message::ToggleSelectedFilter),

        InputKey::Char('a') => Some(Message::ToggleFilter(FilterKind::Alphabets)),
        InputKey::Char('n') => Some(Message::ToggleFilter(FilterKind::Numbers)),
        InputKey::Char('h') => Some(Message::ToggleFilter(FilterKind::HighestAlphabet)),

        InputKey::PageUp => Some(Message::ScrollResponseUp(PAGE_SCROLL)),
        InputKey::PageDown => Some(Message::ScrollResponseDown(PAGE_SCROLL)),

        _ => None,
    }
}
