//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::form::FormState;
use jproc_core::{AppPhase, FilterKind};

/// Spinner frames shown while a request is in flight
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Which control receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The JSON text area
    #[default]
    Input,
    /// The filter checkboxes (only once a response exists)
    Filters,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// The form controller
    pub form: FormState,

    /// Application settings from config file
    pub settings: Settings,

    /// Endpoint shown in the header, if known
    pub endpoint: Option<String>,

    /// Focused control
    pub focus: Focus,

    /// Highlighted filter row (index into `FilterKind::ALL`)
    pub selected_filter: usize,

    /// First visible line of the response view
    pub response_scroll: u16,

    /// Spinner animation frame
    pub spinner_frame: usize,

    /// Current application phase
    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), None)
    }

    pub fn with_settings(settings: Settings, endpoint: Option<String>) -> Self {
        Self {
            form: FormState::new(),
            settings,
            endpoint,
            focus: Focus::Input,
            selected_filter: 0,
            response_scroll: 0,
            spinner_frame: 0,
            phase: AppPhase::Running,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    // ─────────────────────────────────────────────────────────
    // Focus Helpers
    // ─────────────────────────────────────────────────────────

    /// Move focus between input and filters. Filters are only reachable once
    /// a response exists, so without one focus stays on the input.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if self.form.has_response() => Focus::Filters,
            _ => Focus::Input,
        };
    }

    pub fn selected_filter_kind(&self) -> FilterKind {
        FilterKind::from_index(self.selected_filter).unwrap_or(FilterKind::Alphabets)
    }

    pub fn select_next_filter(&mut self) {
        self.selected_filter = (self.selected_filter + 1) % FilterKind::ALL.len();
    }

    pub fn select_previous_filter(&mut self) {
        let len = FilterKind::ALL.len();
        self.selected_filter = (self.selected_filter + len - 1) % len;
    }

    // ─────────────────────────────────────────────────────────
    // Response View Helpers
    // ─────────────────────────────────────────────────────────

    /// Pretty-printed displayed data, if there is a response
    pub fn response_text(&self) -> Option<String> {
        self.form.displayed_data().map(|data| data.to_pretty_json())
    }

    fn max_response_scroll(&self) -> u16 {
        let lines = self
            .response_text()
            .map(|text| text.lines().count())
            .unwrap_or(0);
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn scroll_response_up(&mut self, lines: u16) {
        self.response_scroll = self.response_scroll.saturating_sub(lines);
    }

    pub fn scroll_response_down(&mut self, lines: u16) {
        let max = self.max_response_scroll();
        self.response_scroll = self.response_scroll.saturating_add(lines).min(max);
    }

    /// Advance the spinner while a request is pending
    pub fn tick(&mut self) {
        if self.form.is_in_flight() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}
