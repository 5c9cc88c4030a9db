//! Screen layout definitions for the TUI
//!
//! The filter list and response view only take space once a response exists;
//! before that the input area gets everything below the header.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Filter list height: borders + one row per filter
pub const FILTERS_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and endpoint
    pub header: Rect,

    /// JSON text area
    pub input: Rect,

    /// Single line for the current error message
    pub error: Rect,

    /// Submit button or spinner
    pub submit: Rect,

    /// Filter checkboxes (only with a response)
    pub filters: Option<Rect>,

    /// Displayed data (only with a response)
    pub response: Option<Rect>,

    /// Key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, has_response: bool) -> ScreenAreas {
    if !has_response {
        let chunks = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        return ScreenAreas {
            header: chunks[0],
            input: chunks[1],
            error: chunks[2],
            submit: chunks[3],
            filters: None,
            response: None,
            status: chunks[4],
        };
    }

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Percentage(30),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(FILTERS_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        input: chunks[1],
        error: chunks[2],
        submit: chunks[3],
        filters: Some(chunks[4]),
        response: Some(chunks[5]),
        status: chunks[6],
    }
}
