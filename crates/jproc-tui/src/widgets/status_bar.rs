//! Key hint bar at the bottom of the screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use jproc_app::Focus;

use crate::theme::styles;

/// Hints for the focused control
pub struct StatusBar {
    focus: Focus,
    has_response: bool,
}

impl StatusBar {
    pub fn new(focus: Focus, has_response: bool) -> Self {
        Self {
            focus,
            has_response,
        }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = match self.focus {
            Focus::Input => vec![("Ctrl+S", "submit"), ("Ctrl+U", "clear")],
            Focus::Filters => vec![
                ("↑↓", "select"),
                ("Space", "toggle"),
                ("a/n/h", "filters"),
                ("PgUp/PgDn", "scroll"),
            ],
        };
        if self.has_response {
            hints.push(("Tab", "focus"));
        }
        hints.push(match self.focus {
            Focus::Input => ("Esc", "quit"),
            Focus::Filters => ("q", "quit"),
        });
        hints
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
