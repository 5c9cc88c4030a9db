//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const APP_TITLE: &str = "JSON Processor";

/// Main header showing the app title and the backend endpoint
pub struct MainHeader<'a> {
    endpoint: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(endpoint: Option<&'a str>) -> Self {
        Self { endpoint }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::styled(format!(" {}", APP_TITLE), styles::accent_bold())];
        if let Some(endpoint) = self.endpoint {
            spans.push(Span::styled("  →  ", styles::text_muted()));
            spans.push(Span::styled(endpoint, styles::text_secondary()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
