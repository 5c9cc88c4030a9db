//! Read-only view of the displayed data

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Pretty-printed JSON with a vertical scroll offset
///
/// Lines wider than the view wrap onto the following rows.
pub struct ResponseView<'a> {
    text: &'a str,
    scroll: u16,
}

impl<'a> ResponseView<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for ResponseView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Response: ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines: Vec<Line> = self
            .text
            .lines()
            .map(|line| Line::styled(line, styles::json_text()))
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
