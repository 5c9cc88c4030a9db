//! Form controls: the JSON text area, the error line and the submit button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use jproc_core::FormError;

use crate::theme::styles;

/// Shown in the text area while it is empty
pub const INPUT_PLACEHOLDER: &str = r#"Enter JSON, e.g. {"data": ["A", "C", "z"]}"#;

const INPUT_TITLE: &str = " Enter JSON ";
const CURSOR: &str = "_";

/// Multi-line JSON text area
///
/// Long lines wrap at the box edge. The view follows the end of the text,
/// where typing happens.
pub struct JsonInput<'a> {
    text: &'a str,
    focused: bool,
    valid: bool,
}

impl<'a> JsonInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            focused: false,
            valid: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark the text as having failed to parse
    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }
}

impl Widget for JsonInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = match (self.valid, self.focused) {
            (false, _) => styles::border_invalid(),
            (true, true) => styles::border_active(),
            (true, false) => styles::border_inactive(),
        };
        let block = styles::glass_block(self.focused)
            .border_style(border)
            .title(INPUT_TITLE);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.text.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            spans.push(Span::styled(INPUT_PLACEHOLDER, styles::text_muted()));
            Paragraph::new(Line::from(spans))
                .wrap(Wrap { trim: false })
                .render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = self
            .text
            .split('\n')
            .map(|line| Line::styled(line, styles::text_primary()))
            .collect();

        if self.focused {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled(CURSOR, styles::accent()));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

        // Overflow is counted in wrapped rows, not source lines
        let rows = paragraph.line_count(inner.width);
        let overflow = rows.saturating_sub(usize::from(inner.height));
        let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);

        paragraph.scroll((scroll, 0)).render(inner, buf);
    }
}

/// The current form error, if any
pub struct ErrorLine {
    error: Option<FormError>,
}

impl ErrorLine {
    pub fn new(error: Option<FormError>) -> Self {
        Self { error }
    }
}

impl Widget for ErrorLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(error) = self.error {
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(error.message(), styles::status_red()),
            ]))
            .render(area, buf);
        }
    }
}

/// Submit button, or a spinner while a request is running
pub struct SubmitButton<'a> {
    in_flight: bool,
    spinner: &'a str,
}

impl<'a> SubmitButton<'a> {
    pub fn new(in_flight: bool, spinner: &'a str) -> Self {
        Self { in_flight, spinner }
    }
}

impl Widget for SubmitButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.in_flight {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(self.spinner, styles::accent_bold()),
                Span::styled(" Submitting...", styles::text_secondary()),
            ])
        } else {
            Line::from(vec![
                Span::raw(" "),
                Span::styled("[ Submit ]", styles::accent_bold()),
                Span::raw("  "),
                Span::styled("Ctrl+S", styles::keybinding()),
                Span::styled(" / ", styles::text_muted()),
                Span::styled("F5", styles::keybinding()),
            ])
        };

        Paragraph::new(line).render(area, buf);
    }
}
