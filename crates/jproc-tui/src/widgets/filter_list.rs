//! Filter checkboxes

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use jproc_core::{FilterKind, FilterSelection};

use crate::theme::styles;

/// The three display filters as checkboxes
pub struct FilterList<'a> {
    selection: &'a FilterSelection,
    focused: bool,
    /// Highlighted row (index into `FilterKind::ALL`)
    selected: usize,
}

impl<'a> FilterList<'a> {
    pub fn new(selection: &'a FilterSelection) -> Self {
        Self {
            selection,
            focused: false,
            selected: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    fn row(&self, kind: FilterKind) -> Line<'static> {
        let checkbox = if self.selection.is_set(kind) {
            "[x]"
        } else {
            "[ ]"
        };
        let highlighted = self.focused && kind.index() == self.selected;

        if highlighted {
            Line::from(Span::styled(
                format!("> {} {}", checkbox, kind.label()),
                styles::focused_selected(),
            ))
        } else {
            let check_style = if self.selection.is_set(kind) {
                styles::status_green()
            } else {
                styles::text_muted()
            };
            Line::from(vec![
                Span::raw("  "),
                Span::styled(checkbox, check_style),
                Span::raw(" "),
                Span::styled(kind.label(), styles::text_primary()),
            ])
        }
    }
}

impl Widget for FilterList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Filters ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines: Vec<Line> = FilterKind::ALL.iter().map(|kind| self.row(*kind)).collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_all_three_filters_unchecked() {
        let mut term = TestTerminal::new();
        let selection = FilterSelection::default();

        term.render_widget(FilterList::new(&selection), Rect::new(0, 0, 40, 5));

        assert!(term.line_contains(1, "[ ] Alphabets"));
        assert!(term.line_contains(2, "[ ] Numbers"));
        assert!(term.line_contains(3, "[ ] Highest Alphabet"));
    }

    #[test]
    fn test_checked_filters_show_mark() {
        let mut term = TestTerminal::new();
        let mut selection = FilterSelection::default();
        selection.toggle(FilterKind::Numbers);

        term.render_widget(FilterList::new(&selection), Rect::new(0, 0, 40, 5));

        assert!(term.line_contains(1, "[ ] Alphabets"));
        assert!(term.line_contains(2, "[x] Numbers"));
    }

    #[test]
    fn test_highlight_only_when_focused() {
        let mut term = TestTerminal::new();
        let selection = FilterSelection::default();
        let area = Rect::new(0, 0, 40, 5);

        term.render_widget(FilterList::new(&selection).selected(2), area);
        assert!(!term.buffer_contains("> "));

        term.render_widget(FilterList::new(&selection).selected(2).focused(true), area);
        assert!(term.line_contains(3, "> [ ] Highest Alphabet"));
    }
}
