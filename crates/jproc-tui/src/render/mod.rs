//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use jproc_app::state::{AppState, Focus};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads the state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let form = &state.form;
    let areas = layout::create(area, form.has_response());

    frame.render_widget(
        widgets::MainHeader::new(state.endpoint.as_deref()),
        areas.header,
    );

    frame.render_widget(
        widgets::JsonInput::new(form.input())
            .focused(state.focus == Focus::Input)
            .valid(form.is_valid_json()),
        areas.input,
    );

    frame.render_widget(widgets::ErrorLine::new(form.error()), areas.error);

    frame.render_widget(
        widgets::SubmitButton::new(form.is_in_flight(), state.spinner()),
        areas.submit,
    );

    if let Some(filters_area) = areas.filters {
        frame.render_widget(
            widgets::FilterList::new(form.filters())
                .focused(state.focus == Focus::Filters)
                .selected(state.selected_filter),
            filters_area,
        );
    }

    if let (Some(response_area), Some(text)) = (areas.response, state.response_text()) {
        frame.render_widget(
            widgets::ResponseView::new(&text).scroll(state.response_scroll),
            response_area,
        );
    }

    if state.settings.ui.show_key_hints {
        frame.render_widget(
            widgets::StatusBar::new(state.focus, form.has_response()),
            areas.status,
        );
    }
}
