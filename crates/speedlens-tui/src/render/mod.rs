//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use speedlens_app::state::AppState;

use super::{layout, widgets};
use crate::theme::palette;
use crate::theme::styles::RequestDetailsStyles;

/// Layout for the current state, shared by rendering and mouse hit testing.
pub fn screen_areas(area: Rect, state: &AppState) -> layout::ScreenAreas {
    let legend_rows = if state.show_legend {
        state.event_summary().len()
    } else {
        0
    };
    layout::create(area, legend_rows)
}

/// Render the complete UI (View function in TEA)
///
/// Only touches state to record the list viewport height, which selection
/// scrolling depends on. Returns the layout it drew.
pub fn view(frame: &mut Frame, state: &mut AppState) -> layout::ScreenAreas {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = screen_areas(area, state);
    state.set_viewport_rows(areas.list.height as usize);

    let capture_name = state
        .capture_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| state.capture_path.display().to_string());
    let header = widgets::MainHeader::new(&capture_name, state.entries().len())
        .captured_at(state.captured_at());
    frame.render_widget(header, areas.header);

    let details_styles = RequestDetailsStyles::default();
    frame.render_widget(
        widgets::RequestList::new(state, &details_styles),
        areas.list,
    );

    if let Some(legend_area) = areas.legend {
        let summaries = state.event_summary();
        frame.render_widget(widgets::EventLegend::new(&summaries), legend_area);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    areas
}
