//! Request list widget
//!
//! One pillbox row per request, each followed by its details panel clipped
//! to the panel's current animated height.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use speedlens_app::state::{AppState, RequestEntry};
use speedlens_core::format_milliseconds;

use super::{truncate_str, RequestDetails};
use crate::theme::styles::{self, RequestDetailsStyles};

const STATUS_WIDTH: u16 = 5;
const METHOD_WIDTH: u16 = 8;
const DURATION_WIDTH: u16 = 10;

pub struct RequestList<'a> {
    state: &'a AppState,
    details_styles: &'a RequestDetailsStyles,
}

impl<'a> RequestList<'a> {
    pub fn new(state: &'a AppState, details_styles: &'a RequestDetailsStyles) -> Self {
        Self {
            state,
            details_styles,
        }
    }
}

impl Widget for RequestList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.state.entries().is_empty() {
            buf.set_string(
                area.x + 1,
                area.y,
                "No requests in capture",
                styles::text_muted(),
            );
            return;
        }

        let first = self.state.scroll_offset;
        let last = first + area.height as usize;
        let mut top = 0usize;

        for (index, entry) in self.state.entries().iter().enumerate() {
            if top >= last {
                break;
            }
            let rows = entry.rows();

            if top >= first {
                let y = area.y + (top - first) as u16;
                let selected = self.state.selected == Some(index);
                render_pillbox(entry, selected, Rect { y, height: 1, ..area }, buf);
            }

            let panel_rows = rows - 1;
            if panel_rows > 0 {
                let panel_top = top + 1;
                let panel_bottom = panel_top + panel_rows;
                let visible_top = panel_top.max(first);
                let visible_bottom = panel_bottom.min(last);
                if visible_top < visible_bottom {
                    let panel_area = Rect {
                        x: area.x + 2,
                        y: area.y + (visible_top - first) as u16,
                        width: area.width.saturating_sub(2),
                        height: (visible_bottom - visible_top) as u16,
                    };
                    RequestDetails::new(&entry.details, self.details_styles)
                        .skip(visible_top - panel_top)
                        .render(panel_area, buf);
                }
            }

            top += rows;
        }
    }
}

fn render_pillbox(entry: &RequestEntry, selected: bool, row: Rect, buf: &mut Buffer) {
    let info = entry.info();
    let pill_style = styles::pillbox(entry.pillbox().style());
    buf.set_style(row, pill_style);

    let marker = if selected { "›" } else { " " };
    buf.set_string(row.x, row.y, marker, pill_style.patch(styles::cursor()));

    let glyph = if entry.details.is_visible() { "▾" } else { "▸" };
    buf.set_string(row.x + 1, row.y, glyph, pill_style);

    let mut x = row.x + 3;
    let status = if info.did_fail {
        "ERR".to_string()
    } else {
        info.status_code.to_string()
    };
    buf.set_string(
        x,
        row.y,
        &status,
        pill_style.patch(styles::http_status(info.status_code, info.did_fail)),
    );
    x += STATUS_WIDTH;

    if x + METHOD_WIDTH >= row.right() {
        return;
    }
    buf.set_string(x, row.y, truncate_str(&info.method, 7), pill_style);
    x += METHOD_WIDTH;

    let duration = format_milliseconds(info.duration_ms());
    let name_width = row.right().saturating_sub(x + DURATION_WIDTH) as usize;
    buf.set_string(
        x,
        row.y,
        truncate_str(&entry.short_name(), name_width),
        pill_style,
    );

    if row.width > DURATION_WIDTH {
        let dx = row.right().saturating_sub(duration.len() as u16 + 1);
        buf.set_string(dx, row.y, &duration, pill_style);
    }
}
