//! Status bar widget
//!
//! Shows the last status message and the selection position.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use speedlens_app::state::AppState;

use super::truncate_str;
use crate::theme::styles;

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn position(&self) -> String {
        let total = self.state.entries().len();
        match self.state.selected {
            Some(index) => format!("{}/{}", index + 1, total),
            None => format!("-/{}", total),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let position = self.position();
        let position_x = area.right().saturating_sub(position.len() as u16 + 1);
        buf.set_string(position_x, area.y, &position, styles::text_secondary());

        if let Some(status) = &self.state.status {
            let style = if status.is_error {
                styles::status_red()
            } else {
                styles::text_muted()
            };
            let width = position_x.saturating_sub(area.x + 2) as usize;
            buf.set_string(area.x + 1, area.y, truncate_str(&status.text, width), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buf_contains, render_to_buf, state_with, test_resource};

    #[test]
    fn test_status_bar_shows_position_and_message() {
        let state = state_with(vec![test_resource("a"), test_resource("b")]);
        let buf = render_to_buf(StatusBar::new(&state), 60, 1);

        assert!(buf_contains(&buf, "1/2"));
        assert!(buf_contains(&buf, "Loaded 2 requests"));
    }

    #[test]
    fn test_status_bar_error_is_red() {
        let mut state = state_with(vec![]);
        state.set_error("Capture file not found: x.json");
        let buf = render_to_buf(StatusBar::new(&state), 60, 1);

        assert!(buf_contains(&buf, "-/0"));
        assert!(buf_contains(&buf, "not found"));
        assert_eq!(buf[(1, 0)].fg, crate::theme::palette::STATUS_RED);
    }
}
