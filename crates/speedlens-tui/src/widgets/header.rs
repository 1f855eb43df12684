//! Header bar widget
//!
//! Shows the app title, the capture file, and keybindings.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing app title, capture name, and keybindings
pub struct MainHeader<'a> {
    capture_name: &'a str,
    captured_at: Option<DateTime<Utc>>,
    request_count: usize,
}

impl<'a> MainHeader<'a> {
    pub fn new(capture_name: &'a str, request_count: usize) -> Self {
        Self {
            capture_name,
            captured_at: None,
            request_count,
        }
    }

    pub fn captured_at(mut self, captured_at: Option<DateTime<Utc>>) -> Self {
        self.captured_at = captured_at;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::raw(" "),
            Span::styled("SpeedLens", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.capture_name, styles::text_secondary()),
            Span::styled(
                format!("  {} requests", self.request_count),
                styles::text_muted(),
            ),
        ];
        if let Some(at) = self.captured_at {
            let local: DateTime<Local> = at.into();
            left.push(Span::styled(
                format!("  {}", local.format("%Y-%m-%d %H:%M:%S")),
                styles::text_muted(),
            ));
        }
        let left_line = Line::from(left);
        let left_width = left_line.width() as u16;

        let mut shortcuts = Vec::new();
        for (key, label) in [
            ("Enter", "Details"),
            ("e/E", "Hints"),
            ("l", "Legend"),
            ("r", "Reload"),
            ("q", "Quit"),
        ] {
            shortcuts.push(Span::styled("[", styles::text_muted()));
            shortcuts.push(Span::styled(key, styles::keybinding()));
            shortcuts.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        let right_line = Line::from(shortcuts);
        let right_width = right_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Shortcuts only when they fit beside the title
        if left_width + right_width < inner.width {
            let x = inner.right().saturating_sub(right_width);
            buf.set_line(x, inner.y, &right_line, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_capture_name_and_count() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(MainHeader::new("session.json", 12), term.area());

        assert!(term.buffer_contains("SpeedLens"));
        assert!(term.buffer_contains("session.json"));
        assert!(term.buffer_contains("12 requests"));
        assert!(term.buffer_contains("Reload"));
    }

    #[test]
    fn test_header_hides_shortcuts_when_narrow() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(MainHeader::new("session.json", 1), term.area());

        assert!(term.buffer_contains("SpeedLens"));
        assert!(!term.buffer_contains("Reload"));
    }
}
