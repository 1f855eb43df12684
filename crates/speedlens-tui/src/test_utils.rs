//! Test utilities for TUI rendering verification
//!
//! Helpers for rendering widgets into a ratatui `TestBackend` or a bare
//! `Buffer` and asserting on the text.

use std::path::PathBuf;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use speedlens_app::config::Settings;
use speedlens_app::details::pillbox::PillboxHandle;
use speedlens_app::state::AppState;
use speedlens_app::DetailPanel;
use speedlens_core::{Capture, NetworkResource};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buf_contains(self.buffer(), text)
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a widget into a fresh buffer of the given size.
pub fn render_to_buf<W: Widget>(widget: W, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

/// Text of one buffer row.
pub fn line_text(buf: &Buffer, y: u16) -> String {
    let mut line = String::new();
    if y < buf.area.height {
        for x in 0..buf.area.width {
            line.push_str(buf[(x, y)].symbol());
        }
    }
    line
}

/// Whether any row of the buffer contains `text`.
pub fn buf_contains(buf: &Buffer, text: &str) -> bool {
    (0..buf.area.height).any(|y| line_text(buf, y).contains(text))
}

/// A successful GET of `https://example.com/static/<id>.js`.
pub fn test_resource(id: &str) -> NetworkResource {
    NetworkResource {
        id: id.to_string(),
        url: format!("https://example.com/static/{}.js", id),
        method: "GET".to_string(),
        status_code: 200,
        mime_type: "text/javascript".to_string(),
        cached: false,
        content_length: 512,
        start_time: 0.0,
        response_received_time: 20.0,
        end_time: 50.0,
        did_fail: false,
        request_headers: None,
        response_headers: None,
        hint_records: None,
    }
}

/// A panel that has been opened and finished animating.
pub fn open_panel(info: NetworkResource) -> DetailPanel {
    let mut panel = DetailPanel::new(PillboxHandle::new(), info);
    panel.toggle_visibility();
    while !panel.tick(u16::MAX) {}
    panel
}

/// State loaded with `resources`, first one selected.
pub fn state_with(resources: Vec<NetworkResource>) -> AppState {
    let mut state = AppState::new(PathBuf::from("capture.json"), Settings::default());
    state.viewport_rows = 40;
    state.apply_capture(Capture {
        resources,
        ..Capture::default()
    });
    state
}
