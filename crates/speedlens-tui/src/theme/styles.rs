//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use speedlens_app::details::pillbox::PillboxStyle;
use speedlens_core::HintSeverity;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Color an HTTP status code by class.
pub fn http_status(status_code: i32, did_fail: bool) -> Style {
    let color = match status_code {
        _ if did_fail => palette::STATUS_RED,
        200..=299 => palette::STATUS_GREEN,
        300..=399 => palette::STATUS_BLUE,
        400..=599 => palette::STATUS_RED,
        _ => palette::TEXT_MUTED,
    };
    Style::default().fg(color)
}

pub fn hint_severity(severity: HintSeverity) -> Style {
    let color = match severity {
        HintSeverity::Critical => palette::STATUS_RED,
        HintSeverity::Warning => palette::STATUS_YELLOW,
        HintSeverity::Info => palette::STATUS_BLUE,
    };
    Style::default().fg(color)
}

// --- Pillbox ---
pub fn pillbox(style: PillboxStyle) -> Style {
    match style {
        PillboxStyle::Default => Style::default().fg(palette::TEXT_PRIMARY),
        PillboxStyle::Selected => Style::default()
            .fg(palette::PILLBOX_SELECTED_FG)
            .bg(palette::PILLBOX_SELECTED_BG)
            .add_modifier(Modifier::BOLD),
    }
}

/// Marker column of the row the cursor is on.
pub fn cursor() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block styles ---
pub fn glass_block(focused: bool) -> Block<'static> {
    let border = if focused {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// Styles of the request details panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestDetailsStyles {
    /// Panel background
    pub container: Style,
    pub section_header: Style,
    pub name_cell: Style,
    pub value_cell: Style,
    /// Patched over `container` on even rows
    pub even_row: Style,
    /// Hint detail lines (descriptions, fire time)
    pub hint_detail: Style,
    /// Width of the name column
    pub name_width: u16,
}

impl Default for RequestDetailsStyles {
    fn default() -> Self {
        Self {
            container: Style::default().bg(palette::PANEL_BG),
            section_header: Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            name_cell: Style::default()
                .fg(palette::TEXT_SECONDARY)
                .add_modifier(Modifier::BOLD),
            value_cell: Style::default().fg(palette::TEXT_PRIMARY),
            even_row: Style::default().bg(palette::EVEN_ROW_BG),
            hint_detail: Style::default().fg(palette::TEXT_SECONDARY),
            name_width: 18,
        }
    }
}
