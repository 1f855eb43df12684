//! Fixed colors for timeline event types.
//!
//! Each registered event type code has one color; every other code falls
//! back to light grey.

use ratatui::style::Color;
use speedlens_core::EventRecordType;

/// Color of event types without an entry.
pub const DEFAULT_EVENT_COLOR: Color = Color::Rgb(211, 211, 211);

/// Registered event type codes and their colors.
pub const EVENT_TYPE_COLORS: &[(EventRecordType, Color)] = &[
    (EventRecordType::DomEvent, Color::Rgb(255, 165, 0)),
    (EventRecordType::DomEventDispatch, Color::Rgb(255, 255, 0)),
    (EventRecordType::DomBinding, Color::Rgb(152, 251, 152)),
    (EventRecordType::JavaScriptExecution, Color::Rgb(255, 192, 203)),
    (EventRecordType::Layout, Color::Rgb(138, 43, 226)),
    (EventRecordType::Paint, Color::Rgb(25, 25, 112)),
    (EventRecordType::ParseHtml, Color::Rgb(205, 92, 92)),
    (EventRecordType::JavaScriptCompile, Color::Rgb(0, 255, 255)),
    (EventRecordType::TimerFired, Color::Rgb(0, 0, 255)),
    (EventRecordType::XhrReadyStateChange, Color::Rgb(144, 238, 144)),
    (EventRecordType::RecalcStyle, Color::Rgb(0, 100, 0)),
    (EventRecordType::EvalScript, Color::Rgb(255, 218, 185)),
    (EventRecordType::GarbageCollect, Color::Rgb(165, 42, 42)),
    (EventRecordType::MouseHoverStyle, Color::Rgb(50, 205, 50)),
];

/// Color for an event type code.
pub fn color_for_type(code: i32) -> Color {
    EVENT_TYPE_COLORS
        .iter()
        .find(|(kind, _)| kind.code() == code)
        .map_or(DEFAULT_EVENT_COLOR, |(_, color)| *color)
}
