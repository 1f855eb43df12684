//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use speedlens_core::Capture;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse click inside the request list, `row` counted from the list's top
    Click { row: u16 },

    /// Tick event for animations
    Tick,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // ─────────────────────────────────────────────────────────
    // Details Panel Messages
    // ─────────────────────────────────────────────────────────
    /// Open or close the selected request's details
    ToggleDetails,
    /// Expand or collapse every hint of the selected request
    SetHintsExpanded(bool),

    // ─────────────────────────────────────────────────────────
    // Capture Messages
    // ─────────────────────────────────────────────────────────
    /// Re-read the capture file from disk
    ReloadCapture,
    /// A capture was read successfully
    CaptureLoaded(Capture),
    /// Reading the capture failed; the previous capture stays on screen
    CaptureLoadFailed { message: String },

    /// Show or hide the event legend
    ToggleLegend,
}
