//! Abstract input key event, independent of terminal library.
//!
//! Keeps speedlens-app free of crossterm types; the TUI converts terminal
//! key events into [`InputKey`] at its boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
}
