//! speedlens-tui - Terminal UI for speedlens
//!
//! Draws the request list, details panels and event legend with ratatui, and
//! turns crossterm input into [`speedlens_app::Message`]s.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
pub use theme::event_colors::color_for_type;
