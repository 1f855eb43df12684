//! Centralized theme system.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `event_colors`: Fixed colors for timeline event types

pub mod event_colors;
pub mod palette;
pub mod styles;
