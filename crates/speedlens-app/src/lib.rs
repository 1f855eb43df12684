//! speedlens-app - Application state and orchestration for speedlens
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the request details panel with its hint tree, and settings
//! loading.

pub mod config;
pub mod details;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use details::{DetailPanel, Display, Propagation};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, ListHit, RequestEntry, StatusMessage};
