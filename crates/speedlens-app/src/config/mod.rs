//! Configuration loading for speedlens
//!
//! Settings live in `<config dir>/speedlens/config.toml` unless a path is
//! given on the command line. Missing or unreadable files fall back to
//! defaults.

mod settings;
mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::{BehaviorSettings, Settings, UiSettings};
