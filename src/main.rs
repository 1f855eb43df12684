//! speedlens - A terminal viewer for captured network requests
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use speedlens_app::config::{default_config_path, init_config_file, load_settings, Settings};
use speedlens_core::prelude::*;
use speedlens_core::{load_capture, logging};

/// speedlens - A terminal viewer for captured network requests
#[derive(Parser, Debug)]
#[command(name = "speedlens", version)]
#[command(about = "A terminal viewer for captured network requests", long_about = None)]
struct Args {
    /// Capture file (JSON) to open
    #[arg(value_name = "CAPTURE", required_unless_present = "init_config")]
    capture: Option<PathBuf>,

    /// Settings file (defaults to <config dir>/speedlens/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    logging::init()?;

    let args = Args::parse();
    let config_path = args.config.or_else(default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            return Err(Error::config("no config directory on this platform"));
        };
        if init_config_file(&path)? {
            eprintln!("Wrote default settings to {}", path.display());
        } else {
            eprintln!("Settings file already exists: {}", path.display());
        }
        return Ok(());
    }

    let Some(capture_path) = args.capture else {
        return Err(Error::config("no capture file given"));
    };

    let settings = match &config_path {
        Some(path) => load_settings(path),
        None => Settings::default(),
    };
    info!(
        "Loaded settings: tick_rate_ms={} animation_step={}",
        settings.ui.tick_rate_ms, settings.ui.animation_step
    );

    let capture = load_capture(&capture_path)?;
    info!(
        "Opened {} with {} requests and {} events",
        capture_path.display(),
        capture.resources.len(),
        capture.events.len()
    );

    speedlens_tui::run(&capture_path, capture, settings).await
}
