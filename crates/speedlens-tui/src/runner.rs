//! Main TUI runner - entry point and event loop

use std::path::Path;
use std::time::Duration;

use ratatui::layout::Rect;
use speedlens_app::config::Settings;
use speedlens_app::message::Message;
use speedlens_app::signals;
use speedlens_app::state::AppState;
use speedlens_app::{update, UpdateAction};
use speedlens_core::prelude::*;
use speedlens_core::{load_capture, Capture};
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI on an already loaded capture
pub async fn run(capture_path: &Path, capture: Capture, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Mouse input unavailable: {}", e);
    }

    let mut state = AppState::new(capture_path.to_path_buf(), settings);

    // Unified message channel (signal handler, background reloads)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    process_message(&mut state, Message::CaptureLoaded(capture), &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("{}", e);
    }
    ratatui::restore();
    info!("speedlens exiting");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(state.settings.ui.tick_rate_ms);
    let mut list_area = Rect::default();

    while !state.should_quit() {
        // Process external messages (signal handler, reload results)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx);
        }

        // Render
        terminal.draw(|frame| {
            list_area = render::view(frame, state).list;
        })?;

        // Handle terminal events
        if let Some(message) = event::poll(tick_rate, list_area)? {
            process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}

/// Run a message and its follow-ups through `update`, performing actions.
fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone());
        }
        next = result.message;
    }
}

fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::ReloadCapture { path } => {
            tokio::task::spawn_blocking(move || {
                let message = match load_capture(&path) {
                    Ok(capture) => Message::CaptureLoaded(capture),
                    Err(e) => Message::CaptureLoadFailed {
                        message: e.to_string(),
                    },
                };
                if msg_tx.blocking_send(message).is_err() {
                    debug!("Reload finished after the event loop stopped");
                }
            });
        }
    }
}
