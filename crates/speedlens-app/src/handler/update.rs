//! Main update function - handles state transitions (TEA pattern)

use speedlens_core::prelude::*;

use crate::details::Propagation;
use crate::message::Message;
use crate::state::{AppState, ListHit};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Click { row } => {
            handle_click(state, row as usize);
            UpdateResult::none()
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Details Panel Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleDetails => {
            state.toggle_selected_details();
            UpdateResult::none()
        }

        Message::SetHintsExpanded(expanded) => {
            if let Some(entry) = state.selected_entry_mut() {
                let changed = entry.details.set_hints_expanded(expanded);
                debug!("{} hint(s) changed expansion", changed);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Capture Messages
        // ─────────────────────────────────────────────────────────
        Message::ReloadCapture => {
            state.set_status(format!("Reloading {}...", state.capture_path.display()));
            UpdateResult::action(UpdateAction::ReloadCapture {
                path: state.capture_path.clone(),
            })
        }

        Message::CaptureLoaded(capture) => {
            state.apply_capture(capture);
            UpdateResult::none()
        }

        Message::CaptureLoadFailed { message } => {
            warn!("Capture reload failed: {}", message);
            state.set_error(message);
            UpdateResult::none()
        }

        Message::ToggleLegend => {
            state.show_legend = !state.show_legend;
            UpdateResult::none()
        }
    }
}

/// Route a click on the request list.
///
/// A click on a pillbox toggles its panel. A click inside an open panel goes
/// to the panel first; the list only toggles the panel when the panel lets
/// the click through.
fn handle_click(state: &mut AppState, row: usize) {
    match state.hit_test(row) {
        Some(ListHit::Pillbox(index)) => {
            state.select(index);
            state.toggle_selected_details();
        }
        Some(ListHit::Details { entry, line }) => {
            state.select(entry);
            let propagation = state
                .selected_entry_mut()
                .map_or(Propagation::Continue, |e| e.details.on_click(line));
            if propagation == Propagation::Continue {
                state.toggle_selected_details();
            }
        }
        None => {}
    }
}
