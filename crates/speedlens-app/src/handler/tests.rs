//! Tests for handler module

use std::path::PathBuf;

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState, ListHit};
use speedlens_core::{Capture, HintRecord, HintSeverity, NetworkResource};

fn resource(id: &str, hints: Option<Vec<HintRecord>>) -> NetworkResource {
    NetworkResource {
        id: id.to_string(),
        url: format!("https://example.com/{}.css", id),
        method: "GET".to_string(),
        status_code: 200,
        mime_type: "text/css".to_string(),
        cached: false,
        content_length: 512,
        start_time: 0.0,
        response_received_time: 4.0,
        end_time: 8.0,
        did_fail: false,
        request_headers: None,
        response_headers: None,
        hint_records: hints,
    }
}

fn hint(rule: &str) -> HintRecord {
    HintRecord {
        rule: rule.to_string(),
        severity: HintSeverity::Warning,
        description: "Too slow".to_string(),
        timestamp: 2.0,
    }
}

fn loaded_state(resources: Vec<NetworkResource>) -> AppState {
    let mut state = AppState::new(PathBuf::from("capture.json"), Settings::default());
    state.viewport_rows = 40;
    update(
        &mut state,
        Message::CaptureLoaded(Capture {
            resources,
            ..Capture::default()
        }),
    );
    state
}

fn settle(state: &mut AppState) {
    for _ in 0..100 {
        if !state.tick() {
            break;
        }
    }
}

/// Process a message and any follow-ups, the way the event loop does.
fn dispatch(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut next = Some(message);
    let mut action = None;
    while let Some(msg) = next {
        let result = update(state, msg);
        next = result.message;
        action = action.or(result.action);
    }
    action
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = loaded_state(vec![resource("a", None)]);
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_quit_keys() {
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        let mut state = loaded_state(vec![resource("a", None)]);
        dispatch(&mut state, Message::Key(key));
        assert!(state.should_quit());
    }
}

#[test]
fn test_navigation_keys() {
    let mut state = loaded_state(vec![
        resource("a", None),
        resource("b", None),
        resource("c", None),
    ]);

    dispatch(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.selected, Some(1));
    dispatch(&mut state, Message::Key(InputKey::Char('j')));
    assert_eq!(state.selected, Some(2));
    dispatch(&mut state, Message::Key(InputKey::Char('k')));
    assert_eq!(state.selected, Some(1));
    dispatch(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.selected, Some(0));
    dispatch(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.selected, Some(2));
}

#[test]
fn test_enter_toggles_selected_details() {
    let mut state = loaded_state(vec![resource("a", None)]);

    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert!(state.entries()[0].details.is_visible());
    assert!(state.entries()[0].pillbox().is_selected());

    dispatch(&mut state, Message::Key(InputKey::Char(' ')));
    assert!(!state.entries()[0].details.is_visible());
    // Pillbox stays selected until the collapse finishes
    assert!(state.entries()[0].pillbox().is_selected());

    settle(&mut state);
    assert!(!state.entries()[0].pillbox().is_selected());
}

#[test]
fn test_click_on_pillbox_toggles_panel() {
    let mut state = loaded_state(vec![resource("a", None), resource("b", None)]);

    dispatch(&mut state, Message::Click { row: 1 });
    assert_eq!(state.selected, Some(1));
    assert!(state.entries()[1].details.is_visible());
}

#[test]
fn test_click_inside_panel_does_not_collapse_it() {
    let mut state = loaded_state(vec![resource("a", None)]);
    dispatch(&mut state, Message::ToggleDetails);
    settle(&mut state);

    let rows = state.entries()[0].details.visible_rows();
    for row in 1..=rows {
        dispatch(&mut state, Message::Click { row: row as u16 });
        assert!(state.entries()[0].details.is_visible());
    }
}

#[test]
fn test_click_on_hint_title_toggles_hint() {
    let mut state = loaded_state(vec![resource("a", Some(vec![hint("Rule")]))]);
    dispatch(&mut state, Message::ToggleDetails);
    settle(&mut state);
    let collapsed_height = state.entries()[0].details.height();

    assert_eq!(
        state.hit_test(1),
        Some(ListHit::Details { entry: 0, line: 0 })
    );
    dispatch(&mut state, Message::Click { row: 1 });

    let details = &state.entries()[0].details;
    assert!(details.is_visible());
    assert!(details.hint_tree().unwrap().is_expanded(0));
    assert!(details.height() > collapsed_height);
}

#[test]
fn test_expand_keys_only_act_on_open_panel() {
    let mut state = loaded_state(vec![resource("a", Some(vec![hint("A"), hint("B")]))]);

    dispatch(&mut state, Message::Key(InputKey::Char('e')));
    assert!(state.entries()[0].details.hint_tree().is_none());

    dispatch(&mut state, Message::ToggleDetails);
    dispatch(&mut state, Message::Key(InputKey::Char('e')));
    let tree = state.entries()[0].details.hint_tree().unwrap();
    assert!(tree.is_expanded(0) && tree.is_expanded(1));

    dispatch(&mut state, Message::Key(InputKey::Char('E')));
    let tree = state.entries()[0].details.hint_tree().unwrap();
    assert!(!tree.is_expanded(0) && !tree.is_expanded(1));
}

#[test]
fn test_reload_key_requests_reload_action() {
    let mut state = loaded_state(vec![resource("a", None)]);

    let action = dispatch(&mut state, Message::Key(InputKey::Char('r')));

    assert_eq!(
        action,
        Some(UpdateAction::ReloadCapture {
            path: PathBuf::from("capture.json")
        })
    );
}

#[test]
fn test_reload_failure_keeps_entries() {
    let mut state = loaded_state(vec![resource("a", None)]);

    dispatch(
        &mut state,
        Message::CaptureLoadFailed {
            message: "Capture file not found: capture.json".to_string(),
        },
    );

    assert_eq!(state.entries().len(), 1);
    let status = state.status.as_ref().unwrap();
    assert!(status.is_error);
    assert!(status.text.contains("not found"));
}

#[test]
fn test_toggle_legend() {
    let mut state = loaded_state(vec![]);
    let initial = state.show_legend;

    dispatch(&mut state, Message::Key(InputKey::Char('l')));

    assert_eq!(state.show_legend, !initial);
}

#[test]
fn test_tick_animates_open_panel() {
    let mut state = loaded_state(vec![resource("a", None)]);
    dispatch(&mut state, Message::ToggleDetails);
    assert_eq!(state.entries()[0].details.visible_rows(), 0);

    dispatch(&mut state, Message::Tick);
    let after_one = state.entries()[0].details.visible_rows();
    assert_eq!(after_one, state.settings.ui.animation_step as usize);

    settle(&mut state);
    assert_eq!(
        state.entries()[0].details.visible_rows(),
        state.entries()[0].details.height() as usize
    );
}
