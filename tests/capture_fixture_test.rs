//! Loads a realistic capture fixture and drives it through the app layer.

use std::path::{Path, PathBuf};

use speedlens_app::config::Settings;
use speedlens_app::state::AppState;
use speedlens_app::{update, Message};
use speedlens_core::{load_capture, summarize_by_type, Capture, EventRecordType};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_capture.json")
}

fn loaded_state() -> AppState {
    let path = fixture_path();
    let capture = load_capture(&path).unwrap();
    let mut state = AppState::new(path, Settings::default());
    state.viewport_rows = 50;
    update(&mut state, Message::CaptureLoaded(capture));
    state
}

#[test]
fn test_fixture_loads() {
    let capture = load_capture(&fixture_path()).unwrap();

    assert_eq!(capture.resources.len(), 3);
    assert_eq!(capture.events.len(), 6);
    assert!(capture.captured_at.is_some());

    let html = &capture.resources[0];
    let names: Vec<&str> = html
        .request_headers
        .as_ref()
        .unwrap()
        .iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["Host", "Accept", "User-Agent"]);

    // Header pairs may also be written as a list
    let script = &capture.resources[1];
    assert_eq!(
        script.response_headers.as_ref().unwrap().get("age"),
        Some("360")
    );
    assert_eq!(script.content_length, -1);
}

#[test]
fn test_fixture_event_summary() {
    let capture = load_capture(&fixture_path()).unwrap();
    let summary = summarize_by_type(&capture.events);

    assert_eq!(summary[0].type_code, EventRecordType::Layout.code());
    assert_eq!(summary[0].count, 2);
    assert_eq!(summary[0].total_duration, 38.0);
    assert!(summary.iter().any(|s| s.type_code == 42));
}

#[test]
fn test_failed_request_details() {
    let mut state = loaded_state();
    state.select(2);
    update(&mut state, Message::ToggleDetails);

    let details = &state.entries()[2].details;
    let summary = details.content().unwrap().section("Summary").unwrap();
    assert_eq!(summary.table.value("Response Timing"), Some("No response"));
    assert_eq!(summary.table.value("Total Bytes"), Some(""));
    assert_eq!(summary.table.value("Total Timing"), Some("@300ms for 5000ms with an error"));
}

#[test]
fn test_hints_expand_and_collapse() {
    let mut state = loaded_state();
    state.select(1);
    update(&mut state, Message::ToggleDetails);
    let collapsed = state.entries()[1].details.height();

    update(&mut state, Message::SetHintsExpanded(true));
    let expanded = state.entries()[1].details.height();

    // First hint gains a description and a fire time, second only a fire time
    assert_eq!(expanded, collapsed + 3);
}

#[test]
fn test_reload_with_identical_capture_keeps_content() {
    let mut state = loaded_state();
    update(&mut state, Message::ToggleDetails);
    let capture: Capture = load_capture(&fixture_path()).unwrap();

    update(&mut state, Message::CaptureLoaded(capture));

    assert_eq!(state.entries()[0].details.populate_count(), 1);
    assert!(state.entries()[0].details.is_visible());
    assert_eq!(
        state.status.as_ref().unwrap().text,
        "Reloaded: 0 updated, 0 added, 0 removed"
    );
}
