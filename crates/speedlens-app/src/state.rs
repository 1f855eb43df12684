//! Application state (Model in TEA pattern)

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use speedlens_core::prelude::*;
use speedlens_core::{summarize_by_type, Capture, EventRecord, NetworkResource, TypeSummary};

use crate::config::Settings;
use crate::details::pillbox::PillboxHandle;
use crate::details::DetailPanel;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// One request in the list: its pillbox row and its details panel.
#[derive(Debug)]
pub struct RequestEntry {
    pub details: DetailPanel,
}

impl RequestEntry {
    pub fn new(info: NetworkResource) -> Self {
        Self {
            details: DetailPanel::new(PillboxHandle::new(), info),
        }
    }

    pub fn info(&self) -> &NetworkResource {
        self.details.info()
    }

    pub fn pillbox(&self) -> &PillboxHandle {
        self.details.pillbox()
    }

    /// Rows taken in the list: the pillbox plus whatever the panel shows.
    pub fn rows(&self) -> usize {
        1 + self.details.visible_rows()
    }

    /// Label for the pillbox: the last path segment, else the host, else the
    /// raw URL.
    pub fn short_name(&self) -> String {
        let raw = &self.info().url;
        let Ok(parsed) = url::Url::parse(raw) else {
            return raw.clone();
        };

        let last_segment = parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty());
        match (last_segment, parsed.host_str()) {
            (Some(segment), _) => segment.to_string(),
            (None, Some(host)) => host.to_string(),
            (None, None) => raw.clone(),
        }
    }
}

/// What a row of the request list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListHit {
    Pillbox(usize),
    Details { entry: usize, line: usize },
}

/// Transient message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub capture_path: PathBuf,
    pub settings: Settings,
    entries: Vec<RequestEntry>,
    events: Vec<EventRecord>,
    captured_at: Option<DateTime<Utc>>,
    pub selected: Option<usize>,
    /// First list row on screen
    pub scroll_offset: usize,
    /// Rows available to the request list
    pub viewport_rows: usize,
    pub show_legend: bool,
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn new(capture_path: PathBuf, settings: Settings) -> Self {
        let show_legend = settings.ui.show_legend;
        Self {
            phase: AppPhase::Running,
            capture_path,
            settings,
            entries: Vec::new(),
            events: Vec::new(),
            captured_at: None,
            selected: None,
            scroll_offset: 0,
            viewport_rows: 0,
            show_legend,
            status: None,
        }
    }

    // ── Capture ───────────────────────────────────────────────────────────────

    /// Load a capture, reusing the panels of requests that are still present.
    ///
    /// Requests that changed get [`DetailPanel::update_info`]; requests whose
    /// only change is their hint records get
    /// [`DetailPanel::set_hint_records`]; requests that disappeared are
    /// disposed.
    pub fn apply_capture(&mut self, capture: Capture) {
        let first_load = self.entries.is_empty();
        let selected_id = self
            .selected_entry()
            .map(|entry| entry.info().id.clone());

        let mut previous: HashMap<String, RequestEntry> = self
            .entries
            .drain(..)
            .map(|entry| (entry.info().id.clone(), entry))
            .collect();

        let (mut updated, mut added) = (0usize, 0usize);
        for info in capture.resources {
            match previous.remove(&info.id) {
                Some(mut entry) => {
                    if *entry.info() != info {
                        // Only a fresh populate can drop an existing tree.
                        if entry.info().same_except_hints(&info) && info.hint_records.is_some() {
                            entry.details.set_hint_records(info.hint_records);
                        } else {
                            entry.details.update_info(info);
                        }
                        updated += 1;
                    }
                    self.entries.push(entry);
                }
                None => {
                    let mut entry = RequestEntry::new(info);
                    if self.settings.behavior.expand_failed_on_load && entry.info().did_fail {
                        entry.details.toggle_visibility();
                    }
                    self.entries.push(entry);
                    added += 1;
                }
            }
        }

        let removed = previous.len();
        for (_, mut entry) in previous {
            entry.details.dispose();
        }

        self.events = capture.events;
        self.captured_at = capture.captured_at;

        self.selected = selected_id
            .and_then(|id| self.entries.iter().position(|e| e.info().id == id))
            .or(if self.entries.is_empty() { None } else { Some(0) });
        self.ensure_selected_visible();

        let text = if first_load {
            format!("Loaded {} requests", self.entries.len())
        } else {
            format!(
                "Reloaded: {} updated, {} added, {} removed",
                updated, added, removed
            )
        };
        info!("{}", text);
        self.set_status(text);
    }

    pub fn entries(&self) -> &[RequestEntry] {
        &self.entries
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.captured_at
    }

    pub fn event_summary(&self) -> Vec<TypeSummary> {
        summarize_by_type(&self.events)
    }

    // ── Selection ─────────────────────────────────────────────────────────────

    pub fn selected_entry(&self) -> Option<&RequestEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    pub fn selected_entry_mut(&mut self) -> Option<&mut RequestEntry> {
        self.selected.and_then(|i| self.entries.get_mut(i))
    }

    pub fn select(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected = Some(index);
            self.ensure_selected_visible();
        }
    }

    pub fn select_next(&mut self) {
        match self.selected {
            Some(i) => self.select((i + 1).min(self.entries.len().saturating_sub(1))),
            None => self.select(0),
        }
    }

    pub fn select_previous(&mut self) {
        match self.selected {
            Some(i) => self.select(i.saturating_sub(1)),
            None => self.select(0),
        }
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        self.select(self.entries.len().saturating_sub(1));
    }

    /// Toggle the selected request's details. Returns whether they are now open.
    pub fn toggle_selected_details(&mut self) -> Option<bool> {
        let open = self.selected_entry_mut()?.details.toggle_visibility();
        self.ensure_selected_visible();
        Some(open)
    }

    // ── Layout ────────────────────────────────────────────────────────────────

    /// First list row of entry `index`.
    pub fn entry_top(&self, index: usize) -> usize {
        self.entries.iter().take(index).map(RequestEntry::rows).sum()
    }

    pub fn total_rows(&self) -> usize {
        self.entries.iter().map(RequestEntry::rows).sum()
    }

    /// Map a row of the visible list to the entry it belongs to.
    pub fn hit_test(&self, row: usize) -> Option<ListHit> {
        let target = self.scroll_offset + row;
        let mut top = 0;
        for (index, entry) in self.entries.iter().enumerate() {
            let rows = entry.rows();
            if target == top {
                return Some(ListHit::Pillbox(index));
            }
            if target < top + rows {
                return Some(ListHit::Details {
                    entry: index,
                    line: target - top - 1,
                });
            }
            top += rows;
        }
        None
    }

    pub fn set_viewport_rows(&mut self, rows: usize) {
        if self.viewport_rows != rows {
            self.viewport_rows = rows;
            self.ensure_selected_visible();
        }
    }

    /// Scroll so the selected pillbox is on screen, showing as much of its
    /// panel as fits.
    pub fn ensure_selected_visible(&mut self) {
        let Some(index) = self.selected else {
            self.scroll_offset = 0;
            return;
        };
        if self.viewport_rows == 0 {
            return;
        }

        let top = self.entry_top(index);
        let bottom = top + self.entries.get(index).map_or(1, RequestEntry::rows);
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if bottom > self.scroll_offset + self.viewport_rows {
            self.scroll_offset = (bottom - self.viewport_rows).min(top);
        }
    }

    // ── Animation ─────────────────────────────────────────────────────────────

    /// Advance every panel's height animation. Returns whether any is still
    /// running.
    pub fn tick(&mut self) -> bool {
        let step = self.settings.ui.animation_step;
        let mut animating = false;
        for entry in &mut self.entries {
            entry.details.tick(step);
            animating |= entry.details.is_animating();
        }
        if self.selected.is_some_and(|i| {
            self.entries
                .get(i)
                .is_some_and(|entry| entry.details.is_visible())
        }) {
            self.ensure_selected_visible();
        }
        animating
    }

    // ── Status / lifecycle ────────────────────────────────────────────────────

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    /// Dispose every panel and stop the event loop.
    pub fn quit(&mut self) {
        for entry in &mut self.entries {
            entry.details.dispose();
        }
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
