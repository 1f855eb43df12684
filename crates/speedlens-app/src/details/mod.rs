//! # Request Details Panel
//!
//! The collapsible panel shown under a request's pillbox. It lists a summary
//! of the request, its request and response headers, and a tree of the hint
//! records attached to it.
//!
//! The panel is created lazily: nothing is built until the first
//! [`DetailPanel::toggle_visibility`]. Collapsing happens in two phases. The
//! target height drops to zero immediately; the panel is only hidden (and its
//! pillbox deselected) once the collapse animation completes, see
//! [`DetailPanel::on_transition_end`].

pub mod content;
pub mod hint_tree;
pub mod listeners;
pub mod pillbox;


use speedlens_core::prelude::*;
use speedlens_core::{HintRecord, NetworkResource};

use content::{
    header_table, summary_table, ContentLine, DetailContent, REQUEST_HEADERS_TITLE,
    RESPONSE_HEADERS_TITLE, SUMMARY_TITLE,
};
use hint_tree::{ExpansionChange, HintTree};
use listeners::{ListenerId, ListenerManager};
use pillbox::{PillboxHandle, PillboxStyle};

/// Whether the panel element takes up space in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
}

/// Whether an input event should continue to outer handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// The panel's own element, created on first expand.
#[derive(Debug)]
struct PanelElement {
    display: Display,
    /// Height the panel is animating towards, in rows.
    height: u16,
    /// Height currently on screen, in rows.
    shown_height: u16,
    /// A height change is in flight and has not reported its end yet.
    transitioning: bool,
}

impl PanelElement {
    fn new() -> Self {
        Self {
            display: Display::None,
            height: 0,
            shown_height: 0,
            transitioning: false,
        }
    }

    fn set_height(&mut self, height: u16) {
        self.height = height;
        self.transitioning = true;
    }
}

#[derive(Debug)]
struct MountedTree {
    tree: HintTree,
    registration: ListenerId,
}

/// Collapsible details panel for one captured request.
///
/// Its parent is the request list, which asks [`DetailPanel::visible_rows`]
/// how much space to give it; styling lives in the TUI theme.
#[derive(Debug)]
pub struct DetailPanel {
    info: NetworkResource,
    pillbox: PillboxHandle,
    element: Option<PanelElement>,
    content: Option<DetailContent>,
    hint_tree: Option<MountedTree>,
    listeners: ListenerManager,
    visible: bool,
    populate_count: u64,
}

impl DetailPanel {
    /// Store the request and the pillbox this panel belongs to. Builds nothing.
    pub fn new(pillbox: PillboxHandle, info: NetworkResource) -> Self {
        Self {
            info,
            pillbox,
            element: None,
            content: None,
            hint_tree: None,
            listeners: ListenerManager::new(),
            visible: false,
            populate_count: 0,
        }
    }

    /// Expand or collapse the panel.
    ///
    /// Returns whether the panel is now open.
    pub fn toggle_visibility(&mut self) -> bool {
        if self.visible {
            if let Some(element) = self.element.as_mut() {
                element.set_height(0);
            }
            self.visible = false;
        } else {
            if self.content.is_none() {
                self.content = Some(DetailContent::new());
                self.populate_content();
            }

            let element = self.element.get_or_insert_with(PanelElement::new);
            element.display = Display::Block;
            self.visible = true;
            self.fix_height();
            self.pillbox.set_style(PillboxStyle::Selected);
        }
        debug!(
            "Request {} details {}",
            self.info.id,
            if self.visible { "opened" } else { "closed" }
        );
        self.visible
    }

    /// Replace the request and rebuild the content, open or not.
    pub fn update_info(&mut self, info: NetworkResource) {
        self.info = info;
        if self.content.is_none() {
            self.content = Some(DetailContent::new());
        }
        self.populate_content();
        self.fix_height();
    }

    /// Re-sync only the hint tree with the current request's hint records.
    ///
    /// Does nothing before the content has been built or while the request
    /// has no hint records.
    pub fn refresh(&mut self) {
        let has_wrapper = self
            .content
            .as_ref()
            .is_some_and(DetailContent::has_hint_wrapper);
        if !has_wrapper || self.info.hint_records.is_none() {
            return;
        }

        match self.hint_tree.as_mut() {
            Some(mounted) => {
                mounted
                    .tree
                    .refresh(self.info.hint_records.as_deref().unwrap_or_default());
            }
            None => self.create_hint_tree(),
        }
        self.fix_height();
    }

    /// Replace the request's hint records, then [`refresh`](Self::refresh).
    pub fn set_hint_records(&mut self, records: Option<Vec<HintRecord>>) {
        self.info.hint_records = records;
        self.refresh();
    }

    /// Flip one hint item and resize to fit.
    pub fn toggle_hint(&mut self, item: usize) -> Option<ExpansionChange> {
        let change = self.hint_tree.as_mut()?.tree.toggle(item)?;
        self.on_expansion_change(change);
        Some(change)
    }

    /// Expand or collapse every hint item. Returns how many items changed.
    pub fn set_hints_expanded(&mut self, expanded: bool) -> usize {
        let changes = match self.hint_tree.as_mut() {
            Some(mounted) => mounted.tree.set_all_expanded(expanded),
            None => return 0,
        };
        for change in &changes {
            self.on_expansion_change(*change);
        }
        changes.len()
    }

    /// Handle a click on `line` of the panel.
    ///
    /// Clicks inside the panel never reach the request list, which would
    /// otherwise collapse the panel.
    pub fn on_click(&mut self, line: usize) -> Propagation {
        if self.element.is_none() {
            return Propagation::Continue;
        }

        let item = match self.lines().get(line) {
            Some(ContentLine::Hint(tree_line)) if tree_line.expanded.is_some() => {
                Some(tree_line.item)
            }
            _ => None,
        };
        if let Some(item) = item {
            self.toggle_hint(item);
        }
        Propagation::Stop
    }

    /// Advance the height animation by up to `step` rows.
    ///
    /// Returns true on the tick the animation completes.
    pub fn tick(&mut self, step: u16) -> bool {
        let Some(element) = self.element.as_mut() else {
            return false;
        };
        if element.display == Display::None {
            return false;
        }

        let step = step.max(1);
        if element.shown_height < element.height {
            element.shown_height = element.shown_height.saturating_add(step).min(element.height);
        } else if element.shown_height > element.height {
            element.shown_height = element.shown_height.saturating_sub(step).max(element.height);
        }

        if element.transitioning && element.shown_height == element.height {
            element.transitioning = false;
            self.on_transition_end();
            return true;
        }
        false
    }

    /// Finish a height animation. A panel that is still closed is hidden and
    /// its pillbox deselected.
    pub fn on_transition_end(&mut self) {
        if self.visible {
            return;
        }
        if let Some(element) = self.element.as_mut() {
            element.display = Display::None;
            element.shown_height = 0;
            self.pillbox.set_style(PillboxStyle::Default);
            trace!("Request {} details hidden", self.info.id);
        }
    }

    /// Release everything the panel built and every registration it holds.
    pub fn dispose(&mut self) {
        self.listeners.remove_all();
        self.hint_tree = None;
        self.content = None;
        self.element = None;
        self.visible = false;
        self.pillbox.set_style(PillboxStyle::Default);
        debug!("Request {} details disposed", self.info.id);
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn info(&self) -> &NetworkResource {
        &self.info
    }

    pub fn pillbox(&self) -> &PillboxHandle {
        &self.pillbox
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// `Display::None` until the element exists.
    pub fn display(&self) -> Display {
        self.element
            .as_ref()
            .map_or(Display::None, |element| element.display)
    }

    /// Target height in rows.
    pub fn height(&self) -> u16 {
        self.element.as_ref().map_or(0, |element| element.height)
    }

    /// Rows the panel occupies in the request list right now.
    pub fn visible_rows(&self) -> usize {
        match &self.element {
            Some(element) if element.display == Display::Block => element.shown_height as usize,
            _ => 0,
        }
    }

    /// Whether a height animation is still running.
    pub fn is_animating(&self) -> bool {
        self.element
            .as_ref()
            .is_some_and(|element| element.display == Display::Block && element.transitioning)
    }

    pub fn content(&self) -> Option<&DetailContent> {
        self.content.as_ref()
    }

    pub fn hint_tree(&self) -> Option<&HintTree> {
        self.hint_tree.as_ref().map(|mounted| &mounted.tree)
    }

    /// Number of times the content has been built from scratch.
    pub fn populate_count(&self) -> u64 {
        self.populate_count
    }

    /// Registrations waiting to be released.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Rendered rows of the content: hint tree, then each section.
    pub fn content_height(&self) -> usize {
        let tree_lines = self.hint_tree().map_or(0, HintTree::line_count);
        let section_lines = self.content.as_ref().map_or(0, DetailContent::line_count);
        tree_lines + section_lines
    }

    /// Every line of the content, top to bottom.
    pub fn lines(&self) -> Vec<ContentLine<'_>> {
        let Some(content) = &self.content else {
            return Vec::new();
        };

        let mut lines = Vec::with_capacity(self.content_height());
        if content.has_hint_wrapper() {
            if let Some(tree) = self.hint_tree() {
                lines.extend(tree.lines().into_iter().map(ContentLine::Hint));
            }
        }
        for section in content.sections() {
            lines.push(ContentLine::SectionHeader(section.title));
            lines.extend(section.table.rows().iter().map(ContentLine::Row));
        }
        lines
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    /// Rebuild the content from `self.info`. The previous hint tree, if any,
    /// is torn down and a new one built when the request has hint records.
    fn populate_content(&mut self) {
        let Some(content) = self.content.as_mut() else {
            return;
        };
        content.clear();
        content.add_hint_wrapper();
        content.add_section(SUMMARY_TITLE, summary_table(&self.info));
        content.add_section(
            REQUEST_HEADERS_TITLE,
            header_table(self.info.request_headers.as_ref()),
        );
        content.add_section(
            RESPONSE_HEADERS_TITLE,
            header_table(self.info.response_headers.as_ref()),
        );

        self.discard_hint_tree();
        if self.info.hint_records.is_some() {
            self.create_hint_tree();
        }

        self.populate_count += 1;
        trace!(
            "Populated details for request {} (pass {})",
            self.info.id,
            self.populate_count
        );
    }

    fn create_hint_tree(&mut self) {
        let tree = HintTree::new(self.info.hints().unwrap_or_default());
        // The tree is torn down with the panel
        let registration = self.listeners.manage(tree.remover());
        self.hint_tree = Some(MountedTree { tree, registration });
    }

    fn discard_hint_tree(&mut self) {
        if let Some(mounted) = self.hint_tree.take() {
            self.listeners.remove(mounted.registration);
        }
    }

    fn on_expansion_change(&mut self, change: ExpansionChange) {
        trace!(
            "Hint {} of request {} {}",
            change.item,
            self.info.id,
            if change.expanded {
                "expanded"
            } else {
                "collapsed"
            }
        );
        self.fix_height();
    }

    /// Match the open panel's height to its content.
    fn fix_height(&mut self) {
        if !self.visible {
            return;
        }
        let height = u16::try_from(self.content_height()).unwrap_or(u16::MAX);
        if let Some(element) = self.element.as_mut() {
            element.set_height(height);
        }
    }
}
