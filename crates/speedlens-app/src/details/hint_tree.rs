//! Expandable tree of the hint records attached to one request.
//!
//! Each hint is a collapsed item; expanding it reveals its description and
//! when the rule fired. Expansion is reported back as an [`ExpansionChange`]
//! so the owning panel can resize itself.

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use speedlens_core::{format_milliseconds, HintRecord, HintSeverity};

use super::listeners::Remover;

/// Emitted whenever an item expands or collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionChange {
    pub item: usize,
    pub expanded: bool,
}

/// Whether a tree is still attached to its panel.
///
/// Cleared by the tree's [`Remover`]; a detached tree renders nothing and
/// ignores input.
#[derive(Debug, Clone)]
pub struct Attachment(Rc<Cell<bool>>);

impl Attachment {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_attached(&self) -> bool {
        self.0.get()
    }
}

/// One rendered line of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine {
    /// Index of the item this line belongs to.
    pub item: usize,
    /// 0 for item titles, 1 for their detail lines.
    pub depth: u16,
    pub text: String,
    pub severity: HintSeverity,
    /// `Some(expanded)` on item title lines, `None` on detail lines.
    pub expanded: Option<bool>,
}

#[derive(Debug, Clone)]
struct TreeItem {
    key: String,
    severity: HintSeverity,
    title: String,
    details: Vec<String>,
    expanded: bool,
}

impl TreeItem {
    fn from_record(record: &HintRecord) -> Self {
        let mut details = Vec::new();
        if !record.description.is_empty() {
            details.push(record.description.clone());
        }
        details.push(format!("Fired @{}", format_milliseconds(record.timestamp)));

        Self {
            key: record.key(),
            severity: record.severity,
            title: format!("[{}] {}", record.severity.label(), record.rule),
            details,
            expanded: false,
        }
    }
}

/// Tree of hint records for a single request.
#[derive(Debug)]
pub struct HintTree {
    items: Vec<TreeItem>,
    attachment: Attachment,
}

impl HintTree {
    pub fn new(records: &[HintRecord]) -> Self {
        Self {
            items: records.iter().map(TreeItem::from_record).collect(),
            attachment: Attachment::new(),
        }
    }

    /// Re-sync with `records`, keeping items that were expanded expanded.
    pub fn refresh(&mut self, records: &[HintRecord]) {
        if !self.is_attached() {
            return;
        }

        let expanded: HashSet<&str> = self
            .items
            .iter()
            .filter(|item| item.expanded)
            .map(|item| item.key.as_str())
            .collect();

        let items = records
            .iter()
            .map(|record| {
                let mut item = TreeItem::from_record(record);
                item.expanded = expanded.contains(item.key.as_str());
                item
            })
            .collect();
        self.items = items;
    }

    /// Flip one item. `None` if the tree is detached or `item` is out of range.
    pub fn toggle(&mut self, item: usize) -> Option<ExpansionChange> {
        if !self.is_attached() {
            return None;
        }
        let entry = self.items.get_mut(item)?;
        entry.expanded = !entry.expanded;
        Some(ExpansionChange {
            item,
            expanded: entry.expanded,
        })
    }

    /// Expand or collapse every item, reporting only the items that changed.
    pub fn set_all_expanded(&mut self, expanded: bool) -> Vec<ExpansionChange> {
        if !self.is_attached() {
            return Vec::new();
        }
        self.items
            .iter_mut()
            .enumerate()
            .filter(|(_, entry)| entry.expanded != expanded)
            .map(|(item, entry)| {
                entry.expanded = expanded;
                ExpansionChange { item, expanded }
            })
            .collect()
    }

    pub fn is_expanded(&self, item: usize) -> bool {
        self.items.get(item).is_some_and(|i| i.expanded)
    }

    pub fn lines(&self) -> Vec<TreeLine> {
        if !self.is_attached() {
            return Vec::new();
        }

        let mut lines = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            lines.push(TreeLine {
                item: index,
                depth: 0,
                text: item.title.clone(),
                severity: item.severity,
                expanded: Some(item.expanded),
            });
            if item.expanded {
                lines.extend(item.details.iter().map(|detail| TreeLine {
                    item: index,
                    depth: 1,
                    text: detail.clone(),
                    severity: item.severity,
                    expanded: None,
                }));
            }
        }
        lines
    }

    pub fn line_count(&self) -> usize {
        if !self.is_attached() {
            return 0;
        }
        self.items
            .iter()
            .map(|item| 1 + if item.expanded { item.details.len() } else { 0 })
            .sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn attachment(&self) -> Attachment {
        self.attachment.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_attached()
    }

    /// Teardown handle that detaches this tree.
    pub fn remover(&self) -> Remover {
        let attachment = self.attachment.clone();
        Remover::new(move || attachment.0.set(false))
    }
}
