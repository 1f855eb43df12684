//! Shared selected/default style of a request's pillbox row.

use std::cell::Cell;
use std::rc::Rc;

/// Style class of a pillbox row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PillboxStyle {
    #[default]
    Default,
    Selected,
}

/// Handle to a pillbox's style, shared by the request list (which renders it)
/// and the request's details panel (which toggles it).
///
/// The UI runs on a single thread, so a plain `Rc<Cell<_>>` is enough.
#[derive(Debug, Clone, Default)]
pub struct PillboxHandle(Rc<Cell<PillboxStyle>>);

impl PillboxHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> PillboxStyle {
        self.0.get()
    }

    pub fn set_style(&self, style: PillboxStyle) {
        self.0.set(style);
    }

    pub fn is_selected(&self) -> bool {
        self.style() == PillboxStyle::Selected
    }
}
