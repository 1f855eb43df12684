//! Teardown registrations owned by a details panel.
//!
//! Sub-components hand the panel a [`Remover`]; the panel keeps it in its
//! [`ListenerManager`] and runs it when the sub-component is discarded or the
//! panel itself is disposed.

use std::fmt;

/// One-shot teardown callback.
pub struct Remover(Box<dyn FnOnce()>);

impl Remover {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Run the teardown.
    pub fn remove(self) {
        (self.0)()
    }
}

impl fmt::Debug for Remover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Remover")
    }
}

/// Identifies a registration so it can be released early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Holds pending teardowns until they are released.
#[derive(Debug, Default)]
pub struct ListenerManager {
    next_id: u64,
    removers: Vec<(ListenerId, Remover)>,
}

impl ListenerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a teardown callback.
    pub fn manage(&mut self, remover: Remover) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.removers.push((id, remover));
        id
    }

    /// Run and drop a single registration. Returns false if it was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        match self.removers.iter().position(|(rid, _)| *rid == id) {
            Some(pos) => {
                let (_, remover) = self.removers.remove(pos);
                remover.remove();
                true
            }
            None => false,
        }
    }

    /// Run every registration in the order it was added.
    pub fn remove_all(&mut self) {
        for (_, remover) in self.removers.drain(..) {
            remover.remove();
        }
    }

    pub fn len(&self) -> usize {
        self.removers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removers.is_empty()
    }
}
