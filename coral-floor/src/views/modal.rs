//! Modal visibility

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalId {
    /// Open lines of the selected table
    Table,
    Category,
    Product,
    Option,
    /// Pending lines before printing ("Adding order")
    Preview,
    Print,
}

/// Set of visible modals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModalSet(BTreeSet<ModalId>);

impl ModalSet {
    pub fn show(&mut self, id: ModalId) {
        self.0.insert(id);
    }

    pub fn hide(&mut self, id: ModalId) {
        self.0.remove(&id);
    }

    pub fn hide_all(&mut self, ids: &[ModalId]) {
        for id in ids {
            self.0.remove(id);
        }
    }

    pub fn is_visible(&self, id: ModalId) -> bool {
        self.0.contains(&id)
    }

    pub fn visible(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.0.iter().copied()
    }
}
