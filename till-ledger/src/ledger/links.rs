//! Links between active items and the history entries they created
//!
//! Every history entry gets a private sequence id when it is loaded or
//! pushed. An active item remembers the id of its own entry, so deleting
//! or shifting other entries never redirects it. Once its entry is deleted
//! the item has no link target and nothing is reconciled.

#[derive(Debug, Default)]
pub(super) struct EntryLinks {
    /// Id per history entry, parallel to `Ledger::history`
    history: Vec<u64>,
    /// Id of the linked entry, parallel to `Ledger::active_order`
    active: Vec<u64>,
    next_id: u64,
}

impl EntryLinks {
    /// Ids for `len` loaded entries; loaded entries have no active item
    pub(super) fn with_history(len: usize) -> Self {
        let mut links = Self::default();
        for _ in 0..len {
            let id = links.allocate();
            links.history.push(id);
        }
        links
    }

    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// A new item was pushed to both the active order and the history
    pub(super) fn push_new(&mut self) {
        let id = self.allocate();
        self.history.push(id);
        self.active.push(id);
    }

    pub(super) fn remove_active(&mut self, index: usize) {
        self.active.remove(index);
    }

    pub(super) fn clear_active(&mut self) {
        self.active.clear();
    }

    pub(super) fn remove_history(&mut self, index: usize) {
        self.history.remove(index);
    }

    /// History index of the entry linked to the active item at `index`
    pub(super) fn history_index(&self, index: usize) -> Option<usize> {
        let id = *self.active.get(index)?;
        self.history.iter().position(|&entry| entry == id)
    }
}
