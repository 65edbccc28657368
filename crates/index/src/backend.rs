use std::collections::HashMap;

use ingest::{Item, ItemStatus};

/// Append-only, insertion-ordered item collection with an id lookup table.
///
/// Positions never shift because nothing is ever removed, so the id table
/// stores plain offsets into `items`.
#[derive(Debug, Default, Clone)]
pub(crate) struct Collection {
    items: Vec<Item>,
    by_id: HashMap<String, usize>,
}

impl Collection {
    /// Append an item. Returns `false` (and stores nothing) on a duplicate id.
    pub(crate) fn push(&mut self, item: Item) -> bool {
        if self.by_id.contains_key(&item.id) {
            return false;
        }
        self.by_id.insert(item.id.clone(), self.items.len());
        self.items.push(item);
        true
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Item> {
        self.by_id.get(id).map(|&pos| &self.items[pos])
    }

    pub(crate) fn set_status(&mut self, id: &str, status: ItemStatus) -> Option<&Item> {
        let pos = *self.by_id.get(id)?;
        let item = &mut self.items[pos];
        item.status = status;
        Some(item)
    }

    pub(crate) fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}
