use crate::models::ItemId;
use std::collections::HashSet;
use tracing::debug;

/// Ids of the catalog items the user has picked.
///
/// Ids are not checked against any catalog; unknown ids are simply carried
/// along and ignored when recommendations are computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: HashSet<ItemId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `id` if selected, otherwise adds it. Returns the new membership.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let selected = if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        };
        debug!("Toggled item {} (selected: {})", id, selected);
        selected
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    /// Owned snapshot; later mutations are not reflected in it.
    pub fn all(&self) -> HashSet<ItemId> {
        self.selected.clone()
    }

    pub fn remove(&mut self, id: ItemId) {
        if self.selected.remove(&id) {
            debug!("Removed item {} from selection", id);
        }
    }

    pub fn size(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub(crate) fn as_set(&self) -> &HashSet<ItemId> {
        &self.selected
    }
}

impl FromIterator<ItemId> for SelectionStore {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
