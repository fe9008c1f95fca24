use std::collections::BTreeSet;

use crate::view_model::{BoardViewModel, ItemRowView, ListView};
use crate::{BoardConfig, Collection, ItemId, ListId, TransferError};

/// Everything the controller owns: the lists, the batch selection and the
/// transient drag badge count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    collection: Collection,
    selection: BTreeSet<ItemId>,
    moving_count: usize,
    dirty: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::from_collection(Collection::from_config(config))
    }

    pub fn from_collection(collection: Collection) -> Self {
        Self {
            collection: collection.clear_selected(),
            selection: BTreeSet::new(),
            moving_count: 0,
            dirty: false,
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn selection(&self) -> &BTreeSet<ItemId> {
        &self.selection
    }

    pub fn moving_count(&self) -> usize {
        self.moving_count
    }

    pub fn view(&self) -> BoardViewModel {
        let lists = self
            .collection
            .list_ids()
            .into_iter()
            .filter_map(|list| {
                let name = self.collection.list_name(list)?.to_string();
                let rows = self
                    .collection
                    .items(list)?
                    .iter()
                    .map(|item| ItemRowView {
                        item_id: item.id,
                        label: item.label.clone(),
                        selected: item.selected,
                    })
                    .collect();
                Some(ListView {
                    list,
                    name,
                    selectable: list == ListId::Source,
                    rows,
                })
            })
            .collect();
        BoardViewModel {
            lists,
            moving_count: self.moving_count,
            selected_count: self.selection.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn replace_collection(&mut self, collection: Collection) {
        if self.collection != collection {
            self.collection = collection;
            self.dirty = true;
        }
    }

    pub(crate) fn set_moving_count(&mut self, count: usize) {
        if self.moving_count != count {
            self.moving_count = count;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_selection(&mut self, item_id: ItemId) -> Result<(), TransferError> {
        let select = !self.selection.contains(&item_id);
        self.set_selection(item_id, select)
    }

    pub(crate) fn deselect(&mut self, item_id: ItemId) -> Result<(), TransferError> {
        if self.selection.contains(&item_id) {
            self.set_selection(item_id, false)?;
        }
        Ok(())
    }

    pub(crate) fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.dirty = true;
        }
        let cleared = self.collection.clear_selected();
        self.replace_collection(cleared);
    }

    /// Drops `item_id` from the selection without touching list contents.
    pub(crate) fn forget_selected(&mut self, item_id: ItemId) {
        if self.selection.remove(&item_id) {
            self.dirty = true;
        }
    }

    fn set_selection(&mut self, item_id: ItemId, select: bool) -> Result<(), TransferError> {
        let next = self.collection.set_selected(item_id, select)?;
        self.replace_collection(next);
        if select {
            self.selection.insert(item_id);
        } else {
            self.selection.remove(&item_id);
        }
        self.dirty = true;
        Ok(())
    }
}
