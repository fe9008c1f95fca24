use crate::{ItemId, ListId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardViewModel {
    pub lists: Vec<ListView>,
    pub moving_count: usize,
    pub selected_count: usize,
    pub dirty: bool,
}

impl BoardViewModel {
    /// Count shown on the drag badge; only multi-item drags get one.
    pub fn badge(&self) -> Option<usize> {
        (self.moving_count > 1).then_some(self.moving_count)
    }

    pub fn list(&self, list: ListId) -> Option<&ListView> {
        self.lists.iter().find(|view| view.list == list)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub list: ListId,
    pub name: String,
    /// Only the source list shows selection checkboxes.
    pub selectable: bool,
    pub rows: Vec<ItemRowView>,
}

impl ListView {
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowView {
    pub item_id: ItemId,
    pub label: String,
    pub selected: bool,
}
