use crate::{DestinationId, ItemId, ListId, Slot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User ticked or unticked the checkbox of a source-list item.
    ToggleSelection(ItemId),
    /// User double-clicked an item; deselects it if it was selected.
    DeselectItem(ItemId),
    /// Drag gesture picked up the item at `source`.
    DragStarted { source: Slot },
    /// Drag gesture released. `destination` is `None` when the drop did not
    /// land on a list.
    DragEnded {
        source: Slot,
        destination: Option<Slot>,
    },
    /// User clicked the remove icon of an item shown in `list`.
    RemoveOrReturn { item_id: ItemId, list: ListId },
    /// User clicked "add list".
    AddList,
    /// User removed a destination list.
    RemoveList(DestinationId),
    /// User edited a list title.
    RenameList { list: ListId, name: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
