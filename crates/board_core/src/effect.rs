use crate::{DestinationId, ItemId};

/// Structural changes the host may need to react to beyond re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ItemDeleted { item_id: ItemId },
    ListRemoved { list: DestinationId, returned: usize },
}
