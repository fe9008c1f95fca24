//! Scripted stand-in for the drag gesture provider.

use board_core::{DestinationId, ItemId, ListId, Msg, Slot};
use serde::Deserialize;

/// One user action, as a drag-and-drop front end would report it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum Gesture {
    Toggle(ItemId),
    DoubleClick(ItemId),
    Drag { from: Slot, to: Option<Slot> },
    Remove { item: ItemId, list: ListId },
    AddList,
    RemoveList(DestinationId),
    Rename { list: ListId, name: String },
}

impl Gesture {
    pub fn into_msgs(self) -> Vec<Msg> {
        match self {
            Gesture::Toggle(item_id) => vec![Msg::ToggleSelection(item_id)],
            Gesture::DoubleClick(item_id) => vec![Msg::DeselectItem(item_id)],
            Gesture::Drag { from, to } => vec![
                Msg::DragStarted { source: from },
                Msg::DragEnded {
                    source: from,
                    destination: to,
                },
            ],
            Gesture::Remove { item, list } => vec![Msg::RemoveOrReturn {
                item_id: item,
                list,
            }],
            Gesture::AddList => vec![Msg::AddList],
            Gesture::RemoveList(id) => vec![Msg::RemoveList(id)],
            Gesture::Rename { list, name } => vec![Msg::RenameList { list, name }],
        }
    }
}

/// Walk-through played when the config does not supply a script.
pub fn demo_script() -> Vec<Gesture> {
    let done0 = ListId::Destination(DestinationId::new(0));
    vec![
        Gesture::Drag {
            from: Slot::new(ListId::Source, 1),
            to: Some(Slot::new(done0, 0)),
        },
        Gesture::Remove {
            item: 2,
            list: done0,
        },
        Gesture::Toggle(1),
        Gesture::Toggle(3),
        Gesture::Drag {
            from: Slot::new(ListId::Source, 0),
            to: Some(Slot::new(done0, 0)),
        },
        Gesture::AddList,
        Gesture::Rename {
            list: ListId::Destination(DestinationId::new(1)),
            name: "Shipped".to_string(),
        },
        Gesture::Drag {
            from: Slot::new(done0, 1),
            to: Some(Slot::new(ListId::Destination(DestinationId::new(1)), 0)),
        },
        Gesture::RemoveList(DestinationId::new(0)),
        Gesture::Drag {
            from: Slot::new(ListId::Source, 0),
            to: None,
        },
    ]
}
