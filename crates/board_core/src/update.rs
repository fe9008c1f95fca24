use board_logging::{board_debug, board_info, board_warn};

use crate::{BoardState, Effect, Msg, Removal, TransferError};

/// Pure update function: applies a message to state and returns any effects.
///
/// Rejected operations are logged and leave the board as it was; the caller
/// always gets a usable state back.
pub fn update(mut state: BoardState, msg: Msg) -> (BoardState, Vec<Effect>) {
    let effects = match msg {
        Msg::ToggleSelection(item_id) => {
            if let Err(err) = state.toggle_selection(item_id) {
                board_warn!("Ignoring selection toggle: {}", err);
            }
            Vec::new()
        }
        Msg::DeselectItem(item_id) => {
            if let Err(err) = state.deselect(item_id) {
                board_warn!("Ignoring deselect: {}", err);
            }
            Vec::new()
        }
        Msg::DragStarted { source } => {
            let count = match state
                .collection()
                .drag_start_count(source, state.selection())
            {
                Ok(count) => count,
                Err(err) => {
                    board_warn!("Drag start ignored: {}", err);
                    0
                }
            };
            state.set_moving_count(count);
            Vec::new()
        }
        Msg::DragEnded {
            source,
            destination,
        } => {
            state.set_moving_count(0);
            match destination {
                None => {
                    board_debug!("Drop outside any list; clearing selection");
                    state.clear_selection();
                }
                Some(destination) => {
                    match state
                        .collection()
                        .move_items(source, destination, state.selection())
                    {
                        Ok(next) => {
                            board_debug!(
                                "Moved from {} [{}] to {} [{}]",
                                source.list,
                                source.index,
                                destination.list,
                                destination.index
                            );
                            state.replace_collection(next);
                            state.clear_selection();
                        }
                        Err(TransferError::UnknownList(list)) if list == destination.list => {
                            board_warn!("Drop on missing {}; clearing selection", list);
                            state.clear_selection();
                        }
                        Err(err) => board_warn!("Move aborted: {}", err),
                    }
                }
            }
            Vec::new()
        }
        Msg::RemoveOrReturn { item_id, list } => {
            match state.collection().remove_or_return(item_id, list) {
                Ok((next, removal)) => {
                    state.replace_collection(next);
                    state.forget_selected(item_id);
                    match removal {
                        Removal::Deleted(item) => {
                            board_info!("Deleted item {} ({})", item.id, item.label);
                            vec![Effect::ItemDeleted { item_id: item.id }]
                        }
                        Removal::Returned(item) => {
                            board_debug!("Returned item {} from {}", item.id, list);
                            Vec::new()
                        }
                        Removal::Absent => Vec::new(),
                    }
                }
                Err(err) => {
                    board_warn!("Remove ignored: {}", err);
                    Vec::new()
                }
            }
        }
        Msg::AddList => {
            match state.collection().add_list() {
                Ok((next, id)) => {
                    state.replace_collection(next);
                    board_info!("Added destination list {}", id);
                }
                Err(err) => board_warn!("Add list ignored: {}", err),
            }
            Vec::new()
        }
        Msg::RemoveList(id) => match state.collection().remove_list(id) {
            Ok((next, returned)) => {
                state.replace_collection(next);
                board_info!("Removed destination list {} ({} items returned)", id, returned);
                vec![Effect::ListRemoved { list: id, returned }]
            }
            Err(err) => {
                board_warn!("Remove list ignored: {}", err);
                Vec::new()
            }
        },
        Msg::RenameList { list, name } => {
            match state.collection().rename_list(list, &name) {
                Ok(next) => state.replace_collection(next),
                Err(err) => board_warn!("Rename ignored: {}", err),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
