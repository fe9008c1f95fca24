use std::sync::Once;

use board_core::{
    update, BoardConfig, BoardState, DestinationId, Effect, ListId, Msg, SeedItem, Slot,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn board() -> BoardState {
    let config = BoardConfig {
        seed: ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, label)| SeedItem {
                id: i as u64 + 1,
                label: label.to_string(),
            })
            .collect(),
        ..BoardConfig::default()
    };
    BoardState::from_config(&config)
}

fn done(n: u32) -> ListId {
    ListId::Destination(DestinationId::new(n))
}

fn drop_into(state: BoardState, from: Slot, to: Slot) -> BoardState {
    let (state, _) = update(state, Msg::DragStarted { source: from });
    let (state, effects) = update(
        state,
        Msg::DragEnded {
            source: from,
            destination: Some(to),
        },
    );
    assert!(effects.is_empty());
    state
}

fn labels(state: &BoardState, list: ListId) -> Vec<String> {
    state
        .view()
        .list(list)
        .map(|view| view.rows.iter().map(|row| row.label.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn default_board_has_four_tasks_and_one_done_list() {
    init_logging();
    let view = BoardState::new().view();

    assert_eq!(view.lists.len(), 2);
    assert_eq!(view.lists[0].name, "Solders");
    assert!(view.lists[0].selectable);
    assert_eq!(
        view.lists[0].labels(),
        vec!["Task 1", "Task 2", "Task 3", "Task 4"]
    );
    assert_eq!(view.lists[1].name, "Done-0");
    assert!(!view.lists[1].selectable);
    assert!(view.lists[1].rows.is_empty());
    assert!(!view.dirty);
}

#[test]
fn single_drag_moves_one_item() {
    init_logging();
    let state = drop_into(
        board(),
        Slot::new(ListId::Source, 1),
        Slot::new(done(0), 0),
    );

    assert_eq!(labels(&state, ListId::Source), vec!["A", "C", "D"]);
    assert_eq!(labels(&state, done(0)), vec!["B"]);
}

#[test]
fn selected_items_move_together_in_order() {
    init_logging();
    let (state, _) = update(board(), Msg::ToggleSelection(1));
    let (state, _) = update(state, Msg::ToggleSelection(3));
    assert_eq!(state.view().selected_count, 2);

    let (state, _) = update(
        state,
        Msg::DragStarted {
            source: Slot::new(ListId::Source, 0),
        },
    );
    assert_eq!(state.view().badge(), Some(2));

    let (state, _) = update(
        state,
        Msg::DragEnded {
            source: Slot::new(ListId::Source, 0),
            destination: Some(Slot::new(done(0), 0)),
        },
    );
    let view = state.view();
    assert_eq!(labels(&state, ListId::Source), vec!["B", "D"]);
    assert_eq!(labels(&state, done(0)), vec!["A", "C"]);
    assert!(view.lists.iter().flat_map(|l| &l.rows).all(|row| !row.selected));
    assert_eq!(view.selected_count, 0);
    assert_eq!(view.badge(), None);
}

#[test]
fn removing_list_returns_items_to_source_end() {
    init_logging();
    let (state, _) = update(board(), Msg::ToggleSelection(1));
    let (state, _) = update(state, Msg::ToggleSelection(3));
    let state = drop_into(state, Slot::new(ListId::Source, 0), Slot::new(done(0), 0));

    let (state, effects) = update(state, Msg::RemoveList(DestinationId::new(0)));

    assert_eq!(
        effects,
        vec![Effect::ListRemoved {
            list: DestinationId::new(0),
            returned: 2
        }]
    );
    let view = state.view();
    assert_eq!(view.lists.len(), 1);
    assert_eq!(view.lists[0].labels(), vec!["B", "D", "A", "C"]);
    assert!(view.lists[0].rows.iter().all(|row| !row.selected));
}

#[test]
fn drop_outside_lists_clears_selection_only() {
    init_logging();
    let (state, _) = update(board(), Msg::ToggleSelection(2));
    let (state, _) = update(
        state,
        Msg::DragStarted {
            source: Slot::new(ListId::Source, 1),
        },
    );
    assert_eq!(state.moving_count(), 1);

    let (state, effects) = update(
        state,
        Msg::DragEnded {
            source: Slot::new(ListId::Source, 1),
            destination: None,
        },
    );

    assert!(effects.is_empty());
    assert!(state.selection().is_empty());
    assert_eq!(state.moving_count(), 0);
    assert_eq!(labels(&state, ListId::Source), vec!["A", "B", "C", "D"]);
    assert!(state.view().lists[0].rows.iter().all(|row| !row.selected));
}

#[test]
fn remove_from_source_deletes_and_from_destination_returns() {
    init_logging();
    let state = drop_into(board(), Slot::new(ListId::Source, 0), Slot::new(done(0), 0));

    let (state, effects) = update(
        state,
        Msg::RemoveOrReturn {
            item_id: 1,
            list: done(0),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(labels(&state, ListId::Source), vec!["B", "C", "D", "A"]);
    assert!(labels(&state, done(0)).is_empty());

    let (state, effects) = update(
        state,
        Msg::RemoveOrReturn {
            item_id: 3,
            list: ListId::Source,
        },
    );
    assert_eq!(effects, vec![Effect::ItemDeleted { item_id: 3 }]);
    assert_eq!(labels(&state, ListId::Source), vec!["B", "D", "A"]);

    let (mut state, effects) = update(
        state,
        Msg::RemoveOrReturn {
            item_id: 3,
            list: ListId::Source,
        },
    );
    assert!(effects.is_empty());
    state.consume_dirty();
    let before = state.clone();
    let (mut again, _) = update(
        state,
        Msg::RemoveOrReturn {
            item_id: 3,
            list: ListId::Source,
        },
    );
    assert!(!again.consume_dirty());
    assert_eq!(again, before);
}

#[test]
fn deleting_selected_item_drops_it_from_selection() {
    init_logging();
    let (state, _) = update(board(), Msg::ToggleSelection(2));
    let (state, _) = update(
        state,
        Msg::RemoveOrReturn {
            item_id: 2,
            list: ListId::Source,
        },
    );
    assert!(state.selection().is_empty());
}

#[test]
fn double_click_deselects_only_selected_items() {
    init_logging();
    let (state, _) = update(board(), Msg::ToggleSelection(4));
    let (state, _) = update(state, Msg::DeselectItem(4));
    assert!(state.selection().is_empty());

    let (mut state, _) = update(state, Msg::DeselectItem(1));
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::DeselectItem(1));
    assert!(!state.consume_dirty());
    assert!(state.selection().is_empty());
}

#[test]
fn toggling_item_outside_source_is_ignored() {
    init_logging();
    let state = drop_into(board(), Slot::new(ListId::Source, 0), Slot::new(done(0), 0));
    let before = state.clone();

    let (next, effects) = update(state, Msg::ToggleSelection(1));

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn out_of_range_drop_leaves_board_unchanged() {
    init_logging();
    let state = board();
    let before = state.collection().clone();

    let (state, _) = update(
        state,
        Msg::DragEnded {
            source: Slot::new(ListId::Source, 9),
            destination: Some(Slot::new(done(0), 0)),
        },
    );
    assert_eq!(state.collection(), &before);

    let (state, _) = update(
        state,
        Msg::DragEnded {
            source: Slot::new(ListId::Source, 0),
            destination: Some(Slot::new(done(0), 5)),
        },
    );
    assert_eq!(state.collection(), &before);

    let (state, _) = update(
        state,
        Msg::DragEnded {
            source: Slot::new(ListId::Source, 0),
            destination: Some(Slot::new(done(7), 0)),
        },
    );
    assert_eq!(state.collection(), &before);
}

#[test]
fn drop_on_removed_list_clears_selection() {
    init_logging();
    let (state, _) = update(board(), Msg::AddList);
    let (state, _) = update(state, Msg::RemoveList(DestinationId::new(1)));
    let (state, _) = update(state, Msg::ToggleSelection(1));
    let (state, _) = update(state, Msg::ToggleSelection(3));

    let (state, effects) = update(
        state,
        Msg::DragEnded {
            source: Slot::new(ListId::Source, 0),
            destination: Some(Slot::new(done(1), 0)),
        },
    );

    assert!(effects.is_empty());
    assert!(state.selection().is_empty());
    assert_eq!(labels(&state, ListId::Source), vec!["A", "B", "C", "D"]);
    assert!(state.view().lists[0].rows.iter().all(|row| !row.selected));
}

#[test]
fn bad_index_on_live_list_keeps_selection() {
    init_logging();
    let (state, _) = update(board(), Msg::ToggleSelection(2));

    let (state, _) = update(
        state,
        Msg::DragEnded {
            source: Slot::new(ListId::Source, 0),
            destination: Some(Slot::new(done(0), 3)),
        },
    );

    assert_eq!(state.selection().len(), 1);
    assert_eq!(labels(&state, ListId::Source), vec!["A", "B", "C", "D"]);
}
