use board_core::{BoardViewModel, ItemRowView, ListView};

use super::constants::*;
use super::layout;

/// Renders the whole board as terminal lines: one column per list, then a
/// status line.
pub fn render(view: &BoardViewModel) -> Vec<String> {
    let columns: Vec<Vec<String>> = view.lists.iter().map(render_list).collect();
    let mut lines = layout::side_by_side(&columns);
    lines.push(status_line(view));
    lines
}

fn render_list(list: &ListView) -> Vec<String> {
    let mut lines = Vec::with_capacity(list.rows.len() + 2);
    lines.push(list.name.clone());
    lines.push("-".repeat(list.name.chars().count()));
    lines.extend(list.rows.iter().map(|row| format_row(row, list.selectable)));
    lines
}

fn format_row(row: &ItemRowView, selectable: bool) -> String {
    if selectable {
        let checkbox = if row.selected { CHECKBOX_ON } else { CHECKBOX_OFF };
        format!("{checkbox} {} {REMOVE_ICON}", row.label)
    } else {
        format!("{} {REMOVE_ICON}", row.label)
    }
}

fn status_line(view: &BoardViewModel) -> String {
    let items: usize = view.lists.iter().map(|list| list.rows.len()).sum();
    match view.badge() {
        Some(count) => format!(
            "Lists: {} | Items: {} | Selected: {} | Dragging {}",
            view.lists.len(),
            items,
            view.selected_count,
            count
        ),
        None => format!(
            "Lists: {} | Items: {} | Selected: {}",
            view.lists.len(),
            items,
            view.selected_count
        ),
    }
}
