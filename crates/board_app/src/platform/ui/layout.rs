use super::constants::{COLUMN_GAP, COLUMN_WIDTH};

/// Lays out columns of text next to each other, padding short columns with
/// blank cells and cutting cells longer than `COLUMN_WIDTH`.
pub fn side_by_side(columns: &[Vec<String>]) -> Vec<String> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            let cells: Vec<String> = columns
                .iter()
                .map(|column| fit(column.get(row).map(String::as_str).unwrap_or("")))
                .collect();
            cells.join(COLUMN_GAP).trim_end().to_string()
        })
        .collect()
}

fn fit(cell: &str) -> String {
    let mut text: String = cell.chars().take(COLUMN_WIDTH).collect();
    let width = text.chars().count();
    text.extend(std::iter::repeat(' ').take(COLUMN_WIDTH - width));
    text
}
