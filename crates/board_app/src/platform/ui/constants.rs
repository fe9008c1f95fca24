pub const CHECKBOX_ON: &str = "[x]";
pub const CHECKBOX_OFF: &str = "[ ]";
pub const REMOVE_ICON: &str = "\u{2715}";
pub const COLUMN_WIDTH: usize = 24;
pub const COLUMN_GAP: &str = " | ";
