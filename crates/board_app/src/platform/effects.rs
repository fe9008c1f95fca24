use board_core::Effect;
use board_logging::board_info;

/// Turns effects into notices for the terminal and the log.
pub fn describe(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .map(|effect| {
            let notice = match effect {
                Effect::ItemDeleted { item_id } => format!("Item {item_id} deleted"),
                Effect::ListRemoved { list, returned } => {
                    format!("List {list} removed, {returned} item(s) returned")
                }
            };
            board_info!("{}", notice);
            notice
        })
        .collect()
}
