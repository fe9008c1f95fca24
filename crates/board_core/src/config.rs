use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Start-up configuration for a board: list naming and the items the
/// source list is seeded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub source_name: String,
    /// Destination lists are named `{destination_prefix}-{n}` until renamed.
    pub destination_prefix: String,
    pub initial_destinations: usize,
    pub seed: Vec<SeedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub id: ItemId,
    pub label: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            source_name: "Solders".to_string(),
            destination_prefix: "Done".to_string(),
            initial_destinations: 1,
            seed: (1..=4)
                .map(|id| SeedItem {
                    id,
                    label: format!("Task {id}"),
                })
                .collect(),
        }
    }
}
