//! Board core: pure multi-list transfer engine and view-model helpers.
mod collection;
mod config;
mod effect;
mod error;
mod msg;
mod state;
mod update;
mod view_model;

pub use collection::{Collection, Destination, DestinationId, Item, ItemId, ListId, Removal, Slot};
pub use config::{BoardConfig, SeedItem};
pub use effect::Effect;
pub use error::TransferError;
pub use msg::Msg;
pub use state::BoardState;
pub use update::update;
pub use view_model::{BoardViewModel, ItemRowView, ListView};
