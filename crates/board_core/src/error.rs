use thiserror::Error;

use crate::{ItemId, ListId};

/// Reasons a board operation was rejected. The board is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("unknown list: {0}")]
    UnknownList(ListId),
    #[error("source index {index} out of range for {list} (len {len})")]
    SourceIndexOutOfRange {
        list: ListId,
        index: usize,
        len: usize,
    },
    #[error("destination index {index} out of range for {list} (len {len})")]
    DestinationIndexOutOfRange {
        list: ListId,
        index: usize,
        len: usize,
    },
    #[error("item {0} is not in the source list")]
    ItemNotInSource(ItemId),
    #[error("list name must not be blank")]
    BlankListName,
    #[error("no destination list ids left")]
    ListIdsExhausted,
}
