use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BoardConfig, TransferError};

pub type ItemId = u64;

/// Permanent handle of a destination list. Handed out from a counter that
/// only grows, so removing a list never changes what another handle means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(u32);

impl DestinationId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ListId {
    Source,
    Destination(DestinationId),
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListId::Source => write!(f, "source list"),
            ListId::Destination(id) => write!(f, "destination list {id}"),
        }
    }
}

/// A position inside one list, as reported by a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub list: ListId,
    pub index: usize,
}

impl Slot {
    pub fn new(list: ListId, index: usize) -> Self {
        Self { list, index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub selected: bool,
}

impl Item {
    pub fn new(id: ItemId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            selected: false,
        }
    }

    fn deselected(mut self) -> Self {
        self.selected = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    id: DestinationId,
    name: String,
    items: Vec<Item>,
}

impl Destination {
    pub fn id(&self) -> DestinationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// What `remove_or_return` did with the requested item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The item sat in the source list and is gone for good.
    Deleted(Item),
    /// The item was sent back to the end of the source list.
    Returned(Item),
    /// The list did not hold the item; nothing changed.
    Absent,
}

/// The source list plus every destination list, in display order.
///
/// All operations are pure: they borrow the current collection and hand back
/// a new one, leaving `self` untouched when they fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    source_name: String,
    source: Vec<Item>,
    destination_prefix: String,
    destinations: Vec<Destination>,
    next_destination: u32,
}

impl Collection {
    /// Builds a collection whose source list holds `seed`. Seed entries
    /// repeating an earlier id are dropped.
    pub fn new(
        source_name: impl Into<String>,
        destination_prefix: impl Into<String>,
        seed: impl IntoIterator<Item = Item>,
    ) -> Self {
        let mut seen = HashSet::new();
        let source = seed
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .map(Item::deselected)
            .collect();
        Self {
            source_name: source_name.into(),
            source,
            destination_prefix: destination_prefix.into(),
            destinations: Vec::new(),
            next_destination: 0,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        let seed = config
            .seed
            .iter()
            .map(|seed| Item::new(seed.id, seed.label.clone()));
        let mut collection = Self::new(
            config.source_name.clone(),
            config.destination_prefix.clone(),
            seed,
        );
        for _ in 0..config.initial_destinations {
            let Ok((next, _)) = collection.add_list() else {
                break;
            };
            collection = next;
        }
        collection
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn source(&self) -> &[Item] {
        &self.source
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn destination(&self, id: DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Every list id in display order, source first.
    pub fn list_ids(&self) -> Vec<ListId> {
        std::iter::once(ListId::Source)
            .chain(self.destinations.iter().map(|d| ListId::Destination(d.id)))
            .collect()
    }

    pub fn items(&self, list: ListId) -> Option<&[Item]> {
        match list {
            ListId::Source => Some(&self.source),
            ListId::Destination(id) => self.destination(id).map(Destination::items),
        }
    }

    pub fn list_name(&self, list: ListId) -> Option<&str> {
        match list {
            ListId::Source => Some(&self.source_name),
            ListId::Destination(id) => self.destination(id).map(Destination::name),
        }
    }

    /// The list currently holding `item_id`, if any.
    pub fn locate(&self, item_id: ItemId) -> Option<ListId> {
        self.list_ids().into_iter().find(|list| {
            self.items(*list)
                .is_some_and(|items| items.iter().any(|item| item.id == item_id))
        })
    }

    /// Ids of every item on the board, in display order.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.list_ids()
            .into_iter()
            .filter_map(|list| self.items(list))
            .flat_map(|items| items.iter().map(|item| item.id))
            .collect()
    }

    /// Number of items a drag starting at `from` would carry.
    pub fn drag_start_count(
        &self,
        from: Slot,
        selection: &BTreeSet<ItemId>,
    ) -> Result<usize, TransferError> {
        Ok(self.moving_ids(from, selection)?.len())
    }

    /// Moves the item under `from`, or the whole selection when one applies,
    /// so that the moved block starts at `to.index`.
    ///
    /// The selection only applies to drags out of the source list. Moved items
    /// keep their relative order and come out deselected. `to.index` counts
    /// positions in the destination before the move.
    pub fn move_items(
        &self,
        from: Slot,
        to: Slot,
        selection: &BTreeSet<ItemId>,
    ) -> Result<Self, TransferError> {
        let dest_len = self
            .items(to.list)
            .ok_or(TransferError::UnknownList(to.list))?
            .len();
        if to.index > dest_len {
            return Err(TransferError::DestinationIndexOutOfRange {
                list: to.list,
                index: to.index,
                len: dest_len,
            });
        }
        let moving: HashSet<ItemId> = self.moving_ids(from, selection)?.into_iter().collect();

        let mut next = self.clone();
        let source_items = next
            .items_mut(from.list)
            .ok_or(TransferError::UnknownList(from.list))?;
        let (moved, kept): (Vec<Item>, Vec<Item>) = std::mem::take(source_items)
            .into_iter()
            .partition(|item| moving.contains(&item.id));
        *source_items = kept;

        let dest_items = next
            .items_mut(to.list)
            .ok_or(TransferError::UnknownList(to.list))?;
        let at = to.index.min(dest_items.len());
        let tail = dest_items.split_off(at);
        dest_items.extend(moved.into_iter().map(Item::deselected));
        dest_items.extend(tail);

        next.dedupe(&[to.list, from.list]);
        Ok(next)
    }

    /// Deletes `item_id` from the source list, or sends it back from a
    /// destination list to the end of the source list.
    pub fn remove_or_return(
        &self,
        item_id: ItemId,
        list: ListId,
    ) -> Result<(Self, Removal), TransferError> {
        let mut next = self.clone();
        let items = next
            .items_mut(list)
            .ok_or(TransferError::UnknownList(list))?;
        let Some(item) = take_item(items, item_id) else {
            return Ok((next, Removal::Absent));
        };
        if list == ListId::Source {
            return Ok((next, Removal::Deleted(item)));
        }
        let item = item.deselected();
        next.source.push(item.clone());
        next.dedupe(&[]);
        Ok((next, Removal::Returned(item)))
    }

    /// Appends an empty destination list with a fresh id and default name.
    /// Fails once every `u32` id has been handed out.
    pub fn add_list(&self) -> Result<(Self, DestinationId), TransferError> {
        let mut next = self.clone();
        let id = DestinationId(next.next_destination);
        next.next_destination = next
            .next_destination
            .checked_add(1)
            .ok_or(TransferError::ListIdsExhausted)?;
        next.destinations.push(Destination {
            id,
            name: format!("{}-{}", next.destination_prefix, id.0),
            items: Vec::new(),
        });
        Ok((next, id))
    }

    /// Drops a destination list after returning its items to the end of the
    /// source list. Yields the number of items returned.
    pub fn remove_list(&self, id: DestinationId) -> Result<(Self, usize), TransferError> {
        let position = self
            .destinations
            .iter()
            .position(|d| d.id == id)
            .ok_or(TransferError::UnknownList(ListId::Destination(id)))?;
        let mut next = self.clone();
        let removed = next.destinations.remove(position);
        let returned = removed.items.len();
        next.source
            .extend(removed.items.into_iter().map(Item::deselected));
        next.dedupe(&[]);
        Ok((next, returned))
    }

    pub fn rename_list(&self, list: ListId, name: &str) -> Result<Self, TransferError> {
        if name.trim().is_empty() {
            return Err(TransferError::BlankListName);
        }
        let mut next = self.clone();
        match list {
            ListId::Source => next.source_name = name.to_string(),
            ListId::Destination(id) => {
                let destination = next
                    .destinations
                    .iter_mut()
                    .find(|d| d.id == id)
                    .ok_or(TransferError::UnknownList(list))?;
                destination.name = name.to_string();
            }
        }
        Ok(next)
    }

    /// Sets the `selected` flag of a source-list item.
    pub fn set_selected(&self, item_id: ItemId, selected: bool) -> Result<Self, TransferError> {
        let mut next = self.clone();
        let item = next
            .source
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(TransferError::ItemNotInSource(item_id))?;
        item.selected = selected;
        Ok(next)
    }

    pub fn clear_selected(&self) -> Self {
        let mut next = self.clone();
        for items in next.lists_mut() {
            for item in items.iter_mut() {
                item.selected = false;
            }
        }
        next
    }

    fn moving_ids(
        &self,
        from: Slot,
        selection: &BTreeSet<ItemId>,
    ) -> Result<Vec<ItemId>, TransferError> {
        let items = self
            .items(from.list)
            .ok_or(TransferError::UnknownList(from.list))?;
        if from.list == ListId::Source && !selection.is_empty() {
            return Ok(items
                .iter()
                .filter(|item| selection.contains(&item.id))
                .map(|item| item.id)
                .collect());
        }
        let item = items
            .get(from.index)
            .ok_or(TransferError::SourceIndexOutOfRange {
                list: from.list,
                index: from.index,
                len: items.len(),
            })?;
        Ok(vec![item.id])
    }

    fn items_mut(&mut self, list: ListId) -> Option<&mut Vec<Item>> {
        match list {
            ListId::Source => Some(&mut self.source),
            ListId::Destination(id) => self
                .destinations
                .iter_mut()
                .find(|d| d.id == id)
                .map(|d| &mut d.items),
        }
    }

    fn lists_mut(&mut self) -> impl Iterator<Item = &mut Vec<Item>> {
        std::iter::once(&mut self.source).chain(self.destinations.iter_mut().map(|d| &mut d.items))
    }

    /// Keeps the first occurrence of every item id across the board. Lists in
    /// `first` are scanned before the rest, which follow in display order.
    fn dedupe(&mut self, first: &[ListId]) {
        let mut order: Vec<ListId> = Vec::new();
        for list in first.iter().copied().chain(self.list_ids()) {
            if !order.contains(&list) {
                order.push(list);
            }
        }
        let mut seen = HashSet::new();
        for list in order {
            if let Some(items) = self.items_mut(list) {
                items.retain(|item| seen.insert(item.id));
            }
        }
    }
}

/// Removes every copy of `item_id` from `items`, returning the first.
fn take_item(items: &mut Vec<Item>, item_id: ItemId) -> Option<Item> {
    let position = items.iter().position(|item| item.id == item_id)?;
    let item = items.remove(position);
    items.retain(|other| other.id != item_id);
    Some(item)
}
