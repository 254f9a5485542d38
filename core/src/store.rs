//! In-memory item collection and the rules for mutating it.
//!
//! # Design
//! `ItemStore` is the single source of truth for presentation. It owns an
//! ordered `Vec<Item>` and only changes through the `apply_*` methods, each
//! of which corresponds to one remote operation's decoded response:
//!
//! - a fetch replaces the whole collection (no merge, no diff),
//! - an update swaps the matching entry in place,
//! - a delete removes the matching entry only when the server confirmed it,
//! - a create never touches the store; the created item becomes observable
//!   through a subsequent fetch.
//!
//! The store requires `&mut` for every mutation, so response handling is
//! marshaled onto the owning thread by construction. Fetches carry a
//! monotonic `FetchSeq` so a response that lands after a newer one has
//! already been applied is dropped instead of overwriting newer state.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::types::Item;

/// Notification emitted after each applied mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The whole collection was replaced by a fetch.
    Replaced,
    /// The entry with this id was updated in place.
    Updated(String),
    /// The entry with this id was removed.
    Removed(String),
}

/// Ticket for one fetch round trip, issued by [`ItemStore::begin_fetch`].
///
/// Ordering is issue order; `replace_all` uses it to reject responses that
/// arrive after a newer response has already been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchSeq(u64);

/// Owner of the in-memory item collection.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    revision: u64,
    issued_fetch: u64,
    applied_fetch: u64,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection, in server response order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an entry by its stable id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id.as_deref() == Some(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every applied mutation; unchanged by dropped ones.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register for change notifications. A receiver that has been dropped
    /// is pruned on the next mutation.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Issue a sequence ticket before starting a fetch round trip.
    pub fn begin_fetch(&mut self) -> FetchSeq {
        self.issued_fetch += 1;
        FetchSeq(self.issued_fetch)
    }

    /// Replace the entire collection with a fetched response body.
    ///
    /// Returns `false` and leaves the collection untouched when `seq` is at
    /// or below the last applied fetch (a stale response). When two fetched
    /// entries share an id, the first occurrence wins; the id is a unique
    /// key within the collection.
    pub fn replace_all(&mut self, seq: FetchSeq, items: Vec<Item>) -> bool {
        if seq.0 <= self.applied_fetch {
            return false;
        }
        self.applied_fetch = seq.0;

        let mut collection: Vec<Item> = Vec::with_capacity(items.len());
        for item in items {
            let duplicate = item
                .id
                .as_deref()
                .is_some_and(|id| collection.iter().any(|kept| kept.id.as_deref() == Some(id)));
            if !duplicate {
                collection.push(item);
            }
        }
        self.items = collection;
        self.notify(StoreEvent::Replaced);
        true
    }

    /// Swap the entry matching the decoded item's id in place.
    ///
    /// An item without an id, or with an id not present in the collection,
    /// is silently dropped and the collection is unchanged.
    pub fn apply_update(&mut self, item: Item) -> bool {
        let Some(id) = item.id.clone() else {
            return false;
        };
        let Some(entry) = self
            .items
            .iter_mut()
            .find(|entry| entry.id.as_deref() == Some(id.as_str()))
        else {
            return false;
        };
        *entry = item;
        self.notify(StoreEvent::Updated(id));
        true
    }

    /// Remove the entry matching `id`, but only when the server's delete
    /// response carried `success: true`.
    pub fn apply_delete(&mut self, id: &str, success: bool) -> bool {
        if !success {
            return false;
        }
        let Some(position) = self
            .items
            .iter()
            .position(|entry| entry.id.as_deref() == Some(id))
        else {
            return false;
        };
        self.items.remove(position);
        self.notify(StoreEvent::Removed(id.to_string()));
        true
    }

    fn notify(&mut self, event: StoreEvent) {
        self.revision += 1;
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
