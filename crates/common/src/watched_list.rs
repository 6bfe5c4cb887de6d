//! Collection that remembers which items were added or removed since load.

use serde::{Deserialize, Serialize};

use crate::Entity;

/// A list that tracks changes relative to the items it was loaded with.
///
/// Persistence adapters read [`WatchedList::new_items`] and
/// [`WatchedList::removed_items`] to write only the difference, then call
/// [`WatchedList::commit`] once the difference is stored. Items are compared
/// by identity, never by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchedList<T> {
    current: Vec<T>,
    initial: Vec<T>,
    new: Vec<T>,
    removed: Vec<T>,
}

impl<T> Default for WatchedList<T> {
    fn default() -> Self {
        Self {
            current: Vec::new(),
            initial: Vec::new(),
            new: Vec::new(),
            removed: Vec::new(),
        }
    }
}

impl<T: Entity + Clone> WatchedList<T> {
    /// Creates a list whose items are treated as already persisted.
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            current: initial.clone(),
            initial,
            new: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// All items currently in the list, in insertion order.
    pub fn items(&self) -> &[T] {
        &self.current
    }

    /// Items added since load (or since the last commit).
    pub fn new_items(&self) -> &[T] {
        &self.new
    }

    /// Persisted items removed since load (or since the last commit).
    pub fn removed_items(&self) -> &[T] {
        &self.removed
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.current.last()
    }

    /// Returns true if an item with the same identity is in the list.
    pub fn exists(&self, item: &T) -> bool {
        contains(&self.current, item)
    }

    /// Adds an item. Adding an item that is already present is a no-op.
    pub fn add(&mut self, item: T) {
        if contains(&self.removed, &item) {
            self.removed.retain(|r| !r.same_identity_as(&item));
        }

        if !contains(&self.new, &item) && !contains(&self.initial, &item) {
            self.new.push(item.clone());
        }

        if !contains(&self.current, &item) {
            self.current.push(item);
        }
    }

    /// Removes an item by identity.
    pub fn remove(&mut self, item: &T) {
        self.current.retain(|c| !c.same_identity_as(item));

        if contains(&self.new, item) {
            self.new.retain(|n| !n.same_identity_as(item));
            return;
        }

        if contains(&self.initial, item) && !contains(&self.removed, item) {
            self.removed.push(item.clone());
        }
    }

    /// Accepts the current items as the persisted baseline.
    pub fn commit(&mut self) {
        self.initial = self.current.clone();
        self.new.clear();
        self.removed.clear();
    }
}

fn contains<T: Entity>(items: &[T], item: &T) -> bool {
    items.iter().any(|i| i.same_identity_as(item))
}
