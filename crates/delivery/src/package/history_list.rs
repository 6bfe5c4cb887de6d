use common::WatchedList;
use serde::{Deserialize, Serialize};

use super::PackageHistory;

/// The history of one package, tracking entries added since it was loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageHistoryList(WatchedList<PackageHistory>);

impl PackageHistoryList {
    /// Wraps entries that are already persisted.
    pub fn new(initial: Vec<PackageHistory>) -> Self {
        Self(WatchedList::new(initial))
    }

    /// Appends an entry unless one with the same identity is present.
    pub fn add(&mut self, entry: PackageHistory) {
        self.0.add(entry);
    }

    /// All entries, oldest first.
    pub fn items(&self) -> &[PackageHistory] {
        self.0.items()
    }

    /// Entries added since load or the last commit.
    pub fn new_items(&self) -> &[PackageHistory] {
        self.0.new_items()
    }

    pub fn last(&self) -> Option<&PackageHistory> {
        self.0.last()
    }

    pub fn exists(&self, entry: &PackageHistory) -> bool {
        self.0.exists(entry)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Folds new entries into the persisted baseline.
    pub fn commit(&mut self) {
        self.0.commit();
    }
}
