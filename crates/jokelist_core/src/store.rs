//! In-memory vote store.
//!
//! # Responsibility
//! - Own the ordered joke records of the current set.
//! - Apply votes and derive the display order.
//!
//! # Invariants
//! - Store order is arrival order; votes never reorder it.
//! - A vote touches at most one record.
//! - Display order is derived on demand and never stored.

use crate::model::joke::JokeRecord;

/// Ordered collection of joke records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JokeStore {
    records: Vec<JokeRecord>,
}

impl JokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-deduplicated records.
    pub fn from_records(records: Vec<JokeRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in store (arrival) order.
    pub fn records(&self) -> &[JokeRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&JokeRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Replaces the whole set.
    pub fn replace_all(&mut self, records: Vec<JokeRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Adds `delta` to the votes of the record with `id`.
    ///
    /// Returns `false` and leaves the store untouched when `id` is unknown.
    pub fn vote(&mut self, id: &str, delta: i64) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.apply_vote(delta);
                true
            }
            None => false,
        }
    }

    /// Records sorted by votes, highest first.
    ///
    /// The sort is stable: ties keep store order.
    pub fn sorted_for_display(&self) -> Vec<&JokeRecord> {
        let mut sorted: Vec<&JokeRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.votes.cmp(&a.votes));
        sorted
    }
}
