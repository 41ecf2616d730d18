// SPDX-License-Identifier: MIT

//! The local record cache.
//!
//! [`RecordCache`] mirrors the server's summary list between full loads.
//! It is a plain owned container: every mutation goes through the four
//! operations below, and the owner re-renders after each one. The cache
//! is rebuilt wholesale on every full load, so it is always safe to
//! discard and reconstruct.
//!
//! Invariant: the cache holds at most one record per id.

use crate::record::SummaryRecord;

/// Ordered, in-memory mirror of the server's summary list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCache {
    records: Vec<SummaryRecord>,
}

impl RecordCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        RecordCache::default()
    }

    /// Discards the prior contents and adopts `records` as the new
    /// authoritative list.
    ///
    /// The server is trusted to return unique ids; should it not, later
    /// duplicates are dropped to preserve the uniqueness invariant.
    pub fn replace_all(&mut self, records: Vec<SummaryRecord>) {
        self.records.clear();
        for record in records {
            if self.get(record.id).is_none() {
                self.records.push(record);
            }
        }
    }

    /// Appends a freshly created record.
    ///
    /// If a record with the same id is already present it is replaced in
    /// place instead, preserving the uniqueness invariant. This should
    /// not occur under correct sequencing.
    pub fn insert(&mut self, record: SummaryRecord) {
        match self.position(record.id) {
            Some(i) => self.records[i] = record,
            None => self.records.push(record),
        }
    }

    /// Replaces the record with the same id, keeping its position.
    ///
    /// A no-op returning `false` if no record with that id exists, e.g.
    /// when an update response lands after a racing delete already
    /// removed the record.
    pub fn replace(&mut self, record: SummaryRecord) -> bool {
        match self.position(record.id) {
            Some(i) => {
                self.records[i] = record;
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given id.
    ///
    /// A no-op returning `false` if the id is absent.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(i) => {
                self.records.remove(i);
                true
            }
            None => false,
        }
    }

    /// The current contents, in server list order.
    pub fn records(&self) -> &[SummaryRecord] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: u64) -> Option<&SummaryRecord> {
        self.position(id).map(|i| &self.records[i])
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
