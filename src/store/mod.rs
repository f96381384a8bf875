//! Ordered File Store
//!
//! The single authoritative ordered sequence of file records. Insertion order is the
//! display and merge order; identity is positional. Every operation reports whether the
//! sequence actually changed so callers can decide whether derived views are stale.

use crate::error::StoreError;
use crate::types::{FileRecord, StoreIndex};
use std::collections::BTreeSet;
use tracing::debug;

/// Ordered collection of file records
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    records: Vec<FileRecord>,
    revision: u64,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records` in order
    pub fn from_records(records: Vec<FileRecord>) -> Self {
        Self {
            records,
            revision: 0,
        }
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn get(&self, index: StoreIndex) -> Option<&FileRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record names in store order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Counter bumped on every effective mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Concatenate `batch` after the current sequence.
    pub fn append(&mut self, batch: Vec<FileRecord>) -> bool {
        if batch.is_empty() {
            return false;
        }
        debug!(count = batch.len(), existing = self.records.len(), "Appending records");
        self.records.extend(batch);
        self.touch()
    }

    /// Swap `index` with its predecessor. No-op at the head.
    pub fn move_up(&mut self, index: StoreIndex) -> Result<bool, StoreError> {
        self.check(index)?;
        if index == 0 {
            return Ok(false);
        }
        self.records.swap(index - 1, index);
        Ok(self.touch())
    }

    /// Swap `index` with its successor. No-op at the tail.
    pub fn move_down(&mut self, index: StoreIndex) -> Result<bool, StoreError> {
        self.check(index)?;
        if index + 1 == self.records.len() {
            return Ok(false);
        }
        self.records.swap(index, index + 1);
        Ok(self.touch())
    }

    /// Delete the record at `index`; following records shift left.
    pub fn remove(&mut self, index: StoreIndex) -> Result<FileRecord, StoreError> {
        self.check(index)?;
        let removed = self.records.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Delete every record whose index is listed, in a single pass.
    ///
    /// Indices may arrive in any order and may repeat; indices past the end are ignored.
    /// Returns the number of records removed.
    pub fn remove_many<I>(&mut self, indices: I) -> usize
    where
        I: IntoIterator<Item = StoreIndex>,
    {
        let doomed: BTreeSet<StoreIndex> = indices
            .into_iter()
            .filter(|&i| i < self.records.len())
            .collect();
        if doomed.is_empty() {
            return 0;
        }
        let mut position = 0;
        self.records.retain(|_| {
            let keep = !doomed.contains(&position);
            position += 1;
            keep
        });
        self.touch();
        doomed.len()
    }

    /// Splice the record at `from` out, then splice it back in at `to`.
    ///
    /// `to` addresses the sequence after removal and is clamped to its length.
    pub fn reorder(&mut self, from: StoreIndex, to: StoreIndex) -> Result<bool, StoreError> {
        self.check(from)?;
        let record = self.records.remove(from);
        let to = to.min(self.records.len());
        self.records.insert(to, record);
        if from == to {
            return Ok(false);
        }
        Ok(self.touch())
    }

    /// Remove every record.
    pub fn clear(&mut self) -> bool {
        if self.records.is_empty() {
            return false;
        }
        self.records.clear();
        self.touch()
    }

    fn check(&self, index: StoreIndex) -> Result<(), StoreError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    fn touch(&mut self) -> bool {
        self.revision += 1;
        true
    }
}
