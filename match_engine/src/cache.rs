// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::VecDeque;

/// The number of outcomes a [`ScanCache`] keeps unless told otherwise.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// A cached value and the input it was computed for.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheRecord<T> {
    /// The key, the raw scanned text.
    pub id: String,
    /// The cached value.
    pub value: T,
}

/// A small first-in first-out cache of search outcomes.
///
/// Lookups are linear; the cache is meant to hold a few dozen entries.
#[derive(Clone, Debug)]
pub struct ScanCache<T> {
    records: VecDeque<CacheRecord<T>>,
    capacity: usize,
}

impl<T> Default for ScanCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl<T> ScanCache<T> {
    /// Creates an empty cache holding at most `capacity` records.
    ///
    /// A cache with zero capacity never stores anything.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY)),
            capacity,
        }
    }

    /// Returns a copy of the value cached for `id`.
    pub fn get(&self, id: &str) -> Option<T>
    where
        T: Clone,
    {
        self.records
            .iter()
            .find(|record| record.id == id)
            .map(|record| record.value.clone())
    }

    /// Caches `value` for `id`.
    ///
    /// An existing record for `id` is replaced and moves to the back of the
    /// queue. The oldest records are evicted once the cache is over capacity.
    pub fn insert(&mut self, id: impl Into<String>, value: T) {
        let id = id.into();
        if let Some(index) = self.records.iter().position(|record| record.id == id) {
            self.records.remove(index);
        }
        self.records.push_back(CacheRecord { id, value });
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// The number of cached records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most records the cache holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The cached records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &CacheRecord<T>> {
        self.records.iter()
    }
}
