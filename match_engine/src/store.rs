// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::future::Future;
use std::sync::Arc;

use crate::Entry;

/// The dictionary a [`SearchEngine`](crate::SearchEngine) looks words up in.
///
/// Implementations decide how words are matched against headwords; the
/// engine only expects that kana lookups also find entries whose readings are
/// written in katakana.
pub trait DictionaryStore {
    /// The error reported when a lookup fails.
    type Error: core::error::Error;

    /// Returns entries with a headword equal to any of `words`, at most
    /// `limit` of them.
    fn search_exact(
        &self,
        words: &[String],
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Arc<Entry>>, Self::Error>> + Send;

    /// Returns entries with a headword starting with any of `words`, at most
    /// `limit` of them.
    fn search_prefix(
        &self,
        words: &[String],
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Arc<Entry>>, Self::Error>> + Send;
}
