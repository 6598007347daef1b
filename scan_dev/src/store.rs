// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::convert::Infallible;
use std::sync::Arc;

use ja_script::to_hiragana;
use match_engine::{DictionaryStore, Entry};
use parking_lot::Mutex;

/// Which store primitive a query went through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryKind {
    /// [`DictionaryStore::search_exact`].
    Exact,
    /// [`DictionaryStore::search_prefix`].
    Prefix,
}

/// A dictionary held in memory, recording every query it answers.
///
/// A headword matches a query word when it is equal to it, either as written
/// or folded to hiragana. Entries are returned in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<Arc<Entry>>,
    queries: Mutex<Vec<(QueryKind, Vec<String>)>>,
}

impl MemoryStore {
    /// Creates a store holding `entries`.
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            entries: entries.into_iter().map(Arc::new).collect(),
            queries: Mutex::default(),
        }
    }

    /// The queries answered so far, oldest first.
    pub fn queries(&self) -> Vec<(QueryKind, Vec<String>)> {
        self.queries.lock().clone()
    }

    /// Every word queried so far, in order.
    pub fn queried_words(&self) -> Vec<String> {
        self.queries
            .lock()
            .iter()
            .flat_map(|(_, words)| words.iter().cloned())
            .collect()
    }

    /// Forgets the recorded queries.
    pub fn clear_queries(&self) {
        self.queries.lock().clear();
    }

    fn find(
        &self,
        kind: QueryKind,
        words: &[String],
        limit: usize,
        matches: impl Fn(&str, &str) -> bool,
    ) -> Vec<Arc<Entry>> {
        self.queries.lock().push((kind, words.to_vec()));
        self.entries
            .iter()
            .filter(|entry| {
                entry.headwords().any(|headword| {
                    let folded = to_hiragana(&headword.text);
                    words
                        .iter()
                        .any(|word| matches(&headword.text, word) || matches(&folded, word))
                })
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

impl DictionaryStore for MemoryStore {
    type Error = Infallible;

    async fn search_exact(
        &self,
        words: &[String],
        limit: usize,
    ) -> Result<Vec<Arc<Entry>>, Infallible> {
        Ok(self.find(QueryKind::Exact, words, limit, |headword, word| headword == word))
    }

    async fn search_prefix(
        &self,
        words: &[String],
        limit: usize,
    ) -> Result<Vec<Arc<Entry>>, Infallible> {
        Ok(self.find(QueryKind::Prefix, words, limit, |headword, word| {
            headword.starts_with(word)
        }))
    }
}
