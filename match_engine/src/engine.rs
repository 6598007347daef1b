// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;
use log::debug;
use parking_lot::Mutex;

use deinflect::{DeinflectCandidate, ReasonChain, deinflect};
use ja_script::{shrink_step, to_hiragana};

use crate::{
    CancellationToken, DEFAULT_CACHE_CAPACITY, DictionaryStore, EntryId, MatchedEntry,
    ScanCache, SearchError, SearchOptions, SearchOutcome, rank,
};

/// How a search matches the scanned text against the dictionary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStrategy {
    /// Longest match from the start of the text, deinflecting every prefix.
    #[default]
    Backward,
    /// Headwords starting with the text or one of its deinflected forms.
    Forward,
    /// Headwords equal to the whole text.
    Whole,
}

impl SearchStrategy {
    /// Every strategy.
    pub const ALL: [Self; 3] = [Self::Backward, Self::Forward, Self::Whole];

    const fn index(self) -> usize {
        match self {
            Self::Backward => 0,
            Self::Forward => 1,
            Self::Whole => 2,
        }
    }
}

/// Per-strategy state: the running search's token and the outcome cache.
#[derive(Debug)]
struct Lane {
    active: Mutex<Option<CancellationToken>>,
    cache: Mutex<ScanCache<SearchOutcome>>,
}

impl Lane {
    fn new(capacity: usize) -> Self {
        Self {
            active: Mutex::new(None),
            cache: Mutex::new(ScanCache::new(capacity)),
        }
    }
}

/// Looks scanned text up in a [`DictionaryStore`].
///
/// Each [`SearchStrategy`] has its own cache and runs at most one search at a
/// time: starting a search cancels the previous search of the same strategy,
/// which then resolves to [`SearchError::Cancelled`] at its next step without
/// touching the cache.
#[derive(Debug)]
pub struct SearchEngine<S> {
    store: S,
    lanes: [Lane; 3],
}

impl<S: DictionaryStore> SearchEngine<S> {
    /// Creates an engine with the default cache capacity.
    pub fn new(store: S) -> Self {
        Self::with_cache_capacity(store, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates an engine caching up to `capacity` outcomes per strategy.
    pub fn with_cache_capacity(store: S, capacity: usize) -> Self {
        Self {
            store,
            lanes: [Lane::new(capacity), Lane::new(capacity), Lane::new(capacity)],
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cancels the running search of `strategy`, if any.
    pub fn cancel(&self, strategy: SearchStrategy) {
        if let Some(token) = self.lane(strategy).active.lock().take() {
            token.cancel();
        }
    }

    /// Returns the outcome cached for `input`, without searching.
    pub fn cached(&self, strategy: SearchStrategy, input: &str) -> Option<SearchOutcome> {
        self.lane(strategy).cache.lock().get(input)
    }

    /// Empties every strategy's cache.
    pub fn clear_cache(&self) {
        for lane in &self.lanes {
            lane.cache.lock().clear();
        }
    }

    /// Searches with [`SearchStrategy::Backward`].
    pub async fn backward(
        &self,
        input: &str,
        options: &SearchOptions,
    ) -> Result<SearchOutcome, SearchError<S::Error>> {
        self.search(SearchStrategy::Backward, input, options).await
    }

    /// Searches with [`SearchStrategy::Forward`].
    pub async fn forward(
        &self,
        input: &str,
        options: &SearchOptions,
    ) -> Result<SearchOutcome, SearchError<S::Error>> {
        self.search(SearchStrategy::Forward, input, options).await
    }

    /// Searches with [`SearchStrategy::Whole`].
    pub async fn whole(
        &self,
        input: &str,
        options: &SearchOptions,
    ) -> Result<SearchOutcome, SearchError<S::Error>> {
        self.search(SearchStrategy::Whole, input, options).await
    }

    /// Searches `input` with `strategy`.
    ///
    /// Cached outcomes are returned as they are; the cache key is the raw
    /// input, whatever the options.
    pub async fn search(
        &self,
        strategy: SearchStrategy,
        input: &str,
        options: &SearchOptions,
    ) -> Result<SearchOutcome, SearchError<S::Error>> {
        let token = self.begin(strategy);
        let lane = self.lane(strategy);
        let cached = lane.cache.lock().get(input);
        if let Some(outcome) = cached {
            debug!("{strategy:?} cache hit for {input:?}");
            return Ok(outcome);
        }

        let result = match strategy {
            SearchStrategy::Backward => self.search_backward(input, options, &token).await,
            SearchStrategy::Forward => self.search_forward(input, options, &token).await,
            SearchStrategy::Whole => self.search_whole(input, options, &token).await,
        };
        let outcome = match result {
            Ok(outcome) if !token.is_cancelled() => outcome,
            Ok(_) | Err(SearchError::Cancelled) => {
                debug!("{strategy:?} search for {input:?} was cancelled");
                return Err(SearchError::Cancelled);
            }
            Err(err) => return Err(err),
        };
        debug!(
            "{strategy:?} search for {input:?}: {} entries, max length {}",
            outcome.entries.len(),
            outcome.max_length
        );
        lane.cache.lock().insert(input, outcome.clone());
        Ok(outcome)
    }

    fn lane(&self, strategy: SearchStrategy) -> &Lane {
        &self.lanes[strategy.index()]
    }

    /// Installs a fresh token for `strategy`, cancelling the one it replaces.
    fn begin(&self, strategy: SearchStrategy) -> CancellationToken {
        let token = CancellationToken::new();
        let previous = self.lane(strategy).active.lock().replace(token.clone());
        if let Some(previous) = previous {
            if !previous.is_cancelled() {
                debug!("superseding running {strategy:?} search");
            }
            previous.cancel();
        }
        token
    }

    async fn search_backward(
        &self,
        input: &str,
        options: &SearchOptions,
        token: &CancellationToken,
    ) -> Result<SearchOutcome, SearchError<S::Error>> {
        let raw: Vec<char> = input.chars().collect();
        let normalized: Vec<char> = to_hiragana(input).chars().collect();
        let mut queried: HashSet<String> = HashSet::new();
        let mut matches = Matches::default();
        let mut max_length = 0;

        let mut len = normalized.len();
        while len > 0 && matches.len() < options.max_result {
            token.check()?;
            let word: String = normalized[..len].iter().collect();
            let ori_word: String = raw[..len].iter().collect();
            for candidate in deinflect(&word) {
                token.check()?;
                // A match must fit in the text it was found at.
                if candidate.word.chars().count() > len {
                    continue;
                }
                if !queried.insert(candidate.word.clone()) {
                    continue;
                }
                let words = query_words(&candidate, &ori_word);
                let found = self
                    .store
                    .search_exact(&words, options.max_query_limit)
                    .await
                    .map_err(SearchError::Store)?;
                token.check()?;
                for entry in found {
                    if !candidate.accepts(entry.word_type()) {
                        continue;
                    }
                    if matches.push(MatchedEntry {
                        entry,
                        word: candidate.word.clone(),
                        ori_word: ori_word.clone(),
                        reasons: candidate.reasons.clone(),
                    }) && max_length == 0
                    {
                        max_length = len;
                    }
                }
            }
            len -= shrink_step(&normalized[..len]);
        }

        Ok(matches.finish(input, max_length, options))
    }

    async fn search_forward(
        &self,
        input: &str,
        options: &SearchOptions,
        token: &CancellationToken,
    ) -> Result<SearchOutcome, SearchError<S::Error>> {
        let normalized = to_hiragana(input);
        let mut matches = Matches::default();
        for candidate in deinflect(&normalized) {
            token.check()?;
            let words = query_words(&candidate, input);
            let found = self
                .store
                .search_prefix(&words, options.max_query_limit)
                .await
                .map_err(SearchError::Store)?;
            token.check()?;
            for entry in found {
                matches.push(MatchedEntry {
                    entry,
                    word: candidate.word.clone(),
                    ori_word: input.into(),
                    reasons: candidate.reasons.clone(),
                });
            }
        }
        let max_length = if matches.is_empty() {
            0
        } else {
            normalized.chars().count()
        };
        Ok(matches.finish(input, max_length, options))
    }

    async fn search_whole(
        &self,
        input: &str,
        options: &SearchOptions,
        token: &CancellationToken,
    ) -> Result<SearchOutcome, SearchError<S::Error>> {
        token.check()?;
        let normalized = to_hiragana(input);
        let mut words = vec![normalized.clone()];
        if input != normalized {
            words.push(input.into());
        }
        let found = self
            .store
            .search_exact(&words, options.max_query_limit)
            .await
            .map_err(SearchError::Store)?;
        token.check()?;
        let mut matches = Matches::default();
        for entry in found {
            matches.push(MatchedEntry {
                entry,
                word: normalized.clone(),
                ori_word: input.into(),
                reasons: ReasonChain::new(),
            });
        }
        let max_length = if matches.is_empty() {
            0
        } else {
            normalized.chars().count()
        };
        Ok(matches.finish(input, max_length, options))
    }
}

/// The words to look up for `candidate`: its own word, plus the text as
/// written when the candidate is the untransformed input.
fn query_words(candidate: &DeinflectCandidate, raw: &str) -> Vec<String> {
    let mut words = vec![candidate.word.clone()];
    if candidate.is_identity() && candidate.word != raw {
        words.push(raw.into());
    }
    words
}

/// Matches accumulated during one search, each entry at most once.
#[derive(Default)]
struct Matches {
    seen: HashSet<EntryId>,
    entries: Vec<MatchedEntry>,
}

impl Matches {
    /// Adds `matched` unless its entry is already present. Returns whether
    /// it was added.
    fn push(&mut self, matched: MatchedEntry) -> bool {
        if !self.seen.insert(matched.entry.id) {
            return false;
        }
        self.entries.push(matched);
        true
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn finish(self, input: &str, max_length: usize, options: &SearchOptions) -> SearchOutcome {
        let mut entries = rank(self.entries);
        entries.truncate(options.max_result);
        SearchOutcome {
            input: input.into(),
            max_length,
            entries,
        }
    }
}
