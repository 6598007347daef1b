// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use deinflect::ReasonChain;

use crate::Entry;

/// A dictionary entry found for some part of the scanned text.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedEntry {
    /// The entry, shared with the store.
    pub entry: Arc<Entry>,
    /// The word that was looked up: the hiragana-folded text, or one of its
    /// deinflected forms.
    pub word: String,
    /// The scanned text the match covers, as written.
    pub ori_word: String,
    /// How `ori_word` was deinflected into `word`. Empty for direct matches.
    pub reasons: ReasonChain,
}

impl MatchedEntry {
    /// Returns the score of the entry's best headword for the matched word.
    ///
    /// Headwords are compared with the matched word after folding them onto
    /// hiragana, so katakana readings count. Entries with no matching headword
    /// or no priority tags score zero.
    pub fn score(&self) -> u32 {
        self.entry
            .headwords()
            .filter(|headword| {
                headword.text == self.word
                    || headword.text == self.ori_word
                    || ja_script::to_hiragana(&headword.text) == self.word
            })
            .map(|headword| headword.score())
            .max()
            .unwrap_or(0)
    }
}

/// The result of one search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    /// The raw text that was searched.
    pub input: String,
    /// The number of leading characters of `input` the best match covers, or
    /// zero when nothing matched.
    pub max_length: usize,
    /// Matches ranked by priority, each entry at most once.
    pub entries: Vec<MatchedEntry>,
}

impl SearchOutcome {
    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
