// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Reverse;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::MatchedEntry;

/// Orders matches by lexical priority.
///
/// Matches of the same word are reordered among the positions they already
/// occupy, highest [score](MatchedEntry::score) first, keeping their relative
/// order on ties. Matches of different words never trade places, so a longer
/// match found first stays ahead of a shorter one however common the latter
/// is.
pub fn rank(entries: Vec<MatchedEntry>) -> Vec<MatchedEntry> {
    let scores: Vec<u32> = entries.iter().map(MatchedEntry::score).collect();
    let mut order: Vec<usize> = (0..entries.len()).collect();
    {
        let mut groups: HashMap<&str, SmallVec<[usize; 4]>> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            groups.entry(entry.word.as_str()).or_default().push(index);
        }
        for slots in groups.values().filter(|slots| slots.len() > 1) {
            let mut members = slots.clone();
            members.sort_by_key(|&index| Reverse(scores[index]));
            for (&slot, &member) in slots.iter().zip(&members) {
                order[slot] = member;
            }
        }
    }
    let mut taken: Vec<Option<MatchedEntry>> = entries.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|index| taken[index].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::rank;
    use crate::{Entry, EntryId, MatchedEntry};
    use deinflect::ReasonChain;
    use std::sync::Arc;

    fn matched(id: u64, word: &str, tags: &[&str]) -> MatchedEntry {
        MatchedEntry {
            entry: Arc::new(Entry::new(EntryId(id)).with_reading(word, tags.iter().copied())),
            word: word.into(),
            ori_word: word.into(),
            reasons: ReasonChain::new(),
        }
    }

    fn ids(entries: &[MatchedEntry]) -> Vec<u64> {
        entries.iter().map(|m| m.entry.id.0).collect()
    }

    #[test]
    fn same_word_sorted_by_score() {
        let ranked = rank(vec![
            matched(1, "かく", &[]),
            matched(2, "かく", &["ichi1", "news1"]),
            matched(3, "かく", &["spec2"]),
        ]);
        assert_eq!(ids(&ranked), [2, 3, 1]);
    }

    #[test]
    fn other_words_keep_their_slots() {
        let ranked = rank(vec![
            matched(1, "たべる", &[]),
            matched(2, "たべ", &["ichi1"]),
            matched(3, "たべる", &["nf01"]),
            matched(4, "た", &["news1"]),
        ]);
        assert_eq!(ids(&ranked), [3, 2, 1, 4]);
    }

    #[test]
    fn ties_keep_order() {
        let ranked = rank(vec![
            matched(1, "はし", &["ichi1"]),
            matched(2, "はし", &["news1", "gai2"]),
            matched(3, "はし", &[]),
        ]);
        assert_eq!(ids(&ranked), [1, 2, 3]);
    }

    #[test]
    fn headwords_of_other_words_do_not_count() {
        let mut other = matched(1, "はし", &["ichi1"]);
        other.word = "はしる".into();
        other.ori_word = "はしる".into();
        let ranked = rank(vec![other, matched(2, "はしる", &["ichi2"])]);
        assert_eq!(ids(&ranked), [2, 1]);
    }

    #[test]
    fn empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
