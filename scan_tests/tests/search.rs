// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dictionary lookups over the sample dictionary.

use core::pin::pin;
use core::task::Poll;
use std::sync::Arc;

use crate::util::{GatedStore, poll_once, sample_engine};
use deinflect::Reason;
use match_engine::{
    Entry, EntryId, MatchedEntry, ReasonChain, SearchEngine, SearchError, SearchOptions,
    SearchOutcome, SearchStrategy, rank,
};
use pollster::block_on;
use scan_dev::{QueryKind, TextSamples, sample_entries};

fn has_unique_entries(outcome: &SearchOutcome) -> bool {
    let mut ids: Vec<_> = outcome.entries.iter().map(|m| m.entry.id).collect();
    ids.sort_unstable();
    ids.windows(2).all(|pair| pair[0] != pair[1])
}

#[test]
fn search_backward_scenario() {
    let engine = sample_engine();
    let options = SearchOptions::default();
    let outcome = block_on(engine.backward("食べられなかった", &options)).unwrap();
    assert_eq!(outcome.max_length, 8);
    assert_eq!(outcome.entries.len(), 1);
    let matched = &outcome.entries[0];
    assert_eq!(matched.entry.id, EntryId(1));
    assert_eq!(matched.word, "食べる");
    assert_eq!(matched.ori_word, "食べられなかった");
    assert_eq!(
        matched.reasons.to_string(),
        "past < negative < passive/potential"
    );
    for reason in [Reason::Past, Reason::Negative, Reason::PassivePotential] {
        assert!(matched.reasons.has(reason));
    }
}

#[test]
fn search_backward_monotonic_and_unique() {
    let engine = sample_engine();
    let options = SearchOptions::default();
    let samples = TextSamples::new();
    let text: Vec<char> = samples.japanese.text.trim_end().chars().collect();
    for start in 0..text.len() {
        let input: String = text[start..].iter().take(16).collect();
        let outcome = block_on(engine.backward(&input, &options)).unwrap();
        assert!(outcome.max_length <= input.chars().count());
        assert!(has_unique_entries(&outcome), "duplicate entries for {input}");
        for matched in &outcome.entries {
            let found_at = matched.ori_word.chars().count();
            assert!(found_at <= outcome.max_length);
            assert!(
                matched.word.chars().count() <= found_at,
                "{} outgrew {} in {input}",
                matched.word,
                matched.ori_word
            );
            assert!(input.starts_with(&matched.ori_word));
        }
        assert!(outcome.entries.len() <= options.max_result);
    }
}

#[test]
fn search_backward_reads_a_stem_only_through_an_ending() {
    let engine = sample_engine();
    let options = SearchOptions::default();
    // 食べ on its own is not in the dictionary, and 食べる is longer than it.
    let outcome = block_on(engine.backward("食べに", &options)).unwrap();
    assert!(outcome.is_empty(), "matched {:?}", outcome.entries);
    assert_eq!(outcome.max_length, 0);

    let outcome = block_on(engine.backward("食べたい", &options)).unwrap();
    assert_eq!(outcome.entries[0].entry.id, EntryId(1));
    assert_eq!(outcome.max_length, 4);
}

#[test]
fn search_backward_filters_by_part_of_speech() {
    let engine = sample_engine();
    let options = SearchOptions::default();

    // Both 書く and 角 are read かく, but only the verb has a past tense.
    let outcome = block_on(engine.backward("かいた", &options)).unwrap();
    let ids: Vec<_> = outcome.entries.iter().map(|m| m.entry.id).collect();
    assert_eq!(ids, [EntryId(3)]);
    assert_eq!(outcome.max_length, 3);

    // Undeinflected, both match and rank by priority.
    let outcome = block_on(engine.backward("かく", &options)).unwrap();
    let ids: Vec<_> = outcome.entries.iter().map(|m| m.entry.id).collect();
    assert_eq!(ids, [EntryId(3), EntryId(4)]);
}

#[test]
fn search_backward_digraph_shrinking() {
    let engine = sample_engine();
    let outcome = block_on(engine.backward("ぎゃく", &SearchOptions::default())).unwrap();
    assert_eq!(outcome.max_length, 1);
    assert_eq!(outcome.entries[0].entry.id, EntryId(8));

    let words = engine.store().queried_words();
    assert!(words.iter().any(|w| w == "ぎゃく"));
    assert!(words.iter().any(|w| w == "ぎ"));
    assert!(!words.iter().any(|w| w == "ぎゃ"), "queried {words:?}");
}

#[test]
fn search_backward_katakana_queries_raw_once() {
    let engine = sample_engine();
    let outcome = block_on(engine.backward("テレビ", &SearchOptions::default())).unwrap();
    assert_eq!(outcome.entries[0].entry.id, EntryId(7));
    let queries = engine.store().queries();
    assert_eq!(queries[0], (QueryKind::Exact, vec!["てれび".into(), "テレビ".into()]));
    // Deinflected candidates never carry the raw spelling.
    for (_, words) in &queries {
        assert!(words.len() <= 2);
        if words.len() == 2 {
            assert_eq!(ja_script::to_hiragana(&words[1]), words[0]);
        }
    }
}

#[test]
fn search_forward_and_whole() {
    let engine = sample_engine();
    let options = SearchOptions::default();

    let outcome = block_on(engine.forward("べんきょ", &options)).unwrap();
    assert_eq!(outcome.entries[0].entry.id, EntryId(6));
    assert_eq!(outcome.max_length, 4);
    assert!(engine
        .store()
        .queries()
        .iter()
        .all(|(kind, _)| *kind == QueryKind::Prefix));

    let outcome = block_on(engine.whole("テレビ", &options)).unwrap();
    assert_eq!(outcome.entries[0].entry.id, EntryId(7));
    assert_eq!(outcome.max_length, 3);

    let outcome = block_on(engine.whole("テレ", &options)).unwrap();
    assert!(outcome.is_empty());
    assert_eq!(outcome.max_length, 0);
}

#[test]
fn search_results_are_cached_per_strategy() {
    let engine = sample_engine();
    let options = SearchOptions::default();
    let first = block_on(engine.backward("勉強する", &options)).unwrap();
    let queries = engine.store().queries().len();
    let second = block_on(engine.backward("勉強する", &options)).unwrap();
    assert_eq!(first, second);
    assert_eq!(engine.store().queries().len(), queries);
    assert_eq!(engine.cached(SearchStrategy::Backward, "勉強する"), Some(first));
    assert!(engine.cached(SearchStrategy::Forward, "勉強する").is_none());

    engine.clear_cache();
    assert!(engine.cached(SearchStrategy::Backward, "勉強する").is_none());
}

#[test]
fn search_suru_noun() {
    let engine = sample_engine();
    let options = SearchOptions::default();
    let outcome = block_on(engine.backward("勉強しました", &options)).unwrap();
    assert_eq!(outcome.entries[0].entry.id, EntryId(6));
    assert_eq!(outcome.max_length, 6);
}

#[test]
fn search_cancelled_by_next_search() {
    let engine = SearchEngine::new(GatedStore::new(sample_entries()));
    let options = SearchOptions::default();

    let mut first = pin!(engine.backward("たべた", &options));
    assert!(poll_once(first.as_mut()).is_pending());

    // Starting the second search cancels the first, which is waiting on the
    // store.
    let mut second = pin!(engine.backward("かいた", &options));
    assert!(poll_once(second.as_mut()).is_pending());
    engine.store().open();

    let first = loop {
        if let Poll::Ready(result) = poll_once(first.as_mut()) {
            break result;
        }
    };
    assert!(matches!(first, Err(SearchError::Cancelled)));
    let second = block_on(second).unwrap();
    assert_eq!(second.entries[0].entry.id, EntryId(3));

    assert!(engine.cached(SearchStrategy::Backward, "たべた").is_none());
    assert!(engine.cached(SearchStrategy::Backward, "かいた").is_some());
    assert!(!engine.store().inner().queries().is_empty());
}

#[test]
fn search_cancel_leaves_other_strategies_alone() {
    let engine = SearchEngine::new(GatedStore::new(sample_entries()));
    let options = SearchOptions::default();

    let mut backward = pin!(engine.backward("たべた", &options));
    let mut whole = pin!(engine.whole("たべる", &options));
    assert!(poll_once(backward.as_mut()).is_pending());
    assert!(poll_once(whole.as_mut()).is_pending());
    engine.cancel(SearchStrategy::Backward);
    engine.store().open();

    assert!(block_on(backward).is_err_and(|err| err.is_cancelled()));
    let whole = block_on(whole).unwrap();
    assert_eq!(whole.entries[0].entry.id, EntryId(1));
}

#[test]
fn search_ranking_is_stable_within_words() {
    let matched = |id: u64, word: &str, priority: &[&str]| MatchedEntry {
        entry: Arc::new(
            Entry::new(EntryId(id))
                .with_kanji(word, priority.iter().copied())
                .with_sense(["-"], ["v5"]),
        ),
        word: word.into(),
        ori_word: word.into(),
        reasons: ReasonChain::new(),
    };
    let ranked = rank(vec![
        matched(1, "行く", &[]),
        matched(2, "買う", &["nf01"]),
        matched(3, "行く", &["nf05"]),
    ]);
    let ids: Vec<_> = ranked.iter().map(|m| m.entry.id.0).collect();
    assert_eq!(ids, [3, 2, 1]);
}
