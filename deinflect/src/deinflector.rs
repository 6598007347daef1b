// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use hashbrown::HashSet;

use crate::rules::rules;
use crate::{ReasonChain, WordType};

/// The most rewrites applied on the way from a surface form to a candidate.
///
/// Reattaching a stem to its dictionary ending counts as a rewrite, so
/// 食べられなかった → 食べる (past, negative, passive/potential) takes five.
pub const MAX_DEPTH: usize = 8;

/// A possible dictionary form of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeinflectCandidate {
    /// The candidate base form.
    pub word: String,
    /// The transformations undone to reach `word`, outermost first.
    pub reasons: ReasonChain,
    /// The grammatical types `word` may have.
    pub word_type: WordType,
}

impl DeinflectCandidate {
    /// The candidate for `word` read as it is.
    pub fn identity(word: &str) -> Self {
        Self {
            word: word.into(),
            reasons: ReasonChain::new(),
            word_type: WordType::UNRESTRICTED,
        }
    }

    /// Returns `true` for the untransformed input.
    ///
    /// Every rewrite path starts with a rule that names a reason, so the
    /// identity candidate is the only one with an empty chain.
    pub fn is_identity(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Returns `true` if a dictionary entry of type `entry_type` can be what
    /// this candidate stands for.
    ///
    /// The identity candidate accepts everything: it is the word as written,
    /// not a morphological guess.
    pub fn accepts(&self, entry_type: WordType) -> bool {
        self.is_identity() || self.word_type.intersects(entry_type)
    }
}

/// Lists the possible dictionary forms of `word`.
///
/// `word` should already be folded onto hiragana. The identity candidate
/// comes first, followed by every form reachable through the rule table in
/// breadth-first order, so shallower readings come before deeper ones.
/// Forms reachable through several paths are reported once per type, with
/// the shortest chain. Intermediate stems are not reported.
///
/// An empty `word` has no candidates.
pub fn deinflect(word: &str) -> Vec<DeinflectCandidate> {
    if word.is_empty() {
        return Vec::new();
    }
    let mut found = vec![DeinflectCandidate::identity(word)];
    let mut seen: HashSet<(String, WordType)> = HashSet::new();
    seen.insert((found[0].word.clone(), found[0].word_type));

    let mut frontier: Range<usize> = 0..1;
    for _ in 0..MAX_DEPTH {
        let next_start = found.len();
        for parent in frontier {
            for rule in rules() {
                let Some(candidate) = rule.apply(&found[parent]) else {
                    continue;
                };
                if seen.insert((candidate.word.clone(), candidate.word_type)) {
                    found.push(candidate);
                }
            }
        }
        frontier = next_start..found.len();
        if frontier.is_empty() {
            break;
        }
    }

    found.retain(|candidate| candidate.is_identity() || candidate.word_type.is_dictionary_form());
    found
}
