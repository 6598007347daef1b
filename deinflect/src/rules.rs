// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rewrite table.
//!
//! Endings are hiragana; the deinflector runs on kana-normalized input. Each
//! family lists longer endings before the shorter endings they contain, which
//! keeps the more specific reading ahead in the output.

use alloc::string::String;

use crate::{DeinflectCandidate, Reason, WordType};
use Reason::*;

/// A single surface-ending to base-ending rewrite.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// The ending the current form must have.
    pub from: &'static str,
    /// The ending that replaces it.
    pub to: &'static str,
    /// The types the current form must intersect for the rule to apply.
    pub from_type: WordType,
    /// The type of the rewritten form.
    pub to_type: WordType,
    /// What undoing this ending means, outermost first. Empty for rules that
    /// only reattach a stem to its dictionary ending.
    pub reasons: &'static [Reason],
}

impl Rule {
    const fn new(
        from: &'static str,
        to: &'static str,
        from_type: WordType,
        to_type: WordType,
        reasons: &'static [Reason],
    ) -> Self {
        Self {
            from,
            to,
            from_type,
            to_type,
            reasons,
        }
    }

    /// Applies the rule to `candidate`, if its ending and type allow it.
    pub(crate) fn apply(&self, candidate: &DeinflectCandidate) -> Option<DeinflectCandidate> {
        if !candidate.word_type.intersects(self.from_type) {
            return None;
        }
        let stem = candidate.word.strip_suffix(self.from)?;
        if stem.is_empty() && self.to.is_empty() {
            return None;
        }
        let mut word = String::with_capacity(stem.len() + self.to.len());
        word.push_str(stem);
        word.push_str(self.to);
        Some(DeinflectCandidate {
            word,
            reasons: candidate.reasons.extended(self.reasons),
            word_type: self.to_type,
        })
    }
}

/// Every rule the deinflector knows, in priority order.
pub fn rules() -> &'static [Rule] {
    RULES
}

const S: WordType = WordType::SURFACE;
const V1: WordType = WordType::ICHIDAN_VERB;
const V5: WordType = WordType::GODAN_VERB;
const ADJ: WordType = WordType::I_ADJ;
const VK: WordType = WordType::KURU_VERB;
const VS: WordType = WordType::SURU_VERB.union(WordType::SPECIAL_SURU_VERB);
const VZ: WordType = WordType::ZURU_VERB;
const NVS: WordType = WordType::NOUN_VS;
const VERB: WordType = WordType::VERB;
const MASU: WordType = WordType::MASU_STEM;
const TATE: WordType = WordType::TA_TE_STEM;
const DADE: WordType = WordType::DA_DE_STEM;
const IRR: WordType = WordType::IRREALIS_STEM;

static RULES: &[Rule] = &[
    // Polite endings and other auxiliaries on the continuative stem.
    Rule::new("ませんでした", "", S, MASU, &[Past, Negative, Polite]),
    Rule::new("ましょう", "", S, MASU, &[Volitional, Polite]),
    Rule::new("ました", "", S, MASU, &[Past, Polite]),
    Rule::new("まして", "", S, MASU, &[Te, Polite]),
    Rule::new("ません", "", S, MASU, &[Negative, Polite]),
    Rule::new("ます", "", S, MASU, &[Polite]),
    Rule::new("なさい", "", S, MASU, &[Nasai]),
    Rule::new("たい", "", ADJ, MASU, &[Tai]),
    Rule::new("すぎる", "", V1, MASU, &[Sugiru]),
    Rule::new("そう", "", S, MASU, &[Sou]),
    // I-adjectives.
    Rule::new("かったら", "い", S, ADJ, &[Tara]),
    Rule::new("かったり", "い", S, ADJ, &[Tari]),
    Rule::new("かった", "い", S, ADJ, &[Past]),
    Rule::new("くない", "い", ADJ, ADJ, &[Negative]),
    Rule::new("ければ", "い", S, ADJ, &[Ba]),
    Rule::new("すぎる", "い", V1, ADJ, &[Sugiru]),
    Rule::new("くて", "い", S, ADJ, &[Te]),
    Rule::new("そう", "い", S, ADJ, &[Sou]),
    Rule::new("く", "い", S, ADJ, &[Adverb]),
    Rule::new("さ", "い", S, ADJ, &[Noun]),
    // Auxiliaries on the te form, which conjugate as verbs themselves.
    Rule::new("てしまう", "", V5, TATE, &[Shimau]),
    Rule::new("でしまう", "", V5, DADE, &[Shimau]),
    Rule::new("ちゃう", "", V5, TATE, &[Chau]),
    Rule::new("じゃう", "", V5, DADE, &[Chau]),
    Rule::new("ている", "", V1, TATE, &[Continuous]),
    Rule::new("でいる", "", V1, DADE, &[Continuous]),
    Rule::new("てる", "", V1, TATE, &[Continuous]),
    Rule::new("でる", "", V1, DADE, &[Continuous]),
    Rule::new("ておく", "", V5, TATE, &[Toku]),
    Rule::new("でおく", "", V5, DADE, &[Toku]),
    Rule::new("とく", "", V5, TATE, &[Toku]),
    Rule::new("どく", "", V5, DADE, &[Toku]),
    // Past, te and friends.
    Rule::new("たら", "", S, TATE, &[Tara]),
    Rule::new("だら", "", S, DADE, &[Tara]),
    Rule::new("たり", "", S, TATE, &[Tari]),
    Rule::new("だり", "", S, DADE, &[Tari]),
    Rule::new("た", "", S, TATE, &[Past]),
    Rule::new("だ", "", S, DADE, &[Past]),
    Rule::new("て", "", S, TATE, &[Te]),
    Rule::new("で", "", S, DADE, &[Te]),
    // Negatives on the irrealis stem.
    Rule::new("ない", "", ADJ, IRR, &[Negative]),
    Rule::new("ず", "", S, IRR, &[Zu]),
    Rule::new("ぬ", "", S, IRR, &[Negative]),
    Rule::new("ん", "", S, IRR, &[Negative]),
    // Passive and causative, which conjugate as ichidan verbs.
    Rule::new("させられる", "", V1, IRR, &[CausativePassive]),
    Rule::new("せられる", "", V1, IRR, &[CausativePassive]),
    Rule::new("される", "する", V1, VS, &[Passive]),
    Rule::new("される", "", V1, IRR, &[CausativePassive]),
    Rule::new("られる", "", V1, IRR, &[PassivePotential]),
    Rule::new("させる", "する", V1, VS, &[Causative]),
    Rule::new("させる", "", V1, IRR, &[Causative]),
    Rule::new("せる", "", V1, IRR, &[Causative]),
    Rule::new("れる", "", V1, IRR, &[Passive]),
    Rule::new("さす", "", V5, IRR, &[Causative]),
    // Potential.
    Rule::new("できる", "する", V1, VS, &[Potential]),
    Rule::new("これる", "くる", V1, VK, &[Potential]),
    Rule::new("える", "う", V1, V5, &[Potential]),
    Rule::new("ける", "く", V1, V5, &[Potential]),
    Rule::new("げる", "ぐ", V1, V5, &[Potential]),
    Rule::new("せる", "す", V1, V5, &[Potential]),
    Rule::new("てる", "つ", V1, V5, &[Potential]),
    Rule::new("ねる", "ぬ", V1, V5, &[Potential]),
    Rule::new("べる", "ぶ", V1, V5, &[Potential]),
    Rule::new("める", "む", V1, V5, &[Potential]),
    Rule::new("れる", "る", V1, V5, &[Potential]),
    // Volitional.
    Rule::new("こよう", "くる", S, VK, &[Volitional]),
    Rule::new("しよう", "する", S, VS, &[Volitional]),
    Rule::new("よう", "る", S, V1, &[Volitional]),
    Rule::new("おう", "う", S, V5, &[Volitional]),
    Rule::new("こう", "く", S, V5, &[Volitional]),
    Rule::new("ごう", "ぐ", S, V5, &[Volitional]),
    Rule::new("そう", "す", S, V5, &[Volitional]),
    Rule::new("とう", "つ", S, V5, &[Volitional]),
    Rule::new("のう", "ぬ", S, V5, &[Volitional]),
    Rule::new("ぼう", "ぶ", S, V5, &[Volitional]),
    Rule::new("もう", "む", S, V5, &[Volitional]),
    Rule::new("ろう", "る", S, V5, &[Volitional]),
    // Conditional.
    Rule::new("れば", "る", S, VERB, &[Ba]),
    Rule::new("えば", "う", S, V5, &[Ba]),
    Rule::new("けば", "く", S, V5, &[Ba]),
    Rule::new("げば", "ぐ", S, V5, &[Ba]),
    Rule::new("せば", "す", S, V5, &[Ba]),
    Rule::new("てば", "つ", S, V5, &[Ba]),
    Rule::new("ねば", "ぬ", S, V5, &[Ba]),
    Rule::new("べば", "ぶ", S, V5, &[Ba]),
    Rule::new("めば", "む", S, V5, &[Ba]),
    // Imperative.
    Rule::new("こい", "くる", S, VK, &[Imperative]),
    Rule::new("しろ", "する", S, VS, &[Imperative]),
    Rule::new("せよ", "する", S, VS, &[Imperative]),
    Rule::new("ろ", "る", S, V1, &[Imperative]),
    Rule::new("よ", "る", S, V1, &[Imperative]),
    Rule::new("え", "う", S, V5, &[Imperative]),
    Rule::new("け", "く", S, V5, &[Imperative]),
    Rule::new("げ", "ぐ", S, V5, &[Imperative]),
    Rule::new("せ", "す", S, V5, &[Imperative]),
    Rule::new("て", "つ", S, V5, &[Imperative]),
    Rule::new("ね", "ぬ", S, V5, &[Imperative]),
    Rule::new("べ", "ぶ", S, V5, &[Imperative]),
    Rule::new("め", "む", S, V5, &[Imperative]),
    Rule::new("れ", "る", S, V5, &[Imperative]),
    // Prohibitive な after the dictionary form.
    Rule::new("るな", "る", S, VERB, &[ImperativeNegative]),
    Rule::new("うな", "う", S, V5, &[ImperativeNegative]),
    Rule::new("くな", "く", S, V5, &[ImperativeNegative]),
    Rule::new("ぐな", "ぐ", S, V5, &[ImperativeNegative]),
    Rule::new("すな", "す", S, V5, &[ImperativeNegative]),
    Rule::new("つな", "つ", S, V5, &[ImperativeNegative]),
    Rule::new("ぬな", "ぬ", S, V5, &[ImperativeNegative]),
    Rule::new("ぶな", "ぶ", S, V5, &[ImperativeNegative]),
    Rule::new("むな", "む", S, V5, &[ImperativeNegative]),
    // Suru verbs read as their noun.
    Rule::new("する", "", VS, NVS, &[SuruNoun]),
    // Continuative stem back to the dictionary form.
    Rule::new("来", "来る", MASU, VK, &[MasuStem]),
    Rule::new("き", "くる", MASU, VK, &[MasuStem]),
    Rule::new("し", "する", MASU, VS, &[MasuStem]),
    Rule::new("じ", "ずる", MASU, VZ, &[MasuStem]),
    Rule::new("い", "う", MASU, V5, &[MasuStem]),
    Rule::new("き", "く", MASU, V5, &[MasuStem]),
    Rule::new("ぎ", "ぐ", MASU, V5, &[MasuStem]),
    Rule::new("し", "す", MASU, V5, &[MasuStem]),
    Rule::new("ち", "つ", MASU, V5, &[MasuStem]),
    Rule::new("に", "ぬ", MASU, V5, &[MasuStem]),
    Rule::new("び", "ぶ", MASU, V5, &[MasuStem]),
    Rule::new("み", "む", MASU, V5, &[MasuStem]),
    Rule::new("り", "る", MASU, V5, &[MasuStem]),
    Rule::new("", "る", MASU, V1, &[MasuStem]),
    // Ta/te stem back to the dictionary form.
    Rule::new("行っ", "行く", TATE, V5, &[]),
    Rule::new("いっ", "いく", TATE, V5, &[]),
    Rule::new("来", "来る", TATE, VK, &[]),
    Rule::new("き", "くる", TATE, VK, &[]),
    Rule::new("し", "する", TATE, VS, &[]),
    Rule::new("じ", "ずる", TATE, VZ, &[]),
    Rule::new("っ", "う", TATE, V5, &[]),
    Rule::new("っ", "つ", TATE, V5, &[]),
    Rule::new("っ", "る", TATE, V5, &[]),
    Rule::new("い", "く", TATE, V5, &[]),
    Rule::new("し", "す", TATE, V5, &[]),
    Rule::new("", "る", TATE, V1, &[]),
    // Da/de stem back to the dictionary form.
    Rule::new("い", "ぐ", DADE, V5, &[]),
    Rule::new("ん", "む", DADE, V5, &[]),
    Rule::new("ん", "ぬ", DADE, V5, &[]),
    Rule::new("ん", "ぶ", DADE, V5, &[]),
    // Irrealis stem back to the dictionary form.
    Rule::new("来", "来る", IRR, VK, &[]),
    Rule::new("こ", "くる", IRR, VK, &[]),
    Rule::new("し", "する", IRR, VS, &[]),
    Rule::new("せ", "する", IRR, VS, &[]),
    Rule::new("じ", "ずる", IRR, VZ, &[]),
    Rule::new("ぜ", "ずる", IRR, VZ, &[]),
    Rule::new("か", "く", IRR, V5, &[]),
    Rule::new("が", "ぐ", IRR, V5, &[]),
    Rule::new("さ", "す", IRR, V5, &[]),
    Rule::new("た", "つ", IRR, V5, &[]),
    Rule::new("な", "ぬ", IRR, V5, &[]),
    Rule::new("ば", "ぶ", IRR, V5, &[]),
    Rule::new("ま", "む", IRR, V5, &[]),
    Rule::new("ら", "る", IRR, V5, &[]),
    Rule::new("わ", "う", IRR, V5, &[]),
    Rule::new("", "る", IRR, V1, &[]),
];
