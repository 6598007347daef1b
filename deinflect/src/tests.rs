// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{MAX_DEPTH, Reason, WordType, deinflect, rules};

use Reason::*;

#[track_caller]
fn assert_reaches(word: &str, base: &str, ty: WordType, reasons: &[Reason]) {
    let candidates = deinflect(word);
    let Some(candidate) = candidates
        .iter()
        .find(|c| c.word == base && c.word_type.intersects(ty))
    else {
        panic!("{word} does not reach {base} ({ty:?}); got {candidates:#?}");
    };
    assert_eq!(
        &*candidate.reasons, reasons,
        "unexpected chain for {word} -> {base}"
    );
}

#[test]
fn polite() {
    assert_reaches("のみます", "のむ", WordType::GODAN_VERB, &[Polite, MasuStem]);
    assert_reaches(
        "たべません",
        "たべる",
        WordType::ICHIDAN_VERB,
        &[Negative, Polite, MasuStem],
    );
    assert_reaches(
        "たべませんでした",
        "たべる",
        WordType::ICHIDAN_VERB,
        &[Past, Negative, Polite, MasuStem],
    );
}

#[test]
fn past_and_te() {
    assert_reaches("たべた", "たべる", WordType::ICHIDAN_VERB, &[Past]);
    assert_reaches("よんだ", "よむ", WordType::GODAN_VERB, &[Past]);
    assert_reaches("よんだ", "よぶ", WordType::GODAN_VERB, &[Past]);
    assert_reaches("いった", "いく", WordType::GODAN_VERB, &[Past]);
    assert_reaches("いった", "いう", WordType::GODAN_VERB, &[Past]);
    assert_reaches("きた", "くる", WordType::KURU_VERB, &[Past]);
    assert_reaches("した", "する", WordType::SURU_VERB, &[Past]);
    assert_reaches("かいて", "かく", WordType::GODAN_VERB, &[Te]);
    assert_reaches("およいだら", "およぐ", WordType::GODAN_VERB, &[Tara]);
}

#[test]
fn negatives_stack() {
    assert_reaches("かかなかった", "かく", WordType::GODAN_VERB, &[Past, Negative]);
    assert_reaches(
        "たべられなかった",
        "たべる",
        WordType::ICHIDAN_VERB,
        &[Past, Negative, PassivePotential],
    );
    assert_reaches("しらず", "しる", WordType::GODAN_VERB, &[Zu]);
    assert_reaches("しんじない", "しんずる", WordType::ZURU_VERB, &[Negative]);
}

#[test]
fn adjectives() {
    assert_reaches("たかくない", "たかい", WordType::I_ADJ, &[Negative]);
    assert_reaches("たかかった", "たかい", WordType::I_ADJ, &[Past]);
    assert_reaches("たかくて", "たかい", WordType::I_ADJ, &[Te]);
    assert_reaches("たかければ", "たかい", WordType::I_ADJ, &[Ba]);
    assert_reaches("たかさ", "たかい", WordType::I_ADJ, &[Noun]);
    assert_reaches(
        "たべたくなかった",
        "たべる",
        WordType::ICHIDAN_VERB,
        &[Past, Negative, Tai, MasuStem],
    );
}

#[test]
fn voice() {
    assert_reaches("たべさせる", "たべる", WordType::ICHIDAN_VERB, &[Causative]);
    assert_reaches("かかせる", "かく", WordType::GODAN_VERB, &[Causative]);
    assert_reaches("かかれる", "かく", WordType::GODAN_VERB, &[Passive]);
    assert_reaches("かける", "かく", WordType::GODAN_VERB, &[Potential]);
    assert_reaches("べんきょうされる", "べんきょうする", WordType::SURU_VERB, &[Passive]);
}

#[test]
fn mood() {
    assert_reaches("たべよう", "たべる", WordType::ICHIDAN_VERB, &[Volitional]);
    assert_reaches("かこう", "かく", WordType::GODAN_VERB, &[Volitional]);
    assert_reaches("かけば", "かく", WordType::GODAN_VERB, &[Ba]);
    assert_reaches("たべろ", "たべる", WordType::ICHIDAN_VERB, &[Imperative]);
    assert_reaches("かけ", "かく", WordType::GODAN_VERB, &[Imperative]);
    assert_reaches("たべるな", "たべる", WordType::ICHIDAN_VERB, &[ImperativeNegative]);
    assert_reaches(
        "たべなさい",
        "たべる",
        WordType::ICHIDAN_VERB,
        &[Nasai, MasuStem],
    );
}

#[test]
fn te_auxiliaries() {
    assert_reaches("よんでいる", "よむ", WordType::GODAN_VERB, &[Continuous]);
    assert_reaches("たべてる", "たべる", WordType::ICHIDAN_VERB, &[Continuous]);
    assert_reaches(
        "たべてしまった",
        "たべる",
        WordType::ICHIDAN_VERB,
        &[Past, Shimau],
    );
    assert_reaches("たべちゃう", "たべる", WordType::ICHIDAN_VERB, &[Chau]);
}

#[test]
fn suru_nouns() {
    assert_reaches("べんきょうする", "べんきょう", WordType::NOUN_VS, &[SuruNoun]);
    assert_reaches(
        "べんきょうしました",
        "べんきょう",
        WordType::NOUN_VS,
        &[Past, Polite, MasuStem, SuruNoun],
    );
}

#[test]
fn bare_stem_is_not_read_as_a_verb() {
    // 食べ in 食べに行く only matches as far as the dictionary has 食べ.
    for (stem, base) in [("たべ", "たべる"), ("よみ", "よむ")] {
        assert!(
            deinflect(stem).iter().all(|c| c.word != base),
            "{stem} grew into {base}"
        );
    }
}

#[test]
fn only_dictionary_forms_are_reported() {
    for word in ["たべられなかった", "よんでいました", "かかせられた"] {
        for candidate in &deinflect(word)[1..] {
            assert!(
                candidate.word_type.is_dictionary_form(),
                "{word}: stem {:?} leaked",
                candidate
            );
            assert!(candidate.reasons.len() <= MAX_DEPTH);
        }
    }
}

#[test]
fn each_word_and_type_once() {
    let candidates = deinflect("よんでいました");
    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            assert!(
                a.word != b.word || a.word_type != b.word_type,
                "duplicate {a:?}"
            );
        }
    }
}

/// One surface form for each entry of [`rules`], in table order, with the
/// dictionary form it should reach through that rule.
const RULE_EXAMPLES: [(&str, &str); 156] = [
    // Polite endings and auxiliaries on the continuative stem.
    ("たべませんでした", "たべる"),
    ("たべましょう", "たべる"),
    ("たべました", "たべる"),
    ("たべまして", "たべる"),
    ("たべません", "たべる"),
    ("たべます", "たべる"),
    ("たべなさい", "たべる"),
    ("たべたい", "たべる"),
    ("たべすぎる", "たべる"),
    ("たべそう", "たべる"),
    // I-adjectives.
    ("たかかったら", "たかい"),
    ("たかかったり", "たかい"),
    ("たかかった", "たかい"),
    ("たかくない", "たかい"),
    ("たかければ", "たかい"),
    ("たかすぎる", "たかい"),
    ("たかくて", "たかい"),
    ("たかそう", "たかい"),
    ("たかく", "たかい"),
    ("たかさ", "たかい"),
    // Te auxiliaries.
    ("たべてしまう", "たべる"),
    ("よんでしまう", "よむ"),
    ("たべちゃう", "たべる"),
    ("よんじゃう", "よむ"),
    ("たべている", "たべる"),
    ("よんでいる", "よむ"),
    ("たべてる", "たべる"),
    ("よんでる", "よむ"),
    ("たべておく", "たべる"),
    ("よんでおく", "よむ"),
    ("たべとく", "たべる"),
    ("よんどく", "よむ"),
    // Past and te.
    ("たべたら", "たべる"),
    ("よんだら", "よむ"),
    ("たべたり", "たべる"),
    ("よんだり", "よむ"),
    ("たべた", "たべる"),
    ("よんだ", "よむ"),
    ("たべて", "たべる"),
    ("よんで", "よむ"),
    // Negatives.
    ("たべない", "たべる"),
    ("たべず", "たべる"),
    ("たべぬ", "たべる"),
    ("たべん", "たべる"),
    // Voice.
    ("たべさせられる", "たべる"),
    ("かかせられる", "かく"),
    ("べんきょうされる", "べんきょうする"),
    ("かかされる", "かく"),
    ("たべられる", "たべる"),
    ("べんきょうさせる", "べんきょうする"),
    ("たべさせる", "たべる"),
    ("かかせる", "かく"),
    ("かかれる", "かく"),
    ("かかさす", "かく"),
    // Potential.
    ("べんきょうできる", "べんきょうする"),
    ("これる", "くる"),
    ("あえる", "あう"),
    ("かける", "かく"),
    ("およげる", "およぐ"),
    ("はなせる", "はなす"),
    ("まてる", "まつ"),
    ("しねる", "しぬ"),
    ("よべる", "よぶ"),
    ("よめる", "よむ"),
    ("とれる", "とる"),
    // Volitional.
    ("こよう", "くる"),
    ("べんきょうしよう", "べんきょうする"),
    ("たべよう", "たべる"),
    ("かおう", "かう"),
    ("かこう", "かく"),
    ("およごう", "およぐ"),
    ("はなそう", "はなす"),
    ("まとう", "まつ"),
    ("しのう", "しぬ"),
    ("よぼう", "よぶ"),
    ("よもう", "よむ"),
    ("とろう", "とる"),
    // Conditional.
    ("たべれば", "たべる"),
    ("かえば", "かう"),
    ("かけば", "かく"),
    ("およげば", "およぐ"),
    ("はなせば", "はなす"),
    ("まてば", "まつ"),
    ("しねば", "しぬ"),
    ("よべば", "よぶ"),
    ("よめば", "よむ"),
    // Imperative.
    ("こい", "くる"),
    ("べんきょうしろ", "べんきょうする"),
    ("べんきょうせよ", "べんきょうする"),
    ("たべろ", "たべる"),
    ("たべよ", "たべる"),
    ("かえ", "かう"),
    ("かけ", "かく"),
    ("およげ", "およぐ"),
    ("はなせ", "はなす"),
    ("まて", "まつ"),
    ("しね", "しぬ"),
    ("よべ", "よぶ"),
    ("よめ", "よむ"),
    ("とれ", "とる"),
    // Prohibitive.
    ("たべるな", "たべる"),
    ("かうな", "かう"),
    ("かくな", "かく"),
    ("およぐな", "およぐ"),
    ("はなすな", "はなす"),
    ("まつな", "まつ"),
    ("しぬな", "しぬ"),
    ("よぶな", "よぶ"),
    ("よむな", "よむ"),
    // Suru nouns.
    ("べんきょうする", "べんきょう"),
    // Continuative stems.
    ("来ます", "来る"),
    ("きます", "くる"),
    ("します", "する"),
    ("しんじます", "しんずる"),
    ("かいます", "かう"),
    ("かきます", "かく"),
    ("およぎます", "およぐ"),
    ("はなします", "はなす"),
    ("まちます", "まつ"),
    ("しにます", "しぬ"),
    ("よびます", "よぶ"),
    ("よみます", "よむ"),
    ("とります", "とる"),
    ("たべます", "たべる"),
    // Ta/te stems.
    ("行った", "行く"),
    ("いった", "いく"),
    ("来た", "来る"),
    ("きた", "くる"),
    ("した", "する"),
    ("しんじた", "しんずる"),
    ("かった", "かう"),
    ("まった", "まつ"),
    ("とった", "とる"),
    ("かいた", "かく"),
    ("はなした", "はなす"),
    ("たべた", "たべる"),
    // Da/de stems.
    ("およいだ", "およぐ"),
    ("よんだ", "よむ"),
    ("しんだ", "しぬ"),
    ("あそんだ", "あそぶ"),
    // Irrealis stems.
    ("来ない", "来る"),
    ("こない", "くる"),
    ("しない", "する"),
    ("せず", "する"),
    ("しんじない", "しんずる"),
    ("しんぜず", "しんずる"),
    ("かかない", "かく"),
    ("およがない", "およぐ"),
    ("はなさない", "はなす"),
    ("またない", "まつ"),
    ("しなない", "しぬ"),
    ("よばない", "よぶ"),
    ("よまない", "よむ"),
    ("とらない", "とる"),
    ("かわない", "かう"),
    ("たべない", "たべる"),
];

#[test]
fn every_rule_reaches_its_dictionary_form() {
    assert_eq!(
        RULE_EXAMPLES.len(),
        rules().len(),
        "one example per rule"
    );
    for (index, (rule, (surface, base))) in rules().iter().zip(RULE_EXAMPLES).enumerate() {
        assert!(
            surface.contains(rule.from) && base.ends_with(rule.to),
            "example {index} ({surface} -> {base}) doesn't exercise {rule:?}"
        );
        let candidates = deinflect(surface);
        let reached = candidates.iter().any(|candidate| {
            candidate.word == base
                && candidate.word_type.is_dictionary_form()
                && rule.reasons.iter().all(|&reason| candidate.reasons.has(reason))
        });
        assert!(
            reached,
            "rule {index} ({rule:?}): {surface} does not reach {base}; got {candidates:#?}"
        );
    }
}
