// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use match_engine::{Entry, EntryId};

const NO_PRIORITY: [&str; 0] = [];

/// A sample to be used for development.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: &'static str,
}

/// A collection of text samples.
#[derive(Debug)]
pub struct TextSamples {
    /// Running Japanese prose with kanji, kana and punctuation.
    pub japanese: Sample,
    /// English with Japanese words embedded.
    pub mixed: Sample,
}

impl TextSamples {
    /// Creates a new collection of text samples.
    pub const fn new() -> Self {
        let japanese = include_str!("../assets/text_samples/japanese.txt");
        let mixed = include_str!("../assets/text_samples/mixed.txt");
        Self {
            japanese: Sample {
                name: "japanese",
                text: japanese,
            },
            mixed: Sample {
                name: "mixed",
                text: mixed,
            },
        }
    }
}

impl Default for TextSamples {
    fn default() -> Self {
        Self::new()
    }
}

/// A small dictionary covering the words of the [`TextSamples`] and the
/// inflections exercised by the tests.
pub fn sample_entries() -> Vec<Entry> {
    let entry = |id: u64| Entry::new(EntryId(id));
    vec![
        entry(1)
            .with_kanji("食べる", ["ichi1", "news2", "nf25"])
            .with_reading("たべる", ["ichi1", "news2", "nf25"])
            .with_sense(["to eat"], ["v1", "vt"]),
        entry(2)
            .with_kanji("食べ物", ["ichi1", "news2", "nf38"])
            .with_reading("たべもの", ["ichi1", "news2", "nf38"])
            .with_sense(["food"], ["n"]),
        entry(3)
            .with_kanji("書く", ["ichi1", "news1", "nf10"])
            .with_reading("かく", ["ichi1", "news1", "nf10"])
            .with_sense(["to write"], ["v5k", "vt"]),
        entry(4)
            .with_kanji("角", ["ichi1", "news1", "nf05"])
            .with_reading("かく", ["ichi1"])
            .with_sense(["angle"], ["n"]),
        entry(5)
            .with_kanji("学生", ["ichi1", "news1", "nf03"])
            .with_reading("がくせい", ["ichi1", "news1", "nf03"])
            .with_sense(["student"], ["n"]),
        entry(6)
            .with_kanji("勉強", ["ichi1", "news1", "nf06"])
            .with_reading("べんきょう", ["ichi1", "news1", "nf06"])
            .with_sense(["study"], ["n", "vs"]),
        entry(7)
            .with_reading("テレビ", ["ichi1", "gai1"])
            .with_sense(["television"], ["n"]),
        entry(8)
            .with_kanji("義", NO_PRIORITY)
            .with_reading("ぎ", NO_PRIORITY)
            .with_sense(["justice"], ["n"]),
        entry(9)
            .with_kanji("今日", ["ichi1"])
            .with_reading("きょう", ["ichi1"])
            .with_sense(["today"], ["n"]),
        entry(10)
            .with_kanji("漢字", ["ichi1", "news1", "nf07"])
            .with_reading("かんじ", ["ichi1", "news1", "nf07"])
            .with_sense(["kanji"], ["n"]),
        entry(11)
            .with_kanji("日本語", ["ichi1", "news1", "nf02"])
            .with_reading("にほんご", ["ichi1", "news1", "nf02"])
            .with_sense(["Japanese (language)"], ["n"]),
        entry(12)
            .with_kanji("日本", ["ichi1", "news1", "nf01"])
            .with_reading("にほん", ["ichi1", "news1", "nf01"])
            .with_sense(["Japan"], ["n"]),
        entry(13)
            .with_kanji("教える", ["ichi1", "news2", "nf29"])
            .with_reading("おしえる", ["ichi1", "news2", "nf29"])
            .with_sense(["to teach"], ["v1", "vt"]),
        entry(14)
            .with_kanji("言葉", ["ichi1", "news1", "nf02"])
            .with_reading("ことば", ["ichi1", "news1", "nf02"])
            .with_sense(["word"], ["n"]),
        entry(15)
            .with_kanji("行く", ["ichi1", "news1", "nf01"])
            .with_reading("いく", ["ichi1", "news1", "nf01"])
            .with_sense(["to go"], ["v5k-s", "vi"]),
        entry(16)
            .with_kanji("高い", ["ichi1", "news1", "nf02"])
            .with_reading("たかい", ["ichi1", "news1", "nf02"])
            .with_sense(["high", "expensive"], ["adj-i"]),
        entry(17)
            .with_kanji("東京", ["news1", "nf01"])
            .with_reading("とうきょう", ["news1", "nf01"])
            .with_sense(["Tokyo"], ["n"]),
        entry(18)
            .with_kanji("先生", ["ichi1", "news1", "nf01"])
            .with_reading("せんせい", ["ichi1", "news1", "nf01"])
            .with_sense(["teacher"], ["n"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::{TextSamples, sample_entries};

    #[test]
    fn ids_are_unique() {
        let entries = sample_entries();
        let mut ids: Vec<_> = entries.iter().map(|entry| entry.id).collect();
        ids.sort_unstable_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn samples_are_not_empty() {
        let samples = TextSamples::new();
        for sample in [&samples.japanese, &samples.mixed] {
            assert!(!sample.text.trim().is_empty(), "{} is empty", sample.name);
        }
    }
}
