// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use deinflect::WordType;

/// Identifies an [`Entry`] within its store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryId(pub u64);

/// A JMdict priority code attached to a headword.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriorityTag {
    /// `nfXX`: the word's rank in the frequency list, in bands of 500 words.
    Frequency(u8),
    /// `news1` / `news2`.
    News(u8),
    /// `ichi1` / `ichi2`.
    Ichi(u8),
    /// `spec1` / `spec2`.
    Spec(u8),
    /// `gai1` / `gai2`.
    Gai(u8),
    /// Any other code, kept as written.
    Other(String),
}

impl PriorityTag {
    /// Parses a priority code. Codes that aren't recognized are kept in
    /// [`PriorityTag::Other`].
    pub fn parse(code: &str) -> Self {
        fn band(rest: &str) -> Option<u8> {
            match rest {
                "1" => Some(1),
                "2" => Some(2),
                _ => None,
            }
        }
        let parsed = if let Some(rank) = code.strip_prefix("nf") {
            (rank.len() == 2)
                .then(|| rank.parse().ok())
                .flatten()
                .filter(|rank| (1..=48).contains(rank))
                .map(Self::Frequency)
        } else if let Some(rest) = code.strip_prefix("news") {
            band(rest).map(Self::News)
        } else if let Some(rest) = code.strip_prefix("ichi") {
            band(rest).map(Self::Ichi)
        } else if let Some(rest) = code.strip_prefix("spec") {
            band(rest).map(Self::Spec)
        } else if let Some(rest) = code.strip_prefix("gai") {
            band(rest).map(Self::Gai)
        } else {
            None
        };
        parsed.unwrap_or_else(|| Self::Other(code.into()))
    }

    /// How much this tag counts toward a headword's score.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Frequency(rank) => frequency_weight(*rank),
            Self::Ichi(1) => 50,
            Self::News(1) => 40,
            Self::Spec(1) => 32,
            Self::Gai(1) => 30,
            Self::News(2) | Self::Spec(2) => 20,
            Self::Ichi(2) | Self::Gai(2) => 10,
            _ => 0,
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "The weight is at most 65, well within u32."
)]
fn frequency_weight(rank: u8) -> u32 {
    (65.0 * (-0.1 * f64::from(rank)).exp()).floor() as u32
}

impl fmt::Display for PriorityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency(rank) => write!(f, "nf{rank:02}"),
            Self::News(band) => write!(f, "news{band}"),
            Self::Ichi(band) => write!(f, "ichi{band}"),
            Self::Spec(band) => write!(f, "spec{band}"),
            Self::Gai(band) => write!(f, "gai{band}"),
            Self::Other(code) => f.write_str(code),
        }
    }
}

/// A written form of an entry, in kanji or kana.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Headword {
    /// The text of the headword.
    pub text: String,
    /// Priority codes recorded for this spelling.
    pub priority: Vec<PriorityTag>,
}

impl Headword {
    /// Creates a headword, parsing its priority codes.
    pub fn new<'a>(text: &str, priority: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            text: text.into(),
            priority: priority.into_iter().map(PriorityTag::parse).collect(),
        }
    }

    /// The sum of the weights of this headword's priority tags.
    pub fn score(&self) -> u32 {
        self.priority.iter().map(PriorityTag::weight).sum()
    }
}

/// One meaning of an entry.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sense {
    /// Translations of this meaning.
    pub glosses: Vec<String>,
    /// JMdict part-of-speech codes, such as `v1` or `adj-i`.
    pub parts_of_speech: Vec<String>,
}

/// A dictionary entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// The entry's identifier.
    pub id: EntryId,
    /// Kanji spellings, possibly none.
    pub kanji: Vec<Headword>,
    /// Kana readings.
    pub readings: Vec<Headword>,
    /// Meanings, in dictionary order.
    pub senses: Vec<Sense>,
}

impl Entry {
    /// Creates an entry with no headwords or senses.
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            kanji: Vec::new(),
            readings: Vec::new(),
            senses: Vec::new(),
        }
    }

    /// Adds a kanji spelling.
    #[must_use]
    pub fn with_kanji<'a>(mut self, text: &str, priority: impl IntoIterator<Item = &'a str>) -> Self {
        self.kanji.push(Headword::new(text, priority));
        self
    }

    /// Adds a kana reading.
    #[must_use]
    pub fn with_reading<'a>(
        mut self,
        text: &str,
        priority: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.readings.push(Headword::new(text, priority));
        self
    }

    /// Adds a sense.
    #[must_use]
    pub fn with_sense<'a, 'b>(
        mut self,
        glosses: impl IntoIterator<Item = &'a str>,
        parts_of_speech: impl IntoIterator<Item = &'b str>,
    ) -> Self {
        self.senses.push(Sense {
            glosses: glosses.into_iter().map(Into::into).collect(),
            parts_of_speech: parts_of_speech.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Every kanji spelling followed by every reading.
    pub fn headwords(&self) -> impl Iterator<Item = &Headword> {
        self.kanji.iter().chain(&self.readings)
    }

    /// The grammatical types of the entry across all its senses.
    pub fn word_type(&self) -> WordType {
        WordType::from_parts_of_speech(
            self.senses
                .iter()
                .flat_map(|sense| &sense.parts_of_speech)
                .map(String::as_str),
        )
    }
}
