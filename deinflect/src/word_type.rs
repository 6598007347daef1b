// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

/// A set of grammatical types a word form may belong to.
///
/// The low bits are the word classes a dictionary records for its entries.
/// The high bits are intermediate forms that only exist while deinflecting:
/// the stems that polite, past, te and negative endings attach to, and the
/// untouched surface form itself.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordType(u16);

impl WordType {
    /// No type at all.
    pub const NONE: Self = Self(0);

    /// Ichidan (ru-verb), JMdict `v1`.
    pub const ICHIDAN_VERB: Self = Self(1 << 0);
    /// Godan (u-verb), JMdict `v5*`.
    pub const GODAN_VERB: Self = Self(1 << 1);
    /// I-adjective, JMdict `adj-i`.
    pub const I_ADJ: Self = Self(1 << 2);
    /// The irregular verb 来る, JMdict `vk`.
    pub const KURU_VERB: Self = Self(1 << 3);
    /// The irregular verb する, JMdict `vs-i`.
    pub const SURU_VERB: Self = Self(1 << 4);
    /// Special suru verbs such as 愛する, JMdict `vs-s`.
    pub const SPECIAL_SURU_VERB: Self = Self(1 << 5);
    /// Nouns that take する, JMdict `vs`.
    pub const NOUN_VS: Self = Self(1 << 6);
    /// Verbs ending in ずる such as 信ずる, JMdict `vz`.
    pub const ZURU_VERB: Self = Self(1 << 12);

    /// The continuative stem that ます and たい attach to.
    pub const MASU_STEM: Self = Self(1 << 7);
    /// The stem that た and て attach to.
    pub const TA_TE_STEM: Self = Self(1 << 8);
    /// The stem that だ and で attach to.
    pub const DA_DE_STEM: Self = Self(1 << 9);
    /// The stem that ない, れる and せる attach to.
    pub const IRREALIS_STEM: Self = Self(1 << 10);
    /// The surface form before any rewrite.
    pub const SURFACE: Self = Self(1 << 11);

    /// Every type a dictionary entry can carry.
    pub const DICTIONARY: Self = Self(
        Self::ICHIDAN_VERB.0
            | Self::GODAN_VERB.0
            | Self::I_ADJ.0
            | Self::KURU_VERB.0
            | Self::SURU_VERB.0
            | Self::SPECIAL_SURU_VERB.0
            | Self::ZURU_VERB.0
            | Self::NOUN_VS.0,
    );

    /// Every verb class.
    pub const VERB: Self = Self(
        Self::ICHIDAN_VERB.0
            | Self::GODAN_VERB.0
            | Self::KURU_VERB.0
            | Self::SURU_VERB.0
            | Self::SPECIAL_SURU_VERB.0
            | Self::ZURU_VERB.0,
    );

    /// The type of the identity candidate.
    ///
    /// A surface form could be any dictionary type. Stems only ever arise
    /// from a rewrite: reading the input itself as a bare stem would grow it
    /// back into a dictionary form longer than the text that was matched.
    pub const UNRESTRICTED: Self = Self(Self::DICTIONARY.0 | Self::SURFACE.0);

    /// Returns the set holding the types of both `self` and `other`.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if the two sets share at least one type.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if every type in `other` is in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the set holds a type a dictionary entry can carry.
    #[inline]
    pub const fn is_dictionary_form(self) -> bool {
        self.intersects(Self::DICTIONARY)
    }

    /// The raw bits.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Maps a JMdict part-of-speech code to the types the deinflector knows.
    ///
    /// Codes for things that don't inflect (plain nouns, particles, …) map to
    /// [`WordType::NONE`].
    pub fn from_part_of_speech(code: &str) -> Self {
        match code {
            "v1" | "v1-s" => Self::ICHIDAN_VERB,
            "adj-i" | "adj-ix" => Self::I_ADJ,
            "vk" => Self::KURU_VERB,
            "vs-i" => Self::SURU_VERB,
            "vs-s" => Self::SPECIAL_SURU_VERB,
            "vz" => Self::ZURU_VERB,
            "vs" => Self::NOUN_VS,
            _ if code.starts_with("v5") => Self::GODAN_VERB,
            _ => Self::NONE,
        }
    }

    /// Folds the types of several part-of-speech codes into one set.
    pub fn from_parts_of_speech<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        codes
            .into_iter()
            .map(Self::from_part_of_speech)
            .fold(Self::NONE, |acc, ty| acc | ty)
    }
}

impl BitOr for WordType {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WordType {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for WordType {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(WordType, &str); 13] = [
            (WordType::ICHIDAN_VERB, "ICHIDAN_VERB"),
            (WordType::GODAN_VERB, "GODAN_VERB"),
            (WordType::I_ADJ, "I_ADJ"),
            (WordType::KURU_VERB, "KURU_VERB"),
            (WordType::SURU_VERB, "SURU_VERB"),
            (WordType::SPECIAL_SURU_VERB, "SPECIAL_SURU_VERB"),
            (WordType::ZURU_VERB, "ZURU_VERB"),
            (WordType::NOUN_VS, "NOUN_VS"),
            (WordType::MASU_STEM, "MASU_STEM"),
            (WordType::TA_TE_STEM, "TA_TE_STEM"),
            (WordType::DA_DE_STEM, "DA_DE_STEM"),
            (WordType::IRREALIS_STEM, "IRREALIS_STEM"),
            (WordType::SURFACE, "SURFACE"),
        ];
        f.write_str("WordType(")?;
        let mut first = true;
        for (ty, name) in NAMES {
            if self.contains(ty) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}
