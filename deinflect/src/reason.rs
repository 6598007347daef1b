// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Deref;

use smallvec::SmallVec;

/// A named morphological transformation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Reason {
    /// A bare continuative stem read as its dictionary form.
    MasuStem,
    /// ます and its conjugations.
    Polite,
    /// た / だ, and かった for adjectives.
    Past,
    /// ない, ぬ, ん, and くない for adjectives.
    Negative,
    /// て / で, and くて for adjectives.
    Te,
    /// たら / だら.
    Tara,
    /// たり / だり.
    Tari,
    /// The ば conditional.
    Ba,
    /// よう / おう.
    Volitional,
    /// The plain imperative.
    Imperative,
    /// The dictionary form followed by prohibitive な.
    ImperativeNegative,
    /// なさい.
    Nasai,
    /// られる on ichidan verbs, which is ambiguous.
    PassivePotential,
    /// れる on godan verbs and される.
    Passive,
    /// The godan potential える and できる.
    Potential,
    /// せる / させる.
    Causative,
    /// せられる / させられる / される.
    CausativePassive,
    /// たい.
    Tai,
    /// そう.
    Sou,
    /// すぎる.
    Sugiru,
    /// ちゃう / じゃう.
    Chau,
    /// てしまう / でしまう.
    Shimau,
    /// ている / てる.
    Continuous,
    /// ておく / とく.
    Toku,
    /// ず.
    Zu,
    /// The adverbial く form of an adjective.
    Adverb,
    /// The さ nominalization of an adjective.
    Noun,
    /// A suru verb read as its noun.
    SuruNoun,
}

impl Reason {
    /// The label shown to users explaining the transformation.
    pub const fn label(self) -> &'static str {
        match self {
            Self::MasuStem => "masu-stem",
            Self::Polite => "polite",
            Self::Past => "past",
            Self::Negative => "negative",
            Self::Te => "te-form",
            Self::Tara => "-tara",
            Self::Tari => "-tari",
            Self::Ba => "-ba",
            Self::Volitional => "volitional",
            Self::Imperative => "imperative",
            Self::ImperativeNegative => "imperative negative",
            Self::Nasai => "-nasai",
            Self::PassivePotential => "passive/potential",
            Self::Passive => "passive",
            Self::Potential => "potential",
            Self::Causative => "causative",
            Self::CausativePassive => "causative passive",
            Self::Tai => "-tai",
            Self::Sou => "-sou",
            Self::Sugiru => "-sugiru",
            Self::Chau => "-chau",
            Self::Shimau => "-shimau",
            Self::Continuous => "continuous",
            Self::Toku => "-toku",
            Self::Zu => "-zu",
            Self::Adverb => "adv",
            Self::Noun => "noun",
            Self::SuruNoun => "suru",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ordered transformations linking a surface form to a base form.
///
/// Reasons are stored in the order they were undone, outermost first: the
/// chain for 食べなかった is `past < negative`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReasonChain(SmallVec<[Reason; 4]>);

impl ReasonChain {
    /// The empty chain of an untransformed word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this chain followed by `reasons`.
    #[must_use]
    pub fn extended(&self, reasons: &[Reason]) -> Self {
        let mut chain = self.clone();
        chain.0.extend_from_slice(reasons);
        chain
    }

    /// Returns `true` if `reason` appears anywhere in the chain.
    pub fn has(&self, reason: Reason) -> bool {
        self.0.contains(&reason)
    }
}

impl Deref for ReasonChain {
    type Target = [Reason];

    fn deref(&self) -> &[Reason] {
        &self.0
    }
}

impl FromIterator<Reason> for ReasonChain {
    fn from_iter<I: IntoIterator<Item = Reason>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ReasonChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reason) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" < ")?;
            }
            f.write_str(reason.label())?;
        }
        Ok(())
    }
}
