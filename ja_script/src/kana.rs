// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use icu_normalizer::ComposingNormalizerBorrowed;

/// Distance between a katakana and its hiragana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Small kana that combine with the preceding kana into one mora.
///
/// The sokuon (`っ`) is small but geminates the next mora instead, so it is
/// not listed.
const SMALL_KANA: &str = "ぁぃぅぇぉゃゅょゎゕゖァィゥェォャュョヮヵヶ";

/// Returns `true` for hiragana and katakana, full or half width.
pub fn is_kana(ch: char) -> bool {
    matches!(ch, '\u{3041}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{FF66}'..='\u{FF9F}')
}

/// Returns `true` for small kana that form a digraph with the kana before them.
pub fn is_small_kana(ch: char) -> bool {
    SMALL_KANA.contains(ch)
}

/// Folds `text` onto hiragana, one character at a time.
///
/// Half-width forms are widened with NFKC, then katakana is shifted onto the
/// hiragana block. Characters with no hiragana counterpart (the prolonged
/// sound mark, `ヷ`..`ヺ`, kanji, anything else) pass through. The output has
/// exactly as many characters as the input, so a character count into the
/// normalized text is also a count into the original.
pub fn to_hiragana(text: &str) -> String {
    let nfkc = ComposingNormalizerBorrowed::new_nfkc();
    text.chars()
        .map(|ch| {
            let ch = if matches!(ch, '\u{FF01}'..='\u{FFEF}') {
                widen(&nfkc, ch)
            } else {
                ch
            };
            katakana_to_hiragana(ch)
        })
        .collect()
}

/// Returns how many characters a longest-match search should drop from the
/// end of `chars` next.
///
/// Two are dropped when the second-to-last character is a small kana, so
/// `ぎゃく` shrinks straight to `ぎ`, and when the last character is a small
/// kana completing a digraph, so `ぎゃ` never leaves an orphaned `ぎ` behind
/// in the middle of a pair. Otherwise one.
pub fn shrink_step(chars: &[char]) -> usize {
    let len = chars.len();
    if len < 2 {
        return len;
    }
    let last = chars[len - 1];
    let before = chars[len - 2];
    if is_small_kana(before) || (is_small_kana(last) && is_kana(before)) {
        2
    } else {
        1
    }
}

fn widen(nfkc: &ComposingNormalizerBorrowed<'_>, ch: char) -> char {
    let mut buf = [0_u8; 4];
    let folded = nfkc.normalize(ch.encode_utf8(&mut buf));
    let mut chars = folded.chars();
    match (chars.next(), chars.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

fn katakana_to_hiragana(ch: char) -> char {
    if matches!(ch, '\u{30A1}'..='\u{30F6}') {
        char::from_u32(ch as u32 - KATAKANA_OFFSET).unwrap_or(ch)
    } else {
        ch
    }
}
