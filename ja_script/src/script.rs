// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_properties::CodePointMapData;
use icu_properties::props::Script;

/// Scripts whose characters are always scanned.
const SCANNED_SCRIPTS: [Script; 4] = [
    Script::Hiragana,
    Script::Katakana,
    Script::KatakanaOrHiragana,
    Script::Han,
];

/// Returns `true` if `ch` can be part of a scanned Japanese run.
///
/// This is every Hiragana, Katakana and Han character, plus the marks that
/// ICU assigns to `Common` or `Inherited` even though they only occur inside
/// Japanese words: the prolonged sound mark, the (half-width) voiced sound
/// marks, `々〆〇` and the half-width katakana block.
pub fn is_japanese(ch: char) -> bool {
    match ch {
        // Prolonged sound mark and combining/spacing voiced sound marks.
        '\u{30FC}' | '\u{3099}'..='\u{309C}' => true,
        // Iteration mark, closing mark and ideographic zero: `々〆〇`.
        '\u{3005}'..='\u{3007}' => true,
        // Half-width katakana, including the half-width prolonged sound mark
        // and voiced sound marks. The half-width punctuation before it is not.
        '\u{FF66}'..='\u{FF9F}' => true,
        _ => {
            let script = CodePointMapData::<Script>::new().get(ch);
            SCANNED_SCRIPTS.contains(&script)
        }
    }
}

/// Returns the first run of Japanese characters in `text`, at most
/// `max_chars` long.
///
/// Leading characters outside the script are skipped; the run ends at the
/// first character after it that is outside the script. Returns `None` if
/// `text` holds no Japanese at all or `max_chars` is zero.
pub fn script_run(text: &str, max_chars: usize) -> Option<&str> {
    if max_chars == 0 {
        return None;
    }
    let (start, _) = text.char_indices().find(|&(_, ch)| is_japanese(ch))?;
    let rest = &text[start..];
    let end = rest
        .char_indices()
        .take(max_chars)
        .take_while(|&(_, ch)| is_japanese(ch))
        .last()
        .map(|(index, ch)| index + ch.len_utf8())?;
    Some(&rest[..end])
}
