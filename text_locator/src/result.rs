// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Rect;
use scan_range::{CursorOffset, Error, TextRange};

/// Limits applied while locating text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocateOptions {
    /// The most characters a run holds.
    pub max_length: usize,
    /// The most overlapping elements made transparent to reach the text
    /// below them.
    pub max_overlay_depth: usize,
    /// The most nested shadow trees descended into.
    pub max_shadow_depth: usize,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            max_length: 16,
            max_overlay_depth: 8,
            max_shadow_depth: 8,
        }
    }
}

/// A run of Japanese text found under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult<N> {
    /// The run, at most [`LocateOptions::max_length`] characters, every one
    /// of them Japanese.
    pub text: String,
    /// Where `text` lives. Detached when it came from an attribute or a
    /// `select` value.
    pub range: TextRange<N>,
    /// The run's first character.
    pub cursor: CursorOffset<N>,
    /// The box of the first character, or of the element for detached runs.
    pub rect: Rect,
}

impl<N: Copy + PartialEq> ScanResult<N> {
    /// The part of [`range`](Self::range) covering the first `max_length`
    /// characters of the run, typically the length of the longest dictionary
    /// match.
    pub fn highlight_range(&self, max_length: usize) -> Result<TextRange<N>, Error> {
        self.range.prefix(&self.text, max_length)
    }
}

#[cfg(test)]
mod tests {
    use super::ScanResult;
    use peniko::kurbo::Rect;
    use scan_range::{CursorOffset, TextRange, TextRangeSegment};

    #[test]
    fn highlight_splits_segments() {
        // 食べ|られなかった over two nodes.
        let text = "食べられなかった";
        let range = TextRange::from_segments([
            TextRangeSegment::new(1_u32, "食べ", 0.."食べ".len()).unwrap(),
            TextRangeSegment::new(2_u32, "られなかった", 0.."られなかった".len()).unwrap(),
        ]);
        let scan = ScanResult {
            text: text.into(),
            range,
            cursor: CursorOffset::new(1, 0),
            rect: Rect::ZERO,
        };
        let highlight = scan.highlight_range(3).unwrap();
        assert_eq!(highlight.segments().len(), 2);
        assert_eq!(highlight.segments()[1].as_range(), 0..3);
        assert_eq!(scan.highlight_range(8).unwrap(), scan.range);
    }

    #[test]
    fn detached_stays_detached() {
        let scan = ScanResult {
            text: "猫".into(),
            range: TextRange::<u32>::detached(),
            cursor: CursorOffset::new(7, 0),
            rect: Rect::ZERO,
        };
        assert!(scan.highlight_range(1).unwrap().is_detached());
    }
}
