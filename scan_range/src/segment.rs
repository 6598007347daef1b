// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::Error;

/// A contiguous slice of one container's text.
///
/// The offsets are byte offsets into the container's text and carry the same
/// invariants as a validated range:
///
/// - `start <= end`
/// - `start` and `end` are within the container's text
/// - `start` and `end` lie on UTF-8 codepoint boundaries
///
/// ## Important
///
/// A segment remembers which container it addresses but not the text it was
/// validated against. Host documents mutate between pointer events, so a
/// segment is only meaningful for the scan that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRangeSegment<N> {
    container: N,
    start: usize,
    end: usize,
}

impl<N: Copy> TextRangeSegment<N> {
    /// Returns a validated segment of `text`, which must be the current text
    /// of `container`.
    #[inline]
    pub fn new(container: N, text: &str, range: Range<usize>) -> Result<Self, Error> {
        Error::check(text, &range)?;
        Ok(Self {
            container,
            start: range.start,
            end: range.end,
        })
    }

    /// Creates a segment without validation.
    ///
    /// This is intended for internal callers that already maintain range invariants.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(container: N, start: usize, end: usize) -> Self {
        Self {
            container,
            start,
            end,
        }
    }

    /// The container this segment slices.
    #[must_use]
    #[inline]
    pub fn container(&self) -> N {
        self.container
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The length of the segment, in bytes.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the segment covers no text.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns this segment's offsets as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Shortens the segment to its first `len` bytes.
    #[must_use]
    pub(crate) fn truncated(self, len: usize) -> Self {
        Self {
            end: self.start + len.min(self.len()),
            ..self
        }
    }
}
