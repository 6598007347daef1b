// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{Error, ErrorKind, TextRangeSegment};

/// A span of text distributed across one or more containers.
///
/// The segments are in document order and their concatenated text is the
/// text of the scan that produced them. A run usually needs more than one
/// segment when it crosses sibling text nodes, for instance around ruby
/// annotations or inline markup.
///
/// A range with no segments is *detached*: the text came from somewhere that
/// can't be addressed below the element level, such as an image's alt text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRange<N> {
    segments: Vec<TextRangeSegment<N>>,
}

impl<N> Default for TextRange<N> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<N: Copy + PartialEq> TextRange<N> {
    /// Creates a detached range.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Creates a range from segments in document order.
    ///
    /// Empty segments are dropped and adjacent slices of the same container
    /// are merged.
    pub fn from_segments(segments: impl IntoIterator<Item = TextRangeSegment<N>>) -> Self {
        let mut range = Self::default();
        for segment in segments {
            range.push(segment);
        }
        range
    }

    /// Appends a segment, merging it into the last one when they touch.
    pub fn push(&mut self, segment: TextRangeSegment<N>) {
        if segment.is_empty() {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.container() == segment.container() && last.end() == segment.start() {
                *last = TextRangeSegment::new_unchecked(last.container(), last.start(), segment.end());
                return;
            }
        }
        self.segments.push(segment);
    }

    /// The segments, in document order.
    pub fn segments(&self) -> &[TextRangeSegment<N>] {
        &self.segments
    }

    /// Returns `true` if the range can't be addressed below the element level.
    pub fn is_detached(&self) -> bool {
        self.segments.is_empty()
    }

    /// The total length of all segments, in bytes.
    pub fn len(&self) -> usize {
        self.segments.iter().map(TextRangeSegment::len).sum()
    }

    /// Returns `true` if the range covers no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first segment, which holds the start of the run.
    pub fn first(&self) -> Option<&TextRangeSegment<N>> {
        self.segments.first()
    }

    /// The last segment.
    pub fn last(&self) -> Option<&TextRangeSegment<N>> {
        self.segments.last()
    }

    /// Returns the sub-range covering the first `chars` characters of `text`.
    ///
    /// `text` must be the text this range was built for; its byte length is
    /// checked against the segments. A boundary that falls inside a segment
    /// splits that segment. Counts past the end of the text cover the whole
    /// range, and a detached range stays detached.
    pub fn prefix(&self, text: &str, chars: usize) -> Result<Self, Error> {
        if self.is_detached() {
            return Ok(Self::detached());
        }
        let covered = self.len();
        if covered != text.len() {
            return Err(Error::new(ErrorKind::Uncovered, 0..covered, text.len()));
        }
        let mut remaining = text
            .char_indices()
            .nth(chars)
            .map_or(text.len(), |(index, _)| index);
        let mut prefix = Self::default();
        for segment in &self.segments {
            if remaining == 0 {
                break;
            }
            let take = segment.len().min(remaining);
            prefix.push(segment.truncated(take));
            remaining -= take;
        }
        Ok(prefix)
    }
}

/// The exact point of interest inside a container: the first character of an
/// extracted run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorOffset<N> {
    /// The container holding the character.
    pub container: N,
    /// Byte offset of the character in the container's text.
    pub offset: usize,
}

impl<N> CursorOffset<N> {
    /// Creates a cursor offset.
    pub const fn new(container: N, offset: usize) -> Self {
        Self { container, offset }
    }
}
