// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Why a segment or range could not be built.
///
/// Every error records the byte range that was rejected and the length of
/// the text it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    text_len: usize,
}

impl Error {
    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The rejected byte range.
    ///
    /// For [`ErrorKind::Uncovered`] this is `0..covered`, the bytes the
    /// segments account for.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The length in bytes of the text the range was checked against.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    pub(crate) fn new(kind: ErrorKind, range: Range<usize>, text_len: usize) -> Self {
        Self {
            kind,
            range,
            text_len,
        }
    }

    /// Checks that `range` is a well formed slice of `text`.
    pub(crate) fn check(text: &str, range: &Range<usize>) -> Result<(), Self> {
        let fail = |kind| Err(Self::new(kind, range.clone(), text.len()));
        if range.start > range.end {
            return fail(ErrorKind::Reversed);
        }
        if range.end > text.len() {
            return fail(ErrorKind::OutOfBounds);
        }
        for (endpoint, index) in [(Endpoint::Start, range.start), (Endpoint::End, range.end)] {
            if !text.is_char_boundary(index) {
                let (char_start, char_end) = enclosing_char(text, index);
                return fail(ErrorKind::SplitsCharacter {
                    endpoint,
                    char_start,
                    char_end,
                });
            }
        }
        Ok(())
    }
}

/// The byte span of the character that `index` falls inside of.
fn enclosing_char(text: &str, index: usize) -> (usize, usize) {
    let start = (0..index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let end = (index..=text.len())
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(text.len());
    (start, end)
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Range { start, end } = self.range;
        match self.kind {
            ErrorKind::Reversed => write!(f, "range {start}..{end} ends before it starts"),
            ErrorKind::OutOfBounds => write!(
                f,
                "range {start}..{end} reaches past the end of {} bytes of text",
                self.text_len
            ),
            ErrorKind::SplitsCharacter {
                endpoint,
                char_start,
                char_end,
            } => {
                let which = match endpoint {
                    Endpoint::Start => "start",
                    Endpoint::End => "end",
                };
                write!(
                    f,
                    "range {start}..{end}: {which} falls inside the character at {char_start}..{char_end}"
                )
            }
            ErrorKind::Uncovered => write!(
                f,
                "segments cover {end} bytes of a {} byte run",
                self.text_len
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range ends before it starts.
    Reversed,
    /// The range reaches past the end of the container's text.
    OutOfBounds,
    /// One endpoint falls inside a multi-byte character.
    SplitsCharacter {
        /// The offending endpoint.
        endpoint: Endpoint,
        /// Byte offset of the split character.
        char_start: usize,
        /// Byte offset just past the split character.
        char_end: usize,
    },
    /// The segments of a range don't add up to the run they were asked to
    /// slice, usually because the run came from a different scan.
    Uncovered,
}

/// One end of a byte range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The inclusive start.
    Start,
    /// The exclusive end.
    End,
}
