// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scan Range is the range model shared by the text locator and its consumers.
//!
//! A run of text found under the pointer rarely lives in a single container:
//! ruby annotations, inline markup and the like split it across several text
//! nodes. [`TextRange`] describes such a run as an ordered list of
//! [`TextRangeSegment`]s, each a validated byte range into one container, and
//! can translate a matched character count back into a sub-range for
//! highlighting.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `serde`: Implement `Serialize` and `Deserialize` for the range types.
//!
//! ## Example
//!
//! ```
//! use scan_range::{TextRange, TextRangeSegment};
//!
//! let first = TextRangeSegment::new(0_u32, "食", 0..3).unwrap();
//! let second = TextRangeSegment::new(1_u32, "べる", 0..6).unwrap();
//! let range = TextRange::from_segments([first, second]);
//!
//! let matched = range.prefix("食べる", 2).unwrap();
//! assert_eq!(matched.segments()[1].as_range(), 0..3);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod error;
mod range;
mod segment;

pub use crate::error::{Endpoint, Error, ErrorKind};
pub use crate::range::{CursorOffset, TextRange};
pub use crate::segment::TextRangeSegment;
