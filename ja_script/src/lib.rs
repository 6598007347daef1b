// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character-level knowledge about Japanese text.
//!
//! - [`is_japanese`] is the permitted-script predicate that bounds scanning:
//!   kana, kanji and the handful of marks that live inside Japanese words.
//! - [`to_hiragana`] folds katakana and half-width forms onto hiragana one
//!   character at a time, so character counts survive normalization.
//! - [`shrink_step`] tells a longest-match search how many characters to drop
//!   without splitting a small-kana pair.
//!
//! Script data comes from ICU4X.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use ja_script::{is_japanese, to_hiragana};
//!
//! assert!(is_japanese('食'));
//! assert!(!is_japanese('a'));
//! assert_eq!(to_hiragana("タベル"), "たべる");
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

mod kana;
mod script;

pub use kana::{is_kana, is_small_kana, shrink_step, to_hiragana};
pub use script::{is_japanese, script_run};
