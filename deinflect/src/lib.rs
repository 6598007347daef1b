// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deinflect recovers the dictionary forms an inflected Japanese word may
//! come from.
//!
//! [`deinflect`] runs a fixed table of ending rewrites ([`rules`])
//! breadth-first from the input, tracking for every candidate the chain of
//! transformations undone ([`ReasonChain`]) and the grammatical types the
//! candidate may have ([`WordType`]). Callers look candidates up in a
//! dictionary and keep entries whose part of speech the candidate
//! [accepts](DeinflectCandidate::accepts).
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `serde`: Implement `Serialize` and `Deserialize` for candidates, reasons and types.
//!
//! ## Example
//!
//! ```
//! use deinflect::{Reason, WordType, deinflect};
//!
//! let candidates = deinflect("たべません");
//! let base = candidates
//!     .iter()
//!     .find(|c| c.word == "たべる" && c.word_type == WordType::ICHIDAN_VERB)
//!     .unwrap();
//! assert!(base.reasons.has(Reason::Negative));
//! assert!(base.reasons.has(Reason::MasuStem));
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

mod deinflector;
mod reason;
mod rules;
mod word_type;

#[cfg(test)]
mod tests;

pub use crate::deinflector::{DeinflectCandidate, MAX_DEPTH, deinflect};
pub use crate::reason::{Reason, ReasonChain};
pub use crate::rules::{Rule, rules};
pub use crate::word_type::WordType;
