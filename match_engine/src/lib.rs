// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Match Engine looks scanned Japanese text up in a dictionary.
//!
//! A [`SearchEngine`] wraps a [`DictionaryStore`] and offers three
//! strategies:
//!
//! - [`backward`](SearchEngine::backward) finds the longest prefix of the
//!   text that is, or deinflects to, a dictionary word. This is the usual
//!   strategy for text under a pointer.
//! - [`forward`](SearchEngine::forward) finds headwords that start with the
//!   text or one of its deinflected forms.
//! - [`whole`](SearchEngine::whole) finds headwords equal to the text.
//!
//! Matches are [ranked](rank) by the priority tags of their headwords and
//! cached per strategy. Starting a search cancels the previous search of the
//! same strategy.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `serde`: Implement `Serialize` and `Deserialize` for entries and options.
//!
//! ## Example
//!
//! ```
//! use std::convert::Infallible;
//! use std::sync::Arc;
//!
//! use match_engine::{DictionaryStore, Entry, EntryId, SearchEngine, SearchOptions};
//!
//! struct OneWord(Arc<Entry>);
//!
//! impl DictionaryStore for OneWord {
//!     type Error = Infallible;
//!
//!     async fn search_exact(&self, words: &[String], _: usize) -> Result<Vec<Arc<Entry>>, Infallible> {
//!         let hit = self.0.headwords().any(|h| words.contains(&h.text));
//!         Ok(if hit { vec![self.0.clone()] } else { vec![] })
//!     }
//!
//!     async fn search_prefix(&self, _: &[String], _: usize) -> Result<Vec<Arc<Entry>>, Infallible> {
//!         Ok(vec![])
//!     }
//! }
//!
//! let entry = Entry::new(EntryId(1))
//!     .with_kanji("食べる", ["ichi1"])
//!     .with_reading("たべる", ["ichi1"])
//!     .with_sense(["to eat"], ["v1"]);
//! let engine = SearchEngine::new(OneWord(Arc::new(entry)));
//!
//! let outcome = pollster::block_on(engine.backward("食べられなかった", &SearchOptions::default())).unwrap();
//! assert_eq!(outcome.max_length, 8);
//! assert_eq!(outcome.entries[0].word, "食べる");
//! assert_eq!(outcome.entries[0].reasons.to_string(), "past < negative < passive/potential");
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

mod cache;
mod cancel;
mod engine;
mod entry;
mod error;
mod options;
mod outcome;
mod rank;
mod store;

pub use deinflect::{Reason, ReasonChain, WordType};

pub use crate::cache::{CacheRecord, DEFAULT_CACHE_CAPACITY, ScanCache};
pub use crate::cancel::{Cancelled, CancellationToken};
pub use crate::engine::{SearchEngine, SearchStrategy};
pub use crate::entry::{Entry, EntryId, Headword, PriorityTag, Sense};
pub use crate::error::SearchError;
pub use crate::options::SearchOptions;
pub use crate::outcome::{MatchedEntry, SearchOutcome};
pub use crate::rank::rank;
pub use crate::store::DictionaryStore;
