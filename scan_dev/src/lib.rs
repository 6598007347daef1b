// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Scan Dev
//!
//! This crate provides utilities for developing the scanner: a
//! [`MemoryDocument`] host with a deterministic layout, a [`MemoryStore`]
//! dictionary that records its queries, and sample texts and entries.

mod document;
mod samples;
mod store;

pub use crate::document::{
    CHAR_WIDTH, LINE_HEIGHT, MemoryDocument, NodeId, RUBY_CHAR_WIDTH, RUBY_HEIGHT, Ruby,
};
pub use crate::samples::{Sample, TextSamples, sample_entries};
pub use crate::store::{MemoryStore, QueryKind};
