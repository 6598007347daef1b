// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for the scanner.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests. This makes it easier to share the fixtures below.
//! - If you want to add new tests, put them into the module of their topic: `locator` for
//!   finding text in a document, `search` for dictionary lookups and `pipeline` for the two
//!   working together. Tests for bugs should go into `issues.rs` once there are any.
//! - For test naming, put the topic of the test at the start of the name, for example
//!   `locator_ruby_annotations_are_skipped` rather than `ruby_annotations_are_skipped`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod search;
mod util;
