// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Locator finds the run of Japanese text under a pointer.
//!
//! The host document, usually a browser page, is reached through the
//! [`HostDocument`] trait. Given a point and the element the pointer event
//! was delivered to, [`locate`] returns a [`ScanResult`]: up to
//! [`LocateOptions::max_length`] characters of Japanese text starting at the
//! character under the point, the [`TextRange`] they occupy and the box to
//! anchor a popup to.
//!
//! Along the way the locator
//!
//! - reads the `alt` or `title` of images and the value of `select` elements,
//! - hit-tests the value of text inputs and text areas, laying it out again
//!   when the host can't place a caret inside them,
//! - makes overlapping elements transparent, one at a time, to reach the
//!   text beneath them, restoring them before it returns,
//! - descends into shadow trees,
//! - and steps over ruby annotations while joining text split across nodes.
//!
//! [`TextLocator`] additionally remembers the last result, so the highlight
//! range can be recomputed once the dictionary reports how much of the run
//! matched.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `serde`: Implement `Serialize` and `Deserialize` for [`LocateOptions`] and the range types.
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

mod host;
mod locator;
mod mirror;
mod overlay;
mod result;
mod shadow;
mod walk;


pub use peniko::kurbo::{Point, Rect};
pub use scan_range::{CursorOffset, TextRange, TextRangeSegment};

pub use crate::host::{
    Caret, ContainerKind, ControlMetrics, HostDocument, LayoutRole, PointerEvents, Unsupported,
    Visibility,
};
pub use crate::locator::{TextLocator, locate};
pub use crate::result::{LocateOptions, ScanResult};
pub use crate::shadow::{ShadowProbe, probe_shadow};
