// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-testing the value of a text control.
//!
//! Native caret primitives don't see inside inputs on every host, so the
//! value is laid out again off-tree with the control's own box metrics and
//! the host's text measurement, and the point is tested against that.

use core::ops::Range;

use peniko::kurbo::{Point, Rect};

use crate::{ControlMetrics, HostDocument};

/// Input types whose value is free text worth scanning.
const TEXT_LIKE_TYPES: &[&str] = &["text", "search", "url", "tel", "email", "textarea"];

/// Returns `true` if `node` is a text control showing readable text.
///
/// Passwords are masked, and checkboxes and the like have no text.
pub(crate) fn is_text_like<D: HostDocument>(doc: &D, node: D::Node) -> bool {
    doc.input_type(node)
        .is_some_and(|ty| TEXT_LIKE_TYPES.iter().any(|t| t.eq_ignore_ascii_case(ty)))
}

/// A character of the control's value found under the point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MirrorHit {
    /// Byte offset of the character in the value.
    pub(crate) offset: usize,
    /// The character's box in viewport coordinates.
    pub(crate) rect: Rect,
}

/// Splits `value` into lines as the control would show them.
///
/// Hard breaks always end a line. When the control wraps, a line also ends
/// before the first character that would overflow `width`.
fn lines<D: HostDocument>(
    doc: &D,
    control: D::Node,
    value: &str,
    metrics: &ControlMetrics,
    width: f64,
) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for hard in value.split('\n') {
        let end = offset + hard.len();
        if metrics.wrap {
            let mut start = offset;
            for (index, ch) in hard.char_indices() {
                let at = offset + index;
                let next = at + ch.len_utf8();
                if at > start && doc.measure_text(control, &value[start..next]) > width {
                    lines.push(start..at);
                    start = at;
                }
            }
            lines.push(start..end);
        } else {
            lines.push(offset..end);
        }
        offset = end + 1;
    }
    lines
}

/// Finds the character of the control's value under `point`.
pub(crate) fn hit_test<D: HostDocument>(
    doc: &D,
    control: D::Node,
    point: Point,
) -> Option<MirrorHit> {
    let metrics = doc.control_metrics(control)?;
    let value = doc.control_value(control)?;
    let content = metrics.content_box();
    if !metrics.border_box.contains(point) || metrics.line_height <= 0.0 {
        return None;
    }

    let x = point.x - content.x0 + metrics.scroll_offset.x;
    let y = point.y - content.y0 + metrics.scroll_offset.y;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let lines = lines(doc, control, value, &metrics, content.width());
    #[expect(
        clippy::cast_possible_truncation,
        reason = "The quotient is non-negative and far below usize::MAX for any real control."
    )]
    let line_index = (y / metrics.line_height).floor() as usize;
    let line = lines.get(line_index)?.clone();

    let line_top = content.y0 - metrics.scroll_offset.y + line_index as f64 * metrics.line_height;
    let line_left = content.x0 - metrics.scroll_offset.x;
    let mut edge = 0.0;
    for (index, ch) in value[line.clone()].char_indices() {
        let start = line.start + index;
        let advance = doc.measure_text(control, &value[line.start..start + ch.len_utf8()]);
        if x < advance {
            return Some(MirrorHit {
                offset: start,
                rect: Rect::new(
                    line_left + edge,
                    line_top,
                    line_left + advance,
                    line_top + metrics.line_height,
                ),
            });
        }
        edge = advance;
    }
    None
}
