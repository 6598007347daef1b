// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extracting the run of Japanese text that starts at a caret.

use ja_script::is_japanese;
use scan_range::{CursorOffset, TextRange, TextRangeSegment};

use crate::{Caret, ContainerKind, HostDocument, LayoutRole};

/// A run read from the document, before its anchor box is known.
#[derive(Debug)]
pub(crate) struct Run<N> {
    pub(crate) text: String,
    pub(crate) range: TextRange<N>,
    pub(crate) cursor: CursorOffset<N>,
}

/// The subtree a run may not leave: the nearest ancestor that isn't laid
/// out inline. Inside a ruby annotation that is the annotation itself.
pub(crate) fn boundary_root<D: HostDocument>(doc: &D, node: D::Node) -> D::Node {
    let mut current = node;
    while let Some(parent) = doc.parent(current) {
        if doc.layout_role(parent) != LayoutRole::Inline {
            return parent;
        }
        current = parent;
    }
    current
}

/// The node after `node` in document order without entering its children,
/// staying inside `root`.
fn next_skipping_children<D: HostDocument>(
    doc: &D,
    mut node: D::Node,
    root: D::Node,
) -> Option<D::Node> {
    loop {
        if node == root {
            return None;
        }
        if let Some(sibling) = doc.next_sibling(node) {
            return Some(sibling);
        }
        node = doc.parent(node)?;
    }
}

/// The node after `node` in document order, staying inside `root`.
fn next_in_order<D: HostDocument>(doc: &D, node: D::Node, root: D::Node) -> Option<D::Node> {
    doc.first_child(node)
        .or_else(|| next_skipping_children(doc, node, root))
}

/// Appends the Japanese prefix of `text[start..]` to `run`, up to `limit`
/// characters. Returns the number of characters taken and whether the walk
/// must stop here.
fn take_script<N: Copy + PartialEq>(
    run: &mut Run<N>,
    node: N,
    text: &str,
    start: usize,
    limit: usize,
) -> Option<(usize, bool)> {
    let rest = text.get(start..)?;
    let mut end = start;
    let mut taken = 0;
    let mut blocked = false;
    for ch in rest.chars() {
        if taken == limit {
            break;
        }
        if !is_japanese(ch) {
            blocked = true;
            break;
        }
        end += ch.len_utf8();
        taken += 1;
    }
    run.text.push_str(&rest[..end - start]);
    run.range
        .push(TextRangeSegment::new(node, text, start..end).ok()?);
    Some((taken, blocked || taken == limit))
}

/// Reads the run starting at `caret`, a position in a text node.
///
/// The run continues into following text nodes until it meets a character
/// that isn't Japanese, a block or line break, the end of the boundary root,
/// or `max_length` characters. Ruby annotations and hidden subtrees are
/// stepped over. Returns `None` if the first character isn't Japanese.
pub(crate) fn text_run<D: HostDocument>(
    doc: &D,
    caret: Caret<D::Node>,
    max_length: usize,
) -> Option<Run<D::Node>> {
    if max_length == 0 {
        return None;
    }
    let root = boundary_root(doc, caret.node);
    let text = doc.text(caret.node)?;
    if !text.is_char_boundary(caret.offset) {
        return None;
    }

    // A caret at the end of a node points at the start of the next one.
    let (mut node, mut start) = (caret.node, caret.offset);
    if start == text.len() {
        node = next_text_or_stop(doc, caret.node, root)?;
        start = 0;
    }
    let first = doc.text(node)?.get(start..)?.chars().next()?;
    if !is_japanese(first) {
        return None;
    }

    let mut run = Run {
        text: String::new(),
        range: TextRange::default(),
        cursor: CursorOffset::new(node, start),
    };
    let mut remaining = max_length;
    let mut current = Some(node);
    while let Some(n) = current {
        if let Some(text) = doc.text(n) {
            let (taken, stop) = take_script(&mut run, n, text, start, remaining)?;
            remaining -= taken;
            if stop {
                break;
            }
        }
        start = 0;
        current = next_text_or_stop(doc, n, root);
    }
    (!run.text.is_empty()).then_some(run)
}

/// The next text node after `node`, or `None` at a block, a line break or the
/// end of `root`.
fn next_text_or_stop<D: HostDocument>(doc: &D, node: D::Node, root: D::Node) -> Option<D::Node> {
    let mut next = next_skipping_children(doc, node, root);
    while let Some(candidate) = next {
        match doc.layout_role(candidate) {
            LayoutRole::Block | LayoutRole::LineBreak => return None,
            LayoutRole::RubyAnnotation | LayoutRole::Hidden => {
                next = next_skipping_children(doc, candidate, root);
            }
            LayoutRole::Inline => {
                if doc.container_kind(candidate) == ContainerKind::Text {
                    return Some(candidate);
                }
                next = next_in_order(doc, candidate, root);
            }
        }
    }
    None
}

/// Reads the run starting at `offset` in the value of a text control.
pub(crate) fn control_run<D: HostDocument>(
    doc: &D,
    control: D::Node,
    offset: usize,
    max_length: usize,
) -> Option<Run<D::Node>> {
    let value = doc.control_value(control)?;
    if !value.is_char_boundary(offset) || max_length == 0 {
        return None;
    }
    if !value[offset..].chars().next().is_some_and(is_japanese) {
        return None;
    }
    let mut run = Run {
        text: String::new(),
        range: TextRange::default(),
        cursor: CursorOffset::new(control, offset),
    };
    take_script(&mut run, control, value, offset, max_length)?;
    Some(run)
}
