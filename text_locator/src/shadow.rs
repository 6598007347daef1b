// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::trace;
use peniko::kurbo::Point;

use crate::{Caret, ContainerKind, HostDocument, LayoutRole};

/// The outcome of searching a shadow tree for text under the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShadowProbe<N> {
    /// Text was found.
    Found(Caret<N>),
    /// The tree has no text under the point.
    NoMatch,
    /// Shadow trees were nested deeper than the descent allows.
    DepthExceeded,
}

/// Searches the shadow tree under `root` for the character under `point`.
///
/// The tree's own text is tested first, one character box at a time. Failing
/// that, the visible elements of the tree under the point are searched for
/// nested shadow trees, up to `max_depth` levels deep.
pub fn probe_shadow<D: HostDocument>(
    doc: &D,
    root: D::Node,
    point: Point,
    max_depth: usize,
) -> ShadowProbe<D::Node> {
    let probe = descend(doc, root, point, 0, max_depth);
    trace!("shadow descent from {root:?}: {probe:?}");
    probe
}

fn descend<D: HostDocument>(
    doc: &D,
    root: D::Node,
    point: Point,
    depth: usize,
    max_depth: usize,
) -> ShadowProbe<D::Node> {
    if depth >= max_depth {
        return ShadowProbe::DepthExceeded;
    }
    if let Some(caret) = text_under_point(doc, root, point) {
        return ShadowProbe::Found(caret);
    }
    let mut exceeded = false;
    for element in doc.shadow_elements_from_point(root, point) {
        if !doc.visibility(element).is_visible()
            || doc.element_rect(element).is_none_or(|rect| rect.area() <= 0.0)
        {
            continue;
        }
        let Some(inner) = doc.shadow_root(element) else {
            continue;
        };
        match descend(doc, inner, point, depth + 1, max_depth) {
            ShadowProbe::Found(caret) => return ShadowProbe::Found(caret),
            ShadowProbe::DepthExceeded => exceeded = true,
            ShadowProbe::NoMatch => {}
        }
    }
    if exceeded {
        ShadowProbe::DepthExceeded
    } else {
        ShadowProbe::NoMatch
    }
}

/// Tests every character of every rendered text node below `root`.
fn text_under_point<D: HostDocument>(
    doc: &D,
    root: D::Node,
    point: Point,
) -> Option<Caret<D::Node>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node != root && doc.layout_role(node) == LayoutRole::Hidden {
            continue;
        }
        if doc.container_kind(node) == ContainerKind::Text {
            if let Some(text) = doc.text(node) {
                for (offset, ch) in text.char_indices() {
                    let hit = doc
                        .text_rect(node, offset, offset + ch.len_utf8())
                        .is_some_and(|rect| rect.contains(point));
                    if hit {
                        return Some(Caret::new(node, offset));
                    }
                }
            }
            continue;
        }
        // Push children in reverse so they pop in document order.
        let mut children = Vec::new();
        let mut child = doc.first_child(node);
        while let Some(c) = child {
            children.push(c);
            child = doc.next_sibling(c);
        }
        stack.extend(children.into_iter().rev());
    }
    None
}
