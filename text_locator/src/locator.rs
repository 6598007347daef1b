// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::hash::Hash;

use ja_script::script_run;
use log::trace;
use peniko::kurbo::{Point, Rect};
use scan_range::{CursorOffset, TextRange};

use crate::mirror::{self, is_text_like};
use crate::overlay::PointerEventsGuard;
use crate::walk::{self, Run};
use crate::{
    Caret, ContainerKind, HostDocument, LocateOptions, ScanResult, ShadowProbe, probe_shadow,
};

/// Where the pointer landed.
#[derive(Clone, Copy, Debug)]
enum Hit<N> {
    /// A position in a text node.
    Text(Caret<N>),
    /// A position in the value of a text control, with the character's box
    /// when it is already known.
    Control {
        control: N,
        offset: usize,
        rect: Option<Rect>,
    },
}

/// Finds the run of Japanese text under `point`.
///
/// `element` is the element the pointer event was delivered to. Images and
/// similar yield their `alt` or `title` text, and `select` elements their
/// value, as detached runs. Everything else is resolved to a caret, making
/// overlapping elements transparent one by one when nothing is hit directly,
/// and descending into shadow trees. The run then extends from the caret for
/// at most [`LocateOptions::max_length`] characters.
///
/// Returns `None` when the point isn't over text or the text under it doesn't
/// start with a Japanese character. The document is left as it was found.
pub fn locate<D: HostDocument>(
    doc: &mut D,
    point: Point,
    element: D::Node,
    options: &LocateOptions,
) -> Option<ScanResult<D::Node>> {
    match doc.container_kind(element) {
        ContainerKind::Media => {
            let text = doc
                .attribute(element, "alt")
                .filter(|alt| !alt.is_empty())
                .or_else(|| doc.attribute(element, "title"))?;
            return detached_scan(doc, element, text, options.max_length);
        }
        ContainerKind::Select => {
            let text = doc.control_value(element)?;
            return detached_scan(doc, element, text, options.max_length);
        }
        _ => {}
    }

    let hit = match resolve(doc, point, Some(element), options) {
        Some(hit) => hit,
        None => pierce_overlays(doc, point, options)?,
    };
    let (run, rect) = match hit {
        Hit::Text(caret) => {
            let run = walk::text_run(doc, caret, options.max_length)?;
            let rect = first_char_rect(doc, &run);
            (run, rect)
        }
        Hit::Control {
            control,
            offset,
            rect,
        } => {
            let run = walk::control_run(doc, control, offset, options.max_length)?;
            let rect = rect.unwrap_or_else(|| first_char_rect(doc, &run));
            (run, rect)
        }
    };
    Some(ScanResult {
        text: run.text,
        range: run.range,
        cursor: run.cursor,
        rect,
    })
}

fn detached_scan<D: HostDocument>(
    doc: &D,
    element: D::Node,
    text: &str,
    max_length: usize,
) -> Option<ScanResult<D::Node>> {
    let run = script_run(text, max_length)?;
    Some(ScanResult {
        text: run.into(),
        range: TextRange::detached(),
        cursor: CursorOffset::new(element, 0),
        rect: doc.element_rect(element).unwrap_or(Rect::ZERO),
    })
}

fn first_char_rect<D: HostDocument>(doc: &D, run: &Run<D::Node>) -> Rect {
    let CursorOffset { container, offset } = run.cursor;
    if doc.container_kind(container) == ContainerKind::TextControl {
        // Offsets index the control's value, which has no text rects.
        return doc.element_rect(container).unwrap_or(Rect::ZERO);
    }
    let end = offset + run.text.chars().next().map_or(0, char::len_utf8);
    doc.text_rect(container, offset, end)
        .or_else(|| doc.parent(container).and_then(|parent| doc.element_rect(parent)))
        .or_else(|| doc.element_rect(container))
        .unwrap_or(Rect::ZERO)
}

/// The mirror's box for the character at `offset`, if the mirror puts that
/// character under `point` too.
fn mirror_rect<D: HostDocument>(
    doc: &D,
    control: D::Node,
    point: Point,
    offset: usize,
) -> Option<Rect> {
    mirror::hit_test(doc, control, point)
        .filter(|hit| hit.offset == offset)
        .map(|hit| hit.rect)
}

fn native_caret<D: HostDocument>(doc: &D, point: Point) -> Option<Caret<D::Node>> {
    doc.caret_position_from_point(point)
        .unwrap_or_else(|_| doc.caret_range_from_point(point))
}

/// Resolves `point` without touching the document.
fn resolve<D: HostDocument>(
    doc: &D,
    point: Point,
    element: Option<D::Node>,
    options: &LocateOptions,
) -> Option<Hit<D::Node>> {
    if let Some(control) =
        element.filter(|&el| doc.container_kind(el) == ContainerKind::TextControl)
    {
        if !is_text_like(doc, control) {
            return None;
        }
        if let Some(caret) = native_caret(doc, point).filter(|caret| caret.node == control) {
            return Some(Hit::Control {
                control,
                offset: caret.offset,
                rect: mirror_rect(doc, control, point, caret.offset),
            });
        }
        trace!("caret missed text control {control:?}, hit-testing a mirror");
        let hit = mirror::hit_test(doc, control, point)?;
        return Some(Hit::Control {
            control,
            offset: hit.offset,
            rect: Some(hit.rect),
        });
    }

    let caret = native_caret(doc, point);
    let shadow_root = caret
        .and_then(|caret| doc.shadow_root(caret.node))
        .or_else(|| element.and_then(|el| doc.shadow_root(el)));
    if let Some(root) = shadow_root {
        match probe_shadow(doc, root, point, options.max_shadow_depth) {
            ShadowProbe::Found(caret) => return Some(Hit::Text(caret)),
            ShadowProbe::NoMatch | ShadowProbe::DepthExceeded => {}
        }
    }

    let caret = caret?;
    match doc.container_kind(caret.node) {
        ContainerKind::Text => Some(Hit::Text(caret)),
        ContainerKind::TextControl if is_text_like(doc, caret.node) => Some(Hit::Control {
            control: caret.node,
            offset: caret.offset,
            rect: mirror_rect(doc, caret.node, point, caret.offset),
        }),
        _ => None,
    }
}

/// Makes the elements under `point` transparent one at a time, innermost
/// first, until something below them resolves.
fn pierce_overlays<D: HostDocument>(
    doc: &mut D,
    point: Point,
    options: &LocateOptions,
) -> Option<Hit<D::Node>> {
    let stack = doc.elements_from_point(point);
    let mut guard = PointerEventsGuard::new(doc);
    for overlay in stack.into_iter().take(options.max_overlay_depth) {
        guard.disable(overlay);
        let below = guard.doc().elements_from_point(point).first().copied();
        if let Some(hit) = resolve(guard.doc(), point, below, options) {
            trace!("resolved {point:?} after disabling {overlay:?}");
            return Some(hit);
        }
    }
    trace!("nothing under the overlays at {point:?}");
    None
}

/// Locates text and remembers the last result.
///
/// The remembered [`ScanResult`] lets a caller recompute highlight ranges
/// and the anchor box as dictionary results arrive, without locating again.
#[derive(Clone, Debug)]
pub struct TextLocator<N> {
    options: LocateOptions,
    last: Option<ScanResult<N>>,
}

impl<N> Default for TextLocator<N> {
    fn default() -> Self {
        Self::new(LocateOptions::default())
    }
}

impl<N> TextLocator<N> {
    /// Creates a locator with the given options.
    pub fn new(options: LocateOptions) -> Self {
        Self {
            options,
            last: None,
        }
    }

    /// The options used by [`locate`](Self::locate).
    pub fn options(&self) -> &LocateOptions {
        &self.options
    }

    /// Replaces the options.
    pub fn set_options(&mut self, options: LocateOptions) {
        self.options = options;
    }

    /// The result of the last call to [`locate`](Self::locate).
    pub fn last(&self) -> Option<&ScanResult<N>> {
        self.last.as_ref()
    }

    /// Forgets the last result.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl<N: Copy + Eq + Hash + Debug> TextLocator<N> {
    /// Locates the text under `point` and remembers the result.
    ///
    /// See [`locate`].
    pub fn locate<D: HostDocument<Node = N>>(
        &mut self,
        doc: &mut D,
        point: Point,
        element: N,
    ) -> Option<&ScanResult<N>> {
        self.last = locate(doc, point, element, &self.options);
        self.last.as_ref()
    }

    /// The highlight range for the first `max_length` characters of the last
    /// result.
    pub fn highlight_range(&self, max_length: usize) -> Option<TextRange<N>> {
        self.last
            .as_ref()
            .and_then(|scan| scan.highlight_range(max_length).ok())
    }

    /// The anchor box of the last result.
    pub fn anchor_rect(&self) -> Option<Rect> {
        self.last.as_ref().map(|scan| scan.rect)
    }
}
