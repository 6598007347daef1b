// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::hash::Hash;

use peniko::kurbo::{Insets, Point, Rect, Vec2};

/// What a node holds, as far as text scanning is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// A text node.
    Text,
    /// An `input` or `textarea`; its text is its value.
    TextControl,
    /// An image, video or similar, whose text comes from its `alt` or
    /// `title` attribute.
    Media,
    /// A `select`, whose text is its current value.
    Select,
    /// Any other element.
    Element,
}

/// How a node takes part in line layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutRole {
    /// Flows within the current line. Text nodes are inline.
    Inline,
    /// Starts its own block, such as a paragraph or table cell.
    Block,
    /// A ruby annotation (`rt` or `rp`).
    RubyAnnotation,
    /// A forced line break.
    LineBreak,
    /// Not rendered at all.
    Hidden,
}

/// Whether an element intercepts the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerEvents {
    /// The element is hit-tested normally.
    #[default]
    Auto,
    /// Hit-testing passes through the element.
    None,
}

/// The computed visibility of an element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Visibility {
    /// Computed opacity, from 0 to 1.
    pub opacity: f32,
    /// `false` for `visibility: hidden`.
    pub visible: bool,
    /// `false` for `display: none`.
    pub displayed: bool,
}

impl Visibility {
    /// A fully visible element.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        visible: true,
        displayed: true,
    };

    /// Returns `true` if the element can be seen at all.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.visible && self.displayed
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// The box and text settings of a text control, copied into the mirror used
/// to hit-test its value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlMetrics {
    /// The control's border box in viewport coordinates.
    pub border_box: Rect,
    /// Border widths.
    pub border: Insets,
    /// Padding.
    pub padding: Insets,
    /// How far the content is scrolled.
    pub scroll_offset: Vec2,
    /// The height of one line of text.
    pub line_height: f64,
    /// `true` if long lines wrap, as in a `textarea`.
    pub wrap: bool,
}

impl ControlMetrics {
    /// The content box in viewport coordinates.
    pub fn content_box(&self) -> Rect {
        let b = self.border_box;
        Rect::new(
            b.x0 + self.border.x0 + self.padding.x0,
            b.y0 + self.border.y0 + self.padding.y0,
            b.x1 - self.border.x1 - self.padding.x1,
            b.y1 - self.border.y1 - self.padding.y1,
        )
    }
}

/// A position in the text of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Caret<N> {
    /// A text node, or a text control whose value the offset indexes.
    pub node: N,
    /// Byte offset into the node's text.
    pub offset: usize,
}

impl<N> Caret<N> {
    /// Creates a caret.
    pub const fn new(node: N, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Returned by hosts that lack a caret primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Unsupported;

/// The document a pointer is scanning.
///
/// This is the DOM of a browser page, or any tree that can answer the same
/// questions. Nodes are cheap handles. All geometry is in viewport
/// coordinates.
pub trait HostDocument {
    /// A handle to a node.
    type Node: Copy + Eq + Hash + Debug;

    /// The parent of `node`. Shadow roots have no parent.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The first child of `node`.
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;

    /// The next sibling of `node`.
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Classifies `node`.
    fn container_kind(&self, node: Self::Node) -> ContainerKind;

    /// The layout role of `node`.
    fn layout_role(&self, node: Self::Node) -> LayoutRole;

    /// The data of a text node.
    fn text(&self, node: Self::Node) -> Option<&str>;

    /// An attribute of an element, such as `alt` or `title`.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// The current value of a text control or `select`.
    fn control_value(&self, node: Self::Node) -> Option<&str>;

    /// The type of a text control: its `type` attribute for inputs
    /// (`"text"` when absent) and `"textarea"` for text areas.
    fn input_type(&self, node: Self::Node) -> Option<&str>;

    /// The host's native point-to-caret primitive.
    ///
    /// Hosts without one return [`Unsupported`] and
    /// [`caret_range_from_point`](Self::caret_range_from_point) is used
    /// instead.
    fn caret_position_from_point(
        &self,
        point: Point,
    ) -> Result<Option<Caret<Self::Node>>, Unsupported> {
        let _ = point;
        Err(Unsupported)
    }

    /// The older point-to-caret primitive.
    fn caret_range_from_point(&self, point: Point) -> Option<Caret<Self::Node>>;

    /// The elements under `point` that intercept the pointer, innermost
    /// first.
    fn elements_from_point(&self, point: Point) -> Vec<Self::Node>;

    /// Whether `node` intercepts the pointer.
    fn pointer_events(&self, node: Self::Node) -> PointerEvents;

    /// Changes whether `node` intercepts the pointer.
    fn set_pointer_events(&mut self, node: Self::Node, value: PointerEvents);

    /// The shadow root attached to `node`, if it is a shadow host.
    fn shadow_root(&self, node: Self::Node) -> Option<Self::Node>;

    /// The elements of the shadow tree under `root` that are under `point`,
    /// innermost first.
    fn shadow_elements_from_point(&self, root: Self::Node, point: Point) -> Vec<Self::Node>;

    /// The box of the text of `node` between the given byte offsets.
    fn text_rect(&self, node: Self::Node, start: usize, end: usize) -> Option<Rect>;

    /// The border box of an element.
    fn element_rect(&self, node: Self::Node) -> Option<Rect>;

    /// The computed visibility of an element.
    fn visibility(&self, node: Self::Node) -> Visibility;

    /// The box and text settings of a text control.
    fn control_metrics(&self, node: Self::Node) -> Option<ControlMetrics>;

    /// The advance width of `text` set in the font of the control `node`.
    fn measure_text(&self, node: Self::Node, text: &str) -> f64;
}
