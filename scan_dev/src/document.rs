// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory host document with a fixed-pitch layout.
//!
//! Flow content is laid out left to right on lines of [`LINE_HEIGHT`], one
//! [`CHAR_WIDTH`] per character. Blocks and line breaks start a new line.
//! Ruby readings sit above their base at half the pitch. Positioned content
//! (overlays, images, form controls and shadow hosts) gets an explicit box
//! and doesn't affect the flow. Later nodes paint over earlier ones.

use peniko::kurbo::{Insets, Point, Rect, Vec2};
use text_locator::{
    Caret, ContainerKind, ControlMetrics, HostDocument, LayoutRole, PointerEvents, Unsupported,
    Visibility,
};

/// The advance of a character of flow text.
pub const CHAR_WIDTH: f64 = 16.0;
/// The height of a line of flow text.
pub const LINE_HEIGHT: f64 = 20.0;
/// The advance of a character of a ruby reading.
pub const RUBY_CHAR_WIDTH: f64 = 8.0;
/// The height of a ruby reading.
pub const RUBY_HEIGHT: f64 = 10.0;

/// A node of a [`MemoryDocument`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// The nodes created by [`MemoryDocument::ruby`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ruby {
    /// The `ruby` element.
    pub element: NodeId,
    /// The text node of the base.
    pub base: NodeId,
    /// The `rt` element.
    pub annotation: NodeId,
    /// The text node of the reading.
    pub reading: NodeId,
}

#[derive(Copy, Clone, Debug)]
struct Glyphs {
    origin: Point,
    advance: f64,
    height: f64,
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: ContainerKind,
    role: LayoutRole,
    /// Text node data, or the value of a control.
    text: String,
    input_type: Option<String>,
    attributes: Vec<(String, String)>,
    pointer_events: PointerEvents,
    visibility: Visibility,
    rect: Option<Rect>,
    glyphs: Option<Glyphs>,
    shadow_root: Option<NodeId>,
    scroll: Vec2,
}

impl Node {
    fn new(kind: ContainerKind, role: LayoutRole) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            kind,
            role,
            text: String::new(),
            input_type: None,
            attributes: Vec::new(),
            pointer_events: PointerEvents::Auto,
            visibility: Visibility::VISIBLE,
            rect: None,
            glyphs: None,
            shadow_root: None,
            scroll: Vec2::ZERO,
        }
    }

    fn positioned(kind: ContainerKind, role: LayoutRole, rect: Rect) -> Self {
        Self {
            rect: Some(rect),
            ..Self::new(kind, role)
        }
    }
}

/// A document tree built in memory.
///
/// Every builder method appends to the flow, so a document is written in
/// reading order:
///
/// ```
/// use scan_dev::{CHAR_WIDTH, MemoryDocument};
/// use text_locator::HostDocument;
///
/// let mut doc = MemoryDocument::new();
/// let p = doc.block(doc.body());
/// let text = doc.add_text(p, "日本語");
/// let rect = doc.text_rect(text, 3, 6).unwrap();
/// assert_eq!(rect.x0, CHAR_WIDTH);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    pen: Point,
    line_left: f64,
    line_used: bool,
    ruby_x: f64,
    native_position: bool,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document with an empty body.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ContainerKind::Element, LayoutRole::Block)],
            pen: Point::new(0.0, RUBY_HEIGHT),
            line_left: 0.0,
            line_used: false,
            ruby_x: 0.0,
            native_position: true,
        }
    }

    /// The body element.
    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, parent: Option<NodeId>, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { parent, ..node });
        if let Some(parent) = parent {
            self.node_mut(parent).children.push(id);
        }
        id
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(Some(id), |&n| self.node(n).parent)
    }

    fn has_role(&self, id: NodeId, role: LayoutRole) -> bool {
        self.ancestors(id).any(|n| self.node(n).role == role)
    }

    fn new_line(&mut self) {
        if self.line_used {
            self.break_line();
        }
    }

    fn break_line(&mut self) {
        self.pen = Point::new(self.line_left, self.pen.y + LINE_HEIGHT + RUBY_HEIGHT);
        self.line_used = false;
    }

    /// Lays out `chars` characters of text appended to `parent`.
    fn place(&mut self, parent: NodeId, chars: usize) -> Option<Glyphs> {
        if self.has_role(parent, LayoutRole::Hidden) {
            return None;
        }
        if self.has_role(parent, LayoutRole::RubyAnnotation) {
            return Some(Glyphs {
                origin: Point::new(self.ruby_x, self.pen.y - RUBY_HEIGHT),
                advance: RUBY_CHAR_WIDTH,
                height: RUBY_HEIGHT,
            });
        }
        let origin = self.pen;
        self.pen.x += chars as f64 * CHAR_WIDTH;
        self.line_used = true;
        Some(Glyphs {
            origin,
            advance: CHAR_WIDTH,
            height: LINE_HEIGHT,
        })
    }

    /// Appends a block element, starting a new line.
    pub fn block(&mut self, parent: NodeId) -> NodeId {
        self.new_line();
        self.push(
            Some(parent),
            Node::new(ContainerKind::Element, LayoutRole::Block),
        )
    }

    /// Appends an inline element such as `span`.
    pub fn inline(&mut self, parent: NodeId) -> NodeId {
        self.push(
            Some(parent),
            Node::new(ContainerKind::Element, LayoutRole::Inline),
        )
    }

    /// Appends an element that isn't rendered.
    pub fn hidden(&mut self, parent: NodeId) -> NodeId {
        self.push(
            Some(parent),
            Node::new(ContainerKind::Element, LayoutRole::Hidden),
        )
    }

    /// Appends a `br`.
    pub fn line_break(&mut self, parent: NodeId) -> NodeId {
        let br = self.push(
            Some(parent),
            Node::new(ContainerKind::Element, LayoutRole::LineBreak),
        );
        self.break_line();
        br
    }

    /// Appends a text node.
    pub fn add_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let glyphs = self.place(parent, text.chars().count());
        self.push(
            Some(parent),
            Node {
                text: text.into(),
                glyphs,
                ..Node::new(ContainerKind::Text, LayoutRole::Inline)
            },
        )
    }

    /// Appends `<ruby>base<rt>reading</rt></ruby>`.
    pub fn ruby(&mut self, parent: NodeId, base: &str, reading: &str) -> Ruby {
        self.ruby_x = self.pen.x;
        let element = self.inline(parent);
        let base = self.add_text(element, base);
        let annotation = self.push(
            Some(element),
            Node::new(ContainerKind::Element, LayoutRole::RubyAnnotation),
        );
        let reading = self.add_text(annotation, reading);
        Ruby {
            element,
            base,
            annotation,
            reading,
        }
    }

    /// Appends an element covering `rect` on top of everything before it.
    pub fn overlay(&mut self, parent: NodeId, rect: Rect) -> NodeId {
        self.push(
            Some(parent),
            Node::positioned(ContainerKind::Element, LayoutRole::Block, rect),
        )
    }

    /// Appends an image with the given attributes.
    pub fn image(&mut self, parent: NodeId, rect: Rect, attributes: &[(&str, &str)]) -> NodeId {
        self.push(
            Some(parent),
            Node {
                attributes: attributes
                    .iter()
                    .map(|&(name, value)| (name.into(), value.into()))
                    .collect(),
                ..Node::positioned(ContainerKind::Media, LayoutRole::Inline, rect)
            },
        )
    }

    /// Appends a `select` showing `value`.
    pub fn select(&mut self, parent: NodeId, rect: Rect, value: &str) -> NodeId {
        self.push(
            Some(parent),
            Node {
                text: value.into(),
                ..Node::positioned(ContainerKind::Select, LayoutRole::Inline, rect)
            },
        )
    }

    /// Appends a text control, an `input` of `input_type` or a `textarea`.
    ///
    /// Controls have a 1px border and 2px padding.
    pub fn input(&mut self, parent: NodeId, rect: Rect, input_type: &str, value: &str) -> NodeId {
        self.push(
            Some(parent),
            Node {
                text: value.into(),
                input_type: Some(input_type.into()),
                ..Node::positioned(ContainerKind::TextControl, LayoutRole::Inline, rect)
            },
        )
    }

    /// Appends an element covering `rect` and attaches a shadow root to it.
    ///
    /// Returns the host and the root. Content added to the root flows from
    /// wherever the pen is, see [`move_pen`](Self::move_pen).
    pub fn shadow_host(&mut self, parent: NodeId, rect: Rect) -> (NodeId, NodeId) {
        let host = self.push(
            Some(parent),
            Node::positioned(ContainerKind::Element, LayoutRole::Inline, rect),
        );
        let root = self.push(None, Node::new(ContainerKind::Element, LayoutRole::Block));
        self.node_mut(host).shadow_root = Some(root);
        (host, root)
    }

    /// Moves the start of the next flow content to `point`.
    pub fn move_pen(&mut self, point: Point) {
        self.pen = point;
        self.line_left = point.x;
        self.line_used = false;
    }

    /// Changes the computed visibility of `node`.
    pub fn set_visibility(&mut self, node: NodeId, visibility: Visibility) {
        self.node_mut(node).visibility = visibility;
    }

    /// Scrolls a text control.
    pub fn set_scroll(&mut self, node: NodeId, offset: Vec2) {
        self.node_mut(node).scroll = offset;
    }

    /// Makes [`caret_position_from_point`](HostDocument::caret_position_from_point)
    /// report itself unsupported, as on hosts that only have the older
    /// primitive.
    pub fn set_native_position_supported(&mut self, supported: bool) {
        self.native_position = supported;
    }

    /// The center of the character at `index` (in characters) of a text
    /// node.
    pub fn char_center(&self, node: NodeId, index: usize) -> Option<Point> {
        let glyphs = self.node(node).glyphs?;
        (index < self.node(node).text.chars().count()).then(|| {
            Point::new(
                glyphs.origin.x + (index as f64 + 0.5) * glyphs.advance,
                glyphs.origin.y + glyphs.height / 2.0,
            )
        })
    }

    /// The box of an element: its own if it is positioned, else the union of
    /// its rendered text.
    fn layout_box(&self, id: NodeId) -> Option<Rect> {
        let node = self.node(id);
        if let Some(rect) = node.rect {
            return Some(rect);
        }
        if let Some(glyphs) = node.glyphs {
            let width = node.text.chars().count() as f64 * glyphs.advance;
            return Some(Rect::from_origin_size(glyphs.origin, (width, glyphs.height)));
        }
        node.children
            .iter()
            .filter_map(|&child| self.layout_box(child))
            .reduce(|a, b| a.union(b))
    }

    fn tree_root(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev());
        }
        out
    }

    fn hits(&self, candidates: impl Iterator<Item = NodeId>, point: Point) -> Vec<NodeId> {
        let mut hits: Vec<NodeId> = candidates
            .filter(|&id| {
                let node = self.node(id);
                node.kind != ContainerKind::Text
                    && self.layout_box(id).is_some_and(|rect| rect.contains(point))
            })
            .collect();
        hits.sort_unstable_by(|a, b| b.cmp(a));
        hits
    }

    fn text_caret_in(&self, root: NodeId, point: Point) -> Option<Caret<NodeId>> {
        self.descendants(root).into_iter().find_map(|id| {
            let node = self.node(id);
            let glyphs = node.glyphs?;
            node.text
                .char_indices()
                .enumerate()
                .find(|&(index, _)| {
                    let x0 = glyphs.origin.x + index as f64 * glyphs.advance;
                    let y0 = glyphs.origin.y;
                    Rect::new(x0, y0, x0 + glyphs.advance, y0 + glyphs.height).contains(point)
                })
                .map(|(_, (offset, _))| Caret::new(id, offset))
        })
    }
}

impl HostDocument for MemoryDocument {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).children.first().copied()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = &self.node(self.node(node).parent?).children;
        let index = siblings.iter().position(|&n| n == node)?;
        siblings.get(index + 1).copied()
    }

    fn container_kind(&self, node: NodeId) -> ContainerKind {
        self.node(node).kind
    }

    fn layout_role(&self, node: NodeId) -> LayoutRole {
        self.node(node).role
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        let node = self.node(node);
        (node.kind == ContainerKind::Text).then_some(node.text.as_str())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    fn control_value(&self, node: NodeId) -> Option<&str> {
        let node = self.node(node);
        matches!(node.kind, ContainerKind::TextControl | ContainerKind::Select)
            .then_some(node.text.as_str())
    }

    fn input_type(&self, node: NodeId) -> Option<&str> {
        self.node(node).input_type.as_deref()
    }

    fn caret_position_from_point(
        &self,
        point: Point,
    ) -> Result<Option<Caret<NodeId>>, Unsupported> {
        if self.native_position {
            Ok(self.caret_range_from_point(point))
        } else {
            Err(Unsupported)
        }
    }

    /// Like browsers, places no caret inside form controls, and places it
    /// before a shadow host rather than inside its tree.
    fn caret_range_from_point(&self, point: Point) -> Option<Caret<NodeId>> {
        let top = *self.elements_from_point(point).first()?;
        match self.node(top).kind {
            ContainerKind::TextControl | ContainerKind::Media | ContainerKind::Select => None,
            _ if self.node(top).shadow_root.is_some() => Some(Caret::new(top, 0)),
            _ => self.text_caret_in(top, point),
        }
    }

    fn elements_from_point(&self, point: Point) -> Vec<NodeId> {
        let body = self.body();
        let light = (0..self.nodes.len()).map(NodeId).filter(|&id| {
            let node = self.node(id);
            node.pointer_events == PointerEvents::Auto
                && node.visibility.is_visible()
                && self.tree_root(id) == body
        });
        self.hits(light, point)
    }

    fn pointer_events(&self, node: NodeId) -> PointerEvents {
        self.node(node).pointer_events
    }

    fn set_pointer_events(&mut self, node: NodeId, value: PointerEvents) {
        self.node_mut(node).pointer_events = value;
    }

    fn shadow_root(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).shadow_root
    }

    fn shadow_elements_from_point(&self, root: NodeId, point: Point) -> Vec<NodeId> {
        let tree = self.descendants(root).into_iter().filter(|&id| id != root);
        self.hits(tree, point)
    }

    fn text_rect(&self, node: NodeId, start: usize, end: usize) -> Option<Rect> {
        let data = self.node(node);
        let glyphs = data.glyphs?;
        let text = data.text.get(start..end)?;
        let before = data.text[..start].chars().count() as f64;
        let len = text.chars().count() as f64;
        Some(Rect::new(
            glyphs.origin.x + before * glyphs.advance,
            glyphs.origin.y,
            glyphs.origin.x + (before + len) * glyphs.advance,
            glyphs.origin.y + glyphs.height,
        ))
    }

    fn element_rect(&self, node: NodeId) -> Option<Rect> {
        self.layout_box(node)
    }

    fn visibility(&self, node: NodeId) -> Visibility {
        self.node(node).visibility
    }

    fn control_metrics(&self, node: NodeId) -> Option<ControlMetrics> {
        let data = self.node(node);
        if data.kind != ContainerKind::TextControl {
            return None;
        }
        Some(ControlMetrics {
            border_box: data.rect?,
            border: Insets::uniform(1.0),
            padding: Insets::uniform(2.0),
            scroll_offset: data.scroll,
            line_height: LINE_HEIGHT,
            wrap: data.input_type.as_deref() == Some("textarea"),
        })
    }

    fn measure_text(&self, _: NodeId, text: &str) -> f64 {
        text.chars().count() as f64 * CHAR_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::{CHAR_WIDTH, LINE_HEIGHT, MemoryDocument, RUBY_HEIGHT};
    use peniko::kurbo::{Point, Rect};
    use text_locator::{Caret, HostDocument, PointerEvents};

    #[test]
    fn flow_layout() {
        let mut doc = MemoryDocument::new();
        let p = doc.block(doc.body());
        let a = doc.add_text(p, "今日");
        let ruby = doc.ruby(p, "漢", "かん");
        doc.line_break(p);
        let b = doc.add_text(p, "字");

        assert_eq!(
            doc.text_rect(a, 0, "今日".len()),
            Some(Rect::new(0.0, RUBY_HEIGHT, 2.0 * CHAR_WIDTH, RUBY_HEIGHT + LINE_HEIGHT))
        );
        let base = doc.text_rect(ruby.base, 0, "漢".len()).unwrap();
        let reading = doc.text_rect(ruby.reading, 0, "かん".len()).unwrap();
        assert_eq!(base.x0, 2.0 * CHAR_WIDTH);
        assert_eq!(reading.x0, base.x0);
        assert_eq!(reading.y1, base.y0);
        let next_line = doc.text_rect(b, 0, "字".len()).unwrap();
        assert_eq!(next_line.x0, 0.0);
        assert!(next_line.y0 >= base.y1);
        assert!(doc.text_rect(a, 0, 1).is_none(), "mid-character");
    }

    #[test]
    fn later_content_paints_on_top() {
        let mut doc = MemoryDocument::new();
        let p = doc.block(doc.body());
        let text = doc.add_text(p, "日本");
        let point = doc.char_center(text, 1).unwrap();
        assert_eq!(doc.caret_range_from_point(point), Some(Caret::new(text, 3)));

        let cover = doc.overlay(doc.body(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(doc.elements_from_point(point), [cover, p, doc.body()]);
        assert_eq!(doc.caret_range_from_point(point), None);

        doc.set_pointer_events(cover, PointerEvents::None);
        assert_eq!(doc.caret_range_from_point(point), Some(Caret::new(text, 3)));
    }

    #[test]
    fn shadow_trees_are_separate() {
        let mut doc = MemoryDocument::new();
        let (host, root) = doc.shadow_host(doc.body(), Rect::new(0.0, 0.0, 64.0, 30.0));
        doc.move_pen(Point::new(0.0, 10.0));
        let inner = doc.block(root);
        let text = doc.add_text(inner, "影");
        let point = doc.char_center(text, 0).unwrap();
        assert_eq!(doc.elements_from_point(point), [host, doc.body()]);
        assert_eq!(doc.caret_range_from_point(point), Some(Caret::new(host, 0)));
        assert_eq!(doc.shadow_elements_from_point(root, point), [inner]);
        assert_eq!(doc.parent(root), None);
    }

    #[test]
    fn unsupported_native_position() {
        let mut doc = MemoryDocument::new();
        doc.set_native_position_supported(false);
        assert!(doc.caret_position_from_point(Point::ZERO).is_err());
    }
}
