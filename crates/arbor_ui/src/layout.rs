//! Flexbox-derived layout engine.
//!
//! ```text
//!   viewport ──► root rect ──► arrange children ──► recurse into each child
//!                                  │
//!                                  ├─ absolute: parent origin + (left, top)
//!                                  └─ flow:     lines → main axis → cross axis
//! ```
//!
//! Layout is a pure function of the tree and the viewport. Every pass starts
//! from scratch; there is no incremental state to fall out of sync. Malformed
//! directives (negative sizes, overflowing children, empty viewports) degrade to
//! clamped or overlapping geometry instead of failing.

use serde::Deserialize;

use crate::geometry::{non_negative, Margin, Rect, Size};
use crate::node::Node;

/// Main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Children flow left to right.
    #[default]
    Row,
    /// Children flow top to bottom.
    Column,
}

/// Placement of children along the main axis when nothing grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    /// Pack from the start.
    #[default]
    Start,
    /// Pack from the end.
    End,
    /// Center the group.
    Center,
    /// First child flush at the start, last flush at the end, equal gaps between.
    SpaceBetween,
    /// Equal space on both sides of every child.
    SpaceAround,
}

/// Placement of each child along the cross axis of its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    /// Near edge.
    Start,
    /// Far edge.
    End,
    /// Centered.
    Center,
    /// Fill the line when the child's cross size is auto.
    #[default]
    Stretch,
}

/// Placement of wrapped lines along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    /// Lines packed at the near edge.
    #[default]
    Start,
    /// Lines packed at the far edge.
    End,
    /// Lines centered as a group.
    Center,
    /// Free cross space shared equally among lines.
    Stretch,
}

/// Whether flow children may break into several lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wrap {
    /// All children on one line.
    #[default]
    NoWrap,
    /// Start a new line when the next child does not fit.
    Wrap,
}

/// Positioning mode of a node inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Participates in the parent's flex distribution.
    #[default]
    Flow,
    /// Placed at explicit offsets, excluded from flow accounting.
    Absolute,
}

/// Whether a node takes part in layout, input and drawing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    /// Laid out normally.
    #[default]
    Flex,
    /// Skipped along with its whole subtree.
    None,
}

/// Layout directives of a single node.
///
/// A width or height of zero means "auto": the node grows or stretches into it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LayoutStyle {
    /// Fixed width, or 0 for auto.
    pub width: f32,
    /// Fixed height, or 0 for auto.
    pub height: f32,
    /// Space outside the node's rectangle.
    pub margin: Margin,
    /// Main axis for children.
    pub direction: Direction,
    /// Main-axis placement of children.
    pub justify: Justify,
    /// Cross-axis placement of children.
    pub align_items: AlignItems,
    /// Cross-axis placement of wrapped lines.
    pub align_content: AlignContent,
    /// Line breaking of children.
    pub wrap: Wrap,
    /// Share of the parent's leftover main-axis space.
    pub grow: f32,
    /// Flow or absolute.
    pub position: Position,
    /// Offset from the parent's left edge when absolute.
    pub left: f32,
    /// Offset from the parent's top edge when absolute.
    pub top: f32,
    /// Visibility in layout.
    pub display: Display,
}

/// Rectangles computed by one layout pass, stored in pre-order.
///
/// Index 0 is the root; a node's children follow it, each followed by its own
/// subtree. Hidden subtrees keep their slots with zero rectangles so indices
/// always line up with a pre-order walk of the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    rects: Vec<Rect>,
    spans: Vec<usize>,
}

impl Layout {
    /// Number of nodes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// True if no tree has been laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Rectangle of the node at a pre-order index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied()
    }

    /// Rectangle of the root.
    #[must_use]
    pub fn root(&self) -> Option<Rect> {
        self.get(0)
    }

    /// All rectangles in pre-order.
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Number of nodes in the subtree rooted at `index`, itself included.
    #[must_use]
    pub fn span(&self, index: usize) -> usize {
        self.spans.get(index).copied().unwrap_or(0)
    }

    /// Pre-order index of the node reached by following child indices from the root.
    #[must_use]
    pub fn index_of(&self, path: &[usize]) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let mut index = 0;
        for &child in path {
            let end = index + self.span(index);
            let mut cursor = index + 1;
            for _ in 0..child {
                if cursor >= end {
                    return None;
                }
                cursor += self.span(cursor);
            }
            if cursor >= end {
                return None;
            }
            index = cursor;
        }
        Some(index)
    }

    /// Rectangle of the node at `path`.
    #[must_use]
    pub fn rect_at(&self, path: &[usize]) -> Option<Rect> {
        self.index_of(path).and_then(|index| self.get(index))
    }
}

/// Lays out `root` inside a viewport of the given size.
///
/// Negative or non-finite viewport dimensions are treated as zero.
#[must_use]
pub fn compute_layout(root: &Node, width: f32, height: f32) -> Layout {
    let viewport = Size::new(width, height).clamped();
    let mut layout = Layout {
        rects: Vec::with_capacity(root.subtree_len()),
        spans: Vec::with_capacity(root.subtree_len()),
    };

    if root.is_visible() {
        place_subtree(root, root_rect(root.style(), viewport), &mut layout);
    } else {
        place_hidden(root, &mut layout);
    }

    layout
}

/// Computes the root's rectangle: auto dimensions fill the viewport.
fn root_rect(style: &LayoutStyle, viewport: Size) -> Rect {
    let slot = Rect::from_size(viewport);
    if style.position == Position::Absolute {
        return absolute_rect(style, slot);
    }

    let inner = slot.inset(style.margin.clamped());
    let width = non_negative(style.width);
    let height = non_negative(style.height);
    Rect::new(
        inner.x,
        inner.y,
        if width > 0.0 { width } else { inner.width },
        if height > 0.0 { height } else { inner.height },
    )
}

fn place_subtree(node: &Node, rect: Rect, layout: &mut Layout) {
    let index = layout.rects.len();
    layout.rects.push(rect);
    layout.spans.push(1);

    let children = node.child_nodes();
    if !children.is_empty() {
        let rects = arrange_children(node.style(), rect, children);
        for (child, child_rect) in children.iter().zip(rects) {
            if child.is_visible() {
                place_subtree(child, child_rect, layout);
            } else {
                place_hidden(child, layout);
            }
        }
    }

    layout.spans[index] = layout.rects.len() - index;
}

fn place_hidden(node: &Node, layout: &mut Layout) {
    let index = layout.rects.len();
    layout.rects.push(Rect::ZERO);
    layout.spans.push(1);
    for child in node.child_nodes() {
        place_hidden(child, layout);
    }
    layout.spans[index] = layout.rects.len() - index;
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn absolute_rect(style: &LayoutStyle, content: Rect) -> Rect {
    Rect::new(
        content.x + finite_or_zero(style.left),
        content.y + finite_or_zero(style.top),
        non_negative(style.width),
        non_negative(style.height),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn of(direction: Direction) -> Self {
        match direction {
            Direction::Row => Self::Horizontal,
            Direction::Column => Self::Vertical,
        }
    }

    fn main(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    fn cross(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    fn main_start(self, rect: Rect) -> f32 {
        match self {
            Self::Horizontal => rect.x,
            Self::Vertical => rect.y,
        }
    }

    fn cross_start(self, rect: Rect) -> f32 {
        match self {
            Self::Horizontal => rect.y,
            Self::Vertical => rect.x,
        }
    }

    /// Leading and trailing margins along this axis.
    fn main_margins(self, margin: Margin) -> (f32, f32) {
        match self {
            Self::Horizontal => (margin.left, margin.right),
            Self::Vertical => (margin.top, margin.bottom),
        }
    }

    fn cross_margins(self, margin: Margin) -> (f32, f32) {
        match self {
            Self::Horizontal => (margin.top, margin.bottom),
            Self::Vertical => (margin.left, margin.right),
        }
    }

    fn rect(self, main_pos: f32, cross_pos: f32, main_size: f32, cross_size: f32) -> Rect {
        match self {
            Self::Horizontal => Rect::new(main_pos, cross_pos, main_size, cross_size),
            Self::Vertical => Rect::new(cross_pos, main_pos, cross_size, main_size),
        }
    }
}

/// A flow child measured along the container's axes.
#[derive(Debug, Clone, Copy)]
struct FlexItem {
    /// Position among the container's children.
    index: usize,
    base: f32,
    cross: f32,
    main_margin: (f32, f32),
    cross_margin: (f32, f32),
    grow: f32,
}

impl FlexItem {
    fn new(index: usize, style: &LayoutStyle, axis: Axis) -> Self {
        let size = Size::new(style.width, style.height).clamped();
        let margin = style.margin.clamped();
        Self {
            index,
            base: axis.main(size),
            cross: axis.cross(size),
            main_margin: axis.main_margins(margin),
            cross_margin: axis.cross_margins(margin),
            grow: non_negative(style.grow),
        }
    }

    fn outer_main(&self) -> f32 {
        self.base + self.main_margin.0 + self.main_margin.1
    }

    fn outer_cross(&self) -> f32 {
        self.cross + self.cross_margin.0 + self.cross_margin.1
    }
}

/// A run of items `[start, end)` sharing one cross-axis band.
#[derive(Debug, Clone, Copy)]
struct FlexLine {
    start: usize,
    end: usize,
    cross_size: f32,
}

impl FlexLine {
    fn measured(start: usize, end: usize, items: &[FlexItem]) -> Self {
        let cross_size = items[start..end]
            .iter()
            .map(FlexItem::outer_cross)
            .fold(0.0_f32, f32::max);
        Self { start, end, cross_size }
    }
}

/// Computes the rectangle of every child of a container whose rectangle is `content`.
///
/// Hidden children get `Rect::ZERO`.
fn arrange_children(style: &LayoutStyle, content: Rect, children: &[Node]) -> Vec<Rect> {
    let axis = Axis::of(style.direction);
    let mut rects = vec![Rect::ZERO; children.len()];
    let mut items = Vec::with_capacity(children.len());

    for (index, child) in children.iter().enumerate() {
        let child_style = child.style();
        if child_style.display == Display::None {
            continue;
        }
        match child_style.position {
            Position::Absolute => rects[index] = absolute_rect(child_style, content),
            Position::Flow => items.push(FlexItem::new(index, child_style, axis)),
        }
    }

    if items.is_empty() {
        return rects;
    }

    let main_available = axis.main(content.size());
    let cross_available = axis.cross(content.size());

    let (lines, line_offsets) = match style.wrap {
        Wrap::NoWrap => (
            vec![FlexLine {
                start: 0,
                end: items.len(),
                cross_size: cross_available,
            }],
            vec![0.0],
        ),
        Wrap::Wrap => {
            let mut lines = break_lines(&items, main_available);
            let offsets = align_lines(&mut lines, cross_available, style.align_content);
            (lines, offsets)
        }
    };

    let main_origin = axis.main_start(content);
    let cross_origin = axis.cross_start(content);

    for (line, offset) in lines.iter().zip(line_offsets) {
        let line_items = &items[line.start..line.end];
        let placements = distribute_main(line_items, main_available, style.justify);

        for (item, (main_pos, main_size)) in line_items.iter().zip(placements) {
            let (cross_pos, cross_size) =
                place_cross(item, cross_origin + offset, line.cross_size, style.align_items);
            rects[item.index] = axis.rect(main_origin + main_pos, cross_pos, main_size, cross_size);
        }
    }

    rects
}

/// Breaks items into lines no longer than `available` along the main axis.
///
/// A line always holds at least one item, even if that item alone overflows.
fn break_lines(items: &[FlexItem], available: f32) -> Vec<FlexLine> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0.0;

    for (k, item) in items.iter().enumerate() {
        let outer = item.outer_main();
        if k > start && used + outer > available {
            lines.push(FlexLine::measured(start, k, items));
            start = k;
            used = 0.0;
        }
        used += outer;
    }
    lines.push(FlexLine::measured(start, items.len(), items));

    lines
}

/// Positions lines along the cross axis, returning each line's offset from the
/// container's cross start. `Stretch` grows the lines themselves.
fn align_lines(lines: &mut [FlexLine], available: f32, align: AlignContent) -> Vec<f32> {
    let used: f32 = lines.iter().map(|line| line.cross_size).sum();
    let free = non_negative(available - used);

    let start = match align {
        AlignContent::Start | AlignContent::Stretch => 0.0,
        AlignContent::End => free,
        AlignContent::Center => free * 0.5,
    };

    if align == AlignContent::Stretch && !lines.is_empty() {
        let extra = free / lines.len() as f32;
        for line in lines.iter_mut() {
            line.cross_size += extra;
        }
    }

    let mut cursor = start;
    lines
        .iter()
        .map(|line| {
            let offset = cursor;
            cursor += line.cross_size;
            offset
        })
        .collect()
}

/// Final main-axis sizes after growth, plus whether any leftover was consumed.
fn grow_sizes(items: &[FlexItem], leftover: f32) -> (Vec<f32>, bool) {
    let mut sizes: Vec<f32> = items.iter().map(|item| item.base).collect();
    let total_grow: f32 = items.iter().map(|item| item.grow).sum();

    if leftover <= 0.0 || total_grow <= 0.0 {
        return (sizes, false);
    }

    // The last growing item takes the rounding remainder so the extras sum to `leftover`.
    let last_grower = items.iter().rposition(|item| item.grow > 0.0);
    let mut handed_out = 0.0;
    for (k, item) in items.iter().enumerate() {
        if item.grow <= 0.0 {
            continue;
        }
        let extra = if Some(k) == last_grower {
            non_negative(leftover - handed_out)
        } else {
            leftover * item.grow / total_grow
        };
        handed_out += extra;
        sizes[k] += extra;
    }

    (sizes, true)
}

/// Main-axis `(position, size)` of each item, relative to the container's main start.
fn distribute_main(items: &[FlexItem], available: f32, justify: Justify) -> Vec<(f32, f32)> {
    let used: f32 = items.iter().map(FlexItem::outer_main).sum();
    let leftover = non_negative(available - used);
    let (sizes, grown) = grow_sizes(items, leftover);

    let free = if grown { 0.0 } else { leftover };
    let count = items.len() as f32;
    let (mut cursor, gap) = match justify {
        Justify::Start => (0.0, 0.0),
        Justify::End => (free, 0.0),
        Justify::Center => (free * 0.5, 0.0),
        Justify::SpaceBetween if items.len() > 1 => (0.0, free / (count - 1.0)),
        Justify::SpaceBetween => (0.0, 0.0),
        Justify::SpaceAround => (free / (2.0 * count), free / count),
    };

    items
        .iter()
        .zip(sizes)
        .map(|(item, size)| {
            let (lead, trail) = item.main_margin;
            let position = cursor + lead;
            cursor = position + size + trail + gap;
            (position, size)
        })
        .collect()
}

/// Cross-axis `(position, size)` of an item inside a line starting at `line_start`.
fn place_cross(item: &FlexItem, line_start: f32, line_size: f32, align: AlignItems) -> (f32, f32) {
    let (lead, trail) = item.cross_margin;
    let room = non_negative(line_size - lead - trail);
    let size = if align == AlignItems::Stretch && item.cross <= 0.0 {
        room
    } else {
        item.cross
    };

    let offset = match align {
        AlignItems::Start | AlignItems::Stretch => lead,
        AlignItems::End => line_size - trail - size,
        AlignItems::Center => lead + (room - size) * 0.5,
    };

    (line_start + offset, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(width: f32, height: f32) -> Node {
        Node::new().size(width, height)
    }

    #[test]
    fn test_column_growth_splits_evenly() {
        let root = Node::new()
            .size(480.0, 640.0)
            .direction(Direction::Column)
            .child(Node::new().grow(1.0))
            .child(Node::new().grow(1.0));

        let layout = compute_layout(&root, 480.0, 640.0);

        assert_eq!(layout.get(1), Some(Rect::new(0.0, 0.0, 480.0, 320.0)));
        assert_eq!(layout.get(2), Some(Rect::new(0.0, 320.0, 480.0, 320.0)));
    }

    #[test]
    fn test_row_center_justify() {
        let root = Node::new()
            .size(300.0, 100.0)
            .justify(Justify::Center)
            .align_items(AlignItems::Start)
            .children((0..3).map(|_| fixed(50.0, 20.0)));

        let layout = compute_layout(&root, 300.0, 100.0);

        assert_eq!(layout.get(1).map(|r| r.x), Some(75.0));
        assert_eq!(layout.get(2).map(|r| r.x), Some(125.0));
        assert_eq!(layout.get(3).map(|r| r.right()), Some(225.0));
    }

    #[test]
    fn test_justify_end_packs_from_end() {
        let root = Node::new()
            .size(200.0, 50.0)
            .justify(Justify::End)
            .child(fixed(40.0, 10.0).margin_right(10.0));

        let layout = compute_layout(&root, 200.0, 50.0);

        assert_eq!(layout.get(1).map(|r| r.x), Some(150.0));
    }

    #[test]
    fn test_space_between_single_child_acts_as_start() {
        let root = Node::new()
            .size(200.0, 50.0)
            .justify(Justify::SpaceBetween)
            .child(fixed(40.0, 10.0));

        let layout = compute_layout(&root, 200.0, 50.0);

        assert_eq!(layout.get(1).map(|r| r.x), Some(0.0));
    }

    #[test]
    fn test_space_around() {
        let root = Node::new()
            .size(120.0, 10.0)
            .justify(Justify::SpaceAround)
            .child(fixed(20.0, 10.0))
            .child(fixed(20.0, 10.0));

        let layout = compute_layout(&root, 120.0, 10.0);

        // 80 free, 20 around each child: 20 | child | 40 | child | 20
        assert_eq!(layout.get(1).map(|r| r.x), Some(20.0));
        assert_eq!(layout.get(2).map(|r| r.x), Some(80.0));
    }

    #[test]
    fn test_stretch_only_applies_to_auto_cross_size() {
        let root = Node::new()
            .size(100.0, 80.0)
            .align_items(AlignItems::Stretch)
            .child(Node::new().width(10.0).margin(Margin::new(5.0, 0.0, 5.0, 0.0)))
            .child(fixed(10.0, 30.0));

        let layout = compute_layout(&root, 100.0, 80.0);

        assert_eq!(layout.get(1), Some(Rect::new(0.0, 5.0, 10.0, 70.0)));
        assert_eq!(layout.get(2), Some(Rect::new(10.0, 0.0, 10.0, 30.0)));
    }

    #[test]
    fn test_cross_alignment_end_and_center() {
        let root = Node::new()
            .size(100.0, 100.0)
            .direction(Direction::Column)
            .align_items(AlignItems::End)
            .child(fixed(20.0, 10.0));
        let layout = compute_layout(&root, 100.0, 100.0);
        assert_eq!(layout.get(1).map(|r| r.x), Some(80.0));

        let root = Node::new()
            .size(100.0, 100.0)
            .direction(Direction::Column)
            .align_items(AlignItems::Center)
            .child(fixed(20.0, 10.0));
        let layout = compute_layout(&root, 100.0, 100.0);
        assert_eq!(layout.get(1).map(|r| r.x), Some(40.0));
    }

    #[test]
    fn test_absolute_child_ignores_flow() {
        let root = Node::new()
            .size(300.0, 300.0)
            .margin(Margin::new(10.0, 0.0, 0.0, 20.0))
            .child(fixed(100.0, 100.0))
            .child(Node::new().absolute(296.0, 4.0).size(20.0, 20.0))
            .child(fixed(100.0, 100.0));

        let layout = compute_layout(&root, 800.0, 600.0);

        assert_eq!(layout.get(2), Some(Rect::new(316.0, 14.0, 20.0, 20.0)));
        // The absolute sibling does not push the flow child along.
        assert_eq!(layout.get(3).map(|r| r.x), Some(120.0));
    }

    #[test]
    fn test_overflow_overlaps_instead_of_failing() {
        let root = Node::new()
            .size(100.0, 10.0)
            .justify(Justify::Center)
            .child(fixed(80.0, 10.0))
            .child(fixed(80.0, 10.0).grow(1.0));

        let layout = compute_layout(&root, 100.0, 10.0);

        assert_eq!(layout.get(1).map(|r| r.x), Some(0.0));
        assert_eq!(layout.get(2), Some(Rect::new(80.0, 0.0, 80.0, 10.0)));
    }

    #[test]
    fn test_wrap_breaks_lines() {
        let root = Node::new()
            .size(100.0, 100.0)
            .wrap(Wrap::Wrap)
            .align_items(AlignItems::Start)
            .children((0..3).map(|_| fixed(40.0, 20.0)));

        let layout = compute_layout(&root, 100.0, 100.0);

        assert_eq!(layout.get(1), Some(Rect::new(0.0, 0.0, 40.0, 20.0)));
        assert_eq!(layout.get(2), Some(Rect::new(40.0, 0.0, 40.0, 20.0)));
        assert_eq!(layout.get(3), Some(Rect::new(0.0, 20.0, 40.0, 20.0)));
    }

    #[test]
    fn test_align_content_positions_lines() {
        let build = |align| {
            Node::new()
                .size(100.0, 100.0)
                .wrap(Wrap::Wrap)
                .align_content(align)
                .align_items(AlignItems::Start)
                .children((0..2).map(|_| fixed(60.0, 20.0)))
        };

        let end = compute_layout(&build(AlignContent::End), 100.0, 100.0);
        assert_eq!(end.get(1).map(|r| r.y), Some(60.0));
        assert_eq!(end.get(2).map(|r| r.y), Some(80.0));

        let center = compute_layout(&build(AlignContent::Center), 100.0, 100.0);
        assert_eq!(center.get(1).map(|r| r.y), Some(30.0));

        let stretch = compute_layout(&build(AlignContent::Stretch), 100.0, 100.0);
        // Each line grows from 20 to 50.
        assert_eq!(stretch.get(2).map(|r| r.y), Some(50.0));
    }

    #[test]
    fn test_hidden_subtree_keeps_indices() {
        let root = Node::new()
            .size(100.0, 100.0)
            .child(fixed(30.0, 30.0).display(Display::None).child(fixed(5.0, 5.0)))
            .child(fixed(30.0, 30.0));

        let layout = compute_layout(&root, 100.0, 100.0);

        assert_eq!(layout.len(), 4);
        assert_eq!(layout.get(1), Some(Rect::ZERO));
        assert_eq!(layout.get(2), Some(Rect::ZERO));
        // Hidden nodes take no flow space.
        assert_eq!(layout.get(3).map(|r| r.x), Some(0.0));
    }

    #[test]
    fn test_root_fills_viewport_and_clamps() {
        let root = Node::new().margin(Margin::all(10.0));
        let layout = compute_layout(&root, 200.0, 100.0);
        assert_eq!(layout.root(), Some(Rect::new(10.0, 10.0, 180.0, 80.0)));

        let layout = compute_layout(&root, -50.0, f32::NAN);
        let rect = layout.root().unwrap_or_default();
        assert!(rect.width >= 0.0 && rect.height >= 0.0);
    }

    #[test]
    fn test_index_of_follows_spans() {
        let root = Node::new()
            .child(Node::new().child(Node::new()).child(Node::new()))
            .child(Node::new());

        let layout = compute_layout(&root, 10.0, 10.0);

        assert_eq!(layout.index_of(&[]), Some(0));
        assert_eq!(layout.index_of(&[0, 1]), Some(3));
        assert_eq!(layout.index_of(&[1]), Some(4));
        assert_eq!(layout.index_of(&[2]), None);
        assert_eq!(layout.index_of(&[1, 0]), None);
        assert_eq!(layout.span(1), 3);
    }
}
