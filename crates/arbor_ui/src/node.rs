//! Retained UI tree.
//!
//! A [`Node`] owns its children exclusively: attaching moves the child into its
//! parent, so a node can never become its own descendant. Construction is
//! fluent:
//!
//! ```
//! use arbor_ui::{Direction, Justify, Node};
//!
//! let hud = Node::new()
//!     .direction(Direction::Column)
//!     .justify(Justify::SpaceBetween)
//!     .child(Node::new().grow(1.0))
//!     .child(Node::new().id("bottom-row").height(140.0));
//!
//! assert_eq!(hud.subtree_len(), 3);
//! assert!(hud.find("bottom-row").is_some());
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::error::{UiError, UiResult};
use crate::geometry::Margin;
use crate::handler::Handler;
use crate::layout::{AlignContent, AlignItems, Direction, Display, Justify, LayoutStyle, Position, Wrap};

/// Default bound on tree depth accepted by [`Node::validate`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A node of the UI tree.
#[derive(Default)]
pub struct Node {
    style: LayoutStyle,
    id: Option<String>,
    handler: Option<Box<dyn Handler>>,
    children: Vec<Node>,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("style", &self.style)
            .field("handler", &self.handler.is_some())
            .field("children", &self.children)
            .finish()
    }
}

impl Node {
    /// Creates a node with default directives: auto size, row direction, stretch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node from a complete set of directives.
    #[must_use]
    pub fn with_style(style: LayoutStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Directives
    // ------------------------------------------------------------------

    /// Sets both fixed dimensions.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.style.width = width;
        self.style.height = height;
        self
    }

    /// Sets the fixed width (0 = auto).
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.style.width = width;
        self
    }

    /// Sets the fixed height (0 = auto).
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.style.height = height;
        self
    }

    /// Sets all four margins.
    #[must_use]
    pub fn margin(mut self, margin: Margin) -> Self {
        self.style.margin = margin;
        self
    }

    /// Sets the top margin.
    #[must_use]
    pub fn margin_top(mut self, value: f32) -> Self {
        self.style.margin.top = value;
        self
    }

    /// Sets the right margin.
    #[must_use]
    pub fn margin_right(mut self, value: f32) -> Self {
        self.style.margin.right = value;
        self
    }

    /// Sets the bottom margin.
    #[must_use]
    pub fn margin_bottom(mut self, value: f32) -> Self {
        self.style.margin.bottom = value;
        self
    }

    /// Sets the left margin.
    #[must_use]
    pub fn margin_left(mut self, value: f32) -> Self {
        self.style.margin.left = value;
        self
    }

    /// Sets the main axis for children.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.style.direction = direction;
        self
    }

    /// Sets main-axis justification.
    #[must_use]
    pub fn justify(mut self, justify: Justify) -> Self {
        self.style.justify = justify;
        self
    }

    /// Sets cross-axis alignment of children.
    #[must_use]
    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.style.align_items = align;
        self
    }

    /// Sets cross-axis alignment of wrapped lines.
    #[must_use]
    pub fn align_content(mut self, align: AlignContent) -> Self {
        self.style.align_content = align;
        self
    }

    /// Sets line wrapping.
    #[must_use]
    pub fn wrap(mut self, wrap: Wrap) -> Self {
        self.style.wrap = wrap;
        self
    }

    /// Sets the growth factor.
    #[must_use]
    pub fn grow(mut self, grow: f32) -> Self {
        self.style.grow = grow;
        self
    }

    /// Positions the node absolutely at `(left, top)` inside its parent.
    #[must_use]
    pub fn absolute(mut self, left: f32, top: f32) -> Self {
        self.style.position = Position::Absolute;
        self.style.left = left;
        self.style.top = top;
        self
    }

    /// Sets the display mode.
    #[must_use]
    pub fn display(mut self, display: Display) -> Self {
        self.style.display = display;
        self
    }

    /// Sets the lookup identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attaches a handler.
    #[must_use]
    pub fn handler(self, handler: impl Handler + 'static) -> Self {
        self.boxed_handler(Box::new(handler))
    }

    /// Attaches an already boxed handler.
    #[must_use]
    pub fn boxed_handler(mut self, handler: Box<dyn Handler>) -> Self {
        self.handler = Some(handler);
        self
    }

    // ------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Appends children in order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends a child to a node held by reference.
    pub fn push_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Appends `child` to the descendant at `parent_path`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidTree`] if no node exists at `parent_path`; the
    /// tree is left untouched.
    pub fn insert_at(&mut self, parent_path: &[usize], child: Node) -> UiResult<()> {
        let parent = self
            .descendant_mut(parent_path)
            .ok_or_else(|| UiError::InvalidTree(format!("no node at path {parent_path:?}")))?;
        parent.children.push(child);
        Ok(())
    }

    /// Detaches and returns the child at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidTree`] if `index` is out of range.
    pub fn remove_child(&mut self, index: usize) -> UiResult<Node> {
        if index >= self.children.len() {
            return Err(UiError::InvalidTree(format!(
                "child index {index} out of range ({} children)",
                self.children.len()
            )));
        }
        Ok(self.children.remove(index))
    }

    /// Detaches and returns all children.
    pub fn clear_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Layout directives.
    #[must_use]
    pub fn style(&self) -> &LayoutStyle {
        &self.style
    }

    /// Mutable layout directives.
    pub fn style_mut(&mut self) -> &mut LayoutStyle {
        &mut self.style
    }

    /// Lookup identifier, if any.
    #[must_use]
    pub fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The attached handler, if any.
    #[must_use]
    pub fn handler_ref(&self) -> Option<&dyn Handler> {
        self.handler.as_deref()
    }

    /// Mutable access to the attached handler.
    pub fn handler_mut(&mut self) -> Option<&mut (dyn Handler + 'static)> {
        self.handler.as_deref_mut()
    }

    /// Children in order.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Mutable children in order. The slice cannot grow or shrink.
    pub fn child_nodes_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True unless the node is hidden with [`Display::None`].
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.style.display != Display::None
    }

    /// Number of nodes in this subtree, this node included.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// The node reached by following child indices.
    #[must_use]
    pub fn descendant(&self, path: &[usize]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Mutable variant of [`Node::descendant`].
    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }

    /// Path of the first node (pre-order) carrying `id`.
    #[must_use]
    pub fn find_path(&self, id: &str) -> Option<Vec<usize>> {
        let mut stack: Vec<(&Node, Vec<usize>)> = vec![(self, Vec::new())];
        while let Some((node, path)) = stack.pop() {
            if node.id.as_deref() == Some(id) {
                return Some(path);
            }
            for (index, child) in node.children.iter().enumerate().rev() {
                let mut child_path = path.clone();
                child_path.push(index);
                stack.push((child, child_path));
            }
        }
        None
    }

    /// The first node (pre-order) carrying `id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Node> {
        let path = self.find_path(id)?;
        self.descendant(&path)
    }

    /// Mutable variant of [`Node::find`].
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        let path = self.find_path(id)?;
        self.descendant_mut(&path)
    }

    /// Checks the structural rules the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidTree`] if the tree is deeper than `max_depth`
    /// or if two nodes share an identifier.
    pub fn validate(&self, max_depth: usize) -> UiResult<()> {
        let depth = self.depth();
        if depth > max_depth {
            return Err(UiError::InvalidTree(format!(
                "tree depth {depth} exceeds limit {max_depth}"
            )));
        }

        let mut seen = HashSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Some(id) = node.id.as_deref() {
                if !seen.insert(id) {
                    return Err(UiError::InvalidTree(format!("duplicate node id {id:?}")));
                }
            }
            stack.extend(node.children.iter());
        }

        Ok(())
    }
}
