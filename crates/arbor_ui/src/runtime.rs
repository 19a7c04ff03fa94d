//! Frame driver: owns the tree, recomputes layout and dispatches to handlers.
//!
//! A frame is `update` followed by `draw`. `update` lays the tree out against
//! the current viewport, routes pointer events, then calls every visible
//! handler in pre-order. `draw` paints in the same order, parents first.

use parking_lot::Once;
use tracing::{debug, trace, warn};

use crate::config::UiConfig;
use crate::error::UiResult;
use crate::geometry::{non_negative, Rect, Size};
use crate::handler::Tick;
use crate::input::InputState;
use crate::layout::{compute_layout, Layout};
use crate::node::Node;
use crate::pointer::{PointerOutcome, PointerTracker};
use crate::render::DrawList;

/// Builds the root once the first viewport size is known.
pub type SetupFn = Box<dyn FnOnce(Size) -> Node>;

/// Calls `update` on every visible handler in pre-order.
///
/// Hidden subtrees are skipped entirely. `layout` must come from `root`.
pub fn update_tree(root: &mut Node, layout: &Layout, tick: Tick, input: &InputState) {
    update_walk(root, layout, 0, tick, input);
}

fn update_walk(node: &mut Node, layout: &Layout, index: usize, tick: Tick, input: &InputState) {
    if !node.is_visible() {
        return;
    }
    let Some(rect) = layout.get(index) else {
        return;
    };
    if let Some(handler) = node.handler_mut() {
        handler.update(rect, tick, input);
    }

    let mut child_index = index + 1;
    for child in node.child_nodes_mut() {
        update_walk(child, layout, child_index, tick, input);
        child_index += layout.span(child_index).max(1);
    }
}

/// Calls `draw` on every visible handler in pre-order.
pub fn draw_tree(root: &Node, layout: &Layout, surface: &mut DrawList) {
    draw_walk(root, layout, 0, surface);
}

fn draw_walk(node: &Node, layout: &Layout, index: usize, surface: &mut DrawList) {
    if !node.is_visible() {
        return;
    }
    let Some(rect) = layout.get(index) else {
        return;
    };
    if let Some(handler) = node.handler_ref() {
        handler.draw(rect, surface);
    }

    let mut child_index = index + 1;
    for child in node.child_nodes() {
        draw_walk(child, layout, child_index, surface);
        child_index += layout.span(child_index).max(1);
    }
}

/// A UI instance: one tree, one viewport, one pointer.
pub struct Ui {
    config: UiConfig,
    viewport: Size,
    root: Option<Node>,
    setup: Option<SetupFn>,
    setup_gate: Once,
    layout: Layout,
    layout_dirty: bool,
    tree_unchecked: bool,
    pointer: PointerTracker,
    frames: u64,
    elapsed: f32,
}

impl std::fmt::Debug for Ui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ui")
            .field("viewport", &self.viewport)
            .field("nodes", &self.layout.len())
            .field("initialized", &self.is_initialized())
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl Ui {
    /// Creates a UI with no tree.
    #[must_use]
    pub fn new(config: UiConfig) -> Self {
        let pointer = PointerTracker::new(config.click_button, config.drag_cancel);
        Self {
            config,
            viewport: Size::ZERO,
            root: None,
            setup: None,
            setup_gate: Once::new(),
            layout: Layout::default(),
            layout_dirty: true,
            tree_unchecked: false,
            pointer,
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Creates a UI around an existing tree.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::InvalidTree`] if `root` fails validation.
    pub fn with_root(config: UiConfig, root: Node) -> UiResult<Self> {
        let mut ui = Self::new(config);
        ui.set_root(root)?;
        Ok(ui)
    }

    /// Creates a UI whose tree is built by `setup` on the first `update`.
    ///
    /// `setup` receives the viewport at that moment and runs exactly once,
    /// even if the tree it returns is rejected.
    #[must_use]
    pub fn deferred(config: UiConfig, setup: impl FnOnce(Size) -> Node + 'static) -> Self {
        let mut ui = Self::new(config);
        ui.setup = Some(Box::new(setup));
        ui
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport. Negative or non-finite sizes clamp to zero.
    ///
    /// Returns the size actually applied.
    pub fn resize(&mut self, width: f32, height: f32) -> Size {
        let size = Size::new(width, height).clamped();
        if size != self.viewport {
            debug!(width = size.width, height = size.height, "viewport resized");
            self.viewport = size;
            self.layout_dirty = true;
        }
        size
    }

    /// Whether deferred setup has run (or there was none to run).
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.setup_gate.state().done()
    }

    /// Installs a new tree, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::InvalidTree`] if `root` fails validation; the
    /// current tree is kept in that case.
    pub fn set_root(&mut self, root: Node) -> UiResult<()> {
        if let Err(err) = root.validate(self.config.max_depth) {
            warn!(%err, "rejected ui tree");
            return Err(err);
        }
        debug!(nodes = root.subtree_len(), "ui tree installed");
        self.root = Some(root);
        self.tree_unchecked = false;
        self.tree_changed();
        Ok(())
    }

    /// Removes and returns the tree.
    pub fn take_root(&mut self) -> Option<Node> {
        let root = self.root.take();
        self.tree_unchecked = false;
        self.tree_changed();
        root
    }

    /// The tree, if one is installed.
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Mutable access to the tree.
    ///
    /// The layout is recomputed before the next draw and any in-flight press
    /// or hover is dropped, since paths may no longer point at the same nodes.
    /// The edited tree is validated again by the next layout pass.
    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.tree_unchecked = true;
        self.tree_changed();
        self.root.as_mut()
    }

    /// Layout from the most recent pass.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Rectangle of the node with identifier `id` in the most recent layout.
    #[must_use]
    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        let path = self.root.as_ref()?.find_path(id)?;
        self.layout.rect_at(&path)
    }

    /// Pointer state between frames.
    #[must_use]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Number of completed `update` calls.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Recomputes the layout against the current viewport.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::InvalidTree`] if edits made through
    /// [`Ui::root_mut`] broke the depth bound or made ids collide. The layout
    /// is left empty until the tree is fixed or replaced.
    pub fn relayout(&mut self) -> UiResult<()> {
        if self.tree_unchecked {
            if let Some(root) = &self.root {
                if let Err(err) = root.validate(self.config.max_depth) {
                    warn!(%err, "edited ui tree is invalid");
                    self.layout = Layout::default();
                    return Err(err);
                }
            }
            self.tree_unchecked = false;
        }

        self.layout = match &self.root {
            Some(root) => compute_layout(root, self.viewport.width, self.viewport.height),
            None => Layout::default(),
        };
        self.layout_dirty = false;
        if self.config.trace_layout {
            trace!(
                nodes = self.layout.len(),
                width = self.viewport.width,
                height = self.viewport.height,
                "layout pass"
            );
        }
        Ok(())
    }

    /// Runs one frame of logic.
    ///
    /// Deferred setup runs first if it has not yet, then layout, pointer
    /// dispatch and the pre-order handler update.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::InvalidTree`] if deferred setup produced a tree
    /// that fails validation. Setup is not retried; later updates run with no
    /// tree until one is installed with [`Ui::set_root`]. The same error is
    /// returned, every frame, while an edit through [`Ui::root_mut`] leaves the
    /// tree invalid.
    pub fn update(&mut self, input: &InputState, dt: f32) -> UiResult<PointerOutcome> {
        self.run_setup()?;
        self.relayout()?;

        let dt = non_negative(dt);
        self.elapsed += dt;
        let tick = Tick {
            frame: self.frames,
            dt,
            elapsed: self.elapsed,
        };
        self.frames += 1;

        let Some(root) = self.root.as_mut() else {
            return Ok(PointerOutcome::default());
        };
        let outcome = self.pointer.dispatch(root, &self.layout, input);
        if let Some(path) = &outcome.clicked {
            debug!(?path, "click");
        }
        update_tree(root, &self.layout, tick, input);
        Ok(outcome)
    }

    /// Paints the tree into `surface`. An invalid edited tree paints nothing.
    pub fn draw(&mut self, surface: &mut DrawList) {
        if self.layout_dirty && self.relayout().is_err() {
            return;
        }
        if let Some(root) = &self.root {
            draw_tree(root, &self.layout, surface);
        }
    }

    fn run_setup(&mut self) -> UiResult<()> {
        if self.setup_gate.state().done() {
            return Ok(());
        }

        let viewport = self.viewport;
        let max_depth = self.config.max_depth;
        let setup = &mut self.setup;
        let root = &mut self.root;
        let mut result = Ok(());

        self.setup_gate.call_once(|| {
            let Some(build) = setup.take() else {
                return;
            };
            let tree = build(viewport);
            match tree.validate(max_depth) {
                Ok(()) => {
                    debug!(
                        nodes = tree.subtree_len(),
                        width = viewport.width,
                        height = viewport.height,
                        "deferred ui setup complete"
                    );
                    *root = Some(tree);
                }
                Err(err) => {
                    warn!(%err, "deferred ui setup produced an invalid tree");
                    result = Err(err);
                }
            }
        });

        self.tree_changed();
        result
    }

    fn tree_changed(&mut self) {
        self.layout_dirty = true;
        self.pointer.reset();
    }
}
