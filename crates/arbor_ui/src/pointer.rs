//! Hit testing and press/release/click recognition.
//!
//! Only nodes whose handler opts in with [`Handler::handles_pointer`] are
//! candidates. When several overlap, the one painted last wins: the last match
//! in pre-order, so later siblings beat earlier ones and descendants (including
//! absolute overlays) beat their ancestors.

use crate::geometry::Rect;
use crate::handler::Handler;
use crate::input::{InputState, MouseButton};
use crate::layout::Layout;
use crate::node::Node;

/// Child indices leading from the root to a node.
pub type NodePath = Vec<usize>;

/// Returns the path of the topmost pointer-aware node containing `(x, y)`.
#[must_use]
pub fn hit_test(root: &Node, layout: &Layout, x: f32, y: f32) -> Option<NodePath> {
    let mut best = None;
    let mut path = Vec::new();
    hit_walk(root, layout, 0, &mut path, (x, y), &mut best);
    best
}

fn hit_walk(
    node: &Node,
    layout: &Layout,
    index: usize,
    path: &mut NodePath,
    point: (f32, f32),
    best: &mut Option<NodePath>,
) {
    if !node.is_visible() {
        return;
    }

    if let (Some(handler), Some(rect)) = (node.handler_ref(), layout.get(index)) {
        if handler.handles_pointer() && rect.contains(point.0, point.1) {
            *best = Some(path.clone());
        }
    }

    let mut child_index = index + 1;
    for (position, child) in node.child_nodes().iter().enumerate() {
        path.push(position);
        hit_walk(child, layout, child_index, path, point, best);
        path.pop();
        child_index += layout.span(child_index).max(1);
    }
}

/// Invokes `f` on the handler at `path` with its current rectangle.
fn notify<F>(root: &mut Node, layout: &Layout, path: &[usize], f: F)
where
    F: FnOnce(&mut dyn Handler, Rect),
{
    let Some(rect) = layout.rect_at(path) else {
        return;
    };
    if let Some(handler) = root.descendant_mut(path).and_then(Node::handler_mut) {
        f(handler, rect);
    }
}

/// Pointer events dispatched during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerOutcome {
    /// Node that received a press.
    pub pressed: Option<NodePath>,
    /// Node that received a release, completed or cancelled.
    pub released: Option<NodePath>,
    /// Node that received a click.
    pub clicked: Option<NodePath>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Press {
    path: NodePath,
    cancelled: bool,
}

/// Tracks press, hover and drag-cancel state across frames.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    button: MouseButton,
    drag_cancel: bool,
    press: Option<Press>,
    hovered: Option<NodePath>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(MouseButton::Left, true)
    }
}

impl PointerTracker {
    /// Creates a tracker for `button`.
    #[must_use]
    pub fn new(button: MouseButton, drag_cancel: bool) -> Self {
        Self {
            button,
            drag_cancel,
            press: None,
            hovered: None,
        }
    }

    /// Forgets press and hover state, e.g. after the tree changed shape.
    pub fn reset(&mut self) {
        self.press = None;
        self.hovered = None;
    }

    /// Path of the node currently under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&[usize]> {
        self.hovered.as_deref()
    }

    /// Path of the node holding an unreleased press, if any.
    #[must_use]
    pub fn pressed(&self) -> Option<&[usize]> {
        self.press.as_ref().map(|press| press.path.as_slice())
    }

    /// Dispatches this frame's hover, press, release and click events.
    pub fn dispatch(&mut self, root: &mut Node, layout: &Layout, input: &InputState) -> PointerOutcome {
        let mut outcome = PointerOutcome::default();
        let (x, y) = input.pointer();
        let target = hit_test(root, layout, x, y);

        if target != self.hovered {
            if let Some(old) = self.hovered.take() {
                notify(root, layout, &old, |handler, rect| handler.on_hover(rect, false));
            }
            if let Some(new) = &target {
                notify(root, layout, new, |handler, rect| handler.on_hover(rect, true));
            }
            self.hovered.clone_from(&target);
        }

        let pressed = input.just_pressed(self.button);
        let released = input.just_released(self.button);
        let down = input.is_down(self.button);
        // Both edges with the button held: it went up before going down again.
        let up_first = pressed && released && down;

        if up_first {
            self.track_drag(layout, x, y);
            self.end_press(root, layout, target.as_deref(), (x, y), &mut outcome);
        }
        if pressed {
            self.begin_press(root, layout, target.as_ref(), (x, y), &mut outcome);
        }
        if !up_first {
            self.track_drag(layout, x, y);
            let stale = self.press.is_some() && !down && !pressed;
            if released || stale {
                self.end_press(root, layout, target.as_deref(), (x, y), &mut outcome);
            }
        }

        outcome
    }

    fn begin_press(
        &mut self,
        root: &mut Node,
        layout: &Layout,
        target: Option<&NodePath>,
        (x, y): (f32, f32),
        outcome: &mut PointerOutcome,
    ) {
        // A press without a seen release abandons the earlier one.
        if let Some(stale) = self.press.take() {
            notify(root, layout, &stale.path, |handler, rect| {
                handler.on_release(rect, x, y, true);
            });
        }
        if let Some(path) = target {
            notify(root, layout, path, |handler, rect| handler.on_press(rect, x, y));
            self.press = Some(Press {
                path: path.clone(),
                cancelled: false,
            });
            outcome.pressed = Some(path.clone());
        }
    }

    fn track_drag(&mut self, layout: &Layout, x: f32, y: f32) {
        if !self.drag_cancel {
            return;
        }
        if let Some(press) = &mut self.press {
            let inside = layout
                .rect_at(&press.path)
                .is_some_and(|rect| rect.contains(x, y));
            if !inside && !press.cancelled {
                tracing::trace!(path = ?press.path, "press cancelled by drag");
                press.cancelled = true;
            }
        }
    }

    fn end_press(
        &mut self,
        root: &mut Node,
        layout: &Layout,
        target: Option<&[usize]>,
        (x, y): (f32, f32),
        outcome: &mut PointerOutcome,
    ) {
        let Some(press) = self.press.take() else {
            return;
        };
        let completed = !press.cancelled && target == Some(press.path.as_slice());
        notify(root, layout, &press.path, |handler, rect| {
            handler.on_release(rect, x, y, !completed);
        });
        if completed {
            notify(root, layout, &press.path, |handler, rect| handler.on_click(rect));
            outcome.clicked = Some(press.path.clone());
        }
        outcome.released = Some(press.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Log(Rc<RefCell<Vec<String>>>);

    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        interactive: bool,
    }

    impl Handler for Probe {
        fn handles_pointer(&self) -> bool {
            self.interactive
        }
        fn on_press(&mut self, _rect: Rect, _x: f32, _y: f32) {
            self.log.borrow_mut().push(format!("{}:press", self.name));
        }
        fn on_release(&mut self, _rect: Rect, _x: f32, _y: f32, cancelled: bool) {
            self.log.borrow_mut().push(format!("{}:release:{cancelled}", self.name));
        }
        fn on_click(&mut self, _rect: Rect) {
            self.log.borrow_mut().push(format!("{}:click", self.name));
        }
        fn on_hover(&mut self, _rect: Rect, entered: bool) {
            self.log.borrow_mut().push(format!("{}:hover:{entered}", self.name));
        }
    }

    impl Log {
        fn probe(&self, name: &'static str, interactive: bool) -> Probe {
            Probe {
                name,
                log: Rc::clone(&self.0),
                interactive,
            }
        }

        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    /// Two 50x50 buttons side by side, plus a full-size overlay that ignores the pointer.
    fn scene(log: &Log) -> Node {
        Node::new()
            .size(100.0, 50.0)
            .align_items(crate::layout::AlignItems::Start)
            .child(Node::new().size(50.0, 50.0).handler(log.probe("a", true)))
            .child(Node::new().size(50.0, 50.0).handler(log.probe("b", true)))
            .child(Node::new().absolute(0.0, 0.0).size(100.0, 50.0).handler(log.probe("cursor", false)))
    }

    fn frame(tracker: &mut PointerTracker, root: &mut Node, input: &mut InputState) -> PointerOutcome {
        let layout = compute_layout(root, 100.0, 50.0);
        let outcome = tracker.dispatch(root, &layout, input);
        input.begin_frame();
        outcome
    }

    #[test]
    fn test_topmost_wins_and_passive_overlay_ignored() {
        let log = Log::default();
        let mut root = Node::new()
            .size(100.0, 100.0)
            .child(Node::new().size(100.0, 100.0).handler(log.probe("under", true)))
            .child(Node::new().absolute(10.0, 10.0).size(20.0, 20.0).handler(log.probe("over", true)))
            .child(Node::new().absolute(0.0, 0.0).size(100.0, 100.0).handler(log.probe("cursor", false)));
        let layout = compute_layout(&root, 100.0, 100.0);

        assert_eq!(hit_test(&root, &layout, 15.0, 15.0), Some(vec![1]));
        assert_eq!(hit_test(&root, &layout, 50.0, 50.0), Some(vec![0]));
        assert_eq!(hit_test(&root, &layout, 150.0, 50.0), None);

        root.child_nodes_mut()[1].style_mut().display = crate::layout::Display::None;
        let layout = compute_layout(&root, 100.0, 100.0);
        assert_eq!(hit_test(&root, &layout, 15.0, 15.0), Some(vec![0]));
    }

    #[test]
    fn test_click_on_same_node() {
        let log = Log::default();
        let mut root = scene(&log);
        let mut tracker = PointerTracker::default();
        let mut input = InputState::new();

        input.set_mouse_pos(10.0, 10.0);
        input.mouse_button_down(MouseButton::Left);
        let outcome = frame(&mut tracker, &mut root, &mut input);
        assert_eq!(outcome.pressed, Some(vec![0]));
        assert_eq!(tracker.pressed(), Some(&[0][..]));

        input.mouse_button_up(MouseButton::Left);
        let outcome = frame(&mut tracker, &mut root, &mut input);
        assert_eq!(outcome.clicked, Some(vec![0]));

        assert_eq!(
            log.take(),
            vec!["a:hover:true", "a:press", "a:release:false", "a:click"]
        );
    }

    #[test]
    fn test_release_elsewhere_cancels() {
        let log = Log::default();
        let mut root = scene(&log);
        let mut tracker = PointerTracker::default();
        let mut input = InputState::new();

        input.set_mouse_pos(10.0, 10.0);
        input.mouse_button_down(MouseButton::Left);
        frame(&mut tracker, &mut root, &mut input);

        input.set_mouse_pos(60.0, 10.0);
        input.mouse_button_up(MouseButton::Left);
        let outcome = frame(&mut tracker, &mut root, &mut input);

        assert_eq!(outcome.clicked, None);
        assert_eq!(outcome.released, Some(vec![0]));
        let events = log.take();
        assert!(events.contains(&"a:release:true".to_string()));
        assert!(!events.iter().any(|e| e.ends_with("click")));
    }

    #[test]
    fn test_drag_out_and_back_cancels() {
        let log = Log::default();
        let mut root = scene(&log);
        let mut tracker = PointerTracker::default();
        let mut input = InputState::new();

        input.set_mouse_pos(10.0, 10.0);
        input.mouse_button_down(MouseButton::Left);
        frame(&mut tracker, &mut root, &mut input);

        input.set_mouse_pos(70.0, 10.0);
        frame(&mut tracker, &mut root, &mut input);

        input.set_mouse_pos(10.0, 10.0);
        input.mouse_button_up(MouseButton::Left);
        let outcome = frame(&mut tracker, &mut root, &mut input);

        assert_eq!(outcome.clicked, None);
    }

    #[test]
    fn test_drag_back_clicks_without_drag_cancel() {
        let log = Log::default();
        let mut root = scene(&log);
        let mut tracker = PointerTracker::new(MouseButton::Left, false);
        let mut input = InputState::new();

        input.set_mouse_pos(10.0, 10.0);
        input.mouse_button_down(MouseButton::Left);
        frame(&mut tracker, &mut root, &mut input);
        input.set_mouse_pos(70.0, 10.0);
        frame(&mut tracker, &mut root, &mut input);
        input.set_mouse_pos(10.0, 10.0);
        input.mouse_button_up(MouseButton::Left);

        assert_eq!(frame(&mut tracker, &mut root, &mut input).clicked, Some(vec![0]));
    }

    #[test]
    fn test_hover_moves_between_nodes() {
        let log = Log::default();
        let mut root = scene(&log);
        let mut tracker = PointerTracker::default();
        let mut input = InputState::new();

        input.set_mouse_pos(10.0, 10.0);
        frame(&mut tracker, &mut root, &mut input);
        input.set_mouse_pos(60.0, 10.0);
        frame(&mut tracker, &mut root, &mut input);
        assert_eq!(tracker.hovered(), Some(&[1][..]));
        input.set_mouse_pos(500.0, 10.0);
        frame(&mut tracker, &mut root, &mut input);

        assert_eq!(
            log.take(),
            vec!["a:hover:true", "a:hover:false", "b:hover:true", "b:hover:false"]
        );
        assert_eq!(tracker.hovered(), None);
    }

    #[test]
    fn test_press_and_release_in_one_frame() {
        let log = Log::default();
        let mut root = scene(&log);
        let mut tracker = PointerTracker::default();
        let mut input = InputState::new();

        input.set_mouse_pos(60.0, 10.0);
        input.mouse_button_down(MouseButton::Left);
        input.mouse_button_up(MouseButton::Left);

        assert_eq!(frame(&mut tracker, &mut root, &mut input).clicked, Some(vec![1]));
    }

    #[test]
    fn test_fast_double_click_keeps_both_clicks() {
        let log = Log::default();
        let mut root = scene(&log);
        let mut tracker = PointerTracker::default();
        let mut input = InputState::new();

        input.set_mouse_pos(10.0, 10.0);
        input.mouse_button_down(MouseButton::Left);
        frame(&mut tracker, &mut root, &mut input);

        // Up and down again before the next frame.
        input.mouse_button_up(MouseButton::Left);
        input.mouse_button_down(MouseButton::Left);
        let outcome = frame(&mut tracker, &mut root, &mut input);
        assert_eq!(outcome.clicked, Some(vec![0]));
        assert_eq!(outcome.pressed, Some(vec![0]));
        assert_eq!(tracker.pressed(), Some(&[0][..]));

        input.mouse_button_up(MouseButton::Left);
        let outcome = frame(&mut tracker, &mut root, &mut input);
        assert_eq!(outcome.clicked, Some(vec![0]));
        assert_eq!(tracker.pressed(), None);

        assert_eq!(
            log.take(),
            vec![
                "a:hover:true",
                "a:press",
                "a:release:false",
                "a:click",
                "a:press",
                "a:release:false",
                "a:click",
            ]
        );
    }
}
