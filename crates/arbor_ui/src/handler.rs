//! The capability widgets implement to take part in update and draw.

use crate::geometry::Rect;
use crate::input::InputState;
use crate::render::DrawList;

/// Frame timing handed to every handler during update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tick {
    /// Frame number, starting at 0 for the first update.
    pub frame: u64,
    /// Seconds since the previous update.
    pub dt: f32,
    /// Seconds accumulated over all updates.
    pub elapsed: f32,
}

/// Behavior attached to a node.
///
/// Every method has a no-op default, so a widget implements only what applies
/// to it: a panel only draws, a cursor overlay updates and draws, a button
/// opts into pointer events. Rectangles are recomputed every frame and must not
/// be kept past the call that supplied them.
pub trait Handler {
    /// Called once per frame, in pre-order, after pointer events were dispatched.
    fn update(&mut self, _rect: Rect, _tick: Tick, _input: &InputState) {}

    /// Paints the widget. Parents draw before children, earlier siblings before later ones.
    fn draw(&self, _rect: Rect, _surface: &mut DrawList) {}

    /// Whether this node takes part in hit testing.
    ///
    /// Nodes that return `false` never receive press, release, click or hover
    /// events and never block them for nodes underneath.
    fn handles_pointer(&self) -> bool {
        false
    }

    /// The pointer button went down over this node.
    fn on_press(&mut self, _rect: Rect, _x: f32, _y: f32) {}

    /// The button pressed over this node went up.
    ///
    /// `cancelled` is true when the release does not complete a click, because
    /// the pointer left the node while held or was released over another node.
    fn on_release(&mut self, _rect: Rect, _x: f32, _y: f32, _cancelled: bool) {}

    /// Press and release both landed on this node.
    fn on_click(&mut self, _rect: Rect) {}

    /// The node became (`entered == true`) or stopped being the topmost pointer target.
    fn on_hover(&mut self, _rect: Rect, _entered: bool) {}
}
