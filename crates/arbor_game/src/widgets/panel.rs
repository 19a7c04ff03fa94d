//! Nine-slice panel background.

use arbor_ui::{DrawList, Handler, Rect};

/// Draws a panel sprite stretched over the node.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Sprite name.
    pub sprite: String,
    /// Corner size that does not stretch.
    pub border: f32,
}

impl Panel {
    /// Creates a panel.
    #[must_use]
    pub fn new(sprite: impl Into<String>, border: f32) -> Self {
        Self {
            sprite: sprite.into(),
            border,
        }
    }
}

impl Handler for Panel {
    fn draw(&self, rect: Rect, surface: &mut DrawList) {
        surface.nine_slice(rect, self.sprite.as_str(), self.border);
    }
}
