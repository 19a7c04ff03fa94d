//! Plain sprite stretched over the node.

use arbor_ui::{Color, DrawList, Handler, Rect};

/// Draws one atlas sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Sprite name.
    pub name: String,
    /// Tint.
    pub tint: Color,
}

impl Sprite {
    /// Creates an untinted sprite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tint: Color::WHITE,
        }
    }
}

impl Handler for Sprite {
    fn draw(&self, rect: Rect, surface: &mut DrawList) {
        surface.sprite(rect, self.name.as_str(), self.tint);
    }
}
