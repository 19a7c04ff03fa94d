//! Software mouse cursor.
//!
//! The host hides the system cursor; this overlay paints one at the pointer
//! position every frame. It never takes part in hit testing, so it does not
//! steal clicks from the widgets underneath.

use arbor_ui::{Color, DrawList, Handler, InputState, Rect, Tick};

/// Cursor sprite name.
pub const CURSOR_SPRITE: &str = "cursor.png";
/// Cursor sprite size in pixels.
pub const CURSOR_SIZE: f32 = 24.0;

/// Paints the cursor at the last pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    x: f32,
    y: f32,
    pressed: bool,
}

impl Cursor {
    /// Creates a cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position.
    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Handler for Cursor {
    fn update(&mut self, _rect: Rect, _tick: Tick, input: &InputState) {
        (self.x, self.y) = input.pointer();
        self.pressed = input.is_down(arbor_ui::MouseButton::Left);
    }

    fn draw(&self, _rect: Rect, surface: &mut DrawList) {
        let tint = if self.pressed {
            Color::rgb(0.8, 0.8, 0.8)
        } else {
            Color::WHITE
        };
        surface.sprite(
            Rect::new(self.x, self.y, CURSOR_SIZE, CURSOR_SIZE),
            CURSOR_SPRITE,
            tint,
        );
    }
}
