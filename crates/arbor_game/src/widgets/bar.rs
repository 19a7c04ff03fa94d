//! Horizontal gauge, e.g. health or mana.

use arbor_ui::{Color, DrawList, Handler, Rect};

/// Track color behind the filled part.
const TRACK: Color = Color::rgba(0.0, 0.0, 0.0, 0.35);

/// A gauge filled to `value` (0-1) with `color`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Fill color.
    pub color: Color,
    value: f32,
}

impl Bar {
    /// Creates a bar. The value is clamped to 0-1.
    #[must_use]
    pub fn new(color: Color, value: f32) -> Self {
        let mut bar = Self { color, value: 0.0 };
        bar.set_value(value);
        bar
    }

    /// Current fill fraction.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the fill fraction, clamped to 0-1. NaN empties the bar.
    pub fn set_value(&mut self, value: f32) {
        self.value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    }

    /// Rectangle of the filled part inside `rect`.
    #[must_use]
    pub fn fill_rect(&self, rect: Rect) -> Rect {
        Rect::new(rect.x, rect.y, rect.width * self.value, rect.height)
    }
}

impl Handler for Bar {
    fn draw(&self, rect: Rect, surface: &mut DrawList) {
        surface.fill_rect(rect, TRACK);
        if self.value > 0.0 {
            surface.fill_rect(self.fill_rect(rect), self.color);
        }
    }
}
