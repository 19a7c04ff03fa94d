//! Single-line text labels.
//!
//! Text is rendered with a monospace font, so a run's width is its character
//! count times a fixed advance. That is all the measuring the HUD needs.

use arbor_ui::{Color, DrawList, Handler, Rect};

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Horizontal advance of one glyph, relative to the font size.
const ADVANCE_RATIO: f32 = 0.5;

/// Width and height of `text` at `font_size`.
#[must_use]
pub fn measure(text: &str, font_size: f32) -> (f32, f32) {
    (text.chars().count() as f32 * font_size * ADVANCE_RATIO, font_size)
}

/// Top-left position that centers `text` inside `rect`.
#[must_use]
pub fn centered_origin(text: &str, font_size: f32, rect: Rect) -> (f32, f32) {
    let (width, height) = measure(text, font_size);
    let (cx, cy) = rect.center();
    (cx - width * 0.5, cy - height * 0.5)
}

/// Left-aligned, vertically centered label.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Label content.
    pub value: String,
    /// Glyph color.
    pub color: Color,
    /// Font size in pixels.
    pub font_size: f32,
}

impl Text {
    /// Creates a black label at the default size.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            color: Color::BLACK,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Sets the color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Handler for Text {
    fn draw(&self, rect: Rect, surface: &mut DrawList) {
        let y = rect.y + (rect.height - self.font_size) * 0.5;
        surface.text(self.value.as_str(), rect.x, y, self.color, self.font_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_is_monospace() {
        assert_eq!(measure("Health", 16.0), (48.0, 16.0));
        assert_eq!(measure("", 16.0), (0.0, 16.0));
    }

    #[test]
    fn test_centered_origin() {
        let origin = centered_origin("OK", 20.0, Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(origin, (40.0, 10.0));
    }
}
