//! Input state for UI.
//!
//! The host feeds pointer movement and button edges into an [`InputState`]
//! between frames and calls [`InputState::begin_frame`] once the UI has
//! consumed them.

use serde::Deserialize;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MouseButton {
    /// Left mouse button.
    #[default]
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer X position.
    pub mouse_x: f32,
    /// Current pointer Y position.
    pub mouse_y: f32,
    /// Mouse buttons pressed this frame.
    buttons_pressed: u8,
    /// Mouse buttons released this frame.
    buttons_released: u8,
    /// Mouse buttons currently held.
    buttons_down: u8,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame edges.
    pub fn begin_frame(&mut self) {
        self.buttons_pressed = 0;
        self.buttons_released = 0;
    }

    /// Updates the pointer position.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_pressed |= mask;
        self.buttons_down |= mask;
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_released |= mask;
        self.buttons_down &= !mask;
    }

    /// Returns true if the button went down this frame.
    #[must_use]
    pub fn just_pressed(&self, button: MouseButton) -> bool {
        (self.buttons_pressed & Self::button_mask(button)) != 0
    }

    /// Returns true if the button went up this frame.
    #[must_use]
    pub fn just_released(&self, button: MouseButton) -> bool {
        (self.buttons_released & Self::button_mask(button)) != 0
    }

    /// Returns true if the button is currently held.
    #[must_use]
    pub fn is_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    /// Current pointer position.
    #[must_use]
    pub fn pointer(&self) -> (f32, f32) {
        (self.mouse_x, self.mouse_y)
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edges() {
        let mut input = InputState::new();

        input.mouse_button_down(MouseButton::Left);
        assert!(input.just_pressed(MouseButton::Left));
        assert!(input.is_down(MouseButton::Left));
        assert!(!input.just_pressed(MouseButton::Right));

        input.begin_frame();
        assert!(!input.just_pressed(MouseButton::Left));
        assert!(input.is_down(MouseButton::Left));

        input.mouse_button_up(MouseButton::Left);
        assert!(input.just_released(MouseButton::Left));
        assert!(!input.is_down(MouseButton::Left));
    }

    #[test]
    fn test_pointer_and_held_button_survive_frames() {
        let mut input = InputState::new();
        input.set_mouse_pos(10.0, 10.0);
        input.mouse_button_down(MouseButton::Right);
        input.begin_frame();

        assert_eq!(input.pointer(), (10.0, 10.0));
        assert!(input.is_down(MouseButton::Right));
        assert!(!input.just_released(MouseButton::Right));
    }
}
