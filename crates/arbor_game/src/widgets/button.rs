//! Sprite button with an optional label.

use arbor_ui::{Color, DrawList, Handler, Rect};

use super::text::{centered_origin, DEFAULT_FONT_SIZE};

/// Pixels the label sinks while the button is held.
const PRESS_OFFSET: f32 = 2.0;

/// Callback fired on a completed click.
pub type ClickFn = Box<dyn FnMut()>;

/// A clickable sprite. Shows `sprite_pressed` while held over.
pub struct Button {
    /// Label, centered on the button.
    pub text: Option<String>,
    /// Sprite at rest.
    pub sprite: String,
    /// Sprite while pressed; falls back to `sprite`.
    pub sprite_pressed: Option<String>,
    /// Label color.
    pub text_color: Color,
    on_click: Option<ClickFn>,
    pressed: bool,
    hovered: bool,
    clicks: u32,
}

impl Button {
    /// Creates a button without label or callback.
    #[must_use]
    pub fn new(sprite: impl Into<String>) -> Self {
        Self {
            text: None,
            sprite: sprite.into(),
            sprite_pressed: None,
            text_color: Color::BLACK,
            on_click: None,
            pressed: false,
            hovered: false,
            clicks: 0,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the pressed sprite.
    #[must_use]
    pub fn sprite_pressed(mut self, sprite: impl Into<String>) -> Self {
        self.sprite_pressed = Some(sprite.into());
        self
    }

    /// Sets the callback run on every completed click.
    #[must_use]
    pub fn action(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Whether the button is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the pointer is over the button.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Completed clicks so far.
    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    fn current_sprite(&self) -> &str {
        match (&self.sprite_pressed, self.pressed) {
            (Some(pressed), true) => pressed,
            _ => &self.sprite,
        }
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text)
            .field("sprite", &self.sprite)
            .field("pressed", &self.pressed)
            .field("clicks", &self.clicks)
            .finish_non_exhaustive()
    }
}

impl Handler for Button {
    fn handles_pointer(&self) -> bool {
        true
    }

    fn on_press(&mut self, _rect: Rect, _x: f32, _y: f32) {
        self.pressed = true;
    }

    fn on_release(&mut self, _rect: Rect, _x: f32, _y: f32, _cancelled: bool) {
        self.pressed = false;
    }

    fn on_click(&mut self, _rect: Rect) {
        self.clicks += 1;
        if let Some(callback) = self.on_click.as_mut() {
            callback();
        }
    }

    fn on_hover(&mut self, _rect: Rect, entered: bool) {
        self.hovered = entered;
    }

    fn draw(&self, rect: Rect, surface: &mut DrawList) {
        let tint = if self.hovered && !self.pressed {
            Color::rgb(0.92, 0.92, 0.92)
        } else {
            Color::WHITE
        };
        surface.sprite(rect, self.current_sprite(), tint);

        if let Some(text) = &self.text {
            let (x, mut y) = centered_origin(text, DEFAULT_FONT_SIZE, rect);
            if self.pressed {
                y += PRESS_OFFSET;
            }
            surface.text(text.as_str(), x, y, self.text_color, DEFAULT_FONT_SIZE);
        }
    }
}
