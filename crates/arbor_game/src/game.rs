//! # Demo HUD
//!
//! ```text
//! ┌──────────────────────────── viewport ────────────────────────────┐
//! │                      ┌──── panel 300x300 ────┐ (x)                │
//! │                      │  ┌─ inset 245x200 ─┐  │                    │
//! │                      │  │ Health ████████  │  │                    │
//! │                      │  │ Mana   █████     │  │                    │
//! │                      │  └──────────────────┘  │                    │
//! │                      │  [ Inventory ]  [OK]   │                    │
//! │                      └────────────────────────┘                    │
//! │                                                                    │
//! │              [Button] [Button] [Button] [Button]                   │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tree is built on the first `update`, once the host has reported the
//! real window size, and never again.

use arbor_ui::{
    AlignItems, Blueprint, Color, Direction, DrawList, InputState, Justify, Margin, Node, Rect,
    Size, Ui, UiConfig, UiResult,
};

use crate::events::{EventBus, EventSender, HudEvent};
use crate::sprites::SpriteAtlas;
use crate::widgets::{event_button, factory, Bar, Cursor, Panel, Sprite, Text, CLOSE_ACTION};

/// Window size the demo asks the host for.
pub const WINDOW_SIZE: Size = Size::new(480.0, 640.0);

/// The demo HUD as a blueprint document.
pub const HUD_BLUEPRINT: &str = include_str!("../data/hud.toml");

/// Identifier of the main panel.
pub const MAIN_PANEL_ID: &str = "main-panel";

/// Background fill behind the HUD.
#[must_use]
pub fn background() -> Color {
    Color::rgba8(63, 124, 182, 255)
}

/// One of the four buttons in the bottom row.
fn bottom_button(index: usize, events: &EventSender) -> Node {
    Node::new()
        .id(format!("bottom-button-{index}"))
        .size(76.0, 35.0)
        .margin(Margin::new(5.0, 5.0, 10.0, 5.0))
        .handler(
            event_button("buttonSquare_brown.png", &format!("button-{index}"), events)
                .sprite_pressed("buttonSquare_brown_pressed.png")
                .text("Button"),
        )
}

/// Caption above a gauge, then the gauge.
fn gauge(label: &str, color: Color, value: f32) -> Node {
    Node::new()
        .id(label.to_ascii_lowercase())
        .size(180.0, 38.0)
        .direction(Direction::Column)
        .align_items(AlignItems::Start)
        .justify(Justify::Start)
        .child(
            Node::new()
                .size(180.0, 20.0)
                .margin_bottom(2.0)
                .handler(Text::new(label)),
        )
        .child(Node::new().size(180.0, 18.0).handler(Bar::new(color, value)))
}

/// Assembles the HUD for a viewport of `viewport`.
#[must_use]
pub fn build_hud(viewport: Size, atlas: &SpriteAtlas, events: &EventSender) -> Node {
    let panel_sprite = "panel_brown.png";
    let inset_sprite = "panelInset_beige.png";

    let main_panel = Node::new()
        .id(MAIN_PANEL_ID)
        .size(300.0, 300.0)
        .direction(Direction::Column)
        .align_items(AlignItems::Center)
        .justify(Justify::Center)
        .handler(Panel::new(panel_sprite, atlas.panel_border(panel_sprite)))
        .child(
            Node::new()
                .margin_top(20.0)
                .size(245.0, 200.0)
                .direction(Direction::Column)
                .align_items(AlignItems::Center)
                .justify(Justify::Center)
                .handler(Panel::new(inset_sprite, atlas.panel_border(inset_sprite)))
                .child(gauge("Health", Color::GREEN, 0.8))
                .child(gauge("Mana", Color::BLUE, 0.5).margin_top(20.0)),
        )
        .child(
            // Sized to its buttons: a centered row of auto width would be zero wide.
            Node::new()
                .id("panel-buttons")
                .width(245.0)
                .margin(Margin::new(20.0, 0.0, 20.0, 0.0))
                .grow(1.0)
                .direction(Direction::Row)
                .align_items(AlignItems::Center)
                .justify(Justify::Center)
                .child(
                    Node::new().id("inventory").size(190.0, 49.0).handler(
                        event_button("buttonLong_blue.png", "inventory", events)
                            .sprite_pressed("buttonLong_blue_pressed.png")
                            .text("Inventory"),
                    ),
                )
                .child(
                    Node::new().id("ok").size(45.0, 49.0).margin_left(10.0).handler(
                        event_button("buttonSquare_blue.png", "ok", events)
                            .sprite_pressed("buttonSquare_blue_pressed.png")
                            .text("OK"),
                    ),
                ),
        )
        .child(
            Node::new()
                .id("close")
                .absolute(296.0, 4.0)
                .size(36.0, 36.0)
                .handler(event_button("buttonRound_blue.png", CLOSE_ACTION, events))
                .child(
                    Node::new()
                        .absolute(1.0, -2.0)
                        .size(36.0, 36.0)
                        .handler(Sprite::new("iconCross_beige.png")),
                ),
        );

    Node::new()
        .size(viewport.width, viewport.height)
        .direction(Direction::Column)
        .justify(Justify::SpaceBetween)
        .align_items(AlignItems::Stretch)
        .child(
            Node::new()
                .margin_top(50.0)
                .grow(1.0)
                .align_items(AlignItems::Center)
                .justify(Justify::Center)
                .child(main_panel),
        )
        .child(
            Node::new()
                .id("bottom-row")
                .size(viewport.width, 140.0)
                .justify(Justify::Center)
                .align_items(AlignItems::End)
                .margin_bottom(20.0)
                .children((0..4).map(|index| bottom_button(index, events))),
        )
        .child(
            Node::new()
                .id("cursor")
                .absolute(0.0, 0.0)
                .size(viewport.width, viewport.height)
                .handler(Cursor::new()),
        )
}

/// The demo game's UI: owns the engine driver and the event queue.
pub struct GameUi {
    ui: Ui,
    events: EventBus,
    panel_open: bool,
}

impl GameUi {
    /// Creates the HUD. Nothing is built until the first [`GameUi::update`].
    #[must_use]
    pub fn new(config: UiConfig) -> Self {
        let atlas = SpriteAtlas::hud();
        let events = EventBus::default();
        let sender = events.sender();
        let ui = Ui::deferred(config, move |viewport| {
            tracing::info!(width = viewport.width, height = viewport.height, "building hud");
            build_hud(viewport, &atlas, &sender)
        });

        Self {
            ui,
            events,
            panel_open: true,
        }
    }

    /// Creates the HUD from a blueprint document, built immediately.
    ///
    /// # Errors
    ///
    /// Returns [`arbor_ui::UiError::InvalidConfig`] for a malformed document,
    /// [`arbor_ui::UiError::UnknownHandler`] for an unknown handler kind and
    /// [`arbor_ui::UiError::InvalidTree`] if the tree fails validation.
    pub fn from_blueprint(config: UiConfig, source: &str) -> UiResult<Self> {
        let atlas = SpriteAtlas::hud();
        let events = EventBus::default();
        let root = Blueprint::from_toml_str(source)?.build(factory(&atlas, &events.sender()))?;

        Ok(Self {
            ui: Ui::with_root(config, root)?,
            events,
            panel_open: true,
        })
    }

    /// Reports the window size; returns the logical screen size to render at.
    pub fn layout(&mut self, outside_width: f32, outside_height: f32) -> (f32, f32) {
        let size = self.ui.resize(outside_width, outside_height);
        (size.width, size.height)
    }

    /// Runs one frame of UI logic and returns the events it produced.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the HUD tree is rejected on the first
    /// frame.
    pub fn update(&mut self, input: &InputState, dt: f32) -> UiResult<Vec<HudEvent>> {
        self.ui.update(input, dt)?;

        let events = self.events.drain();
        if events.contains(&HudEvent::PanelClosed) {
            self.set_panel_open(false);
        }
        Ok(events)
    }

    /// Paints the background and the HUD.
    pub fn draw(&mut self, surface: &mut DrawList) {
        surface.fill_rect(Rect::from_size(self.ui.viewport()), background());
        self.ui.draw(surface);
    }

    /// Shows or hides the main panel.
    pub fn set_panel_open(&mut self, open: bool) {
        if self.panel_open == open {
            return;
        }
        if let Some(panel) = self.ui.root_mut().and_then(|root| root.find_mut(MAIN_PANEL_ID)) {
            panel.style_mut().display = if open {
                arbor_ui::Display::Flex
            } else {
                arbor_ui::Display::None
            };
            self.panel_open = open;
            tracing::debug!(open, "main panel toggled");
        }
    }

    /// Whether the main panel is shown.
    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// The engine driver.
    #[must_use]
    pub fn ui(&self) -> &Ui {
        &self.ui
    }
}

impl Default for GameUi {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;

    #[test]
    fn test_hud_shape() {
        let bus = EventBus::default();
        let hud = build_hud(WINDOW_SIZE, &SpriteAtlas::hud(), &bus.sender());

        assert_eq!(hud.child_count(), 3);
        assert_eq!(hud.find("bottom-row").map(arbor_ui::Node::child_count), Some(4));
        assert!(hud.find("close").is_some());
        assert!(hud.validate(arbor_ui::DEFAULT_MAX_DEPTH).is_ok());
    }

    #[test]
    fn test_background_color() {
        let color = background();
        assert!((color.r - 63.0 / 255.0).abs() < 1e-6);
        assert!((color.b - 182.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_nothing_built_before_first_update() {
        let mut game = GameUi::default();
        assert_eq!(game.layout(480.0, 640.0), (480.0, 640.0));
        assert!(game.ui().root().is_none());

        game.update(&InputState::new(), 0.0).unwrap();
        assert!(game.ui().root().is_some());
    }
}
