//! Reference widgets.
//!
//! Each widget is a [`Handler`]; the UI engine knows nothing about them.
//! [`factory`] maps blueprint handler tables onto these types:
//!
//! | kind     | keys                                                  |
//! |----------|-------------------------------------------------------|
//! | `panel`  | `sprite`                                              |
//! | `button` | `sprite`, `sprite-pressed`, `text`, `action`          |
//! | `text`   | `value`, `color`, `font-size`                         |
//! | `bar`    | `color`, `value`                                      |
//! | `sprite` | `name`                                                |
//! | `cursor` |                                                       |

mod bar;
mod button;
mod cursor;
mod panel;
mod sprite;
mod text;

pub use bar::Bar;
pub use button::{Button, ClickFn};
pub use cursor::{Cursor, CURSOR_SIZE, CURSOR_SPRITE};
pub use panel::Panel;
pub use sprite::Sprite;
pub use text::{centered_origin, measure, Text, DEFAULT_FONT_SIZE};

use arbor_ui::{Color, Handler, HandlerSpec, UiError, UiResult};

use crate::events::{EventSender, HudEvent};
use crate::sprites::SpriteAtlas;

/// Action name that closes the main panel.
pub const CLOSE_ACTION: &str = "close";

/// The event a button with `action` reports when clicked.
#[must_use]
pub fn click_event(action: &str) -> HudEvent {
    if action == CLOSE_ACTION {
        HudEvent::PanelClosed
    } else {
        HudEvent::ButtonClicked {
            action: action.to_string(),
        }
    }
}

/// A button whose clicks are reported on `events` as `action`.
#[must_use]
pub fn event_button(sprite: &str, action: &str, events: &EventSender) -> Button {
    let events = events.clone();
    let action = action.to_string();
    Button::new(sprite).action(move || {
        tracing::debug!(%action, "button clicked");
        events.send(click_event(&action));
    })
}

fn required<'a>(spec: &'a HandlerSpec, key: &str) -> UiResult<&'a str> {
    spec.str(key).ok_or_else(|| {
        UiError::InvalidConfig(format!("`{}` handler needs a string `{key}`", spec.kind))
    })
}

fn color_param(spec: &HandlerSpec, key: &str, fallback: Color) -> UiResult<Color> {
    match spec.str(key) {
        None => Ok(fallback),
        Some(name) => Color::named(name)
            .ok_or_else(|| UiError::InvalidConfig(format!("unknown color {name:?}"))),
    }
}

/// Builds a handler factory for [`arbor_ui::Blueprint::build`].
///
/// Panels look their border up in `atlas`; buttons report clicks on `events`.
pub fn factory(
    atlas: &SpriteAtlas,
    events: &EventSender,
) -> impl FnMut(&HandlerSpec) -> UiResult<Box<dyn Handler>> {
    let atlas = atlas.clone();
    let events = events.clone();

    move |spec| {
        let handler: Box<dyn Handler> = match spec.kind.as_str() {
            "panel" => {
                let sprite = required(spec, "sprite")?;
                Box::new(Panel::new(sprite, atlas.panel_border(sprite)))
            }
            "button" => {
                let sprite = required(spec, "sprite")?;
                let label = spec.str("text");
                let action = spec.str("action").or(label).unwrap_or(sprite);
                let mut button = event_button(sprite, action, &events);
                if let Some(pressed) = spec.str("sprite-pressed") {
                    button = button.sprite_pressed(pressed);
                }
                if let Some(label) = label {
                    button = button.text(label);
                }
                Box::new(button)
            }
            "text" => {
                let text = Text::new(required(spec, "value")?)
                    .color(color_param(spec, "color", Color::BLACK)?)
                    .font_size(spec.float("font-size").unwrap_or(DEFAULT_FONT_SIZE));
                Box::new(text)
            }
            "bar" => Box::new(Bar::new(
                color_param(spec, "color", Color::GREEN)?,
                spec.float("value").unwrap_or(1.0),
            )),
            "sprite" => Box::new(Sprite::new(required(spec, "name")?)),
            "cursor" => Box::new(Cursor::new()),
            other => return Err(UiError::UnknownHandler(other.to_string())),
        };
        Ok(handler)
    }
}
