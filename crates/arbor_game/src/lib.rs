//! # ARBOR GAME
//!
//! The demo game's HUD, built on `arbor_ui`.
//!
//! ## Modules
//!
//! - `widgets`: panel, button, text, bar, sprite and cursor handlers
//! - `sprites`: panel sprite borders
//! - `events`: click reports from widgets to the game
//! - `game`: the HUD tree and its frame driver
//!
//! ```
//! use arbor_game::GameUi;
//! use arbor_ui::{DrawList, InputState};
//!
//! let mut game = GameUi::default();
//! game.layout(480.0, 640.0);
//!
//! let events = game.update(&InputState::new(), 1.0 / 60.0).unwrap();
//! assert!(events.is_empty());
//!
//! let mut surface = DrawList::new();
//! game.draw(&mut surface);
//! assert!(surface.command_count() > 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod events;
pub mod game;
pub mod sprites;
pub mod widgets;

pub use events::{EventBus, EventSender, HudEvent};
pub use game::{build_hud, GameUi, HUD_BLUEPRINT, WINDOW_SIZE};
pub use sprites::{PanelOpts, SpriteAtlas};
