//! # ARBOR UI
//!
//! A retained tree of nodes, laid out with a flexbox subset and driven once
//! per frame by the host.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        FRAME PIPELINE                       │
//! ├────────────────────────────────────────────────────────────┤
//! │  InputState → Layout → Hit Test → Handler::update (pre-order)│
//! │                  ↓                                           │
//! │             Handler::draw (pre-order) → DrawList → batches   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nodes own their children, so a tree can never contain a cycle. Behavior
//! lives in [`Handler`] implementations; layout only reads each node's
//! [`LayoutStyle`]. Rectangles are recomputed from scratch every frame and
//! handed to handlers, never stored on nodes.
//!
//! ```
//! use arbor_ui::{Direction, InputState, Node, Ui, UiConfig};
//!
//! let root = Node::new()
//!     .direction(Direction::Column)
//!     .child(Node::new().id("bar").height(40.0));
//! let mut ui = Ui::with_root(UiConfig::default(), root).unwrap();
//! ui.resize(800.0, 600.0);
//! ui.update(&InputState::new(), 1.0 / 60.0).unwrap();
//! assert_eq!(ui.rect_of("bar").map(|r| r.width), Some(800.0));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod blueprint;
pub mod config;
pub mod error;
pub mod geometry;
pub mod handler;
pub mod input;
pub mod layout;
pub mod node;
pub mod pointer;
pub mod render;
pub mod runtime;
pub mod style;

pub use blueprint::{Blueprint, HandlerSpec, NodeBlueprint};
pub use config::UiConfig;
pub use error::{UiError, UiResult};
pub use geometry::{Margin, Rect, Size};
pub use handler::{Handler, Tick};
pub use input::{InputState, MouseButton};
pub use layout::{
    compute_layout, AlignContent, AlignItems, Direction, Display, Justify, Layout, LayoutStyle,
    Position, Wrap,
};
pub use node::{Node, DEFAULT_MAX_DEPTH};
pub use pointer::{hit_test, NodePath, PointerOutcome, PointerTracker};
pub use render::{DrawList, RenderCommand, UIBatch, UIVertex};
pub use runtime::{draw_tree, update_tree, SetupFn, Ui};
pub use style::Color;
