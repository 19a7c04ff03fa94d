//! # HUD Events
//!
//! Widgets live inside the UI tree and cannot reach the game directly. They
//! report what happened through a bounded channel that the game drains once
//! per frame.
//!
//! ```text
//! ┌──────────┐  on_click  ┌─────────────┐   drain()   ┌──────────┐
//! │  Button  │───────────>│  HUD Events │────────────>│  GameUi  │
//! └──────────┘            └─────────────┘             └──────────┘
//! ```

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Default number of events buffered between two drains.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Something the player did in the HUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudEvent {
    /// A button completed a click.
    ButtonClicked {
        /// Identifier of the button's node, or its label when it has none.
        action: String,
    },
    /// The close button of the main panel was clicked.
    PanelClosed,
}

/// Channel pair owned by the HUD.
pub struct EventBus {
    sender: Sender<HudEvent>,
    receiver: Receiver<HudEvent>,
}

impl EventBus {
    /// Creates a bus holding at most `capacity` undrained events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity.max(1));
        Self { sender, receiver }
    }

    /// Creates a sender handle for a widget.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Takes every pending event, oldest first.
    pub fn drain(&self) -> Vec<HudEvent> {
        self.receiver.try_iter().collect()
    }

    /// Number of undrained events.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

/// Handle widgets use to report events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<HudEvent>,
}

impl EventSender {
    /// Sends an event without blocking.
    ///
    /// Returns `false` if the event was dropped because the queue is full or
    /// the HUD is gone.
    pub fn send(&self, event: HudEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!(?event, "hud event queue full, dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

impl std::fmt::Debug for EventSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSender")
            .field("pending", &self.sender.len())
            .finish()
    }
}
