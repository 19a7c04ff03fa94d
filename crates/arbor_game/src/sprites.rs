//! Sprite names used by the HUD and the nine-slice borders of panel sprites.
//!
//! The atlas itself (pixels, UV rects) belongs to the host renderer; widgets
//! only refer to sprites by name. Panels additionally need to know how many
//! pixels of each corner must not stretch.

use std::collections::HashMap;

/// Border used for panel sprites that were not registered.
pub const DEFAULT_PANEL_BORDER: f32 = 16.0;

/// Nine-slice settings of one panel sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOpts {
    /// Sprite name in the atlas.
    pub name: String,
    /// Corner size in pixels.
    pub border: f32,
}

impl PanelOpts {
    /// Creates panel settings.
    #[must_use]
    pub fn new(name: impl Into<String>, border: f32) -> Self {
        Self {
            name: name.into(),
            border,
        }
    }
}

/// Registry of panel sprite borders.
#[derive(Debug, Clone, Default)]
pub struct SpriteAtlas {
    panels: HashMap<String, f32>,
}

impl SpriteAtlas {
    /// Creates an empty atlas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an atlas with the given panel settings.
    #[must_use]
    pub fn with_panels(panels: impl IntoIterator<Item = PanelOpts>) -> Self {
        let mut atlas = Self::new();
        for panel in panels {
            atlas.register_panel(panel);
        }
        atlas
    }

    /// The panels the demo HUD draws with.
    #[must_use]
    pub fn hud() -> Self {
        Self::with_panels([
            PanelOpts::new("panelInset_beige.png", 32.0),
            PanelOpts::new("panel_brown.png", 32.0),
        ])
    }

    /// Registers or replaces a panel sprite. Negative borders clamp to zero.
    pub fn register_panel(&mut self, panel: PanelOpts) {
        tracing::debug!(name = %panel.name, border = panel.border, "panel sprite registered");
        self.panels.insert(panel.name, panel.border.max(0.0));
    }

    /// Nine-slice border of a panel sprite.
    #[must_use]
    pub fn panel_border(&self, name: &str) -> f32 {
        self.panels.get(name).copied().unwrap_or(DEFAULT_PANEL_BORDER)
    }

    /// Number of registered panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_panels() {
        let atlas = SpriteAtlas::hud();
        assert_eq!(atlas.panel_count(), 2);
        assert_eq!(atlas.panel_border("panel_brown.png"), 32.0);
        assert_eq!(atlas.panel_border("unknown.png"), DEFAULT_PANEL_BORDER);
    }

    #[test]
    fn test_negative_border_clamps() {
        let mut atlas = SpriteAtlas::new();
        atlas.register_panel(PanelOpts::new("odd.png", -4.0));
        assert_eq!(atlas.panel_border("odd.png"), 0.0);
    }
}
