//! Runtime tunables, loaded once at startup from TOML.
//!
//! ```toml
//! click-button = "left"
//! drag-cancel = true
//! max-depth = 64
//! trace-layout = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{UiError, UiResult};
use crate::input::MouseButton;
use crate::node::DEFAULT_MAX_DEPTH;

/// Configuration for a [`crate::Ui`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct UiConfig {
    /// Button that drives press/release/click dispatch.
    pub click_button: MouseButton,
    /// Cancel a click once the pointer leaves the pressed node while held.
    pub drag_cancel: bool,
    /// Deepest tree accepted when a root is installed.
    pub max_depth: usize,
    /// Emit a trace event with node counts for every layout pass.
    pub trace_layout: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            click_button: MouseButton::Left,
            drag_cancel: true,
            max_depth: DEFAULT_MAX_DEPTH,
            trace_layout: false,
        }
    }
}

impl UiConfig {
    /// Parses a configuration document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] if the document is not valid TOML, has
    /// unknown keys, or sets `max-depth` to 0.
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|err| UiError::InvalidConfig(err.to_string()))?;
        if config.max_depth == 0 {
            return Err(UiError::InvalidConfig("max-depth must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigRead`] if the file cannot be read, or any error
    /// of [`UiConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| UiError::ConfigRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::from_toml_str(&source)
    }
}
