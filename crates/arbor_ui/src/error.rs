//! # UI Error Types
//!
//! All errors that can occur while assembling or configuring a UI tree.
//! Layout itself never fails; malformed directives degrade to clamped geometry.

use thiserror::Error;

/// Errors that can occur in the UI engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// The node tree violates a structural rule (depth bound, duplicate id,
    /// attach or removal at a position that does not exist).
    #[error("invalid tree: {0}")]
    InvalidTree(String),

    /// A configuration or blueprint document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A blueprint named a handler kind the factory does not know.
    #[error("unknown handler kind: {0}")]
    UnknownHandler(String),

    /// A configuration file could not be read.
    #[error("failed to read {path}: {reason}")]
    ConfigRead {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
