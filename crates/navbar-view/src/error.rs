//! Error types for navigation bar operations.
//!
//! Every failure here is local, synchronous and recoverable: a command that
//! returns an error has left the bar exactly as it was.

use std::path::PathBuf;

use crate::widget::ItemId;

/// Result type alias for navigation bar operations.
pub type Result<T> = std::result::Result<T, NavBarError>;

/// Errors returned by registry, selection and bar commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavBarError {
    /// The bar already holds `max` items.
    #[error("cannot add item: bar is at its maximum of {max} items")]
    CapacityExceeded { max: usize },

    /// The bar holds only `min` items and may not shrink further.
    #[error("cannot remove item: bar is at its minimum of {min} items")]
    CapacityUnderflow { min: usize },

    /// A position outside the current item range.
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// No item with this identifier is present.
    #[error("no item with id {0}")]
    UnknownItem(ItemId),

    /// An item with this identifier is already present.
    #[error("an item with id {0} is already present")]
    DuplicateItem(ItemId),

    /// The requested limits are inverted.
    #[error("invalid item limits: min {min} is greater than max {max}")]
    InvalidRange { min: usize, max: usize },

    /// The current item count does not fit the requested limits.
    #[error("cannot apply item limits {min}..={}: bar holds {len} items", display_max(.max))]
    SizeOutsideLimits {
        len: usize,
        min: usize,
        max: Option<usize>,
    },
}

fn display_max(max: &Option<usize>) -> String {
    max.map_or_else(|| "unbounded".to_string(), |max| max.to_string())
}

/// Errors that can occur while loading a bar configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error while loading or saving.
    #[error("I/O error on navigation bar config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error.
    #[error("failed to parse navigation bar config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("failed to serialize navigation bar config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid value for a setting.
    #[error("invalid value for '{setting}': {message}")]
    InvalidValue { setting: String, message: String },

    /// The configuration describes a bar that violates its own constraints.
    #[error("configuration rejected: {0}")]
    Rejected(#[from] NavBarError),
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-value error.
    pub fn invalid_value(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            setting: setting.into(),
            message: message.into(),
        }
    }
}
