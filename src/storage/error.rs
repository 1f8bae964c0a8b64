use std::path::PathBuf;
use thiserror::Error;

use crate::cart::InvalidCart;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is not a key-value document: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored value for '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored cart under '{key}' is invalid: {source}")]
    Invalid {
        key: String,
        #[source]
        source: InvalidCart,
    },

    #[error("Failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StorageError {
    /// True when the stored data exists but cannot be used as-is.
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            Self::Document { .. } | Self::Corrupt { .. } | Self::Invalid { .. }
        )
    }
}
