//! Registry errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::CardKey;

/// Errors raised while loading, merging or reading the card registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The card data file does not exist.
    #[error("{} does not exist; create it with the card data bootstrap step", path.display())]
    SourceUnavailable {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The card data file exists but could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// JSON card data could not be decoded.
    #[error("invalid JSON card data in {}: {source}", path.display())]
    Json {
        /// Path of the file.
        path: PathBuf,
        /// The decoder error.
        source: serde_json::Error,
    },

    /// A bincode snapshot could not be decoded or encoded.
    #[error("invalid card snapshot {}: {source}", path.display())]
    Bincode {
        /// Path of the file.
        path: PathBuf,
        /// The codec error.
        source: bincode::Error,
    },

    /// The registry holds no card with this id.
    #[error("card {0} not found")]
    NotFound(CardKey),

    /// The same id appears twice in one data source.
    #[error("duplicate card id {0} in card data")]
    DuplicateCard(CardKey),

    /// A script declares a value whose shape its slot cannot hold.
    #[error("script for {id} declares {found} in slot `{slot}`")]
    MalformedScript {
        /// Card whose script is malformed.
        id: CardKey,
        /// Slot name.
        slot: &'static str,
        /// Shape that was found.
        found: &'static str,
    },
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
