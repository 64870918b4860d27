//! Core registry types: configuration and errors.
//!
//! Hosts configure the registry via `RegistryConfig` rather than relying on
//! ambient global state.

pub mod config;
pub mod error;

pub use config::{RegistryConfig, SourceFormat, DEFAULT_DATA_PATH, PLAYABLE_TYPES};
pub use error::{RegistryError, Result};
