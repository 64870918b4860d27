//! Registry configuration.
//!
//! Hosts describe where card data lives and which card types count as
//! playable:
//! - `SourceFormat`: How the card data file is encoded
//! - `RegistryConfig`: Data location plus query defaults
//!
//! `DEFAULT_DATA_PATH` is only the config default; hosts pass a config or a
//! source.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cards::CardType;

/// Default location of the card definitions file.
pub const DEFAULT_DATA_PATH: &str = "data/CardDefs.json";

/// Card types returned by a query that does not constrain `type`.
///
/// Heroes, hero powers and enchantments are service cards and never show up
/// in default queries.
pub const PLAYABLE_TYPES: [CardType; 3] = [CardType::Spell, CardType::Weapon, CardType::Minion];

/// Encoding of a card data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// A JSON array of card records.
    Json,
    /// A bincode snapshot written by the bootstrap step.
    Bincode,
}

impl SourceFormat {
    /// Infer the format from a file extension.
    ///
    /// `.bin` and `.bincode` are snapshots; everything else is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") | Some("bincode") => SourceFormat::Bincode,
            _ => SourceFormat::Json,
        }
    }
}

/// Registry configuration.
///
/// Every field has a default, so a partial config file deserializes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path of the card definitions file.
    pub data_path: PathBuf,

    /// Explicit file format. `None` infers it from `data_path`.
    pub format: Option<SourceFormat>,

    /// Types a query falls back to when it does not mention `type`.
    pub playable_types: Vec<CardType>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            format: None,
            playable_types: PLAYABLE_TYPES.to_vec(),
        }
    }
}

impl RegistryConfig {
    /// Create a configuration reading from `data_path`.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Self::default()
        }
    }

    /// Force a file format.
    #[must_use]
    pub fn with_format(mut self, format: SourceFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Replace the default playable types.
    #[must_use]
    pub fn with_playable_types(mut self, types: impl IntoIterator<Item = CardType>) -> Self {
        self.playable_types = types.into_iter().collect();
        self
    }

    /// The format that will be used to read `data_path`.
    #[must_use]
    pub fn resolved_format(&self) -> SourceFormat {
        self.format
            .unwrap_or_else(|| SourceFormat::from_path(&self.data_path))
    }
}
