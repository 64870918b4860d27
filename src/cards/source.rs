//! Card data sources.
//!
//! A source yields raw `CardAttributes` records in a stable order. The
//! registry reads it once, on first access.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::core::{RegistryConfig, RegistryError, Result, SourceFormat};

use super::definition::CardAttributes;

/// Supplies raw card records.
pub trait CardSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Read every record, in source order.
    fn load(&self) -> Result<Vec<CardAttributes>>;
}

/// Card definitions stored in a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDefsFile {
    path: PathBuf,
    format: SourceFormat,
}

impl CardDefsFile {
    /// Read `path`, inferring the format from its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = SourceFormat::from_path(&path);
        Self { path, format }
    }

    /// Read `path` with an explicit format.
    pub fn with_format(path: impl Into<PathBuf>, format: SourceFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// File described by a registry config.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::with_format(config.data_path.clone(), config.resolved_format())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn format(&self) -> SourceFormat {
        self.format
    }
}

impl CardSource for CardDefsFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<CardAttributes>> {
        if !self.path.exists() {
            return Err(RegistryError::SourceUnavailable {
                path: self.path.clone(),
            });
        }
        let file = File::open(&self.path).map_err(|source| RegistryError::Io {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);

        match self.format {
            SourceFormat::Json => {
                serde_json::from_reader(reader).map_err(|source| RegistryError::Json {
                    path: self.path.clone(),
                    source,
                })
            }
            SourceFormat::Bincode => {
                bincode::deserialize_from(reader).map_err(|source| RegistryError::Bincode {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }
}

/// Records held in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticSource {
    records: Vec<CardAttributes>,
}

impl StaticSource {
    pub fn new(records: impl IntoIterator<Item = CardAttributes>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl CardSource for StaticSource {
    fn describe(&self) -> String {
        format!("<memory: {} records>", self.records.len())
    }

    fn load(&self) -> Result<Vec<CardAttributes>> {
        Ok(self.records.clone())
    }
}

/// Write records as a bincode snapshot.
pub fn write_snapshot(records: &[CardAttributes], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    bincode::serialize_into(BufWriter::new(file), records).map_err(|source| {
        RegistryError::Bincode {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Prepare card data: compile JSON card definitions into a bincode snapshot.
///
/// Returns the number of records written.
pub fn bootstrap(json_path: &Path, snapshot_path: &Path) -> Result<usize> {
    let records = CardDefsFile::with_format(json_path, SourceFormat::Json).load()?;
    write_snapshot(&records, snapshot_path)?;
    tracing::info!(
        source = %json_path.display(),
        snapshot = %snapshot_path.display(),
        "Wrote {} card records",
        records.len()
    );
    Ok(records.len())
}
