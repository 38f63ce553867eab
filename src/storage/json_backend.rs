use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{errors::StoreError, utils::paths::write_atomic};

use super::{KeyValueStore, Result};

pub const STATE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            schema_version: STATE_SCHEMA_VERSION,
            updated_at: None,
            entries: BTreeMap::new(),
        }
    }
}

/// Key-value store persisted as a single JSON file.
///
/// Every write re-reads the file and replaces it through a temporary sibling,
/// so a crash leaves either the old or the new contents on disk.
#[derive(Debug, Clone)]
pub struct JsonKeyValueStore {
    path: PathBuf,
}

impl JsonKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Like [`read`](Self::read), but an unparsable file yields an empty
    /// one so the next write replaces it.
    fn read_for_update(&self) -> Result<StoreFile> {
        match self.read() {
            Err(StoreError::Serde(err)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "state file is corrupt; starting from an empty store"
                );
                Ok(StoreFile::default())
            }
            other => other,
        }
    }

    fn write(&self, mut file: StoreFile) -> Result<()> {
        file.updated_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(&file)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    /// Snapshot of all stored pairs, sorted by key.
    pub fn entries(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.read()?.entries)
    }
}

impl KeyValueStore for JsonKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut file = self.read_for_update()?;
        file.entries.insert(key.to_string(), value.to_string());
        self.write(file)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut file = self.read_for_update()?;
        if file.entries.remove(key).is_some() {
            self.write(file)?;
        }
        Ok(())
    }
}
