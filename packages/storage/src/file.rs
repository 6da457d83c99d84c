// ABOUTME: File-backed key-value storage
// ABOUTME: Stores each slot as <dir>/<key>.json, created on first write

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use taglist_core::{validate_storage_key, StoreConfig};

use crate::{KeyValueStore, StorageError, StorageResult};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn slot_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_storage_key(key).map_err(|e| StorageError::InvalidKey(e.to_string()))?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    /// Creates the storage directory if it doesn't exist
    fn ensure_dir(&self) -> StorageResult<()> {
        if !self.dir.exists() {
            debug!("Creating storage directory: {:?}", self.dir);
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(key)?;
        debug!("Reading slot {} from: {:?}", key, path);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        self.ensure_dir()?;

        debug!("Writing slot {} to: {:?}", key, path);
        fs::write(&path, value)?;
        Ok(())
    }
}
