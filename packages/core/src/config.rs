// ABOUTME: Environment-driven configuration for tag storage
// ABOUTME: Resolves the data directory and slot key with validation

use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::{taglist_dir, TAGS_STORAGE_KEY};
use crate::env_vars::{TAGLIST_DATA_DIR, TAGLIST_STORAGE_KEY};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Storage key cannot be empty")]
    EmptyStorageKey,
    #[error("Invalid storage key: {0}. Must not contain path separators or be '.' or '..'")]
    InvalidStorageKey(String),
    #[error("Data directory cannot be empty")]
    EmptyDataDir,
}

/// Where and under which key the tag list is persisted
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: taglist_dir(),
            storage_key: TAGS_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            storage_key: TAGS_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Build a configuration from `TAGLIST_DATA_DIR` and `TAGLIST_STORAGE_KEY`,
    /// falling back to `~/.taglist` and `tagList`
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match env::var(TAGLIST_DATA_DIR) {
            Ok(dir) if dir.trim().is_empty() => return Err(ConfigError::EmptyDataDir),
            Ok(dir) => PathBuf::from(dir.trim()),
            Err(_) => taglist_dir(),
        };

        let storage_key = env::var(TAGLIST_STORAGE_KEY)
            .map(|key| key.trim().to_string())
            .unwrap_or_else(|_| TAGS_STORAGE_KEY.to_string());

        let config = Self {
            data_dir,
            storage_key,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        validate_storage_key(&self.storage_key)
    }
}

/// Slot keys double as file names for file-backed storage
pub fn validate_storage_key(key: &str) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::EmptyStorageKey);
    }
    if key == "." || key == ".." || key.contains(['/', '\\']) || key.contains('\0') {
        return Err(ConfigError::InvalidStorageKey(key.to_string()));
    }
    Ok(())
}
