// ABOUTME: Persistence port for Taglist and its storage adapters
// ABOUTME: Single-slot key-value access with in-memory and file-backed implementations

use thiserror::Error;

pub mod file;
pub mod json;
pub mod memory;

pub use file::FileStore;
pub use json::{read_json, write_json};
pub use memory::MemoryStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
    #[error("Configuration error: {0}")]
    Config(#[from] taglist_core::ConfigError),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value slot access that the tag store persists through
///
/// Values are opaque strings; `get` returns `None` for a key that was never
/// written (or was cleared externally). `set` overwrites unconditionally.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
