// ABOUTME: In-memory key-value storage
// ABOUTME: HashMap-backed slot store for tests and embedders without a filesystem

use std::collections::HashMap;
use tracing::debug;

use crate::{KeyValueStore, StorageResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear a slot, as an outside actor wiping storage would
    pub fn remove(&mut self, key: &str) -> Option<String> {
        debug!("Removing slot: {}", key);
        self.slots.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        debug!("Reading slot: {}", key);
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        debug!("Writing slot {} ({} bytes)", key, value.len());
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
