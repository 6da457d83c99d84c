// ABOUTME: JSON helpers over any key-value store
// ABOUTME: Human-readable serialization of whole values into a single slot

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{KeyValueStore, StorageResult};

/// Read and deserialize the value under `key`
///
/// A missing slot, or one holding only whitespace, yields `Ok(None)`.
pub fn read_json<T, S>(store: &S, key: &str) -> StorageResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(content) if !content.trim().is_empty() => Ok(Some(serde_json::from_str(&content)?)),
        _ => Ok(None),
    }
}

/// Serialize `value` and overwrite the slot under `key`
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let content = serde_json::to_string_pretty(value)?;
    store.set(key, &content)
}
