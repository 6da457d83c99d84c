// ABOUTME: Tag registry for Taglist
// ABOUTME: Provides tag types and the store that enforces unique names

pub mod storage;
pub mod types;

// Re-export main types
pub use storage::TagStore;
pub use types::{Tag, TagOutcome};

pub use taglist_storage::{StorageError, StorageResult};
