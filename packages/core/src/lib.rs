// ABOUTME: Core constants and configuration for Taglist
// ABOUTME: Foundational package shared by the storage and tags packages

pub mod config;
pub mod constants;
pub mod env_vars;

// Re-export constants
pub use constants::{taglist_dir, TAGS_STORAGE_KEY};

// Re-export configuration
pub use config::{validate_storage_key, ConfigError, StoreConfig};
