// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used by Taglist

// Storage Configuration
pub const TAGLIST_DATA_DIR: &str = "TAGLIST_DATA_DIR";
pub const TAGLIST_STORAGE_KEY: &str = "TAGLIST_STORAGE_KEY";

// System Environment Variables
pub const HOME: &str = "HOME";
