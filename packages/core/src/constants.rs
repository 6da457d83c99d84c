// ABOUTME: Fixed names and default locations used across Taglist
// ABOUTME: Slot key for the tag list and the default data directory

use std::env;
use std::path::PathBuf;

use crate::env_vars::HOME;

/// Key of the persistent slot holding the serialized tag list
pub const TAGS_STORAGE_KEY: &str = "tagList";

/// Name of the data directory created under the user's home
pub const DATA_DIR_NAME: &str = ".taglist";

/// Get the path to the Taglist directory (~/.taglist)
///
/// Falls back to the current directory when no home directory can be found.
pub fn taglist_dir() -> PathBuf {
    // HOME first so tests can redirect it
    if let Ok(home) = env::var(HOME) {
        PathBuf::from(home).join(DATA_DIR_NAME)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taglist_dir_ends_with_data_dir_name() {
        assert!(taglist_dir().ends_with(DATA_DIR_NAME));
    }
}
