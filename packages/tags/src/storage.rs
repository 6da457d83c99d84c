// ABOUTME: Tag store backed by a single key-value slot
// ABOUTME: Handles fetch, create and rename with duplicate-name checks

use tracing::{debug, info, warn};

use taglist_core::{StoreConfig, TAGS_STORAGE_KEY};
use taglist_storage::{read_json, write_json, FileStore, KeyValueStore, StorageResult};

use super::types::{Tag, TagOutcome};

/// In-memory tag list mirrored to one persistent slot
///
/// The list starts empty and is only populated by [`TagStore::fetch`]. Every
/// successful mutation rewrites the whole slot before returning.
pub struct TagStore<S: KeyValueStore> {
    storage: S,
    key: String,
    tags: Vec<Tag>,
}

impl TagStore<FileStore> {
    /// Open the file-backed store described by `config` and load its tags
    pub fn open(config: &StoreConfig) -> StorageResult<Self> {
        config.validate()?;
        let mut store = Self::with_key(FileStore::from_config(config), &config.storage_key);
        store.fetch()?;
        Ok(store)
    }
}

impl<S: KeyValueStore> TagStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, TAGS_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            tags: Vec::new(),
        }
    }

    /// Reload the tag list from storage, replacing whatever was in memory
    ///
    /// A missing or blank slot loads as an empty list. On a parse failure the
    /// in-memory list is kept and the slot is not touched.
    pub fn fetch(&mut self) -> StorageResult<Vec<Tag>> {
        debug!("Fetching tags from slot: {}", self.key);

        let tags = match read_json::<Option<Vec<Tag>>, _>(&self.storage, &self.key) {
            Ok(tags) => tags.flatten().unwrap_or_default(),
            Err(e) => {
                warn!("Failed to load tags from slot {}: {}", self.key, e);
                return Err(e);
            }
        };

        debug!("Loaded {} tags", tags.len());
        self.tags = tags;
        Ok(self.tags.clone())
    }

    /// Add a tag named `name`, with `id == name`
    pub fn create(&mut self, name: &str) -> StorageResult<TagOutcome> {
        if self.name_taken(name) {
            debug!("Tag name already in use: {}", name);
            return Ok(TagOutcome::Duplicated);
        }

        self.tags.push(Tag::new(name));
        if let Err(e) = self.save() {
            warn!("Rolling back creation of tag '{}': {}", name, e);
            self.tags.pop();
            return Err(e);
        }

        info!("Created tag '{}'", name);
        Ok(TagOutcome::Success)
    }

    /// Rename the tag identified by `id`
    ///
    /// The name check covers every tag including the target, so renaming a
    /// tag to its current name reports `Duplicated`.
    pub fn update(&mut self, id: &str, name: &str) -> StorageResult<TagOutcome> {
        let Some(index) = self.tags.iter().position(|tag| tag.id == id) else {
            debug!("Tag not found: {}", id);
            return Ok(TagOutcome::NotFound);
        };

        if self.name_taken(name) {
            debug!("Tag name already in use: {}", name);
            return Ok(TagOutcome::Duplicated);
        }

        let previous = std::mem::replace(&mut self.tags[index].name, name.to_string());
        if let Err(e) = self.save() {
            warn!("Rolling back rename of tag '{}': {}", id, e);
            self.tags[index].name = previous;
            return Err(e);
        }

        info!("Renamed tag '{}' from '{}' to '{}'", id, previous, name);
        Ok(TagOutcome::Success)
    }

    /// Serialize the full tag list and overwrite the slot
    pub fn save(&mut self) -> StorageResult<()> {
        debug!("Saving {} tags to slot: {}", self.tags.len(), self.key);
        write_json(&mut self.storage, &self.key, &self.tags)
    }

    /// Tags currently held in memory
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// First tag with the given id
    pub fn get_tag(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    pub fn get_tag_by_name(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn name_taken(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }
}
