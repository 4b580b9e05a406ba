//! Persistence bridge: an opaque get/set-by-key string store.
//!
//! The session writes two independently keyed JSON blobs through this
//! trait. Storage: one `<key>.json` file per key under a data directory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Key for the serialized quest collection
pub const QUESTS_KEY: &str = "tasks";
/// Key for the serialized progression record
pub const USER_KEY: &str = "user";

/// Opaque key-value string store the session persists through.
pub trait BlobStore {
    /// Fetch the blob stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous blob
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed store: `<dir>/<key>.json` per key.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.blob_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.blob_path(key), value)
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a blob, e.g. to simulate an earlier session
    pub fn with_blob(mut self, key: &str, value: &str) -> Self {
        self.blobs.insert(key.to_string(), value.to_string());
        self
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.get("tasks").is_none());
        store.set("tasks", "[]").unwrap();
        assert_eq!(store.get("tasks").as_deref(), Some("[]"));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = MemoryStore::new();
        store.set(QUESTS_KEY, "[]").unwrap();
        store.set(USER_KEY, "{}").unwrap();
        store.set(QUESTS_KEY, "[1]").unwrap();
        assert_eq!(store.get(USER_KEY).as_deref(), Some("{}"));
        assert_eq!(store.get(QUESTS_KEY).as_deref(), Some("[1]"));
    }
}
