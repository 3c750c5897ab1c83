// Durable key-value storage behind the persisted preferences.
// Each key holds exactly one plain literal ("CAD", "Tonne", ...); no versioning.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("Storage file is corrupt: {source}")]
    Corrupt {
        #[from]
        source: serde_json::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous key-value store. Reads and writes may fail; callers decide how to degrade.
pub trait PreferenceStorage: fmt::Debug {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage. Values live as long as the instance.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON object file mapping keys to literals, re-read on every access so that
/// several instances pointing at the same file observe each other's writes.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // Sibling file the new content is written to before it replaces the real one.
    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    // A missing or blank file is an empty store.
    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    // A corrupt file is reported, never overwritten.
    // Writes go to a staging file that is renamed into place, so an interrupted
    // write leaves the previous content intact.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        let staging = self.staging_path();
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            StorageError::from(e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage_get_set() {
        let storage = MemoryStorage::new();
        assert!(storage.get("volume-unit-sales").unwrap().is_none());

        storage.set("volume-unit-sales", "Tonne").unwrap();
        assert_eq!(storage.get("volume-unit-sales").unwrap().as_deref(), Some("Tonne"));
    }

    #[test]
    fn test_json_file_storage_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("prefs.json"));
        assert!(storage.get("period-mode-overview").unwrap().is_none());
    }

    #[test]
    fn test_json_file_storage_shared_between_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let writer = JsonFileStorage::new(&path);
        writer.set("period-mode-overview", "CAM").unwrap();
        writer.set("volume-unit-overview", "Tonne").unwrap();

        let reader = JsonFileStorage::new(&path);
        assert_eq!(reader.get("period-mode-overview").unwrap().as_deref(), Some("CAM"));
        assert_eq!(reader.get("volume-unit-overview").unwrap().as_deref(), Some("Tonne"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"period-mode-overview\": \"CAM\""));
    }

    #[test]
    fn test_json_file_storage_replaces_file_through_staging() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let staging = dir.path().join("prefs.json.tmp");
        // Leftover from an interrupted write.
        fs::write(&staging, "partial {").unwrap();

        let storage = JsonFileStorage::new(&path);
        storage.set("period-mode-overview", "CAM").unwrap();
        storage.set("period-mode-overview", "CAD").unwrap();

        assert!(!staging.exists());
        assert_eq!(storage.get("period-mode-overview").unwrap().as_deref(), Some("CAD"));
    }

    #[test]
    fn test_json_file_storage_interrupted_write_keeps_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let storage = JsonFileStorage::new(&path);
        storage.set("volume-unit-sales", "Tonne").unwrap();

        // A directory in the staging slot makes the next write fail before the rename.
        fs::create_dir(dir.path().join("prefs.json.tmp")).unwrap();
        assert!(matches!(storage.set("volume-unit-sales", "UVC"), Err(StorageError::Io { .. })));
        assert_eq!(storage.get("volume-unit-sales").unwrap().as_deref(), Some("Tonne"));
    }

    #[test]
    fn test_json_file_storage_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not valid json {{{").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(storage.get("period-mode-overview"), Err(StorageError::Corrupt { .. })));
        assert!(matches!(storage.set("period-mode-overview", "CAD"), Err(StorageError::Corrupt { .. })));
        // The corrupt content is left in place.
        assert_eq!(fs::read_to_string(&path).unwrap(), "not valid json {{{");
    }

    #[test]
    fn test_json_file_storage_unreadable_path() {
        let dir = tempdir().unwrap();
        // A directory where the file should be.
        let storage = JsonFileStorage::new(dir.path());
        assert!(matches!(storage.get("period-mode-overview"), Err(StorageError::Io { .. })));
    }
}
