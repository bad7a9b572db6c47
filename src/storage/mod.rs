// SPDX-License-Identifier: PMPL-1.0-or-later

//! Durable key/value storage for user preferences.
//!
//! Values are bare strings with no envelope or version tag. The file
//! backend keeps every entry in one flat JSON object.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Storage the language selection state reads from and writes to.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file store, e.g. `{"fleetease_language": "ru"}`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading preferences {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("parsing preferences {}", self.path.display()))
    }

    // Sibling of the target so the rename stays on one filesystem.
    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl PreferenceStore for FileStore {
    /// Entries written by other tools may hold non-string values; those
    /// read as absent.
    fn load(&self, key: &str) -> Result<Option<String>> {
        match self.read_entries()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                warn!(key, value = %other, "ignoring non-string preference");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Write-through update. A file that no longer parses is replaced
    /// rather than left blocking every later save. The new content is
    /// staged next to the target and renamed into place.
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries().unwrap_or_else(|err| {
            warn!(error = %err, "discarding unreadable preferences");
            Map::new()
        });
        entries.insert(key.to_string(), Value::String(value.to_string()));
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let payload = serde_json::to_string_pretty(&entries)?;
        let staging = self.staging_path();
        fs::write(&staging, payload)
            .with_context(|| format!("writing preferences {}", staging.display()))?;
        fs::rename(&staging, &self.path)
            .with_context(|| format!("replacing preferences {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", "v").unwrap();
        assert_eq!(store.load("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.get("k"), Some("v"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load("fleetease_language").unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_parent_and_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/prefs.json");
        let mut store = FileStore::new(&path);
        store.save("theme", "dark").unwrap();
        store.save("fleetease_language", "ru").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("fleetease_language").unwrap(), Some("ru".into()));
        assert_eq!(reopened.load("theme").unwrap(), Some("dark".into()));
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);
        assert!(store.load("fleetease_language").is_err());
    }

    #[test]
    fn test_save_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "][").unwrap();

        let mut store = FileStore::new(&path);
        store.save("fleetease_language", "ru").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("fleetease_language").unwrap(), Some("ru".into()));
        assert!(!store.staging_path().exists());
    }

    #[test]
    fn test_non_string_values_are_kept_but_not_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"theme": 1, "fleetease_language": true}"#).unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.load("fleetease_language").unwrap(), None);
        store.save("fleetease_language", "en").unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], Value::from(1));
        assert_eq!(store.load("fleetease_language").unwrap(), Some("en".into()));
    }
}
