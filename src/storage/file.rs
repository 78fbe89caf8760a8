//! File-backed storage
//!
//! Keeps all entries in one JSON object file. Every mutation rewrites the
//! file, so the on-disk state always matches what callers last wrote.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError, StorageResult};

/// Durable store for native builds
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };

        tracing::debug!(path = ?path, entries = entries.len(), "Opened client storage");

        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    /// Default location: `<data dir>/datavision/storage.json`
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|p| p.join("datavision").join("storage.json"))
            .unwrap_or_else(|| PathBuf::from("./datavision_storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.borrow_mut();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.borrow_mut();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
