//! Storage service for partition persistence
//!
//! Every partition is one string key holding one serialized value. The
//! `Storage` trait is injected into each store so tests (and embedders) can
//! substitute `MemoryStorage` for the on-disk implementation.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::app::NAME;
use crate::error::{AtelierError, Result};

/// String-keyed storage, one value per key
///
/// Reads and writes are whole-value: callers read a partition, modify it in
/// memory, and write it back as one unit.
pub trait Storage {
    /// Read the raw value for a key. `None` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write the value for a key, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. No-op when the key is absent.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Load and parse the JSON value stored under a key
///
/// Returns `None` when the key is absent. An empty value is treated as absent.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Result<Option<T>> {
    let content = match storage.read(key)? {
        Some(c) => c,
        None => return Ok(None),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let value = serde_json::from_str(&content).map_err(|e| {
        AtelierError::Parse(format!("Failed to parse value for key '{}': {}", key, e))
    })?;

    Ok(Some(value))
}

/// Serialize a value to pretty-printed JSON and store it under a key
pub fn save_json<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(|e| {
        AtelierError::Storage(format!("Failed to serialize value for key '{}': {}", key, e))
    })?;
    storage.write(key, &content)
}

// =============================================================================
// DiskStorage - one JSON file per key under the config directory
// =============================================================================

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir().map(|p| p.join(NAME)).ok_or_else(|| {
        AtelierError::Storage(
            "Could not determine config directory. HOME environment variable may not be set."
                .to_string(),
        )
    })
}

/// On-disk storage: each key maps to `<dir>/<key>.json`
pub struct DiskStorage {
    dir: PathBuf,
}

impl DiskStorage {
    /// Create storage rooted at the default config directory
    pub fn new() -> Result<Self> {
        Ok(Self { dir: config_dir()? })
    }

    /// Create storage rooted at a specific directory (for testing and
    /// custom locations)
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory backing this storage
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for DiskStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        read_file(&self.key_path(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        create_dir_if_needed(&self.dir)?;
        write_file(&self.key_path(key), value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Ok(()), // Already gone, that's fine
                ErrorKind::PermissionDenied => Err(AtelierError::Storage(format!(
                    "Permission denied: cannot delete {:?}",
                    path
                ))),
                _ => Err(AtelierError::Storage(format!(
                    "Failed to delete {:?}: {}",
                    path, e
                ))),
            },
        }
    }
}

/// Create a directory if it doesn't exist, with proper error handling
fn create_dir_if_needed(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot create directory {:?}", path)
                }
                ErrorKind::NotFound => {
                    format!(
                        "Cannot create directory {:?}: parent path does not exist",
                        path
                    )
                }
                _ => {
                    format!("Failed to create directory {:?}: {}", path, e)
                }
            };
            Err(AtelierError::Storage(msg))
        }
    }
}

/// Read file contents with proper error handling
fn read_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            ErrorKind::PermissionDenied => Err(AtelierError::Storage(format!(
                "Permission denied: cannot read {:?}",
                path
            ))),
            _ => Err(AtelierError::Storage(format!(
                "Failed to read {:?}: {}",
                path, e
            ))),
        },
    }
}

/// Write file contents with proper error handling
fn write_file(path: &Path, content: &str) -> Result<()> {
    match fs::write(path, content) {
        Ok(()) => Ok(()),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot write to {:?}", path)
                }
                ErrorKind::NotFound => {
                    format!(
                        "Cannot write to {:?}: parent directory does not exist",
                        path
                    )
                }
                ErrorKind::ReadOnlyFilesystem => {
                    format!("Cannot write to {:?}: filesystem is read-only", path)
                }
                _ => {
                    format!("Failed to write to {:?}: {}", path, e)
                }
            };
            Err(AtelierError::Storage(msg))
        }
    }
}

// =============================================================================
// MemoryStorage - HashMap-backed fake for tests
// =============================================================================

/// In-memory storage, used as a substitute for `DiskStorage` in tests
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}
