//! Key-value persistence for the best score and settings
//!
//! Stores deal in raw strings; the integer view on top treats anything
//! missing or unparseable as 0. Storage failures are logged and dropped,
//! never surfaced to the simulation.

use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised inside storage adapters. Never crosses the trait boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store contents: {0}")]
    Json(#[from] serde_json::Error),
}

/// Host-provided key-value storage
pub trait PersistentStore {
    fn get_raw(&self, key: &str) -> Option<String>;

    fn set_raw(&mut self, key: &str, value: &str);

    /// Integer value for `key`; 0 when absent or invalid
    fn get(&self, key: &str) -> u32 {
        let Some(raw) = self.get_raw(key) else {
            return 0;
        };
        match raw.trim().parse::<u32>() {
            Ok(value) => value,
            Err(_) => {
                log::debug!("Ignoring invalid stored value for {}: {:?}", key, raw);
                0
            }
        }
    }

    fn set(&mut self, key: &str, value: u32) {
        self.set_raw(key, &value.to_string());
    }
}

/// In-memory store. Records every write so callers can inspect them.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `set_raw` call in order
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
    }
}

impl PersistentStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.writes.push((key.to_string(), value.to_string()));
    }
}

/// JSON file on disk, rewritten on every set (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Open the store at `path`. A missing or corrupt file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match Self::read(&path) {
            Ok(values) => values,
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No store at {}, starting fresh", path.display());
                HashMap::new()
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                HashMap::new()
            }
        };
        Self { path, values }
    }

    fn read(path: &Path) -> Result<HashMap<String, String>, StorageError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        // Sibling file then rename: readers never see a partial write
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PersistentStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write() {
            log::warn!("Failed to save {}: {}", self.path.display(), e);
        }
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn new() -> Self {
        let storage = Self::open().map_err(|e| log::warn!("{}", e)).ok();
        Self { storage }
    }

    fn open() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("LocalStorage".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl PersistentStore for LocalStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_raw(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else { return };
        if storage.set_item(key, value).is_err() {
            log::warn!("LocalStorage write failed for {}", key);
        }
    }
}
