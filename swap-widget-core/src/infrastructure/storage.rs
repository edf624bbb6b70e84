//! Storage implementations for persisted widget state
//!
//! One file per key under the platform data directory, plus an in-memory
//! implementation for tests and hosts without durable storage.

use crate::domain::repositories::StorageRepository;
use crate::shared::constants::STORAGE_DIR_NAME;
use crate::shared::error::WidgetError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// File-backed key-value storage
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new() -> Result<Self, WidgetError> {
        let base_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("./widget_storage"));
        Self::with_dir(base_dir.join(STORAGE_DIR_NAME))
    }

    pub fn with_dir(dir: PathBuf) -> Result<Self, WidgetError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageRepository for FileStorage {
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WidgetError> {
        fs::write(self.file_path(key), data)?;
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Vec<u8>, WidgetError> {
        Ok(fs::read(self.file_path(key))?)
    }

    fn delete(&self, key: &str) -> Result<(), WidgetError> {
        let _ = fs::remove_file(self.file_path(key));
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, WidgetError> {
        Ok(self.file_path(key).exists())
    }
}

/// In-memory key-value storage
pub struct InMemoryStorage {
    data: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageRepository for InMemoryStorage {
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WidgetError> {
        self.data.lock().unwrap().insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Vec<u8>, WidgetError> {
        self.data
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| WidgetError::storage(format!("No data for key: {}", key)))
    }

    fn delete(&self, key: &str) -> Result<(), WidgetError> {
        self.data.lock().unwrap().remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, WidgetError> {
        Ok(self.data.lock().unwrap().contains_key(key))
    }
}
