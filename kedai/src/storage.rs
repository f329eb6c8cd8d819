//! JSON record storage
//!
//! The app persists two independent records under its data directory:
//! the serialized cart and the credential/profile pair. A missing or
//! corrupt record loads as absent; persistence never fails the caller.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cart record filename
pub const CART_RECORD: &str = "cart.json";
/// Session record filename
pub const SESSION_RECORD: &str = "session.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One JSON-serialized record on disk
#[derive(Debug, Clone)]
pub struct JsonRecord {
    path: PathBuf,
}

impl JsonRecord {
    /// Create a record handle under the given base directory
    pub fn new(base_dir: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_dir.into().join(filename);
        Self { path }
    }

    /// Ensure the parent directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Serialize and write the record
    pub fn save<T: Serialize>(&self, value: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load the record; missing or unparseable data reads as `None`
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Discarding corrupt record: {}", e);
                None
            }
        }
    }

    /// Check if the record exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the record
    pub fn delete(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Record path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_delete() {
        let dir = TempDir::new().unwrap();
        let record = JsonRecord::new(dir.path(), "test.json");

        assert!(!record.exists());
        assert_eq!(record.load::<Vec<i64>>(), None);

        record.save(&vec![1i64, 2, 3]).unwrap();
        assert!(record.exists());
        assert_eq!(record.load::<Vec<i64>>(), Some(vec![1, 2, 3]));

        record.delete().unwrap();
        assert!(!record.exists());
    }

    #[test]
    fn test_corrupt_record_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let record = JsonRecord::new(dir.path(), "bad.json");
        std::fs::write(record.path(), "{not json").unwrap();

        assert_eq!(record.load::<Vec<i64>>(), None);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let record = JsonRecord::new(dir.path().join("nested/deeper"), "test.json");
        record.save(&42i64).unwrap();
        assert_eq!(record.load::<i64>(), Some(42));
    }
}
