//! Durable key-value storage behind a minimal interface.
//!
//! The session persists exactly two records (the favorites list and the
//! last-viewed city), so the interface is a pair of byte-level operations.
//! Keys are fixed internal names, never user input.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;

/// Byte-level key-value persistence.
pub trait Storage: Send + Sync {
    /// Read a record. `Ok(None)` when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write a record, replacing any previous value.
    fn write(&self, key: &str, value: &[u8]) -> Result<()>;
}

/// File-per-key storage under a data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).context("Failed to create storage directory")?;
        Ok(Self { dir })
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.dir.join(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(bytes))
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.dir.join(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// In-memory storage for tests and embedding without a disk backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.records.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<()> {
        self.records.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
