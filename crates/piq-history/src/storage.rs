//! Key/value backends for persisted history.
//!
//! A [`Storage`] holds one string value per key, the same contract as browser
//! local storage. [`FileStorage`] keeps one `<key>.json` file per key;
//! [`MemoryStorage`] keeps values in memory with an optional byte quota.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::HistoryError;

/// A string store addressed by key.
pub trait Storage {
    /// Read the value under `key`. A missing key is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), HistoryError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), HistoryError> {
        (**self).write(key, value)
    }
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// One JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(HistoryError::Io { path, source }),
        }
    }

    /// Writes go to a temporary file in the same directory and are renamed
    /// into place, so a crash never leaves a half-written history.
    fn write(&self, key: &str, value: &str) -> Result<(), HistoryError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| HistoryError::Io { path, source }
        };

        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_err(&self.dir))?;
        tmp.write_all(value.as_bytes()).map_err(io_err(tmp.path()))?;

        let path = self.path_for(key);
        tmp.persist(&path)
            .map_err(|error| HistoryError::Io {
                path: path.clone(),
                source: error.error,
            })?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "history written");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-memory values with an optional per-value byte quota.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value exceeds `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            values: RefCell::default(),
            quota: Some(quota),
        }
    }

    /// Seed a raw value, bypassing the quota.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, HistoryError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), HistoryError> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(HistoryError::QuotaExceeded {
                    key: key.to_string(),
                    needed: value.len(),
                    quota,
                });
            }
        }
        self.insert_raw(key, value);
        Ok(())
    }
}
