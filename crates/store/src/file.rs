//! File-per-key snapshot store with atomic writes

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use aoilog_core::{Result, StoreError};
use uuid::Uuid;

use crate::SnapshotStore;

/// Stores each key as one file under a base directory
///
/// Writes go through a temporary file plus rename so a crash mid-write never
/// leaves a truncated snapshot behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(StoreError::invalid_key(key, "key must not be empty"));
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(StoreError::invalid_key(
                key,
                "key must not contain path separators",
            ));
        }
        Ok(self.base_dir.join(key))
    }

    /// Write content to a key's file atomically via a temporary file and rename
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .map_err(|e| StoreError::file_system(&self.base_dir, "create base directory", e))?;

        // Temporary file in the same directory so the rename stays atomic
        let temp_path = self.base_dir.join(format!(".{}.tmp", Uuid::new_v4()));

        let result = (|| -> Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| StoreError::file_system(&temp_path, "create temporary file", e))?;

            file.write_all(content.as_bytes())
                .map_err(|e| StoreError::file_system(&temp_path, "write temporary file", e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_system(&temp_path, "sync temporary file", e))?;

            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
            return result;
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::file_system(path, "atomic rename", e)
        })?;

        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, "read", e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.write_atomic(&path, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, "remove", e)),
        }
    }
}
