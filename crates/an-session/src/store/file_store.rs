use crate::store::{DurableStore, StoreError, StoreResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
const RECORD_EXTENSION: &str = "json";

/// One `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn record_path(&self, key: &str) -> StoreResult<PathBuf> {
        if key.is_empty() {
            return Err(StoreError::invalid_key(key, "key cannot be empty"));
        }
        if key.contains(['/', '\\']) || key.contains("..") {
            return Err(StoreError::invalid_key(
                key,
                "key cannot contain path separators or '..'",
            ));
        }

        Ok(self.dir.join(format!("{key}.{RECORD_EXTENSION}")))
    }
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.record_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::file_read(path, e)),
        }
    }

    /// Atomic write: temp file, fsync, rename over the final path.
    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let final_path = self.record_path(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self.dir.join(format!(
            "{key}.{RECORD_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote record {key} to {final_path:?}");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.record_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed record {key}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_remove(path, e)),
        }
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}` for debugging.
    fn discard_corrupted(&self, key: &str) -> StoreResult<()> {
        let path = self.record_path(key)?;

        if !path.exists() {
            return Ok(());
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{key}.{RECORD_EXTENSION}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(StoreError::backup_failed)?;

        warn!("Backed up corrupted record {key} to {backup_path:?}");
        Ok(())
    }
}
