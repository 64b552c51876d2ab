//! JSON file implementation of the task store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::TaskStore;
use crate::error::StoreError;
use crate::types::Task;

/// Task store backed by a single pretty-printed JSON file.
///
/// Every mutation re-reads the whole file and rewrites it in full. There
/// is no locking and the write is not atomic: concurrent writers race
/// (last write wins) and a crash mid-write can truncate the file. Both
/// are accepted limitations for a single local user.
///
/// The file is created lazily. `load` never writes; a missing file first
/// appears on the first successful `save`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Vec<Task> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = ?self.path, error = %e, "Store file unreadable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(tasks) => tasks,
            Err(e) => {
                debug!(path = ?self.path, error = %e, "Store file unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
