//! In-memory task store for tests.

use std::sync::RwLock;

use super::TaskStore;
use crate::error::StoreError;
use crate::types::Task;

/// Task store held entirely in memory.
///
/// Mirrors the whole-document semantics of [`super::JsonFileStore`] so
/// the API layer can be exercised without a filesystem.
#[derive(Default)]
pub struct MemoryStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-seeded list.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Vec<Task> {
        // A poisoned lock reads as empty, matching the fail-open policy.
        self.tasks.read().map(|t| t.clone()).unwrap_or_default()
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut guard = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        *guard = tasks.to_vec();
        Ok(())
    }
}
