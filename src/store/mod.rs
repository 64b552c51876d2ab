//! Persistence for the task list.
//!
//! The store is a single JSON document holding the full ordered list of
//! tasks, read fully into memory and rewritten fully on every mutation.
//! `TaskStore` is the seam that lets the API layer run against an
//! in-memory fake in tests instead of touching disk.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::types::Task;

/// Whole-document storage for the task list.
pub trait TaskStore: Send + Sync {
    /// Read the full task list.
    ///
    /// Fail-open: any failure (missing file, invalid JSON, I/O error)
    /// yields the empty list. A corrupt store silently resets to empty
    /// rather than blocking the API.
    fn load(&self) -> Vec<Task>;

    /// Overwrite the full task list.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}
