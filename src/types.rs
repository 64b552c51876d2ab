//! Core types for the to-do list server.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status value for a task that has not been completed yet.
pub const STATUS_PENDING: &str = "Pending";

/// Status value for a finished task.
pub const STATUS_COMPLETED: &str = "Completed";

fn default_status() -> String {
    STATUS_PENDING.to_string()
}

/// A single to-do entry.
///
/// `status` is a plain string rather than an enum: the wire contract
/// treats it as free text with "Pending"/"Completed" by convention, and
/// replace writes whatever the caller sent. Missing fields deserialize
/// to defaults instead of rejecting the record, so a hand-edited store
/// file with partial entries still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Task {
    /// Create a task with a fresh random id.
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            status: status.into(),
        }
    }

    /// Flip between pending and completed, the way the UI toggle does.
    pub fn toggled(&self) -> Task {
        let status = if self.status == STATUS_PENDING {
            STATUS_COMPLETED
        } else {
            STATUS_PENDING
        };
        Task {
            id: self.id.clone(),
            title: self.title.clone(),
            status: status.to_string(),
        }
    }
}

/// Create payload: a task-like body where the id is optional.
///
/// The client generates its own UUID and sends it along; the server only
/// fills the gap when no id was supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl NewTask {
    /// Materialize the record, generating a fresh UUID when the caller
    /// did not supply a usable id.
    pub fn into_task(self) -> Task {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Task {
            id,
            title: self.title,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_deserializes_with_missing_fields() {
        let task: Task = serde_json::from_str("{}").unwrap();
        assert_eq!(task.id, "");
        assert_eq!(task.title, "");
        assert_eq!(task.status, STATUS_PENDING);
    }

    #[test]
    fn new_task_keeps_caller_supplied_id() {
        let payload: NewTask =
            serde_json::from_str(r#"{"id":"client-id","title":"Buy milk"}"#).unwrap();
        let task = payload.into_task();
        assert_eq!(task.id, "client-id");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, STATUS_PENDING);
    }

    #[test]
    fn new_task_generates_id_when_absent_or_empty() {
        let payload: NewTask = serde_json::from_str(r#"{"title":"a"}"#).unwrap();
        let task = payload.into_task();
        assert!(!task.id.is_empty());

        let payload: NewTask = serde_json::from_str(r#"{"id":"","title":"b"}"#).unwrap();
        assert!(!payload.into_task().id.is_empty());
    }

    #[test]
    fn toggled_flips_status_both_ways() {
        let task = Task::new("x", STATUS_PENDING);
        let done = task.toggled();
        assert_eq!(done.status, STATUS_COMPLETED);
        assert_eq!(done.toggled().status, STATUS_PENDING);
        assert_eq!(done.id, task.id);
    }
}
