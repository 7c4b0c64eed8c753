// Data models for the task board

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a task.
///
/// Assigned once at creation by an [`IdGenerator`](crate::id::IdGenerator)
/// and never reused. The store compares ids only for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-created item.
///
/// `title` and `description` are immutable after creation and guaranteed
/// non-blank (after trimming) by the store's insertion validation. Only
/// `completed` changes over the task's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_is_transparent_in_json() {
        let id = TaskId::new("task-0001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"task-0001\"");
    }

    #[test]
    fn test_task_serialization() {
        let task = Task {
            id: TaskId::new("task-0001"),
            title: "Buy milk".to_string(),
            description: "2L whole".to_string(),
            completed: false,
        };

        let json = serde_json::to_string(&task).unwrap();
        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
        assert!(!deserialized.completed);
    }

    #[test]
    fn test_task_id_display() {
        let id = TaskId::new("task-0042");
        assert_eq!(id.to_string(), "task-0042");
        assert_eq!(id.as_str(), "task-0042");
    }
}
