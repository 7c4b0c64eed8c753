// Completion-status filtering for the visible task list

use crate::models::Task;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// View-state selector controlling which tasks [`visible`] returns.
///
/// A closed enumeration: invalid filter values are unrepresentable, so the
/// query has no undefined fallthrough case.
///
/// [`visible`]: crate::store::TaskStore::visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task, in insertion order.
    #[default]
    All,
    /// Only tasks with `completed == true`.
    Completed,
    /// Only tasks with `completed == false`.
    Pending,
}

impl Filter {
    /// Whether a task passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Completed => write!(f, "completed"),
            Filter::Pending => write!(f, "pending"),
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    /// Case-insensitive parse of the three filter labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "pending" => Ok(Filter::Pending),
            other => Err(format!(
                "unknown filter: {} (expected all, completed, or pending)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;

    fn task(completed: bool) -> Task {
        Task {
            id: TaskId::new("task-0001"),
            title: "Buy milk".to_string(),
            description: "2L whole".to_string(),
            completed,
        }
    }

    #[test]
    fn test_filter_matches() {
        assert!(Filter::All.matches(&task(false)));
        assert!(Filter::All.matches(&task(true)));

        assert!(Filter::Completed.matches(&task(true)));
        assert!(!Filter::Completed.matches(&task(false)));

        assert!(Filter::Pending.matches(&task(false)));
        assert!(!Filter::Pending.matches(&task(true)));
    }

    #[test]
    fn test_filter_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("Completed".parse::<Filter>().unwrap(), Filter::Completed);
        assert_eq!("PENDING".parse::<Filter>().unwrap(), Filter::Pending);
        assert_eq!(" pending ".parse::<Filter>().unwrap(), Filter::Pending);

        assert!("done".parse::<Filter>().is_err());
        assert!("".parse::<Filter>().is_err());
    }

    #[test]
    fn test_filter_display_round_trips() {
        for filter in [Filter::All, Filter::Completed, Filter::Pending] {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_filter_serialization() {
        assert_eq!(serde_json::to_string(&Filter::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::to_string(&Filter::Completed).unwrap(),
            "\"completed\""
        );
        let parsed: Filter = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, Filter::Pending);
    }
}
