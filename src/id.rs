// Task identifier generation

use crate::models::TaskId;
use uuid::Uuid;

/// Source of fresh task identifiers.
///
/// Injected into the store so tests and demos can substitute a deterministic
/// sequence for the production UUID source. Every value returned must be
/// unique among all identifiers produced for the process's lifetime.
pub trait IdGenerator {
    fn generate(&mut self) -> TaskId;
}

/// Production generator backed by UUIDv7.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&mut self) -> TaskId {
        TaskId::new(Uuid::now_v7().to_string())
    }
}

/// Deterministic generator yielding `task-0001`, `task-0002`, ...
///
/// For tests and demos where stable, readable ids matter.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u32,
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> TaskId {
        self.next += 1;
        TaskId::new(format!("task-{:04}", self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_stable() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.generate().as_str(), "task-0001");
        assert_eq!(ids.generate().as_str(), "task-0002");
        assert_eq!(ids.generate().as_str(), "task-0003");
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        let generated: HashSet<TaskId> = (0..100).map(|_| ids.generate()).collect();
        assert_eq!(generated.len(), 100);
    }
}
