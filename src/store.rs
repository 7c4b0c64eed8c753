// In-memory task store: the single owner of the task list and filter

use crate::error::{EmptyFieldError, Field};
use crate::filter::Filter;
use crate::id::{IdGenerator, UuidIds};
use crate::models::{Task, TaskId};
use tracing::debug;

/// Controller owning the authoritative task list and the current filter.
///
/// The rendering surface dispatches mutations here and re-reads
/// [`visible`](Self::visible) after each one; no other component touches the
/// list or filter. Fully synchronous: every operation runs to completion,
/// nothing suspends or spawns work.
///
/// Generic over the identifier source so tests can inject a deterministic
/// sequence (see [`SequentialIds`](crate::id::SequentialIds)).
#[derive(Debug)]
pub struct TaskStore<G = UuidIds> {
    tasks: Vec<Task>,
    filter: Filter,
    ids: G,
}

impl TaskStore<UuidIds> {
    /// An empty store with the production UUID generator and the `All`
    /// filter selected.
    pub fn new() -> Self {
        Self::with_generator(UuidIds)
    }
}

impl Default for TaskStore<UuidIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TaskStore<G> {
    /// An empty store drawing identifiers from the given generator.
    pub fn with_generator(ids: G) -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::default(),
            ids,
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Validate and append a new task.
    ///
    /// Both fields are trimmed for the emptiness check only; the stored task
    /// keeps the submitted text verbatim. On failure the list is unchanged
    /// and no identifier is consumed. The new task starts with
    /// `completed = false` and lands at the end of the list.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<TaskId, EmptyFieldError> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(EmptyFieldError {
                field: Field::Title,
            });
        }
        if description.trim().is_empty() {
            return Err(EmptyFieldError {
                field: Field::Description,
            });
        }

        let id = self.ids.generate();
        debug!(id = %id, title = %title, "adding task");

        self.tasks.push(Task {
            id: id.clone(),
            title,
            description,
            completed: false,
        });

        Ok(id)
    }

    /// Flip the `completed` flag of the task with this id.
    ///
    /// Its own inverse: toggling twice restores the original state. An
    /// unknown id is a no-op (logged at debug level).
    pub fn toggle(&mut self, id: &TaskId) {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(id = %id, completed = task.completed, "toggled task");
            }
            None => debug!(id = %id, "toggle: no task with this id"),
        }
    }

    /// Remove the task with this id, preserving the relative order of the
    /// rest. Idempotent; an unknown id is a no-op (logged at debug level).
    pub fn delete(&mut self, id: &TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        if self.tasks.len() == before {
            debug!(id = %id, "delete: no task with this id");
        } else {
            debug!(id = %id, "deleted task");
        }
    }

    /// Replace the current filter. Affects only what `visible` returns, never
    /// the underlying list.
    pub fn select_filter(&mut self, filter: Filter) {
        debug!(%filter, "filter selected");
        self.filter = filter;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The tasks passing the current filter, lazily, in insertion order.
    ///
    /// Read-only: repeated calls with no intervening mutation yield equal
    /// sequences.
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        let filter = self.filter;
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// Every task in insertion order, regardless of the current filter.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// The currently selected filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Look up a task by id.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Number of tasks in the list, ignoring the filter.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks at all, ignoring the filter.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
