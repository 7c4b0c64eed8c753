// Taskboard - In-memory task list with completion tracking and status filtering

pub mod error;
pub mod filter;
pub mod id;
pub mod models;
pub mod store;

// Re-export main types for convenience
pub use error::{EmptyFieldError, Field};
pub use filter::Filter;
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use models::{Task, TaskId};
pub use store::TaskStore;
