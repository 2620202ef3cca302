mod task;

pub use task::{Task, TaskSearchQuery, TaskStatus, UpdateTaskStatusRequest};
