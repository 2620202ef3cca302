pub mod task_service;

pub use task_service::{TaskService, REQUIRED_TASKS_COUNT};
