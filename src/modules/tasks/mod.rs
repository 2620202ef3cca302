// Tasks module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Task, TaskStatus};
pub use services::TaskService;
