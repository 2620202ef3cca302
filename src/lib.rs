//! MiniBRS: student groups, enrollments and task submissions.
//!
//! Entities live in generic in-memory repositories mirrored to JSON files.
//! The same services back a console interface and an HTTP API.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod storage;

// Re-export commonly used types
pub use app::AppServices;
pub use modules::groups;
pub use modules::students;
pub use modules::tasks;
