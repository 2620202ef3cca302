// Students module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::Student;
pub use services::StudentService;
