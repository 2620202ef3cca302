// Groups module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Group, GroupReport};
pub use services::GroupService;
