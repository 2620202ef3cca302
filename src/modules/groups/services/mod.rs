pub mod group_service;

pub use group_service::GroupService;
