pub mod group_controller;

pub use group_controller::configure;
