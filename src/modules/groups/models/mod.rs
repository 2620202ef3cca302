mod group;

pub use group::{CreateGroupRequest, Group, GroupReport, GroupSearchQuery, StudentProgress, UpdateGroupRequest};
