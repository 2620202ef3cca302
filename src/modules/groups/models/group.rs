// Group model with validation
//
// A group is a cohort of students in one course year. Groups do not own
// their students at the storage level; cascading is a service concern.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::{Accessor, AccessorStyle, Entity, FieldValue};
use crate::core::{AppError, Result};
use crate::modules::students::models::Student;
use crate::modules::tasks::models::Task;

pub const MAX_NAME_LENGTH: usize = 50;
pub const MIN_COURSE_NUMBER: i32 = 1;
pub const MAX_COURSE_NUMBER: i32 = 6;

/// Academic group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,

    /// Display name, e.g. "IT-21"
    pub name: String,

    /// Course year, 1 to 6
    pub course_number: i32,
}

static GROUP_ACCESSORS: [Accessor<Group>; 3] = [
    Accessor {
        field: "id",
        style: AccessorStyle::Get,
        read: |g| FieldValue::Uuid(g.id),
    },
    Accessor {
        field: "name",
        style: AccessorStyle::Get,
        read: |g| FieldValue::Text(g.name.clone()),
    },
    Accessor {
        field: "courseNumber",
        style: AccessorStyle::Get,
        read: |g| FieldValue::Integer(i64::from(g.course_number)),
    },
];

impl Entity for Group {
    const NAME: &'static str = "Group";

    fn accessors() -> &'static [Accessor<Self>] {
        &GROUP_ACCESSORS
    }
}

impl Group {
    /// Create a new group with a fresh id
    pub fn new(name: String, course_number: i32) -> Result<Self> {
        Self::validate_name(&name)?;
        Self::validate_course_number(course_number)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            course_number,
        })
    }

    pub fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Group name must not be empty"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "Group name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(())
    }

    pub fn validate_course_number(course_number: i32) -> Result<()> {
        if !(MIN_COURSE_NUMBER..=MAX_COURSE_NUMBER).contains(&course_number) {
            return Err(AppError::validation(format!(
                "Course number must be between {} and {}",
                MIN_COURSE_NUMBER, MAX_COURSE_NUMBER
            )));
        }
        Ok(())
    }
}

/// Request body for POST /api/groups
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub course: i32,
}

/// Request body for PUT /api/groups/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGroupRequest {
    pub name: String,
    pub course: i32,
}

/// Optional filters for GET /api/groups
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSearchQuery {
    pub name: Option<String>,
    pub course_number: Option<i32>,
}

/// One student's row in a group report
#[derive(Debug, Clone, Serialize)]
pub struct StudentProgress {
    pub student: Student,
    pub tasks: Vec<Task>,
    pub completed: usize,
}

impl StudentProgress {
    pub fn new(student: Student, tasks: Vec<Task>) -> Self {
        let completed = tasks.iter().filter(|t| t.is_submitted()).count();
        Self {
            student,
            tasks,
            completed,
        }
    }
}

/// Task progress of every student in a group
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub group: Group,
    pub students: Vec<StudentProgress>,
    pub total_completed: usize,
    pub total_tasks: usize,
    pub completion_percent: f64,
}

impl GroupReport {
    /// `tasks_per_student` is the expected count, not the count found
    pub fn new(group: Group, students: Vec<StudentProgress>, tasks_per_student: usize) -> Self {
        let total_completed = students.iter().map(|s| s.completed).sum();
        let total_tasks = students.len() * tasks_per_student;
        let completion_percent = if total_tasks == 0 {
            0.0
        } else {
            total_completed as f64 * 100.0 / total_tasks as f64
        };

        Self {
            group,
            students,
            total_completed,
            total_tasks,
            completion_percent,
        }
    }
}
