// Task model
//
// Every student gets a fixed set of numbered tasks; only the status changes
// after creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::{Accessor, AccessorStyle, Entity, FieldValue};

/// Submission state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Submitted,
    NotSubmitted,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Submitted => "SUBMITTED",
            TaskStatus::NotSubmitted => "NOT_SUBMITTED",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::NotSubmitted
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SUBMITTED" => Ok(TaskStatus::Submitted),
            "NOT_SUBMITTED" => Ok(TaskStatus::NotSubmitted),
            _ => Err(format!("Invalid task status: {}", s)),
        }
    }
}

impl From<TaskStatus> for FieldValue {
    fn from(status: TaskStatus) -> Self {
        FieldValue::Variant(status.as_str())
    }
}

/// Numbered assignment belonging to one student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub student_id: Uuid,
    pub number: i32,
    pub status: TaskStatus,
}

static TASK_ACCESSORS: [Accessor<Task>; 6] = [
    Accessor {
        field: "id",
        style: AccessorStyle::Get,
        read: |t| FieldValue::Uuid(t.id),
    },
    Accessor {
        field: "studentId",
        style: AccessorStyle::Get,
        read: |t| FieldValue::Uuid(t.student_id),
    },
    Accessor {
        field: "number",
        style: AccessorStyle::Get,
        read: |t| FieldValue::Integer(i64::from(t.number)),
    },
    Accessor {
        field: "status",
        style: AccessorStyle::Get,
        read: |t| t.status.into(),
    },
    Accessor {
        field: "submitted",
        style: AccessorStyle::Is,
        read: |t| FieldValue::Boolean(t.is_submitted()),
    },
    Accessor {
        field: "notSubmitted",
        style: AccessorStyle::Is,
        read: |t| FieldValue::Boolean(t.is_not_submitted()),
    },
];

impl Entity for Task {
    const NAME: &'static str = "Task";

    fn accessors() -> &'static [Accessor<Self>] {
        &TASK_ACCESSORS
    }
}

impl Task {
    pub fn new(student_id: Uuid, number: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            number,
            status: TaskStatus::NotSubmitted,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.status == TaskStatus::Submitted
    }

    pub fn is_not_submitted(&self) -> bool {
        self.status == TaskStatus::NotSubmitted
    }
}

/// Request body for PUT /api/tasks/{id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}

/// Optional filters for GET /api/tasks
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSearchQuery {
    pub student_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
}
