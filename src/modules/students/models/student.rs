use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::{Accessor, AccessorStyle, Entity, FieldValue};
use crate::core::{AppError, Result};

pub const MAX_NAME_LENGTH: usize = 100;

/// Student enrolled in a group.
///
/// `group_id` is a plain reference; nothing in storage stops it from
/// outliving the group it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub group_id: Uuid,
}

static STUDENT_ACCESSORS: [Accessor<Student>; 3] = [
    Accessor {
        field: "id",
        style: AccessorStyle::Get,
        read: |s| FieldValue::Uuid(s.id),
    },
    Accessor {
        field: "name",
        style: AccessorStyle::Get,
        read: |s| FieldValue::Text(s.name.clone()),
    },
    Accessor {
        field: "groupId",
        style: AccessorStyle::Get,
        read: |s| FieldValue::Uuid(s.group_id),
    },
];

impl Entity for Student {
    const NAME: &'static str = "Student";

    fn accessors() -> &'static [Accessor<Self>] {
        &STUDENT_ACCESSORS
    }
}

impl Student {
    /// New student with a fresh id; the name is stored trimmed
    pub fn new(name: &str, group_id: Uuid) -> Result<Self> {
        Self::validate_name(name)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            group_id,
        })
    }

    pub fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Student name must not be empty"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "Student name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(())
    }
}

/// Request body for POST /api/students
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: String,
    pub group_id: Uuid,
}

/// Request body for PUT /api/students/{id}; omitting `groupId` keeps the group
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub name: String,
    #[serde(default)]
    pub group_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentSearchQuery {
    pub name: Option<String>,
}
