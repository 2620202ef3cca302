use std::path::{Path, PathBuf};

use crate::core::{AppError, Result};

pub const GROUPS_FILE: &str = "groups.json";
pub const STUDENTS_FILE: &str = "students.json";
pub const TASKS_FILE: &str = "tasks.json";

/// Location of the JSON mirror files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn groups_path(&self) -> PathBuf {
        self.data_dir.join(GROUPS_FILE)
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(STUDENTS_FILE)
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE)
    }

    /// Create the data directory if it does not exist yet
    pub fn ensure_data_dir(&self) -> Result<&Path> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| {
            AppError::Configuration(format!(
                "Cannot create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;
        Ok(&self.data_dir)
    }
}
