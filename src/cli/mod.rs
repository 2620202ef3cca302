use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

pub mod commands;

pub use commands::run;

#[derive(Parser, Debug)]
#[command(name = "minibrs")]
#[command(about = "Student groups, enrollments and task submissions backed by JSON files")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Create a group and enroll a student
    minibrs create-group IT-21 2
    minibrs cs Anna <group-id>

    # Mark the second task of a student as submitted
    minibrs mark-task <student-id> 2

    # Serve the HTTP API from another data directory
    minibrs --data-dir /var/lib/minibrs serve
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the JSON mirror files (overrides DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Create a group
    #[command(visible_alias = "cg")]
    CreateGroup { name: String, course: i32 },

    /// List all groups
    #[command(visible_alias = "lg")]
    ListGroups,

    /// Rename a group and change its course
    #[command(visible_alias = "ug")]
    UpdateGroup { id: Uuid, name: String, course: i32 },

    /// Delete a group with its students and their tasks
    #[command(visible_alias = "dg")]
    DeleteGroup { id: Uuid },

    /// Show task progress of every student in a group
    #[command(visible_alias = "rg")]
    ReportGroup { id: Uuid },

    /// Enroll a student in a group
    #[command(visible_alias = "cs")]
    CreateStudent { name: String, group_id: Uuid },

    /// List the students of a group
    #[command(visible_alias = "ls")]
    ListStudents { group_id: Uuid },

    /// Rename a student and move it to a group
    #[command(visible_alias = "us")]
    UpdateStudent { id: Uuid, name: String, group_id: Uuid },

    /// Delete a student with its tasks
    #[command(visible_alias = "ds")]
    DeleteStudent { id: Uuid },

    /// List the tasks of a student
    #[command(visible_alias = "lt")]
    ListTasks { student_id: Uuid },

    /// Mark a task as submitted
    #[command(visible_alias = "mt")]
    MarkTask { student_id: Uuid, number: i32 },

    /// Mark a task as not submitted
    #[command(visible_alias = "rt")]
    ResetTask { student_id: Uuid, number: i32 },

    /// Start the HTTP server
    Serve,
}
