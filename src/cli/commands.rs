use std::io::Write;

use uuid::Uuid;

use crate::app::AppServices;
use crate::cli::Commands;
use crate::core::{AppError, Result};
use crate::modules::groups::models::{Group, GroupReport};
use crate::modules::students::models::Student;
use crate::modules::tasks::models::{Task, TaskStatus};
use crate::modules::tasks::services::REQUIRED_TASKS_COUNT;

/// Run one console command against the services, writing the result to `out`.
///
/// `Serve` is handled by the binary and is rejected here.
pub fn run(command: Commands, services: &AppServices, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::CreateGroup { name, course } => {
            let group = services.groups.create_group(&name, course)?;
            writeln!(out, "Created group {}", format_group(&group))?;
        }
        Commands::ListGroups => {
            let groups = services.groups.get_all_groups();
            if groups.is_empty() {
                writeln!(out, "No groups")?;
            }
            for group in &groups {
                let students = services.students.get_students_count_by_group(group.id)?;
                writeln!(
                    out,
                    "{} (course {}) - {} students [{}]",
                    group.name, group.course_number, students, group.id
                )?;
            }
        }
        Commands::UpdateGroup { id, name, course } => {
            let group = services.groups.update_group(id, &name, course)?;
            writeln!(out, "Updated group {}", format_group(&group))?;
        }
        Commands::DeleteGroup { id } => {
            services.groups.delete_group(id)?;
            writeln!(out, "Deleted group {}", id)?;
        }
        Commands::ReportGroup { id } => {
            let report = services.groups.get_group_report(id)?;
            write_report(out, &report)?;
        }
        Commands::CreateStudent { name, group_id } => {
            let student = services.students.create_student(&name, group_id)?;
            writeln!(out, "Created student {}", format_student(&student))?;
        }
        Commands::ListStudents { group_id } => {
            let mut students = services.students.get_students_by_group(group_id)?;
            students.sort_by(|a, b| a.name.cmp(&b.name));
            if students.is_empty() {
                writeln!(out, "No students")?;
            }
            for student in &students {
                let submitted = services.tasks.get_completed_tasks_count(student.id)?;
                writeln!(
                    out,
                    "{} [submitted {}/{}] [{}]",
                    student.name, submitted, REQUIRED_TASKS_COUNT, student.id
                )?;
            }
        }
        Commands::UpdateStudent { id, name, group_id } => {
            let student = services.students.update_student(id, &name, Some(group_id))?;
            writeln!(out, "Updated student {}", format_student(&student))?;
        }
        Commands::DeleteStudent { id } => {
            services.students.delete_student(id)?;
            writeln!(out, "Deleted student {}", id)?;
        }
        Commands::ListTasks { student_id } => {
            for task in services.students.get_student_tasks(student_id)? {
                writeln!(out, "{}", format_task(&task))?;
            }
        }
        Commands::MarkTask { student_id, number } => {
            let task = set_task_status(services, student_id, number, TaskStatus::Submitted)?;
            writeln!(out, "{}", format_task(&task))?;
        }
        Commands::ResetTask { student_id, number } => {
            let task = set_task_status(services, student_id, number, TaskStatus::NotSubmitted)?;
            writeln!(out, "{}", format_task(&task))?;
        }
        Commands::Serve => {
            return Err(AppError::internal("serve is not a console command"));
        }
    }

    Ok(())
}

fn set_task_status(
    services: &AppServices,
    student_id: Uuid,
    number: i32,
    status: TaskStatus,
) -> Result<Task> {
    if !(1..=REQUIRED_TASKS_COUNT).contains(&number) {
        return Err(AppError::validation(format!(
            "Task number must be between 1 and {}",
            REQUIRED_TASKS_COUNT
        )));
    }

    services.students.get_student_by_id(student_id)?;
    let task = services
        .tasks
        .get_task_by_student_and_number(student_id, number)?;
    services.tasks.update_task_status(task.id, status)
}

fn format_group(group: &Group) -> String {
    format!("{} (course {}) [{}]", group.name, group.course_number, group.id)
}

fn format_student(student: &Student) -> String {
    format!("{} [{}] group {}", student.name, student.id, student.group_id)
}

fn format_task(task: &Task) -> String {
    let mark = if task.is_submitted() { "x" } else { " " };
    format!("[{}] task {} {} [{}]", mark, task.number, task.status, task.id)
}

fn progress_label(completed: usize) -> &'static str {
    if completed == 0 {
        "[NONE SUBMITTED]"
    } else if completed >= REQUIRED_TASKS_COUNT as usize {
        "[ALL SUBMITTED]"
    } else {
        "[PARTIAL]"
    }
}

fn write_report(out: &mut impl Write, report: &GroupReport) -> Result<()> {
    writeln!(out, "Group {}", format_group(&report.group))?;
    writeln!(out, "Students: {}", report.students.len())?;
    if report.students.is_empty() {
        writeln!(out, "  No students")?;
    }
    for row in &report.students {
        let marks: Vec<String> = row
            .tasks
            .iter()
            .map(|t| format!("{}{}", t.number, if t.is_submitted() { "+" } else { "-" }))
            .collect();
        writeln!(
            out,
            "  {}: {}/{} ({}) {}",
            row.student.name,
            row.completed,
            REQUIRED_TASKS_COUNT,
            marks.join(" "),
            progress_label(row.completed)
        )?;
    }
    writeln!(
        out,
        "Total: {}/{} submitted ({:.1}%)",
        report.total_completed, report.total_tasks, report.completion_percent
    )?;
    Ok(())
}
