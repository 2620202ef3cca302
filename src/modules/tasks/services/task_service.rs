use std::sync::Arc;

use uuid::Uuid;

use crate::core::entity::FieldValue;
use crate::core::error::AppError;
use crate::core::params::Params;
use crate::core::traits::Repository;
use crate::modules::tasks::models::{Task, TaskSearchQuery, TaskStatus};

/// Number of tasks every student is assigned
pub const REQUIRED_TASKS_COUNT: i32 = 3;

/// Service for task business logic
pub struct TaskService {
    task_repo: Arc<dyn Repository<Task>>,
}

impl TaskService {
    pub fn new(task_repo: Arc<dyn Repository<Task>>) -> Self {
        Self { task_repo }
    }

    /// Create tasks 1..=REQUIRED_TASKS_COUNT for a new student
    pub fn initialize_student_tasks(&self, student_id: Uuid) -> Result<Vec<Task>, AppError> {
        let mut tasks = Vec::with_capacity(REQUIRED_TASKS_COUNT as usize);
        for number in 1..=REQUIRED_TASKS_COUNT {
            let task = Task::new(student_id, number);
            self.task_repo.save(task.clone())?;
            tasks.push(task);
        }

        tracing::debug!(%student_id, count = tasks.len(), "Student tasks initialized");
        Ok(tasks)
    }

    pub fn update_task_status(&self, task_id: Uuid, status: TaskStatus) -> Result<Task, AppError> {
        let mut task = self.get_task_by_id(task_id)?;
        task.status = status;
        self.task_repo.save(task.clone())?;

        tracing::info!(%task_id, %status, "Task status updated");
        Ok(task)
    }

    pub fn get_task_by_id(&self, task_id: Uuid) -> Result<Task, AppError> {
        self.task_repo
            .find_by_id(task_id)?
            .ok_or_else(|| AppError::not_found(format!("Task with id {} not found", task_id)))
    }

    /// A student's tasks ordered by number
    pub fn get_tasks_by_student(&self, student_id: Uuid) -> Result<Vec<Task>, AppError> {
        let params = Params::new("studentId", student_id)?;
        let mut tasks = self.task_repo.find(Some(&params));
        tasks.sort_by_key(|t| t.number);
        Ok(tasks)
    }

    pub fn get_completed_tasks_count(&self, student_id: Uuid) -> Result<usize, AppError> {
        self.count_by_student_and_status(student_id, TaskStatus::Submitted)
    }

    pub fn get_pending_tasks_count(&self, student_id: Uuid) -> Result<usize, AppError> {
        self.count_by_student_and_status(student_id, TaskStatus::NotSubmitted)
    }

    pub fn get_tasks_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, AppError> {
        let params = Params::new("status", status)?;
        Ok(self.task_repo.find(Some(&params)))
    }

    /// Tasks matching the optional student and status filters
    pub fn search_tasks(&self, query: &TaskSearchQuery) -> Result<Vec<Task>, AppError> {
        let mut filters: Vec<(&str, FieldValue)> = Vec::new();
        if let Some(student_id) = query.student_id {
            filters.push(("studentId", student_id.into()));
        }
        if let Some(status) = query.status {
            filters.push(("status", status.into()));
        }

        if filters.is_empty() {
            return Ok(self.task_repo.find_all());
        }

        let params = Params::from_map(filters)?;
        Ok(self.task_repo.find(Some(&params)))
    }

    pub fn get_task_by_student_and_number(
        &self,
        student_id: Uuid,
        number: i32,
    ) -> Result<Task, AppError> {
        let params = Self::student_and_number(student_id, number)?;
        self.task_repo.find_first(Some(&params)).ok_or_else(|| {
            AppError::not_found(format!(
                "Task #{} for student {} not found",
                number, student_id
            ))
        })
    }

    pub fn task_exists_by_student_and_number(
        &self,
        student_id: Uuid,
        number: i32,
    ) -> Result<bool, AppError> {
        let params = Self::student_and_number(student_id, number)?;
        Ok(self.task_repo.exists(Some(&params)))
    }

    /// Remove every task of a student, returning how many were removed
    pub fn delete_student_tasks(&self, student_id: Uuid) -> Result<usize, AppError> {
        let params = Params::new("studentId", student_id)?;
        let removed = self.task_repo.delete(Some(&params))?;

        tracing::debug!(%student_id, count = removed, "Student tasks deleted");
        Ok(removed)
    }

    pub fn get_total_tasks_count(&self) -> usize {
        self.task_repo.count(None)
    }

    pub fn get_tasks_count_by_status(&self, status: TaskStatus) -> Result<usize, AppError> {
        let params = Params::new("status", status)?;
        Ok(self.task_repo.count(Some(&params)))
    }

    fn count_by_student_and_status(
        &self,
        student_id: Uuid,
        status: TaskStatus,
    ) -> Result<usize, AppError> {
        let params = Params::new("studentId", student_id)?.and("status", status)?;
        Ok(self.task_repo.count(Some(&params)))
    }

    fn student_and_number(student_id: Uuid, number: i32) -> Result<Params<Task>, AppError> {
        Ok(Params::new("studentId", student_id)?.and("number", number)?)
    }
}
