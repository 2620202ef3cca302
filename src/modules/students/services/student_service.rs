use std::sync::Arc;

use uuid::Uuid;

use crate::core::entity::FieldValue;
use crate::core::error::AppError;
use crate::core::params::Params;
use crate::core::traits::Repository;
use crate::modules::groups::models::Group;
use crate::modules::students::models::Student;
use crate::modules::tasks::models::Task;
use crate::modules::tasks::services::TaskService;

/// Service for student business logic.
///
/// Reads the group repository directly for existence checks, so it does not
/// depend on `GroupService`.
pub struct StudentService {
    student_repo: Arc<dyn Repository<Student>>,
    group_repo: Arc<dyn Repository<Group>>,
    task_service: Arc<TaskService>,
}

impl StudentService {
    pub fn new(
        student_repo: Arc<dyn Repository<Student>>,
        group_repo: Arc<dyn Repository<Group>>,
        task_service: Arc<TaskService>,
    ) -> Self {
        Self {
            student_repo,
            group_repo,
            task_service,
        }
    }

    /// Enroll a student in an existing group and assign the initial tasks
    pub fn create_student(&self, name: &str, group_id: Uuid) -> Result<Student, AppError> {
        let student = Student::new(name, group_id)?;
        self.ensure_group_exists(group_id)?;

        self.student_repo.save(student.clone())?;
        self.task_service.initialize_student_tasks(student.id)?;

        tracing::info!(student_id = %student.id, %group_id, "Student created");
        Ok(student)
    }

    /// Delete a student together with its tasks
    pub fn delete_student(&self, student_id: Uuid) -> Result<(), AppError> {
        self.ensure_student_exists(student_id)?;

        self.task_service.delete_student_tasks(student_id)?;
        self.student_repo.delete_by_id(student_id)?;

        tracing::info!(%student_id, "Student deleted");
        Ok(())
    }

    pub fn get_all_students(&self) -> Vec<Student> {
        self.student_repo.find_all()
    }

    pub fn get_students_by_group(&self, group_id: Uuid) -> Result<Vec<Student>, AppError> {
        self.ensure_group_exists(group_id)?;

        let params = Params::new("groupId", group_id)?;
        Ok(self.student_repo.find(Some(&params)))
    }

    pub fn get_student_by_id(&self, student_id: Uuid) -> Result<Student, AppError> {
        self.student_repo
            .find_by_id(student_id)?
            .ok_or_else(|| AppError::not_found(format!("Student with id {} not found", student_id)))
    }

    /// Rename a student and optionally move it to another existing group
    pub fn update_student(
        &self,
        student_id: Uuid,
        name: &str,
        group_id: Option<Uuid>,
    ) -> Result<Student, AppError> {
        let mut student = self.get_student_by_id(student_id)?;

        Student::validate_name(name)?;
        student.name = name.trim().to_string();

        if let Some(group_id) = group_id {
            self.ensure_group_exists(group_id)?;
            student.group_id = group_id;
        }

        self.student_repo.save(student.clone())?;

        tracing::info!(%student_id, group_id = %student.group_id, "Student updated");
        Ok(student)
    }

    pub fn get_student_tasks(&self, student_id: Uuid) -> Result<Vec<Task>, AppError> {
        self.ensure_student_exists(student_id)?;
        self.task_service.get_tasks_by_student(student_id)
    }

    pub fn find_students_by_name(&self, name: &str) -> Result<Vec<Student>, AppError> {
        let params = Params::new("name", name)?;
        Ok(self.student_repo.find(Some(&params)))
    }

    /// Count of students referencing the group, whether or not it still exists
    pub fn get_students_count_by_group(&self, group_id: Uuid) -> Result<usize, AppError> {
        let params = Params::new("groupId", group_id)?;
        Ok(self.student_repo.count(Some(&params)))
    }

    pub fn student_exists_by_name_and_group(
        &self,
        name: &str,
        group_id: Uuid,
    ) -> Result<bool, AppError> {
        let params = Params::from_map([
            ("name", FieldValue::from(name)),
            ("groupId", FieldValue::from(group_id)),
        ])?;
        Ok(self.student_repo.exists(Some(&params)))
    }

    fn ensure_group_exists(&self, group_id: Uuid) -> Result<(), AppError> {
        if self.group_repo.exists_by_id(group_id)? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Group with id {} not found", group_id)))
        }
    }

    fn ensure_student_exists(&self, student_id: Uuid) -> Result<(), AppError> {
        if self.student_repo.exists_by_id(student_id)? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Student with id {} not found", student_id)))
        }
    }
}
