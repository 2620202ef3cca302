use std::sync::Arc;

use uuid::Uuid;

use crate::core::entity::FieldValue;
use crate::core::error::AppError;
use crate::core::params::Params;
use crate::core::traits::Repository;
use crate::modules::groups::models::{Group, GroupReport, GroupSearchQuery, StudentProgress};
use crate::modules::students::services::StudentService;
use crate::modules::tasks::services::REQUIRED_TASKS_COUNT;

/// Service for group business logic
pub struct GroupService {
    group_repo: Arc<dyn Repository<Group>>,
    student_service: Arc<StudentService>,
}

impl GroupService {
    pub fn new(group_repo: Arc<dyn Repository<Group>>, student_service: Arc<StudentService>) -> Self {
        Self {
            group_repo,
            student_service,
        }
    }

    pub fn create_group(&self, name: &str, course_number: i32) -> Result<Group, AppError> {
        let group = Group::new(name.to_string(), course_number)?;
        self.group_repo.save(group.clone())?;

        tracing::info!(group_id = %group.id, name = %group.name, "Group created");
        Ok(group)
    }

    pub fn update_group(
        &self,
        group_id: Uuid,
        name: &str,
        course_number: i32,
    ) -> Result<Group, AppError> {
        let mut group = self.get_group_by_id(group_id)?;

        Group::validate_name(name)?;
        Group::validate_course_number(course_number)?;
        group.name = name.to_string();
        group.course_number = course_number;

        self.group_repo.save(group.clone())?;

        tracing::info!(%group_id, "Group updated");
        Ok(group)
    }

    pub fn get_group_by_id(&self, group_id: Uuid) -> Result<Group, AppError> {
        self.group_repo
            .find_by_id(group_id)?
            .ok_or_else(|| AppError::not_found(format!("Group with id {} not found", group_id)))
    }

    /// All groups ordered by course, then name
    pub fn get_all_groups(&self) -> Vec<Group> {
        let mut groups = self.group_repo.find_all();
        sort_groups(&mut groups);
        groups
    }

    pub fn group_exists(&self, group_id: Uuid) -> Result<bool, AppError> {
        Ok(self.group_repo.exists_by_id(group_id)?)
    }

    /// Delete a group, its students and their tasks
    pub fn delete_group(&self, group_id: Uuid) -> Result<(), AppError> {
        let students = self.student_service.get_students_by_group(group_id)?;
        for student in &students {
            self.student_service.delete_student(student.id)?;
        }

        self.group_repo.delete_by_id(group_id)?;

        tracing::info!(%group_id, students = students.len(), "Group deleted");
        Ok(())
    }

    /// Task progress of each student in the group, students ordered by name
    pub fn get_group_report(&self, group_id: Uuid) -> Result<GroupReport, AppError> {
        let group = self.get_group_by_id(group_id)?;

        let mut students = self.student_service.get_students_by_group(group_id)?;
        students.sort_by(|a, b| a.name.cmp(&b.name));

        let mut progress = Vec::with_capacity(students.len());
        for student in students {
            let tasks = self.student_service.get_student_tasks(student.id)?;
            progress.push(StudentProgress::new(student, tasks));
        }

        Ok(GroupReport::new(group, progress, REQUIRED_TASKS_COUNT as usize))
    }

    pub fn find_groups_by_name(&self, name: &str) -> Result<Vec<Group>, AppError> {
        let params = Params::new("name", name)?;
        Ok(self.group_repo.find(Some(&params)))
    }

    pub fn find_groups_by_course_number(&self, course_number: i32) -> Result<Vec<Group>, AppError> {
        let params = Params::new("courseNumber", course_number)?;
        Ok(self.group_repo.find(Some(&params)))
    }

    /// Groups matching the optional name and course filters
    pub fn search_groups(&self, query: &GroupSearchQuery) -> Result<Vec<Group>, AppError> {
        let mut filters: Vec<(&str, FieldValue)> = Vec::new();
        if let Some(name) = &query.name {
            filters.push(("name", name.as_str().into()));
        }
        if let Some(course_number) = query.course_number {
            filters.push(("courseNumber", course_number.into()));
        }

        if filters.is_empty() {
            return Ok(self.get_all_groups());
        }

        let params = Params::from_map(filters)?;
        let mut groups = self.group_repo.find(Some(&params));
        sort_groups(&mut groups);
        Ok(groups)
    }
}

fn sort_groups(groups: &mut [Group]) {
    groups.sort_by(|a, b| {
        a.course_number
            .cmp(&b.course_number)
            .then_with(|| a.name.cmp(&b.name))
    });
}
