// Application wiring
//
// Services are built bottom-up: tasks, then students (which also read the
// group repository), then groups.

use std::sync::Arc;

use actix_web::web;

use crate::config::StorageConfig;
use crate::core::{Repository, Result};
use crate::modules::groups::{Group, GroupService};
use crate::modules::students::{Student, StudentService};
use crate::modules::tasks::{Task, TaskService};
use crate::storage::LocalRepository;

/// The three services sharing one set of repositories
#[derive(Clone)]
pub struct AppServices {
    pub groups: Arc<GroupService>,
    pub students: Arc<StudentService>,
    pub tasks: Arc<TaskService>,
    storage: Option<StorageConfig>,
}

impl AppServices {
    /// Open the mirror files under the data directory and wire the services
    pub fn open(storage: &StorageConfig) -> Result<Self> {
        storage.ensure_data_dir()?;

        let groups = Arc::new(LocalRepository::<Group>::open(storage.groups_path())?);
        let students = Arc::new(LocalRepository::<Student>::open(storage.students_path())?);
        let tasks = Arc::new(LocalRepository::<Task>::open(storage.tasks_path())?);

        let mut services = Self::from_repositories(groups, students, tasks);
        services.storage = Some(storage.clone());
        Ok(services)
    }

    pub fn from_repositories(
        groups: Arc<dyn Repository<Group>>,
        students: Arc<dyn Repository<Student>>,
        tasks: Arc<dyn Repository<Task>>,
    ) -> Self {
        let task_service = Arc::new(TaskService::new(tasks));
        let student_service = Arc::new(StudentService::new(
            students,
            groups.clone(),
            task_service.clone(),
        ));
        let group_service = Arc::new(GroupService::new(groups, student_service.clone()));

        Self {
            groups: group_service,
            students: student_service,
            tasks: task_service,
            storage: None,
        }
    }

    /// In-memory services with no mirror files
    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(LocalRepository::<Group>::in_memory()),
            Arc::new(LocalRepository::<Student>::in_memory()),
            Arc::new(LocalRepository::<Task>::in_memory()),
        )
    }

    /// Register the services as application data for the controllers
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.groups.clone()))
            .app_data(web::Data::new(self.students.clone()))
            .app_data(web::Data::new(self.tasks.clone()));

        if let Some(storage) = &self.storage {
            cfg.app_data(web::Data::new(storage.clone()));
        }
    }
}
