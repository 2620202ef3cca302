// End-to-end enrollment flow through the services, backed by mirror files

use std::sync::Arc;
use std::thread;

use minibrs::config::StorageConfig;
use minibrs::core::{AppError, Repository, Result};
use minibrs::storage::LocalRepository;
use minibrs::tasks::{Task, TaskStatus};
use minibrs::AppServices;
use tempfile::TempDir;
use uuid::Uuid;

fn storage() -> (TempDir, StorageConfig) {
    let dir = TempDir::new().unwrap();
    let storage = StorageConfig::new(dir.path().join("data"));
    (dir, storage)
}

#[test]
fn test_enroll_submit_and_report() -> Result<()> {
    let (_dir, storage) = storage();
    let services = AppServices::open(&storage)?;

    let group = services.groups.create_group("IT-21", 2)?;
    let anna = services.students.create_student("Anna", group.id)?;
    let boris = services.students.create_student("Boris", group.id)?;

    let tasks = services.students.get_student_tasks(anna.id)?;
    assert_eq!(tasks.len(), 3);
    assert!(tasks.iter().all(|t| t.status == TaskStatus::NotSubmitted));

    for number in [1, 3] {
        let task = services.tasks.get_task_by_student_and_number(anna.id, number)?;
        services.tasks.update_task_status(task.id, TaskStatus::Submitted)?;
    }

    let report = services.groups.get_group_report(group.id)?;
    assert_eq!(report.students.len(), 2);
    assert_eq!(report.students[0].student.id, anna.id);
    assert_eq!(report.students[0].completed, 2);
    assert_eq!(report.students[1].student.id, boris.id);
    assert_eq!(report.students[1].completed, 0);
    assert_eq!(report.total_completed, 2);
    assert_eq!(report.total_tasks, 6);

    // Everything is visible after reopening the same data directory
    let reopened = AppServices::open(&storage)?;
    assert_eq!(reopened.tasks.get_completed_tasks_count(anna.id)?, 2);
    assert_eq!(reopened.groups.get_group_by_id(group.id)?, group);
    Ok(())
}

#[test]
fn test_move_student_between_groups() -> Result<()> {
    let (_dir, storage) = storage();
    let services = AppServices::open(&storage)?;

    let it21 = services.groups.create_group("IT-21", 2)?;
    let it22 = services.groups.create_group("IT-22", 2)?;
    let anna = services.students.create_student("Anna", it21.id)?;

    services.students.update_student(anna.id, "Anna", Some(it22.id))?;

    assert!(services.students.get_students_by_group(it21.id)?.is_empty());
    assert_eq!(services.students.get_students_by_group(it22.id)?.len(), 1);
    // Tasks follow the student, not the group
    assert_eq!(services.tasks.get_tasks_by_student(anna.id)?.len(), 3);
    Ok(())
}

#[test]
fn test_delete_group_cascades_to_files() -> Result<()> {
    let (_dir, storage) = storage();
    let services = AppServices::open(&storage)?;

    let doomed = services.groups.create_group("IT-21", 2)?;
    let kept = services.groups.create_group("PI-31", 3)?;
    let anna = services.students.create_student("Anna", doomed.id)?;
    let boris = services.students.create_student("Boris", kept.id)?;

    services.groups.delete_group(doomed.id)?;

    let reopened = AppServices::open(&storage)?;
    assert!(!reopened.groups.group_exists(doomed.id)?);
    assert!(matches!(
        reopened.students.get_student_by_id(anna.id),
        Err(AppError::NotFound(_))
    ));
    assert!(reopened.tasks.get_tasks_by_student(anna.id)?.is_empty());
    assert_eq!(reopened.tasks.get_tasks_by_student(boris.id)?.len(), 3);
    assert_eq!(reopened.tasks.get_total_tasks_count(), 3);
    Ok(())
}

#[test]
fn test_operations_on_unknown_ids() {
    let services = AppServices::in_memory();
    let unknown = Uuid::new_v4();

    assert!(matches!(
        services.students.create_student("Anna", unknown),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        services.groups.get_group_report(unknown),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        services.students.delete_student(unknown),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        services.tasks.update_task_status(unknown, TaskStatus::Submitted),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_concurrent_saves_are_all_mirrored() -> Result<()> {
    let (_dir, storage) = storage();
    storage.ensure_data_dir()?;
    let repo = Arc::new(LocalRepository::<Task>::open(storage.tasks_path())?);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = repo.clone();
            thread::spawn(move || {
                let student_id = Uuid::new_v4();
                for number in 1..=3 {
                    repo.save(Task::new(student_id, number)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let reopened = LocalRepository::<Task>::open(storage.tasks_path())?;
    assert_eq!(reopened.count(None), 24);
    Ok(())
}
