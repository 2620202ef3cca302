// Durability of the JSON mirror files
//
// Each test works in its own temporary directory, so they run in parallel.

use std::fs;

use minibrs::core::{Params, Repository, RepositoryError, Result};
use minibrs::groups::Group;
use minibrs::storage::LocalRepository;
use minibrs::students::Student;
use minibrs::tasks::{Task, TaskStatus};
use tempfile::TempDir;
use uuid::Uuid;

fn group(name: &str, course_number: i32) -> Group {
    Group {
        id: Uuid::new_v4(),
        name: name.to_string(),
        course_number,
    }
}

#[test]
fn test_saved_entities_survive_reopen() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("groups.json");

    let it21 = group("IT-21", 2);
    let pi31 = group("PI-31", 3);
    {
        let repo = LocalRepository::<Group>::open(&path)?;
        repo.save(it21.clone())?;
        repo.save(pi31.clone())?;
        repo.delete_by_id(pi31.id)?;
    }

    let reopened = LocalRepository::<Group>::open(&path)?;
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.find_by_id(it21.id)?, Some(it21));
    assert!(!reopened.exists_by_id(pi31.id)?);
    Ok(())
}

#[test]
fn test_mirror_file_layout() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("students.json");
    let group_id = Uuid::new_v4();
    let student = Student::new("Anna", group_id)?;

    LocalRepository::<Student>::open(&path)?.save(student.clone())?;

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let record = &json[student.id.to_string()];
    assert_eq!(record["id"], student.id.to_string());
    assert_eq!(record["name"], "Anna");
    assert_eq!(record["groupId"], group_id.to_string());
    assert_eq!(json.as_object().map(|o| o.len()), Some(1));
    Ok(())
}

#[test]
fn test_upsert_replaces_in_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("tasks.json");
    let mut task = Task::new(Uuid::new_v4(), 1);

    let repo = LocalRepository::<Task>::open(&path)?;
    repo.save(task.clone())?;
    task.status = TaskStatus::Submitted;
    repo.save(task.clone())?;

    let reopened = LocalRepository::<Task>::open(&path)?;
    assert_eq!(reopened.count(None), 1);
    let submitted = Params::new("submitted", true)?;
    assert_eq!(reopened.find(Some(&submitted)), vec![task]);
    Ok(())
}

#[test]
fn test_missing_empty_and_null_files_load_empty() -> Result<()> {
    let dir = TempDir::new()?;

    let missing = LocalRepository::<Group>::open(dir.path().join("absent.json"))?;
    assert!(missing.is_empty());

    let empty_path = dir.path().join("empty.json");
    fs::write(&empty_path, "")?;
    assert!(LocalRepository::<Group>::open(&empty_path)?.is_empty());

    let null_path = dir.path().join("null.json");
    fs::write(&null_path, "null")?;
    assert!(LocalRepository::<Group>::open(&null_path)?.is_empty());
    Ok(())
}

#[test]
fn test_malformed_file_is_fatal() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("groups.json");
    fs::write(&path, "{ not json")?;

    match LocalRepository::<Group>::open(&path) {
        Err(err @ RepositoryError::Serialization { .. }) => {
            assert!(err.is_persistence_failure());
            assert!(err.to_string().contains("groups.json"));
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("malformed mirror file must not load"),
    }
    Ok(())
}

#[test]
fn test_entry_under_foreign_key_is_refused() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("groups.json");
    let stored = group("IT-21", 2);
    let key = Uuid::new_v4();

    let mut document = serde_json::Map::new();
    document.insert(key.to_string(), serde_json::to_value(&stored)?);
    fs::write(&path, serde_json::to_string(&document)?)?;

    // Loading it would let a later save of the same id add a second copy
    assert!(matches!(
        LocalRepository::<Group>::open(&path),
        Err(RepositoryError::MismatchedKey { .. })
    ));
    Ok(())
}

#[test]
fn test_unwritable_mirror_reports_persistence_failure() -> Result<()> {
    let dir = TempDir::new()?;
    let blocker = dir.path().join("blocker");
    let repo = LocalRepository::<Group>::open(blocker.join("groups.json"))?;

    // The mirror's parent becomes a regular file, so the write cannot succeed
    fs::write(&blocker, "")?;
    let err = repo.save(group("IT-21", 2)).unwrap_err();
    assert!(err.is_persistence_failure());
    Ok(())
}

#[test]
fn test_group_delete_does_not_cascade_at_repository_level() -> Result<()> {
    let dir = TempDir::new()?;
    let groups = LocalRepository::<Group>::open(dir.path().join("groups.json"))?;
    let students = LocalRepository::<Student>::open(dir.path().join("students.json"))?;

    let it21 = group("ИТ-21", 2);
    groups.save(it21.clone())?;
    let anna = Student::new("Anna", it21.id)?;
    students.save(anna.clone())?;

    assert!(groups.delete_by_id(it21.id)?);

    let reopened = LocalRepository::<Student>::open(dir.path().join("students.json"))?;
    let by_group = Params::new("groupId", it21.id)?;
    assert_eq!(reopened.find(Some(&by_group)), vec![anna]);
    Ok(())
}
