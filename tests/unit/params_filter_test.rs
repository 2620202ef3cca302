// Property-based tests for equality filters over a repository
//
// A filter is a conjunction of field == value checks. For any set of groups,
// find/count/exists/delete must agree with a plain iterator filter.

use std::collections::HashSet;

use minibrs::core::{FieldValue, Params, Repository, RepositoryError};
use minibrs::groups::Group;
use minibrs::storage::LocalRepository;
use proptest::prelude::*;
use uuid::Uuid;

const NAMES: [&str; 4] = ["IT-21", "IT-22", "PI-31", "MO-11"];

fn group_strategy() -> impl Strategy<Value = Group> {
    (0..NAMES.len(), 1i32..=6).prop_map(|(name, course)| Group {
        id: Uuid::new_v4(),
        name: NAMES[name].to_string(),
        course_number: course,
    })
}

fn repository_with(groups: &[Group]) -> LocalRepository<Group> {
    let repo = LocalRepository::in_memory();
    for group in groups {
        repo.save(group.clone()).unwrap();
    }
    repo
}

fn ids(groups: impl IntoIterator<Item = Group>) -> HashSet<Uuid> {
    groups.into_iter().map(|g| g.id).collect()
}

proptest! {
    #[test]
    fn test_find_matches_iterator_filter(
        groups in prop::collection::vec(group_strategy(), 0..30),
        name in 0..NAMES.len(),
        course in 1i32..=6,
    ) {
        let repo = repository_with(&groups);
        let params = Params::<Group>::new("name", NAMES[name])
            .and_then(|p| p.and("courseNumber", course))
            .unwrap();

        let expected: Vec<Group> = groups
            .iter()
            .filter(|g| g.name == NAMES[name] && g.course_number == course)
            .cloned()
            .collect();

        let found = repo.find(Some(&params));
        prop_assert_eq!(ids(found.clone()), ids(expected.clone()));
        prop_assert_eq!(repo.count(Some(&params)), expected.len());
        prop_assert_eq!(repo.exists(Some(&params)), !expected.is_empty());
        prop_assert_eq!(repo.find_first(Some(&params)).is_some(), !expected.is_empty());
    }

    #[test]
    fn test_no_filter_returns_everything(
        groups in prop::collection::vec(group_strategy(), 0..30),
    ) {
        let repo = repository_with(&groups);

        prop_assert_eq!(ids(repo.find(None)), ids(groups.clone()));
        prop_assert_eq!(repo.count(None), groups.len());
        prop_assert_eq!(repo.exists(None), !groups.is_empty());
    }

    #[test]
    fn test_delete_partitions_repository(
        groups in prop::collection::vec(group_strategy(), 0..30),
        course in 1i32..=6,
    ) {
        let repo = repository_with(&groups);
        let params = Params::new("courseNumber", course).unwrap();
        let matching = groups.iter().filter(|g| g.course_number == course).count();

        prop_assert_eq!(repo.delete(Some(&params)).unwrap(), matching);
        prop_assert!(!repo.exists(Some(&params)));
        prop_assert_eq!(repo.count(None), groups.len() - matching);
    }

    #[test]
    fn test_unknown_field_is_rejected(field in "[a-z]{3,12}") {
        prop_assume!(!["id", "name", "courseNumber"].contains(&field.as_str()));

        let result = Params::<Group>::new(field, FieldValue::Integer(1));
        let is_invalid_field = matches!(result, Err(RepositoryError::InvalidField { entity: "Group", .. }));
        prop_assert!(is_invalid_field);
    }
}

#[test]
fn test_filter_value_type_must_match() {
    let repo = repository_with(&[Group {
        id: Uuid::new_v4(),
        name: "IT-21".to_string(),
        course_number: 2,
    }]);

    // Text "2" never equals the integer course number
    let params = Params::new("courseNumber", "2").unwrap();
    assert!(!repo.exists(Some(&params)));
}
