// Validation rules for groups and students
//
// Names are measured in characters, not bytes, and blank names are refused.

use minibrs::core::AppError;
use minibrs::groups::Group;
use minibrs::students::Student;
use proptest::prelude::*;
use uuid::Uuid;

proptest! {
    #[test]
    fn test_course_number_range(course in -20i32..20) {
        let result = Group::new("IT-21".to_string(), course);
        prop_assert_eq!(result.is_ok(), (1..=6).contains(&course));
    }

    #[test]
    fn test_group_name_length_counts_characters(len in 1usize..80) {
        let name = "Я".repeat(len);
        prop_assert_eq!(Group::new(name, 1).is_ok(), len <= 50);
    }

    #[test]
    fn test_student_name_is_stored_trimmed(name in "[A-Za-z]{1,20}", pad in 0usize..5) {
        let padded = format!("{}{}{}", " ".repeat(pad), name, " ".repeat(pad));
        let student = Student::new(&padded, Uuid::new_v4()).unwrap();
        prop_assert_eq!(student.name, name);
    }
}

#[test]
fn test_blank_names_are_validation_errors() {
    assert!(matches!(
        Group::new(" \t ".to_string(), 1),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        Student::new("   ", Uuid::new_v4()),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_student_name_limit() {
    assert!(Student::new(&"ы".repeat(100), Uuid::new_v4()).is_ok());
    assert!(Student::new(&"ы".repeat(101), Uuid::new_v4()).is_err());
}
