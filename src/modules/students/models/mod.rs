mod student;

pub use student::{CreateStudentRequest, Student, StudentSearchQuery, UpdateStudentRequest};
