//! Core roster domain: courses, students and their enrollments.
//! This crate owns the storage contracts and their invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::course::Course;
pub use model::id::{IdGenerator, RandomIdGenerator, ID_LEN, ID_SPACE};
pub use model::student::Student;
pub use model::validation::{validate_entity_id, validate_name, ValidationError};
pub use repo::course_repo::{CourseRepository, SqliteCourseRepository};
pub use repo::enrollment_repo::{EnrollmentRepository, SqliteEnrollmentRepository};
pub use repo::error::{ErrorKind, RepoError, RepoResult};
pub use repo::memory::InMemoryRosterStore;
pub use repo::store::{open_store, RosterStore, SqliteRosterStore, StoreBackend};
pub use repo::student_join::{fold_student_rows, load_students, StudentCourseRow};
pub use repo::student_repo::{SqliteStudentRepository, StudentRepository};
pub use service::roster_service::{RosterService, ServiceError, ServiceResult};

/// Minimal health-check API for wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
