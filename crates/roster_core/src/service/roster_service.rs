//! Roster use-case service.
//!
//! # Responsibility
//! - Validate names and ids before any store call.
//! - Assign ids to new entities through the injected `IdGenerator`.
//! - Emit metadata-only use-case log events (ids and error kinds, no names).
//!
//! # Invariants
//! - Id collisions are not retried; they surface as `AlreadyExists`.
//! - Created entities are read back from the store before being returned.

use crate::model::course::Course;
use crate::model::id::IdGenerator;
use crate::model::student::Student;
use crate::model::validation::{validate_entity_id, validate_name, ValidationError};
use crate::repo::error::{ErrorKind, RepoError};
use crate::repo::store::RosterStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for roster use cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Caller input rejected before reaching storage.
    Validation(ValidationError),
    /// Storage-layer failure, including domain not-found/duplicate errors.
    Repo(RepoError),
    /// Write succeeded but read-back disagreed.
    InconsistentState(&'static str),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationFailed,
            Self::Repo(err) => err.kind(),
            Self::InconsistentState(_) => ErrorKind::StorageFailure,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent roster state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Roster facade over a store backend and an id source.
pub struct RosterService<S: RosterStore, G: IdGenerator> {
    store: S,
    ids: G,
}

impl<S: RosterStore, G: IdGenerator> RosterService<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    /// Creates a course with a freshly generated id.
    pub fn create_course(&self, name: impl Into<String>) -> ServiceResult<Course> {
        let name = name.into();
        let result = self.create_course_inner(name);
        log_outcome("course_create", result.as_ref().map(|course| course.id.as_str()));
        result
    }

    fn create_course_inner(&self, name: String) -> ServiceResult<Course> {
        validate_name(&name)?;
        let course = Course::new(self.ids.generate(), name);
        self.store.create_course(&course)?;

        let stored = self.store.get_course(&course.id)?;
        if stored != course {
            return Err(ServiceError::InconsistentState(
                "created course differs in read-back",
            ));
        }
        Ok(stored)
    }

    /// Creates a student with a freshly generated id and no enrollments.
    pub fn create_student(&self, name: impl Into<String>) -> ServiceResult<Student> {
        let name = name.into();
        let result = self.create_student_inner(name);
        log_outcome(
            "student_create",
            result.as_ref().map(|student| student.id.as_str()),
        );
        result
    }

    fn create_student_inner(&self, name: String) -> ServiceResult<Student> {
        validate_name(&name)?;
        let student = Student::new(self.ids.generate(), name);
        self.store.create_student(&student)?;

        let stored = self.store.get_student(&student.id)?;
        if stored.name != student.name || !stored.courses.is_empty() {
            return Err(ServiceError::InconsistentState(
                "created student differs in read-back",
            ));
        }
        Ok(stored)
    }

    /// Gets one course by id.
    pub fn get_course(&self, id: &str) -> ServiceResult<Course> {
        validate_entity_id(id)?;
        Ok(self.store.get_course(id)?)
    }

    /// Gets one student with its enrolled courses.
    pub fn get_student(&self, id: &str) -> ServiceResult<Student> {
        validate_entity_id(id)?;
        Ok(self.store.get_student(id)?)
    }

    pub fn list_courses(&self) -> ServiceResult<Vec<Course>> {
        Ok(self.store.list_courses()?)
    }

    pub fn list_students(&self) -> ServiceResult<Vec<Student>> {
        Ok(self.store.list_students()?)
    }

    /// Enrolls a student in a course. Both ids are format-checked first,
    /// course id before student id.
    pub fn register(&self, student_id: &str, course_id: &str) -> ServiceResult<()> {
        let result = validate_entity_id(course_id)
            .and_then(|()| validate_entity_id(student_id))
            .map_err(ServiceError::from)
            .and_then(|()| {
                self.store
                    .register(student_id, course_id)
                    .map_err(ServiceError::from)
            });

        match &result {
            Ok(()) => info!(
                "event=enrollment_register module=service status=ok student_id={student_id} course_id={course_id}"
            ),
            Err(err) => warn!(
                "event=enrollment_register module=service status=error error_kind={} error={err}",
                err.kind()
            ),
        }
        result
    }
}

fn log_outcome(event: &str, outcome: Result<&str, &ServiceError>) {
    match outcome {
        Ok(id) => info!("event={event} module=service status=ok id={id}"),
        Err(err) => warn!(
            "event={event} module=service status=error error_kind={}",
            err.kind()
        ),
    }
}
