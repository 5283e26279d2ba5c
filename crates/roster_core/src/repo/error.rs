//! Repository error contract shared by every storage backend.
//!
//! # Invariants
//! - Conditions the store can distinguish (duplicate id, missing entity) are
//!   always reported as their domain variant, never as a raw driver error.
//! - Every error maps onto exactly one [`ErrorKind`].

use crate::db::DbError;
use rusqlite::ffi;
use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Transport-independent error classification.
///
/// Outer layers translate these into their own failure codes
/// (HTTP status, process exit code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Create with an id that is already taken.
    AlreadyExists,
    /// Lookup or link referencing an absent entity.
    NotFound,
    /// Malformed caller input, rejected before reaching storage.
    ValidationFailed,
    /// Any other driver, I/O or consistency failure.
    StorageFailure,
}

impl ErrorKind {
    /// Stable snake_case label used in log events and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyExists => "already_exists",
            Self::NotFound => "not_found",
            Self::ValidationFailed => "validation_failed",
            Self::StorageFailure => "storage_failure",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by course, student and enrollment repositories.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite or bootstrap error.
    Db(DbError),
    CourseAlreadyExists(String),
    StudentAlreadyExists(String),
    CourseNotFound(String),
    StudentNotFound(String),
    /// Persisted rows cannot be turned into a valid read model.
    InvalidData(String),
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CourseAlreadyExists(_) | Self::StudentAlreadyExists(_) => {
                ErrorKind::AlreadyExists
            }
            Self::CourseNotFound(_) | Self::StudentNotFound(_) => ErrorKind::NotFound,
            Self::Db(_) | Self::InvalidData(_) => ErrorKind::StorageFailure,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::CourseAlreadyExists(id) => write!(f, "course already exists: {id}"),
            Self::StudentAlreadyExists(id) => write!(f, "student already exists: {id}"),
            Self::CourseNotFound(id) => write!(f, "course does not exist: {id}"),
            Self::StudentNotFound(id) => write!(f, "student does not exist: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted roster data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Returns whether `err` is SQLite rejecting a duplicate primary/unique key.
pub(crate) fn is_duplicate_key(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => {
            failure.code == ErrorCode::ConstraintViolation
                && matches!(
                    failure.extended_code,
                    ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}
