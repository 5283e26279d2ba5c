//! Enrollment relation manager: the only writer of the `enrollments` table.
//!
//! # Invariants
//! - An edge is inserted only after both endpoints were found.
//! - The course is resolved before the student, so `CourseNotFound` wins when
//!   both ids are unknown.
//! - Re-registering an existing pair is a no-op; the pair is unique.

use crate::repo::course_repo::course_exists;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::student_repo::student_exists;
use log::debug;
use rusqlite::{params, Connection, Transaction, TransactionBehavior};

/// Storage contract for the student/course enrollment edges.
pub trait EnrollmentRepository {
    /// Enrolls `student_id` in `course_id`.
    fn register(&self, student_id: &str, course_id: &str) -> RepoResult<()>;
}

/// SQLite-backed enrollment repository over a migrated connection.
pub struct SqliteEnrollmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEnrollmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EnrollmentRepository for SqliteEnrollmentRepository<'_> {
    fn register(&self, student_id: &str, course_id: &str) -> RepoResult<()> {
        // IMMEDIATE takes the write lock up front so the existence checks and
        // the insert see one consistent snapshot.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        if !course_exists(&tx, course_id)? {
            return Err(RepoError::CourseNotFound(course_id.to_string()));
        }
        if !student_exists(&tx, student_id)? {
            return Err(RepoError::StudentNotFound(student_id.to_string()));
        }

        let inserted = tx.execute(
            "INSERT OR IGNORE INTO enrollments (student_id, course_id) VALUES (?1, ?2);",
            params![student_id, course_id],
        )?;
        tx.commit()?;

        if inserted == 0 {
            debug!(
                "event=enrollment_register module=repo status=noop student_id={student_id} course_id={course_id}"
            );
        }
        Ok(())
    }
}
