//! Student repository contract and SQLite implementation.
//!
//! # Invariants
//! - Reads always materialize `courses` through the single-join loader.
//! - Writes never touch `enrollments`; that table belongs to the enrollment
//!   repository.

use crate::model::student::Student;
use crate::repo::error::{is_duplicate_key, RepoError, RepoResult};
use crate::repo::student_join::load_students;
use rusqlite::{params, Connection};

/// Storage contract for students and their enrolled-course view.
pub trait StudentRepository {
    /// Persists a new student. `student.courses` is ignored.
    fn create_student(&self, student: &Student) -> RepoResult<()>;
    /// Loads one student with the full current set of enrolled courses.
    fn get_student(&self, id: &str) -> RepoResult<Student>;
    /// Lists every student, each with its courses, ordered by id.
    fn list_students(&self) -> RepoResult<Vec<Student>>;
}

/// SQLite-backed student repository over a migrated connection.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn create_student(&self, student: &Student) -> RepoResult<()> {
        match self.conn.execute(
            "INSERT INTO students (id, name) VALUES (?1, ?2);",
            params![student.id.as_str(), student.name.as_str()],
        ) {
            Ok(_) => Ok(()),
            Err(err) if is_duplicate_key(&err) => {
                Err(RepoError::StudentAlreadyExists(student.id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_student(&self, id: &str) -> RepoResult<Student> {
        load_students(self.conn, Some(id))?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::StudentNotFound(id.to_string()))
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        load_students(self.conn, None)
    }
}

/// Returns whether a student row with `id` exists.
pub(crate) fn student_exists(conn: &Connection, id: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM students WHERE id = ?1);",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
