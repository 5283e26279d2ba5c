//! Course repository contract and SQLite implementation.
//!
//! # Invariants
//! - `create_course` is a single `INSERT`; the primary key arbitrates
//!   concurrent creates with the same id.
//! - `get_course` reports `CourseNotFound`, never a default course.

use crate::model::course::Course;
use crate::repo::error::{is_duplicate_key, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const COURSE_SELECT_SQL: &str = "SELECT id, name FROM courses";

/// Storage contract for courses.
pub trait CourseRepository {
    /// Persists a new course, failing with `CourseAlreadyExists` on id reuse.
    fn create_course(&self, course: &Course) -> RepoResult<()>;
    /// Loads one course by id.
    fn get_course(&self, id: &str) -> RepoResult<Course>;
    /// Lists every course ordered by id. Empty when none exist.
    fn list_courses(&self) -> RepoResult<Vec<Course>>;
}

/// SQLite-backed course repository over a migrated connection.
pub struct SqliteCourseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCourseRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CourseRepository for SqliteCourseRepository<'_> {
    fn create_course(&self, course: &Course) -> RepoResult<()> {
        match self.conn.execute(
            "INSERT INTO courses (id, name) VALUES (?1, ?2);",
            params![course.id.as_str(), course.name.as_str()],
        ) {
            Ok(_) => Ok(()),
            Err(err) if is_duplicate_key(&err) => {
                Err(RepoError::CourseAlreadyExists(course.id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_course(&self, id: &str) -> RepoResult<Course> {
        self.conn
            .query_row(
                &format!("{COURSE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_course_row,
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => RepoError::CourseNotFound(id.to_string()),
                other => other.into(),
            })
    }

    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} ORDER BY id ASC;"))?;
        let courses = stmt
            .query_map([], parse_course_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(courses)
    }
}

/// Returns whether a course row with `id` exists.
pub(crate) fn course_exists(conn: &Connection, id: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?1);",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn parse_course_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
