//! Single-scan student/course join and its fold into `Student` read models.
//!
//! # Responsibility
//! - Fetch students with their enrollments in one statement.
//! - Fold flat `(student, course?)` rows into nested students in one pass.
//!
//! # Invariants
//! - Exactly one statement is executed per load, whatever the student count.
//! - Students without enrollments appear once, with an empty `courses` list.
//! - Output order follows the first appearance of each student in the input.

use crate::model::course::Course;
use crate::model::student::Student;
use crate::repo::error::{RepoError, RepoResult};
use rusqlite::{params_from_iter, Connection, Row};
use std::collections::HashMap;

const STUDENT_COURSES_SELECT_SQL: &str = "SELECT
    s.id AS student_id,
    s.name AS student_name,
    c.id AS course_id,
    c.name AS course_name
 FROM students s
 LEFT JOIN enrollments e ON e.student_id = s.id
 LEFT JOIN courses c ON c.id = e.course_id";

/// One flat join row: a student paired with at most one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCourseRow {
    pub student_id: String,
    pub student_name: String,
    /// `None` for a student without enrollments.
    pub course_id: Option<String>,
    pub course_name: Option<String>,
}

impl StudentCourseRow {
    /// Row for a student with no matching course.
    pub fn unenrolled(student_id: impl Into<String>, student_name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            student_name: student_name.into(),
            course_id: None,
            course_name: None,
        }
    }

    /// Row pairing a student with one enrolled course.
    pub fn enrolled(
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        course: &Course,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            student_name: student_name.into(),
            course_id: Some(course.id.clone()),
            course_name: Some(course.name.clone()),
        }
    }
}

/// Loads students with their courses using one outer-join statement.
///
/// `student_id = Some(id)` narrows the scan to one student; the result is then
/// empty or a single element.
pub fn load_students(conn: &Connection, student_id: Option<&str>) -> RepoResult<Vec<Student>> {
    let filter = if student_id.is_some() {
        " WHERE s.id = ?1"
    } else {
        ""
    };
    let sql = format!("{STUDENT_COURSES_SELECT_SQL}{filter} ORDER BY s.id ASC, c.id ASC;");

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(student_id))?;
    let mut flat = Vec::new();
    while let Some(row) = rows.next()? {
        flat.push(parse_join_row(row)?);
    }

    fold_student_rows(flat)
}

/// Groups flat join rows by student id into nested `Student` values.
///
/// Runs in O(rows). A course id without a course name means the join saw a
/// half-populated course row and is reported as invalid data.
pub fn fold_student_rows(
    rows: impl IntoIterator<Item = StudentCourseRow>,
) -> RepoResult<Vec<Student>> {
    let mut students: Vec<Student> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let index = match positions.get(row.student_id.as_str()) {
            Some(&index) => index,
            None => {
                positions.insert(row.student_id.clone(), students.len());
                students.push(Student::new(row.student_id.clone(), row.student_name));
                students.len() - 1
            }
        };

        match (row.course_id, row.course_name) {
            (Some(id), Some(name)) => students[index].courses.push(Course { id, name }),
            (Some(id), None) => {
                return Err(RepoError::InvalidData(format!(
                    "course `{id}` joined for student `{}` has no name",
                    row.student_id
                )));
            }
            (None, _) => {}
        }
    }

    Ok(students)
}

fn parse_join_row(row: &Row<'_>) -> RepoResult<StudentCourseRow> {
    Ok(StudentCourseRow {
        student_id: row.get("student_id")?,
        student_name: row.get("student_name")?,
        course_id: row.get("course_id")?,
        course_name: row.get("course_name")?,
    })
}
