//! Map-backed roster store for tests and ephemeral runs.
//!
//! # Invariants
//! - One `RwLock` guards all tables, so every operation is atomic with
//!   respect to the others.
//! - Joined student views go through the same row fold as SQLite.

use crate::model::course::Course;
use crate::model::student::Student;
use crate::repo::course_repo::CourseRepository;
use crate::repo::enrollment_repo::EnrollmentRepository;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::student_join::{fold_student_rows, StudentCourseRow};
use crate::repo::student_repo::StudentRepository;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct RosterTables {
    courses: BTreeMap<String, Course>,
    /// Student id to name.
    students: BTreeMap<String, String>,
    /// `(student_id, course_id)` edges.
    enrollments: BTreeSet<(String, String)>,
}

impl RosterTables {
    /// Emulates `students LEFT JOIN enrollments LEFT JOIN courses` for one
    /// student.
    fn push_joined_rows(&self, student_id: &str, name: &str, out: &mut Vec<StudentCourseRow>) {
        let start = out.len();
        let edges = self
            .enrollments
            .range((student_id.to_string(), String::new())..)
            .take_while(|(sid, _)| sid == student_id);

        for (_, course_id) in edges {
            match self.courses.get(course_id) {
                Some(course) => out.push(StudentCourseRow::enrolled(student_id, name, course)),
                None => out.push(StudentCourseRow::unenrolled(student_id, name)),
            }
        }

        if out.len() == start {
            out.push(StudentCourseRow::unenrolled(student_id, name));
        }
    }
}

/// In-process roster store. `Send + Sync`; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryRosterStore {
    tables: RwLock<RosterTables>,
}

impl InMemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a table half-written: every
    // mutation is a single map/set insert.
    fn read(&self) -> RwLockReadGuard<'_, RosterTables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RosterTables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CourseRepository for InMemoryRosterStore {
    fn create_course(&self, course: &Course) -> RepoResult<()> {
        match self.write().courses.entry(course.id.clone()) {
            Entry::Occupied(_) => Err(RepoError::CourseAlreadyExists(course.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(course.clone());
                Ok(())
            }
        }
    }

    fn get_course(&self, id: &str) -> RepoResult<Course> {
        self.read()
            .courses
            .get(id)
            .cloned()
            .ok_or_else(|| RepoError::CourseNotFound(id.to_string()))
    }

    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        Ok(self.read().courses.values().cloned().collect())
    }
}

impl StudentRepository for InMemoryRosterStore {
    fn create_student(&self, student: &Student) -> RepoResult<()> {
        match self.write().students.entry(student.id.clone()) {
            Entry::Occupied(_) => Err(RepoError::StudentAlreadyExists(student.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(student.name.clone());
                Ok(())
            }
        }
    }

    fn get_student(&self, id: &str) -> RepoResult<Student> {
        let tables = self.read();
        let name = tables
            .students
            .get(id)
            .ok_or_else(|| RepoError::StudentNotFound(id.to_string()))?;

        let mut rows = Vec::new();
        tables.push_joined_rows(id, name, &mut rows);
        fold_student_rows(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::StudentNotFound(id.to_string()))
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        let tables = self.read();
        let mut rows = Vec::with_capacity(tables.students.len());
        for (id, name) in &tables.students {
            tables.push_joined_rows(id, name, &mut rows);
        }
        fold_student_rows(rows)
    }
}

impl EnrollmentRepository for InMemoryRosterStore {
    fn register(&self, student_id: &str, course_id: &str) -> RepoResult<()> {
        let mut tables = self.write();
        if !tables.courses.contains_key(course_id) {
            return Err(RepoError::CourseNotFound(course_id.to_string()));
        }
        if !tables.students.contains_key(student_id) {
            return Err(RepoError::StudentNotFound(student_id.to_string()));
        }

        tables
            .enrollments
            .insert((student_id.to_string(), course_id.to_string()));
        Ok(())
    }
}
