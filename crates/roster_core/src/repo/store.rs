//! Backend-neutral roster store and startup backend selection.
//!
//! # Responsibility
//! - Combine the course, student and enrollment contracts into one
//!   `RosterStore` capability set.
//! - Provide the connection-owning SQLite variant and `open_store`.
//!
//! # Invariants
//! - Every `RosterStore` is `Send + Sync`; `open_store` hands out one shared
//!   handle that concurrent request contexts clone.

use crate::db::{open_db, open_db_in_memory};
use crate::model::course::Course;
use crate::model::student::Student;
use crate::repo::course_repo::{CourseRepository, SqliteCourseRepository};
use crate::repo::enrollment_repo::{EnrollmentRepository, SqliteEnrollmentRepository};
use crate::repo::error::RepoResult;
use crate::repo::memory::InMemoryRosterStore;
use crate::repo::student_repo::{SqliteStudentRepository, StudentRepository};
use log::info;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Full roster capability set: course CRUD, student CRUD and enrollment.
pub trait RosterStore:
    CourseRepository + StudentRepository + EnrollmentRepository + Send + Sync
{
}

impl<T> RosterStore for T where
    T: CourseRepository + StudentRepository + EnrollmentRepository + Send + Sync
{
}

/// Storage variant chosen once at process startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local maps; contents vanish on exit.
    Memory,
    /// SQLite database file, created and migrated on open.
    Sqlite(PathBuf),
}

/// Opens the configured backend behind the `RosterStore` contract.
///
/// Each call opens a new store; clone the returned handle to share it.
pub fn open_store(backend: &StoreBackend) -> RepoResult<Arc<dyn RosterStore>> {
    match backend {
        StoreBackend::Memory => {
            info!("event=store_open module=repo status=ok backend=memory");
            Ok(Arc::new(InMemoryRosterStore::new()))
        }
        StoreBackend::Sqlite(path) => {
            let store = SqliteRosterStore::open(path)?;
            info!("event=store_open module=repo status=ok backend=sqlite");
            Ok(Arc::new(store))
        }
    }
}

/// SQLite roster store owning one migrated connection.
///
/// Calls through one store serialize on its connection. Contexts that need
/// parallel writers open their own store on the same file and rely on
/// SQLite's locking.
pub struct SqliteRosterStore {
    conn: Mutex<Connection>,
}

impl SqliteRosterStore {
    /// Opens (or creates) the database at `path` with migrations applied.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self {
            conn: Mutex::new(open_db(path)?),
        })
    }

    /// Opens a private in-memory SQLite database.
    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self {
            conn: Mutex::new(open_db_in_memory()?),
        })
    }

    /// Locks the connection for direct SQL access.
    // A panicking caller cannot leave a transaction open: rusqlite rolls back
    // on drop.
    pub fn connection(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        self.conn.get_mut().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CourseRepository for SqliteRosterStore {
    fn create_course(&self, course: &Course) -> RepoResult<()> {
        SqliteCourseRepository::new(&self.connection()).create_course(course)
    }

    fn get_course(&self, id: &str) -> RepoResult<Course> {
        SqliteCourseRepository::new(&self.connection()).get_course(id)
    }

    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        SqliteCourseRepository::new(&self.connection()).list_courses()
    }
}

impl StudentRepository for SqliteRosterStore {
    fn create_student(&self, student: &Student) -> RepoResult<()> {
        SqliteStudentRepository::new(&self.connection()).create_student(student)
    }

    fn get_student(&self, id: &str) -> RepoResult<Student> {
        SqliteStudentRepository::new(&self.connection()).get_student(id)
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        SqliteStudentRepository::new(&self.connection()).list_students()
    }
}

impl EnrollmentRepository for SqliteRosterStore {
    fn register(&self, student_id: &str, course_id: &str) -> RepoResult<()> {
        SqliteEnrollmentRepository::new(&self.connection()).register(student_id, course_id)
    }
}

impl<T: CourseRepository + ?Sized> CourseRepository for Arc<T> {
    fn create_course(&self, course: &Course) -> RepoResult<()> {
        (**self).create_course(course)
    }

    fn get_course(&self, id: &str) -> RepoResult<Course> {
        (**self).get_course(id)
    }

    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        (**self).list_courses()
    }
}

impl<T: StudentRepository + ?Sized> StudentRepository for Arc<T> {
    fn create_student(&self, student: &Student) -> RepoResult<()> {
        (**self).create_student(student)
    }

    fn get_student(&self, id: &str) -> RepoResult<Student> {
        (**self).get_student(id)
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        (**self).list_students()
    }
}

impl<T: EnrollmentRepository + ?Sized> EnrollmentRepository for Arc<T> {
    fn register(&self, student_id: &str, course_id: &str) -> RepoResult<()> {
        (**self).register(student_id, course_id)
    }
}
