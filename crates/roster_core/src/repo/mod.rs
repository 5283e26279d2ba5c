//! Repository layer: storage contracts and their SQLite / in-memory backends.
//!
//! # Responsibility
//! - Define per-entity data access contracts.
//! - Keep SQL and join details behind the repository boundary.
//!
//! # Invariants
//! - Repositories return domain errors (`*AlreadyExists`, `*NotFound`) for
//!   conditions they can distinguish, and wrap everything else as `Db`.
//! - Only the enrollment repository writes the `enrollments` table.

pub mod course_repo;
pub mod enrollment_repo;
pub mod error;
pub mod memory;
pub mod store;
pub mod student_join;
pub mod student_repo;
