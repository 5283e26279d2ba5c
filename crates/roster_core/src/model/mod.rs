//! Domain model for the course roster.
//!
//! # Invariants
//! - Every entity is identified by an 8-digit decimal string id.
//! - `Student::courses` is a derived read view; it is never persisted on the
//!   student itself.

pub mod course;
pub mod id;
pub mod student;
pub mod validation;
