//! Student entity and its enrolled-course view.

use crate::model::course::Course;
use serde::{Deserialize, Serialize};

/// A student together with the courses they are enrolled in.
///
/// `courses` is materialized by read paths only. Create paths ignore it;
/// enrollment edges are written through `EnrollmentRepository::register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// 8-digit decimal id, unique across students.
    pub id: String,
    pub name: String,
    /// Enrolled courses sorted by course id. Empty, never absent, when the
    /// student has no enrollments.
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Student {
    /// Creates a student with no enrollments.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Returns whether the student is enrolled in `course_id`.
    pub fn has_course(&self, course_id: &str) -> bool {
        self.courses.iter().any(|course| course.id == course_id)
    }
}
