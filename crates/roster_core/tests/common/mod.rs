#![allow(dead_code)]

use roster_core::{Course, InMemoryRosterStore, RosterStore, SqliteRosterStore, Student};
use std::sync::Arc;

/// Every backend under test, freshly opened and empty.
pub fn backends() -> Vec<(&'static str, Arc<dyn RosterStore>)> {
    let memory: Arc<dyn RosterStore> = Arc::new(InMemoryRosterStore::new());
    let sqlite: Arc<dyn RosterStore> = Arc::new(SqliteRosterStore::open_in_memory().unwrap());
    vec![("memory", memory), ("sqlite", sqlite)]
}

pub fn internet_engineering() -> Course {
    Course::new("10101010", "Internet Engineering")
}

pub fn database_design() -> Course {
    Course::new("20202020", "Database Design")
}

pub fn operating_systems() -> Course {
    Course::new("30303030", "Operating Systems")
}

pub fn parham() -> Student {
    Student::new("12345678", "Parham Alvani")
}

pub fn sorted_ids(courses: &[Course]) -> Vec<&str> {
    let mut ids: Vec<&str> = courses.iter().map(|course| course.id.as_str()).collect();
    ids.sort_unstable();
    ids
}
