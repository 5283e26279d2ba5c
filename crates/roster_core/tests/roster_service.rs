use roster_core::{
    open_store, ErrorKind, IdGenerator, InMemoryRosterStore, RandomIdGenerator, RepoError,
    RosterService, ServiceError, SqliteRosterStore, StoreBackend,
};
use std::cell::RefCell;

/// Hands out a fixed list of ids, repeating the last one once exhausted.
struct ScriptedIds(RefCell<Vec<&'static str>>);

impl ScriptedIds {
    fn new(ids: &[&'static str]) -> Self {
        let mut ids = ids.to_vec();
        ids.reverse();
        Self(RefCell::new(ids))
    }
}

impl IdGenerator for ScriptedIds {
    fn generate(&self) -> String {
        let mut ids = self.0.borrow_mut();
        let id = if ids.len() > 1 { ids.pop() } else { ids.last().copied() };
        id.unwrap_or("00000000").to_string()
    }
}

#[test]
fn internet_engineering_scenario_end_to_end() {
    let store = SqliteRosterStore::open_in_memory().unwrap();
    let service = RosterService::new(store, ScriptedIds::new(&["10101010", "12345678"]));

    let course = service.create_course("Internet Engineering").unwrap();
    let student = service.create_student("Parham Alvani").unwrap();
    assert_eq!(course.id, "10101010");
    assert_eq!(student.id, "12345678");

    service.register(&student.id, &course.id).unwrap();

    let loaded = service.get_student("12345678").unwrap();
    assert_eq!(loaded.name, "Parham Alvani");
    assert_eq!(loaded.courses, vec![course]);
}

#[test]
fn colliding_generator_surfaces_already_exists() {
    let service = RosterService::new(InMemoryRosterStore::new(), ScriptedIds::new(&["42424242"]));

    service.create_student("First Student").unwrap();
    let err = service.create_student("Second Student").unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepoError::StudentAlreadyExists(ref id)) if id == "42424242"
    ));
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(service.list_students().unwrap().len(), 1);
}

#[test]
fn validation_runs_before_storage() {
    let service = RosterService::new(InMemoryRosterStore::new(), RandomIdGenerator);

    assert_eq!(
        service.create_course("").unwrap_err().kind(),
        ErrorKind::ValidationFailed
    );
    assert_eq!(
        service.get_course("1010101").unwrap_err().kind(),
        ErrorKind::ValidationFailed
    );
    assert!(service.list_courses().unwrap().is_empty());
}

#[test]
fn random_ids_are_well_formed_through_the_service() {
    let service = RosterService::new(InMemoryRosterStore::new(), RandomIdGenerator);
    let course = service.create_course("Compilers").unwrap();

    assert_eq!(course.id.len(), 8);
    assert!(roster_core::validate_entity_id(&course.id).is_ok());
    assert_eq!(service.get_course(&course.id).unwrap(), course);
}

#[test]
fn open_store_selects_backend_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    for backend in [StoreBackend::Memory, StoreBackend::Sqlite(path.clone())] {
        let store = open_store(&backend).unwrap();
        let service = RosterService::new(store, ScriptedIds::new(&["10101010"]));
        service.create_course("Internet Engineering").unwrap();
        assert_eq!(service.list_courses().unwrap().len(), 1, "{backend:?}");
    }

    let reopened = open_store(&StoreBackend::Sqlite(path)).unwrap();
    let service = RosterService::new(reopened, RandomIdGenerator);
    assert_eq!(service.get_course("10101010").unwrap().name, "Internet Engineering");
}
