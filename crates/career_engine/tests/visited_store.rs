use career_engine::{FileKvStore, KeyValueStore, MemoryKvStore, VisitedStore, VISITED_KEY};
use tempfile::TempDir;

const ACME: &str = "https://acme.example/jobs";
const BETA: &str = "https://beta.example/jobs";

#[test]
fn mark_and_unmark_round_trip() {
    let store = VisitedStore::new(MemoryKvStore::new());

    store.set_visited(ACME, true);
    assert!(store.is_visited(ACME));

    store.set_visited(ACME, false);
    assert!(!store.is_visited(ACME));
}

#[test]
fn re_marking_leaves_record_unchanged() {
    let store = VisitedStore::new(MemoryKvStore::new());
    store.set_visited(ACME, true);
    store.set_visited(BETA, true);
    store.set_visited(ACME, true);

    assert_eq!(store.snapshot().len(), 2);
    assert_eq!(
        store.inner().get(VISITED_KEY).unwrap().as_deref(),
        Some(r#"["https://acme.example/jobs","https://beta.example/jobs"]"#)
    );
}

#[test]
fn malformed_record_is_treated_as_empty() {
    career_logging::initialize_for_tests();
    let store = VisitedStore::new(MemoryKvStore::with_entry(VISITED_KEY, "{not json"));
    assert!(store.snapshot().is_empty());
    assert!(!store.is_visited(ACME));

    store.set_visited(ACME, true);
    assert!(store.is_visited(ACME));
}

#[test]
fn clear_removes_whole_record() {
    let store = VisitedStore::new(MemoryKvStore::new());
    store.set_visited(ACME, true);
    store.clear();

    assert!(store.snapshot().is_empty());
    assert_eq!(store.inner().get(VISITED_KEY).unwrap(), None);
}

#[test]
fn file_store_survives_reopening() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("state");

    {
        let store = VisitedStore::new(FileKvStore::new(&dir));
        store.set_visited(ACME, true);
        store.set_visited(BETA, true);
        store.set_visited(ACME, false);
    }

    let reopened = VisitedStore::new(FileKvStore::new(&dir));
    assert_eq!(reopened.snapshot().to_vec(), vec![BETA.to_string()]);
    assert!(dir.join("appliedCompanies.json").is_file());
}

#[test]
fn file_store_reads_missing_record_as_none() {
    let temp = TempDir::new().unwrap();
    let store = FileKvStore::new(temp.path());
    assert_eq!(store.get(VISITED_KEY).unwrap(), None);
    store.remove(VISITED_KEY).unwrap();
}
