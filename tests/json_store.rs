use book_catalog::api::CatalogApi;
use book_catalog::error::CatalogError;
use book_catalog::model::{Book, BookPatch};
use book_catalog::store::fs::{load, save, JsonFileStore};
use book_catalog::store::CatalogStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("catalog").join("books.json"));
    (dir, store)
}

#[test]
fn test_full_command_cycle_against_disk() {
    let (_dir, store) = setup();
    let mut api = CatalogApi::new(store);

    api.add_book("A".into(), "One".into(), None, None).unwrap();
    api.add_book("B".into(), "Two".into(), Some(2001), None).unwrap();
    api.add_book("C".into(), "Three".into(), None, Some("333".into()))
        .unwrap();

    assert!(!api.remove_book(2).unwrap().has_errors());
    let patch = BookPatch {
        author: Some("Uno".into()),
        ..Default::default()
    };
    assert!(!api.update_book(1, patch).unwrap().has_errors());

    let reloaded = api.store().load().unwrap();
    assert_eq!(
        reloaded,
        vec![
            Book::new(1, "A", "Uno"),
            Book::new(3, "C", "Three").with_isbn("333"),
        ]
    );

    // Ids keep growing from the current maximum, not from the count.
    let added = api.add_book("D".into(), "Four".into(), None, None).unwrap();
    assert_eq!(added.affected_books[0].id, 4);
}

#[test]
fn test_empty_catalog_round_trip() {
    let (_dir, mut store) = setup();
    store.save(&[]).unwrap();
    assert!(store.load().unwrap().is_empty());

    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn test_failed_load_leaves_file_untouched() {
    let (_dir, store) = setup();
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    let broken = r#"[{"id": 1}, {"title": "no id"}]"#;
    fs::write(store.path(), broken).unwrap();

    let mut api = CatalogApi::new(store);
    let err = api.add_book("X".into(), "Y".into(), None, None).unwrap_err();
    assert!(matches!(err, CatalogError::MalformedRecord { .. }));
    assert_eq!(fs::read_to_string(api.store().path()).unwrap(), broken);
}

#[test]
fn test_duplicate_ids_are_tolerated_on_load() {
    let (dir, _store) = setup();
    let path = dir.path().join("dupes.json");
    fs::write(
        &path,
        r#"[{"id": 1, "title": "first"}, {"id": 1, "title": "second"}]"#,
    )
    .unwrap();

    let books = load(&path).unwrap();
    assert_eq!(books.len(), 2);

    let mut api = CatalogApi::new(JsonFileStore::new(&path));
    api.remove_book(1).unwrap();
    let left = load(&path).unwrap();
    assert_eq!(left, vec![Book::new(1, "second", "")]);
}

#[test]
fn test_repeated_saves_leave_a_single_file() {
    let (dir, _store) = setup();
    let path = dir.path().join("books.json");
    save(&path, &[Book::new(1, "A", "B")]).unwrap();
    save(&path, &[Book::new(2, "C", "D")]).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(load(&path).unwrap(), vec![Book::new(2, "C", "D")]);
}

#[test]
fn test_add_keeps_large_year_on_untouched_book() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    fs::write(&path, r#"[{"id": 1, "title": "x", "year": 3000000000}]"#).unwrap();

    let mut api = CatalogApi::new(JsonFileStore::new(&path));
    api.add_book("y".into(), "z".into(), None, None).unwrap();

    let reloaded = load(&path).unwrap();
    assert_eq!(reloaded[0], Book::new(1, "x", "").with_year(3_000_000_000));
    assert_eq!(reloaded[1].id, 2);
}

#[test]
fn test_add_after_largest_id_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    let original = r#"[{"id": 9223372036854775807, "title": "x"}]"#;
    fs::write(&path, original).unwrap();

    let mut api = CatalogApi::new(JsonFileStore::new(&path));
    let err = api.add_book("y".into(), "z".into(), None, None).unwrap_err();

    assert!(matches!(err, CatalogError::IdsExhausted(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
