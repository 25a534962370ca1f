use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::model::Book;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Catalog stored as a JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Book>> {
        load(&self.path)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        save(&self.path, books)
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Read the catalog at `path`. A file that does not exist is an empty catalog.
pub fn load(path: &Path) -> Result<Vec<Book>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no catalog file, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let data: Value = serde_json::from_str(&content).map_err(CatalogError::Serialization)?;

    let entries = match data {
        Value::Array(entries) => entries,
        _ => {
            return Err(CatalogError::StorageFormat(
                "Book storage file must contain a JSON list".to_string(),
            ))
        }
    };

    let books = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Value::Object(map) => Book::from_structured(map).map_err(|e| e.at_index(i)),
            _ => Err(CatalogError::StorageFormat(format!(
                "Each book entry must be a JSON object (entry {})",
                i
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(path = %path.display(), count = books.len(), "catalog loaded");
    Ok(books)
}

/// Write `books` to `path`, replacing any previous catalog.
///
/// The data goes to a temporary file next to the target which is then renamed
/// over it. If anything fails before the rename the temporary file is removed
/// and the previous catalog is left intact. An existing catalog keeps its
/// permissions.
pub fn save(path: &Path, books: &[Book]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(dir)?;

    let entries: Vec<Value> = books
        .iter()
        .map(|b| Value::Object(b.to_structured()))
        .collect();
    let content = serde_json::to_string_pretty(&entries).map_err(CatalogError::Serialization)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(CatalogError::Io)?;
    tmp.write_all(content.as_bytes()).map_err(CatalogError::Io)?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(CatalogError::Io)?;
    }
    tmp.as_file().sync_all().map_err(CatalogError::Io)?;
    tmp.persist(path).map_err(|e| CatalogError::Io(e.error))?;

    tracing::debug!(path = %path.display(), count = books.len(), "catalog saved");
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(CatalogError::Io)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::strategies::any_book;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn sample() -> Vec<Book> {
        vec![
            Book::new(2, "B", "Author Two").with_year(2001),
            Book::new(1, "A", "Author One").with_isbn("111"),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let books = load(&dir.path().join("nope.json")).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        save(&path, &sample()).unwrap();
        assert_eq!(load(&path).unwrap(), sample());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("books.json");
        save(&path, &[]).unwrap();
        assert!(path.exists());
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn saved_file_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        save(&path, &[Book::new(1, "Café", "Zoë")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let expected = "[\n  {\n    \"id\": 1,\n    \"title\": \"Café\",\n    \"author\": \"Zoë\",\n    \"year\": null,\n    \"isbn\": null\n  }\n]";
        assert_eq!(raw, expected);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        save(&path, &sample()).unwrap();
        save(&path, &[Book::new(9, "Only", "One")]).unwrap();
        let books = load(&path).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 9);
    }

    #[test]
    fn save_leaves_no_temporary_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        save(&path, &sample()).unwrap();
        save(&path, &sample()).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["books.json".to_string()]);
    }

    #[test]
    fn top_level_object_is_a_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, r#"{"id": 1}"#).unwrap();
        assert!(matches!(
            load(&path).unwrap_err(),
            CatalogError::StorageFormat(_)
        ));
    }

    #[test]
    fn non_object_entry_is_a_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, r#"[{"id": 1}, 2]"#).unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::StorageFormat(_)));
        assert!(err.to_string().contains("entry 1"));
    }

    #[test]
    fn malformed_entry_aborts_the_whole_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, r#"[{"id": 1, "title": "ok"}, {"title": "no id"}]"#).unwrap();
        match load(&path).unwrap_err() {
            CatalogError::MalformedRecord { index, .. } => assert_eq!(index, Some(1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_json_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, "[{").unwrap();
        assert!(matches!(
            load(&path).unwrap_err(),
            CatalogError::Serialization(_)
        ));
    }

    #[test]
    fn compact_input_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, r#"[{"isbn":null,"id":3,"year":1999,"author":"X","title":"Y"}]"#).unwrap();
        let books = load(&path).unwrap();
        assert_eq!(books, vec![Book::new(3, "Y", "X").with_year(1999)]);
    }

    #[test]
    fn store_delegates_to_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.location(), Some(path.as_path()));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        save(&path, &sample()).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save(&path, &[]).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    proptest! {
        #[test]
        fn any_catalog_survives_save_and_load(books in proptest::collection::vec(any_book(), 0..10)) {
            let dir = tempdir().unwrap();
            let path = dir.path().join("books.json");
            save(&path, &books).unwrap();
            prop_assert_eq!(load(&path).unwrap(), books);
        }
    }
}
