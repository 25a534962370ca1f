use super::CatalogStore;
use crate::error::Result;
use crate::model::Book;
use std::path::Path;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books, saves: 0 }
    }

    /// Number of times the catalog has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Three books with ids 1..=3, one of them matching "python".
    pub fn sample_books() -> Vec<Book> {
        vec![
            Book::new(1, "A", "Author One").with_year(2000).with_isbn("111"),
            Book::new(2, "B", "Author Two").with_year(2001).with_isbn("222"),
            Book::new(3, "Python Guide", "Expert")
                .with_year(2020)
                .with_isbn("333"),
        ]
    }

    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_books(sample_books())
    }
}
