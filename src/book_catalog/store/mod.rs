//! # Storage Layer
//!
//! The whole catalog lives in one JSON file and is read and written as a unit.
//! The [`CatalogStore`] trait lets the API run against different backends:
//!
//! - [`fs::JsonFileStore`]: production storage bound to one file path.
//! - [`memory::InMemoryStore`]: keeps the collection in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "title": "Dune",
//!     "author": "Frank Herbert",
//!     "year": 1965,
//!     "isbn": null
//!   }
//! ]
//! ```
//!
//! A missing file is an empty catalog. Saves replace the file atomically, so a
//! reader never sees a half-written catalog.

use crate::error::Result;
use crate::model::Book;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
///
/// A catalog is loaded in full, changed in memory, and saved in full.
pub trait CatalogStore {
    /// Load every record. An absent catalog loads as empty.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the stored catalog with `books`, in the given order.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Where the catalog lives, if it lives on disk.
    fn location(&self) -> Option<&Path>;
}
