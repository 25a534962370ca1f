//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all catalog operations, whatever UI sits on top.
//!
//! Each method runs one full command cycle:
//!
//! 1. Load the catalog from the store.
//! 2. Run the pure operation from `commands/`.
//! 3. Save, for mutations that actually changed something.
//! 4. Return a [`CmdResult`] with the records involved and user-facing messages.
//!
//! A missing id is an expected outcome, not an error: it comes back as an
//! error-level message (see [`CmdResult::has_errors`]) and nothing is written.
//!
//! `CatalogApi<S: CatalogStore>` is generic over the storage backend:
//! - Production: `CatalogApi<JsonFileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{BookId, BookPatch};
use crate::store::CatalogStore;

pub const NOT_FOUND_MESSAGE: &str = "No book with that ID found.";
pub const NO_MATCHES_MESSAGE: &str = "No books found.";
pub const NOTHING_TO_UPDATE_MESSAGE: &str = "No fields given, book left unchanged.";

/// The main API facade for catalog operations.
pub struct CatalogApi<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        let books = self.store.load()?;
        Ok(CmdResult::default().with_listed_books(commands::list_all(&books)))
    }

    pub fn search_books(&self, query: &str) -> Result<CmdResult> {
        let books = self.store.load()?;
        let matches = commands::search_books(&books, query);
        tracing::debug!(query, matches = matches.len(), "search finished");

        let mut result = CmdResult::default();
        if matches.is_empty() {
            result.add_message(CmdMessage::info(NO_MATCHES_MESSAGE));
        }
        Ok(result.with_listed_books(matches))
    }

    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        year: Option<i64>,
        isbn: Option<String>,
    ) -> Result<CmdResult> {
        let mut books = self.store.load()?;
        let book = commands::create_book(&mut books, title, author, year, isbn)?;
        self.store.save(&books)?;
        tracing::debug!(id = book.id, "book added");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Added book: {}", book)))
            .with_affected_books(vec![book]))
    }

    pub fn remove_book(&mut self, id: BookId) -> Result<CmdResult> {
        let mut books = self.store.load()?;
        let removed = books.iter().find(|b| b.id == id).cloned();

        if !commands::remove_book(&mut books, id) {
            tracing::debug!(id, "remove: no such book");
            return Ok(CmdResult::default().with_message(CmdMessage::error(NOT_FOUND_MESSAGE)));
        }

        self.store.save(&books)?;
        tracing::debug!(id, "book removed");
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Removed book with id {}.",
                id
            )))
            .with_affected_books(removed.into_iter().collect()))
    }

    pub fn update_book(&mut self, id: BookId, patch: BookPatch) -> Result<CmdResult> {
        let mut books = self.store.load()?;

        let Some(updated) = commands::update_book(&mut books, id, &patch) else {
            tracing::debug!(id, "update: no such book");
            return Ok(CmdResult::default().with_message(CmdMessage::error(NOT_FOUND_MESSAGE)));
        };

        let mut result = CmdResult::default();
        if patch.is_empty() {
            tracing::debug!(id, "update: empty patch, nothing to write");
            result.add_message(CmdMessage::warning(NOTHING_TO_UPDATE_MESSAGE));
        } else {
            self.store.save(&books)?;
        }

        Ok(result
            .with_message(CmdMessage::success(format!("Updated book: {}", updated)))
            .with_affected_books(vec![updated]))
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
