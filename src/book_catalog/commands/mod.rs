//! # Command Layer
//!
//! Pure catalog operations over an in-memory collection. Nothing here reads or
//! writes files; the API layer loads the collection, calls one of these, and
//! saves afterwards.
//!
//! Read operations ([`list`], [`search`]) borrow the collection. Mutating
//! operations ([`create`], [`remove`], [`update`]) borrow it mutably,
//! change it in place, and return only a report of what happened. Records keyed
//! by id are found by linear scan and the first match wins, so a catalog with
//! duplicate ids still behaves predictably.

use crate::model::Book;

pub mod create;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;

pub use create::run as create_book;
pub use list::run as list_all;
pub use remove::run as remove_book;
pub use search::run as search_books;
pub use update::run as update_book;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// True when any message is at error level. The CLI maps this to a failing exit code.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
