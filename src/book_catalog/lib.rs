//! # Book Catalog Architecture
//!
//! A small personal library catalog kept in one JSON file. The crate is a
//! library with a thin CLI client on top; the library never prints, never
//! exits the process, and never installs a log subscriber.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, renders output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - load → operation → save, one command per call            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / search / create / remove / update                 │
//! │  - Operates on an in-memory Vec<Book>, no I/O               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait                                       │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Typical Use
//!
//! ```no_run
//! use book_catalog::api::CatalogApi;
//! use book_catalog::store::fs::JsonFileStore;
//!
//! let mut api = CatalogApi::new(JsonFileStore::new("data/sample_books.json"));
//! api.add_book("Dune".into(), "Frank Herbert".into(), Some(1965), None)?;
//! for book in api.list_books()?.listed_books {
//!     println!("{}", book);
//! }
//! # Ok::<(), book_catalog::error::CatalogError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Pure catalog operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Book` record and its JSON mapping
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
