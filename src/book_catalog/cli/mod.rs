//! # CLI Behavior
//!
//! This is **one possible UI client** for the catalog, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes, and output formatting.
//!
//! Every invocation loads the catalog, runs exactly one command, and (for
//! mutations) writes it back. The storage file is chosen by `--data`, falling
//! back to configuration (see `book_catalog::config`).
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, logging, dispatch to the API, exit codes
//! - `render`: Output formatting (book lines, JSON, coloured messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
