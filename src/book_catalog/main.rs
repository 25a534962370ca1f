//! # Book Catalog CLI
//!
//! The binary is intentionally thin: argument parsing, logging setup,
//! dispatch, and rendering live in `cli/`, while this file only invokes
//! `cli::run()` and turns its outcome into a process exit code.
//!
//! Everything the CLI calls goes through `book_catalog::api::CatalogApi`,
//! which takes normal Rust values and returns a `CmdResult`. The CLI decides
//! how that looks on a terminal and which exit code it maps to:
//!
//! - `0` on success
//! - `1` when the requested id does not exist, or on any library error
//!   (printed as `Error: <message>` on stderr)
//! - `2` for argument errors, as reported by clap

mod cli;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
