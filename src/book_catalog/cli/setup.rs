use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "book-catalog",
    bin_name = "book-catalog",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Book catalog command line interface", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the JSON file that stores the catalog [default: data/sample_books.json]
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Config file to read (defaults to config.toml in the platform config directory)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all books in the catalog
    #[command(alias = "ls")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputMode::Text)]
        output: OutputMode,
    },

    /// Search for books by title or author
    Search {
        /// Text to search in title/author
        #[arg(short, long)]
        query: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputMode::Text)]
        output: OutputMode,
    },

    /// Add a new book to the catalog
    Add {
        /// Title of the book
        #[arg(long)]
        title: String,

        /// Author of the book
        #[arg(long)]
        author: String,

        /// Publication year
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i64>,

        /// ISBN of the book
        #[arg(long)]
        isbn: Option<String>,
    },

    /// Remove a book by ID
    #[command(alias = "rm")]
    Remove {
        /// ID of the book to remove
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },

    /// Update an existing book's details
    Update {
        /// ID of the book to update
        #[arg(long, allow_negative_numbers = true)]
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New year
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i64>,

        /// New ISBN
        #[arg(long)]
        isbn: Option<String>,
    },
}
