//! Context setup and dispatch.
//!
//! `run()` parses arguments, installs the log subscriber, resolves the catalog
//! path, and hands the parsed command to the API. The returned `CmdResult` is
//! rendered here and mapped to an exit code: any error-level message (an id
//! that does not exist) exits with 1.

use super::render::{print_books, print_messages};
use super::setup::{Cli, Commands, OutputMode};
use book_catalog::api::{CatalogApi, CmdResult};
use book_catalog::config::CatalogConfig;
use book_catalog::error::Result;
use book_catalog::model::BookPatch;
use book_catalog::store::fs::JsonFileStore;
use book_catalog::store::CatalogStore;
use clap::Parser;
use tracing::Level;

struct AppContext {
    api: CatalogApi<JsonFileStore>,
}

pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let result = dispatch(&mut ctx.api, cli.command)?;
    print_messages(&result.messages);

    Ok(if result.has_errors() { 1 } else { 0 })
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // A second subscriber can only appear in tests; keeping the first is fine.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    if let Some(path) = cli.config.as_deref().filter(|p| !p.exists()) {
        tracing::warn!(path = %path.display(), "config file not found, using defaults");
    }
    let config_file = cli
        .config
        .clone()
        .or_else(CatalogConfig::default_config_file);

    let mut config = CatalogConfig::load(config_file.as_deref())?;
    if let Some(data) = &cli.data {
        config = config.with_data_path(data.clone());
    }
    let api = CatalogApi::new(JsonFileStore::new(config.data_path));
    if let Some(path) = api.store().location() {
        tracing::debug!(path = %path.display(), "using catalog");
    }

    Ok(AppContext { api })
}

fn dispatch<S: CatalogStore>(api: &mut CatalogApi<S>, command: Commands) -> Result<CmdResult> {
    match command {
        Commands::List { output } => {
            let result = api.list_books()?;
            print_books(&result.listed_books, output)?;
            Ok(result)
        }
        Commands::Search { query, output } => {
            let mut result = api.search_books(&query)?;
            print_books(&result.listed_books, output)?;
            if output == OutputMode::Json {
                // An empty array already says "no matches"; keep stdout parseable.
                result.messages.clear();
            }
            Ok(result)
        }
        Commands::Add {
            title,
            author,
            year,
            isbn,
        } => api.add_book(title, author, year, isbn),
        Commands::Remove { id } => api.remove_book(id),
        Commands::Update {
            id,
            title,
            author,
            year,
            isbn,
        } => api.update_book(
            id,
            BookPatch {
                title,
                author,
                year,
                isbn,
            },
        ),
    }
}
