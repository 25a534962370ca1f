use book_catalog::api::{CmdMessage, MessageLevel};
use book_catalog::error::Result;
use book_catalog::model::Book;
use colored::Colorize;
use serde_json::Value;

use super::setup::OutputMode;

/// One line per book for text output; a pretty JSON array of records otherwise.
pub(super) fn render_books(books: &[Book], mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(books
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputMode::Json => {
            let records: Vec<Value> = books
                .iter()
                .map(|b| Value::Object(b.to_structured()))
                .collect();
            Ok(serde_json::to_string_pretty(&records)?)
        }
    }
}

pub(super) fn print_books(books: &[Book], mode: OutputMode) -> Result<()> {
    let rendered = render_books(books, mode)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
