use crate::error::{CatalogError, Result};
use crate::model::{Book, BookId};

/// Append a new book to `books` and return a copy of it.
///
/// The id is one past the largest id in the collection, or 1 for an empty
/// catalog (ids at or below zero never lower the floor). When the largest id
/// is already `BookId::MAX` nothing is appended and `IdsExhausted` is returned.
pub fn run(
    books: &mut Vec<Book>,
    title: String,
    author: String,
    year: Option<i64>,
    isbn: Option<String>,
) -> Result<Book> {
    let book = Book {
        id: next_id(books)?,
        title,
        author,
        year,
        isbn,
    };
    books.push(book.clone());
    Ok(book)
}

fn next_id(books: &[Book]) -> Result<BookId> {
    let max = books.iter().map(|b| b.id).fold(0, BookId::max);
    max.checked_add(1).ok_or(CatalogError::IdsExhausted(max))
}
