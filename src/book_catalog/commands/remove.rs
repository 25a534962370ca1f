use crate::model::{Book, BookId};

/// Remove the first book with `id`. Returns false, leaving `books` untouched,
/// when there is none.
pub fn run(books: &mut Vec<Book>, id: BookId) -> bool {
    match books.iter().position(|b| b.id == id) {
        Some(pos) => {
            books.remove(pos);
            true
        }
        None => false,
    }
}
