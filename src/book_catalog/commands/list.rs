use crate::model::Book;

/// All books, sorted ascending by id. The sort is stable, so records sharing
/// an id keep their relative order.
pub fn run(books: &[Book]) -> Vec<Book> {
    let mut sorted = books.to_vec();
    sorted.sort_by_key(|b| b.id);
    sorted
}
