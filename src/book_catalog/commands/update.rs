use crate::model::{Book, BookId, BookPatch};

/// Apply `patch` to the first book with `id`, replacing it in place.
///
/// Returns `None` when no book has that id. An empty patch returns the
/// current record and leaves the collection alone.
pub fn run(books: &mut [Book], id: BookId, patch: &BookPatch) -> Option<Book> {
    let slot = books.iter_mut().find(|b| b.id == id)?;
    if patch.is_empty() {
        return Some(slot.clone());
    }

    let updated = slot.apply(patch);
    *slot = updated.clone();
    Some(updated)
}
