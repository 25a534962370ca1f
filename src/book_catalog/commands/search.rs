use crate::model::Book;

use super::list;

/// Books whose `"{title} {author}"` contains `query`, ignoring case, sorted by id.
///
/// The query is trimmed first; a blank query returns the whole catalog.
pub fn run(books: &[Book], query: &str) -> Vec<Book> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return list::run(books);
    }

    let matches: Vec<Book> = books
        .iter()
        .filter(|b| {
            format!("{} {}", b.title, b.author)
                .to_lowercase()
                .contains(&needle)
        })
        .cloned()
        .collect();

    list::run(&matches)
}
