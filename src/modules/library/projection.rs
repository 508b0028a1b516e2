use lumina_client::models::Book;

use crate::utils::contains_ignore_case;

/// Search-filtered view of the collection.
///
/// Pure function of the collection and the term: records whose title or
/// author contains the term as a case-insensitive substring, in store order.
/// An empty term yields the full collection. The iterator is lazy and can be
/// rebuilt on every keystroke; nothing is memoized.
pub fn search<'a>(books: &'a [Book], term: &'a str) -> impl Iterator<Item = &'a Book> + 'a {
    books.iter().filter(move |book| {
        term.is_empty()
            || contains_ignore_case(&book.title, term)
            || contains_ignore_case(&book.author, term)
    })
}
