//! Stateless queries over a collection snapshot.
//!
//! Every function borrows the snapshot, never mutates it, and returns
//! matches in input order. They accept anything that iterates `&Book`, so
//! they compose by sequential application:
//!
//! ```
//! use bookshelf_core::{filter_by_category, search_by_text, Book, Category};
//!
//! let books = vec![
//!     Book::sample("1", "Dune", "Frank Herbert"),
//!     Book::sample("2", "Foundation", "Isaac Asimov"),
//! ];
//!
//! let hits = filter_by_category(search_by_text(&books, "dune"), Category::Fiction.into());
//! assert_eq!(hits.len(), 1);
//! ```

use crate::{Book, CategoryFilter};

/// Case-insensitive substring search over title and author.
///
/// An empty or all-whitespace query matches everything, in input order.
/// Matching is plain substring, not word-boundary based.
pub fn search_by_text<'a, I>(books: I, query: &str) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return books.into_iter().collect();
    }
    books
        .into_iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Keep only books matching the category filter.
///
/// [`CategoryFilter::All`] is the sentinel for "no restriction" and returns
/// the input unchanged.
pub fn filter_by_category<'a, I>(books: I, filter: CategoryFilter) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    match filter {
        CategoryFilter::All => books.into_iter().collect(),
        CategoryFilter::Only(category) => books
            .into_iter()
            .filter(|book| book.category == category)
            .collect(),
    }
}

/// Keep only books whose completion flag equals `is_complete`.
pub fn filter_by_status<'a, I>(books: I, is_complete: bool) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    books
        .into_iter()
        .filter(|book| book.is_complete == is_complete)
        .collect()
}

/// The most recently added books, newest first.
///
/// The collection preserves insertion order, so "recent" is simply the tail
/// of the snapshot, reversed.
pub fn recent_books(books: &[Book], limit: usize) -> Vec<&Book> {
    books.iter().rev().take(limit).collect()
}
