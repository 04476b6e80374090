//! Aggregate reading statistics over a collection snapshot.

use crate::{Book, Category};

/// Counts of books by reading state.
///
/// Computed by [`compute_stats`]. The three state buckets partition the
/// collection: `completed + in_progress + not_started == total`, always.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingStats {
    /// Number of books in the collection.
    pub total: usize,
    /// Books marked complete.
    pub completed: usize,
    /// Books not complete with effective progress above zero.
    pub in_progress: usize,
    /// Books not complete with effective progress of zero.
    pub not_started: usize,
}

impl ReadingStats {
    /// Completed books as a rounded percentage of the collection.
    ///
    /// Returns 0 for an empty collection.
    #[must_use]
    pub fn completion_rate(&self) -> u32 {
        percentage(self.completed, self.total)
    }

    /// In-progress books as a rounded percentage of the collection.
    ///
    /// Returns 0 for an empty collection.
    #[must_use]
    pub fn in_progress_rate(&self) -> u32 {
        percentage(self.in_progress, self.total)
    }
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u32
    }
}

/// Compute aggregate counts over a collection snapshot.
///
/// Uses [effective progress](Book::effective_progress), so a completed book
/// with a stale stored progress still lands in `completed` and nowhere else.
///
/// ```
/// use bookshelf_core::{compute_stats, Book};
///
/// let mut dune = Book::sample("1", "Dune", "Frank Herbert");
/// dune.progress = Some(40);
///
/// let stats = compute_stats(&[dune]);
/// assert_eq!(stats.total, 1);
/// assert_eq!(stats.in_progress, 1);
/// ```
pub fn compute_stats(books: &[Book]) -> ReadingStats {
    let mut stats = ReadingStats {
        total: books.len(),
        ..ReadingStats::default()
    };
    for book in books {
        if book.is_complete {
            stats.completed += 1;
        } else if book.effective_progress() > 0 {
            stats.in_progress += 1;
        } else {
            stats.not_started += 1;
        }
    }
    stats
}

/// Number of books in each category, in [`Category::ALL`] order.
///
/// Categories with no books are included with a count of zero.
pub fn category_counts(books: &[Book]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&cat| (cat, books.iter().filter(|b| b.category == cat).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_all_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, ReadingStats::default());
        assert_eq!(stats.completion_rate(), 0);
        assert_eq!(stats.in_progress_rate(), 0);
    }

    #[test]
    fn buckets_partition_the_collection() {
        let mut done = Book::sample("1", "Dune", "Frank Herbert");
        done.is_complete = true;

        let mut reading = Book::sample("2", "Foundation", "Isaac Asimov");
        reading.progress = Some(40);

        let untouched = Book::sample("3", "Cosmos", "Carl Sagan");

        let stats = compute_stats(&[done, reading, untouched]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.not_started, 1);
        assert_eq!(
            stats.completed + stats.in_progress + stats.not_started,
            stats.total
        );
    }

    #[test]
    fn completed_with_stale_progress_counts_once() {
        let mut book = Book::sample("1", "Dune", "Frank Herbert");
        book.is_complete = true;
        book.progress = Some(40); // stale; effective progress is 100

        let stats = compute_stats(&[book]);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.not_started, 0);
    }

    #[test]
    fn missing_progress_means_not_started() {
        let book = Book::sample("1", "Dune", "Frank Herbert");
        let stats = compute_stats(&[book]);
        assert_eq!(stats.not_started, 1);
    }

    #[test]
    fn rates_round_to_whole_percent() {
        let mut a = Book::sample("1", "A", "a");
        a.is_complete = true;
        let b = Book::sample("2", "B", "b");
        let c = Book::sample("3", "C", "c");

        let stats = compute_stats(&[a, b, c]);
        assert_eq!(stats.completion_rate(), 33);
    }

    #[test]
    fn category_counts_cover_every_category() {
        let books = vec![
            Book::sample("1", "Dune", "Frank Herbert"),
            Book::sample("2", "Foundation", "Isaac Asimov"),
        ];
        let counts = category_counts(&books);
        assert_eq!(counts.len(), Category::ALL.len());
        assert_eq!(counts[0], (Category::Fiction, 2));
        assert_eq!(counts[5], (Category::Science, 0));
    }
}
