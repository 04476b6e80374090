//! Property tests for the query and stats layers.

use bookshelf_core::{compute_stats, search_by_text, Book, Category};
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

prop_compose! {
    fn book_strategy()(
        id in "[a-z0-9]{1,12}",
        title in "[A-Za-z ]{1,24}",
        author in "[A-Za-z ]{1,24}",
        year in 1400i32..2100,
        category in category_strategy(),
        is_complete in any::<bool>(),
        progress in prop::option::of(0u8..=100),
    ) -> Book {
        let mut book = Book::new(id, title, author, year, category);
        book.is_complete = is_complete;
        book.progress = progress;
        book
    }
}

fn shelf_strategy() -> impl Strategy<Value = Vec<Book>> {
    prop::collection::vec(book_strategy(), 0..24)
}

proptest! {
    #[test]
    fn stats_buckets_partition_any_collection(books in shelf_strategy()) {
        let stats = compute_stats(&books);
        prop_assert_eq!(stats.total, books.len());
        prop_assert_eq!(
            stats.completed + stats.in_progress + stats.not_started,
            stats.total
        );
    }

    #[test]
    fn empty_search_is_the_identity(books in shelf_strategy()) {
        let all = search_by_text(&books, "");
        prop_assert_eq!(all.len(), books.len());
        for (hit, original) in all.iter().zip(books.iter()) {
            prop_assert_eq!(*hit, original);
        }
    }

    #[test]
    fn search_never_invents_records(books in shelf_strategy(), query in ".{0,8}") {
        let hits = search_by_text(&books, query.as_str());
        prop_assert!(hits.len() <= books.len());
        for hit in hits {
            prop_assert!(books.iter().any(|b| b == hit));
        }
    }
}
