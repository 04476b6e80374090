//! # bookshelf-core
//!
//! Data model and pure query layer for a local-first personal bookshelf.
//!
//! This crate defines the [`Book`] record, its fixed [`Category`] set, and
//! stateless functions over a collection snapshot: text search, category and
//! status filters, and aggregate [`ReadingStats`]. It holds no state of its
//! own — the owning collection lives in `bookshelf-store`.
//!
//! ## Quick Start
//!
//! ```
//! use bookshelf_core::{Book, Category, compute_stats, search_by_text};
//!
//! let books = vec![
//!     Book::sample("1", "Dune", "Frank Herbert"),
//!     Book::sample("2", "Foundation", "Isaac Asimov"),
//! ];
//!
//! let hits = search_by_text(&books, "dun");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Dune");
//!
//! let stats = compute_stats(&books);
//! assert_eq!(stats.total, 2);
//! ```
//!
//! ## Serde
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on the
//! record types. Field names follow the original storage shape (camelCase),
//! so a previously written collection blob round-trips unchanged.

#![warn(missing_docs)]

mod book;
mod category;
mod query;
mod stats;

pub use book::{Book, BookDraft, BookPatch};
pub use category::{Category, CategoryFilter, ParseCategoryError};
pub use query::{filter_by_category, filter_by_status, recent_books, search_by_text};
pub use stats::{category_counts, compute_stats, ReadingStats};
