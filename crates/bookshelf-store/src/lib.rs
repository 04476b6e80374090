//! # bookshelf-store
//!
//! Durable storage and the owning collection store for a local-first
//! personal bookshelf.
//!
//! The layering, bottom up:
//!
//! - [`SlotStore`] — byte-level storage of named slots, with pluggable
//!   backends: [`MemoryStore`], [`FileStore`], and `RedbStore` behind the
//!   `redb` feature.
//! - [`ShelfPersistence`] — serializes the whole collection as one JSON
//!   blob under the well-known `bookshelf_books` slot.
//! - [`Bookshelf`] — owns the in-memory ordered collection, applies every
//!   mutation, enforces the `is_complete`/`progress` coupling, and
//!   write-through persists after each change.
//!
//! ## Quick Start
//!
//! ```
//! use bookshelf_core::{BookDraft, Category};
//! use bookshelf_store::{Bookshelf, MemoryStore};
//!
//! let mut shelf = Bookshelf::with_store(MemoryStore::new());
//! let id = shelf.add(BookDraft::new("Dune", "Frank Herbert", 1965, Category::Fiction));
//!
//! shelf.update_progress(&id, 100);
//! assert!(shelf.get(&id).unwrap().is_complete);
//! ```
//!
//! Storage failures never surface through [`Bookshelf`]'s operations: they
//! are logged through the [`log`] facade and the in-memory collection stays
//! authoritative for the rest of the session.

#![warn(missing_docs)]

mod file;
mod ids;
mod memory;
mod persistence;
#[cfg(feature = "redb")]
mod redb;
mod shelf;
mod traits;

pub use file::{FileError, FileStore};
pub use ids::IdGenerator;
pub use memory::{MemoryError, MemoryStore};
pub use persistence::{ShelfPersistence, StorageError, BOOKS_SLOT};
#[cfg(feature = "redb")]
pub use redb::{RedbError, RedbStore};
pub use shelf::Bookshelf;
pub use traits::SlotStore;
