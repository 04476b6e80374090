//! The persistence adapter: whole-collection JSON blobs in one slot.

use std::fmt;

use bookshelf_core::Book;

use crate::traits::SlotStore;

/// The well-known slot holding the serialized collection.
pub const BOOKS_SLOT: &str = "bookshelf_books";

/// A tagged storage failure from [`ShelfPersistence`].
///
/// The collection store treats every variant as log-and-continue, but the
/// result type keeps that swallowing an explicit choice: a caller that
/// wants to surface persistence trouble can observe it here.
#[derive(Debug)]
pub enum StorageError<E: fmt::Debug + fmt::Display> {
    /// Error from the underlying slot backend.
    Backend(E),
    /// The collection could not be serialized.
    Serialize(String),
    /// The stored blob is not a valid collection.
    Deserialize(String),
}

impl<E: fmt::Debug + fmt::Display> fmt::Display for StorageError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(e) => write!(f, "storage backend error: {e}"),
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
            Self::Deserialize(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for StorageError<E> {}

/// Reads and writes the entire collection as one JSON array.
///
/// The blob replaces any prior value on every save; nothing is written
/// incrementally. The JSON shape matches the original storage format, so a
/// pre-existing `bookshelf_books` blob loads as-is.
pub struct ShelfPersistence<S: SlotStore> {
    store: S,
    slot: String,
}

impl<S: SlotStore> ShelfPersistence<S> {
    /// Wrap a backend, using the default [`BOOKS_SLOT`] key.
    pub fn new(store: S) -> Self {
        Self::with_slot(store, BOOKS_SLOT)
    }

    /// Wrap a backend with a custom slot key.
    pub fn with_slot(store: S, slot: &str) -> Self {
        Self {
            store,
            slot: slot.to_string(),
        }
    }

    /// Get a reference to the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a mutable reference to the underlying backend.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load the collection from the slot.
    ///
    /// An absent slot is an empty collection. A backend failure or a blob
    /// that does not deserialize into a book sequence is a tagged error —
    /// the collection store maps either to "start empty".
    pub fn load(&self) -> Result<Vec<Book>, StorageError<S::Error>> {
        let raw = self.store.read(&self.slot).map_err(StorageError::Backend)?;
        match raw {
            None => Ok(Vec::new()),
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::Deserialize(e.to_string())),
        }
    }

    /// Replace the slot with the given collection, in one logical write.
    pub fn save(&mut self, books: &[Book]) -> Result<(), StorageError<S::Error>> {
        let bytes =
            serde_json::to_vec(books).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store
            .write(&self.slot, &bytes)
            .map_err(StorageError::Backend)
    }

    /// Delete the slot entirely.
    pub fn clear(&mut self) -> Result<(), StorageError<S::Error>> {
        self.store.remove(&self.slot).map_err(StorageError::Backend)
    }
}
