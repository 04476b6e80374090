use std::collections::BTreeMap;
use std::fmt;

use crate::traits::SlotStore;

/// In-memory storage backend.
///
/// Slots live in a `BTreeMap` — nothing touches disk. Ideal for tests and
/// for running the store without durability.
///
/// # Example
///
/// ```
/// use bookshelf_store::{MemoryStore, SlotStore};
///
/// let mut store = MemoryStore::new();
/// store.write("greeting", b"hello").unwrap();
/// assert_eq!(store.read("greeting").unwrap().as_deref(), Some(b"hello".as_slice()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, Vec<u8>>,
}

/// Error type for the in-memory backend.
///
/// This backend never actually fails, but the trait requires an error type.
#[derive(Debug, Clone)]
pub struct MemoryError(String);

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoryStore error: {}", self.0)
    }
}

impl std::error::Error for MemoryError {}

impl MemoryStore {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently holding a value.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl SlotStore for MemoryStore {
    type Error = MemoryError;

    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), Self::Error> {
        self.slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        self.slots.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(self.slots.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_remove() {
        let mut store = MemoryStore::new();

        store.write("k1", b"hello").unwrap();
        assert_eq!(store.read("k1").unwrap(), Some(b"hello".to_vec()));

        store.write("k1", b"world").unwrap();
        assert_eq!(store.read("k1").unwrap(), Some(b"world".to_vec()));

        store.remove("k1").unwrap();
        assert_eq!(store.read("k1").unwrap(), None);
    }

    #[test]
    fn remove_absent_slot_is_ok() {
        let mut store = MemoryStore::new();
        store.remove("nothing").unwrap();
    }

    #[test]
    fn exists_tracks_writes() {
        let mut store = MemoryStore::new();
        assert!(!store.exists("k").unwrap());
        store.write("k", b"v").unwrap();
        assert!(store.exists("k").unwrap());
        assert_eq!(store.slot_count(), 1);
    }
}
