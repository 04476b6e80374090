use core::fmt;

/// Byte-level storage of named slots.
///
/// A slot holds one opaque value under a well-known key; every write
/// replaces the whole value. This is the only contract the persistence
/// layer needs — backends do not interpret slot contents.
pub trait SlotStore {
    /// Error type for this backend.
    type Error: fmt::Debug + fmt::Display;

    /// Read the value stored under `key`.
    /// Returns `None` if the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Replace the value stored under `key` in one logical operation.
    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), Self::Error>;

    /// Remove the slot entirely. Removing an absent slot is not an error.
    fn remove(&mut self, key: &str) -> Result<(), Self::Error>;

    /// Check whether the slot holds a value.
    fn exists(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(self.read(key)?.is_some())
    }
}
