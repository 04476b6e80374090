//! Pure-Rust slot backend using [`redb`](https://docs.rs/redb).
//!
//! Keeps the whole collection blob inside a single-file embedded database
//! instead of a loose file. Enable with `features = ["redb"]`.
//!
//! ```no_run
//! use bookshelf_store::{RedbStore, SlotStore};
//!
//! let mut store = RedbStore::open("/tmp/bookshelf.redb").unwrap();
//! store.write("bookshelf_books", b"[]").unwrap();
//! ```

use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition};

use crate::traits::SlotStore;

const SLOT_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("bookshelf_slots");

/// Errors returned by [`RedbStore`] operations.
#[derive(Debug)]
pub struct RedbError(String);

impl std::fmt::Display for RedbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for RedbError {}

fn err(e: impl std::fmt::Display) -> RedbError {
    RedbError(e.to_string())
}

/// A slot backend built on [`redb`].
///
/// Every write runs in its own transaction, so slot replacement is atomic
/// at the database level.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open or create a redb database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RedbError> {
        let db = Database::create(path).map_err(err)?;
        Self::with_database(db)
    }

    /// Create an in-memory redb database (for testing).
    pub fn open_in_memory() -> Result<Self, RedbError> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(err)?;
        Self::with_database(db)
    }

    fn with_database(db: Database) -> Result<Self, RedbError> {
        // Ensure the table exists by opening a write txn.
        let txn = db.begin_write().map_err(err)?;
        txn.open_table(SLOT_TABLE).map_err(err)?;
        txn.commit().map_err(err)?;
        Ok(Self { db })
    }
}

impl SlotStore for RedbStore {
    type Error = RedbError;

    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, RedbError> {
        let txn = self.db.begin_read().map_err(err)?;
        let table = txn.open_table(SLOT_TABLE).map_err(err)?;
        match table.get(key).map_err(err)? {
            Some(guard) => Ok(Some(guard.value().to_vec())),
            None => Ok(None),
        }
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), RedbError> {
        let txn = self.db.begin_write().map_err(err)?;
        {
            let mut table = txn.open_table(SLOT_TABLE).map_err(err)?;
            table.insert(key, value).map_err(err)?;
        }
        txn.commit().map_err(err)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), RedbError> {
        let txn = self.db.begin_write().map_err(err)?;
        {
            let mut table = txn.open_table(SLOT_TABLE).map_err(err)?;
            table.remove(key).map_err(err)?;
        }
        txn.commit().map_err(err)?;
        Ok(())
    }
}
