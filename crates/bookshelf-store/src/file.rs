//! Plain-file storage backend.
//!
//! Each slot is one file in a directory; a write replaces the file through
//! a temp-file-and-rename so a crash mid-write never leaves a torn slot.
//!
//! ```no_run
//! use bookshelf_store::{FileStore, SlotStore};
//!
//! let mut store = FileStore::open(".bookshelf").unwrap();
//! store.write("bookshelf_books", b"[]").unwrap();
//! ```

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::traits::SlotStore;

/// Errors returned by [`FileStore`] operations.
#[derive(Debug)]
pub struct FileError(String);

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for FileError {}

fn err(e: impl fmt::Display) -> FileError {
    FileError(e.to_string())
}

/// A persistence backend keeping each slot in its own file.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, FileError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(err)?;
        Ok(Self { dir })
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SlotStore for FileStore {
    type Error = FileError;

    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, FileError> {
        match fs::read(self.slot_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(err(e)),
        }
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), FileError> {
        // Write to a sibling temp file, then rename over the slot. Rename
        // within one directory is atomic on the platforms we care about.
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{key}.tmp"));
        fs::write(&tmp, value).map_err(err)?;
        fs::rename(&tmp, &path).map_err(err)
    }

    fn remove(&mut self, key: &str) -> Result<(), FileError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(err(e)),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, FileError> {
        Ok(self.slot_path(key).exists())
    }
}
