//! Identifier generation for new book records.
//!
//! Ids are derived from a millisecond clock reading rendered as text, with
//! a logical counter appended when several ids are drawn within the same
//! millisecond (or when the wall clock steps backward). The generator is
//! monotonic for the lifetime of the process.

/// Generates textual record ids from a millisecond clock.
///
/// # Example
///
/// ```
/// use bookshelf_store::IdGenerator;
///
/// let mut ids = IdGenerator::new();
/// let a = ids.next_id();
/// let b = ids.next_id();
/// assert_ne!(a, b);
/// ```
pub struct IdGenerator {
    last_ms: u64,
    logical: u32,
    /// Returns the current wall-clock time in milliseconds.
    time_fn: fn() -> u64,
}

fn system_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

impl IdGenerator {
    /// Create a generator backed by `SystemTime`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_time_source(system_time_ms)
    }

    /// Create a generator with a custom millisecond clock (for tests).
    #[must_use]
    pub fn with_time_source(time_fn: fn() -> u64) -> Self {
        Self {
            last_ms: 0,
            logical: 0,
            time_fn,
        }
    }

    /// Draw the next id.
    ///
    /// Ids drawn in distinct milliseconds are the bare millisecond reading;
    /// within one millisecond a `-N` counter keeps them distinct.
    pub fn next_id(&mut self) -> String {
        let now = (self.time_fn)();
        if now > self.last_ms {
            self.last_ms = now;
            self.logical = 0;
        } else {
            self.logical += 1;
        }

        if self.logical == 0 {
            self.last_ms.to_string()
        } else {
            format!("{}-{}", self.last_ms, self.logical)
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
