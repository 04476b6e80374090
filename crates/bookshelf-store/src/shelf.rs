//! The collection store: the sole owner of the in-memory book sequence.

use bookshelf_core::{Book, BookDraft, BookPatch};
use log::{debug, error, warn};

use crate::ids::IdGenerator;
use crate::persistence::ShelfPersistence;
use crate::traits::SlotStore;

/// The owning collection store for a personal bookshelf.
///
/// Construct one per process with [`open`](Bookshelf::open); the collection
/// is loaded from the durable slot exactly once. Every mutation updates the
/// in-memory sequence, then write-through persists the whole collection
/// before returning. Insertion order is preserved and is the basis for
/// "recent books" queries.
///
/// Mutations never raise: a missing id is a no-op, and a storage failure is
/// logged while the in-memory collection stays authoritative for the rest
/// of the session.
///
/// # Example
///
/// ```
/// use bookshelf_core::{BookDraft, Category};
/// use bookshelf_store::{Bookshelf, MemoryStore};
///
/// let mut shelf = Bookshelf::with_store(MemoryStore::new());
///
/// let mut draft = BookDraft::new("Dune", "Frank Herbert", 1965, Category::Fiction);
/// draft.progress = Some(40);
/// let id = shelf.add(draft);
///
/// shelf.update_progress(&id, 100);
/// let dune = shelf.get(&id).unwrap();
/// assert!(dune.is_complete);
/// assert_eq!(dune.progress, Some(100));
/// ```
pub struct Bookshelf<S: SlotStore> {
    books: Vec<Book>,
    ids: IdGenerator,
    persistence: ShelfPersistence<S>,
}

impl<S: SlotStore> Bookshelf<S> {
    /// Open the shelf over the given persistence adapter.
    ///
    /// A slot that is absent, unreadable, or corrupt yields an empty
    /// collection; the failure is logged, never raised.
    pub fn open(persistence: ShelfPersistence<S>) -> Self {
        let books = match persistence.load() {
            Ok(books) => {
                debug!("loaded {} books from storage", books.len());
                books
            }
            Err(e) => {
                warn!("could not load bookshelf, starting empty: {e}");
                Vec::new()
            }
        };
        Self {
            books,
            ids: IdGenerator::new(),
            persistence,
        }
    }

    /// Open the shelf directly over a backend, using the default slot.
    pub fn with_store(store: S) -> Self {
        Self::open(ShelfPersistence::new(store))
    }

    /// The full collection, in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Number of books on the shelf.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the shelf is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Add a new book, returning its assigned id.
    ///
    /// The id is generated here and is unique among all current ids. A
    /// draft marked complete is stored with progress 100; otherwise a
    /// missing progress becomes 0. The record is appended at the end.
    pub fn add(&mut self, draft: BookDraft) -> String {
        let mut id = self.ids.next_id();
        // Ids loaded from a previous session could collide with a clock
        // reading; redraw until fresh. The generator's counter guarantees
        // termination.
        while self.books.iter().any(|book| book.id == id) {
            id = self.ids.next_id();
        }

        debug!("adding book \"{}\" with id {id}", draft.title);
        self.books.push(draft.into_book(id.clone()));
        self.persist();
        id
    }

    /// Remove the book with the given id. No-op if the id is absent.
    pub fn delete(&mut self, id: &str) {
        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        if self.books.len() == before {
            debug!("delete: no book with id {id}");
            return;
        }
        self.persist();
    }

    /// Flip a book's completion flag. No-op if the id is absent.
    ///
    /// Completing a book also sets its progress to 100. Un-completing
    /// leaves the stored progress where it was.
    pub fn toggle_complete(&mut self, id: &str) {
        let Some(book) = self.books.iter_mut().find(|book| book.id == id) else {
            debug!("toggle_complete: no book with id {id}");
            return;
        };
        book.is_complete = !book.is_complete;
        if book.is_complete {
            book.progress = Some(100);
        }
        self.persist();
    }

    /// Shallow-merge a sparse field set into a book. No-op if the id is
    /// absent; an empty patch still counts as a (persisted) no-change.
    ///
    /// The patch cannot touch `id`, and it does not reconcile
    /// `is_complete` with `progress` — that coupling belongs to
    /// [`toggle_complete`](Bookshelf::toggle_complete) and
    /// [`update_progress`](Bookshelf::update_progress).
    pub fn update(&mut self, id: &str, patch: BookPatch) {
        let Some(book) = self.books.iter_mut().find(|book| book.id == id) else {
            debug!("update: no book with id {id}");
            return;
        };
        patch.apply_to(book);
        self.persist();
    }

    /// Set a book's reading progress. No-op if the id is absent.
    ///
    /// The value is stored as given; callers clamp to `0..=100`. Reaching
    /// 100 marks the book complete, anything lower marks it not complete,
    /// so the two fields are always consistent after this call.
    pub fn update_progress(&mut self, id: &str, progress: u8) {
        let Some(book) = self.books.iter_mut().find(|book| book.id == id) else {
            debug!("update_progress: no book with id {id}");
            return;
        };
        book.progress = Some(progress);
        book.is_complete = progress == 100;
        self.persist();
    }

    /// Remove every book and delete the durable slot.
    pub fn clear(&mut self) {
        self.books.clear();
        if let Err(e) = self.persistence.clear() {
            error!("could not clear bookshelf storage: {e}");
        }
    }

    /// Write-through: persist the whole collection after a mutation.
    ///
    /// A failed write is logged and otherwise swallowed; the in-memory
    /// collection remains authoritative for the current session.
    fn persist(&mut self) {
        if let Err(e) = self.persistence.save(&self.books) {
            error!(
                "could not persist bookshelf ({} books), keeping in-memory state: {e}",
                self.books.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::BOOKS_SLOT;
    use crate::MemoryStore;
    use bookshelf_core::Category;

    fn draft(title: &str, author: &str) -> BookDraft {
        BookDraft::new(title, author, 1965, Category::Fiction)
    }

    fn shelf() -> Bookshelf<MemoryStore> {
        Bookshelf::with_store(MemoryStore::new())
    }

    #[test]
    fn add_assigns_distinct_ids() {
        let mut shelf = shelf();
        let mut ids: Vec<String> = Vec::new();
        for i in 0..50 {
            ids.push(shelf.add(draft(&format!("Book {i}"), "Author")));
        }
        assert_eq!(shelf.len(), 50);

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut shelf = shelf();
        let first = shelf.add(draft("Dune", "Frank Herbert"));
        let second = shelf.add(draft("Foundation", "Isaac Asimov"));

        assert_eq!(shelf.books()[0].id, first);
        assert_eq!(shelf.books()[1].id, second);
    }

    #[test]
    fn add_complete_draft_stores_progress_100() {
        let mut shelf = shelf();
        let mut d = draft("A", "B");
        d.is_complete = true;
        let id = shelf.add(d);

        assert_eq!(shelf.get(&id).unwrap().progress, Some(100));
    }

    #[test]
    fn add_incomplete_draft_defaults_progress_to_zero() {
        let mut shelf = shelf();
        let id = shelf.add(draft("A", "B"));
        assert_eq!(shelf.get(&id).unwrap().progress, Some(0));
    }

    #[test]
    fn delete_removes_at_most_one() {
        let mut shelf = shelf();
        let id = shelf.add(draft("Dune", "Frank Herbert"));
        shelf.add(draft("Foundation", "Isaac Asimov"));

        shelf.delete(&id);
        assert_eq!(shelf.len(), 1);
        assert!(shelf.get(&id).is_none());

        // Absent id is a no-op.
        shelf.delete(&id);
        shelf.delete("never-existed");
        assert_eq!(shelf.len(), 1);
    }

    #[test]
    fn toggle_sets_progress_100_and_back_preserves_it() {
        let mut shelf = shelf();
        let mut d = draft("Dune", "Frank Herbert");
        d.progress = Some(40);
        let id = shelf.add(d);

        shelf.toggle_complete(&id);
        let book = shelf.get(&id).unwrap();
        assert!(book.is_complete);
        assert_eq!(book.progress, Some(100));

        // Toggling back un-completes but does not reset progress.
        shelf.toggle_complete(&id);
        let book = shelf.get(&id).unwrap();
        assert!(!book.is_complete);
        assert_eq!(book.progress, Some(100));
    }

    #[test]
    fn double_toggle_restores_the_flag() {
        let mut shelf = shelf();
        let id = shelf.add(draft("Dune", "Frank Herbert"));

        shelf.toggle_complete(&id);
        shelf.toggle_complete(&id);
        assert!(!shelf.get(&id).unwrap().is_complete);
    }

    #[test]
    fn update_progress_couples_completion() {
        let mut shelf = shelf();
        let mut d = draft("Dune", "Frank Herbert");
        d.progress = Some(40);
        let id = shelf.add(d);

        shelf.update_progress(&id, 100);
        let book = shelf.get(&id).unwrap();
        assert!(book.is_complete);
        assert_eq!(book.progress, Some(100));

        shelf.update_progress(&id, 60);
        let book = shelf.get(&id).unwrap();
        assert!(!book.is_complete);
        assert_eq!(book.progress, Some(60));
    }

    #[test]
    fn update_merges_sparse_fields_only() {
        let mut shelf = shelf();
        let id = shelf.add(draft("Dune", "Frank Herbert"));

        shelf.update(
            &id,
            BookPatch {
                title: Some("Dune Messiah".to_string()),
                description: Some("the sequel".to_string()),
                ..BookPatch::default()
            },
        );

        let book = shelf.get(&id).unwrap();
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.description.as_deref(), Some("the sequel"));
        assert_eq!(book.id, id);
    }

    #[test]
    fn mutations_on_missing_ids_are_no_ops() {
        let mut shelf = shelf();
        shelf.add(draft("Dune", "Frank Herbert"));
        let before = shelf.books().to_vec();

        shelf.toggle_complete("missing");
        shelf.update("missing", BookPatch::new());
        shelf.update_progress("missing", 50);
        shelf.delete("missing");

        assert_eq!(shelf.books(), before.as_slice());
    }

    #[test]
    fn cover_image_is_stored_verbatim() {
        let mut shelf = shelf();
        let mut d = draft("Dune", "Frank Herbert");
        d.cover_image = Some("data:image/png;base64,AAAA".to_string());
        let id = shelf.add(d);

        assert_eq!(
            shelf.get(&id).unwrap().cover_image.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn every_mutation_writes_through() {
        let mut shelf = shelf();
        let id = shelf.add(draft("Dune", "Frank Herbert"));

        let persisted = |shelf: &Bookshelf<MemoryStore>| -> Vec<Book> {
            let bytes = shelf
                .persistence
                .store()
                .read(BOOKS_SLOT)
                .unwrap()
                .expect("slot written");
            serde_json::from_slice(&bytes).unwrap()
        };

        assert_eq!(persisted(&shelf).len(), 1);

        shelf.update_progress(&id, 70);
        assert_eq!(persisted(&shelf)[0].progress, Some(70));

        shelf.delete(&id);
        assert_eq!(persisted(&shelf).len(), 0);
    }

    #[test]
    fn corrupt_slot_opens_empty() {
        let mut store = MemoryStore::new();
        store.write(BOOKS_SLOT, b"definitely not json").unwrap();

        let shelf = Bookshelf::with_store(store);
        assert!(shelf.is_empty());
    }

    #[test]
    fn clear_empties_shelf_and_slot() {
        let mut shelf = shelf();
        shelf.add(draft("Dune", "Frank Herbert"));
        shelf.clear();

        assert!(shelf.is_empty());
        assert!(!shelf.persistence.store().exists(BOOKS_SLOT).unwrap());
    }

    // A backend whose writes always fail, for the log-and-continue path.
    struct BrokenStore;

    #[derive(Debug)]
    struct BrokenError;

    impl std::fmt::Display for BrokenError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("disk full")
        }
    }

    impl SlotStore for BrokenStore {
        type Error = BrokenError;

        fn read(&self, _key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
            Ok(None)
        }

        fn write(&mut self, _key: &str, _value: &[u8]) -> Result<(), Self::Error> {
            Err(BrokenError)
        }

        fn remove(&mut self, _key: &str) -> Result<(), Self::Error> {
            Err(BrokenError)
        }
    }

    #[test]
    fn failed_writes_keep_memory_authoritative() {
        let mut shelf = Bookshelf::with_store(BrokenStore);

        let id = shelf.add(draft("Dune", "Frank Herbert"));
        shelf.update_progress(&id, 100);

        // Every save failed, but the session state is intact.
        assert_eq!(shelf.len(), 1);
        assert!(shelf.get(&id).unwrap().is_complete);
    }
}
