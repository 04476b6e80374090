use crate::Category;

/// A single record in the bookshelf collection.
///
/// `id` is assigned by the collection store at creation time and is never
/// changed afterwards. Title/author non-emptiness and year plausibility are
/// the responsibility of whichever form collects the input; the store only
/// guards `id` and the `is_complete`/`progress` coupling.
///
/// `progress` is a percentage in `0..=100`. A missing value reads as 0, and
/// a completed book always reads as 100 — use
/// [`effective_progress`](Book::effective_progress) anywhere the value is
/// displayed or aggregated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Book {
    /// Unique identifier within the collection, assigned by the store.
    pub id: String,
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Publication year.
    pub year: i32,
    /// Shelf category.
    pub category: Category,
    /// Whether the book has been read to the end.
    pub is_complete: bool,
    /// Opaque reference to a cover image, produced by an external
    /// collaborator. Never interpreted here.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub cover_image: Option<String>,
    /// Free-form notes about the book.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Reading progress percentage in `0..=100`, if any has been recorded.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub progress: Option<u8>,
}

impl Book {
    /// Create a record with the given identity fields and no reading state.
    ///
    /// Mostly useful for building snapshots in tests and examples; inside an
    /// application, records are created by the collection store's `add`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            year,
            category,
            is_complete: false,
            cover_image: None,
            description: None,
            progress: None,
        }
    }

    /// A tiny fiction record for doctests.
    #[doc(hidden)]
    pub fn sample(id: &str, title: &str, author: &str) -> Self {
        Self::new(id, title, author, 1970, Category::Fiction)
    }

    /// The progress value downstream consumers should use.
    ///
    /// Missing progress reads as 0; a completed book reads as 100 even if
    /// the stored field lags behind.
    #[must_use]
    pub fn effective_progress(&self) -> u8 {
        if self.is_complete {
            100
        } else {
            self.progress.unwrap_or(0)
        }
    }

    /// Whether the book has been started but not finished.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        !self.is_complete && self.effective_progress() > 0
    }
}

/// Input to the store's `add` operation: a [`Book`] without an `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Publication year.
    pub year: i32,
    /// Shelf category.
    pub category: Category,
    /// Whether the book is already finished.
    pub is_complete: bool,
    /// Opaque cover image reference.
    pub cover_image: Option<String>,
    /// Free-form notes.
    pub description: Option<String>,
    /// Initial reading progress, if any.
    pub progress: Option<u8>,
}

impl BookDraft {
    /// Create a draft with the given identity fields and no reading state.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            category,
            is_complete: false,
            cover_image: None,
            description: None,
            progress: None,
        }
    }

    /// Turn the draft into a [`Book`] under a store-assigned id.
    ///
    /// A draft marked complete gets progress 100; otherwise a missing
    /// progress becomes 0.
    pub fn into_book(self, id: String) -> Book {
        let progress = if self.is_complete {
            100
        } else {
            self.progress.unwrap_or(0)
        };
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            category: self.category,
            is_complete: self.is_complete,
            cover_image: self.cover_image,
            description: self.description,
            progress: Some(progress),
        }
    }
}

/// A sparse set of field changes for the store's `update` operation.
///
/// Absent fields are left unchanged. There is deliberately no way to touch
/// `id`. The patch does not reconcile `is_complete` with `progress`; that
/// coupling is enforced only by `toggle_complete` and `update_progress` on
/// the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    /// New title, if changing.
    pub title: Option<String>,
    /// New author, if changing.
    pub author: Option<String>,
    /// New publication year, if changing.
    pub year: Option<i32>,
    /// New category, if changing.
    pub category: Option<Category>,
    /// New completion flag, if changing.
    pub is_complete: Option<bool>,
    /// New cover image reference, if changing.
    pub cover_image: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New progress value, if changing.
    pub progress: Option<u8>,
}

impl BookPatch {
    /// A patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when applying the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge the patch into `book`, leaving absent fields untouched.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(category) = self.category {
            book.category = category;
        }
        if let Some(is_complete) = self.is_complete {
            book.is_complete = is_complete;
        }
        if let Some(cover_image) = &self.cover_image {
            book.cover_image = Some(cover_image.clone());
        }
        if let Some(description) = &self.description {
            book.description = Some(description.clone());
        }
        if let Some(progress) = self.progress {
            book.progress = Some(progress);
        }
    }
}
