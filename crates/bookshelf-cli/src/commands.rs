use std::path::Path;

use bookshelf_core::{
    category_counts, compute_stats, filter_by_category, filter_by_status, recent_books,
    search_by_text, Book, BookDraft, BookPatch, Category, CategoryFilter,
};
use bookshelf_store::{Bookshelf, FileStore};

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

fn open_shelf(data_dir: &Path) -> std::result::Result<Bookshelf<FileStore>, Box<dyn std::error::Error>> {
    Ok(Bookshelf::with_store(FileStore::open(data_dir)?))
}

/// Clamp a user-supplied percentage into the store's `0..=100` contract.
fn clamp_percent(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Arguments for `shelf add`.
pub struct AddArgs {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub category: String,
    pub done: bool,
    pub progress: Option<i64>,
    pub cover: Option<String>,
    pub description: Option<String>,
}

/// `shelf add <title> <author>` — Add a book to the shelf.
pub fn add(data_dir: &Path, args: AddArgs) -> Result {
    if args.title.trim().is_empty() || args.author.trim().is_empty() {
        return Err("title and author must not be empty".into());
    }
    let category: Category = args.category.parse()?;

    let mut shelf = open_shelf(data_dir)?;
    let mut draft = BookDraft::new(args.title, args.author, args.year, category);
    draft.is_complete = args.done;
    draft.progress = args.progress.map(clamp_percent);
    draft.cover_image = args.cover;
    draft.description = args.description;

    let title = draft.title.clone();
    let author = draft.author.clone();
    let id = shelf.add(draft);
    println!("Added \"{title}\" by {author} (id {id})");
    Ok(())
}

/// `shelf list` — List books, optionally searched and filtered.
pub fn list(
    data_dir: &Path,
    search: Option<&str>,
    category: &str,
    status: Option<bool>,
    recent: Option<usize>,
) -> Result {
    let filter: CategoryFilter = category.parse()?;
    let shelf = open_shelf(data_dir)?;

    let rows: Vec<&Book> = if let Some(limit) = recent {
        recent_books(shelf.books(), limit)
    } else {
        let hits = search_by_text(shelf.books(), search.unwrap_or(""));
        let hits = filter_by_category(hits, filter);
        match status {
            Some(is_complete) => filter_by_status(hits, is_complete),
            None => hits,
        }
    };

    if rows.is_empty() {
        println!("(no books)");
        return Ok(());
    }

    println!(
        "  {:<18} {:<28} {:<20} {:>4}  {:<12} {:>8}",
        "Id", "Title", "Author", "Year", "Category", "Progress"
    );
    println!("  {}", "-".repeat(96));
    for book in rows {
        let progress = if book.is_complete {
            "done".to_string()
        } else {
            format!("{}%", book.effective_progress())
        };
        println!(
            "  {:<18} {:<28} {:<20} {:>4}  {:<12} {:>8}",
            book.id,
            truncate(&book.title, 28),
            truncate(&book.author, 20),
            book.year,
            book.category.name(),
            progress,
        );
    }
    Ok(())
}

/// `shelf show <id>` — Show one book in full.
pub fn show(data_dir: &Path, id: &str) -> Result {
    let shelf = open_shelf(data_dir)?;
    let Some(book) = shelf.get(id) else {
        return Err(format!("no book with id {id}").into());
    };

    println!("Title:    {}", book.title);
    println!("Author:   {}", book.author);
    println!("Year:     {}", book.year);
    println!("Category: {}", book.category);
    println!(
        "Status:   {}",
        if book.is_complete {
            "finished".to_string()
        } else {
            format!("{}% read", book.effective_progress())
        }
    );
    if let Some(description) = &book.description {
        println!("Notes:    {description}");
    }
    if book.cover_image.is_some() {
        println!("Cover:    (attached)");
    }
    println!("Id:       {}", book.id);
    Ok(())
}

/// Arguments for `shelf update`.
pub struct UpdateArgs {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub cover: Option<String>,
    pub description: Option<String>,
}

/// `shelf update <id>` — Change fields of a book.
pub fn update(data_dir: &Path, id: &str, args: UpdateArgs) -> Result {
    let category = match args.category {
        Some(name) => Some(name.parse::<Category>()?),
        None => None,
    };

    let mut shelf = open_shelf(data_dir)?;
    if shelf.get(id).is_none() {
        return Err(format!("no book with id {id}").into());
    }

    let patch = BookPatch {
        title: args.title,
        author: args.author,
        year: args.year,
        category,
        cover_image: args.cover,
        description: args.description,
        ..BookPatch::default()
    };
    if patch.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    shelf.update(id, patch);
    if let Some(book) = shelf.get(id) {
        println!("Updated \"{}\"", book.title);
    }
    Ok(())
}

/// `shelf progress <id> <percent>` — Set reading progress.
pub fn progress(data_dir: &Path, id: &str, percent: i64) -> Result {
    let mut shelf = open_shelf(data_dir)?;
    if shelf.get(id).is_none() {
        return Err(format!("no book with id {id}").into());
    }

    shelf.update_progress(id, clamp_percent(percent));
    if let Some(book) = shelf.get(id) {
        if book.is_complete {
            println!("Finished \"{}\"!", book.title);
        } else {
            println!("\"{}\" is now {}% read", book.title, book.effective_progress());
        }
    }
    Ok(())
}

/// `shelf toggle <id>` — Toggle finished status.
pub fn toggle(data_dir: &Path, id: &str) -> Result {
    let mut shelf = open_shelf(data_dir)?;
    if shelf.get(id).is_none() {
        return Err(format!("no book with id {id}").into());
    }

    shelf.toggle_complete(id);
    if let Some(book) = shelf.get(id) {
        println!(
            "\"{}\" is now {}",
            book.title,
            if book.is_complete {
                "finished"
            } else {
                "not finished"
            }
        );
    }
    Ok(())
}

/// `shelf delete <id>` — Remove a book.
pub fn delete(data_dir: &Path, id: &str) -> Result {
    let mut shelf = open_shelf(data_dir)?;
    let Some(book) = shelf.get(id) else {
        return Err(format!("no book with id {id}").into());
    };
    let title = book.title.clone();

    shelf.delete(id);
    println!("Deleted \"{title}\"");
    Ok(())
}

/// `shelf stats` — Reading statistics and per-category counts.
pub fn stats(data_dir: &Path) -> Result {
    let shelf = open_shelf(data_dir)?;
    let stats = compute_stats(shelf.books());

    println!("Books:       {}", stats.total);
    println!(
        "Finished:    {} ({}%)",
        stats.completed,
        stats.completion_rate()
    );
    println!(
        "Reading:     {} ({}%)",
        stats.in_progress,
        stats.in_progress_rate()
    );
    println!("Not started: {}", stats.not_started);

    let counts = category_counts(shelf.books());
    if stats.total > 0 {
        println!();
        for (category, count) in counts {
            if count > 0 {
                println!("  {:<12} {count}", category.name());
            }
        }
    }
    Ok(())
}

/// `shelf export` — Dump the collection as JSON for debugging.
pub fn export(data_dir: &Path) -> Result {
    let shelf = open_shelf(data_dir)?;
    println!("{}", serde_json::to_string_pretty(shelf.books())?);
    Ok(())
}

/// `shelf clear` — Remove every book and the storage slot.
pub fn clear(data_dir: &Path) -> Result {
    let mut shelf = open_shelf(data_dir)?;
    let count = shelf.len();
    shelf.clear();
    println!("Cleared {count} books");
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
