use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

/// shelf: a local-first personal bookshelf.
///
/// Track the books you own, how far you've read, and what's left to start.
/// Everything lives in a single JSON slot under the data directory.
#[derive(Parser)]
#[command(name = "shelf", version, about, long_about = None)]
struct Cli {
    /// Directory holding the bookshelf data.
    #[arg(long, global = true, default_value = ".bookshelf")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the shelf.
    Add {
        /// Book title.
        title: String,

        /// Book author.
        author: String,

        /// Publication year.
        #[arg(short, long, default_value = "2000")]
        year: i32,

        /// Shelf category (Fiction, Non-Fiction, Technology, ...).
        #[arg(short, long, default_value = "Other")]
        category: String,

        /// Mark the book as already finished.
        #[arg(long)]
        done: bool,

        /// Initial reading progress percentage.
        #[arg(short, long)]
        progress: Option<i64>,

        /// Opaque cover image reference.
        #[arg(long)]
        cover: Option<String>,

        /// Free-form notes.
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List books, optionally searched and filtered.
    List {
        /// Case-insensitive substring match on title or author.
        #[arg(short, long)]
        search: Option<String>,

        /// Category filter, or "All".
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Only books still being read.
        #[arg(long, conflicts_with = "done")]
        reading: bool,

        /// Only finished books.
        #[arg(long)]
        done: bool,

        /// Show only the N most recently added books.
        #[arg(long)]
        recent: Option<usize>,
    },

    /// Show one book in full.
    Show {
        /// Book id.
        id: String,
    },

    /// Change fields of a book. Unset flags leave fields untouched.
    Update {
        /// Book id.
        id: String,

        /// New title.
        #[arg(long)]
        title: Option<String>,

        /// New author.
        #[arg(long)]
        author: Option<String>,

        /// New publication year.
        #[arg(long)]
        year: Option<i32>,

        /// New category.
        #[arg(long)]
        category: Option<String>,

        /// New cover image reference.
        #[arg(long)]
        cover: Option<String>,

        /// New description.
        #[arg(long)]
        description: Option<String>,
    },

    /// Set reading progress (0-100). Reaching 100 finishes the book.
    Progress {
        /// Book id.
        id: String,

        /// Progress percentage; values outside 0-100 are clamped.
        percent: i64,
    },

    /// Toggle a book between finished and not finished.
    Toggle {
        /// Book id.
        id: String,
    },

    /// Remove a book from the shelf.
    Delete {
        /// Book id.
        id: String,
    },

    /// Show reading statistics and per-category counts.
    Stats,

    /// Dump the collection as JSON for debugging.
    Export,

    /// Remove every book and the storage slot.
    Clear,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            title,
            author,
            year,
            category,
            done,
            progress,
            cover,
            description,
        } => commands::add(
            &cli.data_dir,
            commands::AddArgs {
                title,
                author,
                year,
                category,
                done,
                progress,
                cover,
                description,
            },
        ),
        Commands::List {
            search,
            category,
            reading,
            done,
            recent,
        } => {
            let status = if reading {
                Some(false)
            } else if done {
                Some(true)
            } else {
                None
            };
            commands::list(&cli.data_dir, search.as_deref(), &category, status, recent)
        }
        Commands::Show { id } => commands::show(&cli.data_dir, &id),
        Commands::Update {
            id,
            title,
            author,
            year,
            category,
            cover,
            description,
        } => commands::update(
            &cli.data_dir,
            &id,
            commands::UpdateArgs {
                title,
                author,
                year,
                category,
                cover,
                description,
            },
        ),
        Commands::Progress { id, percent } => commands::progress(&cli.data_dir, &id, percent),
        Commands::Toggle { id } => commands::toggle(&cli.data_dir, &id),
        Commands::Delete { id } => commands::delete(&cli.data_dir, &id),
        Commands::Stats => commands::stats(&cli.data_dir),
        Commands::Export => commands::export(&cli.data_dir),
        Commands::Clear => commands::clear(&cli.data_dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
