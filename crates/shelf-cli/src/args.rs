use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddBookArgs, DeleteBookArgs, SearchBooksArgs, ShowBookArgs, UpdateBookArgs};

/// Book inventory manager for a small bookstore
///
/// Shelf keeps a catalog of books (title, author and quantity in stock) in a
/// SQLite database. Run without a subcommand to open the interactive menu, or
/// use the subcommands below to perform a single operation.
#[derive(Parser)]
#[command(version, about, name = "shelf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/shelf/ebookstore.db
    #[arg(long, global = true, env = "SHELF_DATABASE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not insert the initial inventory into an empty database
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Print list, search and show results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Shelf CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new book to the inventory
    #[command(alias = "a")]
    Add(AddBookArgs),
    /// Update the title, author or quantity of a book
    #[command(alias = "u")]
    Update(UpdateBookArgs),
    /// Delete a book from the inventory
    #[command(alias = "d")]
    Delete(DeleteBookArgs),
    /// Search books by title, author or stock level
    #[command(alias = "s")]
    Search(SearchBooksArgs),
    /// List every book in the inventory
    #[command(alias = "l")]
    List,
    /// Show a single book
    Show(ShowBookArgs),
    /// Start the interactive menu (the default)
    Shell,
}
