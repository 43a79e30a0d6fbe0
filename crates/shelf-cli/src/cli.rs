//! Subcommand arguments and their handlers
//!
//! Each subcommand has a clap argument struct that converts into the matching
//! parameter type from [`shelf_core::params`]:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Catalog
//! ```
//!
//! Quantities and search kinds stay strings here so they are validated by the
//! catalog with the same rules and messages as the interactive shell.

use std::io;

use anyhow::{Context, Result};
use clap::Args;
use log::warn;
use shelf_core::{
    display::StatusKind,
    params::{AddBook, DeleteBook, Id, UpdateBook},
    Catalog, CatalogError, Confirmation, CreateResult, DeleteResult, OperationStatus, SearchKind,
    SearchMode,
};

use crate::{args::Commands, renderer::TerminalRenderer, shell::Shell};

/// Add a new book
///
/// Title and author are normalized to title case. The title must not match an
/// existing book, ignoring case.
#[derive(Args)]
pub struct AddBookArgs {
    /// Title of the new book
    pub title: String,
    /// Author of the new book
    pub author: String,
    /// Number of copies in stock, larger than zero
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,
}

impl From<AddBookArgs> for AddBook {
    fn from(val: AddBookArgs) -> Self {
        AddBook {
            title: val.title,
            author: val.author,
            quantity: val.quantity,
        }
    }
}

/// Update an existing book
///
/// Only the supplied fields change. A quantity of zero marks the book as out
/// of stock.
#[derive(Args)]
pub struct UpdateBookArgs {
    /// ID of the book to update
    pub id: u64,
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
    /// New author
    #[arg(short, long)]
    pub author: Option<String>,
    /// New quantity in stock, zero or larger
    #[arg(short, long, allow_hyphen_values = true)]
    pub quantity: Option<String>,
}

impl From<UpdateBookArgs> for UpdateBook {
    fn from(val: UpdateBookArgs) -> Self {
        UpdateBook {
            id: val.id,
            title: val.title,
            author: val.author,
            quantity: val.quantity,
        }
    }
}

/// Delete a book
///
/// Without --yes the book is shown and kept.
#[derive(Args)]
pub struct DeleteBookArgs {
    /// ID of the book to delete
    pub id: u64,
    /// Confirm the deletion
    #[arg(short, long)]
    pub yes: bool,
}

impl From<DeleteBookArgs> for DeleteBook {
    fn from(val: DeleteBookArgs) -> Self {
        DeleteBook {
            id: val.id,
            confirmation: Confirmation::from(val.yes),
        }
    }
}

/// Search the inventory
///
/// KIND is one of BT (title contains), BA (author contains), LS (low stock)
/// or OFS (out of stock). BT and BA need a QUERY.
#[derive(Args)]
pub struct SearchBooksArgs {
    /// Kind of search: BT, BA, LS or OFS
    pub kind: String,
    /// Text to look for in titles or authors
    pub query: Option<String>,
}

/// Show a single book
#[derive(Args)]
pub struct ShowBookArgs {
    /// ID of the book to show
    pub id: u64,
}

impl From<ShowBookArgs> for Id {
    fn from(val: ShowBookArgs) -> Self {
        Id { id: val.id }
    }
}

/// Runs subcommands against an open catalog.
pub struct Cli {
    catalog: Catalog,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(catalog: Catalog, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            catalog,
            renderer,
            json,
        }
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    pub fn handle_command(&mut self, command: Commands) -> Result<()> {
        let outcome = match command {
            Commands::Add(args) => self.add_book(&args.into()),
            Commands::Update(args) => self.update_book(&args.into()),
            Commands::Delete(args) => self.delete_book(&args.into()),
            Commands::Search(args) => self.search_books(&args),
            Commands::List => self.list_books(),
            Commands::Show(args) => self.show_book(&args.into()),
            Commands::Shell => return self.run_shell(),
        };
        self.finish(outcome)
    }

    /// Runs the interactive menu on stdin and stdout.
    pub fn run_shell(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Shell::new(&mut self.catalog, &self.renderer, stdin.lock(), stdout.lock())
            .run()
            .context("Interactive shell failed")
    }

    /// Notices are printed and count as success; other errors end the
    /// command with a non-zero exit.
    fn finish(&self, outcome: Result<()>) -> Result<()> {
        let Err(err) = outcome else {
            return Ok(());
        };

        let status = match err.downcast_ref::<CatalogError>() {
            Some(catalog_err) if catalog_err.is_fatal() => {
                warn!("Catalog operation failed: {catalog_err}");
                None
            }
            Some(catalog_err) => Some(OperationStatus::from(catalog_err)),
            None => None,
        };

        match status {
            Some(status) if status.kind == StatusKind::Notice => {
                self.renderer.render(&status.to_string())
            }
            _ => Err(err),
        }
    }

    fn add_book(&mut self, params: &AddBook) -> Result<()> {
        let book = self.catalog.add_book(params)?;
        self.renderer.render(&CreateResult::new(book).to_string())
    }

    fn update_book(&mut self, params: &UpdateBook) -> Result<()> {
        let result = self.catalog.update_book(params)?;
        self.renderer.render(&result.to_string())
    }

    fn delete_book(&mut self, params: &DeleteBook) -> Result<()> {
        match self.catalog.delete_book(params) {
            Ok(book) => self.renderer.render(&DeleteResult::new(book).to_string()),
            Err(CatalogError::NotConfirmed { book }) => {
                self.renderer.render(&book.to_string())?;
                let note = OperationStatus::notice(format!(
                    "Book '{}' (ID: {}) was not deleted, re-run with --yes to delete it",
                    book.title, book.id
                ));
                self.renderer.render(&note.to_string())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn search_books(&self, args: &SearchBooksArgs) -> Result<()> {
        let kind: SearchKind = args.kind.parse()?;
        let mode = SearchMode::new(kind, args.query.as_deref())?;
        let books = self.catalog.search_books(&mode)?;

        if self.json {
            return self.renderer.render(&format!("{}\n", books.to_json()?));
        }
        self.renderer.render(&format!("## Results for {mode}\n\n{books}"))
    }

    fn list_books(&self) -> Result<()> {
        let books = self.catalog.list_books()?;

        if self.json {
            return self.renderer.render(&format!("{}\n", books.to_json()?));
        }
        self.renderer.render(&format!("## Books in inventory\n\n{books}"))
    }

    fn show_book(&self, params: &Id) -> Result<()> {
        let book = self
            .catalog
            .find_book(params)?
            .ok_or(CatalogError::NotFound { id: params.id })?;

        if self.json {
            let json = serde_json::to_string_pretty(&book)?;
            return self.renderer.render(&format!("{json}\n"));
        }
        self.renderer.render(&book.to_string())
    }
}
