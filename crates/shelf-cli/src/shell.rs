//! Interactive menu over any line reader and writer
//!
//! The shell prompts for a menu choice, collects the fields an operation
//! needs, calls the catalog and renders the outcome. Every recoverable
//! [`CatalogError`] is shown to the user and the menu comes back; storage
//! failures end the session.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::Result;
use log::{debug, warn};
use shelf_core::{
    params::{AddBook, DeleteBook, Id, UpdateBook},
    BookStore, Catalog, CatalogError, Confirmation, CreateResult, DeleteResult, OperationStatus, SearchKind,
    SearchMode,
};

use crate::renderer::TerminalRenderer;

const MENU: &str = "\
## Menu

1. Enter a new book
2. Update a book
3. Delete a book
4. Search books
5. Exit
6. List all books

";

/// An option of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    Search,
    Exit,
    List,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Update),
            "3" => Ok(MenuChoice::Delete),
            "4" => Ok(MenuChoice::Search),
            "5" => Ok(MenuChoice::Exit),
            "6" => Ok(MenuChoice::List),
            other => Err(format!("'{other}' is not a menu option, please try again")),
        }
    }
}

pub struct Shell<'a, S, R, W> {
    catalog: &'a mut Catalog<S>,
    renderer: &'a TerminalRenderer,
    input: R,
    output: W,
}

impl<'a, S: BookStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(
        catalog: &'a mut Catalog<S>,
        renderer: &'a TerminalRenderer,
        input: R,
        output: W,
    ) -> Self {
        Self {
            catalog,
            renderer,
            input,
            output,
        }
    }

    /// Runs the menu until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render(MENU)?;
            let Some(line) = self.prompt("Select an option: ")? else {
                debug!("Input closed at the menu");
                return Ok(());
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(message) => {
                    self.report(&OperationStatus::failure(message))?;
                    continue;
                }
            };
            debug!("Menu choice {choice:?}");

            let outcome = match choice {
                MenuChoice::Add => self.add_book(),
                MenuChoice::Update => self.update_book(),
                MenuChoice::Delete => self.delete_book(),
                MenuChoice::Search => self.search_books(),
                MenuChoice::List => self.list_books(),
                MenuChoice::Exit => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
            };
            self.settle(outcome)?;
        }
    }

    /// Asks for a book until one is added or its title turns out to be taken.
    fn add_book(&mut self) -> Result<()> {
        loop {
            let Some(title) = self.prompt("Title: ")? else {
                return Ok(());
            };
            let Some(author) = self.prompt("Author: ")? else {
                return Ok(());
            };
            let Some(quantity) = self.prompt("Quantity: ")? else {
                return Ok(());
            };

            match self.catalog.add_book(&AddBook {
                title,
                author,
                quantity,
            }) {
                Ok(book) => return self.render(&CreateResult::new(book).to_string()),
                Err(err @ CatalogError::DuplicateBook { .. }) => return Err(err.into()),
                Err(err) if err.is_fatal() => return Err(err.into()),
                Err(err) => self.report(&OperationStatus::from(&err))?,
            }
        }
    }

    fn update_book(&mut self) -> Result<()> {
        if !self.show_inventory()? {
            return Ok(());
        }
        let Some(id) = self.prompt_id("ID of the book to update: ")? else {
            return Ok(());
        };
        let current = self
            .catalog
            .find_book(&Id { id })?
            .ok_or(CatalogError::NotFound { id })?;
        self.render(&format!("## Current details\n\n{current}"))?;
        writeln!(self.output, "Press Enter to keep a field unchanged.")?;

        let Some(title) = self.prompt("New title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("New author: ")? else {
            return Ok(());
        };
        let Some(quantity) = self.prompt("New quantity: ")? else {
            return Ok(());
        };

        let result = self.catalog.update_book(&UpdateBook {
            id,
            title: Some(title),
            author: Some(author),
            quantity: Some(quantity),
        })?;
        self.render(&result.to_string())
    }

    fn delete_book(&mut self) -> Result<()> {
        if !self.show_inventory()? {
            return Ok(());
        }
        let Some(id) = self.prompt_id("ID of the book to delete: ")? else {
            return Ok(());
        };
        let book = self
            .catalog
            .find_book(&Id { id })?
            .ok_or(CatalogError::NotFound { id })?;
        self.render(&book.to_string())?;

        let Some(answer) = self.prompt("Are you sure you want to delete this book? (Y/N): ")?
        else {
            return Ok(());
        };
        let confirmation: Confirmation = answer.parse()?;

        let deleted = self.catalog.delete_book(&DeleteBook { id, confirmation })?;
        self.render(&DeleteResult::new(deleted).to_string())
    }

    fn search_books(&mut self) -> Result<()> {
        let Some(answer) = self.prompt(
            "Search by title (BT), author (BA), low stock (LS) or out of stock (OFS): ",
        )?
        else {
            return Ok(());
        };
        let kind: SearchKind = answer.parse()?;

        let query = if kind.takes_query() {
            match self.prompt("Search for: ")? {
                Some(query) => Some(query),
                None => return Ok(()),
            }
        } else {
            None
        };

        let mode = SearchMode::new(kind, query.as_deref())?;
        let books = self.catalog.search_books(&mode)?;
        self.render(&format!("## Results for {mode}\n\n{books}"))
    }

    fn list_books(&mut self) -> Result<()> {
        let books = self.catalog.list_books()?;
        self.render(&format!("## Books in inventory\n\n{books}"))
    }

    /// Lists the inventory before a choice by ID. Returns false if it is empty.
    fn show_inventory(&mut self) -> Result<bool> {
        let books = self.catalog.list_books()?;
        if books.is_empty() {
            self.report(&OperationStatus::notice("The inventory does not contain any books"))?;
            return Ok(false);
        }
        self.render(&format!("## Books in inventory\n\n{books}"))?;
        Ok(true)
    }

    fn prompt_id(&mut self, text: &str) -> Result<Option<u64>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        let id = trimmed.parse().map_err(|_| CatalogError::NotANumber {
            input: trimmed.to_string(),
        })?;
        Ok(Some(id))
    }

    /// Reads one line. `None` means the input has ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Shows recoverable catalog errors and passes everything else on.
    fn settle(&mut self, outcome: Result<()>) -> Result<()> {
        let Err(err) = outcome else {
            return Ok(());
        };

        let status = match err.downcast_ref::<CatalogError>() {
            Some(catalog_err) if catalog_err.is_fatal() => {
                warn!("Leaving the shell: {catalog_err}");
                None
            }
            Some(catalog_err) => Some(OperationStatus::from(catalog_err)),
            None => None,
        };

        match status {
            Some(status) => self.report(&status),
            None => Err(err),
        }
    }

    fn report(&mut self, status: &OperationStatus) -> Result<()> {
        self.render(&format!("{status}\n"))
    }

    fn render(&mut self, markdown: &str) -> Result<()> {
        self.renderer.render_to(&mut self.output, markdown)?;
        Ok(())
    }
}
