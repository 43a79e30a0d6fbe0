//! Database operations and SQLite management for books.
//!
//! This module provides the record store adapter for the catalog: the
//! [`BookStore`] trait describing the minimal access interface, and the
//! [`Database`] type implementing it on top of a SQLite connection. Store
//! methods carry no business rules; every call commits before returning.

use std::path::Path;

use rusqlite::{functions::FunctionFlags, Connection};

use crate::{
    error::{CatalogError, DatabaseResultExt, Result},
    models::{Book, BookChanges},
};

pub mod book_queries;
pub mod migrations;
pub mod seed;

pub use seed::{seed_books, SEED_BOOKS};

/// Minimal record access used by the catalog.
///
/// Lookups by text ignore case. Collections come back in id order.
pub trait BookStore {
    /// Finds the book whose title equals `title`, ignoring case.
    fn find_by_title(&self, title: &str) -> Result<Option<Book>>;

    /// Finds books whose title contains `text`, ignoring case.
    fn find_by_title_substring(&self, text: &str) -> Result<Vec<Book>>;

    fn find_by_id(&self, id: u64) -> Result<Option<Book>>;

    /// Finds books whose author contains `text`, ignoring case.
    fn find_by_author_substring(&self, text: &str) -> Result<Vec<Book>>;

    fn find_where_quantity_below(&self, n: u32) -> Result<Vec<Book>>;

    fn find_where_quantity_equals(&self, n: u32) -> Result<Vec<Book>>;

    fn list_all(&self) -> Result<Vec<Book>>;

    /// Inserts a book and returns it with its store-assigned id.
    fn insert(&mut self, title: &str, author: &str, quantity: u32) -> Result<Book>;

    /// Inserts a book under a caller-chosen id.
    fn insert_with_id(&mut self, id: u64, title: &str, author: &str, quantity: u32)
        -> Result<Book>;

    /// Writes the supplied fields; returns whether a row with `id` existed.
    fn update_fields(&mut self, id: u64, changes: &BookChanges) -> Result<bool>;

    /// Removes the row; returns whether a row with `id` existed.
    fn delete_by_id(&mut self, id: u64) -> Result<bool>;

    /// Whether the initial inventory was ever inserted into this store.
    fn is_seeded(&self) -> Result<bool>;

    /// Records that the initial inventory was inserted.
    fn mark_seeded(&mut self) -> Result<()>;
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// Opens a private in-memory database with the schema applied.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        // SQLite's own LOWER and LIKE only fold ASCII letters.
        connection
            .create_scalar_function(
                "unicode_lower",
                1,
                FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
                |ctx| Ok(ctx.get::<String>(0)?.to_lowercase()),
            )
            .db_context("Failed to register SQL functions")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| CatalogError::storage("Failed to close database").with_source(e))
    }
}
