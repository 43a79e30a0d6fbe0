//! High-level catalog API for managing the book inventory.
//!
//! [`Catalog`] is the single entry point interfaces use. It owns the store
//! handle for the lifetime of a run and sequences validation, duplicate and
//! existence checks, and store calls for each use case:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / Shell    │    │     Catalog     │    │    BookStore    │
//! │ (raw strings,   │───▶│ (validation,    │───▶│   (Database)    │
//! │  parsed enums)  │    │  decisions)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: Factory for creating a [`Catalog`] over a SQLite file
//! - [`book_ops`]: Add, update, delete, search and list operations
//!
//! Operations run one at a time to completion. A check followed by a write
//! (duplicate title, then insert) is not atomic as a unit; the store is
//! assumed to be owned by this process alone.
//!
//! # Example
//!
//! ```rust
//! use shelf_core::{params::AddBook, CatalogBuilder, SearchMode};
//!
//! # fn example() -> Result<(), shelf_core::CatalogError> {
//! let mut catalog = CatalogBuilder::new().in_memory().build()?;
//!
//! let book = catalog.add_book(&AddBook {
//!     title: "the hobbit".to_string(),
//!     author: "j r r tolkien".to_string(),
//!     quantity: "5".to_string(),
//! })?;
//! assert_eq!(book.title, "The Hobbit");
//!
//! let out = catalog.search_books(&SearchMode::OutOfStock)?;
//! assert_eq!(out.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod book_ops;
pub mod builder;


pub use builder::CatalogBuilder;

use crate::{
    db::{seed_books, BookStore, Database},
    error::Result,
};

/// Main catalog interface over a [`BookStore`].
pub struct Catalog<S = Database> {
    store: S,
}

impl<S: BookStore> Catalog<S> {
    /// Wraps an already opened store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Inserts any missing seed books; see [`seed_books`].
    pub fn seed(&mut self) -> Result<usize> {
        seed_books(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl Catalog<Database> {
    /// Closes the underlying database connection.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}
