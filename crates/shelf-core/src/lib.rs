//! Core library for the Shelf book inventory manager.
//!
//! This crate holds everything with decision logic: validation of user input,
//! the record store adapter over SQLite, and the catalog operations (add,
//! update, delete, search) that enforce the inventory rules. Interfaces such
//! as the `shelf` CLI parse input into the types in [`params`] and
//! [`models`], call a [`Catalog`] method, and render the returned value or
//! [`CatalogError`].
//!
//! # Quick Start
//!
//! ```rust
//! use shelf_core::{
//!     params::{AddBook, DeleteBook, UpdateBook},
//!     CatalogBuilder, CatalogError, Confirmation,
//! };
//!
//! # fn example() -> Result<(), CatalogError> {
//! let mut catalog = CatalogBuilder::new().in_memory().with_seed(false).build()?;
//!
//! let book = catalog.add_book(&AddBook {
//!     title: "the hobbit".to_string(),
//!     author: "j r r tolkien".to_string(),
//!     quantity: "5".to_string(),
//! })?;
//!
//! let updated = catalog.update_book(&UpdateBook {
//!     id: book.id,
//!     quantity: Some("0".to_string()),
//!     ..Default::default()
//! })?;
//! assert_eq!(updated.resource.quantity, 0);
//!
//! let declined = catalog.delete_book(&DeleteBook {
//!     id: book.id,
//!     confirmation: Confirmation::No,
//! });
//! assert!(matches!(declined, Err(CatalogError::NotConfirmed { .. })));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod validation;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogBuilder};
pub use db::{BookStore, Database};
pub use display::{Books, CreateResult, DeleteResult, OperationStatus, UpdateResult};
pub use error::{CatalogError, Result};
pub use models::{Book, BookChanges, Confirmation, SearchKind, SearchMode, LOW_STOCK_THRESHOLD};
pub use params::{AddBook, DeleteBook, Id, UpdateBook};
