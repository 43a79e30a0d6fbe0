//! Parameter structures for catalog operations
//!
//! These structures carry raw user input from an interface (the CLI
//! subcommands or the interactive shell) into the [`crate::Catalog`]. Text
//! fields are deliberately unvalidated strings: validation and normalization
//! are the catalog's job, so every interface gets identical rules.
//!
//! Interface layers create their own argument types (with clap derives, for
//! example) and convert into these via `From`.

use serde::{Deserialize, Serialize};

use crate::models::Confirmation;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the book to operate on
    pub id: u64,
}

/// Parameters for adding a new book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddBook {
    /// Title as typed; normalized to title case
    pub title: String,
    /// Author as typed; normalized to title case
    pub author: String,
    /// Quantity as typed; must parse to a number larger than zero
    pub quantity: String,
}

/// Parameters for updating an existing book.
///
/// A field that is `None` or blank is left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBook {
    /// ID of the book to update
    pub id: u64,
    /// New title
    pub title: Option<String>,
    /// New author
    pub author: Option<String>,
    /// New quantity; zero marks the book as out of stock
    pub quantity: Option<String>,
}

/// Parameters for deleting a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBook {
    /// ID of the book to delete
    pub id: u64,
    /// Only [`Confirmation::Yes`] removes the book
    pub confirmation: Confirmation,
}
