//! Book model definition.

use serde::{Deserialize, Serialize};

/// A book record in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Identifier assigned by the store, never reused
    pub id: u64,

    /// Title-cased title, unique ignoring case
    pub title: String,

    /// Title-cased author name
    pub author: String,

    /// Units currently in stock
    pub quantity: u32,
}

impl Book {
    /// Whether the book has no units left.
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

/// A validated set of field changes applied to a single book.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub quantity: Option<u32>,
}

impl BookChanges {
    /// Returns true if no field would be written.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.quantity.is_none()
    }

    /// Describes each field whose new value differs from `current`.
    pub fn describe(&self, current: &Book) -> Vec<String> {
        let mut changes = Vec::new();

        if let Some(title) = &self.title {
            if *title != current.title {
                changes.push(format!("Title: '{}' → '{title}'", current.title));
            }
        }
        if let Some(author) = &self.author {
            if *author != current.author {
                changes.push(format!("Author: '{}' → '{author}'", current.author));
            }
        }
        if let Some(quantity) = self.quantity {
            if quantity != current.quantity {
                changes.push(format!("Quantity: {} → {quantity}", current.quantity));
            }
        }

        changes
    }
}
