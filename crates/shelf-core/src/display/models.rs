//! Display implementations for domain models.

use std::fmt;

use crate::models::{Book, Confirmation, SearchKind, SearchMode, LOW_STOCK_THRESHOLD};

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Author: {}", self.author)?;
        if self.is_out_of_stock() {
            writeln!(f, "- Quantity in stock: 0 (out of stock)")?;
        } else {
            writeln!(f, "- Quantity in stock: {}", self.quantity)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::ByTitle(text) => write!(f, "titles containing '{text}'"),
            SearchMode::ByAuthor(text) => write!(f, "authors containing '{text}'"),
            SearchMode::LowStock => {
                write!(f, "books with fewer than {LOW_STOCK_THRESHOLD} in stock")
            }
            SearchMode::OutOfStock => write!(f, "books out of stock"),
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::Yes => write!(f, "yes"),
            Confirmation::No => write!(f, "no"),
        }
    }
}
