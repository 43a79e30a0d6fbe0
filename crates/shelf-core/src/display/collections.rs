//! Collection wrapper types for displaying groups of books.

use std::{fmt, ops::Index};

use crate::{error::Result, models::Book};

/// Newtype wrapper for displaying a list of books.
///
/// Handles empty collections gracefully, so an empty search result renders
/// as a message rather than nothing.
///
/// # Examples
///
/// ```rust
/// use shelf_core::display::Books;
///
/// let books = Books(vec![]);
/// assert_eq!(books.to_string(), "No books found.\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Books(pub Vec<Book>);

impl Books {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of books in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the book at the given index.
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.0.get(index)
    }

    /// Get an iterator over the books.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.0.iter()
    }

    /// Serializes the books as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

impl Index<usize> for Books {
    type Output = Book;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Books {
    type Item = Book;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Books {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Books {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No books found.")
        } else {
            for book in &self.0 {
                write!(f, "{book}")?;
            }
            Ok(())
        }
    }
}
