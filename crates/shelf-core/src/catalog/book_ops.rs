//! Book operations for the Catalog.

use log::{debug, info};

use super::Catalog;
use crate::{
    db::BookStore,
    display::{Books, UpdateResult},
    error::{CatalogError, Result},
    models::{Book, BookChanges, SearchMode, LOW_STOCK_THRESHOLD},
    params::{AddBook, DeleteBook, Id, UpdateBook},
    validation::{validate_quantity, validate_title_or_author},
};

/// Returns the trimmed value if one was supplied and it is not blank.
fn supplied(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl<S: BookStore> Catalog<S> {
    /// Adds a new book after checking that its title is not taken.
    ///
    /// The title is checked for duplicates before the author and quantity are
    /// validated, so a duplicate is reported as early as possible.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title or author is blank
    /// - `DuplicateBook` if a book with the same title exists, ignoring case
    /// - `NotANumber` / `InvalidQuantity` unless the quantity is larger than
    ///   zero
    pub fn add_book(&mut self, params: &AddBook) -> Result<Book> {
        let title = validate_title_or_author("title", &params.title)?;

        if let Some(existing) = self.store.find_by_title(&title)? {
            debug!("Rejected duplicate title '{title}' (ID: {})", existing.id);
            return Err(CatalogError::DuplicateBook { existing });
        }

        let author = validate_title_or_author("author", &params.author)?;
        let quantity = validate_quantity(&params.quantity, false)?;

        let book = self.store.insert(&title, &author, quantity)?;
        info!("Added book {} '{}'", book.id, book.title);
        Ok(book)
    }

    /// Updates the supplied fields of a book in a single write.
    ///
    /// Blank fields are left unchanged. Every supplied field is validated
    /// before anything is written, so a rejected quantity leaves the title and
    /// author untouched as well.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no book has the given ID
    /// - `NotANumber` / `InvalidQuantity` if the quantity is supplied but is
    ///   not zero or larger
    /// - `NoChange` if no field was supplied
    /// - `DuplicateBook` if the new title belongs to another book
    pub fn update_book(&mut self, params: &UpdateBook) -> Result<UpdateResult<Book>> {
        let id = params.id;
        let current = self
            .store
            .find_by_id(id)?
            .ok_or(CatalogError::NotFound { id })?;

        let changes = BookChanges {
            title: supplied(params.title.as_ref())
                .map(|t| validate_title_or_author("title", t))
                .transpose()?,
            author: supplied(params.author.as_ref())
                .map(|a| validate_title_or_author("author", a))
                .transpose()?,
            quantity: supplied(params.quantity.as_ref())
                .map(|q| validate_quantity(q, true))
                .transpose()?,
        };

        if changes.is_empty() {
            return Err(CatalogError::NoChange);
        }

        if let Some(title) = &changes.title {
            if let Some(existing) = self.store.find_by_title(title)? {
                if existing.id != id {
                    return Err(CatalogError::DuplicateBook { existing });
                }
            }
        }

        let described = changes.describe(&current);
        if !self.store.update_fields(id, &changes)? {
            return Err(CatalogError::NotFound { id });
        }

        let book = self
            .store
            .find_by_id(id)?
            .ok_or(CatalogError::NotFound { id })?;
        info!("Updated book {id} ({} changes)", described.len());
        Ok(UpdateResult::with_changes(book, described))
    }

    /// Permanently deletes a book once the deletion is confirmed.
    ///
    /// Returns the book as it was before deletion.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no book has the given ID
    /// - `NotConfirmed` if `confirmation` is not [`crate::Confirmation::Yes`];
    ///   the book is kept
    pub fn delete_book(&mut self, params: &DeleteBook) -> Result<Book> {
        let id = params.id;
        let book = self
            .store
            .find_by_id(id)?
            .ok_or(CatalogError::NotFound { id })?;

        if !params.confirmation.is_confirmed() {
            return Err(CatalogError::NotConfirmed { book });
        }

        if !self.store.delete_by_id(id)? {
            return Err(CatalogError::NotFound { id });
        }

        info!("Deleted book {id} '{}'", book.title);
        Ok(book)
    }

    /// Runs one search. An empty result is not an error.
    pub fn search_books(&self, mode: &SearchMode) -> Result<Books> {
        let books = match mode {
            SearchMode::ByTitle(text) => self.store.find_by_title_substring(text)?,
            SearchMode::ByAuthor(text) => self.store.find_by_author_substring(text)?,
            SearchMode::LowStock => self.store.find_where_quantity_below(LOW_STOCK_THRESHOLD)?,
            SearchMode::OutOfStock => self.store.find_where_quantity_equals(0)?,
        };
        debug!("Search {:?} matched {} books", mode, books.len());
        Ok(Books(books))
    }

    /// Lists the whole inventory.
    pub fn list_books(&self) -> Result<Books> {
        Ok(Books(self.store.list_all()?))
    }

    /// Looks up a single book.
    pub fn find_book(&self, params: &Id) -> Result<Option<Book>> {
        self.store.find_by_id(params.id)
    }
}
