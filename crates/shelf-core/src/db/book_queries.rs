//! Book CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row, ToSql};

use super::{BookStore, Database};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Book, BookChanges},
};

const BOOK_COLUMNS: &str = "id, title, author, qty";
const SELECT_BOOK_BY_ID_SQL: &str = "SELECT id, title, author, qty FROM book WHERE id = ?1";
const SELECT_BOOK_BY_TITLE_SQL: &str =
    "SELECT id, title, author, qty FROM book WHERE unicode_lower(title) = ?1 ORDER BY id LIMIT 1";
const INSERT_BOOK_SQL: &str = "INSERT INTO book (title, author, qty) VALUES (?1, ?2, ?3)";
const INSERT_BOOK_WITH_ID_SQL: &str =
    "INSERT INTO book (id, title, author, qty) VALUES (?1, ?2, ?3, ?4)";
const CHECK_BOOK_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM book WHERE id = ?1)";
const DELETE_BOOK_SQL: &str = "DELETE FROM book WHERE id = ?1";
const CHECK_SEEDED_SQL: &str = "SELECT EXISTS(SELECT 1 FROM catalog_meta WHERE key = 'seeded')";
const MARK_SEEDED_SQL: &str =
    "INSERT OR IGNORE INTO catalog_meta (key, value) VALUES ('seeded', '1')";

impl Database {
    /// Helper function to construct a Book from a database row
    fn build_book_from_row(row: &Row) -> rusqlite::Result<Book> {
        Ok(Book {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            author: row.get(2)?,
            quantity: row.get(3)?,
        })
    }

    /// Runs a `SELECT` over the book columns with the given condition.
    fn query_books(&self, condition: &str, params: &[&dyn ToSql]) -> Result<Vec<Book>> {
        let query = format!("SELECT {BOOK_COLUMNS} FROM book WHERE {condition} ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let books = stmt
            .query_map(params, Self::build_book_from_row)
            .db_context("Failed to query books")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch books");
        books
    }

    fn book_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_BOOK_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check book existence")
    }
}

/// Builds a lowercase `LIKE` pattern matching `text` anywhere, with wildcards
/// in `text` matched literally. Used together with `ESCAPE '\'` against
/// `unicode_lower(column)`.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl BookStore for Database {
    fn find_by_title(&self, title: &str) -> Result<Option<Book>> {
        self.connection
            .query_row(
                SELECT_BOOK_BY_TITLE_SQL,
                params![title.to_lowercase()],
                Self::build_book_from_row,
            )
            .optional()
            .db_context("Failed to query book by title")
    }

    fn find_by_title_substring(&self, text: &str) -> Result<Vec<Book>> {
        let pattern = contains_pattern(text);
        self.query_books(r"unicode_lower(title) LIKE ?1 ESCAPE '\'", &[&pattern as &dyn ToSql])
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Book>> {
        self.connection
            .query_row(SELECT_BOOK_BY_ID_SQL, params![id as i64], Self::build_book_from_row)
            .optional()
            .db_context("Failed to query book")
    }

    fn find_by_author_substring(&self, text: &str) -> Result<Vec<Book>> {
        let pattern = contains_pattern(text);
        self.query_books(r"unicode_lower(author) LIKE ?1 ESCAPE '\'", &[&pattern as &dyn ToSql])
    }

    fn find_where_quantity_below(&self, n: u32) -> Result<Vec<Book>> {
        self.query_books("qty < ?1", &[&n as &dyn ToSql])
    }

    fn find_where_quantity_equals(&self, n: u32) -> Result<Vec<Book>> {
        self.query_books("qty = ?1", &[&n as &dyn ToSql])
    }

    fn list_all(&self) -> Result<Vec<Book>> {
        self.query_books("1 = 1", &[])
    }

    fn insert(&mut self, title: &str, author: &str, quantity: u32) -> Result<Book> {
        self.connection
            .execute(INSERT_BOOK_SQL, params![title, author, quantity])
            .db_context("Failed to insert book")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Inserted book {id} '{title}'");

        Ok(Book {
            id,
            title: title.into(),
            author: author.into(),
            quantity,
        })
    }

    fn insert_with_id(
        &mut self,
        id: u64,
        title: &str,
        author: &str,
        quantity: u32,
    ) -> Result<Book> {
        self.connection
            .execute(
                INSERT_BOOK_WITH_ID_SQL,
                params![id as i64, title, author, quantity],
            )
            .db_context("Failed to insert book")?;
        debug!("Inserted book {id} '{title}'");

        Ok(Book {
            id,
            title: title.into(),
            author: author.into(),
            quantity,
        })
    }

    fn update_fields(&mut self, id: u64, changes: &BookChanges) -> Result<bool> {
        let mut assignments = Vec::new();
        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(ref title) = changes.title {
            assignments.push("title = ?");
            params_vec.push(Box::new(title.clone()));
        }
        if let Some(ref author) = changes.author {
            assignments.push("author = ?");
            params_vec.push(Box::new(author.clone()));
        }
        if let Some(quantity) = changes.quantity {
            assignments.push("qty = ?");
            params_vec.push(Box::new(quantity));
        }

        if assignments.is_empty() {
            return self.book_exists(id);
        }

        let query = format!("UPDATE book SET {} WHERE id = ?", assignments.join(", "));
        params_vec.push(Box::new(id as i64));
        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows_affected = self
            .connection
            .execute(&query, &params_refs[..])
            .db_context("Failed to update book")?;
        debug!("Updated book {id} ({rows_affected} row)");

        Ok(rows_affected > 0)
    }

    fn is_seeded(&self) -> Result<bool> {
        self.connection
            .query_row(CHECK_SEEDED_SQL, [], |row| row.get(0))
            .db_context("Failed to check seed marker")
    }

    fn mark_seeded(&mut self) -> Result<()> {
        self.connection
            .execute(MARK_SEEDED_SQL, [])
            .db_context("Failed to record seed marker")?;
        debug!("Recorded seed marker");
        Ok(())
    }

    fn delete_by_id(&mut self, id: u64) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_BOOK_SQL, params![id as i64])
            .db_context("Failed to delete book")?;
        debug!("Deleted book {id} ({rows_affected} row)");

        Ok(rows_affected > 0)
    }
}
