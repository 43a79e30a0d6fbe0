//! Error types for the catalog library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Book;

/// Every outcome of a catalog operation that is not a success.
///
/// All variants except the storage, filesystem and XDG ones are recoverable:
/// the interface reports them and returns to its prompt. See
/// [`CatalogError::is_fatal`].
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Required text input had no content after trimming
    #[error("The {field} must not be empty")]
    EmptyField { field: String },
    /// Quantity input did not parse as an integer
    #[error("'{input}' is not a valid number")]
    NotANumber { input: String },
    /// Quantity parsed but violated the rule for its context
    #[error("{}", invalid_quantity_message(.value, .allow_zero))]
    InvalidQuantity { value: i64, allow_zero: bool },
    /// A book with the same title already exists
    #[error("A book titled '{}' already exists (ID: {})", .existing.title, .existing.id)]
    DuplicateBook { existing: Book },
    /// No book has the given ID
    #[error("Book with ID {id} not found")]
    NotFound { id: u64 },
    /// An update was requested without any field to change
    #[error("No changes were made")]
    NoChange,
    /// Deletion was declined
    #[error("Book '{}' (ID: {}) was not deleted", .book.title, .book.id)]
    NotConfirmed { book: Book },
    /// Confirmation input was neither affirmative nor negative
    #[error("'{input}' is not a valid choice, expected Y or N")]
    InvalidConfirmation { input: String },
    /// Search mode token was not recognized
    #[error("'{input}' is not a search option, expected BT, BA, LS or OFS")]
    InvalidMode { input: String },
    /// The backing store failed; the run cannot continue
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

fn invalid_quantity_message(value: &i64, allow_zero: &bool) -> String {
    if *allow_zero {
        format!("{value} is not a valid quantity, it must be zero or larger")
    } else {
        format!("{value} is not a valid quantity, it must be larger than zero")
    }
}

/// Builder for creating storage errors with context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CatalogError {
        CatalogError::StorageUnavailable {
            message: self.message,
            source,
        }
    }
}

impl CatalogError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates an [`CatalogError::EmptyField`] for the named field.
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    /// Whether the error must end the run instead of returning to a prompt.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable { .. } | Self::FileSystem { .. } | Self::XdgDirectory(_)
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CatalogError::storage(message).with_source(e))
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
