//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results so
//! the same book can be rendered differently depending on context. All output
//! is markdown, which the CLI renders through termimad.
//!
//! - [`collections`]: Collection wrapper types (Books)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use shelf_core::{display::CreateResult, models::Book};
//!
//! let book = Book {
//!     id: 3006,
//!     title: "The Hobbit".to_string(),
//!     author: "J R R Tolkien".to_string(),
//!     quantity: 5,
//! };
//!
//! let output = CreateResult::new(book).to_string();
//! assert!(output.contains("Added book with ID: 3006"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::Books;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, StatusKind};
