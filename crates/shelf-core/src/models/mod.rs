//! Data models for the book catalog.
//!
//! [`Book`] is the only persisted entity. The remaining types are the closed
//! enumerations that interfaces parse user input into before calling the
//! catalog: [`SearchKind`]/[`SearchMode`] for search and [`Confirmation`] for
//! deletion. Display implementations live in [`crate::display::models`].

pub mod book;
pub mod confirmation;
pub mod search;

#[cfg(test)]
mod tests;

pub use book::{Book, BookChanges};
pub use confirmation::Confirmation;
pub use search::{SearchKind, SearchMode, LOW_STOCK_THRESHOLD};
