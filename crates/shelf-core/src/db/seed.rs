//! Initial inventory inserted into a fresh store.

use log::{debug, info};

use super::BookStore;
use crate::error::Result;

/// `(id, title, author, quantity)` for each seed book.
pub const SEED_BOOKS: [(u64, &str, &str, u32); 5] = [
    (3001, "A Tale of Two Cities", "Charles Dickens", 30),
    (
        3002,
        "Harry Potter and the Philosopher's Stone",
        "J.K. Rowling",
        0,
    ),
    (3003, "The Lion, the Witch and the Wardrobe", "C.S. Lewis", 25),
    (3004, "The Lord of the Rings", "J.R.R Tolkien", 37),
    (3005, "Alice in Wonderland", "Lewis Carroll", 12),
];

/// Inserts the seed books into a store that was never seeded.
///
/// Once a store has been seeded it is never seeded again, so books deleted
/// later stay deleted. On the first run a seed row is skipped when its title
/// (ignoring case) or its id is already taken. Returns the number of books
/// inserted.
pub fn seed_books<S: BookStore>(store: &mut S) -> Result<usize> {
    if store.is_seeded()? {
        debug!("Store already seeded, skipping");
        return Ok(0);
    }

    let mut inserted = 0;

    for (id, title, author, quantity) in SEED_BOOKS {
        if let Some(existing) = store.find_by_title(title)? {
            debug!(
                "Seed book '{title}' already exists with ID {}, skipping",
                existing.id
            );
            continue;
        }
        if store.find_by_id(id)?.is_some() {
            debug!("Seed ID {id} is taken, skipping '{title}'");
            continue;
        }
        store.insert_with_id(id, title, author, quantity)?;
        inserted += 1;
    }

    store.mark_seeded()?;
    info!("Seeded {inserted} books");

    Ok(inserted)
}
