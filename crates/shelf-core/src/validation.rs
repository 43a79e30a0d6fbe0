//! Input validation and normalization for book fields.
//!
//! These are pure functions over raw user input. Catalog operations call them
//! before touching the store so that a rejected value never reaches SQLite.

use crate::error::{CatalogError, Result};

/// Validates a title or author string and returns it title-cased.
///
/// `field` names the input in the resulting [`CatalogError::EmptyField`].
///
/// # Examples
///
/// ```rust
/// use shelf_core::validation::validate_title_or_author;
///
/// assert_eq!(
///     validate_title_or_author("title", "  the hobbit ").unwrap(),
///     "The Hobbit"
/// );
/// assert!(validate_title_or_author("author", "   ").is_err());
/// ```
pub fn validate_title_or_author(field: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::empty_field(field));
    }
    Ok(title_case(trimmed))
}

/// Parses a quantity, rejecting negatives and, unless `allow_zero`, zero.
///
/// New books need at least one unit in stock; updates may mark a book as out
/// of stock with `0`.
pub fn validate_quantity(raw: &str, allow_zero: bool) -> Result<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| CatalogError::NotANumber {
        input: trimmed.to_string(),
    })?;

    let minimum = if allow_zero { 0 } else { 1 };
    if value < minimum {
        return Err(CatalogError::InvalidQuantity { value, allow_zero });
    }

    u32::try_from(value).map_err(|_| CatalogError::InvalidQuantity { value, allow_zero })
}

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// A word starts after any character that is not alphanumeric, so initials
/// keep their capitals (`j.k.` → `J.K.`). An apostrophe directly after a
/// letter or digit stays inside the word, so possessives do not gain one
/// (`philosopher's` → `Philosopher's`) while a leading one does not hide the
/// first capital (`'salem's lot` → `'Salem's Lot`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    let mut after_alphanumeric = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = !(c.is_alphanumeric() || (c == '\'' && after_alphanumeric));
        }
        after_alphanumeric = c.is_alphanumeric();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("the hobbit"), "The Hobbit");
        assert_eq!(title_case("THE LORD OF THE RINGS"), "The Lord Of The Rings");
        assert_eq!(title_case("j r r tolkien"), "J R R Tolkien");
    }

    #[test]
    fn test_title_case_punctuation() {
        assert_eq!(title_case("j.k. rowling"), "J.K. Rowling");
        assert_eq!(
            title_case("harry potter and the philosopher's stone"),
            "Harry Potter And The Philosopher's Stone"
        );
        assert_eq!(title_case("the lion, the witch"), "The Lion, The Witch");
        assert_eq!(title_case("catch-22"), "Catch-22");
        assert_eq!(title_case("'salem's lot"), "'Salem's Lot");
        assert_eq!(title_case("rock 'n' roll"), "Rock 'N' Roll");
        assert_eq!(title_case("1984 revisited"), "1984 Revisited");
    }

    #[test]
    fn test_validate_title_or_author_trims() {
        assert_eq!(
            validate_title_or_author("title", "\t alice in wonderland \n").unwrap(),
            "Alice In Wonderland"
        );
    }

    #[test]
    fn test_validate_title_or_author_rejects_blank() {
        match validate_title_or_author("author", "  ") {
            Err(CatalogError::EmptyField { field }) => assert_eq!(field, "author"),
            other => panic!("expected EmptyField, got {other:?}"),
        }
        assert!(validate_title_or_author("title", "").is_err());
    }

    #[test]
    fn test_validate_quantity_positive() {
        assert_eq!(validate_quantity("5", false).unwrap(), 5);
        assert_eq!(validate_quantity(" 12 ", true).unwrap(), 12);
    }

    #[test]
    fn test_validate_quantity_zero_depends_on_context() {
        assert!(matches!(
            validate_quantity("0", false),
            Err(CatalogError::InvalidQuantity {
                value: 0,
                allow_zero: false
            })
        ));
        assert_eq!(validate_quantity("0", true).unwrap(), 0);
    }

    #[test]
    fn test_validate_quantity_negative() {
        assert!(matches!(
            validate_quantity("-5", true),
            Err(CatalogError::InvalidQuantity { value: -5, .. })
        ));
    }

    #[test]
    fn test_validate_quantity_not_a_number() {
        for raw in ["abc", "", "3.5", "ten"] {
            assert!(
                matches!(
                    validate_quantity(raw, true),
                    Err(CatalogError::NotANumber { .. })
                ),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn test_validate_quantity_out_of_range() {
        assert!(matches!(
            validate_quantity("5000000000", true),
            Err(CatalogError::InvalidQuantity { .. })
        ));
    }
}
