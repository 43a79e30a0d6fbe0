//! Search mode enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Books with fewer units than this are reported as low in stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// The kind of search requested, before any query text is attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Substring match against the title
    Title,
    /// Substring match against the author
    Author,
    /// Quantity below [`LOW_STOCK_THRESHOLD`]
    LowStock,
    /// Quantity of exactly zero
    OutOfStock,
}

impl FromStr for SearchKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bt" | "title" => Ok(SearchKind::Title),
            "ba" | "author" => Ok(SearchKind::Author),
            "ls" | "low" => Ok(SearchKind::LowStock),
            "ofs" | "out" => Ok(SearchKind::OutOfStock),
            _ => Err(CatalogError::InvalidMode {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl SearchKind {
    /// Whether this kind needs query text.
    pub fn takes_query(self) -> bool {
        matches!(self, SearchKind::Title | SearchKind::Author)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Title => "title",
            SearchKind::Author => "author",
            SearchKind::LowStock => "low",
            SearchKind::OutOfStock => "out",
        }
    }
}

/// A complete, mutually exclusive search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    ByTitle(String),
    ByAuthor(String),
    LowStock,
    OutOfStock,
}

impl SearchMode {
    /// Combines a search kind with its query text.
    ///
    /// Title and author searches require text that is not blank; the stock
    /// searches ignore `query`.
    pub fn new(kind: SearchKind, query: Option<&str>) -> Result<Self> {
        let text = || {
            query
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(String::from)
                .ok_or_else(|| CatalogError::empty_field("query"))
        };

        match kind {
            SearchKind::Title => Ok(SearchMode::ByTitle(text()?)),
            SearchKind::Author => Ok(SearchMode::ByAuthor(text()?)),
            SearchKind::LowStock => Ok(SearchMode::LowStock),
            SearchKind::OutOfStock => Ok(SearchMode::OutOfStock),
        }
    }

    pub fn kind(&self) -> SearchKind {
        match self {
            SearchMode::ByTitle(_) => SearchKind::Title,
            SearchMode::ByAuthor(_) => SearchKind::Author,
            SearchMode::LowStock => SearchKind::LowStock,
            SearchMode::OutOfStock => SearchKind::OutOfStock,
        }
    }
}
