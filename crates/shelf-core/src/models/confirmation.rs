//! Delete confirmation answers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Explicit answer to "are you sure you want to delete this book?".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    Yes,
    No,
}

impl FromStr for Confirmation {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(Confirmation::Yes),
            "n" | "no" => Ok(Confirmation::No),
            _ => Err(CatalogError::InvalidConfirmation {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Yes
        } else {
            Confirmation::No
        }
    }
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        self == Confirmation::Yes
    }
}
