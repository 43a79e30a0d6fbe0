//! Status messages for operation feedback.

use std::fmt;

use crate::error::CatalogError;

/// How an [`OperationStatus`] should be read by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Nothing went wrong, but nothing was changed either
    Notice,
    Error,
}

/// A one-line message reporting how an operation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    /// Create a new notice status.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Notice,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }
}

impl From<&CatalogError> for OperationStatus {
    /// Declined deletions and empty updates are notices; everything else is
    /// reported as an error.
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::NotConfirmed { .. } | CatalogError::NoChange => {
                Self::notice(err.to_string())
            }
            _ => Self::failure(err.to_string()),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            StatusKind::Notice => "Note:",
            StatusKind::Error => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
