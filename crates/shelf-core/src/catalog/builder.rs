//! Builder for creating and configuring Catalog instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Catalog;
use crate::{
    db::Database,
    error::{CatalogError, Result},
};

/// Builder for creating and configuring Catalog instances.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
    seed: bool,
}

impl CatalogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            in_memory: false,
            seed: true,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/shelf/ebookstore.db` or
    /// `~/.local/share/shelf/ebookstore.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses a private in-memory database instead of a file.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Controls whether seed books are inserted on build. Defaults to true.
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configured catalog instance.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `CatalogError::StorageUnavailable` if database initialization
    /// or seeding fails
    pub fn build(self) -> Result<Catalog<Database>> {
        let db = if self.in_memory {
            Database::in_memory()?
        } else {
            let db_path = match self.database_path {
                Some(path) => path,
                None => Self::default_database_path()?,
            };

            if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| CatalogError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            debug!("Opening database at {}", db_path.display());
            Database::new(&db_path)?
        };

        let mut catalog = Catalog::new(db);
        if self.seed {
            catalog.seed()?;
        }
        Ok(catalog)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("shelf")
            .place_data_file("ebookstore.db")
            .map_err(|e| CatalogError::XdgDirectory(e.to_string()))
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
