use shelf_core::{Catalog, CatalogBuilder};
use tempfile::TempDir;

/// Helper function to create a seeded catalog backed by a temporary file
pub fn create_test_catalog() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create catalog");
    (temp_dir, catalog)
}
