mod common;

use common::create_test_catalog;
use shelf_core::{
    params::{AddBook, DeleteBook, Id, UpdateBook},
    CatalogBuilder, CatalogError, Confirmation, SearchKind, SearchMode, LOW_STOCK_THRESHOLD,
};
use tempfile::TempDir;

fn add(title: &str, author: &str, quantity: &str) -> AddBook {
    AddBook {
        title: title.to_string(),
        author: author.to_string(),
        quantity: quantity.to_string(),
    }
}

#[test]
fn test_hobbit_scenario() {
    let (_temp_dir, mut catalog) = create_test_catalog();

    let hobbit = catalog
        .add_book(&add("the hobbit", "j r r tolkien", "5"))
        .expect("Failed to add book");
    assert_eq!(hobbit.title, "The Hobbit");
    assert_eq!(hobbit.author, "J R R Tolkien");
    assert_eq!(hobbit.quantity, 5);

    let duplicate = catalog.add_book(&add("The Hobbit", "anyone", "1"));
    match duplicate {
        Err(CatalogError::DuplicateBook { existing }) => assert_eq!(existing, hobbit),
        other => panic!("expected DuplicateBook, got {other:?}"),
    }
}

#[test]
fn test_add_book_gains_exactly_one_row() {
    let (_temp_dir, mut catalog) = create_test_catalog();
    let before = catalog.list_books().unwrap();

    let book = catalog.add_book(&add("emma", "jane austen", "3")).unwrap();

    let after = catalog.list_books().unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert!(before.iter().all(|b| b.id != book.id));
    assert_eq!(
        catalog.find_book(&Id { id: book.id }).unwrap(),
        Some(book)
    );
}

#[test]
fn test_duplicate_in_any_case_keeps_row_count() {
    let (_temp_dir, mut catalog) = create_test_catalog();

    for title in [
        "a tale of two cities",
        "A TALE OF TWO CITIES",
        "  A Tale of Two Cities  ",
    ] {
        assert!(matches!(
            catalog.add_book(&add(title, "Charles Dickens", "1")),
            Err(CatalogError::DuplicateBook { .. })
        ));
    }

    assert_eq!(catalog.list_books().unwrap().len(), 5);
}

#[test]
fn test_update_quantity_only_leaves_text_fields() {
    let (_temp_dir, mut catalog) = create_test_catalog();

    let result = catalog
        .update_book(&UpdateBook {
            id: 3004,
            title: None,
            author: Some("  ".to_string()),
            quantity: Some("2".to_string()),
        })
        .unwrap();

    assert_eq!(result.resource.title, "The Lord of the Rings");
    assert_eq!(result.resource.author, "J.R.R Tolkien");
    assert_eq!(result.resource.quantity, 2);
    assert_eq!(result.changes, vec!["Quantity: 37 → 2".to_string()]);
}

#[test]
fn test_update_to_zero_marks_out_of_stock() {
    let (_temp_dir, mut catalog) = create_test_catalog();

    catalog
        .update_book(&UpdateBook {
            id: 3005,
            quantity: Some("0".to_string()),
            ..Default::default()
        })
        .unwrap();

    let out = catalog.search_books(&SearchMode::OutOfStock).unwrap();
    let ids: Vec<u64> = out.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![3002, 3005]);
}

#[test]
fn test_update_invalid_quantity_keeps_stored_value() {
    let (_temp_dir, mut catalog) = create_test_catalog();

    let negative = catalog.update_book(&UpdateBook {
        id: 3001,
        quantity: Some("-5".to_string()),
        ..Default::default()
    });
    assert!(matches!(
        negative,
        Err(CatalogError::InvalidQuantity { value: -5, .. })
    ));

    let garbage = catalog.update_book(&UpdateBook {
        id: 3001,
        author: Some("someone else".to_string()),
        quantity: Some("abc".to_string()),
        ..Default::default()
    });
    assert!(matches!(garbage, Err(CatalogError::NotANumber { .. })));

    let book = catalog.find_book(&Id { id: 3001 }).unwrap().unwrap();
    assert_eq!(book.quantity, 30);
    assert_eq!(book.author, "Charles Dickens");
}

#[test]
fn test_delete_declined_then_confirmed() {
    let (_temp_dir, mut catalog) = create_test_catalog();

    let declined = catalog.delete_book(&DeleteBook {
        id: 3003,
        confirmation: Confirmation::No,
    });
    assert!(matches!(declined, Err(CatalogError::NotConfirmed { .. })));
    assert_eq!(catalog.list_books().unwrap().len(), 5);

    let deleted = catalog
        .delete_book(&DeleteBook {
            id: 3003,
            confirmation: Confirmation::Yes,
        })
        .unwrap();
    assert_eq!(deleted.title, "The Lion, the Witch and the Wardrobe");

    let remaining: Vec<u64> = catalog.list_books().unwrap().iter().map(|b| b.id).collect();
    assert_eq!(remaining, vec![3001, 3002, 3004, 3005]);

    assert!(matches!(
        catalog.delete_book(&DeleteBook {
            id: 3003,
            confirmation: Confirmation::Yes,
        }),
        Err(CatalogError::NotFound { id: 3003 })
    ));
}

#[test]
fn test_low_stock_is_quantity_below_threshold() {
    let (_temp_dir, mut catalog) = create_test_catalog();
    catalog.add_book(&add("four left", "a", "4")).unwrap();
    catalog.add_book(&add("five left", "a", "5")).unwrap();

    let low = catalog.search_books(&SearchMode::LowStock).unwrap();
    assert!(low.iter().all(|b| b.quantity < LOW_STOCK_THRESHOLD));

    let expected: Vec<u64> = catalog
        .list_books()
        .unwrap()
        .iter()
        .filter(|b| b.quantity < LOW_STOCK_THRESHOLD)
        .map(|b| b.id)
        .collect();
    let ids: Vec<u64> = low.iter().map(|b| b.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_out_of_stock_on_seed_data() {
    let (_temp_dir, catalog) = create_test_catalog();

    let out = catalog.search_books(&SearchMode::OutOfStock).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Harry Potter and the Philosopher's Stone");
}

#[test]
fn test_text_searches_ignore_case() {
    let (_temp_dir, catalog) = create_test_catalog();

    let mode = SearchMode::new(SearchKind::Title, Some("POTTER")).unwrap();
    let by_title = catalog.search_books(&mode).unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, 3002);

    let by_author = catalog
        .search_books(&SearchMode::ByAuthor("tolkien".to_string()))
        .unwrap();
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].id, 3004);

    let none = catalog
        .search_books(&SearchMode::ByTitle("necronomicon".to_string()))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_reopening_does_not_reseed() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("shelf.db");

    let mut catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    catalog.add_book(&add("the hobbit", "tolkien", "5")).unwrap();
    catalog.close().unwrap();

    let catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    assert_eq!(catalog.list_books().unwrap().len(), 6);
}

#[test]
fn test_deleted_seed_book_stays_deleted_after_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("shelf.db");

    let mut catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    catalog
        .delete_book(&DeleteBook {
            id: 3004,
            confirmation: Confirmation::Yes,
        })
        .unwrap();
    catalog.close().unwrap();

    let mut catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    assert_eq!(catalog.find_book(&Id { id: 3004 }).unwrap(), None);
    assert_eq!(catalog.list_books().unwrap().len(), 4);

    let added = catalog.add_book(&add("the hobbit", "tolkien", "5")).unwrap();
    assert_eq!(added.id, 3006);
}

#[test]
fn test_text_searches_fold_non_ascii_case() {
    let (_temp_dir, mut catalog) = create_test_catalog();
    let emile = catalog
        .add_book(&add("émile et les détectives", "érich kästner", "2"))
        .unwrap();
    assert_eq!(emile.title, "Émile Et Les Détectives");
    assert_eq!(emile.author, "Érich Kästner");

    let by_title = catalog
        .search_books(&SearchMode::ByTitle("émile".to_string()))
        .unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, emile.id);

    let by_author = catalog
        .search_books(&SearchMode::ByAuthor("érich".to_string()))
        .unwrap();
    assert_eq!(by_author.len(), 1);

    assert!(matches!(
        catalog.add_book(&add("ÉMILE ET LES DÉTECTIVES", "anyone", "1")),
        Err(CatalogError::DuplicateBook { .. })
    ));
}

#[test]
fn test_build_without_seed_is_empty() {
    let catalog = CatalogBuilder::new()
        .in_memory()
        .with_seed(false)
        .build()
        .unwrap();

    assert!(catalog.list_books().unwrap().is_empty());
}
