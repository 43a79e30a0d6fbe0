#[cfg(test)]
mod model_tests {
    use crate::{
        error::CatalogError,
        models::{Book, BookChanges, Confirmation, SearchKind, SearchMode},
    };

    fn create_test_book() -> Book {
        Book {
            id: 3004,
            title: "The Lord Of The Rings".to_string(),
            author: "J.R.R Tolkien".to_string(),
            quantity: 37,
        }
    }

    #[test]
    fn test_book_display() {
        let output = create_test_book().to_string();

        assert!(output.contains("### 3004. The Lord Of The Rings"));
        assert!(output.contains("- Author: J.R.R Tolkien"));
        assert!(output.contains("- Quantity in stock: 37"));
        assert!(!output.contains("out of stock"));
    }

    #[test]
    fn test_book_serde_field_names() {
        let json = serde_json::to_value(create_test_book()).unwrap();
        assert_eq!(json["id"], 3004);
        assert_eq!(json["quantity"], 37);
    }

    #[test]
    fn test_book_changes_describe_only_differences() {
        let book = create_test_book();
        let changes = BookChanges {
            title: Some(book.title.clone()),
            author: None,
            quantity: Some(10),
        };

        assert_eq!(changes.describe(&book), vec!["Quantity: 37 → 10".to_string()]);
        assert!(!changes.is_empty());
        assert!(BookChanges::default().is_empty());
    }

    #[test]
    fn test_confirmation_from_str() {
        assert_eq!("y".parse::<Confirmation>().unwrap(), Confirmation::Yes);
        assert_eq!(" YES ".parse::<Confirmation>().unwrap(), Confirmation::Yes);
        assert_eq!("N".parse::<Confirmation>().unwrap(), Confirmation::No);
        assert_eq!("no".parse::<Confirmation>().unwrap(), Confirmation::No);

        match "maybe".parse::<Confirmation>() {
            Err(CatalogError::InvalidConfirmation { input }) => assert_eq!(input, "maybe"),
            other => panic!("expected InvalidConfirmation, got {other:?}"),
        }
        assert!("".parse::<Confirmation>().is_err());
    }

    #[test]
    fn test_search_kind_from_str() {
        assert_eq!("BT".parse::<SearchKind>().unwrap(), SearchKind::Title);
        assert_eq!("ba".parse::<SearchKind>().unwrap(), SearchKind::Author);
        assert_eq!("Ls".parse::<SearchKind>().unwrap(), SearchKind::LowStock);
        assert_eq!("ofs".parse::<SearchKind>().unwrap(), SearchKind::OutOfStock);
        assert_eq!("out".parse::<SearchKind>().unwrap(), SearchKind::OutOfStock);

        assert!(matches!(
            "isbn".parse::<SearchKind>(),
            Err(CatalogError::InvalidMode { .. })
        ));
    }

    #[test]
    fn test_search_mode_requires_query_for_text_kinds() {
        assert_eq!(
            SearchMode::new(SearchKind::Title, Some("  potter ")).unwrap(),
            SearchMode::ByTitle("potter".to_string())
        );
        assert!(matches!(
            SearchMode::new(SearchKind::Author, Some("   ")),
            Err(CatalogError::EmptyField { .. })
        ));
        assert!(SearchMode::new(SearchKind::Title, None).is_err());
    }

    #[test]
    fn test_search_mode_ignores_query_for_stock_kinds() {
        assert_eq!(
            SearchMode::new(SearchKind::LowStock, Some("ignored")).unwrap(),
            SearchMode::LowStock
        );
        assert_eq!(
            SearchMode::new(SearchKind::OutOfStock, None).unwrap().kind(),
            SearchKind::OutOfStock
        );
    }
}
