//! # Product Commands
//!
//! Catalog search for the product grid.
//!
//! ## Search Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper types "premium" in the search box                             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  search_products(&store, "premium")                                     │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Case-insensitive match on name OR description                         │
//! │  Empty query ────────► whole catalog                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopcart_core::Product;
use tracing::debug;

use crate::error::ApiError;
use crate::state::Storefront;

/// Searches the catalog.
///
/// ## Errors
/// - `VALIDATION_ERROR`: query longer than the allowed maximum
pub fn search_products(store: &Storefront, query: &str) -> Result<Vec<Product>, ApiError> {
    debug!(query = %query, "search_products command");

    let products: Vec<Product> = store
        .catalog()
        .search(query)?
        .into_iter()
        .cloned()
        .collect();

    debug!(count = products.len(), "Search complete");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_empty_query_lists_all() {
        let products = search_products(&Storefront::default(), "  ").unwrap();
        assert_eq!(products.len(), 3);
    }

    #[test]
    fn test_matches_description_case_insensitively() {
        let products = search_products(&Storefront::default(), "PREMIUM").unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3"]);
    }

    #[test]
    fn test_overlong_query_rejected() {
        let query = "x".repeat(101);
        let err = search_products(&Storefront::default(), &query).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
