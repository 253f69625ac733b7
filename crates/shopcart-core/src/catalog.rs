//! # Product Catalog
//!
//! The list of products the storefront sells, with case-insensitive search
//! over names and descriptions.

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_product, validate_search_query};

/// Products available for sale, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the three reference products.
    pub fn with_defaults() -> Self {
        ProductCatalog {
            products: vec![
                Product::new("p1", "Product 1", Money::from_minor(10_000)),
                Product::new("p2", "Product 2", Money::from_minor(20_000)),
                Product::new("p3", "Product 3", Money::from_minor(30_000))
                    .with_description("A premium product of the finest quality."),
            ],
        }
    }

    /// Adds a product. Ids are unique.
    pub fn add(&mut self, product: Product) -> CoreResult<()> {
        validate_product(&product)?;

        if self.find(&product.id).is_some() {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id,
            }
            .into());
        }

        self.products.push(product);
        Ok(())
    }

    /// Looks a product up by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns products whose name or description contains `query`,
    /// ignoring case. An empty query returns every product.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::ProductCatalog;
    ///
    /// let catalog = ProductCatalog::with_defaults();
    /// assert_eq!(catalog.search("PREMIUM").unwrap().len(), 1);
    /// assert_eq!(catalog.search("").unwrap().len(), 3);
    /// ```
    pub fn search(&self, query: &str) -> CoreResult<Vec<&Product>> {
        let query = validate_search_query(query)?.to_lowercase();

        if query.is_empty() {
            return Ok(self.products.iter().collect());
        }

        Ok(self
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&query))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = ProductCatalog::with_defaults();
        let err = catalog
            .add(Product::new("p1", "Another", Money::from_minor(1)))
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find("p1").map(|p| p.name.as_str()), Some("Product 1"));
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut catalog = ProductCatalog::new();
        assert!(catalog
            .add(Product::new("p9", "Broken", Money::from_minor(-5)))
            .is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = ProductCatalog::with_defaults();

        let by_name: Vec<_> = catalog
            .search("product 2")
            .unwrap()
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(by_name, vec!["p2"]);

        let by_description: Vec<_> = catalog
            .search("  finest ")
            .unwrap()
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(by_description, vec!["p3"]);

        assert!(catalog.search("nothing like this").unwrap().is_empty());
    }
}
