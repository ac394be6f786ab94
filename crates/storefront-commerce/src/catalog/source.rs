//! Catalog data sources.

use crate::catalog::{Product, Review};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Supplies the product list a session works against.
///
/// The storefront only reads from a source; a data-fetching backend can
/// implement this trait without changing the product shape.
pub trait CatalogSource {
    /// All products, in catalog order.
    fn products(&self) -> &[Product];

    /// Reviews for one product.
    fn reviews(&self, product_id: ProductId) -> Vec<&Review>;

    /// Look up a product by id.
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Look up a product, failing with `ProductNotFound`.
    fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.product(id).ok_or(CommerceError::ProductNotFound(id))
    }
}

/// An in-memory catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StaticCatalog {
    pub products: Vec<Product>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl StaticCatalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            reviews: Vec::new(),
        }
    }

    /// Attach reviews.
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogSource for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn reviews(&self, product_id: ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }
}
