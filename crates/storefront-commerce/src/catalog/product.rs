//! Product and variant option types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A product in the catalog.
///
/// Products are supplied by a [`CatalogSource`](crate::catalog::CatalogSource)
/// and never change for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Category name (e.g., "Clothing").
    pub category: String,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: u32,
    /// Tags for filtering/search.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Color options.
    #[serde(default)]
    pub colors: Vec<ColorOption>,
    /// Size options, in display order.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Whether the product can be purchased.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Primary image path.
    #[serde(default = "default_image")]
    pub image: String,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

fn default_image() -> String {
    "/placeholder.svg".to_string()
}

impl Product {
    /// Create a new in-stock product with no variants.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            rating: 0.0,
            review_count: 0,
            tags: BTreeSet::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            in_stock: true,
            image: default_image(),
            description: None,
            features: Vec::new(),
        }
    }

    /// Set the rating and review count.
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.review_count = review_count;
        self
    }

    /// Add a tag to this product.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add a color option.
    pub fn with_color(mut self, name: impl Into<String>, hex: impl Into<String>) -> Self {
        self.colors.push(ColorOption::new(name, hex));
        self
    }

    /// Set the size run.
    pub fn with_sizes<S: Into<String>>(mut self, sizes: impl IntoIterator<Item = S>) -> Self {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the product as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }

    /// Check if the product offers any color or size choice.
    pub fn has_variants(&self) -> bool {
        !self.colors.is_empty() || !self.sizes.is_empty()
    }

    /// Look up a color option by name.
    pub fn color(&self, name: &str) -> Option<&ColorOption> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// Check if a size is offered.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

/// A color option (e.g., Black / #000000).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ColorOption {
    /// Display name.
    pub name: String,
    /// Swatch color as a hex string.
    pub hex: String,
}

impl ColorOption {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new(ProductId::new(1), "Test Product", Money::from_minor(2999, Currency::USD), "Clothing");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Test Product");
        assert!(product.is_available());
        assert!(!product.has_variants());
    }

    #[test]
    fn test_variant_options() {
        let product = Product::new(ProductId::new(1), "Tee", Money::from_minor(2999, Currency::USD), "Clothing")
            .with_color("Black", "#000000")
            .with_sizes(["S", "M", "L"]);

        assert!(product.has_variants());
        assert_eq!(product.color("Black").map(|c| c.hex.as_str()), Some("#000000"));
        assert!(product.color("Green").is_none());
        assert!(product.has_size("M"));
        assert!(!product.has_size("XL"));
    }

    #[test]
    fn test_rating_is_clamped() {
        let product = Product::new(ProductId::new(1), "Tee", Money::from_minor(2999, Currency::USD), "Clothing")
            .with_rating(7.0, 3);
        assert_eq!(product.rating, 5.0);
        assert_eq!(product.review_count, 3);
    }

    #[test]
    fn test_product_deserializes_with_defaults() {
        let json = r#"{
            "id": 9,
            "name": "Beanie",
            "price": {"amount": "19.99", "currency": "USD"},
            "category": "Accessories",
            "rating": 4.0
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(9));
        assert!(product.in_stock);
        assert_eq!(product.image, "/placeholder.svg");
        assert!(product.tags.is_empty());
    }
}
