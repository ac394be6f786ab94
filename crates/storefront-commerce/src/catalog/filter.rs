//! Catalog filtering and sorting.

use crate::catalog::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category value that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Criteria for narrowing the product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogQuery {
    /// Exact category name, or [`ALL_CATEGORIES`].
    pub category: String,
    /// Inclusive lower price bound.
    pub min_price: Decimal,
    /// Inclusive upper price bound.
    pub max_price: Decimal,
    /// Case-insensitive text matched against name and category.
    pub query: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            min_price: Decimal::ZERO,
            max_price: Decimal::MAX,
            query: String::new(),
        }
    }
}

impl CatalogQuery {
    /// Create a query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Restrict to an inclusive price range.
    pub fn with_price_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.query = q.into();
        self
    }

    /// Check whether a product satisfies every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_price(product) && self.matches_text(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category == ALL_CATEGORIES || self.category == product.category
    }

    fn matches_price(&self, product: &Product) -> bool {
        let price = product.price.amount;
        price >= self.min_price && price <= self.max_price
    }

    fn matches_text(&self, product: &Product) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.category.to_lowercase().contains(&needle)
    }
}

/// Filter products, keeping input order.
pub fn filter<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    products.iter().filter(|p| query.matches(p)).collect()
}

/// List `"All"` followed by each distinct category in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !out.iter().any(|c| c == &product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

/// Lowest and highest unit price, or `None` for an empty list.
pub fn price_bounds(products: &[Product]) -> Option<(Decimal, Decimal)> {
    let mut prices = products.iter().map(|p| p.price.amount);
    let first = prices.next()?;
    Some(prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
}

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by name A-Z.
    NameAsc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::Rating => "rating",
            SortOption::NameAsc => "name_asc",
        }
    }

    /// Parse a sort name; `-` and `_` are interchangeable.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "featured" => Some(SortOption::Featured),
            "price_asc" => Some(SortOption::PriceAsc),
            "price_desc" => Some(SortOption::PriceDesc),
            "rating" => Some(SortOption::Rating),
            "name_asc" => Some(SortOption::NameAsc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::NameAsc => "Name: A-Z",
        }
    }
}

/// Sort a listing. The sort is stable, so ties keep catalog order.
pub fn sort_products(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::Featured => {}
        SortOption::PriceAsc => products.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortOption::PriceDesc => products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::NameAsc => products.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}
