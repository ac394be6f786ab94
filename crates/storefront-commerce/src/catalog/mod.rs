//! Product catalog module.
//!
//! Contains products, reviews, filtering, and the product detail state.

mod compare;
mod detail;
mod filter;
pub mod fixtures;
mod product;
mod review;
mod source;

pub use compare::ComparisonSet;
pub use detail::{related_products, QuantityPicker, VariantSelection};
pub use filter::{
    categories, filter, price_bounds, sort_products, CatalogQuery, SortOption, ALL_CATEGORIES,
};
pub use product::{ColorOption, Product};
pub use review::{RatingDistribution, Review, ReviewSummary, StarRating};
pub use source::{CatalogSource, StaticCatalog};
