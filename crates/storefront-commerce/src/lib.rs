//! Storefront domain types and logic.
//!
//! This crate provides the engine behind a small storefront:
//!
//! - **Catalog**: Products, filtering and sorting, reviews, variant selection
//! - **Cart**: Cart store driven by intents, exact decimal pricing
//! - **Checkout**: Shipping methods, checkout session, order placement
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = demo_catalog();
//! let tee = catalog.require(ProductId::new(1)).unwrap().clone();
//!
//! let mut session = CheckoutSession::new(CartStore::new(), PricingCalculator::default());
//! session.apply(CartIntent::Add(tee.clone())).unwrap();
//! session.apply(CartIntent::Add(tee)).unwrap();
//!
//! let pricing = session.pricing().unwrap();
//! assert_eq!(pricing.total.display(), "$91.37");
//!
//! let mut log = OrderLog::new();
//! let order = session.place_order(&mut log).unwrap();
//! assert_eq!(order.order_number.len(), 6);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::fixtures::demo_catalog;
    pub use crate::catalog::{
        categories, filter, price_bounds, related_products, sort_products, CatalogQuery,
        CatalogSource, ColorOption, ComparisonSet, Product, QuantityPicker, Review,
        ReviewSummary, SortOption, StarRating, StaticCatalog, VariantSelection,
    };

    // Cart
    pub use crate::cart::{
        CartIntent, CartLine, CartStore, PricingCalculator, PricingResult, UnknownShippingPolicy,
        TAX_RATE,
    };

    // Checkout
    pub use crate::checkout::{
        default_shipping_methods, CheckoutIntent, CheckoutSession, Order, OrderLog,
        OrderSubmitter, PaymentMethod, ShippingMethod, ShippingSelection,
    };
}
