//! Cart intents.
//!
//! The presentation layer turns clicks and input changes into these
//! messages and hands them to [`CartStore::apply`](crate::cart::CartStore::apply)
//! one at a time.

use crate::catalog::{Product, VariantSelection};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A user request against the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CartIntent {
    /// Add one unit of a product.
    Add(Product),
    /// Add a quantity with a chosen color and size.
    AddSelection {
        product: Product,
        selection: VariantSelection,
        quantity: i64,
    },
    /// Drop a product's line.
    Remove(ProductId),
    /// Change a line's quantity.
    SetQuantity { product_id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
}
