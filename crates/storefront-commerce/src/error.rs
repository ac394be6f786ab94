//! Commerce error types.

use crate::ids::{ProductId, ShippingMethodId};
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Shipping method not in the configured set.
    #[error("Shipping method not found: {0}")]
    ShippingMethodNotFound(ShippingMethodId),

    /// Quantity below the minimum of one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Color or size not offered by the product.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Checkout attempted with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// The session already placed its order.
    #[error("Order already placed: {0}")]
    OrderAlreadyPlaced(String),

    /// The order-submission collaborator refused the order.
    #[error("Order submission failed: {0}")]
    SubmissionFailed(String),

    /// Catalog data could not be decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
