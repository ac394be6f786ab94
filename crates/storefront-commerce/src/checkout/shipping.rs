//! Shipping method types.

use crate::ids::ShippingMethodId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shipping method option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMethod {
    /// Unique identifier (e.g., "standard").
    pub id: ShippingMethodId,
    /// Display name.
    pub name: String,
    /// Flat shipping fee.
    pub fee: Money,
    /// Delivery time label (e.g., "3-5 business days").
    pub delivery_time: String,
}

impl ShippingMethod {
    /// Create a new shipping method.
    pub fn new(
        id: impl Into<ShippingMethodId>,
        name: impl Into<String>,
        fee: Money,
        delivery_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fee,
            delivery_time: delivery_time.into(),
        }
    }

    /// Check if this is free shipping.
    pub fn is_free(&self) -> bool {
        self.fee.is_zero()
    }
}

/// The standard, express and overnight methods, in that order.
pub fn default_shipping_methods(currency: Currency) -> Vec<ShippingMethod> {
    vec![
        ShippingMethod::new(
            "standard",
            "Standard Shipping",
            Money::from_minor(499, currency),
            "3-5 business days",
        ),
        ShippingMethod::new(
            "express",
            "Express Shipping",
            Money::from_minor(1299, currency),
            "1-2 business days",
        ),
        ShippingMethod::new(
            "overnight",
            "Overnight Shipping",
            Money::from_minor(2499, currency),
            "Next business day",
        ),
    ]
}

/// A selected shipping method, denormalized onto an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingSelection {
    /// Selected method ID.
    pub method_id: ShippingMethodId,
    /// Method name.
    pub method_name: String,
    /// Fee charged.
    pub fee: Money,
    /// Delivery time label.
    pub delivery_time: String,
}

impl ShippingSelection {
    /// Create from a shipping method.
    pub fn from_method(method: &ShippingMethod) -> Self {
        Self {
            method_id: method.id.clone(),
            method_name: method.name.clone(),
            fee: method.fee,
            delivery_time: method.delivery_time.clone(),
        }
    }
}
