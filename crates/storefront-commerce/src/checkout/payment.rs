//! Payment method choice.
//!
//! Only the shopper's choice is recorded; charging the payment is the order
//! submitter's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the shopper intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Paypal,
    ApplePay,
}

impl PaymentMethod {
    /// All payment methods, in display order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::Paypal,
        PaymentMethod::ApplePay,
    ];

    /// Stable identifier (e.g., "credit-card").
    pub fn id(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::ApplePay => "apple-pay",
        }
    }

    /// Display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::ApplePay => "Apple Pay",
        }
    }

    /// Parse an identifier.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
