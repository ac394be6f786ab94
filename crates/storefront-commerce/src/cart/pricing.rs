//! Cart pricing calculations.

use crate::cart::store::subtotal;
use crate::cart::CartLine;
use crate::checkout::{default_shipping_methods, ShippingMethod};
use crate::error::CommerceError;
use crate::ids::ShippingMethodId;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sales tax rate applied to the subtotal (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// What to do when asked to price an unknown shipping method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownShippingPolicy {
    /// Charge nothing for shipping and log a warning.
    #[default]
    Free,
    /// Fail with `ShippingMethodNotFound`.
    Reject,
}

/// Complete pricing breakdown for a set of cart lines.
///
/// Amounts are exact; call [`Money::display`] to render them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingResult {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Flat fee of the selected shipping method.
    pub shipping_fee: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Subtotal + shipping + tax.
    pub total: Money,
}

impl PricingResult {
    /// All-zero pricing in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            subtotal: Money::zero(currency),
            shipping_fee: Money::zero(currency),
            tax: Money::zero(currency),
            total: Money::zero(currency),
        }
    }
}

/// Prices cart lines against a fixed set of shipping methods.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingCalculator {
    currency: Currency,
    shipping_methods: Vec<ShippingMethod>,
    unknown_shipping: UnknownShippingPolicy,
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new(Currency::USD, default_shipping_methods(Currency::USD))
    }
}

impl PricingCalculator {
    /// Create a calculator for a currency and shipping method set.
    pub fn new(currency: Currency, shipping_methods: Vec<ShippingMethod>) -> Self {
        Self {
            currency,
            shipping_methods,
            unknown_shipping: UnknownShippingPolicy::default(),
        }
    }

    /// Set how unknown shipping method ids are handled.
    pub fn with_unknown_shipping(mut self, policy: UnknownShippingPolicy) -> Self {
        self.unknown_shipping = policy;
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn unknown_shipping(&self) -> UnknownShippingPolicy {
        self.unknown_shipping
    }

    /// The configured shipping methods, in display order.
    pub fn shipping_methods(&self) -> &[ShippingMethod] {
        &self.shipping_methods
    }

    /// Look up a shipping method by id.
    pub fn shipping_method(&self, id: &ShippingMethodId) -> Option<&ShippingMethod> {
        self.shipping_methods.iter().find(|m| &m.id == id)
    }

    /// Fee for a shipping method id, applying the unknown-method policy.
    pub fn shipping_fee(&self, id: &ShippingMethodId) -> Result<Money, CommerceError> {
        match self.shipping_method(id) {
            Some(method) => Ok(method.fee),
            None => match self.unknown_shipping {
                UnknownShippingPolicy::Free => {
                    warn!(shipping_method = %id, "unknown shipping method, charging no shipping");
                    Ok(Money::zero(self.currency))
                }
                UnknownShippingPolicy::Reject => {
                    Err(CommerceError::ShippingMethodNotFound(id.clone()))
                }
            },
        }
    }

    /// Price `lines` with the given shipping method.
    ///
    /// An empty cart prices to all zeros, shipping included, whatever the
    /// method id.
    pub fn price(
        &self,
        lines: &[CartLine],
        shipping_method: &ShippingMethodId,
    ) -> Result<PricingResult, CommerceError> {
        if lines.is_empty() {
            return Ok(PricingResult::zero(self.currency));
        }

        let subtotal = subtotal(lines, self.currency)?;
        let shipping_fee = self.shipping_fee(shipping_method)?;
        let tax = subtotal.try_scale(TAX_RATE)?;
        let total = Money::try_sum([subtotal, shipping_fee, tax].iter(), self.currency)?;

        Ok(PricingResult {
            subtotal,
            shipping_fee,
            tax,
            total,
        })
    }
}
