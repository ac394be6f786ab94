//! Order types and the order-submission seam.

use crate::cart::{total_quantity, CartLine, PricingResult};
use crate::checkout::{PaymentMethod, ShippingSelection};
use crate::error::CommerceError;
use crate::ids::{unique_seed, OrderId};
use serde::{Deserialize, Serialize};

/// A placed order: a frozen copy of the checkout at the moment it was placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Six-digit order number shown to the customer.
    pub order_number: String,
    /// Cart lines at placement time.
    pub lines: Vec<CartLine>,
    /// Chosen shipping method.
    pub shipping: ShippingSelection,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
    /// Pricing at placement time.
    pub pricing: PricingResult,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl Order {
    pub(crate) fn new(
        lines: Vec<CartLine>,
        shipping: ShippingSelection,
        payment_method: PaymentMethod,
        pricing: PricingResult,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            order_number: generate_order_number(),
            lines,
            shipping,
            payment_method,
            pricing,
            placed_at: current_timestamp(),
        }
    }

    /// Total item count (sum of quantities), saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        total_quantity(&self.lines)
    }
}

/// Receives placed orders for payment and fulfilment.
pub trait OrderSubmitter {
    /// Accept an order. An error leaves the checkout open.
    fn submit(&mut self, order: &Order) -> Result<(), CommerceError>;
}

/// Submitter that keeps every order in memory.
#[derive(Debug, Clone, Default)]
pub struct OrderLog {
    orders: Vec<Order>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderSubmitter for OrderLog {
    fn submit(&mut self, order: &Order) -> Result<(), CommerceError> {
        self.orders.push(order.clone());
        Ok(())
    }
}

fn generate_order_number() -> String {
    format!("{:06}", unique_seed() % 1_000_000)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::fixtures::demo_products;
    use crate::checkout::default_shipping_methods;
    use crate::money::Currency;

    fn empty_order() -> Order {
        let methods = default_shipping_methods(Currency::USD);
        Order::new(
            Vec::new(),
            ShippingSelection::from_method(&methods[0]),
            PaymentMethod::default(),
            PricingResult::zero(Currency::USD),
        )
    }

    #[test]
    fn test_order_number_is_six_digits() {
        for _ in 0..20 {
            let order = empty_order();
            assert_eq!(order.order_number.len(), 6);
            assert!(order.order_number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_item_count_saturates() {
        let products = demo_products();
        let mut cart = CartStore::new();
        cart.add(&products[0]);
        cart.add(&products[1]);
        cart.set_quantity(products[0].id, i64::MAX).unwrap();

        let methods = default_shipping_methods(Currency::USD);
        let order = Order::new(
            cart.lines().to_vec(),
            ShippingSelection::from_method(&methods[0]),
            PaymentMethod::default(),
            PricingResult::zero(Currency::USD),
        );
        assert_eq!(order.item_count(), i64::MAX);
    }

    #[test]
    fn test_order_log_records_orders() {
        let mut log = OrderLog::new();
        assert!(log.is_empty());
        let order = empty_order();
        log.submit(&order).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.orders()[0].id, order.id);
    }
}
