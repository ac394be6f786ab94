//! Checkout session: cart, shipping and payment choice, and the one-way
//! order placement.

use crate::cart::{CartIntent, CartStore, PricingCalculator, PricingResult};
use crate::checkout::{Order, OrderSubmitter, PaymentMethod, ShippingMethod, ShippingSelection};
use crate::error::CommerceError;
use crate::ids::ShippingMethodId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Shipping id selected when the calculator has no methods configured.
pub const DEFAULT_SHIPPING_METHOD: &str = "standard";

/// A user request against the checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutIntent {
    /// Forward to the cart.
    Cart(CartIntent),
    /// Choose a shipping method.
    SelectShipping(ShippingMethodId),
    /// Choose a payment method.
    SelectPayment(PaymentMethod),
}

impl From<CartIntent> for CheckoutIntent {
    fn from(intent: CartIntent) -> Self {
        CheckoutIntent::Cart(intent)
    }
}

/// State of one shopper's checkout.
///
/// Before an order is placed the cart and the shipping and payment choices
/// can change freely. Placing an order is final: the cart is emptied, the
/// order is kept, and every later mutation fails with `OrderAlreadyPlaced`.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    cart: CartStore,
    calculator: PricingCalculator,
    shipping_method: ShippingMethodId,
    payment_method: PaymentMethod,
    placed: Option<Order>,
}

impl CheckoutSession {
    /// Start a checkout for a cart.
    ///
    /// The first configured shipping method and the default payment method
    /// are selected.
    pub fn new(cart: CartStore, calculator: PricingCalculator) -> Self {
        let shipping_method = calculator
            .shipping_methods()
            .first()
            .map(|m| m.id.clone())
            .unwrap_or_else(|| ShippingMethodId::new(DEFAULT_SHIPPING_METHOD));
        Self {
            cart,
            calculator,
            shipping_method,
            payment_method: PaymentMethod::default(),
            placed: None,
        }
    }

    /// Apply a checkout intent.
    pub fn apply(&mut self, intent: impl Into<CheckoutIntent>) -> Result<(), CommerceError> {
        self.ensure_open()?;
        match intent.into() {
            CheckoutIntent::Cart(intent) => self.cart.apply(intent),
            CheckoutIntent::SelectShipping(id) => self.select_shipping(id),
            CheckoutIntent::SelectPayment(method) => self.select_payment(method),
        }
    }

    /// Choose a shipping method. Unknown ids are rejected and the current
    /// choice is kept.
    pub fn select_shipping(&mut self, id: ShippingMethodId) -> Result<(), CommerceError> {
        self.ensure_open()?;
        if self.calculator.shipping_method(&id).is_none() {
            return Err(CommerceError::ShippingMethodNotFound(id));
        }
        debug!(shipping_method = %id, "shipping method selected");
        self.shipping_method = id;
        Ok(())
    }

    /// Choose a payment method.
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<(), CommerceError> {
        self.ensure_open()?;
        debug!(payment_method = %method, "payment method selected");
        self.payment_method = method;
        Ok(())
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn calculator(&self) -> &PricingCalculator {
        &self.calculator
    }

    /// Id of the selected shipping method.
    pub fn selected_shipping(&self) -> &ShippingMethodId {
        &self.shipping_method
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// The selected shipping method, if it is configured.
    pub fn shipping_method(&self) -> Option<&ShippingMethod> {
        self.calculator.shipping_method(&self.shipping_method)
    }

    /// Current pricing, recomputed from the cart on every call.
    pub fn pricing(&self) -> Result<PricingResult, CommerceError> {
        self.calculator.price(self.cart.lines(), &self.shipping_method)
    }

    /// Check whether the order has been placed.
    pub fn is_placed(&self) -> bool {
        self.placed.is_some()
    }

    /// The placed order, once there is one.
    pub fn order(&self) -> Option<&Order> {
        self.placed.as_ref()
    }

    /// Place the order.
    ///
    /// The order carries a copy of the current lines, the selected shipping
    /// and payment methods, and the pricing computed from exactly those values. If the
    /// submitter fails the session is left as it was.
    pub fn place_order<S: OrderSubmitter + ?Sized>(
        &mut self,
        submitter: &mut S,
    ) -> Result<&Order, CommerceError> {
        self.ensure_open()?;
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let method = self
            .shipping_method()
            .ok_or_else(|| CommerceError::ShippingMethodNotFound(self.shipping_method.clone()))?;
        let shipping = ShippingSelection::from_method(method);
        let pricing = self.pricing()?;
        let order = Order::new(
            self.cart.lines().to_vec(),
            shipping,
            self.payment_method,
            pricing,
        );

        submitter.submit(&order)?;

        info!(
            order_id = %order.id,
            order_number = %order.order_number,
            items = order.item_count(),
            total = %order.pricing.total.display(),
            "order placed"
        );
        self.cart.clear();
        Ok(self.placed.insert(order))
    }

    fn ensure_open(&self) -> Result<(), CommerceError> {
        match &self.placed {
            Some(order) => Err(CommerceError::OrderAlreadyPlaced(order.order_number.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::demo_products;
    use crate::checkout::OrderLog;
    use crate::money::Currency;
    use rust_decimal_macros::dec;

    struct RejectingSubmitter;

    impl OrderSubmitter for RejectingSubmitter {
        fn submit(&mut self, _order: &Order) -> Result<(), CommerceError> {
            Err(CommerceError::SubmissionFailed("payment declined".to_string()))
        }
    }

    fn session_with_tees() -> CheckoutSession {
        let mut session = CheckoutSession::new(CartStore::new(), PricingCalculator::default());
        let tee = demo_products().remove(0);
        session.apply(CartIntent::Add(tee.clone())).unwrap();
        session.apply(CartIntent::Add(tee)).unwrap();
        session
    }

    #[test]
    fn test_initial_shipping_is_first_method() {
        let session = CheckoutSession::new(CartStore::new(), PricingCalculator::default());
        assert_eq!(session.selected_shipping().as_str(), "standard");
        assert!(!session.is_placed());
    }

    #[test]
    fn test_initial_shipping_without_methods() {
        let calculator = PricingCalculator::new(Currency::USD, Vec::new());
        let session = CheckoutSession::new(CartStore::new(), calculator);
        assert_eq!(session.selected_shipping().as_str(), DEFAULT_SHIPPING_METHOD);
        assert!(session.shipping_method().is_none());
    }

    #[test]
    fn test_pricing_follows_state() {
        let mut session = session_with_tees();
        assert_eq!(session.pricing().unwrap().total.amount, dec!(91.3684));

        session
            .apply(CheckoutIntent::SelectShipping(ShippingMethodId::new("overnight")))
            .unwrap();
        let pricing = session.pricing().unwrap();
        assert_eq!(pricing.shipping_fee.amount, dec!(24.99));
        assert_eq!(pricing.total.amount, dec!(111.3684));
    }

    #[test]
    fn test_select_unknown_shipping_keeps_choice() {
        let mut session = session_with_tees();
        let err = session
            .select_shipping(ShippingMethodId::new("drone"))
            .unwrap_err();
        assert_eq!(err, CommerceError::ShippingMethodNotFound(ShippingMethodId::new("drone")));
        assert_eq!(session.selected_shipping().as_str(), "standard");
    }

    #[test]
    fn test_payment_choice_is_recorded_on_order() {
        let mut session = session_with_tees();
        assert_eq!(session.payment_method(), PaymentMethod::CreditCard);
        session
            .apply(CheckoutIntent::SelectPayment(PaymentMethod::Paypal))
            .unwrap();
        assert_eq!(session.payment_method(), PaymentMethod::Paypal);

        let mut log = OrderLog::new();
        let order = session.place_order(&mut log).unwrap();
        assert_eq!(order.payment_method, PaymentMethod::Paypal);
        assert!(matches!(
            session.select_payment(PaymentMethod::ApplePay),
            Err(CommerceError::OrderAlreadyPlaced(_))
        ));
    }

    #[test]
    fn test_place_order() {
        let mut session = session_with_tees();
        let expected = session.pricing().unwrap();
        let mut log = OrderLog::new();

        let order = session.place_order(&mut log).unwrap().clone();
        assert_eq!(order.pricing, expected);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.shipping.method_id.as_str(), "standard");
        assert_eq!(order.payment_method, PaymentMethod::CreditCard);

        assert!(session.is_placed());
        assert!(session.cart().is_empty());
        assert_eq!(log.orders(), &[order]);
    }

    #[test]
    fn test_placement_is_terminal() {
        let mut session = session_with_tees();
        let mut log = OrderLog::new();
        session.place_order(&mut log).unwrap();

        let tee = demo_products().remove(0);
        assert!(matches!(
            session.apply(CartIntent::Add(tee)),
            Err(CommerceError::OrderAlreadyPlaced(_))
        ));
        assert!(matches!(
            session.select_shipping(ShippingMethodId::new("express")),
            Err(CommerceError::OrderAlreadyPlaced(_))
        ));
        assert!(matches!(
            session.place_order(&mut log),
            Err(CommerceError::OrderAlreadyPlaced(_))
        ));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_empty_cart_cannot_be_placed() {
        let mut session = CheckoutSession::new(CartStore::new(), PricingCalculator::default());
        let mut log = OrderLog::new();
        assert_eq!(session.place_order(&mut log).unwrap_err(), CommerceError::EmptyCart);
        assert!(!session.is_placed());
        assert!(log.is_empty());
    }

    #[test]
    fn test_failed_submission_leaves_session_open() {
        let mut session = session_with_tees();
        let err = session.place_order(&mut RejectingSubmitter).unwrap_err();
        assert!(matches!(err, CommerceError::SubmissionFailed(_)));
        assert!(!session.is_placed());
        assert_eq!(session.cart().count(), 2);

        let mut log = OrderLog::new();
        assert!(session.place_order(&mut log).is_ok());
    }
}
