//! Checkout module.
//!
//! Contains shipping and payment methods, the checkout session, and orders.

mod order;
mod payment;
mod session;
mod shipping;

pub use order::{Order, OrderLog, OrderSubmitter};
pub use payment::PaymentMethod;
pub use session::{CheckoutIntent, CheckoutSession, DEFAULT_SHIPPING_METHOD};
pub use shipping::{default_shipping_methods, ShippingMethod, ShippingSelection};
