//! Shopping cart module.
//!
//! Contains the cart store, its intents, and the pricing calculator.

mod intent;
mod pricing;
mod store;

pub use intent::CartIntent;
pub use pricing::{PricingCalculator, PricingResult, UnknownShippingPolicy, TAX_RATE};
pub use store::{subtotal, total_quantity, CartLine, CartStore};
