//! Cart store and line item types.

use crate::cart::CartIntent;
use crate::catalog::{Product, VariantSelection};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A line item in the cart.
///
/// Display fields are copied from the product when the line is created and
/// are not refreshed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Image path (denormalized for display).
    pub image: String,
    /// Unit price at the time the product was added.
    pub unit_price: Money,
    /// Quantity, always at least one.
    pub quantity: i64,
    /// Selected color, if any.
    pub color: Option<String>,
    /// Selected size, if any.
    pub size: Option<String>,
}

impl CartLine {
    fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity,
            color: None,
            size: None,
        }
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.unit_price.try_multiply(self.quantity)
    }

    /// Variant label, e.g. "Black / M".
    pub fn variant_label(&self) -> Option<String> {
        VariantSelection {
            color: self.color.clone(),
            size: self.size.clone(),
        }
        .label()
    }
}

/// The shopping cart: an ordered list of lines, at most one per product.
///
/// Line order is insertion order. Aggregates are computed from the lines on
/// every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for this product, or appends a new line
    /// with quantity one. Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> i64 {
        self.add_quantity(product, 1, None)
    }

    /// Add `quantity` units with a chosen color and size.
    ///
    /// A product already in the cart keeps its line and the display fields
    /// captured on the first add; only the quantity grows.
    pub fn add_selection(
        &mut self,
        product: &Product,
        selection: &VariantSelection,
        quantity: i64,
    ) -> Result<i64, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        Ok(self.add_quantity(product, quantity, Some(selection)))
    }

    fn add_quantity(
        &mut self,
        product: &Product,
        quantity: i64,
        selection: Option<&VariantSelection>,
    ) -> i64 {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            debug!(product_id = %product.id, quantity = existing.quantity, "cart line incremented");
            return existing.quantity;
        }

        let mut line = CartLine::from_product(product, quantity);
        if let Some(selection) = selection {
            line.color = selection.color.clone();
            line.size = selection.size.clone();
        }
        debug!(product_id = %product.id, quantity, "cart line added");
        self.lines.push(line);
        quantity
    }

    /// Remove the line for a product. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(%product_id, "cart line removed");
        }
        removed
    }

    /// Set a line's quantity.
    ///
    /// Quantities below one are rejected and leave the cart unchanged; use
    /// [`remove`](Self::remove) to drop a line. Returns `Ok(false)` when the
    /// product is not in the cart.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                debug!(%product_id, quantity, "cart line quantity set");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        debug!("cart cleared");
    }

    /// Apply a cart intent.
    pub fn apply(&mut self, intent: CartIntent) -> Result<(), CommerceError> {
        match intent {
            CartIntent::Add(product) => {
                self.add(&product);
            }
            CartIntent::AddSelection {
                product,
                selection,
                quantity,
            } => {
                self.add_selection(&product, &selection, quantity)?;
            }
            CartIntent::Remove(product_id) => {
                self.remove(product_id);
            }
            CartIntent::SetQuantity {
                product_id,
                quantity,
            } => {
                self.set_quantity(product_id, quantity)?;
            }
            CartIntent::Clear => self.clear(),
        }
        Ok(())
    }

    /// The lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Total item count (sum of quantities), saturating at `i64::MAX`.
    pub fn count(&self) -> i64 {
        total_quantity(&self.lines)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        subtotal(&self.lines, currency)
    }
}

/// Sum of quantities over `lines`, saturating at `i64::MAX`.
pub fn total_quantity(lines: &[CartLine]) -> i64 {
    lines
        .iter()
        .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
}

/// Sum of unit price times quantity over `lines`; zero when empty.
pub fn subtotal(lines: &[CartLine], currency: Currency) -> Result<Money, CommerceError> {
    lines.iter().try_fold(Money::zero(currency), |acc, line| {
        acc.try_add(&line.total()?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::demo_products;
    use rust_decimal_macros::dec;

    fn tee() -> Product {
        demo_products().remove(0)
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_add_captures_product_fields() {
        let mut cart = CartStore::new();
        let product = tee();
        assert_eq!(cart.add(&product), 1);

        let line = cart.get(product.id).unwrap();
        assert_eq!(line.name, "Premium Cotton T-Shirt");
        assert_eq!(line.unit_price.amount, dec!(39.99));
        assert_eq!(line.image, product.image);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_add_same_product_increments() {
        for product in demo_products() {
            let mut cart = CartStore::new();
            cart.add(&product);
            cart.add(&product);
            assert_eq!(cart.len(), 1);
            assert_eq!(cart.lines()[0].quantity, 2);
        }
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let products = demo_products();
        let mut cart = CartStore::new();
        cart.add(&products[4]);
        cart.add(&products[0]);
        cart.add(&products[4]);
        cart.add(&products[2]);

        let order: Vec<u32> = cart.lines().iter().map(|l| l.product_id.get()).collect();
        assert_eq!(order, vec![5, 1, 3]);
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_captured_price_survives_catalog_change() {
        let mut cart = CartStore::new();
        let mut product = tee();
        cart.add(&product);

        product.price = Money::from_minor(100, Currency::USD);
        cart.add(&product);

        let line = cart.get(product.id).unwrap();
        assert_eq!(line.unit_price.amount, dec!(39.99));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_add_selection() {
        let mut cart = CartStore::new();
        let product = tee();
        let selection = VariantSelection::default_for(&product);

        assert_eq!(cart.add_selection(&product, &selection, 3).unwrap(), 3);
        let line = cart.get(product.id).unwrap();
        assert_eq!(line.variant_label().as_deref(), Some("Black / M"));

        let mut other = selection.clone();
        other.select_color(&product, "Red").unwrap();
        assert_eq!(cart.add_selection(&product, &other, 2).unwrap(), 5);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(product.id).unwrap().color.as_deref(), Some("Black"));
    }

    #[test]
    fn test_add_selection_rejects_non_positive_quantity() {
        let mut cart = CartStore::new();
        let product = tee();
        let selection = VariantSelection::default_for(&product);
        let err = cart.add_selection(&product, &selection, 0).unwrap_err();
        assert_eq!(err, CommerceError::InvalidQuantity(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartStore::new();
        let product = tee();
        cart.add(&product);

        assert!(cart.set_quantity(product.id, 5).unwrap());
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_set_quantity_below_one_is_rejected() {
        let mut cart = CartStore::new();
        let product = tee();
        cart.add(&product);
        cart.add(&product);

        for bad in [0, -1, i64::MIN] {
            assert_eq!(
                cart.set_quantity(product.id, bad),
                Err(CommerceError::InvalidQuantity(bad))
            );
            assert_eq!(cart.get(product.id).unwrap().quantity, 2);
        }
    }

    #[test]
    fn test_set_quantity_unknown_product_is_noop() {
        let mut cart = CartStore::new();
        cart.add(&tee());
        let before = cart.clone();
        assert!(!cart.set_quantity(ProductId::new(42), 3).unwrap());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let products = demo_products();
        let mut cart = CartStore::new();
        cart.add(&products[0]);
        cart.add(&products[1]);

        assert!(cart.remove(products[0].id));
        let after_once = cart.clone();
        assert!(!cart.remove(products[0].id));
        assert_eq!(cart, after_once);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear_resets_aggregates() {
        let products = demo_products();
        let mut cart = CartStore::new();
        for product in &products {
            cart.add(product);
        }
        cart.set_quantity(products[0].id, 7).unwrap();

        cart.clear();
        assert_eq!(cart.count(), 0);
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn test_count_saturates_on_huge_quantities() {
        let products = demo_products();
        let mut cart = CartStore::new();
        cart.add(&products[0]);
        cart.add(&products[1]);
        cart.set_quantity(products[0].id, i64::MAX).unwrap();

        assert_eq!(cart.count(), i64::MAX);
        assert_eq!(total_quantity(cart.lines()), i64::MAX);
    }

    #[test]
    fn test_subtotal() {
        let products = demo_products();
        let mut cart = CartStore::new();
        cart.add(&products[0]);
        cart.add(&products[0]);
        cart.add(&products[6]);

        let subtotal = cart.subtotal(Currency::USD).unwrap();
        assert_eq!(subtotal.amount, dec!(209.97));
        assert!(CartStore::new().subtotal(Currency::USD).unwrap().is_zero());
    }

    #[test]
    fn test_apply_intents() {
        let products = demo_products();
        let mut cart = CartStore::new();

        cart.apply(CartIntent::Add(products[0].clone())).unwrap();
        cart.apply(CartIntent::Add(products[1].clone())).unwrap();
        cart.apply(CartIntent::SetQuantity {
            product_id: products[1].id,
            quantity: 4,
        })
        .unwrap();
        assert_eq!(cart.count(), 5);

        let rejected = cart.apply(CartIntent::SetQuantity {
            product_id: products[1].id,
            quantity: 0,
        });
        assert!(rejected.is_err());
        assert_eq!(cart.count(), 5);

        cart.apply(CartIntent::Remove(products[0].id)).unwrap();
        cart.apply(CartIntent::Remove(products[0].id)).unwrap();
        assert_eq!(cart.len(), 1);

        cart.apply(CartIntent::Clear).unwrap();
        assert!(cart.is_empty());
    }
}
