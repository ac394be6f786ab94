//! Product comparison selection.

use crate::catalog::Product;
use crate::ids::ProductId;

/// Products picked for side-by-side comparison, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSet {
    selected: Vec<Product>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns `true` when the product is selected after the call.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if let Some(pos) = self.selected.iter().position(|p| p.id == product.id) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(product.clone());
            true
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.selected.iter().any(|p| p.id == id)
    }

    pub fn selected(&self) -> &[Product] {
        &self.selected
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
