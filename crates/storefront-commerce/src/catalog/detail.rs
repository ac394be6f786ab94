//! Product detail page state: variant selection, quantity, related items.

use crate::catalog::{CatalogSource, Product};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Size picked by default when the run is long enough ("M" in XS..XXL).
const DEFAULT_SIZE_INDEX: usize = 2;

/// The color and size a shopper has chosen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantSelection {
    pub color: Option<String>,
    pub size: Option<String>,
}

impl VariantSelection {
    /// Initial selection: first color, and the third size if there is one.
    pub fn default_for(product: &Product) -> Self {
        let size = product
            .sizes
            .get(DEFAULT_SIZE_INDEX)
            .or_else(|| product.sizes.first())
            .cloned();
        Self {
            color: product.colors.first().map(|c| c.name.clone()),
            size,
        }
    }

    /// Choose a color offered by the product.
    pub fn select_color(&mut self, product: &Product, name: &str) -> Result<(), CommerceError> {
        if product.color(name).is_none() {
            return Err(CommerceError::InvalidSelection(format!(
                "{} is not available in {}",
                product.name, name
            )));
        }
        self.color = Some(name.to_string());
        Ok(())
    }

    /// Choose a size offered by the product.
    pub fn select_size(&mut self, product: &Product, size: &str) -> Result<(), CommerceError> {
        if !product.has_size(size) {
            return Err(CommerceError::InvalidSelection(format!(
                "{} is not available in size {}",
                product.name, size
            )));
        }
        self.size = Some(size.to_string());
        Ok(())
    }

    /// Display label, e.g. "Black / M". `None` when nothing is selected.
    pub fn label(&self) -> Option<String> {
        let parts: Vec<&str> = [self.color.as_deref(), self.size.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" / "))
        }
    }
}

/// Quantity stepper that never goes below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityPicker(i64);

impl Default for QuantityPicker {
    fn default() -> Self {
        Self(1)
    }
}

impl QuantityPicker {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        if self.0 > 1 {
            self.0 -= 1;
        }
    }
}

/// Other products in the same category, in catalog order.
pub fn related_products<'a, C: CatalogSource + ?Sized>(
    catalog: &'a C,
    product: &Product,
    limit: usize,
) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|p| p.id != product.id && p.category == product.category)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::demo_catalog;
    use crate::ids::ProductId;

    #[test]
    fn test_default_selection() {
        let catalog = demo_catalog();
        let tee = catalog.product(ProductId::new(1)).unwrap();
        let selection = VariantSelection::default_for(tee);
        assert_eq!(selection.color.as_deref(), Some("Black"));
        assert_eq!(selection.size.as_deref(), Some("M"));
        assert_eq!(selection.label().as_deref(), Some("Black / M"));
    }

    #[test]
    fn test_default_selection_without_sizes() {
        let catalog = demo_catalog();
        let headphones = catalog.product(ProductId::new(7)).unwrap();
        let selection = VariantSelection::default_for(headphones);
        assert_eq!(selection.color.as_deref(), Some("Silver"));
        assert_eq!(selection.size, None);

        let watch = catalog.product(ProductId::new(8)).unwrap();
        assert_eq!(VariantSelection::default_for(watch).label(), None);
    }

    #[test]
    fn test_select_validates_options() {
        let catalog = demo_catalog();
        let tee = catalog.product(ProductId::new(1)).unwrap();
        let mut selection = VariantSelection::default_for(tee);

        selection.select_color(tee, "Navy").unwrap();
        selection.select_size(tee, "XL").unwrap();
        assert_eq!(selection.label().as_deref(), Some("Navy / XL"));

        assert!(selection.select_color(tee, "Green").is_err());
        assert!(selection.select_size(tee, "XXXL").is_err());
        assert_eq!(selection.label().as_deref(), Some("Navy / XL"));
    }

    #[test]
    fn test_quantity_picker_floor() {
        let mut qty = QuantityPicker::default();
        qty.decrement();
        assert_eq!(qty.value(), 1);
        qty.increment();
        qty.increment();
        qty.decrement();
        assert_eq!(qty.value(), 2);
    }

    #[test]
    fn test_related_products() {
        let catalog = demo_catalog();
        let tee = catalog.product(ProductId::new(1)).unwrap();
        let related: Vec<u32> = related_products(&catalog, tee, 4)
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(related, vec![2, 3, 5]);

        let limited = related_products(&catalog, tee, 1);
        assert_eq!(limited.len(), 1);
    }
}
