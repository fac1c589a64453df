//! Line Items

use crate::{
    prices::Price,
    products::{Product, ProductId},
};

/// One product and its requested quantity within a cart.
///
/// Name and unit price are copied from the catalog when the item is added;
/// the cart never re-reads live prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    product_id: ProductId,
    name: String,
    unit_price: Price,
    quantity: u32,
}

impl LineItem {
    /// Creates a line item for a single unit of `product`.
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Returns the product id, which is also the line's identity in the cart.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the product name captured when the item was added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price captured when the item was added.
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns the quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Moves the quantity by `delta`, never below 1.
    pub(crate) fn adjust(&mut self, delta: i64) {
        let adjusted = i64::from(self.quantity).saturating_add(delta).max(1);

        self.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);
    }

    /// Sets an absolute quantity; callers remove the line instead of passing 0.
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!(quantity >= 1, "line item quantity must be at least 1");

        self.quantity = quantity.max(1);
    }
}
