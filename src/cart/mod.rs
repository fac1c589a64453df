//! Cart
//!
//! The line items of one in-progress sale. A [`Cart`] is owned by whoever runs
//! the sale session and handed to views by reference; all mutations go through
//! its methods so product ids stay unique and quantities stay at or above 1.

use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::{
    pricing::Totals,
    products::{Product, ProductId},
    tax::{TaxConfig, TaxRate},
};

mod line_item;

pub use line_item::LineItem;

/// Whether the cart holds anything; payment and "clear all" need `NonEmpty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    /// No line items
    Empty,

    /// At least one line item
    NonEmpty,
}

/// Cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: &'static Currency,
    tax: TaxConfig,
}

impl Cart {
    /// Create an empty cart with the default tax configuration.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self::with_tax(currency, TaxConfig::default())
    }

    /// Create an empty cart with the given tax configuration.
    #[must_use]
    pub fn with_tax(currency: &'static Currency, tax: TaxConfig) -> Self {
        Cart {
            items: Vec::new(),
            currency,
            tax,
        }
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the same product has its quantity bumped; otherwise
    /// a new line is appended. Returns the line's quantity afterwards.
    pub fn add_item(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.find_mut(product.id) {
            item.increment();

            let quantity = item.quantity();
            debug!(product_id = %product.id, quantity, "incremented cart line");

            return quantity;
        }

        self.items.push(LineItem::from_product(product));
        debug!(product_id = %product.id, lines = self.items.len(), "added cart line");

        1
    }

    /// Move the quantity of a line by `delta`, never below 1.
    ///
    /// Returns the new quantity, or `None` (and does nothing) if the product is
    /// not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> Option<u32> {
        let item = self.find_mut(product_id)?;
        item.adjust(delta);

        let quantity = item.quantity();
        debug!(%product_id, delta, quantity, "updated cart line quantity");

        Some(quantity)
    }

    /// Set the quantity of a line; zero or less removes the line.
    ///
    /// Returns the quantity left in the cart, or `None` if the line was removed
    /// or never present.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> Option<u32> {
        let Ok(quantity) = u32::try_from(quantity.min(i64::from(u32::MAX))) else {
            self.remove_item(product_id);
            return None;
        };

        if quantity == 0 {
            self.remove_item(product_id);
            return None;
        }

        let item = self.find_mut(product_id)?;
        item.set_quantity(quantity);
        debug!(%product_id, quantity, "set cart line quantity");

        Some(quantity)
    }

    /// Remove the line for `product_id` regardless of quantity.
    pub fn remove_item(&mut self, product_id: ProductId) -> Option<LineItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.product_id() == product_id)?;

        let removed = self.items.remove(position);
        debug!(%product_id, lines = self.items.len(), "removed cart line");

        Some(removed)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "cleared cart");

        self.items.clear();
    }

    /// Sum of unit price times quantity over all lines.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.totals().subtotal
    }

    /// Tax on the subtotal at the cart's configured rate.
    pub fn tax(&self) -> Money<'static, Currency> {
        self.totals().tax
    }

    /// Tax on the subtotal at an explicit rate.
    pub fn tax_at(&self, rate: TaxRate) -> Money<'static, Currency> {
        let tax = TaxConfig::new(rate, self.tax.policy);

        Totals::compute(&self.items, self.currency, tax).tax
    }

    /// Amount due under the cart's total policy.
    pub fn total(&self) -> Money<'static, Currency> {
        self.totals().total
    }

    /// Subtotal, tax and total in one read.
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.items, self.currency, self.tax)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|item| item.product_id() == product_id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Current state of the cart.
    pub fn state(&self) -> CartState {
        if self.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Get the tax configuration of the cart.
    #[must_use]
    pub fn tax_config(&self) -> TaxConfig {
        self.tax
    }

    fn find_mut(&mut self, product_id: ProductId) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id() == product_id)
    }
}
