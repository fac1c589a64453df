//! Pricing
//!
//! The one place subtotal, tax and total are defined. Carts, order requests and
//! receipts all read their amounts from [`Totals`].

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::LineItem,
    prices::Price,
    tax::{TaxConfig, TaxRate, TotalPolicy},
};

/// Calculates the sum of unit price times quantity over a list of line items
pub fn subtotal(items: &[LineItem]) -> Price {
    items.iter().map(LineItem::line_total).sum()
}

/// Derived amounts for a set of line items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of line totals, before tax
    pub subtotal: Money<'static, Currency>,

    /// Tax on the subtotal, rounded to the nearest minor unit
    pub tax: Money<'static, Currency>,

    /// Amount due under the configured [`TotalPolicy`]
    pub total: Money<'static, Currency>,
}

impl Totals {
    /// Compute totals for `items` priced in `currency`.
    pub fn compute(items: &[LineItem], currency: &'static Currency, tax: TaxConfig) -> Self {
        let subtotal = subtotal(items).to_minor_units();
        let tax_minor = tax_on(subtotal, tax.rate);

        let total = match tax.policy {
            TotalPolicy::TaxCharged => subtotal.saturating_add(tax_minor),
            TotalPolicy::TaxInformational => subtotal,
        };

        Self {
            subtotal: Money::from_minor(subtotal, currency),
            tax: Money::from_minor(tax_minor, currency),
            total: Money::from_minor(total, currency),
        }
    }
}

/// Tax owed on a subtotal in minor units.
pub fn tax_on(subtotal: i64, rate: TaxRate) -> i64 {
    rate.apply(subtotal)
}
