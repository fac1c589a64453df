//! Prices

use std::ops::Deref;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Represents a price in minor units of the cart currency.
///
/// For currencies without subdivision (e.g. JPY) a minor unit is a whole unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Zero price.
    pub const ZERO: Price = Price { value: 0 };

    /// Creates a new Price
    pub fn new(value: u64) -> Self {
        Price { value }
    }

    /// Price of `quantity` units, saturating at the largest representable amount.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Price::new(self.value.saturating_mul(u64::from(quantity)))
    }

    /// Sum of two prices, saturating at the largest representable amount.
    #[must_use]
    pub fn plus(self, other: Price) -> Self {
        Price::new(self.value.saturating_add(other.value))
    }

    /// Minor units as a signed amount, clamped to `i64::MAX`.
    pub fn to_minor_units(self) -> i64 {
        i64::try_from(self.value).unwrap_or(i64::MAX)
    }

    /// Converts the price into money of the given currency.
    pub fn to_money(self, currency: &'static Currency) -> Money<'static, Currency> {
        Money::from_minor(self.to_minor_units(), currency)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price::new(value)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::plus)
    }
}
