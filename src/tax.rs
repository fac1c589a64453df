//! Tax
//!
//! A cart charges tax at a single flat rate on its subtotal. Whether that tax is
//! added to the amount due is decided by the [`TotalPolicy`].

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Deserialize;
use thiserror::Error;

/// Errors specific to tax configuration.
#[derive(Debug, Error, PartialEq)]
pub enum TaxError {
    /// The rate is negative or above 100%.
    #[error("tax rate {0} is outside 0%..=100%")]
    OutOfRange(Decimal),
}

/// Flat tax rate, stored as a fraction (`0.10` is 10%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxRate {
    percent: Percentage,
}

impl TaxRate {
    /// Create a tax rate from a fractional percentage.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::OutOfRange`] if the rate is below 0 or above 1.
    pub fn new(percent: Percentage) -> Result<Self, TaxError> {
        let fraction = percent * Decimal::ONE;

        if fraction.is_sign_negative() || fraction > Decimal::ONE {
            return Err(TaxError::OutOfRange(fraction));
        }

        Ok(Self { percent })
    }

    /// Create a tax rate from a decimal fraction.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::OutOfRange`] if the rate is below 0 or above 1.
    pub fn from_fraction(fraction: Decimal) -> Result<Self, TaxError> {
        Self::new(Percentage::from(fraction))
    }

    /// A zero rate.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            percent: Percentage::from(Decimal::ZERO),
        }
    }

    /// Rate as a decimal fraction.
    pub fn fraction(&self) -> Decimal {
        // decimal_percentage doesn't expose the underlying Decimal
        self.percent * Decimal::ONE
    }

    /// Tax owed on an amount of minor units, rounded to the nearest minor unit
    /// with midpoints rounded away from zero.
    pub fn apply(&self, minor: i64) -> i64 {
        self.fraction()
            .checked_mul(Decimal::from(minor))
            .map(|applied| {
                applied.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            })
            .and_then(|rounded| rounded.to_i64())
            .unwrap_or(i64::MAX)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self {
            percent: Percentage::from(Decimal::new(10, 2)),
        }
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points = (self.fraction() * Decimal::ONE_HUNDRED).normalize();

        write!(f, "{points}%")
    }
}

/// Whether tax is added on top of the subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalPolicy {
    /// `total = subtotal + tax`
    #[default]
    TaxCharged,

    /// `total = subtotal`; tax is computed for display only.
    TaxInformational,
}

/// Tax rate and total policy for a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaxConfig {
    /// Rate applied to the subtotal
    pub rate: TaxRate,

    /// Whether the tax is part of the amount due
    pub policy: TotalPolicy,
}

impl TaxConfig {
    /// Create a tax configuration
    pub fn new(rate: TaxRate, policy: TotalPolicy) -> Self {
        Self { rate, policy }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_rate_is_ten_percent() {
        assert_eq!(TaxRate::default().fraction(), Decimal::new(1, 1));
    }

    #[test]
    fn apply_rounds_to_nearest_minor_unit() {
        let rate = TaxRate::default();

        assert_eq!(rate.apply(65_000), 6_500);
        assert_eq!(rate.apply(10_480), 1_048);
        assert_eq!(rate.apply(14), 1);
        assert_eq!(rate.apply(16), 2);
    }

    #[test]
    fn apply_rounds_midpoints_away_from_zero() {
        let rate = TaxRate::default();

        assert_eq!(rate.apply(5), 1);
        assert_eq!(rate.apply(15), 2);
        assert_eq!(rate.apply(25), 3);
    }

    #[test]
    fn apply_on_zero_is_zero() {
        assert_eq!(TaxRate::default().apply(0), 0);
        assert_eq!(TaxRate::zero().apply(1_000), 0);
    }

    #[test]
    fn full_rate_on_max_does_not_overflow() -> TestResult {
        let rate = TaxRate::from_fraction(Decimal::ONE)?;

        assert_eq!(rate.apply(i64::MAX), i64::MAX);

        Ok(())
    }

    #[test]
    fn rate_above_one_is_rejected() {
        let result = TaxRate::from_fraction(Decimal::new(11, 1));

        assert_eq!(result, Err(TaxError::OutOfRange(Decimal::new(11, 1))));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let result = TaxRate::from_fraction(Decimal::new(-1, 2));

        assert!(matches!(result, Err(TaxError::OutOfRange(_))));
    }

    #[test]
    fn display_in_percent_points() -> TestResult {
        assert_eq!(TaxRate::default().to_string(), "10%");
        assert_eq!(
            TaxRate::from_fraction(Decimal::new(125, 3))?.to_string(),
            "12.5%"
        );

        Ok(())
    }

    #[test]
    fn policy_defaults_to_tax_charged() {
        assert_eq!(TaxConfig::default().policy, TotalPolicy::TaxCharged);
    }
}
