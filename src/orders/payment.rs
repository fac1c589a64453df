//! Payment

use rusty_money::{Money, iso::Currency};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while validating a payment against the amount due.
#[derive(Debug, Error, PartialEq)]
pub enum PaymentError {
    /// Cash handed over does not cover the amount due (tendered, due).
    #[error("cash tendered {0} does not cover amount due {1}")]
    InsufficientCash(String, String),

    /// Cash tendered in a different currency than the cart (tendered, cart).
    #[error("cash tendered in {0}, but the cart is priced in {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentMethod {
    /// Cash, with the amount handed over at the till.
    Cash {
        /// Amount handed over
        tendered: Money<'static, Currency>,
    },

    /// Card or other cashless payment for the exact amount due.
    Cashless,
}

/// Payment method without amounts, as sent with an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// Cash payment
    Cash,

    /// Cashless payment
    Cashless,
}

impl PaymentMethod {
    /// Cash payment of `tendered`.
    pub fn cash(tendered: Money<'static, Currency>) -> Self {
        Self::Cash { tendered }
    }

    /// Payment method without amounts.
    pub fn kind(&self) -> PaymentKind {
        match self {
            Self::Cash { .. } => PaymentKind::Cash,
            Self::Cashless => PaymentKind::Cashless,
        }
    }

    /// Cash tendered, if paying in cash.
    pub fn tendered(&self) -> Option<Money<'static, Currency>> {
        match self {
            Self::Cash { tendered } => Some(*tendered),
            Self::Cashless => None,
        }
    }

    /// Change owed to the customer for an amount due of `total`.
    ///
    /// # Errors
    ///
    /// - [`PaymentError::CurrencyMismatch`]: cash is in a different currency than `total`.
    /// - [`PaymentError::InsufficientCash`]: cash does not cover `total`.
    pub fn change_due(
        &self,
        total: Money<'static, Currency>,
    ) -> Result<Money<'static, Currency>, PaymentError> {
        let currency = total.currency();

        let Self::Cash { tendered } = self else {
            return Ok(Money::from_minor(0, currency));
        };

        if tendered.currency() != currency {
            return Err(PaymentError::CurrencyMismatch(
                tendered.currency().iso_alpha_code,
                currency.iso_alpha_code,
            ));
        }

        let change = tendered
            .to_minor_units()
            .saturating_sub(total.to_minor_units());

        if change < 0 {
            return Err(PaymentError::InsufficientCash(
                tendered.to_string(),
                total.to_string(),
            ));
        }

        Ok(Money::from_minor(change, currency))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{JPY, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cash_change_is_tendered_minus_total() -> TestResult {
        let payment = PaymentMethod::cash(Money::from_minor(20_000, JPY));

        let change = payment.change_due(Money::from_minor(11_528, JPY))?;

        assert_eq!(change, Money::from_minor(8_472, JPY));

        Ok(())
    }

    #[test]
    fn exact_cash_gives_no_change() -> TestResult {
        let payment = PaymentMethod::cash(Money::from_minor(11_528, JPY));

        assert_eq!(
            payment.change_due(Money::from_minor(11_528, JPY))?,
            Money::from_minor(0, JPY)
        );

        Ok(())
    }

    #[test]
    fn short_cash_is_rejected() {
        let payment = PaymentMethod::cash(Money::from_minor(10_000, JPY));

        let result = payment.change_due(Money::from_minor(11_528, JPY));

        assert!(matches!(result, Err(PaymentError::InsufficientCash(_, _))));
    }

    #[test]
    fn foreign_cash_is_rejected() {
        let payment = PaymentMethod::cash(Money::from_minor(10_000, USD));

        let result = payment.change_due(Money::from_minor(100, JPY));

        assert_eq!(
            result,
            Err(PaymentError::CurrencyMismatch(
                USD.iso_alpha_code,
                JPY.iso_alpha_code
            ))
        );
    }

    #[test]
    fn cashless_has_no_change() -> TestResult {
        let change = PaymentMethod::Cashless.change_due(Money::from_minor(500, JPY))?;

        assert_eq!(change, Money::from_minor(0, JPY));
        assert_eq!(PaymentMethod::Cashless.kind(), PaymentKind::Cashless);
        assert!(PaymentMethod::Cashless.tendered().is_none());

        Ok(())
    }
}
