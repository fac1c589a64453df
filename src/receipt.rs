//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, LineItem},
    orders::{OrderConfirmation, PaymentKind, PaymentMethod},
    pricing::Totals,
    tax::{TaxRate, TotalPolicy},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Record of a completed sale, taken before the cart is cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Number the order service assigned
    order_number: u64,

    /// Lines as they were at payment time
    lines: SmallVec<[LineItem; 8]>,

    /// Subtotal, tax and total at payment time
    totals: Totals,

    /// Tax rate the totals were computed with
    tax_rate: TaxRate,

    /// Whether tax was part of the total
    policy: TotalPolicy,

    /// How the sale was paid
    payment: PaymentKind,

    /// Cash handed over, for cash payments
    tendered: Option<Money<'static, Currency>>,

    /// Change handed back
    change: Money<'static, Currency>,
}

impl Receipt {
    /// Snapshot `cart` for an accepted order.
    #[must_use]
    pub fn new(
        confirmation: OrderConfirmation,
        cart: &Cart,
        payment: &PaymentMethod,
        change: Money<'static, Currency>,
    ) -> Self {
        let tax = cart.tax_config();

        Self {
            order_number: confirmation.order_number,
            lines: cart.items().iter().cloned().collect(),
            totals: cart.totals(),
            tax_rate: tax.rate,
            policy: tax.policy,
            payment: payment.kind(),
            tendered: payment.tendered(),
            change,
        }
    }

    /// Order number of the sale
    pub fn order_number(&self) -> u64 {
        self.order_number
    }

    /// Lines sold
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Total cost before tax
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.totals.subtotal
    }

    /// Tax on the subtotal
    pub fn tax(&self) -> Money<'static, Currency> {
        self.totals.tax
    }

    /// Amount charged
    pub fn total(&self) -> Money<'static, Currency> {
        self.totals.total
    }

    /// How the sale was paid
    pub fn payment(&self) -> PaymentKind {
        self.payment
    }

    /// Cash handed over, for cash payments
    pub fn tendered(&self) -> Option<Money<'static, Currency>> {
        self.tendered
    }

    /// Change handed back
    pub fn change(&self) -> Money<'static, Currency> {
        self.change
    }

    /// Prints the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Qty", "Unit Price", "Amount"]);

        for (idx, line) in self.lines.iter().enumerate() {
            let currency = self.totals.subtotal.currency();

            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name().to_string(),
                line.quantity().to_string(),
                format!("{}", line.unit_price().to_money(currency)),
                format!("{}", line.line_total().to_money(currency)),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\nOrder #{}\n{table}", self.order_number)?;

        self.write_summary(&mut out)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let tax_label = match self.policy {
            TotalPolicy::TaxCharged => format!("Tax ({}):", self.tax_rate),
            TotalPolicy::TaxInformational => format!("Tax ({}, not charged):", self.tax_rate),
        };

        let paid_label = match self.payment {
            PaymentKind::Cash => "Cash:",
            PaymentKind::Cashless => "Cashless:",
        };

        let paid = self.tendered.unwrap_or(self.totals.total);

        let rows = [
            ("Subtotal:".to_string(), self.totals.subtotal.to_string()),
            (tax_label, self.totals.tax.to_string()),
            ("Total:".to_string(), self.totals.total.to_string()),
            (paid_label.to_string(), paid.to_string()),
            ("Change:".to_string(), self.change.to_string()),
        ];

        let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let value_width = rows.iter().map(|(_, value)| value.chars().count()).max().unwrap_or(0);

        for (label, value) in &rows {
            writeln!(out, " {label:>label_width$}  {value:>value_width$}")?;
        }

        writeln!(out)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::JPY;
    use testresult::TestResult;

    use crate::{products::Product, tax::TaxConfig};

    use super::*;

    fn cart(policy: TotalPolicy) -> Cart {
        let mut cart = Cart::with_tax(JPY, TaxConfig::new(TaxRate::default(), policy));

        cart.add_item(&Product::new(1, "Coffee", 3990));
        cart.add_item(&Product::new(1, "Coffee", 3990));
        cart.add_item(&Product::new(2, "Tea", 2500));

        cart
    }

    fn confirmation() -> OrderConfirmation {
        OrderConfirmation { order_number: 7 }
    }

    #[test]
    fn snapshot_keeps_lines_and_totals() {
        let cart = cart(TotalPolicy::TaxCharged);

        let receipt = Receipt::new(
            confirmation(),
            &cart,
            &PaymentMethod::Cashless,
            Money::from_minor(0, JPY),
        );

        assert_eq!(receipt.order_number(), 7);
        assert_eq!(receipt.lines(), cart.items());
        assert_eq!(receipt.subtotal(), Money::from_minor(10_480, JPY));
        assert_eq!(receipt.tax(), Money::from_minor(1_048, JPY));
        assert_eq!(receipt.total(), Money::from_minor(11_528, JPY));
        assert_eq!(receipt.payment(), PaymentKind::Cashless);
        assert!(receipt.tendered().is_none());
    }

    #[test]
    fn write_to_renders_lines_and_summary() -> TestResult {
        let cart = cart(TotalPolicy::TaxCharged);
        let payment = PaymentMethod::cash(Money::from_minor(20_000, JPY));

        let receipt = Receipt::new(
            confirmation(),
            &cart,
            &payment,
            Money::from_minor(8_472, JPY),
        );

        let mut out = Vec::new();
        receipt.write_to(&mut out)?;
        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Order #7"), "missing order number");
        assert!(rendered.contains("Coffee"), "missing coffee line");
        assert!(rendered.contains("Tea"), "missing tea line");
        assert!(rendered.contains("Tax (10%):"), "missing tax label");
        assert!(rendered.contains("Cash:"), "missing payment label");
        assert!(
            rendered.contains(&Money::from_minor(11_528, JPY).to_string()),
            "missing total"
        );
        assert!(
            rendered.contains(&Money::from_minor(8_472, JPY).to_string()),
            "missing change"
        );

        Ok(())
    }

    #[test]
    fn write_to_marks_informational_tax() -> TestResult {
        let cart = cart(TotalPolicy::TaxInformational);

        let receipt = Receipt::new(
            confirmation(),
            &cart,
            &PaymentMethod::Cashless,
            Money::from_minor(0, JPY),
        );

        let mut out = Vec::new();
        receipt.write_to(&mut out)?;
        let rendered = String::from_utf8(out)?;

        assert!(
            rendered.contains("not charged"),
            "informational tax should be marked"
        );
        assert!(rendered.contains("Cashless:"), "missing payment label");

        Ok(())
    }
}
