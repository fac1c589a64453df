//! Orders
//!
//! The create-order request built from a cart, and the seam to whatever
//! accepts it.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{cart::Cart, products::ProductId};

pub mod payment;

pub use payment::{PaymentError, PaymentKind, PaymentMethod};

/// Errors returned by an order submitter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    /// The order was received and refused (e.g. failed validation).
    #[error("order rejected: {0}")]
    Rejected(String),

    /// The order could not be delivered.
    #[error("order service unavailable: {0}")]
    Unavailable(String),
}

/// One product and quantity on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// Product ordered
    pub product_id: ProductId,

    /// Units ordered
    pub quantity: u32,
}

/// Create-order request. Amounts are in minor units of `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// Ordered lines, in cart order
    pub lines: Vec<OrderLine>,

    /// How the order is paid
    pub payment: PaymentKind,

    /// Cash handed over, for cash payments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_tendered: Option<i64>,

    /// Subtotal before tax
    pub subtotal: i64,

    /// Tax on the subtotal
    pub tax: i64,

    /// Amount charged
    pub total: i64,

    /// ISO currency code
    pub currency: &'static str,
}

impl OrderRequest {
    /// Build an order for the current contents of `cart`.
    pub fn from_cart(cart: &Cart, payment: &PaymentMethod) -> Self {
        let totals = cart.totals();

        let lines = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                product_id: item.product_id(),
                quantity: item.quantity(),
            })
            .collect();

        Self {
            lines,
            payment: payment.kind(),
            cash_tendered: payment.tendered().map(|cash| cash.to_minor_units()),
            subtotal: totals.subtotal.to_minor_units(),
            tax: totals.tax.to_minor_units(),
            total: totals.total.to_minor_units(),
            currency: cart.currency().iso_alpha_code,
        }
    }
}

/// Acknowledgement of an accepted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Number assigned to the order
    pub order_number: u64,
}

/// Accepts create-order requests.
#[cfg_attr(test, mockall::automock)]
pub trait OrderSubmitter {
    /// Submit an order.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the order was not accepted.
    fn submit(&mut self, order: &OrderRequest) -> Result<OrderConfirmation, SubmitError>;
}

/// In-memory order book that numbers orders sequentially.
#[derive(Debug, Default)]
pub struct LocalOrderBook {
    accepted: Vec<(OrderConfirmation, OrderRequest)>,
    rejection: Option<String>,
}

impl LocalOrderBook {
    /// Create an empty order book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every order with `reason`.
    #[must_use]
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            accepted: Vec::new(),
            rejection: Some(reason.into()),
        }
    }

    /// Orders accepted so far.
    pub fn orders(&self) -> impl Iterator<Item = &(OrderConfirmation, OrderRequest)> {
        self.accepted.iter()
    }

    /// Number of accepted orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    /// Check if no orders were accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

impl OrderSubmitter for LocalOrderBook {
    fn submit(&mut self, order: &OrderRequest) -> Result<OrderConfirmation, SubmitError> {
        if let Some(reason) = &self.rejection {
            return Err(SubmitError::Rejected(reason.clone()));
        }

        if order.lines.is_empty() {
            return Err(SubmitError::Rejected("order has no lines".to_string()));
        }

        let order_number = u64::try_from(self.accepted.len())
            .unwrap_or(u64::MAX)
            .saturating_add(1);

        let confirmation = OrderConfirmation { order_number };

        debug!(order_number, lines = order.lines.len(), "recorded order");

        self.accepted.push((confirmation, order.clone()));

        Ok(confirmation)
    }
}
