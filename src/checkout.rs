//! Checkout
//!
//! Turns the current cart into a submitted order. The cart is cleared only
//! once the order is accepted; any failure leaves it exactly as it was so the
//! cashier can retry.

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    cart::{Cart, CartState},
    orders::{OrderRequest, OrderSubmitter, PaymentError, PaymentMethod, SubmitError},
    receipt::Receipt,
};

/// Errors that can occur at checkout.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// Nothing to pay for.
    #[error("cart is empty")]
    EmptyCart,

    /// Payment does not cover the amount due.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Order service refused or could not be reached.
    #[error(transparent)]
    Submission(#[from] SubmitError),
}

/// Pay for and submit the contents of `cart`.
///
/// On success the cart is cleared and a [`Receipt`] of the sale is returned.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`]: the cart has no lines.
/// - [`CheckoutError::Payment`]: the payment does not cover the total.
/// - [`CheckoutError::Submission`]: the order was not accepted.
pub fn checkout<S>(
    cart: &mut Cart,
    payment: PaymentMethod,
    submitter: &mut S,
) -> Result<Receipt, CheckoutError>
where
    S: OrderSubmitter + ?Sized,
{
    if cart.state() == CartState::Empty {
        return Err(CheckoutError::EmptyCart);
    }

    let total = cart.total();

    let change = payment.change_due(total).inspect_err(|err| {
        warn!(error = %err, total = %total, "payment refused");
    })?;

    let order = OrderRequest::from_cart(cart, &payment);

    let confirmation = submitter.submit(&order).inspect_err(|err| {
        warn!(error = %err, lines = order.lines.len(), "order submission failed");
    })?;

    let receipt = Receipt::new(confirmation, cart, &payment, change);

    info!(
        order_number = confirmation.order_number,
        total = %total,
        change = %change,
        "checkout complete"
    );

    cart.clear();

    Ok(receipt)
}
