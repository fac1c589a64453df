//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartState, LineItem},
    catalog::{Catalog, CatalogError, InMemoryCatalog},
    checkout::{CheckoutError, checkout},
    orders::{
        LocalOrderBook, OrderConfirmation, OrderLine, OrderRequest, OrderSubmitter,
        PaymentError, PaymentKind, PaymentMethod, SubmitError,
    },
    prices::Price,
    pricing::Totals,
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError},
    settings::{Settings, SettingsError},
    tax::{TaxConfig, TaxError, TaxRate, TotalPolicy},
};
