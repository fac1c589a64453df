//! Till
//!
//! Till is the cart engine behind a point-of-sale screen: it holds the lines a
//! cashier rings up, prices them with tax, and hands the result to checkout.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod settings;
pub mod tax;
pub mod utils;
