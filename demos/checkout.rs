//! Checkout Example
//!
//! Rings up a fixture set into a cart, pays for it and prints the receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-n` to specify the number of items to ring up
//! Use `-c` to pay cash with the given amount in minor units (cashless otherwise)
//! Use `-s` to load settings from a YAML file
//! Use `--reject` to have the order refused
//! Use `--log-format json` for structured logs (filter with `RUST_LOG`)

use std::io;

use anyhow::Result;
use clap::Parser;
use rusty_money::Money;
use tracing_subscriber::EnvFilter;

use till::{
    checkout::checkout,
    fixtures::Fixture,
    orders::{LocalOrderBook, PaymentMethod},
    settings::Settings,
    utils::{ExampleCheckoutArgs, LogFormat},
};

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().with_current_span(true).init(),
    }
}

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleCheckoutArgs::parse();

    init_logging(args.log_format);

    let settings = match args.settings.as_deref() {
        Some(path) => Settings::from_path(path)?,
        None => Settings::default(),
    };

    let fixture = Fixture::from_set(&args.fixture)?;
    let mut cart = fixture.cart(args.n, &settings)?;

    let payment = match args.cash {
        Some(amount) => PaymentMethod::cash(Money::from_minor(amount, settings.currency)),
        None => PaymentMethod::Cashless,
    };

    let mut orders = if args.reject {
        LocalOrderBook::rejecting("refused by --reject")
    } else {
        LocalOrderBook::new()
    };

    let receipt = checkout(&mut cart, payment, &mut orders)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    println!("Orders recorded: {}", orders.len());

    Ok(())
}
