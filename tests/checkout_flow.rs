//! Integration tests for a full sale: ring up a fixture set, pay, submit and
//! print the receipt.

use rusty_money::{
    Money,
    iso::{GBP, JPY},
};
use testresult::TestResult;

use till::{
    checkout::{CheckoutError, checkout},
    fixtures::Fixture,
    orders::{LocalOrderBook, PaymentKind, PaymentMethod, SubmitError},
    products::ProductId,
    settings::Settings,
    tax::TotalPolicy,
};

#[test]
fn cash_sale_from_cafe_fixture() -> TestResult {
    let fixture = Fixture::from_set("cafe")?;
    let settings = Settings::from_path("fixtures/settings/cafe.yml")?;

    let mut cart = fixture.cart(None, &settings)?;
    let mut orders = LocalOrderBook::new();

    let receipt = checkout(
        &mut cart,
        PaymentMethod::cash(Money::from_minor(12_000, JPY)),
        &mut orders,
    )?;

    assert!(cart.is_empty());
    assert_eq!(receipt.order_number(), 1);
    assert_eq!(receipt.total(), Money::from_minor(11_528, JPY));
    assert_eq!(receipt.change(), Money::from_minor(472, JPY));

    let (_, order) = orders.orders().next().ok_or("order should be recorded")?;

    assert_eq!(order.payment, PaymentKind::Cash);
    assert_eq!(order.cash_tendered, Some(12_000));
    assert_eq!(order.total, 11_528);
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines.first().map(|line| line.product_id), Some(ProductId::new(1)));

    let mut out = Vec::new();
    receipt.write_to(&mut out)?;
    let rendered = String::from_utf8(out)?;

    assert!(rendered.contains("Order #1"), "unexpected receipt: {rendered}");
    assert!(rendered.contains("Tea"), "unexpected receipt: {rendered}");

    Ok(())
}

#[test]
fn orders_are_numbered_across_sales() -> TestResult {
    let fixture = Fixture::from_set("cafe")?;
    let settings = Settings::default();
    let mut orders = LocalOrderBook::new();

    for expected in 1..=3 {
        let mut cart = fixture.cart(Some(2), &settings)?;

        let receipt = checkout(&mut cart, PaymentMethod::Cashless, &mut orders)?;

        assert_eq!(receipt.order_number(), expected);
    }

    assert_eq!(orders.len(), 3);

    Ok(())
}

#[test]
fn rejected_sale_keeps_the_cart() -> TestResult {
    let fixture = Fixture::from_set("cafe")?;
    let mut cart = fixture.cart(None, &Settings::default())?;
    let before = cart.clone();
    let mut orders = LocalOrderBook::rejecting("till closed");

    let result = checkout(&mut cart, PaymentMethod::Cashless, &mut orders);

    assert_eq!(
        result.err(),
        Some(CheckoutError::Submission(SubmitError::Rejected(
            "till closed".to_string()
        )))
    );
    assert_eq!(cart, before);
    assert!(orders.is_empty());

    Ok(())
}

#[test]
fn informational_tax_is_not_charged() -> TestResult {
    let fixture = Fixture::from_set("bakery")?;
    let settings = Settings::from_path("fixtures/settings/bakery.yml")?;

    assert_eq!(settings.tax.policy, TotalPolicy::TaxInformational);

    let mut cart = fixture.cart(None, &settings)?;

    // 420 + 3 x 275 + 185
    assert_eq!(cart.subtotal(), Money::from_minor(1_430, GBP));
    assert_eq!(cart.tax(), Money::from_minor(286, GBP));
    assert_eq!(cart.total(), Money::from_minor(1_430, GBP));

    let mut orders = LocalOrderBook::new();
    let receipt = checkout(
        &mut cart,
        PaymentMethod::cash(Money::from_minor(2_000, GBP)),
        &mut orders,
    )?;

    assert_eq!(receipt.change(), Money::from_minor(570, GBP));

    Ok(())
}

#[test]
fn fixture_in_other_currency_does_not_open_a_cart() -> TestResult {
    let fixture = Fixture::from_set("bakery")?;

    assert!(fixture.cart(None, &Settings::default()).is_err());

    Ok(())
}
