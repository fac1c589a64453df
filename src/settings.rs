//! Settings
//!
//! Till configuration: the currency prices are denominated in and how tax is
//! charged. Loaded from YAML:
//!
//! ```yaml
//! currency: JPY
//! tax_rate: 10%
//! total_policy: tax_charged
//! ```

use std::{fs, path::Path};

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, IDR, JPY, USD};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::Cart,
    tax::{TaxConfig, TaxError, TaxRate, TotalPolicy},
};

/// Settings Errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// IO error reading the settings file
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Invalid tax rate format
    #[error("Invalid tax rate: {0}")]
    InvalidRate(String),

    /// Tax rate outside the accepted range
    #[error(transparent)]
    Tax(#[from] TaxError),
}

/// Settings as written in YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    currency: Option<String>,
    tax_rate: Option<String>,
    #[serde(default)]
    total_policy: TotalPolicy,
}

/// Till settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Currency prices are denominated in
    pub currency: &'static Currency,

    /// Tax rate and total policy for new carts
    pub tax: TaxConfig,
}

impl Settings {
    /// Parse settings from a YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, the currency is unknown or the
    /// tax rate is invalid.
    pub fn from_yaml_str(contents: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = serde_norway::from_str(contents)?;

        let currency = match file.currency.as_deref() {
            Some(code) => parse_currency(code)
                .ok_or_else(|| SettingsError::UnknownCurrency(code.to_string()))?,
            None => JPY,
        };

        let rate = match file.tax_rate.as_deref() {
            Some(rate) => TaxRate::from_fraction(parse_rate(rate)?)?,
            None => TaxRate::default(),
        };

        Ok(Self {
            currency,
            tax: TaxConfig::new(rate, file.total_policy),
        })
    }

    /// Load settings from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let settings = Self::from_yaml_str(&contents)?;

        debug!(
            path = %path.display(),
            currency = settings.currency.iso_alpha_code,
            tax_rate = %settings.tax.rate,
            "loaded settings"
        );

        Ok(settings)
    }

    /// Open an empty cart for a new sale session.
    #[must_use]
    pub fn open_cart(&self) -> Cart {
        Cart::with_tax(self.currency, self.tax)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: JPY,
            tax: TaxConfig::default(),
        }
    }
}

/// Look up a supported currency by ISO code.
pub fn parse_currency(code: &str) -> Option<&'static Currency> {
    match code.trim() {
        "GBP" => Some(GBP),
        "USD" => Some(USD),
        "EUR" => Some(EUR),
        "JPY" => Some(JPY),
        "IDR" => Some(IDR),
        _ => None,
    }
}

/// Parse a rate string (e.g., "10%" or "0.1") into a decimal fraction
///
/// # Errors
///
/// Returns [`SettingsError::InvalidRate`] if the string is not a number.
pub fn parse_rate(s: &str) -> Result<Decimal, SettingsError> {
    let trimmed = s.trim();

    if let Some(points) = trimmed.strip_suffix('%') {
        let points = points
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| SettingsError::InvalidRate(s.to_string()))?;

        Ok(points / Decimal::ONE_HUNDRED)
    } else {
        trimmed
            .parse::<Decimal>()
            .map_err(|_err| SettingsError::InvalidRate(s.to_string()))
    }
}
