//! Fixtures
//!
//! YAML product catalogs and rung-up item lists, used by the demo and tests.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::{Catalog, CatalogError, InMemoryCatalog},
    fixtures::{items::ItemsFixture, products::ProductsFixture},
    products::{Product, ProductId},
    settings::Settings,
};

pub mod items;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products, or between products and settings
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// No items loaded
    #[error("No items loaded; cannot ring up a cart")]
    NoItems,

    /// Not enough items in fixture
    #[error("Not enough items in fixture, available: {available}, requested: {requested}")]
    NotEnoughItems {
        /// Number of items defined in the fixture
        available: usize,
        /// Number of items requested
        requested: usize,
    },

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products loaded so far
    catalog: Option<InMemoryCatalog>,

    /// String key -> product id mappings for lookups
    product_keys: FxHashMap<String, ProductId>,

    /// Products to ring up, in order
    items: Vec<ProductId>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            product_keys: FxHashMap::default(),
            items: Vec::new(),
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if there are
    /// currency mismatches, or if two products share an id.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        let mut products = fixture.products.into_iter().collect::<Vec<_>>();
        products.sort_by_key(|(_, product)| product.id);

        for (key, product_fixture) in products {
            let (product, currency) = product_fixture.into_product()?;

            let catalog = self
                .catalog
                .get_or_insert_with(|| InMemoryCatalog::new(currency));

            if catalog.currency() != currency {
                return Err(FixtureError::CurrencyMismatch(
                    catalog.currency().iso_alpha_code.to_string(),
                    currency.iso_alpha_code.to_string(),
                ));
            }

            self.product_keys.insert(key, product.id);
            catalog.insert(product)?;
        }

        Ok(self)
    }

    /// Load items from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if referenced products don't exist.
    pub fn load_items(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("items").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ItemsFixture = serde_norway::from_str(&contents)?;

        for product_key in fixture.items {
            let id = self.product_id(&product_key)?;

            self.items.push(id);
        }

        Ok(self)
    }

    /// Load a complete fixture set (products and items with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_items(name)?;

        Ok(fixture)
    }

    /// Get the loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn catalog(&self) -> Result<&InMemoryCatalog, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NoCurrency)
    }

    /// Get a product by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product, FixtureError> {
        let id = self.product_id(key)?;

        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.product(id))
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Get a product id by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product_id(&self, key: &str) -> Result<ProductId, FixtureError> {
        self.product_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Get all items
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    /// Ring up the first `n` items (all items if `None`) into a new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if no items are loaded, if more items are requested than
    /// exist, or if the settings currency differs from the catalog currency.
    pub fn cart(&self, n: Option<usize>, settings: &Settings) -> Result<Cart, FixtureError> {
        let catalog = self.catalog()?;

        if catalog.currency() != settings.currency {
            return Err(FixtureError::CurrencyMismatch(
                settings.currency.iso_alpha_code.to_string(),
                catalog.currency().iso_alpha_code.to_string(),
            ));
        }

        if self.items.is_empty() {
            return Err(FixtureError::NoItems);
        }

        let requested = n.unwrap_or(self.items.len());

        if requested > self.items.len() {
            return Err(FixtureError::NotEnoughItems {
                requested,
                available: self.items.len(),
            });
        }

        let mut cart = settings.open_cart();

        for id in self.items.iter().take(requested) {
            let product = catalog
                .product(*id)
                .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))?;

            cart.add_item(product);
        }

        Ok(cart)
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        Ok(self.catalog()?.currency())
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
