//! Catalog
//!
//! Read side of the product catalog. Carts only ever need `{id, name, price}`
//! for a product, so that is all the [`Catalog`] trait exposes.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A product with the same id is already present.
    #[error("Product {0} is already in the catalog")]
    DuplicateProduct(ProductId),
}

/// Product lookup used by the product grid to add items to a cart.
pub trait Catalog {
    /// Currency all product prices are denominated in.
    fn currency(&self) -> &'static Currency;

    /// Look up a product by id.
    fn product(&self, id: ProductId) -> Option<&Product>;

    /// Iterate over all products.
    fn products(&self) -> impl Iterator<Item = &Product>;
}

/// Insertion ordered, in-memory catalog.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl InMemoryCatalog {
    /// Create an empty catalog priced in `currency`.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: Vec::new(),
            index: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog from a list of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an id.
    pub fn with_products(
        products: impl IntoIterator<Item = Product>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        for product in products {
            catalog.insert(product)?;
        }

        Ok(catalog)
    }

    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if the id is already taken.
    pub fn insert(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.index.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        self.index.insert(product.id, self.products.len());
        self.products.push(product);

        Ok(())
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn product(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|position| self.products.get(*position))
    }

    fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}
