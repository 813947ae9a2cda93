//! Catalog product entity

use crate::ids::ProductId;
use crate::money::Money;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A catalog product
///
/// The host catalog owns far more than this; the pipeline only needs an
/// identity, a display name, a base price, and the string metadata map the
/// custom field title lives in. Metadata preserves insertion order so
/// admin renders are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    meta: IndexMap<String, String>,
}

impl Product {
    /// Create a product with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            price,
            meta: IndexMap::new(),
        }
    }

    /// Product identifier
    #[inline]
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current base price
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Replace the base price
    #[inline]
    pub fn set_price(&mut self, price: Money) {
        self.price = price;
    }

    /// Metadata value under `key`, if one was ever stored
    ///
    /// An empty stored string is a present value, not an absence.
    #[inline]
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// Store a metadata value, overwriting any previous one
    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.meta.insert(key.into(), value.into());
    }

    /// Attach a metadata entry (builder form)
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_meta(key, value);
        self
    }
}
