//! Testing utilities for the cartouche workspace
//!
//! In-memory implementations of the store seams plus common fixtures.

#![allow(missing_docs)]

use cartouche_core::{Notice, NoticeSeverity, NoticeSink, PersonalizationFlow, ProductStore, StoreError};
use cartouche_model::{FieldDefinition, Money, Product, ProductId, Submission};
use indexmap::IndexMap;

/// In-memory product catalog
///
/// Insertion-ordered so fixtures iterate deterministically. Persist calls
/// are counted per product, which lets tests assert the write-then-save
/// contract.
#[derive(Debug, Default)]
pub struct MemoryProducts {
    products: IndexMap<ProductId, Product>,
    persist_calls: Vec<ProductId>,
}

impl MemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product, returning its id
    pub fn insert(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.insert(id, product);
        id
    }

    /// Products persisted so far, in call order
    pub fn persist_calls(&self) -> &[ProductId] {
        &self.persist_calls
    }
}

impl ProductStore for MemoryProducts {
    fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    fn persist(&mut self, id: ProductId) -> Result<(), StoreError> {
        if !self.products.contains_key(&id) {
            return Err(StoreError::PersistFailed {
                product_id: id,
                reason: "product not in catalog".to_owned(),
            });
        }
        self.persist_calls.push(id);
        Ok(())
    }
}

/// Notice channel that records everything pushed to it
#[derive(Debug, Default)]
pub struct RecordingNotices {
    notices: Vec<Notice>,
}

impl RecordingNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Messages of recorded error notices, in push order
    pub fn error_messages(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|n| n.severity == NoticeSeverity::Error)
            .map(|n| n.message.as_str())
            .collect()
    }
}

impl NoticeSink for RecordingNotices {
    fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// A mug with a base price of 500 minor units
pub fn mug() -> Product {
    Product::new("Engraved Mug", Money::from_minor(500))
}

/// A mug whose custom field title is already stored
pub fn mug_with_field_title(title: &str) -> Product {
    mug().with_meta(FieldDefinition::DEFAULT_META_KEY, title)
}

/// A catalog holding one mug with a stored field title; returns its id
pub fn seeded_store() -> (MemoryProducts, ProductId) {
    let mut store = MemoryProducts::new();
    let id = store.insert(mug_with_field_title("Engraving text"));
    (store, id)
}

/// A submission carrying the shopper's title under the default form name
pub fn submission_with_title(title: &str) -> Submission {
    Submission::new().with_field(FieldDefinition::DEFAULT_FORM_NAME, title)
}

/// A flow with the default configuration
pub fn setup_flow() -> PersonalizationFlow {
    PersonalizationFlow::with_defaults()
}
