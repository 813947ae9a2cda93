//! Host collaborator seams
//!
//! The product catalog, the notice channel, and their failure modes are
//! owned by the host platform. The flow reaches them only through these
//! traits, so any host (or an in-memory fixture) can stand behind them.

use cartouche_model::{Product, ProductId};

/// Errors surfaced by a backing store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store refused to persist a product record
    #[error("persist failed for product {product_id}: {reason}")]
    PersistFailed {
        /// Product whose save was refused
        product_id: ProductId,
        /// Host-provided reason
        reason: String,
    },
}

/// The host's product catalog
///
/// Metadata writes go through `get_mut` followed by [`persist`]; a write
/// that is not followed by a persist call is allowed to be lost, matching
/// the host's explicit-save contract.
///
/// [`persist`]: ProductStore::persist
pub trait ProductStore {
    /// Product under `id`, if the catalog knows it
    fn get(&self, id: ProductId) -> Option<&Product>;

    /// Mutable product under `id`
    fn get_mut(&mut self, id: ProductId) -> Option<&mut Product>;

    /// Flush a product's pending writes to durable storage
    ///
    /// # Errors
    /// [`StoreError::PersistFailed`] when the host refuses the save.
    fn persist(&mut self, id: ProductId) -> Result<(), StoreError>;
}

/// Severity of a user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    /// Blocks the operation the shopper attempted
    Error,
    /// Informational
    Notice,
}

/// A user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// How the host should present the notice
    pub severity: NoticeSeverity,
    /// Message shown to the shopper
    pub message: String,
}

impl Notice {
    /// Create an error notice
    #[inline]
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            message: message.into(),
        }
    }

    /// Create an informational notice
    #[inline]
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Notice,
            message: message.into(),
        }
    }
}

/// The host's notice channel
#[cfg_attr(test, mockall::automock)]
pub trait NoticeSink {
    /// Queue a notice for display to the shopper
    fn push(&mut self, notice: Notice);
}
