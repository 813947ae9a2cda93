//! Flow error taxonomy
//!
//! Everything the orchestrator can surface. The only shopper-facing kind
//! is [`FlowError::Rejected`], which pairs with exactly one notice on the
//! notice channel. The rest are precondition misses a host framework
//! would absorb silently; here they are typed.

use crate::stores::StoreError;
use cartouche_model::ProductId;
use cartouche_pipeline::StageError;

/// Errors produced by the personalization flow
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The add-to-cart gate rejected the submission
    #[error("submission rejected: {0}")]
    Rejected(#[from] StageError),

    /// A referenced product is not in the catalog
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Order placement was attempted on an empty cart
    #[error("cannot place an order from an empty cart")]
    EmptyCart,

    /// The backing store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl FlowError {
    /// Whether this error is a shopper-facing rejection (vs. a fault)
    #[inline]
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
