//! Cartouche Core - Personalization Flow Orchestrator
//!
//! The piece that ties the pipeline together:
//! - Owns the fixed stage order (gate → personalize → reprice → display → record)
//! - Reaches the host catalog and notice channel through trait seams
//! - Carries deployment configuration and the flow error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use cartouche_core::{AddToCartRequest, FlowConfig, PersonalizationFlow};
//!
//! let flow = PersonalizationFlow::new(FlowConfig::new())?;
//!
//! flow.save_field_title(&mut store, product_id, "Engraving text")?;
//! let key = flow.add_to_cart(&store, &mut cart, &mut notices, &request)?;
//! flow.recalculate_totals(&mut cart, RequestOrigin::Storefront);
//! let order = flow.place_order(&store, &mut cart, RequestOrigin::Storefront)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod error;
pub mod flow;
pub mod stores;

// Re-exports for convenience
pub use config::{ConfigError, FlowConfig};
pub use error::FlowError;
pub use flow::{AddToCartRequest, PersonalizationFlow};
pub use stores::{Notice, NoticeSeverity, NoticeSink, ProductStore, StoreError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the personalization flow
    pub use crate::{
        AddToCartRequest, FlowConfig, FlowError, Notice, NoticeSink, PersonalizationFlow,
        ProductStore,
    };
    pub use cartouche_model::{Cart, Money, Product, RequestOrigin, Submission};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
