//! Cartouche Checkout Pipeline
//!
//! The five stages a personalized line passes through, each independently
//! testable and owning no state beyond its configuration.
//!
//! # Core Concepts
//!
//! - [`AddToCartGate`]: rejects submissions without the required value
//! - [`Personalizer`]: attaches the title and surcharged total to a new line
//! - [`PriceRewriter`]: re-applies stored totals on every totals pass
//! - [`field_prompt`] / [`line_item_name`]: render-edge formatting
//! - [`OrderAnnotator`]: copies the title onto placed order lines
//! - [`CheckoutStage`]: the fixed stage order, made explicit
//!
//! # Example
//!
//! ```rust,ignore
//! use cartouche_pipeline::{AddToCartGate, Personalizer};
//!
//! let gate = AddToCartGate::new("cfwc-title-field");
//! gate.validate(&posted)?;
//! let personalization = personalizer.build(&posted, &product);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Stage implementations
mod display;
mod gate;
mod personalize;
mod record;
mod reprice;
mod stage;

// Re-exports
pub use display::{field_prompt, line_item_name};
pub use gate::AddToCartGate;
pub use personalize::Personalizer;
pub use record::OrderAnnotator;
pub use reprice::PriceRewriter;
pub use stage::{CheckoutStage, StageError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
