//! Cartouche Domain Model
//!
//! Typed entities and values for the personalization pipeline.
//!
//! # Core Concepts
//!
//! - [`Product`]: catalog entity carrying the custom field title in its metadata
//! - [`Cart`] / [`CartLineItem`]: session cart with insertion-ordered lines
//! - [`Personalization`]: the shopper-supplied title plus its surcharged price,
//!   present together or absent together on a line
//! - [`Order`] / [`OrderLineItem`]: placed order with append-only line metadata
//! - [`LineItemKey`]: 32-byte content hash identifying a cart line
//! - [`Money`]: currency amount in minor units
//! - [`Submission`]: explicit parameter object for shopper-posted form fields
//!
//! # Example
//!
//! ```rust,ignore
//! use cartouche_model::{Money, Product, Submission};
//!
//! let mug = Product::new("Engraved Mug", Money::from_minor(500));
//! let posted = Submission::new().with_field("cfwc-title-field", "Gift Message");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod cart;
mod field;
mod ids;
mod key;
mod money;
mod order;
mod product;
mod request;
mod text;

// Re-exports
pub use cart::{Cart, CartLineItem, Personalization};
pub use field::FieldDefinition;
pub use ids::{OrderId, ProductId};
pub use key::{KeyError, LineItemKey};
pub use money::Money;
pub use order::{Order, OrderLineItem, OrderMeta};
pub use product::Product;
pub use request::{RequestOrigin, Submission};
pub use text::{escape_html, sanitize_field_input};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
