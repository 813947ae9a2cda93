//! Request-scoped inputs
//!
//! Commerce hosts usually expose submitted form fields as ambient request
//! state. Here both the posted fields and the request context are
//! explicit parameters, so every stage is a pure function of its inputs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shopper-posted form fields for one request
///
/// A thin map from form field name to the raw posted string. Values are
/// kept exactly as posted; sanitization and escaping happen at the edges
/// that need them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    fields: IndexMap<String, String>,
}

impl Submission {
    /// Create an empty submission
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a posted field
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw posted value for a field, if the field was posted at all
    #[inline]
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Posted value if it contains any non-whitespace content
    ///
    /// This is the presence test every stage shares: an absent field, an
    /// empty string, and a whitespace-only string all count as "not
    /// filled".
    #[must_use]
    pub fn filled_value(&self, name: &str) -> Option<&str> {
        self.value(name).filter(|v| !v.trim().is_empty())
    }
}

/// Where a request originated
///
/// Pricing passes run for customer-facing cart operations and for admin
/// requests made asynchronously on behalf of one; a plain admin page load
/// must leave cart prices untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestOrigin {
    /// Customer-facing storefront request
    Storefront,
    /// Synchronous administrative page load
    AdminPage,
    /// Asynchronous request issued from an administrative context
    AdminAsync,
}

impl RequestOrigin {
    /// Whether cart pricing passes apply for this origin
    #[inline]
    #[must_use]
    pub const fn applies_pricing(self) -> bool {
        !matches!(self, Self::AdminPage)
    }

    /// Origin name (for logging)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Storefront => "storefront",
            Self::AdminPage => "admin_page",
            Self::AdminAsync => "admin_async",
        }
    }
}

impl std::fmt::Display for RequestOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
