//! Stage names and shared stage types
//!
//! The pipeline replaces host-dispatched event hooks with named stages
//! invoked in a fixed order by the flow orchestrator. [`CheckoutStage`]
//! is that order, made explicit and inspectable.

use serde::{Deserialize, Serialize};

/// The named stages of the checkout pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    /// Gate the add-to-cart submission
    Validate,
    /// Attach the title and surcharged total to the new line
    Personalize,
    /// Overwrite effective unit prices on a totals pass
    Reprice,
    /// Append the title to rendered line names
    Display,
    /// Copy the title onto the placed order line
    RecordOrder,
}

impl CheckoutStage {
    /// Canonical stage order within one checkout session
    ///
    /// `Reprice` and `Display` repeat for the lifetime of the cart;
    /// `RecordOrder` runs once and is terminal.
    pub const SEQUENCE: [Self; 5] = [
        Self::Validate,
        Self::Personalize,
        Self::Reprice,
        Self::Display,
        Self::RecordOrder,
    ];

    /// Stage name (for logging)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Personalize => "personalize",
            Self::Reprice => "reprice",
            Self::Display => "display",
            Self::RecordOrder => "record_order",
        }
    }
}

impl std::fmt::Display for CheckoutStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced by pipeline stages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    /// The required custom field was empty or absent at add-to-cart time
    #[error("required field {form_name:?} was not supplied")]
    MissingField {
        /// Form field name the gate was checking
        form_name: String,
    },
}
