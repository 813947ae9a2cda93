//! Add-to-cart gate
//!
//! The sole gate keeping an item without the required custom value out of
//! the cart.

use crate::stage::StageError;
use cartouche_model::Submission;

/// Validates the add-to-cart submission
///
/// Fails iff the watched form field is absent, empty, or whitespace-only.
/// The gate is a pure predicate; surfacing the failure to the shopper is
/// the orchestrator's job.
#[derive(Debug, Clone)]
pub struct AddToCartGate {
    form_name: String,
}

impl AddToCartGate {
    /// Create a gate watching the given form field
    #[inline]
    #[must_use]
    pub fn new(form_name: impl Into<String>) -> Self {
        Self {
            form_name: form_name.into(),
        }
    }

    /// Form field the gate watches
    #[inline]
    #[must_use]
    pub fn form_name(&self) -> &str {
        &self.form_name
    }

    /// Check the submission
    ///
    /// # Errors
    /// [`StageError::MissingField`] when the field carries no content.
    pub fn validate(&self, posted: &Submission) -> Result<(), StageError> {
        if posted.filled_value(&self.form_name).is_some() {
            Ok(())
        } else {
            Err(StageError::MissingField {
                form_name: self.form_name.clone(),
            })
        }
    }
}
