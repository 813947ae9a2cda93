//! Custom field declaration

use serde::{Deserialize, Serialize};

/// Declaration of the per-product custom text field
///
/// Carries the identifiers the field travels under (the product metadata
/// key on the merchant side, the form field name on the shopper side)
/// plus the admin-facing label and help text. The defaults are
/// wire-stable: changing them orphans stored metadata and posted forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Product metadata key the title is stored under
    pub meta_key: String,
    /// Form field name the shopper's value posts under
    pub form_name: String,
    /// Admin-facing label
    pub label: String,
    /// Admin-facing help text
    pub help_text: String,
}

impl FieldDefinition {
    /// Default product metadata key
    pub const DEFAULT_META_KEY: &'static str = "custom_text_field_title";

    /// Default shopper form field name
    pub const DEFAULT_FORM_NAME: &'static str = "cfwc-title-field";

    /// Create a field definition with the given identifiers
    #[must_use]
    pub fn new(
        meta_key: impl Into<String>,
        form_name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            meta_key: meta_key.into(),
            form_name: form_name.into(),
            label: label.into(),
            help_text: String::new(),
        }
    }

    /// Set the admin help text
    #[must_use]
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }
}

impl Default for FieldDefinition {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_META_KEY,
            Self::DEFAULT_FORM_NAME,
            "Custom Text Field Title",
        )
        .with_help_text("Enter the title of your custom text field.")
    }
}
