//! Order line annotation
//!
//! The last stage of the pipeline: at order placement, each cart line's
//! personalization title is copied onto the order line as a labeled
//! metadata entry. Replays cannot duplicate the entry; the label is the
//! uniqueness key.

use cartouche_model::{CartLineItem, OrderLineItem};

/// Copies personalization titles onto placed order lines
#[derive(Debug, Clone)]
pub struct OrderAnnotator {
    label: String,
}

impl OrderAnnotator {
    /// Create an annotator writing under the given metadata label
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Metadata label entries are written under
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Annotate an order line from its source cart line
    ///
    /// No-op for plain lines and for personalizations with an empty
    /// title. Returns whether an entry was written.
    pub fn annotate(&self, line: &mut OrderLineItem, source: &CartLineItem) -> bool {
        match source.personalization() {
            Some(p) if !p.title().is_empty() => {
                line.add_meta(self.label.as_str(), p.title(), true);
                true
            }
            _ => false,
        }
    }
}
