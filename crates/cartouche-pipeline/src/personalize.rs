//! Cart line personalization
//!
//! Builds the [`Personalization`] attached to a new cart line: the raw
//! submitted title plus the product's base price with the surcharge
//! applied. The base price is read at build time; later catalog price
//! changes do not reach lines already in a cart.

use cartouche_model::{Money, Personalization, Product, Submission};

/// Builds line personalizations from a submission
#[derive(Debug, Clone)]
pub struct Personalizer {
    form_name: String,
    surcharge: Money,
}

impl Personalizer {
    /// Create a personalizer for the given form field and surcharge
    #[inline]
    #[must_use]
    pub fn new(form_name: impl Into<String>, surcharge: Money) -> Self {
        Self {
            form_name: form_name.into(),
            surcharge,
        }
    }

    /// The configured surcharge
    #[inline]
    #[must_use]
    pub const fn surcharge(&self) -> Money {
        self.surcharge
    }

    /// Build the personalization for a new line, if one was submitted
    ///
    /// Re-checks the submission on its own rather than trusting that the
    /// gate ran; an unfilled field yields `None` and the line is created
    /// plain. The stored title is the raw submitted string; escaping is
    /// an output concern.
    #[must_use]
    pub fn build(&self, posted: &Submission, product: &Product) -> Option<Personalization> {
        let title = posted.filled_value(&self.form_name)?;
        Some(Personalization::new(title, product.price() + self.surcharge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product::new("Mug", Money::from_minor(500))
    }

    fn personalizer() -> Personalizer {
        Personalizer::new("cfwc-title-field", Money::from_minor(100))
    }

    #[test]
    fn total_is_base_price_plus_surcharge() {
        let posted = Submission::new().with_field("cfwc-title-field", "Gift Message");
        let built = personalizer().build(&posted, &mug()).unwrap();
        assert_eq!(built.title(), "Gift Message");
        assert_eq!(built.total_price(), Money::from_minor(600));
    }

    #[test]
    fn empty_submission_builds_nothing() {
        assert!(personalizer().build(&Submission::new(), &mug()).is_none());
        let blank = Submission::new().with_field("cfwc-title-field", "  ");
        assert!(personalizer().build(&blank, &mug()).is_none());
    }

    #[test]
    fn title_is_kept_raw() {
        let posted = Submission::new().with_field("cfwc-title-field", "<b>Gift</b>");
        let built = personalizer().build(&posted, &mug()).unwrap();
        assert_eq!(built.title(), "<b>Gift</b>");
    }

    #[test]
    fn later_price_change_does_not_reach_existing_personalization() {
        let mut product = mug();
        let posted = Submission::new().with_field("cfwc-title-field", "Gift Message");
        let built = personalizer().build(&posted, &product).unwrap();

        product.set_price(Money::from_minor(900));
        assert_eq!(built.total_price(), Money::from_minor(600));

        // A fresh build sees the new base price.
        let rebuilt = personalizer().build(&posted, &product).unwrap();
        assert_eq!(rebuilt.total_price(), Money::from_minor(1000));
    }
}
