//! Totals-pass price rewriting
//!
//! The host recomputes cart totals many times per request. Each pass
//! re-applies the stored personalization total as the line's effective
//! unit price. Applying the pass N times leaves the cart exactly as one
//! application does.

use cartouche_model::{Cart, Personalization, RequestOrigin};

/// Overwrites effective unit prices from stored personalization totals
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceRewriter;

impl PriceRewriter {
    /// Create a new rewriter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run one totals pass over the cart
    ///
    /// Skips entirely for origins where pricing does not apply (a
    /// synchronous admin page load). Lines without a personalization keep
    /// whatever unit price they carry. Returns the number of lines
    /// rewritten.
    pub fn apply(&self, cart: &mut Cart, origin: RequestOrigin) -> usize {
        if !origin.applies_pricing() {
            return 0;
        }
        let mut rewritten = 0;
        for item in cart.iter_mut() {
            if let Some(price) = item.personalization().map(Personalization::total_price) {
                item.set_unit_price(price);
                rewritten += 1;
            }
        }
        rewritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartouche_model::{CartLineItem, Money, ProductId};

    fn cart_with_lines() -> Cart {
        let mut cart = Cart::new();
        cart.add(CartLineItem::new(
            ProductId::new(),
            None,
            1,
            Money::from_minor(500),
            Some(Personalization::new("Gift Message", Money::from_minor(600))),
        ));
        cart.add(CartLineItem::new(
            ProductId::new(),
            None,
            2,
            Money::from_minor(300),
            None,
        ));
        cart
    }

    #[test]
    fn personalized_lines_get_their_total() {
        let mut cart = cart_with_lines();
        let rewritten = PriceRewriter::new().apply(&mut cart, RequestOrigin::Storefront);

        assert_eq!(rewritten, 1);
        let prices: Vec<Money> = cart.iter().map(CartLineItem::unit_price).collect();
        assert_eq!(prices, vec![Money::from_minor(600), Money::from_minor(300)]);
    }

    #[test]
    fn repeated_passes_do_not_drift() {
        let mut cart = cart_with_lines();
        let rewriter = PriceRewriter::new();
        rewriter.apply(&mut cart, RequestOrigin::Storefront);
        let after_one = cart.clone();
        rewriter.apply(&mut cart, RequestOrigin::Storefront);
        assert_eq!(cart, after_one);
    }

    #[test]
    fn admin_page_loads_are_skipped() {
        let mut cart = cart_with_lines();
        let rewritten = PriceRewriter::new().apply(&mut cart, RequestOrigin::AdminPage);
        assert_eq!(rewritten, 0);
        assert_eq!(cart.iter().next().unwrap().unit_price(), Money::from_minor(500));
    }

    #[test]
    fn admin_async_requests_still_reprice() {
        let mut cart = cart_with_lines();
        let rewritten = PriceRewriter::new().apply(&mut cart, RequestOrigin::AdminAsync);
        assert_eq!(rewritten, 1);
    }
}
