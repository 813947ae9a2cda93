//! Session cart and line items

use crate::ids::ProductId;
use crate::key::LineItemKey;
use crate::money::Money;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shopper-supplied personalization attached to one cart line
///
/// The title and its surcharged total are set together when the line is
/// created and never separately; a line either carries both or neither.
/// The title is the raw submitted string; escaping happens at render
/// time, never on store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personalization {
    title: String,
    total_price: Money,
}

impl Personalization {
    /// Create a personalization from the submitted title and its total
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, total_price: Money) -> Self {
        Self {
            title: title.into(),
            total_price,
        }
    }

    /// The raw submitted title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Base price plus surcharge, captured when the line was created
    #[inline]
    #[must_use]
    pub const fn total_price(&self) -> Money {
        self.total_price
    }
}

/// One product entry in a session cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    key: LineItemKey,
    product_id: ProductId,
    variation_id: Option<ProductId>,
    quantity: u32,
    unit_price: Money,
    personalization: Option<Personalization>,
}

impl CartLineItem {
    /// Create a line item; the key is derived from the line identity
    #[must_use]
    pub fn new(
        product_id: ProductId,
        variation_id: Option<ProductId>,
        quantity: u32,
        unit_price: Money,
        personalization: Option<Personalization>,
    ) -> Self {
        let key = LineItemKey::for_line(
            &product_id,
            variation_id.as_ref(),
            personalization.as_ref().map(Personalization::title),
        );
        Self {
            key,
            product_id,
            variation_id,
            quantity,
            unit_price,
            personalization,
        }
    }

    /// Line identity key
    #[inline]
    #[must_use]
    pub const fn key(&self) -> LineItemKey {
        self.key
    }

    /// Product this line holds
    #[inline]
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Variation, when the product has one
    #[inline]
    #[must_use]
    pub const fn variation_id(&self) -> Option<ProductId> {
        self.variation_id
    }

    /// Units of the product in this line
    #[inline]
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Add units to this line
    pub fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    /// Effective unit price used in totals
    #[inline]
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Overwrite the effective unit price
    #[inline]
    pub fn set_unit_price(&mut self, price: Money) {
        self.unit_price = price;
    }

    /// Personalization, when the shopper supplied one
    #[inline]
    #[must_use]
    pub const fn personalization(&self) -> Option<&Personalization> {
        self.personalization.as_ref()
    }

    /// Unit price times quantity
    #[inline]
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times_quantity(self.quantity)
    }
}

/// One shopper's session cart
///
/// Lines are keyed by [`LineItemKey`] and keep insertion order, so cart
/// renders are stable across requests. Adding a line whose identity is
/// already present merges quantities instead of duplicating the line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: IndexMap<LineItemKey, CartLineItem>,
}

impl Cart {
    /// Create an empty cart
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a line, merging quantities on identity collision
    ///
    /// Returns the key the line lives under.
    pub fn add(&mut self, line: CartLineItem) -> LineItemKey {
        let key = line.key();
        match self.items.get_mut(&key) {
            Some(existing) => existing.add_quantity(line.quantity()),
            None => {
                self.items.insert(key, line);
            }
        }
        key
    }

    /// Line under `key`, if present
    #[inline]
    #[must_use]
    pub fn get(&self, key: &LineItemKey) -> Option<&CartLineItem> {
        self.items.get(key)
    }

    /// Iterate lines in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.values()
    }

    /// Iterate lines mutably in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CartLineItem> {
        self.items.values_mut()
    }

    /// Remove a line
    pub fn remove(&mut self, key: &LineItemKey) -> Option<CartLineItem> {
        self.items.shift_remove(key)
    }

    /// Number of lines (not units)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every line
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of line totals at current effective prices
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.iter().map(CartLineItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: ProductId, quantity: u32, title: Option<&str>) -> CartLineItem {
        let personalization =
            title.map(|t| Personalization::new(t, Money::from_minor(600)));
        CartLineItem::new(
            product_id,
            None,
            quantity,
            Money::from_minor(500),
            personalization,
        )
    }

    #[test]
    fn same_identity_merges_quantity() {
        let product = ProductId::new();
        let mut cart = Cart::new();
        let key_a = cart.add(line(product, 1, Some("Gift Message")));
        let key_b = cart.add(line(product, 2, Some("Gift Message")));

        assert_eq!(key_a, key_b);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&key_a).unwrap().quantity(), 3);
    }

    #[test]
    fn different_titles_stay_separate_lines() {
        let product = ProductId::new();
        let mut cart = Cart::new();
        cart.add(line(product, 1, Some("For Alice")));
        cart.add(line(product, 1, Some("For Bob")));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn subtotal_uses_effective_prices() {
        let mut cart = Cart::new();
        cart.add(line(ProductId::new(), 2, None));
        assert_eq!(cart.subtotal(), Money::from_minor(1000));

        for item in cart.iter_mut() {
            item.set_unit_price(Money::from_minor(600));
        }
        assert_eq!(cart.subtotal(), Money::from_minor(1200));
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(line(ProductId::new(), 1, None));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
    }

    #[test]
    fn personalization_travels_with_the_line() {
        let mut cart = Cart::new();
        let key = cart.add(line(ProductId::new(), 1, Some("Gift Message")));
        let stored = cart.get(&key).unwrap().personalization().unwrap();
        assert_eq!(stored.title(), "Gift Message");
        assert_eq!(stored.total_price(), Money::from_minor(600));
    }
}
