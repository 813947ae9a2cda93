//! Placed orders
//!
//! An order is a snapshot: line names and prices are copied out of the
//! catalog and cart at placement time and never re-derived. Line metadata
//! is append-only, with an opt-in uniqueness mode so re-running an
//! annotation cannot duplicate an entry.

use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One labeled metadata entry on an order line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMeta {
    /// Human-readable label, shown on order views
    pub label: String,
    /// Stored value
    pub value: String,
}

/// One product entry in a placed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    product_id: ProductId,
    name: String,
    quantity: u32,
    unit_price: Money,
    meta: Vec<OrderMeta>,
}

impl OrderLineItem {
    /// Create a line snapshot
    #[must_use]
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            quantity,
            unit_price,
            meta: Vec::new(),
        }
    }

    /// Product the line was created from
    #[inline]
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Product name as it read at placement time
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units ordered
    #[inline]
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price at placement time
    #[inline]
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Unit price times quantity
    #[inline]
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times_quantity(self.quantity)
    }

    /// Attach a labeled metadata entry
    ///
    /// With `unique`, an existing entry under the same label is replaced,
    /// so repeated annotation leaves exactly one entry. Without it,
    /// entries accumulate.
    pub fn add_meta(&mut self, label: impl Into<String>, value: impl Into<String>, unique: bool) {
        let label = label.into();
        let value = value.into();
        if unique {
            if let Some(existing) = self.meta.iter_mut().find(|m| m.label == label) {
                existing.value = value;
                return;
            }
        }
        self.meta.push(OrderMeta { label, value });
    }

    /// Value of the first entry under `label`
    #[must_use]
    pub fn meta_value(&self, label: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value.as_str())
    }

    /// All metadata entries, in attachment order
    #[inline]
    #[must_use]
    pub fn meta(&self) -> &[OrderMeta] {
        &self.meta
    }
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    placed_at: DateTime<Utc>,
    lines: Vec<OrderLineItem>,
}

impl Order {
    /// Create an empty order stamped with the current time
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: OrderId::new(),
            placed_at: Utc::now(),
            lines: Vec::new(),
        }
    }

    /// Order identifier
    #[inline]
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Placement timestamp
    #[inline]
    #[must_use]
    pub const fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Append a line
    pub fn push_line(&mut self, line: OrderLineItem) {
        self.lines.push(line);
    }

    /// Lines in placement order
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[OrderLineItem] {
        &self.lines
    }

    /// Sum of line totals
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.iter().map(OrderLineItem::line_total).sum()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
