//! Derived order state: the running total and the normalized line items.
//!
//! Nothing in this module is stored independently. An [`OrderSummary`] is a
//! pure projection of the catalog at a point in time, recomputed fresh after
//! every mutation and handed to whatever surface needs it (the running-total
//! bar, the checkout summary). Same catalog state in, same summary out.

use crate::model::MenuItem;
use serde::{Deserialize, Serialize};

/// One non-zero cart line, in catalog insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// The aggregate a checkout or running-total surface consumes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Sum of `unit_price * quantity` over *all* items. Zero-quantity items
    /// contribute 0.
    pub total: f64,
    /// Items with `quantity > 0`, in catalog insertion order — never sorted
    /// by name or price.
    pub line_items: Vec<LineItem>,
}

impl OrderSummary {
    /// Recomputes the summary from the full catalog.
    pub fn of(items: &[MenuItem]) -> Self {
        let total = items.iter().map(MenuItem::line_total).sum();
        let line_items = items
            .iter()
            .filter(|item| item.quantity > 0)
            .map(|item| LineItem {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect();
        Self { total, line_items }
    }

    /// The total formatted for display, two decimal places.
    pub fn formatted_total(&self) -> String {
        format!("${:.2}", self.total)
    }

    /// True when the cart holds no units at all.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
