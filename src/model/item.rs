//! The sellable item on the venue's cocktail menu and its DTOs.
//!
//! # Actor Framework
//! [`MenuItem`] implements the [`ActorEntity`](crate::framework::ActorEntity)
//! trait (see [`crate::catalog_actor::entity`]), allowing it to be managed by
//! a [`ResourceActor`](crate::framework::ResourceActor).

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for menu items.
///
/// Assigned by the catalog actor from a monotonic counter; an id is never
/// reused after its item is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: ItemId,
    /// Display name, owner-editable.
    pub name: String,
    /// Non-negative unit price in dollars. Negative input is rejected at the
    /// catalog boundary, never clamped.
    pub unit_price: f64,
    /// Display copy, owner-editable.
    pub description: String,
    /// Card artwork for the menu surface. Not part of the edit form.
    pub image_url: String,
    /// Units currently selected for purchase. The only field customers can
    /// mutate, and it can only move through `AddOne`/`RemoveOne`, so it is
    /// structurally never negative.
    pub quantity: u32,
}

impl MenuItem {
    /// Creates a new MenuItem with nothing in the cart yet.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        unit_price: f64,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            description: description.into(),
            image_url: image_url.into(),
            quantity: 0,
        }
    }

    /// Price contribution of this line: unit price times selected units.
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// DTO for owner-mode item creation. Quantity always starts at zero.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub unit_price: f64,
    pub description: String,
    pub image_url: String,
}

/// DTO for owner-mode edits.
///
/// All three fields are replaced atomically, mirroring the edit form which
/// always submits the full set. `quantity` is deliberately absent: editing an
/// item never resets cart state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemEdit {
    pub name: String,
    pub unit_price: f64,
    pub description: String,
}
