//! Entity trait implementation for the menu item.
//!
//! This is where the catalog's rules live: price validation on create and
//! edit, atomic replacement of the editable fields, quantity stepping with a
//! zero clamp, and the order-summary projection.

use super::actions::ItemAction;
use super::error::CatalogError;
use crate::framework::ActorEntity;
use crate::model::{ItemId, MenuItem, MenuItemCreate, MenuItemEdit, OrderSummary};
use async_trait::async_trait;
use tracing::warn;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = ItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemEdit;
    type Action = ItemAction;
    type ActionResult = u32;
    type Context = ();
    type Error = CatalogError;
    type Snapshot = OrderSummary;

    /// Creates a new item with quantity zero. Rejects a negative unit price.
    fn from_create_params(id: ItemId, params: MenuItemCreate) -> Result<Self, CatalogError> {
        if params.unit_price < 0.0 {
            return Err(CatalogError::InvalidPrice(params.unit_price));
        }
        Ok(Self::new(
            id,
            params.name,
            params.unit_price,
            params.description,
            params.image_url,
        ))
    }

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn project(items: &[Self]) -> OrderSummary {
        OrderSummary::of(items)
    }

    /// Replaces name, unit price and description atomically.
    ///
    /// `quantity` is untouched: an owner editing an item must not reset what
    /// customers already have in the cart. The republished summary uses the
    /// new price immediately.
    async fn on_update(&mut self, edit: MenuItemEdit, _ctx: &()) -> Result<(), CatalogError> {
        if edit.unit_price < 0.0 {
            return Err(CatalogError::InvalidPrice(edit.unit_price));
        }
        self.name = edit.name;
        self.unit_price = edit.unit_price;
        self.description = edit.description;
        Ok(())
    }

    /// Deleting an item with units still in the cart silently drops those
    /// units from the next summary. Surfaced here as a warning so it is at
    /// least visible in the logs.
    async fn on_delete(&self, _ctx: &()) -> Result<(), CatalogError> {
        if self.quantity > 0 {
            warn!(id = %self.id, name = %self.name, quantity = self.quantity,
                "Deleting item with pending units in the cart");
        }
        Ok(())
    }

    /// Steps the selected quantity and returns the new value.
    ///
    /// `RemoveOne` saturates at zero; it never fails.
    async fn handle_action(&mut self, action: ItemAction, _ctx: &()) -> Result<u32, CatalogError> {
        match action {
            ItemAction::AddOne => {
                self.quantity += 1;
            }
            ItemAction::RemoveOne => {
                self.quantity = self.quantity.saturating_sub(1);
            }
        }
        Ok(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_params(unit_price: f64) -> MenuItemCreate {
        MenuItemCreate {
            name: "Test Pour".to_string(),
            unit_price,
            description: "A test drink".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn create_starts_with_zero_quantity() {
        let item = MenuItem::from_create_params(ItemId(1), create_params(12.0)).unwrap();
        assert_eq!(item.quantity, 0);
        assert_eq!(item.unit_price, 12.0);
    }

    #[test]
    fn create_rejects_negative_price() {
        let result = MenuItem::from_create_params(ItemId(1), create_params(-1.0));
        assert_eq!(result.unwrap_err(), CatalogError::InvalidPrice(-1.0));
    }

    #[tokio::test]
    async fn remove_one_clamps_at_zero() {
        let mut item = MenuItem::from_create_params(ItemId(1), create_params(12.0)).unwrap();
        assert_eq!(item.handle_action(ItemAction::AddOne, &()).await.unwrap(), 1);
        assert_eq!(item.handle_action(ItemAction::RemoveOne, &()).await.unwrap(), 0);
        assert_eq!(item.handle_action(ItemAction::RemoveOne, &()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn edit_replaces_fields_but_leaves_quantity_alone() {
        let mut item = MenuItem::from_create_params(ItemId(1), create_params(12.0)).unwrap();
        item.handle_action(ItemAction::AddOne, &()).await.unwrap();
        item.handle_action(ItemAction::AddOne, &()).await.unwrap();

        let edit = MenuItemEdit {
            name: "Renamed Pour".to_string(),
            unit_price: 20.0,
            description: "New copy".to_string(),
        };
        item.on_update(edit, &()).await.unwrap();

        assert_eq!(item.name, "Renamed Pour");
        assert_eq!(item.unit_price, 20.0);
        assert_eq!(item.quantity, 2);
    }

    #[tokio::test]
    async fn edit_rejects_negative_price_without_touching_the_item() {
        let mut item = MenuItem::from_create_params(ItemId(1), create_params(12.0)).unwrap();
        let edit = MenuItemEdit {
            name: "Should not stick".to_string(),
            unit_price: -5.0,
            description: String::new(),
        };
        let result = item.on_update(edit, &()).await;
        assert_eq!(result.unwrap_err(), CatalogError::InvalidPrice(-5.0));
        assert_eq!(item.name, "Test Pour");
        assert_eq!(item.unit_price, 12.0);
    }
}
