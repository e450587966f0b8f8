//! Custom actions for the catalog actor.
//!
//! These are the customer-mode quantity-stepper operations, handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`MenuItem`](crate::model::MenuItem). Both return the item's new
//! quantity.

/// Customer-mode operations on a menu item's selected quantity.
#[derive(Debug, Clone)]
pub enum ItemAction {
    /// Add one unit to the cart.
    AddOne,
    /// Remove one unit from the cart. Clamps at zero: removing from an empty
    /// line is a policy no-op, not an error.
    RemoveOne,
}
