//! Catalog-specific resource logic: the menu item entity, its quantity
//! actions, and the wiring that produces the mode-gated clients.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CustomerClient, OwnerClient};
use crate::framework::ResourceActor;
use crate::model::MenuItem;

/// Creates the catalog actor and its two mode-gated clients.
///
/// Both clients wrap the same underlying channel; the split is what enforces
/// the owner/customer operation sets. Only the [`CustomerClient`] carries the
/// order-summary subscription.
pub fn new() -> (ResourceActor<MenuItem>, CustomerClient, OwnerClient) {
    let (actor, generic_client, summaries) = ResourceActor::new(32);
    let customer = CustomerClient::new(generic_client.clone(), summaries);
    let owner = OwnerClient::new(generic_client);
    (actor, customer, owner)
}
