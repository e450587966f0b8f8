use crate::catalog_actor::CatalogError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{ItemId, MenuItem, MenuItemCreate, MenuItemEdit};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// The owner-mode surface of the catalog: create, edit and delete entries.
///
/// Not constructible from the customer side — the only way to obtain one at
/// runtime is a successful [`OwnerGate::login`](crate::access::OwnerGate::login).
#[derive(Clone)]
pub struct OwnerClient {
    inner: ResourceClient<MenuItem>,
}

impl OwnerClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Adds a new item to the menu. The actor assigns a fresh id and the
    /// quantity starts at zero. Rejects a negative unit price.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<ItemId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CatalogError::from)
    }

    /// Replaces an item's name, unit price and description atomically.
    /// Cart quantity is untouched; the next published summary already uses
    /// the new price.
    #[instrument(skip(self, edit))]
    pub async fn edit_item(&self, id: ItemId, edit: MenuItemEdit) -> Result<MenuItem, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, edit).await.map_err(CatalogError::from)
    }

    /// Removes an item from the menu. Any units of it still in the cart
    /// disappear from the next published summary.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(CatalogError::from)
    }
}

#[async_trait]
impl ActorClient<MenuItem> for OwnerClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }
}
