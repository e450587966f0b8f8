use crate::catalog_actor::{CatalogError, ItemAction};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{ItemId, MenuItem, OrderSummary};
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// The customer-mode surface of the catalog.
///
/// Exposes exactly the operations a guest may perform: browse the menu, step
/// quantities up and down, read the running order summary, take a checkout
/// snapshot. Owner-mode operations (create/edit/delete) are not reachable
/// from this type; see [`OwnerClient`](crate::clients::OwnerClient) and the
/// login gate in [`crate::access`].
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<MenuItem>,
    summaries: watch::Receiver<OrderSummary>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<MenuItem>, summaries: watch::Receiver<OrderSummary>) -> Self {
        Self { inner, summaries }
    }

    /// The full menu, in insertion order.
    pub async fn menu(&self) -> Result<Vec<MenuItem>, CatalogError> {
        self.list().await
    }

    /// Adds one unit of `id` to the cart and returns the new quantity.
    ///
    /// If the item has vanished from the menu (an owner deleted it between
    /// render and click), this is a defensive no-op: logged, `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn add_one(&self, id: ItemId) -> Result<Option<u32>, CatalogError> {
        debug!("Sending request");
        self.step(id, ItemAction::AddOne).await
    }

    /// Removes one unit of `id` from the cart and returns the new quantity.
    /// Clamps at zero; same no-op contract as [`Self::add_one`] for absent
    /// items.
    #[instrument(skip(self))]
    pub async fn remove_one(&self, id: ItemId) -> Result<Option<u32>, CatalogError> {
        debug!("Sending request");
        self.step(id, ItemAction::RemoveOne).await
    }

    async fn step(&self, id: ItemId, action: ItemAction) -> Result<Option<u32>, CatalogError> {
        match self.inner.perform_action(id.clone(), action).await {
            Ok(quantity) => Ok(Some(quantity)),
            Err(FrameworkError::NotFound(_)) => {
                warn!(%id, "Item no longer on the menu, ignoring");
                Ok(None)
            }
            Err(e) => Err(CatalogError::from(e)),
        }
    }

    /// The latest published order summary.
    ///
    /// Because the actor republishes *before* acknowledging each mutation,
    /// a caller that has awaited its own `add_one`/`remove_one` always reads
    /// a summary that includes that change.
    pub fn summary(&self) -> OrderSummary {
        self.summaries.borrow().clone()
    }

    /// A live subscription to the order summary, for surfaces that re-render
    /// on every change (the running-total bar).
    pub fn subscribe(&self) -> watch::Receiver<OrderSummary> {
        self.summaries.clone()
    }

    /// Takes a point-in-time snapshot for the checkout surface.
    ///
    /// The snapshot is an owned value: later cart changes do not retroactively
    /// alter an open checkout summary. No payment call happens here or
    /// anywhere else in this crate.
    pub fn checkout(&self) -> OrderSummary {
        let snapshot = self.summary();
        info!(total = %snapshot.formatted_total(), lines = snapshot.line_items.len(),
            "Checkout snapshot taken");
        snapshot
    }
}

#[async_trait]
impl ActorClient<MenuItem> for CustomerClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }
}
