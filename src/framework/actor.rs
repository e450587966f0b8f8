//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the
//! entity store and processes all requests sequentially. It is the "Server"
//! side of the actor model: exclusive ownership of state within one task, no
//! locks anywhere.
//!
//! ## Store & Ordering
//!
//! The store is a `Vec<T>` rather than a map: insertion order is part of this
//! framework's contract. Snapshots are projected over the entities *in the
//! order they were created*, and `List` returns them the same way. Lookups
//! are linear, which is fine for the collection sizes this serves (a menu,
//! not a database).
//!
//! ## Snapshot Publishing
//!
//! After every committed mutation (Create, Update, Delete, successful
//! Action) the actor recomputes [`ActorEntity::project`] over the whole store
//! and publishes the result on a `watch` channel — *before* sending the
//! response back to the caller. A client that has awaited its mutation can
//! therefore never read a stale snapshot: the (total, line items) pair seen
//! by any consumer is always consistent with the last committed mutation.
//! Failed operations do not change state and do not republish.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic actor that manages an insertion-ordered collection of entities.
///
/// # Concurrency Model
/// Each `ResourceActor` processes its own messages sequentially in a loop, so
/// the store needs no `Mutex` or `RwLock`. Multiple actors run in parallel in
/// their own Tokio tasks.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: u32,
    snapshots: watch::Sender<T::Snapshot>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor`, its `ResourceClient`, and a receiver
    /// for the published snapshots.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the MPSC request channel. If the channel
    ///   is full, client calls wait until there is space.
    ///
    /// The snapshot receiver starts at the projection of the empty store and
    /// can be cloned freely; every clone observes the latest published value.
    pub fn new(
        buffer_size: usize,
    ) -> (Self, ResourceClient<T>, watch::Receiver<T::Snapshot>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (snapshots, snapshot_rx) = watch::channel(T::project(&[]));
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: 1,
            snapshots,
        };
        let client = ResourceClient::new(sender);
        (actor, client, snapshot_rx)
    }

    fn find(&self, id: &T::Id) -> Option<&T> {
        self.store.iter().find(|item| item.id() == id)
    }

    fn find_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.store.iter_mut().find(|item| item.id() == id)
    }

    /// Recompute the projection over the whole store and publish it.
    /// `send_replace` keeps the latest value even if no receiver is
    /// currently subscribed.
    fn publish(&self) {
        self.snapshots.send_replace(T::project(&self.store));
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows
    /// entities to access dependencies that were created *after* the actor
    /// was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g. "MenuItem" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    // Ids are consumed even when creation fails; they are
                    // never reused either way.
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.push(item);
                            self.publish();
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.find(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.find_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        let updated = item.clone();
                        self.publish();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(index) = self.store.iter().position(|item| item.id() == &id) {
                        if let Err(e) = self.store[index].on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(index);
                        self.publish();
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.find_mut(&id) {
                        match item.handle_action(action, &context).await {
                            Ok(result) => {
                                self.publish();
                                info!(entity_type, %id, "Action ok");
                                let _ = respond_to.send(Ok(result));
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "Action failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            }
                        }
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        count: u32,
    }

    #[derive(Debug)]
    struct CounterCreate;

    #[derive(Debug)]
    struct CounterUpdate {
        count: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Bump,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter error")]
    struct CounterError;

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Update = CounterUpdate;
        type Action = CounterAction;
        type ActionResult = u32;
        type Context = ();
        type Error = CounterError;
        type Snapshot = u32;

        fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, CounterError> {
            Ok(Self { id, count: 0 })
        }

        fn id(&self) -> &u32 {
            &self.id
        }

        fn project(items: &[Self]) -> u32 {
            items.iter().map(|c| c.count).sum()
        }

        async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), CounterError> {
            self.count = update.count;
            Ok(())
        }

        async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<u32, CounterError> {
            match action {
                CounterAction::Bump => {
                    self.count += 1;
                    Ok(self.count)
                }
            }
        }
    }

    #[tokio::test]
    async fn snapshot_is_published_before_the_response() {
        let (actor, client, snapshots) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));

        let id = client.create(CounterCreate).await.unwrap();
        let count = client.perform_action(id, CounterAction::Bump).await.unwrap();
        assert_eq!(count, 1);
        // The awaited action guarantees the watch value is already fresh.
        assert_eq!(*snapshots.borrow(), 1);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_and_ids_are_not_reused() {
        let (actor, client, _snapshots) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));

        let first = client.create(CounterCreate).await.unwrap();
        let second = client.create(CounterCreate).await.unwrap();
        client.delete(first).await.unwrap();
        let third = client.create(CounterCreate).await.unwrap();

        assert!(third > second, "deleted ids must never be reused");
        let ids: Vec<u32> = client
            .list()
            .await
            .unwrap()
            .iter()
            .map(|c| *c.id())
            .collect();
        assert_eq!(ids, vec![second, third]);
    }
}
