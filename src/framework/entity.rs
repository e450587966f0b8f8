//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that a resource managed by the
//! generic [`ResourceActor`](crate::framework::ResourceActor) must implement.
//! It specifies associated types for IDs, DTOs, actions, context, errors and
//! the derived snapshot, and provides lifecycle hooks (`on_create`,
//! `on_update`, `on_delete`, `handle_action`).
//!
//! # Architecture Note
//! By defining a contract that every resource type must satisfy, the actor
//! loop is written *once* and reused for any entity. Associated types keep
//! the whole surface type-safe: you cannot send the wrong payload to an actor,
//! the compiler prevents it.
//!
//! # Snapshots
//! Unlike a plain CRUD store, this actor publishes a *derived view* of its
//! whole collection after every committed mutation. The entity declares what
//! that view is ([`ActorEntity::Snapshot`]) and how to compute it
//! ([`ActorEntity::project`]); the projection must be a pure function of the
//! stored entities so that recomputing it twice on the same state yields the
//! same result.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks
/// (e.g. calling other actors). It also defines a `Context` type, injected
/// into every hook, so dependencies can be bound late via `run()` instead of
/// at construction time. Entities with no dependencies use `()`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation; generated
    /// ids are monotonic and never reused, even after a delete.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `AddOne`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per actor, not one per message. A single `CatalogError`
    /// is the union of everything its operations can fail with; clients get
    /// one type to pattern-match on instead of a dozen near-identical enums.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The derived view published after every committed mutation.
    type Snapshot: Clone + Send + Sync + Debug + 'static;

    /// Construct the full Entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The entity's identifier. The actor keys its insertion-ordered store on
    /// this value.
    fn id(&self) -> &Self::Id;

    /// Compute the derived snapshot from the full collection, in insertion
    /// order. Must be pure: no hidden state, no I/O, no failure modes.
    fn project(items: &[Self]) -> Self::Snapshot;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
