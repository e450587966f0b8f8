//! # Generic Messages
//!
//! Message types exchanged between the `ResourceClient` and `ResourceActor`.
//!
//! The variants map to standard CRUD lifecycle operations, plus `List` for
//! reading the whole collection in insertion order and `Action` for
//! resource-specific logic that does not fit the CRUD model. Each request
//! carries a oneshot channel for its reply, so every client call observes the
//! state as of its own mutation.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Generic over `T: ActorEntity`; the associated types (`Create`, `Update`,
/// `Action`) guarantee you cannot send one entity's payload to another
/// entity's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// All entities, in insertion order.
    List { respond_to: Response<Vec<T>> },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete { id: T::Id, respond_to: Response<()> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
