//! # Framework Errors
//!
//! Common error types used throughout the actor framework. Centralizing them
//! keeps error handling consistent across all actors and clients; entity
//! errors travel through [`FrameworkError::EntityError`] and can be downcast
//! back to their concrete type at the client boundary.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
