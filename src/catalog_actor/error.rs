//! Error types for the catalog actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A negative unit price was submitted. Rejected, never clamped.
    #[error("Invalid unit price: {0}")]
    InvalidPrice(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Catalog communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunication(msg)
    }
}

/// Entity errors come back from the actor boxed inside
/// [`FrameworkError::EntityError`]; downcast them so owner surfaces see
/// `InvalidPrice` instead of a stringly wrapper.
impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::ActorCommunication(other.to_string()),
            },
            other => CatalogError::ActorCommunication(other.to_string()),
        }
    }
}
