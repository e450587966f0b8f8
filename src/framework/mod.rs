//! Generic actor framework for resource management.
//!
//! This module provides the building blocks for type-safe actor systems that
//! manage resource entities with CRUD operations, custom actions, and a
//! derived snapshot republished after every committed mutation.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor owning the insertion-ordered store
//! - [`ResourceClient`] - Type-safe client for talking to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for utilities to test client wrappers without spawning actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
