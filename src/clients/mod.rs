//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! The split into [`CustomerClient`] and [`OwnerClient`] *is* the mode gate:
//! instead of a boolean flag the caller is trusted to check, each mode gets a
//! client type that only exposes its own operation set.

pub mod actor_client;
pub mod customer_client;
pub mod owner_client;

pub use actor_client::*;
pub use customer_client::*;
pub use owner_client::*;
