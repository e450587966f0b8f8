//! # System Lifecycle & Orchestration
//!
//! Wires the catalog actor, the mode-gated clients, and the login gate into
//! one startable unit, and coordinates graceful shutdown.
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the request channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor cleans up** - logs final state and exits its loop
//! 4. **Await completion** - the join handle resolves
//!
//! Clients handed out by [`OwnerGate::login`](crate::access::OwnerGate::login)
//! are clones of the same sender; a caller holding one past `shutdown()` will
//! keep the actor alive until it is dropped.

pub mod club_system;
pub mod tracing;

pub use club_system::*;
pub use self::tracing::setup_tracing;
