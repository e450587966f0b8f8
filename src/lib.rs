//! # Club Orders
//!
//! The ordering core of a nightclub venue page: an owner-editable cocktail
//! catalog, a derived running total + line-item summary, a checkout snapshot,
//! and a demo owner-login gate. No server, no persistence, no payments —
//! everything lives in one process and resets to the seed menu on restart.
//!
//! ## 🚀 Core Components
//!
//! - **[framework]**: The engine. The generic
//!   [`ResourceActor`](framework::ResourceActor) and
//!   [`ActorEntity`](framework::ActorEntity) trait, extended with an
//!   insertion-ordered store and a snapshot projection republished after
//!   every committed mutation.
//! - **[model]**: Pure data. [`MenuItem`](model::MenuItem) and the derived
//!   [`OrderSummary`](model::OrderSummary) (total + non-zero line items).
//! - **[catalog_actor]**: The `ActorEntity` implementation for the menu:
//!   price validation, atomic edits, the `AddOne`/`RemoveOne` stepper.
//! - **[clients]**: The mode gate, enforced by construction.
//!   [`CustomerClient`](clients::CustomerClient) can only step quantities and
//!   read summaries; [`OwnerClient`](clients::OwnerClient) can only manage
//!   the menu.
//! - **[access]**: The demo login gate — the sole source of `OwnerClient`s.
//! - **[lifecycle]**: [`ClubSystem`](lifecycle::ClubSystem) orchestration and
//!   tracing setup.
//!
//! ## 📚 Quick Start
//!
//! The application entry point is in `main.rs`, which demonstrates:
//! 1. Starting the [`ClubSystem`](lifecycle::ClubSystem) with the seed menu.
//! 2. A customer session: stepping quantities, watching the running total.
//! 3. An owner session: login, price edit, delete — and the recomputed totals.
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for utilities to test client wrappers without
//! spawning actors, and `tests/` for full-system integration tests.

pub mod access;
pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
