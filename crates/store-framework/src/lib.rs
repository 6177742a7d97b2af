//! # Store Framework
//!
//! This crate provides the building blocks for client-side state containers in Rust.
//! It applies the **Actor Model** to the reducer pattern: every piece of state (a *slice*)
//! lives inside its own task, and the only way to change it is to send that task an action.
//!
//! ## Why Actors + Reducers?
//!
//! ### Reducers
//!
//! - State is an immutable snapshot; an action produces a *new* snapshot
//! - Reducers are pure functions, trivially unit-testable without any runtime
//! - Every state change has a name (the action) that shows up in the logs
//!
//! ### Actor Model
//!
//! - Exactly one owner per slice (no shared memory, no locks)
//! - Message-passing concurrency over Tokio channels
//! - Sequential processing within each store, so reducers never race each other
//!
//! ### The Synergy
//!
//! - **Isolation**: Each slice (contacts, filter, ...) gets its own store task
//! - **Observation**: Every new snapshot is published on a `watch` channel, so consumers
//!   can read the latest value synchronously or await the next change
//! - **Ordering**: Requests sent through one client are applied in the order they were sent
//!
//! ## Core Components
//!
//! - [`Slice`] - Trait that state types implement to be managed by a store
//! - [`StoreActor`] - Generic actor that owns a slice and applies actions
//! - [`StoreClient`] - Cloneable handle for dispatching and observing
//! - [`SliceClient`] - Trait for domain-specific client wrappers
//! - [`StoreError`] - Errors raised by the runtime itself
//!
//! ## Quick Start
//!
//! ```rust
//! use store_framework::{Slice, StoreActor};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Counter { value: i64 }
//!
//! #[derive(Debug)]
//! enum CounterAction { Add(i64), Reset }
//!
//! impl Slice for Counter {
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, action: CounterAction) -> Self {
//!         match action {
//!             CounterAction::Add(n) => Counter { value: self.value + n },
//!             CounterAction::Reset => Counter::default(),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Counter>::new(8);
//!     tokio::spawn(actor.run());
//!
//!     let state = client.dispatch(CounterAction::Add(2)).await.unwrap();
//!     assert_eq!(state.value, 2);
//!     assert_eq!(client.snapshot().value, 2);
//! }
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for utilities to test code that dispatches to a store
//! without spawning a real store actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod slice;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::{Enqueued, StoreClient};
pub use client_trait::SliceClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use slice::Slice;
