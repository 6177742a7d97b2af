//! # Slice Trait
//!
//! The `Slice` trait defines the contract that every piece of application state
//! (contacts, filter, ...) must implement to be owned by a [`StoreActor`](crate::StoreActor).
//!
//! # Architecture Note
//! A slice is both the *shape* of the state and the *rules* for changing it. Keeping the
//! reducer next to the type means the store actor can be written once and reused for every
//! slice, while the compiler guarantees that a contacts action can never be sent to the
//! filter store.
//!
//! Reducers take `&self` and return a fresh value. The store wraps each result in an
//! `Arc`, so snapshots handed out to observers are never mutated afterwards.

use std::fmt::Debug;

/// Trait that any state type must implement to be managed by a `StoreActor`.
///
/// The `Default` value is the slice's initial state.
pub trait Slice: Clone + Default + Debug + Send + Sync + 'static {
    /// The closed set of actions this slice responds to.
    type Action: Debug + Send + Sync + 'static;

    /// Produce the next state for `action`.
    ///
    /// Must be pure: no I/O, no clocks, no randomness. Anything asynchronous happens
    /// *before* the action is dispatched.
    fn reduce(&self, action: Self::Action) -> Self;

    /// One-line description logged at `debug` after every reduce.
    ///
    /// Defaults to the `Debug` output. Slices holding collections should override it with
    /// counts so debug logs stay short; the full state is still logged at `trace`.
    fn summary(&self) -> String {
        format!("{self:?}")
    }
}
