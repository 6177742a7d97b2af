//! # Framework Errors
//!
//! Errors raised by the store runtime itself. Domain failures (a rejected HTTP call, an
//! invalid form field) never travel through these; they are encoded in actions and state.

/// Errors that can occur while talking to a store actor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    /// The mailbox had no free slot for a non-waiting [`enqueue`](crate::StoreClient::enqueue).
    #[error("Store mailbox full")]
    StoreFull,
}
