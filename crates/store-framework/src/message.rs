//! # Store Messages
//!
//! This module defines the message types exchanged between a `StoreClient` and its
//! `StoreActor`.

use crate::error::StoreError;
use crate::slice::Slice;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a store actor.
///
/// - **Dispatch**: Run the slice reducer with `action` and reply with the new snapshot.
/// - **Snapshot**: Reply with the current snapshot. Because the store handles requests in
///   order, the reply reflects every dispatch sent before it on the same channel.
#[derive(Debug)]
pub enum StoreRequest<S: Slice> {
    Dispatch {
        action: S::Action,
        respond_to: Response<Arc<S>>,
    },
    Snapshot {
        respond_to: Response<Arc<S>>,
    },
}
