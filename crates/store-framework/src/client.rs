//! # Store Client
//!
//! This module defines the cloneable handle used to talk to a `StoreActor`.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::slice::Slice;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StoreClient
///
/// The `StoreClient<S>` forwards requests to a `StoreActor<S>` over a Tokio mpsc channel and
/// receives replies over oneshot channels. It also keeps a `watch` receiver so that the latest
/// snapshot can be read without a round trip.
///
/// * **Cloneable** – holds a sender and a receiver handle, so cloning is inexpensive.
/// * **Ordered** – requests from one client reach the store in the order they were sent.
#[derive(Clone)]
pub struct StoreClient<S: Slice> {
    sender: mpsc::Sender<StoreRequest<S>>,
    observer: watch::Receiver<Arc<S>>,
}

impl<S: Slice> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, observer: watch::Receiver<Arc<S>>) -> Self {
        Self { sender, observer }
    }

    /// Sends `action` to the store and waits until the reducer has applied it.
    pub async fn dispatch(&self, action: S::Action) -> Result<Arc<S>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Queues `action` without waiting and returns a handle to its reply.
    ///
    /// The request is in the mailbox when this returns, so actions enqueued one after the
    /// other from the same caller are applied in that order, whichever tasks later await
    /// them. Fails with [`StoreError::StoreFull`] instead of waiting for a free slot.
    pub fn enqueue(&self, action: S::Action) -> Result<Enqueued<S>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .try_send(StoreRequest::Dispatch { action, respond_to })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => StoreError::StoreFull,
                mpsc::error::TrySendError::Closed(_) => StoreError::StoreClosed,
            })?;
        Ok(Enqueued { response })
    }

    /// Reads the state through the store, after every previously queued request.
    pub async fn state(&self) -> Result<Arc<S>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Latest published snapshot. Never blocks.
    pub fn snapshot(&self) -> Arc<S> {
        Arc::clone(&*self.observer.borrow())
    }

    /// A fresh observer that is notified on every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
        self.observer.clone()
    }

    /// Waits until a published snapshot satisfies `predicate`.
    ///
    /// Checks the current snapshot first. Fails with [`StoreError::StoreClosed`] if the store
    /// stops before the predicate holds.
    pub async fn wait_for<F>(&self, mut predicate: F) -> Result<Arc<S>, StoreError>
    where
        F: FnMut(&S) -> bool,
    {
        let mut observer = self.subscribe();
        let state = observer
            .wait_for(|state| predicate(state))
            .await
            .map(|state| Arc::clone(&*state))
            .map_err(|_| StoreError::StoreClosed)?;
        Ok(state)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// A dispatch already sitting in the store's mailbox. See [`StoreClient::enqueue`].
#[derive(Debug)]
pub struct Enqueued<S: Slice> {
    response: oneshot::Receiver<Result<Arc<S>, StoreError>>,
}

impl<S: Slice> Enqueued<S> {
    /// Waits until the reducer has applied the action.
    pub async fn applied(self) -> Result<Arc<S>, StoreError> {
        self.response.await.map_err(|_| StoreError::StoreDropped)?
    }
}
