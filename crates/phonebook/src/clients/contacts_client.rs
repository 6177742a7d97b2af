//! # Contacts Client
//!
//! Wraps a `StoreClient<ContactsState>` and exposes the contacts store to the operation layer.
use crate::contacts_slice::{ContactsAction, ContactsState};
use crate::error::PhonebookError;
use std::sync::Arc;
use store_framework::{Enqueued, SliceClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the contacts store.
#[derive(Clone)]
pub struct ContactsClient {
    inner: StoreClient<ContactsState>,
}

impl ContactsClient {
    pub fn new(inner: StoreClient<ContactsState>) -> Self {
        Self { inner }
    }

    /// Applies a lifecycle action and returns the resulting snapshot.
    #[instrument(skip(self))]
    pub async fn apply(&self, action: ContactsAction) -> Result<Arc<ContactsState>, PhonebookError> {
        debug!("Sending request");
        self.inner.dispatch(action).await.map_err(Self::map_error)
    }

    /// Queues a lifecycle action without waiting; see [`StoreClient::enqueue`].
    pub fn enqueue(&self, action: ContactsAction) -> Result<Enqueued<ContactsState>, PhonebookError> {
        debug!(?action, "Queueing request");
        self.inner.enqueue(action).map_err(Self::map_error)
    }

    /// Waits for the first snapshot that satisfies `predicate`.
    pub async fn wait_for<F>(&self, predicate: F) -> Result<Arc<ContactsState>, PhonebookError>
    where
        F: FnMut(&ContactsState) -> bool,
    {
        self.inner.wait_for(predicate).await.map_err(Self::map_error)
    }
}

impl SliceClient<ContactsState> for ContactsClient {
    type Error = PhonebookError;

    fn inner(&self) -> &StoreClient<ContactsState> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        PhonebookError::Store(e)
    }
}
