//! # Filter Client
//!
//! Wraps a `StoreClient<FilterState>`.
use crate::error::PhonebookError;
use crate::filter_slice::{FilterAction, FilterState};
use store_framework::{Enqueued, SliceClient, StoreClient, StoreError};
use tracing::debug;

/// Client for interacting with the filter store.
#[derive(Clone)]
pub struct FilterClient {
    inner: StoreClient<FilterState>,
}

impl FilterClient {
    pub fn new(inner: StoreClient<FilterState>) -> Self {
        Self { inner }
    }

    /// Queues the new filter text without waiting, so consecutive calls apply in call order.
    pub fn enqueue_filter(&self, text: String) -> Result<Enqueued<FilterState>, PhonebookError> {
        debug!(len = text.len(), "Queueing request");
        self.inner
            .enqueue(FilterAction::SetFilter(text))
            .map_err(Self::map_error)
    }
}

impl SliceClient<FilterState> for FilterClient {
    type Error = PhonebookError;

    fn inner(&self) -> &StoreClient<FilterState> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        PhonebookError::Store(e)
    }
}
