//! # SliceClient Trait
//!
//! Provides a common interface for slice-specific clients, adding default `state`,
//! `snapshot` and `subscribe` methods built on top of a generic `StoreClient`.
use crate::{Slice, StoreClient, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

/// Trait for slice-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use store_framework::{Slice, SliceClient, StoreClient, StoreError};
///
/// #[derive(Debug, Clone, Default)]
/// struct Flag(bool);
///
/// impl Slice for Flag {
///     type Action = bool;
///     fn reduce(&self, action: bool) -> Self { Flag(action) }
/// }
///
/// #[derive(Debug)]
/// struct FlagError(String);
///
/// struct FlagClient {
///     inner: StoreClient<Flag>,
/// }
///
/// impl SliceClient<Flag> for FlagClient {
///     type Error = FlagError;
///
///     fn inner(&self) -> &StoreClient<Flag> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         FlagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: FlagClient) {
///     // state(), snapshot() and subscribe() are provided automatically!
///     let _ = client.state().await;
///     let _ = client.snapshot();
/// }
/// ```
#[async_trait]
pub trait SliceClient<S: Slice>: Send + Sync {
    /// The slice-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the slice-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Read the state after every previously queued request.
    #[tracing::instrument(skip(self))]
    async fn state(&self) -> Result<Arc<S>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().state().await.map_err(Self::map_error)
    }

    /// Latest published snapshot.
    fn snapshot(&self) -> Arc<S> {
        self.inner().snapshot()
    }

    /// Observer notified on every dispatch.
    fn subscribe(&self) -> watch::Receiver<Arc<S>> {
        self.inner().subscribe()
    }
}
