//! # Store Actor
//!
//! This module defines the `StoreActor`, the component that owns one slice of state and
//! applies dispatched actions to it. It is the "Server" side of the Actor Model:
//! requests are processed one at a time, so the reducer always sees a consistent state.

use crate::client::StoreClient;
use crate::message::StoreRequest;
use crate::slice::Slice;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, trace};

/// The generic actor that owns a single slice.
///
/// # Architecture Note
/// The actor holds the only writable reference to the slice. Every dispatch replaces the
/// current `Arc<S>` with the reducer's output and publishes it on a `watch` channel.
/// Observers therefore always hold complete, immutable snapshots, and no `Mutex` or
/// `RwLock` is needed anywhere.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` on the Tokio runtime.
/// 3.  **Use**: Clone the client freely; dropping the last clone stops the actor.
///
/// ```rust
/// use store_framework::{Slice, StoreActor};
///
/// #[derive(Debug, Clone, Default)]
/// struct Title(String);
///
/// impl Slice for Title {
///     type Action = String;
///     fn reduce(&self, action: String) -> Self { Title(action) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Title>::new(4);
///     let handle = tokio::spawn(actor.run());
///
///     client.dispatch("Phonebook".to_string()).await.unwrap();
///     assert_eq!(client.snapshot().0, "Phonebook");
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct StoreActor<S: Slice> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: Arc<S>,
    publisher: watch::Sender<Arc<S>>,
    version: u64,
}

impl<S: Slice> StoreActor<S> {
    /// Creates a store holding `S::default()`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, clients wait
    /// for space before their request is queued.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<S>) {
        Self::with_state(buffer_size, S::default())
    }

    /// Creates a store preloaded with `initial`.
    pub fn with_state(buffer_size: usize, initial: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let state = Arc::new(initial);
        let (publisher, observer) = watch::channel(Arc::clone(&state));
        let actor = Self {
            receiver,
            state,
            publisher,
            version: 0,
        };
        let client = StoreClient::new(sender, observer);
        (actor, client)
    }

    /// Runs the store's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "ContactsState" instead of the full path)
        let slice = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(slice, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(slice, ?action, "Dispatch");
                    let next = Arc::new(self.state.reduce(action));
                    self.state = Arc::clone(&next);
                    self.version += 1;
                    self.publisher.send_replace(Arc::clone(&next));
                    debug!(slice, version = self.version, summary = %next.summary(), "Reduced");
                    trace!(slice, version = self.version, state = ?next, "State");
                    let _ = respond_to.send(Ok(next));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(slice, version = self.version, "Snapshot");
                    let _ = respond_to.send(Ok(Arc::clone(&self.state)));
                }
            }
        }

        info!(slice, version = self.version, "Shutdown");
    }
}
