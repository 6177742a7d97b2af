//! # Mock Stores & Testing Guide
//!
//! Code that *dispatches* (operation layers, orchestrators) is easiest to test against a store
//! whose behaviour you control. This module offers two styles.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | create_mock_store | Real StoreActor |
//! |---------|-----------|-------------------|-----------------|
//! | **State** | Frozen (never reduced) | Whatever you reply | Real reducer |
//! | **Inspection** | Recorded actions | Step-by-step requests | Snapshots only |
//! | **Use Case** | "Which actions were sent, in what order?" | Injecting failures or delays per request | Testing reducers end-to-end |
//!
//! <details>
//! <summary><b>Pattern 1: Recording Store</b></summary>
//!
//! ```rust
//! use store_framework::mock::MockStore;
//! use store_framework::Slice;
//!
//! #[derive(Debug, Clone, Default)]
//! struct Counter(i64);
//!
//! #[derive(Debug, PartialEq)]
//! enum CounterAction { Add(i64) }
//!
//! impl Slice for Counter {
//!     type Action = CounterAction;
//!     fn reduce(&self, CounterAction::Add(n): CounterAction) -> Self { Counter(self.0 + n) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockStore::<Counter>::new();
//!     let client = mock.client();
//!
//!     client.dispatch(CounterAction::Add(1)).await.unwrap();
//!     client.dispatch(CounterAction::Add(2)).await.unwrap();
//!
//!     assert_eq!(mock.take_actions(), vec![CounterAction::Add(1), CounterAction::Add(2)]);
//!     // The recording store never runs the reducer.
//!     assert_eq!(client.snapshot().0, 0);
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Scripted Replies</b></summary>
//!
//! ```rust
//! use store_framework::mock::{create_mock_store, expect_dispatch};
//! use store_framework::{Slice, StoreError};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Counter(i64);
//!
//! impl Slice for Counter {
//!     type Action = i64;
//!     fn reduce(&self, n: i64) -> Self { Counter(self.0 + n) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_store::<Counter>(4);
//!
//!     let task = tokio::spawn(async move { client.dispatch(5).await });
//!
//!     let (action, responder) = expect_dispatch(&mut receiver).await.unwrap();
//!     assert_eq!(action, 5);
//!     responder.send(Err(StoreError::StoreClosed)).unwrap();
//!
//!     assert!(matches!(task.await.unwrap(), Err(StoreError::StoreClosed)));
//! }
//! ```
//! </details>

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::slice::Slice;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// RECORDING STORE
// =============================================================================

/// A store that records every dispatched action and always replies with its fixed state.
pub struct MockStore<S: Slice> {
    client: StoreClient<S>,
    recorded: Arc<Mutex<Vec<S::Action>>>,
    _publisher: watch::Sender<Arc<S>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: Slice> Default for MockStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Slice> MockStore<S> {
    /// Creates a recording store holding `S::default()`.
    pub fn new() -> Self {
        Self::with_state(S::default())
    }

    /// Creates a recording store that reports `state` for every request.
    pub fn with_state(state: S) -> Self {
        let state = Arc::new(state);
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (publisher, observer) = watch::channel(Arc::clone(&state));
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let recorded_clone = recorded.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                match request {
                    StoreRequest::Dispatch { action, respond_to } => {
                        recorded_clone.lock().unwrap().push(action);
                        let _ = respond_to.send(Ok(Arc::clone(&state)));
                    }
                    StoreRequest::Snapshot { respond_to } => {
                        let _ = respond_to.send(Ok(Arc::clone(&state)));
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, observer),
            recorded,
            _publisher: publisher,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Drains the actions recorded so far, in dispatch order.
    pub fn take_actions(&self) -> Vec<S::Action> {
        std::mem::take(&mut *self.recorded.lock().unwrap())
    }

    pub fn action_count(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }
}

// =============================================================================
// STEP-BY-STEP HELPERS
// =============================================================================

/// Creates a store client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// Nothing answers the requests until the test does, which makes it possible to hold a
/// dispatch "in flight", inject a [`StoreError`], or assert on the exact action sent.
///
/// The client's snapshot stays at `S::default()`; its publisher is already dropped, so
/// `wait_for` only succeeds if the default satisfies the predicate.
pub fn create_mock_store<S: Slice>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, observer) = watch::channel(Arc::new(S::default()));
    (StoreClient::new(sender, observer), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: Slice>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Action, oneshot::Sender<Result<Arc<S>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: Slice>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<oneshot::Sender<Result<Arc<S>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
