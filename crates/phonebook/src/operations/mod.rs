//! # Async Operation Layer
//!
//! Turns each remote call into the three-phase lifecycle the contacts store understands:
//!
//! ```text
//!  dispatch Pending ──► call ContactsApi ──┬─► dispatch Fulfilled(payload)
//!                                          └─► dispatch Rejected(message)
//! ```
//!
//! `Pending` is always dispatched (and applied) before the network call starts, and exactly
//! one terminal phase follows. The `spawn_*` functions put `Pending` into the store's mailbox
//! before they return, so `Pending` actions reach the store in the order operations were
//! started. One invocation is one network call: no retries, no timeout,
//! no cancellation.
//!
//! Invocations are *not* serialized. Two overlapping operations resolve in whatever order
//! their responses arrive, and the store applies each one as it comes: the last to resolve
//! decides `status`/`error`, and a slow `fetch_all` can overwrite the effect of a faster
//! `create` or `remove_by_id`. UIs avoid this by disabling their controls while
//! [`is_loading`](crate::selectors::is_loading) is true.
//!
//! The `spawn_*` functions run an invocation on its own task and hand back an
//! [`Operation`]; the plain `async fn`s are the same lifecycle for callers that already
//! have a task.

pub mod handle;

pub use handle::*;

use crate::api::{ContactsApi, RequestFailed};
use crate::clients::ContactsClient;
use crate::contacts_slice::{ContactsAction, ContactsState, Phase};
use crate::error::PhonebookError;
use crate::model::{Contact, ContactId, NewContact};
use std::future::Future;
use std::sync::Arc;
use store_framework::Enqueued;
use tracing::{info, warn};

/// Waits for the queued `Pending`, awaits `request`, then dispatches the terminal phase.
async fn run_lifecycle<T, Fut>(
    contacts: &ContactsClient,
    phase: fn(Phase<T>) -> ContactsAction,
    pending: Enqueued<ContactsState>,
    request: Fut,
) -> Result<T, PhonebookError>
where
    T: Clone,
    Fut: Future<Output = Result<T, RequestFailed>>,
{
    pending.applied().await?;

    match request.await {
        Ok(payload) => {
            contacts
                .apply(phase(Phase::Fulfilled(payload.clone())))
                .await?;
            info!("Fulfilled");
            Ok(payload)
        }
        Err(failure) => {
            warn!(error = %failure, "Rejected");
            contacts
                .apply(phase(Phase::Rejected(failure.message.clone())))
                .await?;
            Err(failure.into())
        }
    }
}

async fn create_request(api: &dyn ContactsApi, contact: &NewContact) -> Result<Contact, RequestFailed> {
    if !contact.is_complete() {
        return Err(RequestFailed::new("Name and phone are required"));
    }
    api.create(contact).await
}

/// `GET /contacts` and replace the store's items with the result.
pub async fn fetch_all(
    api: &dyn ContactsApi,
    contacts: &ContactsClient,
) -> Result<Vec<Contact>, PhonebookError> {
    let pending = contacts.enqueue(ContactsAction::FetchAll(Phase::Pending))?;
    run_lifecycle(contacts, ContactsAction::FetchAll, pending, api.fetch_all()).await
}

/// `POST /contacts` and append the created contact.
///
/// Both fields must be non-empty; otherwise the request is rejected without a network
/// call. Format validation is the caller's job.
pub async fn create(
    api: &dyn ContactsApi,
    contacts: &ContactsClient,
    contact: NewContact,
) -> Result<Contact, PhonebookError> {
    let pending = contacts.enqueue(ContactsAction::Create(Phase::Pending))?;
    run_lifecycle(contacts, ContactsAction::Create, pending, create_request(api, &contact)).await
}

/// `DELETE /contacts/{id}` and drop the contact from the store.
pub async fn remove_by_id(
    api: &dyn ContactsApi,
    contacts: &ContactsClient,
    id: ContactId,
) -> Result<ContactId, PhonebookError> {
    let pending = contacts.enqueue(ContactsAction::RemoveById(Phase::Pending))?;
    run_lifecycle(contacts, ContactsAction::RemoveById, pending, api.remove_by_id(&id)).await
}

pub fn spawn_fetch_all(
    api: Arc<dyn ContactsApi>,
    contacts: ContactsClient,
) -> Operation<Vec<Contact>> {
    let pending = contacts.enqueue(ContactsAction::FetchAll(Phase::Pending));
    Operation::spawn(OperationKind::FetchAll, async move {
        run_lifecycle(&contacts, ContactsAction::FetchAll, pending?, api.fetch_all()).await
    })
}

pub fn spawn_create(
    api: Arc<dyn ContactsApi>,
    contacts: ContactsClient,
    contact: NewContact,
) -> Operation<Contact> {
    let pending = contacts.enqueue(ContactsAction::Create(Phase::Pending));
    Operation::spawn(OperationKind::Create, async move {
        let request = create_request(api.as_ref(), &contact);
        run_lifecycle(&contacts, ContactsAction::Create, pending?, request).await
    })
}

pub fn spawn_remove_by_id(
    api: Arc<dyn ContactsApi>,
    contacts: ContactsClient,
    id: ContactId,
) -> Operation<ContactId> {
    let pending = contacts.enqueue(ContactsAction::RemoveById(Phase::Pending));
    Operation::spawn(OperationKind::RemoveById, async move {
        let request = api.remove_by_id(&id);
        run_lifecycle(&contacts, ContactsAction::RemoveById, pending?, request).await
    })
}
