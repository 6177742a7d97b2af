use crate::api::{ContactsApi, HttpContactsApi};
use crate::clients::{ContactsClient, FilterClient};
use crate::config::{PhonebookConfig, DEFAULT_STORE_BUFFER};
use crate::contacts_slice::{self, ContactsState};
use crate::error::PhonebookError;
use crate::filter_slice::{self, FilterState};
use crate::lifecycle::{Intent, IntentOutcome};
use crate::model::validation::validate_new_contact;
use crate::model::{Contact, ContactId, NewContact};
use crate::operations::{self, Operation, OperationKind};
use crate::selectors::{self, FilteredContactsSelector};
use std::sync::Arc;
use store_framework::SliceClient;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// The UI-facing orchestrator.
///
/// `Phonebook` is responsible for:
/// - **Lifecycle Management**: starting the two store actors and stopping them on [`shutdown`](Self::shutdown)
/// - **Dependency Wiring**: handing the API client and the contacts store to every operation
/// - **Derived State**: exposing the selectors over the latest snapshots
///
/// Every operation runs on its own task, so several may be in flight at once. They are
/// applied in the order their responses arrive.
///
/// # Example
///
/// ```rust
/// use phonebook::api::MockContactsApi;
/// use phonebook::lifecycle::Phonebook;
/// use phonebook::model::Contact;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), phonebook::error::PhonebookError> {
///     let api = MockContactsApi::new();
///     api.expect_fetch_all().return_ok(vec![Contact::new("1", "Ann", "111-22-33")]);
///
///     let phonebook = Phonebook::new(Arc::new(api));
///     phonebook.fetch_contacts().join().await?;
///     assert_eq!(phonebook.filtered_contacts().len(), 1);
///
///     phonebook.shutdown().await
/// }
/// ```
pub struct Phonebook {
    contacts_client: ContactsClient,
    filter_client: FilterClient,
    api: Arc<dyn ContactsApi>,
    filtered: FilteredContactsSelector,
    handles: Vec<JoinHandle<()>>,
}

impl Phonebook {
    /// Starts both stores with the default mailbox size.
    pub fn new(api: Arc<dyn ContactsApi>) -> Self {
        Self::with_buffer(api, DEFAULT_STORE_BUFFER)
    }

    pub fn with_buffer(api: Arc<dyn ContactsApi>, buffer_size: usize) -> Self {
        let (contacts_actor, contacts_client) = contacts_slice::new(buffer_size);
        let (filter_actor, filter_client) = filter_slice::new(buffer_size);

        let contacts_handle = tokio::spawn(contacts_actor.run());
        let filter_handle = tokio::spawn(filter_actor.run());

        Self {
            contacts_client,
            filter_client,
            api,
            filtered: FilteredContactsSelector::new(),
            handles: vec![contacts_handle, filter_handle],
        }
    }

    /// Talks to the configured backend over HTTP.
    pub fn from_config(config: &PhonebookConfig) -> Self {
        let api = HttpContactsApi::from_config(config);
        Self::with_buffer(Arc::new(api), config.store_buffer)
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Runs any intent on its own task.
    ///
    /// The first store action of the intent (`Pending`, or the new filter text) is queued
    /// before this returns, so intents dispatched one after another reach the stores in
    /// dispatch order. Only network responses may come back out of order.
    pub fn dispatch(&self, intent: Intent) -> Operation<IntentOutcome> {
        debug!(?intent, "Dispatch intent");
        match intent {
            Intent::FetchAll => self.fetch_contacts().map(IntentOutcome::Fetched),
            Intent::Create(contact) => self.add_contact(contact).map(IntentOutcome::Created),
            Intent::Remove(id) => self.delete_contact(id).map(IntentOutcome::Removed),
            Intent::SetFilter(text) => {
                let queued = self.filter_client.enqueue_filter(text.clone());
                Operation::spawn(OperationKind::SetFilter, async move {
                    queued?.applied().await?;
                    Ok(IntentOutcome::FilterSet(text))
                })
            }
        }
    }

    pub fn fetch_contacts(&self) -> Operation<Vec<Contact>> {
        operations::spawn_fetch_all(Arc::clone(&self.api), self.contacts_client.clone())
    }

    /// Sends `contact` as is. Use [`submit_contact`](Self::submit_contact) for form input.
    pub fn add_contact(&self, contact: NewContact) -> Operation<Contact> {
        operations::spawn_create(Arc::clone(&self.api), self.contacts_client.clone(), contact)
    }

    pub fn delete_contact(&self, id: impl Into<ContactId>) -> Operation<ContactId> {
        operations::spawn_remove_by_id(
            Arc::clone(&self.api),
            self.contacts_client.clone(),
            id.into(),
        )
    }

    /// Replaces the filter text. Returns once the filter store has applied it.
    pub async fn set_filter(&self, text: impl Into<String>) -> Result<(), PhonebookError> {
        self.filter_client.enqueue_filter(text.into())?.applied().await?;
        Ok(())
    }

    /// The add-contact form path.
    ///
    /// Both fields are trimmed and validated, then the name is checked against the current
    /// list ignoring case. A failed check returns immediately: no request is sent and
    /// neither store changes.
    pub fn submit_contact(&self, name: &str, phone: &str) -> Result<Operation<Contact>, PhonebookError> {
        let contact = validate_new_contact(name, phone)?;

        if selectors::has_contact_named(&self.contacts_client.snapshot(), &contact.name) {
            warn!(name = %contact.name, "Duplicate contact");
            return Err(PhonebookError::DuplicateName(contact.name));
        }

        Ok(self.add_contact(contact))
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    pub fn is_loading(&self) -> bool {
        selectors::is_loading(&self.contacts_client.snapshot())
    }

    pub fn current_error(&self) -> Option<String> {
        selectors::current_error(&self.contacts_client.snapshot()).map(str::to_string)
    }

    /// Contacts matching the current filter. Same `Arc` until either store changes.
    pub fn filtered_contacts(&self) -> Arc<Vec<Contact>> {
        self.filtered.select(
            &self.contacts_client.snapshot(),
            &self.filter_client.snapshot(),
        )
    }

    pub fn contacts(&self) -> Vec<Contact> {
        selectors::contacts(&self.contacts_client.snapshot()).to_vec()
    }

    pub fn filter_text(&self) -> String {
        selectors::filter_text(&self.filter_client.snapshot()).to_string()
    }

    pub fn contacts_state(&self) -> Arc<ContactsState> {
        self.contacts_client.snapshot()
    }

    pub fn subscribe_contacts(&self) -> watch::Receiver<Arc<ContactsState>> {
        self.contacts_client.subscribe()
    }

    pub fn subscribe_filter(&self) -> watch::Receiver<Arc<FilterState>> {
        self.filter_client.subscribe()
    }

    /// Waits until no request is in flight.
    pub async fn settled(&self) -> Result<Arc<ContactsState>, PhonebookError> {
        self.contacts_client
            .wait_for(|state| !selectors::is_loading(state))
            .await
    }

    // =========================================================================
    // Shutdown
    // =========================================================================

    /// Drops the store clients and waits for both actors to exit.
    ///
    /// Operations still running hold their own client clones, so the contacts actor
    /// stops only after the last of them has finished.
    pub async fn shutdown(self) -> Result<(), PhonebookError> {
        info!("Shutting down phonebook...");

        drop(self.contacts_client);
        drop(self.filter_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(PhonebookError::Aborted(e.to_string()));
            }
        }

        info!("Phonebook shutdown complete.");
        Ok(())
    }
}
