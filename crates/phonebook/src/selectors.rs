//! # Derived Selectors
//!
//! Pure read-only views over store snapshots. Nothing here is stored; every value is
//! recomputed from the current [`ContactsState`] and [`FilterState`].
//!
//! [`FilteredContactsSelector`] caches the last `filtered_contacts` result and hands back
//! the same `Arc` while neither input snapshot changed.

use crate::contacts_slice::{ContactsState, RequestStatus};
use crate::filter_slice::FilterState;
use crate::model::Contact;
use std::sync::{Arc, Mutex, PoisonError};

pub fn contacts(state: &ContactsState) -> &[Contact] {
    state.items()
}

pub fn is_loading(state: &ContactsState) -> bool {
    state.status() == RequestStatus::Loading
}

pub fn current_error(state: &ContactsState) -> Option<&str> {
    state.error()
}

pub fn filter_text(filter: &FilterState) -> &str {
    filter.text()
}

pub fn contact_count(state: &ContactsState) -> usize {
    state.items().len()
}

/// True if a listed contact has `name`, ignoring case. Used for the duplicate check.
pub fn has_contact_named(state: &ContactsState, name: &str) -> bool {
    state.items().iter().any(|c| c.has_name(name))
}

/// Contacts whose name contains the filter text, ignoring case, in store order.
///
/// An empty filter returns every contact.
pub fn filtered_contacts<'a>(state: &'a ContactsState, filter: &FilterState) -> Vec<&'a Contact> {
    let needle = filter.text().to_lowercase();
    if needle.is_empty() {
        return state.items().iter().collect();
    }
    state
        .items()
        .iter()
        .filter(|c| c.name_contains(&needle))
        .collect()
}

struct Memo {
    contacts: Arc<ContactsState>,
    filter: Arc<FilterState>,
    result: Arc<Vec<Contact>>,
}

/// Memoized [`filtered_contacts`] keyed on snapshot identity.
#[derive(Default)]
pub struct FilteredContactsSelector {
    memo: Mutex<Option<Memo>>,
}

impl FilteredContactsSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, contacts: &Arc<ContactsState>, filter: &Arc<FilterState>) -> Arc<Vec<Contact>> {
        let mut memo = self.memo.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = memo.as_ref() {
            if Arc::ptr_eq(&cached.contacts, contacts) && Arc::ptr_eq(&cached.filter, filter) {
                return Arc::clone(&cached.result);
            }
        }

        let result: Arc<Vec<Contact>> = Arc::new(
            filtered_contacts(contacts, filter)
                .into_iter()
                .cloned()
                .collect(),
        );
        *memo = Some(Memo {
            contacts: Arc::clone(contacts),
            filter: Arc::clone(filter),
            result: Arc::clone(&result),
        });
        result
    }
}
