//! Lifecycle actions for the contacts store.
//!
//! Every remote operation reaches the store as three possible phases. The reducer
//! pattern-matches on the phase; the operation layer guarantees `Pending` comes first and
//! that exactly one terminal phase follows.

use crate::model::{Contact, ContactId};

/// Where a remote request is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

/// Actions accepted by the contacts store, one variant per remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactsAction {
    FetchAll(Phase<Vec<Contact>>),
    Create(Phase<Contact>),
    RemoveById(Phase<ContactId>),
}
