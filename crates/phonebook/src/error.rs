//! Error types surfaced by the phonebook facade.

use crate::api::RequestFailed;
use store_framework::StoreError;
use thiserror::Error;

/// Errors that can occur while running phonebook intents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhonebookError {
    /// The remote call failed. This is also what the contacts store records.
    #[error(transparent)]
    RequestFailed(#[from] RequestFailed),

    /// A store task stopped or dropped a reply.
    #[error("Store communication error: {0}")]
    Store(#[from] StoreError),

    /// A contact with the same name (ignoring case) is already listed.
    #[error("{0} is already in contacts!")]
    DuplicateName(String),

    #[error("Invalid name {0:?}: name may contain only letters, apostrophe, dash and spaces")]
    InvalidName(String),

    #[error(
        "Invalid phone {0:?}: phone number must be digits and can contain spaces, dashes, parentheses and can start with +"
    )]
    InvalidPhone(String),

    /// The task running an operation panicked or was cancelled.
    #[error("Operation aborted: {0}")]
    Aborted(String),
}
