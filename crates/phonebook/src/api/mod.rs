//! # Remote Contacts API
//!
//! The backend is reached through the [`ContactsApi`] trait:
//!
//! | Operation | Method | Path | Request body | Response body |
//! |---|---|---|---|---|
//! | [`fetch_all`](ContactsApi::fetch_all) | GET | `/contacts` | (none) | `[{id,name,phone}]` |
//! | [`create`](ContactsApi::create) | POST | `/contacts` | `{name,phone}` | `{id,name,phone}` |
//! | [`remove_by_id`](ContactsApi::remove_by_id) | DELETE | `/contacts/{id}` | (none) | `{id,name,phone}` or `{id}` |
//!
//! Every failure (unreachable host, non-2xx status, malformed body) is reported as the single
//! [`RequestFailed`] kind. Callers only ever show its message.
//!
//! - [`http`] - the reqwest implementation used in production
//! - [`mock`] - an expectation-driven fake for tests

pub mod http;
pub mod mock;

pub use http::HttpContactsApi;
pub use mock::{ApiCall, MockContactsApi};

use crate::model::{Contact, ContactId, NewContact};
use async_trait::async_trait;
use thiserror::Error;

/// The one error kind the contacts store knows about.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestFailed {
    pub message: String,
}

impl RequestFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Failure for a response that arrived with a non-success status.
    pub fn status(code: u16) -> Self {
        Self::new(format!("Request failed with status code {code}"))
    }
}

impl From<reqwest::Error> for RequestFailed {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Self::status(status.as_u16());
        }
        if e.is_decode() {
            return Self::new(format!("Malformed response: {e}"));
        }
        Self::new(format!("Network Error: {e}"))
    }
}

impl From<serde_json::Error> for RequestFailed {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("Malformed response: {e}"))
    }
}

/// Contract for the remote contacts backend.
///
/// One call is exactly one network round trip: no retries, no timeout, no cancellation.
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// `GET /contacts`, in server order.
    async fn fetch_all(&self) -> Result<Vec<Contact>, RequestFailed>;

    /// `POST /contacts`. Returns the stored contact including its server-assigned id.
    async fn create(&self, contact: &NewContact) -> Result<Contact, RequestFailed>;

    /// `DELETE /contacts/{id}`. Returns the id that was removed.
    async fn remove_by_id(&self, id: &ContactId) -> Result<ContactId, RequestFailed>;
}
