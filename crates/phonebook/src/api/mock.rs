//! # Mock Contacts API
//!
//! `MockContactsApi` implements [`ContactsApi`] from a queue of scripted expectations, so the
//! operation layer and the [`Phonebook`](crate::lifecycle::Phonebook) can be tested without a
//! server.
//!
//! ```rust
//! use phonebook::api::{ContactsApi, MockContactsApi};
//! use phonebook::model::Contact;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockContactsApi::new();
//!     mock.expect_fetch_all()
//!         .return_ok(vec![Contact::new("1", "Ann", "111-22-33")]);
//!     mock.expect_create().return_err("Request failed with status code 500");
//!
//!     assert_eq!(mock.fetch_all().await.unwrap().len(), 1);
//!     mock.verify_pending(); // one expectation left
//! }
//! ```
//!
//! Any call without a matching expectation fails with a [`RequestFailed`] and is remembered,
//! so [`MockContactsApi::verify`] can report it.
//!
//! To observe the in-flight (`Loading`) state, hold a response back with
//! [`ExpectationBuilder::held_until`] and release it from the test.

use crate::api::{ContactsApi, RequestFailed};
use crate::model::{Contact, ContactId, NewContact};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// A call received by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FetchAll,
    Create(NewContact),
    RemoveById(ContactId),
}

/// Represents an expected call and the response to give.
#[derive(Debug)]
enum Expectation {
    FetchAll(Result<Vec<Contact>, RequestFailed>),
    Create(Result<Contact, RequestFailed>),
    RemoveById {
        id: ContactId,
        response: Result<ContactId, RequestFailed>,
    },
}

struct Scripted {
    expectation: Expectation,
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Scripted>,
    calls: Vec<ApiCall>,
    unexpected: Vec<String>,
}

/// Expectation-driven fake of the contacts backend. Clones share the same script.
#[derive(Clone, Default)]
pub struct MockContactsApi {
    state: Arc<Mutex<MockState>>,
}

impl MockContactsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_all` call.
    pub fn expect_fetch_all(&self) -> ExpectationBuilder<Vec<Contact>> {
        ExpectationBuilder::new(self.state.clone(), Box::new(Expectation::FetchAll))
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> ExpectationBuilder<Contact> {
        ExpectationBuilder::new(self.state.clone(), Box::new(Expectation::Create))
    }

    /// Expects a `remove_by_id` call for `id`.
    pub fn expect_remove(&self, id: impl Into<ContactId>) -> ExpectationBuilder<ContactId> {
        let id = id.into();
        ExpectationBuilder::new(
            self.state.clone(),
            Box::new(move |response| Expectation::RemoveById { id, response }),
        )
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Panics unless every expectation was consumed and no unexpected call arrived.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.unexpected.is_empty() {
            panic!("Unexpected calls: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    /// Panics if an unexpected call arrived; leftover expectations are allowed.
    pub fn verify_pending(&self) {
        let state = self.state.lock().unwrap();
        if !state.unexpected.is_empty() {
            panic!("Unexpected calls: {:?}", state.unexpected);
        }
    }

    fn next(&self, call: ApiCall) -> Result<Scripted, RequestFailed> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call.clone());
        match state.expectations.pop_front() {
            Some(scripted) => Ok(scripted),
            None => {
                state.unexpected.push(format!("{call:?}"));
                Err(RequestFailed::new(format!("Unexpected request: {call:?}")))
            }
        }
    }

    fn mismatch(&self, call: &ApiCall, expectation: &Expectation) -> RequestFailed {
        let message = format!("Expected {expectation:?}, got {call:?}");
        self.state.lock().unwrap().unexpected.push(message.clone());
        RequestFailed::new(message)
    }

    async fn respond(&self, call: ApiCall) -> Result<Expectation, RequestFailed> {
        let Scripted { expectation, gate } = self.next(call)?;
        if let Some(gate) = gate {
            // A dropped sender releases the response as well.
            let _ = gate.await;
        }
        Ok(expectation)
    }
}

#[async_trait]
impl ContactsApi for MockContactsApi {
    async fn fetch_all(&self) -> Result<Vec<Contact>, RequestFailed> {
        let call = ApiCall::FetchAll;
        match self.respond(call.clone()).await? {
            Expectation::FetchAll(response) => response,
            other => Err(self.mismatch(&call, &other)),
        }
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact, RequestFailed> {
        let call = ApiCall::Create(contact.clone());
        match self.respond(call.clone()).await? {
            Expectation::Create(response) => response,
            other => Err(self.mismatch(&call, &other)),
        }
    }

    async fn remove_by_id(&self, id: &ContactId) -> Result<ContactId, RequestFailed> {
        let call = ApiCall::RemoveById(id.clone());
        match self.respond(call.clone()).await? {
            Expectation::RemoveById { id: expected, response } if expected == *id => response,
            other => Err(self.mismatch(&call, &other)),
        }
    }
}

type Wrap<T> = Box<dyn FnOnce(Result<T, RequestFailed>) -> Expectation + Send>;

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T> {
    state: Arc<Mutex<MockState>>,
    wrap: Wrap<T>,
    gate: Option<oneshot::Receiver<()>>,
}

impl<T> ExpectationBuilder<T> {
    fn new(state: Arc<Mutex<MockState>>, wrap: Wrap<T>) -> Self {
        Self {
            state,
            wrap,
            gate: None,
        }
    }

    /// Holds the response until `gate` fires (or its sender is dropped).
    pub fn held_until(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to fail with `message`.
    pub fn return_err(self, message: impl Into<String>) {
        self.push(Err(RequestFailed::new(message)));
    }

    fn push(self, response: Result<T, RequestFailed>) {
        let expectation = (self.wrap)(response);
        self.state.lock().unwrap().expectations.push_back(Scripted {
            expectation,
            gate: self.gate,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_responses_in_order() {
        let mock = MockContactsApi::new();
        mock.expect_fetch_all().return_ok(vec![]);
        mock.expect_create()
            .return_ok(Contact::new("9", "Ann", "111-22-33"));
        mock.expect_remove("9").return_err("Request failed with status code 404");

        assert_eq!(mock.fetch_all().await, Ok(vec![]));
        let created = mock
            .create(&NewContact::new("Ann", "111-22-33"))
            .await
            .unwrap();
        assert_eq!(created.id, ContactId::from("9"));
        assert_eq!(
            mock.remove_by_id(&ContactId::from("9")).await,
            Err(RequestFailed::status(404))
        );

        assert_eq!(
            mock.calls(),
            vec![
                ApiCall::FetchAll,
                ApiCall::Create(NewContact::new("Ann", "111-22-33")),
                ApiCall::RemoveById(ContactId::from("9")),
            ]
        );
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected calls")]
    async fn test_unexpected_call_fails_verify() {
        let mock = MockContactsApi::new();
        assert!(mock.fetch_all().await.is_err());
        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_remove_id_is_a_mismatch() {
        let mock = MockContactsApi::new();
        mock.expect_remove("1").return_ok(ContactId::from("1"));

        let result = mock.remove_by_id(&ContactId::from("2")).await;

        assert!(result.is_err());
        assert_eq!(mock.state.lock().unwrap().unexpected.len(), 1);
    }

    #[tokio::test]
    async fn test_held_response_waits_for_gate() {
        let mock = MockContactsApi::new();
        let (release, gate) = oneshot::channel();
        mock.expect_fetch_all().held_until(gate).return_ok(vec![]);

        let task = {
            let mock = mock.clone();
            tokio::spawn(async move { mock.fetch_all().await })
        };
        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        release.send(()).unwrap();
        assert_eq!(task.await.unwrap(), Ok(vec![]));
    }
}
