//! # Contacts Store
//!
//! The canonical list of contacts and the status of the latest request.
//!
//! ## Structure
//!
//! - [`state`] - [`ContactsState`] and its [`Slice`](store_framework::Slice) reducer
//! - [`actions`] - [`ContactsAction`] and the request [`Phase`]
//! - [`new()`] - Factory function that creates the store actor and its client
//!
//! ## Transitions
//!
//! | Action | items | status | error |
//! |---|---|---|---|
//! | any `Pending` | unchanged | `Loading` | cleared |
//! | `FetchAll(Fulfilled(list))` | `list` | `Succeeded` | cleared |
//! | `Create(Fulfilled(c))` | `items ++ [c]` | `Succeeded` | cleared |
//! | `RemoveById(Fulfilled(id))` | `items` without `id` | `Succeeded` | cleared |
//! | any `Rejected(msg)` | unchanged | `Failed` | `msg` |
//!
//! ## Usage
//!
//! ```rust
//! use phonebook::contacts_slice::{self, ContactsAction, Phase, RequestStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = contacts_slice::new(8);
//!     tokio::spawn(actor.run());
//!
//!     let state = client.apply(ContactsAction::FetchAll(Phase::Pending)).await?;
//!     assert_eq!(state.status(), RequestStatus::Loading);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod state;

pub use actions::*;
pub use state::*;

use crate::clients::ContactsClient;
use store_framework::StoreActor;

/// Creates a new contacts store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<ContactsState>, ContactsClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, ContactsClient::new(generic_client))
}
