//! # Lifecycle
//!
//! - [`Phonebook`] - starts the contacts and filter stores, wires them to a
//!   [`ContactsApi`](crate::api::ContactsApi) and is the single entry point for a UI.
//! - [`Intent`] / [`IntentOutcome`] - the four things a user can ask for, and what each
//!   produced.

pub mod intent;
pub mod phonebook;

pub use intent::*;
pub use phonebook::*;
