//! # Phonebook
//!
//! Client-side state synchronization for a contact manager backed by a REST API.
//!
//! The crate is organised in layers, leaf-first:
//!
//! - **[model]**: [`Contact`](model::Contact), [`NewContact`](model::NewContact) and field validation.
//! - **[api]**: the [`ContactsApi`](api::ContactsApi) seam, its reqwest implementation and a mock.
//! - **[contacts_slice]** / **[filter_slice]**: the two stores, each a pure reducer owned by a
//!   [`StoreActor`](store_framework::StoreActor).
//! - **[clients]**: typed wrappers around the generic store clients.
//! - **[operations]**: the async request lifecycle (`Pending` → `Fulfilled` | `Rejected`).
//! - **[selectors]**: pure derived views (loading flag, error, filtered list).
//! - **[lifecycle]**: the [`Phonebook`](lifecycle::Phonebook) orchestrator, which is what a UI talks to.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use phonebook::config::PhonebookConfig;
//! use phonebook::lifecycle::Phonebook;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = PhonebookConfig::new("http://localhost:3000")?;
//!     let phonebook = Phonebook::from_config(&config);
//!
//!     phonebook.fetch_contacts().join().await?;
//!     phonebook.set_filter("jo").await?;
//!     for contact in phonebook.filtered_contacts().iter() {
//!         println!("{}: {}", contact.name, contact.phone);
//!     }
//!
//!     phonebook.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod contacts_slice;
pub mod error;
pub mod filter_slice;
pub mod lifecycle;
pub mod model;
pub mod operations;
pub mod selectors;
