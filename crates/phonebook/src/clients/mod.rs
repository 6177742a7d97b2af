//! Type-safe wrappers around [`StoreClient`](store_framework::StoreClient).

pub mod contacts_client;
pub mod filter_client;

pub use contacts_client::*;
pub use filter_client::*;
