//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); stores identify themselves with a `slice` field instead.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: `Store started` / `Shutdown` with the final version
//! - **Dispatches**: every action at `debug`, the reduced state at `trace`
//! - **Operations**: request lifecycles inside an `operation` span (see the `phonebook` crate)
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run -p phonebook -- list
//!
//! # Every dispatched action
//! RUST_LOG=debug cargo run -p phonebook -- list
//!
//! # Full state snapshots after each reduce
//! RUST_LOG=store_framework=trace cargo run -p phonebook -- list
//! ```
//!
//! Running with `RUST_LOG=debug` shows the lifecycle of a fetch:
//!
//! ```text
//! INFO Store started slice="ContactsState"
//! DEBUG operation: Dispatch slice="ContactsState" action=FetchAll(Pending)
//! DEBUG operation: GET request url=http://localhost:3000/contacts
//! DEBUG operation: Dispatch slice="ContactsState" action=FetchAll(Fulfilled([...]))
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - stores log a `slice` field instead
        .compact() // Compact format shows spans inline (e.g., "operation:")
        .init();
}
