//! Pure data structures shared by the API client and the stores.

pub mod contact;
pub mod validation;

pub use contact::*;
pub use validation::*;
