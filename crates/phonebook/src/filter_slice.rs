//! # Filter Store
//!
//! Free-text filter applied to contact names. No validation and no trimming: the text is
//! stored exactly as typed, and the empty string matches everything.

use crate::clients::FilterClient;
use store_framework::{Slice, StoreActor};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    text: String,
}

impl FilterState {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetFilter(String),
}

impl Slice for FilterState {
    type Action = FilterAction;

    fn reduce(&self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetFilter(text) => Self { text },
        }
    }
}

/// Creates a new filter store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<FilterState>, FilterClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, FilterClient::new(generic_client))
}
