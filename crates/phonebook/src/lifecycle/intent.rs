use crate::model::{Contact, ContactId, NewContact};
use crate::operations::OperationKind;

/// A user intent, as sent by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    FetchAll,
    Create(NewContact),
    Remove(ContactId),
    SetFilter(String),
}

impl Intent {
    pub fn kind(&self) -> OperationKind {
        match self {
            Intent::FetchAll => OperationKind::FetchAll,
            Intent::Create(_) => OperationKind::Create,
            Intent::Remove(_) => OperationKind::RemoveById,
            Intent::SetFilter(_) => OperationKind::SetFilter,
        }
    }
}

/// What a completed [`Intent`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    Fetched(Vec<Contact>),
    Created(Contact),
    Removed(ContactId),
    FilterSet(String),
}
