use crate::contacts_slice::actions::{ContactsAction, Phase};
use crate::model::{Contact, ContactId};
use store_framework::Slice;

/// Status of the most recently started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Canonical contacts list plus request status.
///
/// Fields are private: the only way to obtain a different value is through
/// [`Slice::reduce`], which keeps `error` set exactly when `status` is `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactsState {
    items: Vec<Contact>,
    status: RequestStatus,
    error: Option<String>,
}

impl ContactsState {
    /// An idle state already holding `items`.
    pub fn with_items(items: Vec<Contact>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Contact] {
        &self.items
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.items.iter().any(|c| c.id == *id)
    }

    fn pending(&self) -> Self {
        Self {
            items: self.items.clone(),
            status: RequestStatus::Loading,
            error: None,
        }
    }

    fn succeeded(items: Vec<Contact>) -> Self {
        Self {
            items,
            status: RequestStatus::Succeeded,
            error: None,
        }
    }

    fn rejected(&self, message: String) -> Self {
        Self {
            items: self.items.clone(),
            status: RequestStatus::Failed,
            error: Some(message),
        }
    }
}

impl Slice for ContactsState {
    type Action = ContactsAction;

    fn reduce(&self, action: ContactsAction) -> Self {
        use ContactsAction::*;

        match action {
            FetchAll(Phase::Pending) | Create(Phase::Pending) | RemoveById(Phase::Pending) => {
                self.pending()
            }
            FetchAll(Phase::Rejected(message))
            | Create(Phase::Rejected(message))
            | RemoveById(Phase::Rejected(message)) => self.rejected(message),
            FetchAll(Phase::Fulfilled(items)) => Self::succeeded(items),
            Create(Phase::Fulfilled(contact)) => {
                let mut items = self.items.clone();
                items.push(contact);
                Self::succeeded(items)
            }
            // An id that is already gone leaves the list as is.
            RemoveById(Phase::Fulfilled(id)) => Self::succeeded(
                self.items.iter().filter(|c| c.id != id).cloned().collect(),
            ),
        }
    }

    fn summary(&self) -> String {
        match &self.error {
            Some(error) => format!("items={} status={:?} error={error:?}", self.items.len(), self.status),
            None => format!("items={} status={:?}", self.items.len(), self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Contact {
        Contact::new("1", "Ann", "111")
    }

    fn bob() -> Contact {
        Contact::new("2", "Bob", "222")
    }

    #[test]
    fn test_initial_state() {
        let state = ContactsState::default();
        assert!(state.items().is_empty());
        assert_eq!(state.status(), RequestStatus::Idle);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_pending_clears_error_and_keeps_items() {
        let failed = ContactsState::with_items(vec![ann()])
            .reduce(ContactsAction::Create(Phase::Rejected("boom".into())));
        assert_eq!(failed.status(), RequestStatus::Failed);

        let pending = failed.reduce(ContactsAction::RemoveById(Phase::Pending));

        assert_eq!(pending.status(), RequestStatus::Loading);
        assert_eq!(pending.error(), None);
        assert_eq!(pending.items(), &[ann()]);
    }

    #[test]
    fn test_fetch_rejected_scenario() {
        let state = ContactsState::default()
            .reduce(ContactsAction::FetchAll(Phase::Pending));
        assert_eq!(state.status(), RequestStatus::Loading);

        let state = state.reduce(ContactsAction::FetchAll(Phase::Rejected(
            "Network Error".into(),
        )));

        assert_eq!(state.status(), RequestStatus::Failed);
        assert_eq!(state.error(), Some("Network Error"));
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_fetch_fulfilled_replaces_items() {
        let state = ContactsState::with_items(vec![ann()])
            .reduce(ContactsAction::FetchAll(Phase::Fulfilled(vec![bob()])));

        assert_eq!(state.items(), &[bob()]);
        assert_eq!(state.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_create_appends_at_end() {
        let state = ContactsState::with_items(vec![bob()])
            .reduce(ContactsAction::Create(Phase::Fulfilled(ann())));

        assert_eq!(state.items(), &[bob(), ann()]);
        assert_eq!(state.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_remove_existing_id() {
        let state = ContactsState::with_items(vec![ann(), bob()])
            .reduce(ContactsAction::RemoveById(Phase::Fulfilled(ContactId::from("1"))));

        assert_eq!(state.items(), &[bob()]);
        assert!(!state.contains(&ContactId::from("1")));
    }

    #[test]
    fn test_remove_missing_id_still_succeeds() {
        let before = ContactsState::with_items(vec![ann(), bob()]);
        let after = before.reduce(ContactsAction::RemoveById(Phase::Fulfilled(
            ContactId::from("99"),
        )));

        assert_eq!(after.items(), before.items());
        assert_eq!(after.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_summary_counts_items() {
        let state = ContactsState::with_items(vec![ann(), bob()])
            .reduce(ContactsAction::FetchAll(Phase::Pending));
        assert_eq!(state.summary(), "items=2 status=Loading");

        let failed = state.reduce(ContactsAction::FetchAll(Phase::Rejected("Network Error".into())));
        assert_eq!(failed.summary(), r#"items=2 status=Failed error="Network Error""#);
    }

    #[test]
    fn test_rejected_keeps_items() {
        let state = ContactsState::with_items(vec![ann()])
            .reduce(ContactsAction::RemoveById(Phase::Rejected(
                "Request failed with status code 404".into(),
            )));

        assert_eq!(state.items(), &[ann()]);
        assert_eq!(state.error(), Some("Request failed with status code 404"));
    }
}
