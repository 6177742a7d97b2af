use crate::error::PhonebookError;
use std::fmt::Display;
use std::future::Future;
use tokio::task::JoinHandle;
use tracing::{info_span, Instrument};

/// Which intent an [`Operation`] is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    FetchAll,
    Create,
    RemoveById,
    SetFilter,
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperationKind::FetchAll => "fetchAll",
            OperationKind::Create => "create",
            OperationKind::RemoveById => "removeById",
            OperationKind::SetFilter => "setFilter",
        };
        f.write_str(name)
    }
}

/// Handle to an operation running on its own task.
///
/// Dropping the handle does not cancel anything; the lifecycle still runs to completion and
/// the store still receives every phase.
#[derive(Debug)]
pub struct Operation<T> {
    kind: OperationKind,
    handle: JoinHandle<Result<T, PhonebookError>>,
}

impl<T: Send + 'static> Operation<T> {
    pub(crate) fn spawn<F>(kind: OperationKind, future: F) -> Self
    where
        F: Future<Output = Result<T, PhonebookError>> + Send + 'static,
    {
        let span = info_span!("operation", %kind);
        Self {
            kind,
            handle: tokio::spawn(future.instrument(span)),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Converts the successful result once the operation finishes.
    pub fn map<U, F>(self, f: F) -> Operation<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let kind = self.kind;
        Operation {
            kind,
            handle: tokio::spawn(async move { self.join().await.map(f) }),
        }
    }

    /// Waits for the outcome. A rejected request comes back as
    /// [`PhonebookError::RequestFailed`], after the store has already recorded it.
    pub async fn join(self) -> Result<T, PhonebookError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(PhonebookError::Aborted(e.to_string())),
        }
    }
}
