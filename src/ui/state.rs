// List screen state machine: a tagged state drives a single render
// function, with the per-activation fetch as an explicit entry action.

use crate::directory::batch::{DirectoryFetch, FetchSource};
use crate::models::user::UserRecord;
use tracing::debug;

/// Screen-visible state of one list activation
#[derive(Clone, Debug)]
pub enum ListState {
    Loading,
    Ready {
        records: Vec<UserRecord>,
        source: FetchSource,
    },
    Failed {
        message: String,
    },
}

/// One list-screen activation
///
/// Activation enters `Loading` and arms exactly one fetch; re-renders must
/// not refetch. Retry means discarding the screen and activating a new one.
#[derive(Debug)]
pub struct ListScreen {
    state: ListState,
    fetch_armed: bool,
}

impl ListScreen {
    pub fn activate() -> Self {
        Self {
            state: ListState::Loading,
            fetch_armed: true,
        }
    }

    /// Consume the activation's single fetch trigger. True only on the
    /// first call.
    pub fn take_fetch_trigger(&mut self) -> bool {
        std::mem::take(&mut self.fetch_armed)
    }

    /// Apply a completed fetch. Only honored while still `Loading`; a
    /// completion arriving after the machine has moved on is discarded.
    ///
    /// An error message takes precedence over the substituted mock
    /// records: the list is suppressed and only the message renders.
    pub fn complete_fetch(&mut self, outcome: DirectoryFetch) {
        if !matches!(self.state, ListState::Loading) {
            debug!("Discarding late fetch completion, screen already settled");
            return;
        }

        self.state = match outcome.error {
            Some(message) => ListState::Failed { message },
            None => ListState::Ready {
                records: outcome.records,
                source: outcome.source,
            },
        };
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// The in-memory batch the detail view resolves against. Empty unless
    /// the activation reached `Ready`.
    pub fn records(&self) -> &[UserRecord] {
        match &self.state {
            ListState::Ready { records, .. } => records,
            _ => &[],
        }
    }
}
