// Directory batch operations: truncation, fallback substitution and
// detail lookup over the in-memory batch.

use crate::core::error::FetchError;
use crate::directory::mock::mock_users;
use crate::models::user::UserRecord;

/// Maximum number of users held in a loaded batch
pub const MAX_USERS: usize = 12;

/// Where a batch came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchSource {
    Live,
    Mock,
}

/// Outcome of one directory fetch: a bounded ordered batch, its source,
/// and the user-facing error message when the fetch did not fully succeed.
#[derive(Clone, Debug)]
pub struct DirectoryFetch {
    pub records: Vec<UserRecord>,
    pub source: FetchSource,
    pub error: Option<String>,
}

impl DirectoryFetch {
    /// Successful live response, truncated to the batch cap
    pub fn live(records: Vec<UserRecord>) -> Self {
        Self {
            records: truncate(records),
            source: FetchSource::Live,
            error: None,
        }
    }

    /// Mock substitution for a failed fetch. The error's display text is
    /// the message shown to the user.
    pub fn fallback(error: &FetchError) -> Self {
        Self {
            records: truncate(mock_users()),
            source: FetchSource::Mock,
            error: Some(error.to_string()),
        }
    }
}

/// Take the first `MAX_USERS` entries in existing order. No sorting, no
/// dedup; ID uniqueness is guaranteed upstream.
pub fn truncate(mut records: Vec<UserRecord>) -> Vec<UserRecord> {
    records.truncate(MAX_USERS);
    records
}

/// Find the record with the given ID, or synthesize a placeholder so the
/// detail view is total over all integer IDs.
pub fn resolve_user(records: &[UserRecord], id: i64) -> UserRecord {
    records
        .iter()
        .find(|user| user.id == id)
        .cloned()
        .unwrap_or_else(|| UserRecord::new(id, "Unknown User", "unknown@example.com"))
}
