//! Store error types.

use thiserror::Error;

/// Errors surfaced while fetching per-user records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend failed to deliver a collection.
    #[error("failed to fetch {collection}: {reason}")]
    Fetch {
        /// Collection that was being fetched.
        collection: &'static str,
        /// Backend-reported reason.
        reason: String,
    },
}

impl StoreError {
    /// Creates a fetch error for the named collection.
    pub fn fetch(collection: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Fetch {
            collection,
            reason: reason.into(),
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
