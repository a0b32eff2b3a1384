// Error types for dashboard publishing
use thiserror::Error;

/// Failures reported by the remote collaborators (listing and writes).
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The remote answered 404. During a listing this means "nothing there yet".
    #[error("remote resource not found: {0}")]
    NotFound(String),

    #[error("remote API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode remote response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A local precondition failed. No request was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Exactly one remote dashboard already has this name and the caller did
    /// not force (or declined) the overwrite.
    #[error("dashboard '{name}' already exists with id {id}")]
    AlreadyExists { name: String, id: String },

    #[error("dashboard '{name}' has {} exact matches ({}); refusing to pick one", .ids.len(), .ids.join(", "))]
    MultipleExactMatches { name: String, ids: Vec<String> },

    #[error("failed to list dashboards named '{name}'")]
    RemoteRead {
        name: String,
        #[source]
        source: RemoteError,
    },

    #[error("dashboard write failed: {0}")]
    RemoteWrite(#[source] RemoteError),

    #[error("failed to serialize dashboard: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("confirmation prompt failed: {0}")]
    Confirmation(String),
}

impl DashboardError {
    /// Conflicts the caller can resolve by retrying with `Force` or `Interactive`.
    pub fn is_recoverable_conflict(&self) -> bool {
        matches!(self, DashboardError::AlreadyExists { .. })
    }
}
