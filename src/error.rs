// Error types shared by the loader and the HTTP layer.
//
// Loading errors are fatal for the whole run. Transport errors are split by
// the stage that failed, because the submitter treats them differently.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed source error so fake transports in tests can produce the same
/// variants as the reqwest-backed client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to obtain the list of users from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse users payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while creating one user on the remote API.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be built, so nothing was sent.
    #[error("failed to build request: {0}")]
    Request(#[source] BoxError),

    #[error("failed to send request: {0}")]
    Send(#[source] BoxError),

    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),
}

impl TransportError {
    /// Whether the remaining records must be abandoned after this error.
    pub fn aborts_run(&self) -> bool {
        matches!(self, TransportError::Send(_) | TransportError::Body(_))
    }
}
