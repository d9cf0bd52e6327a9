//! Failure taxonomy for a single acquisition step.

use thiserror::Error;

use crate::catalog::PayloadError;

/// Why one step of the fetch chain failed. Every variant is recovered by
/// moving on to the next step.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection refused, etc.).
    #[error("transport: {0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Body was not JSON, or not an array of objects.
    #[error("payload: {0}")]
    Payload(#[from] PayloadError),
    /// Relay answered, but without a string `contents` field.
    #[error("relay envelope: {0}")]
    Envelope(String),
    /// The blocking request thread panicked or was cancelled.
    #[error("request task: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Both network paths failed and there was nothing cached to fall back on.
#[derive(Debug, Error)]
#[error("no catalog available: direct request failed ({direct}); relay failed ({relay}); nothing cached")]
pub struct Exhausted {
    pub direct: FetchError,
    pub relay: FetchError,
}
