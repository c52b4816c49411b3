//! Error taxonomy for tool dispatch.

use thiserror::Error;

/// Everything that can go wrong between a tool call and its upstream
/// response. The `Display` strings are the messages callers see; all
/// variants are converted into an `isError` tool result at the dispatch
/// boundary and never escape as a fault.
#[derive(Debug, Error)]
pub enum CallError {
    /// The tool name is not in the registry. Detected locally, no request
    /// is sent.
    #[error("Tool '{0}' not found")]
    ToolNotFound(String),

    /// No API token is configured. Detected locally, no request is sent.
    #[error("NOKO_API_TOKEN is not configured")]
    MissingCredential,

    /// Noko answered with a 4xx/5xx status.
    #[error("Noko API error {status}: {message}")]
    UpstreamRejected { status: u16, message: String },

    /// The request never completed: connection failure, timeout, TLS error.
    #[error("Noko API request failed: {0}")]
    UpstreamUnavailable(String),
}

/// A failure below the HTTP layer, reported by the transport.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for CallError {
    fn from(err: TransportError) -> Self {
        CallError::UpstreamUnavailable(err.0)
    }
}
