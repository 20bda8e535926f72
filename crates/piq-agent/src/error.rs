//! Agent transport error types.

use thiserror::Error;

/// Errors that keep an agent call from producing a response envelope.
///
/// Every variant is a transport failure from the caller's point of view; an
/// envelope that reports `success: false` is not an error here.
#[derive(Debug, Error)]
pub enum AgentError {
    /// No agent endpoint is configured.
    #[error("agent service is not configured (set agent.base_url or PROSPECTIQ_AGENT__BASE_URL)")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("agent did not respond within {secs}s")]
    Timeout { secs: u64 },

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The response body was not a valid envelope.
    #[error("malformed agent response: {0}")]
    Decode(String),
}
