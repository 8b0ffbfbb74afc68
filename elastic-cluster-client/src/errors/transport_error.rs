//! Transport-level errors.

use thiserror::Error;

/// Failures raised by the HTTP transport adapter.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The adapter was constructed with a base URL lacking scheme or host.
    #[error("transport base URL must be absolute (include scheme and host)")]
    MissingBaseUrl,

    /// The underlying HTTP client failed before a response was produced.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}
