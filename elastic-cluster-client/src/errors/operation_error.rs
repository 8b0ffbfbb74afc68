//! Typed operation errors.

use thiserror::Error;

use crate::errors::{MutationError, TransportError};

/// Failures raised by the typed Elasticsearch operations.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The operation requires an index name.
    #[error("index name is required")]
    IndexRequired,

    /// The operation requires a document ID.
    #[error("document ID is required")]
    DocumentIdRequired,

    /// The operation requires a point-in-time ID.
    #[error("PIT ID is required")]
    PitIdRequired,

    /// Elasticsearch answered outside the 2xx range. The body is not
    /// decoded; the status is surfaced as-is.
    #[error("{op} returned status code {status}")]
    Status { op: &'static str, status: u16 },

    /// Elasticsearch answered 2xx with a body the typed response could not
    /// be decoded from.
    #[error("failed to decode response (status {status}): {source}")]
    ResponseDecode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialised.
    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),

    /// The transport failed before a response was produced.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The company filter could not be injected into the query.
    #[error(transparent)]
    Mutation(#[from] MutationError),
}
