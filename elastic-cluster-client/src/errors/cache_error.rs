//! Settings cache errors.

use thiserror::Error;

/// Failures raised by the routing settings cache.
///
/// Inside [`Resolver::resolve`](crate::Resolver::resolve) these are
/// demoted to cache misses; they only surface from the explicit
/// invalidation operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The Redis command itself failed.
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// The routing record could not be encoded for storage.
    #[error("failed to encode settings payload: {0}")]
    Encode(#[from] serde_json::Error),
}
