//! Query mutation errors.

use thiserror::Error;

/// Failures raised while injecting the company filter into a query.
///
/// Both variants are caller bugs and surface before any network call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MutationError {
    /// A shared index was queried without a company ID.
    #[error("company_id is required for shared index queries")]
    CompanyIdRequired,

    /// The query's `bool.filter` holds something that is neither an array
    /// nor an object, so the company filter cannot be appended safely.
    #[error("unexpected filter type: {0}")]
    UnexpectedFilterType(&'static str),
}
