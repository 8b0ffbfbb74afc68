//! Index classification and company-filter injection.
//!
//! Together these two pure functions carry the company-isolation
//! guarantee: every query bound for an index that holds more than one
//! company's rows gets a `company_id` predicate before it leaves the
//! process.

mod mutator;
mod target;

pub use mutator::inject_company_filter;
pub use target::detect_index_target;
