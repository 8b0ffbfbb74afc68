//! Classification of a physical index as company-dedicated or shared.

/// Whether an index holds a single company's data or rows from many.
///
/// Shared indices require a server-side `company_id` filter on every query;
/// per-company indices are already isolated by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    /// Index dedicated to one company, named with that company's UUID as
    /// its final underscore-delimited segment.
    PerCompany,

    /// Index holding documents from multiple companies.
    Shared,
}
