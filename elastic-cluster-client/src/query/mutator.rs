//! Company filter injection.

use elastic_cluster_shared::IndexTarget;
use serde_json::{json, Map, Value};

use crate::errors::MutationError;

/// Guarantee that a query bound for a shared index filters on the company.
///
/// For a [`IndexTarget::PerCompany`] target the document is left untouched.
/// For a shared target the document ends up with a `bool` query whose
/// `filter` clause contains `{"term": {"company_id.keyword": company_id}}`:
///
/// - no top-level `query`: a fresh `bool.filter` is inserted
/// - `query.bool` without `filter`: the filter array is added
/// - `query.bool.filter` is an array: the predicate is appended
/// - `query.bool.filter` is an object: promoted to a two-element array
/// - `query.bool.filter` is anything else: [`MutationError::UnexpectedFilterType`]
/// - any non-`bool` query: wrapped into `bool.must` alongside the filter
///
/// Every sibling key (`must`, `should`, `must_not`, `minimum_should_match`,
/// `sort`, `aggs`, ...) is preserved. The predicate is appended as-is on
/// every call, so re-applying it duplicates the entry; callers own a fresh
/// copy of the document per dispatch.
///
/// The predicate key is literally `company_id.keyword`: the fleet maps
/// `company_id` either as `keyword` directly or as a multi-field where
/// `.keyword` exists, so the suffixed form works on both.
pub fn inject_company_filter(
    document: &mut Map<String, Value>,
    company_id: &str,
    target: IndexTarget,
) -> Result<(), MutationError> {
    if target == IndexTarget::PerCompany {
        return Ok(());
    }

    if company_id.is_empty() {
        return Err(MutationError::CompanyIdRequired);
    }

    let company_filter = json!({
        "term": {
            "company_id.keyword": company_id,
        }
    });

    let Some(query) = document.get_mut("query") else {
        document.insert(
            "query".to_string(),
            json!({
                "bool": {
                    "filter": [company_filter],
                }
            }),
        );
        return Ok(());
    };

    if let Some(bool_clause) = query.get_mut("bool").and_then(Value::as_object_mut) {
        return inject_into_bool(bool_clause, company_filter);
    }

    // Wrap whatever non-bool query was there into a bool that also filters.
    let original = query.take();
    *query = json!({
        "bool": {
            "must": [original],
            "filter": [company_filter],
        }
    });
    Ok(())
}

fn inject_into_bool(
    bool_clause: &mut Map<String, Value>,
    company_filter: Value,
) -> Result<(), MutationError> {
    match bool_clause.get_mut("filter") {
        None => {
            bool_clause.insert("filter".to_string(), Value::Array(vec![company_filter]));
        }
        Some(Value::Array(filters)) => {
            filters.push(company_filter);
        }
        Some(existing @ Value::Object(_)) => {
            let prior = existing.take();
            *existing = Value::Array(vec![prior, company_filter]);
        }
        Some(other) => {
            return Err(MutationError::UnexpectedFilterType(json_kind(other)));
        }
    }

    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
