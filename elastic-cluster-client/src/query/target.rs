//! Index target detection.

use elastic_cluster_shared::IndexTarget;

/// Decide whether an index is dedicated to one company or shared.
///
/// The fleet's naming convention suffixes per-company indices with the
/// owning company's UUID (e.g. `products_01234567-89ab-cdef-0123-456789abcdef`).
/// The check is purely syntactic: a final underscore-delimited segment of
/// 36 characters containing exactly four dashes counts as a UUID. Anything
/// else, including tier labels and bare names, is treated as shared and
/// therefore subject to filter injection.
pub fn detect_index_target(index_name: &str) -> IndexTarget {
    match index_name.rsplit_once('_') {
        Some((_, suffix)) if suffix.len() == 36 && suffix.matches('-').count() == 4 => {
            IndexTarget::PerCompany
        }
        _ => IndexTarget::Shared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_index_target() {
        let cases = [
            (
                "products_01234567-89ab-cdef-0123-456789abcdef",
                IndexTarget::PerCompany,
            ),
            ("products_shared", IndexTarget::Shared),
            ("products_tier_gold", IndexTarget::Shared),
            ("orders", IndexTarget::Shared),
            (
                "orders_v2_abcd1234-5678-90ab-cdef-123456789012",
                IndexTarget::PerCompany,
            ),
        ];

        for (index_name, expected) in cases {
            assert_eq!(
                detect_index_target(index_name),
                expected,
                "index {:?}",
                index_name
            );
        }
    }

    #[test]
    fn test_uuid_shaped_suffix_needs_exact_length_and_dashes() {
        // 36 chars but three dashes
        assert_eq!(
            detect_index_target("products_01234567x89ab-cdef-0123-456789abcdef"),
            IndexTarget::Shared
        );
        // four dashes but 35 chars
        assert_eq!(
            detect_index_target("products_1234567-89ab-cdef-0123-456789abcdef"),
            IndexTarget::Shared
        );
    }
}
