//! Routing record for a company's index on a specific cluster.
//!
//! This is the value returned by the elastic-sync service and cached in
//! Redis. It tells the client which physical cluster and index serve a
//! given `(company_id, index_type)` pair.

use serde::{Deserialize, Serialize};

/// Index type for the per-company product tree.
pub const INDEX_TYPE_PRODUCT_TREE: &str = "product_tree";

/// Index type for orders.
pub const INDEX_TYPE_ORDER: &str = "order";

/// Routing information for one `(company_id, index_type)` pair.
///
/// An empty `cluster_name` means the company has not been migrated yet and
/// the caller should fall back to the default cluster with a conventional
/// index name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInfo {
    /// Opaque numeric cluster identifier assigned by the sync service.
    #[serde(default)]
    pub cluster_id: i64,

    /// Elasticsearch major version reported by the sync service.
    /// Carried through as sent on the wire; routing keys off `cluster_name`.
    #[serde(default)]
    pub version: i64,

    /// Name of the cluster holding the company's data. Empty when the
    /// company has no routing entry yet.
    #[serde(default)]
    pub cluster_name: String,

    /// Physical index name on that cluster.
    #[serde(default)]
    pub index_name: String,
}

impl ClusterInfo {
    /// Returns true when this record carries an actual routing decision.
    pub fn has_routing(&self) -> bool {
        !self.cluster_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let info: ClusterInfo = serde_json::from_str(
            r#"{"cluster_id":3,"version":9,"cluster_name":"tier-gold","index_name":"orders_all"}"#,
        )
        .unwrap();

        assert_eq!(info.cluster_id, 3);
        assert_eq!(info.version, 9);
        assert_eq!(info.cluster_name, "tier-gold");
        assert_eq!(info.index_name, "orders_all");
        assert!(info.has_routing());
    }

    #[test]
    fn test_decode_partial_record_uses_defaults() {
        let info: ClusterInfo = serde_json::from_str("{}").unwrap();

        assert_eq!(info.cluster_id, 0);
        assert!(info.cluster_name.is_empty());
        assert!(!info.has_routing());
    }
}
