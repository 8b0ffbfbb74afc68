//! Cluster fleet configuration and validation.
//!
//! Configuration is assembled by the host application (typically from its
//! environment), validated once, and frozen. Validation performs no I/O;
//! every failure here is fatal to startup.

use std::collections::HashMap;

use url::Url;

use crate::errors::ConfigError;

/// Configuration for a single Elasticsearch cluster.
#[derive(Debug, Clone, Default)]
pub struct ClusterConfig {
    /// Cluster name (e.g. "tier-gold", "tier-silver").
    pub name: String,
    /// Elasticsearch major version: 8 or 9.
    pub version: u8,
    /// Cluster addresses. The first address is the canonical base URL used
    /// to resolve request paths; ordering is otherwise not interpreted.
    pub addresses: Vec<String>,
    /// Authentication username.
    pub username: String,
    /// Authentication password.
    pub password: String,
}

/// Configuration for the whole cluster fleet.
///
/// The default cluster doubles as the destination for companies that have
/// no routing entry yet, so it must be a cluster that can safely receive
/// any non-migrated company's traffic. That is an operational contract
/// between whoever assembles this config and whoever runs the migration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Name of the default cluster. Must be a key in `clusters`.
    pub default_cluster: String,
    /// Map of cluster name to cluster configuration.
    pub clusters: HashMap<String, ClusterConfig>,
}

impl Config {
    /// Create a config with the given default cluster name and no clusters.
    pub fn new(default_cluster: impl Into<String>) -> Self {
        Self {
            default_cluster: default_cluster.into(),
            clusters: HashMap::new(),
        }
    }

    /// Add a cluster, keyed by its own name.
    ///
    /// Keying the map through this method keeps the map key and the
    /// cluster's `name` field in agreement.
    pub fn with_cluster(mut self, cluster: ClusterConfig) -> Self {
        self.clusters.insert(cluster.name.clone(), cluster);
        self
    }

    /// Check that the configuration is complete and internally consistent.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the configuration can be used to build a registry
    /// * `Err(ConfigError)` - The first rule violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clusters.is_empty() {
            return Err(ConfigError::EmptyClusters);
        }

        if self.default_cluster.is_empty() {
            return Err(ConfigError::NoDefaultCluster);
        }

        if !self.clusters.contains_key(&self.default_cluster) {
            return Err(ConfigError::DefaultClusterNotFound);
        }

        for (name, cluster) in &self.clusters {
            if name.is_empty() {
                return Err(ConfigError::EmptyClusterName);
            }
            if cluster.addresses.is_empty() {
                return Err(ConfigError::EmptyAddresses {
                    cluster: name.clone(),
                });
            }
            if cluster.version != 8 && cluster.version != 9 {
                return Err(ConfigError::InvalidVersion {
                    cluster: name.clone(),
                    version: cluster.version,
                });
            }
            if parse_base_url(&cluster.addresses[0]).is_none() {
                return Err(ConfigError::InvalidBaseUrl {
                    cluster: name.clone(),
                    address: cluster.addresses[0].clone(),
                });
            }
        }

        Ok(())
    }
}

/// Parse an address as an absolute base URL (scheme and host required).
pub(crate) fn parse_base_url(address: &str) -> Option<Url> {
    let url = Url::parse(address).ok()?;
    if url.host_str().is_none() {
        return None;
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(name: &str, version: u8, address: &str) -> ClusterConfig {
        ClusterConfig {
            name: name.to_string(),
            version,
            addresses: vec![address.to_string()],
            username: "elastic".to_string(),
            password: "changeme".to_string(),
        }
    }

    fn valid_config() -> Config {
        Config::new("tier-gold")
            .with_cluster(cluster("tier-gold", 8, "http://es-gold-1:9200"))
            .with_cluster(cluster("tier-silver", 9, "http://es-silver-1:9200"))
    }

    #[test]
    fn test_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_clusters() {
        let config = Config::new("tier-gold");
        assert_eq!(config.validate(), Err(ConfigError::EmptyClusters));
    }

    #[test]
    fn test_no_default_cluster() {
        let config = Config::new("").with_cluster(cluster("tier-gold", 8, "http://es-1:9200"));
        assert_eq!(config.validate(), Err(ConfigError::NoDefaultCluster));
    }

    #[test]
    fn test_default_cluster_not_found() {
        let config =
            Config::new("tier-gold").with_cluster(cluster("tier-silver", 8, "http://es-1:9200"));
        assert_eq!(config.validate(), Err(ConfigError::DefaultClusterNotFound));
    }

    #[test]
    fn test_empty_cluster_name() {
        let config = Config::new("tier-gold")
            .with_cluster(cluster("tier-gold", 8, "http://es-1:9200"))
            .with_cluster(cluster("", 8, "http://es-2:9200"));
        assert_eq!(config.validate(), Err(ConfigError::EmptyClusterName));
    }

    #[test]
    fn test_empty_addresses() {
        let mut bad = cluster("tier-gold", 8, "http://es-1:9200");
        bad.addresses.clear();
        let config = Config::new("tier-gold").with_cluster(bad);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyAddresses {
                cluster: "tier-gold".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_version() {
        let config = Config::new("tier-gold").with_cluster(cluster("tier-gold", 7, "http://es-1:9200"));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidVersion {
                cluster: "tier-gold".to_string(),
                version: 7
            })
        );
    }

    #[test]
    fn test_invalid_base_url() {
        for address in ["es-1:9200", "not a url", "/relative/path"] {
            let config = Config::new("tier-gold").with_cluster(cluster("tier-gold", 8, address));
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidBaseUrl {
                    cluster: "tier-gold".to_string(),
                    address: address.to_string()
                }),
                "address {:?} should be rejected",
                address
            );
        }
    }

    #[test]
    fn test_parse_base_url_accepts_absolute() {
        let url = parse_base_url("https://es-1.internal:9200").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("es-1.internal"));
    }
}
