//! Cluster registry.
//!
//! All transports are created once during startup from validated
//! configuration. After that the registry is read-only shared state;
//! concurrent lookups need no synchronisation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use url::Url;

use crate::config::{parse_base_url, Config};
use crate::errors::ConfigError;
use crate::interfaces::ElasticTransport;
use crate::transport::{EsVersion, HttpTransport};

/// A registered Elasticsearch cluster with its pre-created transport.
#[derive(Clone)]
pub struct RegistryEntry {
    name: String,
    version: EsVersion,
    base_url: Url,
    transport: Arc<dyn ElasticTransport>,
}

impl RegistryEntry {
    /// Cluster name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elasticsearch major version.
    pub fn version(&self) -> EsVersion {
        self.version
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Shared handle to the cluster's transport.
    pub fn transport(&self) -> Arc<dyn ElasticTransport> {
        Arc::clone(&self.transport)
    }
}

/// Immutable map of cluster name to registry entry with a designated
/// default.
pub struct Registry {
    default_name: String,
    by_name: HashMap<String, RegistryEntry>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("default_name", &self.default_name)
            .field("by_name", &self.by_name.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Registry {
    /// Build a registry from configuration.
    ///
    /// Validates the config, then creates one transport per cluster bound
    /// to that cluster's first address. This is the only place transports
    /// are created; everything downstream borrows them.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut by_name = HashMap::with_capacity(config.clusters.len());

        for (name, cluster) in &config.clusters {
            let base_url = parse_base_url(&cluster.addresses[0]).ok_or_else(|| {
                ConfigError::InvalidBaseUrl {
                    cluster: name.clone(),
                    address: cluster.addresses[0].clone(),
                }
            })?;

            let version = match cluster.version {
                8 => EsVersion::V8,
                9 => EsVersion::V9,
                // Unreachable after validate(); kept so the match is total.
                version => {
                    return Err(ConfigError::InvalidVersion {
                        cluster: name.clone(),
                        version,
                    })
                }
            };

            let transport = match version {
                EsVersion::V8 => HttpTransport::v8(
                    base_url.clone(),
                    cluster.username.as_str(),
                    cluster.password.as_str(),
                ),
                EsVersion::V9 => HttpTransport::v9(
                    base_url.clone(),
                    cluster.username.as_str(),
                    cluster.password.as_str(),
                ),
            }
            .map_err(|_| ConfigError::InvalidBaseUrl {
                cluster: name.clone(),
                address: cluster.addresses[0].clone(),
            })?;

            info!(
                cluster = %name,
                version = %version,
                base_url = %base_url,
                "registered elasticsearch cluster"
            );

            by_name.insert(
                name.clone(),
                RegistryEntry {
                    name: name.clone(),
                    version,
                    base_url,
                    transport: Arc::new(transport),
                },
            );
        }

        Ok(Self {
            default_name: config.default_cluster.clone(),
            by_name,
        })
    }

    /// Look up an entry by cluster name. An empty name resolves to the
    /// default cluster.
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        let name = if name.is_empty() {
            &self.default_name
        } else {
            name
        };
        self.by_name.get(name)
    }

    /// The default cluster's entry.
    pub fn default_entry(&self) -> &RegistryEntry {
        self.by_name
            .get(&self.default_name)
            .expect("default cluster is present after construction")
    }

    /// Name of the default cluster.
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// All registered cluster names, in no particular order.
    pub fn cluster_names(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    /// Iterate over all registered entries.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.by_name.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClusterConfig;

    fn fleet_config() -> Config {
        Config::new("tier-gold")
            .with_cluster(ClusterConfig {
                name: "tier-gold".to_string(),
                version: 8,
                addresses: vec![
                    "http://es-gold-1:9200".to_string(),
                    "http://es-gold-2:9200".to_string(),
                ],
                username: "elastic".to_string(),
                password: "changeme".to_string(),
            })
            .with_cluster(ClusterConfig {
                name: "tier-silver".to_string(),
                version: 9,
                addresses: vec!["http://es-silver-1:9200".to_string()],
                username: "elastic".to_string(),
                password: "changeme".to_string(),
            })
    }

    #[test]
    fn test_from_config_registers_all_clusters() {
        let registry = Registry::from_config(&fleet_config()).unwrap();

        let mut names = registry.cluster_names();
        names.sort();
        assert_eq!(names, vec!["tier-gold", "tier-silver"]);
    }

    #[test]
    fn test_repeated_lookups_return_identical_entries() {
        let registry = Registry::from_config(&fleet_config()).unwrap();

        let first = registry.get("tier-silver").unwrap();
        let second = registry.get("tier-silver").unwrap();

        assert_eq!(first.name(), second.name());
        assert_eq!(first.version(), second.version());
        assert_eq!(first.base_url(), second.base_url());
        assert!(Arc::ptr_eq(&first.transport(), &second.transport()));
    }

    #[test]
    fn test_empty_name_resolves_to_default() {
        let registry = Registry::from_config(&fleet_config()).unwrap();

        let entry = registry.get("").unwrap();
        assert_eq!(entry.name(), "tier-gold");
        assert_eq!(entry.name(), registry.default_entry().name());
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let registry = Registry::from_config(&fleet_config()).unwrap();
        assert!(registry.get("tier-bronze").is_none());
    }

    #[test]
    fn test_entry_versions_follow_config() {
        let registry = Registry::from_config(&fleet_config()).unwrap();
        assert_eq!(registry.get("tier-gold").unwrap().version(), EsVersion::V8);
        assert_eq!(registry.get("tier-silver").unwrap().version(), EsVersion::V9);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config::new("tier-gold");
        assert_eq!(
            Registry::from_config(&config).unwrap_err(),
            ConfigError::EmptyClusters
        );
    }
}
