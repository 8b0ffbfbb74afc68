//! Configuration validation errors.

use thiserror::Error;

/// Rejections produced by [`Config::validate`](crate::Config::validate)
/// and registry construction. All of them are fatal at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No clusters were configured at all.
    #[error("clusters map is empty")]
    EmptyClusters,

    /// The default cluster name was left blank.
    #[error("default cluster name not specified")]
    NoDefaultCluster,

    /// The default cluster name does not match any configured cluster.
    #[error("default cluster not found in clusters map")]
    DefaultClusterNotFound,

    /// A cluster was registered under an empty name.
    #[error("cluster name is empty")]
    EmptyClusterName,

    /// A cluster has no addresses to connect to.
    #[error("cluster {cluster:?} has no addresses")]
    EmptyAddresses { cluster: String },

    /// A cluster declares an unsupported Elasticsearch major version.
    #[error("cluster {cluster:?} has invalid ES version {version} (must be 8 or 9)")]
    InvalidVersion { cluster: String, version: u8 },

    /// A cluster's first address is not an absolute URL.
    #[error("cluster {cluster:?} has invalid base URL {address:?} (must be absolute URL)")]
    InvalidBaseUrl { cluster: String, address: String },
}
