//! # Elastic Cluster Client
//!
//! This crate routes Elasticsearch requests across a fleet of clusters
//! running mixed major versions (v8 and v9). Each logical request names a
//! company and an index type; the resolver decides which physical cluster
//! and index serve that pair, and the client guarantees company isolation
//! by injecting a `company_id` filter into every query that targets a
//! shared index.
//!
//! The crate is organised around three startup-time singletons:
//!
//! - [`Registry`]: immutable map from cluster name to a preconfigured
//!   transport, built once from validated [`Config`].
//! - [`Resolver`]: routing oracle combining a Redis cache, the
//!   elastic-sync service, and a deterministic fallback for companies that
//!   have not been migrated yet.
//! - [`ElasticClient`]: typed per-operation surface over one cluster's
//!   transport.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod query;
pub mod registry;
pub mod resolver;
pub mod transport;

pub use client::ElasticClient;
pub use config::{ClusterConfig, Config};
pub use errors::{
    CacheError, ConfigError, MutationError, OperationError, ResolveError, TransportError,
};
pub use interfaces::{
    ElasticTransport, SettingsCache, SyncGateway, TransportRequest, TransportResponse,
};
pub use query::{detect_index_target, inject_company_filter};
pub use registry::{Registry, RegistryEntry};
pub use resolver::{HttpSyncGateway, RedisSettingsCache, Resolver, ResolverConfig};
pub use transport::{EsVersion, HttpTransport};
