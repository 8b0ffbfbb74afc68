//! Interface definitions for the client's injectable collaborators.
//!
//! These traits sit at the seams where the client talks to the outside
//! world (Elasticsearch itself, the Redis settings cache, the elastic-sync
//! service) so that each can be swapped or mocked independently.

mod settings_cache;
mod sync_gateway;
mod transport;

pub use settings_cache::SettingsCache;
pub use sync_gateway::SyncGateway;
pub use transport::{ElasticTransport, TransportRequest, TransportResponse};
