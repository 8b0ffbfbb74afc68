//! HTTP transport for Elasticsearch clusters.
//!
//! The fleet runs two major versions side by side. Both speak the same
//! REST surface; what differs is the compatibility media type the client
//! must advertise. The adapter here carries that difference so nothing
//! above it ever branches on version again.

mod http_transport;

pub use http_transport::HttpTransport;

/// Supported Elasticsearch major versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EsVersion {
    V8,
    V9,
}

impl EsVersion {
    /// The numeric major version.
    pub fn as_u8(self) -> u8 {
        match self {
            EsVersion::V8 => 8,
            EsVersion::V9 => 9,
        }
    }

    /// The compatibility media type advertised to the cluster.
    pub fn accept_header(self) -> &'static str {
        match self {
            EsVersion::V8 => "application/vnd.elasticsearch+json; compatible-with=8",
            EsVersion::V9 => "application/vnd.elasticsearch+json; compatible-with=9",
        }
    }
}

impl std::fmt::Display for EsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
