//! Point-in-time request and response types.

use serde::Deserialize;

/// Parameters for opening a point-in-time reader on an index.
#[derive(Debug, Clone, Default)]
pub struct OpenPitRequest {
    /// Index name or pattern.
    pub index: String,
    /// Keep-alive duration (e.g. "1m"). Defaults to one minute when unset.
    pub keep_alive: Option<String>,
}

/// An open point-in-time handle.
#[derive(Debug, Clone, Deserialize)]
pub struct Pit {
    pub id: String,
}
