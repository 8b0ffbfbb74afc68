//! HTTP client for the elastic-sync service.

use std::time::Duration;

use async_trait::async_trait;
use elastic_cluster_shared::ClusterInfo;
use serde::Serialize;
use tracing::debug;

use crate::errors::ResolveError;
use crate::interfaces::SyncGateway;

/// Overall deadline for one sync-service call.
const DEFAULT_SYNC_TIMEOUT: Duration = Duration::from_secs(5);

/// Endpoint that refreshes and returns a company's routing record.
const REFRESH_PATH: &str = "/v1/company/refresh-es-info-cache";

#[derive(Serialize)]
struct RefreshRequest<'a> {
    company_id: &'a str,
    #[serde(rename = "type")]
    index_type: &'a str,
}

/// Sync gateway talking to the elastic-sync service over HTTP.
///
/// The service treats 400 and 404 as "no routing entry yet", which is a
/// normal answer rather than a failure; only unexpected statuses and
/// transport problems surface as errors.
pub struct HttpSyncGateway {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSyncGateway {
    /// Create a gateway for the sync service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a gateway reusing an existing HTTP client.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http,
            base_url,
            timeout: DEFAULT_SYNC_TIMEOUT,
        }
    }

    /// Override the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl SyncGateway for HttpSyncGateway {
    async fn fetch(
        &self,
        company_id: &str,
        index_type: &str,
    ) -> Result<Option<ClusterInfo>, ResolveError> {
        let url = format!("{}{}", self.base_url, REFRESH_PATH);

        let response = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(&RefreshRequest {
                company_id,
                index_type,
            })
            .send()
            .await
            .map_err(|err| ResolveError::SyncTransport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| ResolveError::SyncTransport(err.to_string()))?;

        match status {
            400 | 404 => {
                debug!(company_id = %company_id, index_type = %index_type, status, "no routing entry");
                Ok(None)
            }
            200 => {
                let info: ClusterInfo = serde_json::from_str(&body)
                    .map_err(|err| ResolveError::SyncDecode(err.to_string()))?;

                // An empty cluster name on a 200 means the same as 404.
                if info.has_routing() {
                    Ok(Some(info))
                } else {
                    Ok(None)
                }
            }
            status => Err(ResolveError::SyncStatus { status, body }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_stripped() {
        let gateway = HttpSyncGateway::new("http://elastic-sync:8080//");
        assert_eq!(gateway.base_url, "http://elastic-sync:8080");
    }

    #[test]
    fn test_refresh_request_wire_shape() {
        let body = serde_json::to_value(RefreshRequest {
            company_id: "company_123",
            index_type: "product_tree",
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"company_id": "company_123", "type": "product_tree"})
        );
    }
}
