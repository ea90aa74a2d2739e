//! HTTP client for the WAN controller API
//!
//! A thin shim over the controller's REST endpoints. The pipeline only
//! depends on the response shapes in [`crate::models`]; every non-success
//! status is surfaced with its raw body for diagnosis, and no call retries.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::models::{MetricsResponse, SitesResponse, TopologyResponse};
use crate::window::TimeWindow;

const AUTH_HEADER: &str = "x-auth-token";

/// Granularity the metrics source reports capacity at.
pub const SAMPLING_INTERVAL: &str = "5min";

/// Client for the controller's profile, inventory, topology and metrics
/// endpoints.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given controller base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        let base_url = Url::parse(base_url)?;
        Ok(ApiClient {
            client,
            base_url,
            token: None,
        })
    }

    /// Validate `token` against the profile endpoint and keep it for the
    /// rest of the session.
    pub async fn login(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        let profile: ProfileResponse = self.get("api/v1/profile").await?;
        if profile.tenant_id.is_none() {
            self.token = None;
            return Err(Error::Authentication(
                "token rejected by the controller, please check it".into(),
            ));
        }
        Ok(())
    }

    /// Tenant name plus the ordered site inventory.
    pub async fn sites(&self) -> Result<SitesResponse> {
        self.get("api/v1/sites").await
    }

    /// Links reachable from the given site.
    pub async fn topology(&self, site_id: &str) -> Result<TopologyResponse> {
        let request = TopologyRequest {
            topology_type: "basenet".into(),
            nodes: vec![site_id.to_string()],
        };
        self.post("api/v1/topology", &request).await
    }

    /// Capacity samples for the window and path named in `request`.
    pub async fn metrics(&self, request: &MetricsRequest) -> Result<MetricsResponse> {
        self.post("api/v1/metrics/monitor", request).await
    }

    /// Best-effort session teardown; failures are logged, never surfaced.
    pub async fn logout(&self) {
        let url = match self.base_url.join("api/v1/logout") {
            Ok(url) => url,
            Err(err) => {
                warn!(error = %err, "skipping logout");
                return;
            }
        };
        match self.apply_token(self.client.get(url)).send().await {
            Ok(response) if response.status().is_success() => debug!("logged out"),
            Ok(response) => warn!(status = %response.status(), "logout rejected"),
            Err(err) => warn!(error = %err, "logout failed"),
        }
    }

    fn apply_token(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path)?;
        debug!(%url, "GET");
        let response = self.apply_token(self.client.get(url)).send().await?;
        Self::decode(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.base_url.join(path)?;
        debug!(%url, "POST");
        let response = self
            .apply_token(self.client.post(url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }
        Ok(response.json().await?)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    tenant_id: Option<String>,
}

/// Topology query scoped to one site.
#[derive(Debug, Clone, Serialize)]
pub struct TopologyRequest {
    #[serde(rename = "type")]
    pub topology_type: String,
    pub nodes: Vec<String>,
}

/// Typed metrics query body; field names match the controller wire format.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsRequest {
    pub start_time: String,
    pub end_time: String,
    pub interval: String,
    pub view: MetricsView,
    pub filter: MetricsFilter,
    pub metrics: Vec<MetricQuery>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsView {
    pub summary: bool,
    pub individual: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsFilter {
    pub site: Vec<String>,
    pub path: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricQuery {
    pub name: String,
    pub statistics: Vec<String>,
    pub unit: String,
}

impl MetricsRequest {
    /// Per-direction average path capacity in Mbps over `window`, at the
    /// fixed 5-minute sampling interval.
    pub fn path_capacity(site_id: &str, path_id: &str, window: &TimeWindow) -> Self {
        MetricsRequest {
            start_time: window.start_iso(),
            end_time: window.end_iso(),
            interval: SAMPLING_INTERVAL.into(),
            view: MetricsView {
                summary: false,
                individual: "direction".into(),
            },
            filter: MetricsFilter {
                site: vec![site_id.to_string()],
                path: vec![path_id.to_string()],
            },
            metrics: vec![MetricQuery {
                name: "PathCapacity".into(),
                statistics: vec!["average".into()],
                unit: "Mbps".into(),
            }],
        }
    }
}
