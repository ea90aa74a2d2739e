//! Data models shared across the pipeline stages

use serde::{Deserialize, Serialize};

/// Discriminator for links that terminate on a physical internet circuit.
pub const INTERNET_STUB: &str = "internet-stub";

/// Traffic direction on a bidirectional WAN link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ingress,
    Egress,
}

impl Direction {
    /// Parse a direction label from the metrics response. Unknown labels map
    /// to `None` and are dropped by the partitioner rather than rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Ingress" => Some(Direction::Ingress),
            "Egress" => Some(Direction::Egress),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ingress => "Ingress",
            Direction::Egress => "Egress",
        }
    }
}

/// A site record from the tenant inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Tenant inventory: the tenant name plus its ordered site records.
#[derive(Debug, Clone, Deserialize)]
pub struct SitesResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<Site>,
}

/// A link from the topology query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub link_type: String,
    pub network: String,
    pub path_id: String,
}

impl Link {
    pub fn is_internet_stub(&self) -> bool {
        self.link_type == INTERNET_STUB
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopologyResponse {
    #[serde(default)]
    pub links: Vec<Link>,
}

// Metrics payload nesting: metrics[0].series[*].data[0].datapoints[*].value

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub metrics: Vec<MetricResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricResult {
    #[serde(default)]
    pub series: Vec<DirectionBlock>,
}

/// One per-direction block of sampled values.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionBlock {
    pub view: DirectionView,
    #[serde(default)]
    pub data: Vec<DataGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionView {
    pub direction: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataGroup {
    #[serde(default)]
    pub datapoints: Vec<Datapoint>,
}

/// A single sample; `value` is absent when the collector had a gap.
#[derive(Debug, Clone, Deserialize)]
pub struct Datapoint {
    pub value: Option<f64>,
}
