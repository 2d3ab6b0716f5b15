use crate::error::CoreResult;
use crate::net::{parse_http_endpoint, HttpTransport};
use crate::probe::report::ProbeReport;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

pub const DEFAULT_ESTIMATE_URL: &str = "https://api.climatiq.io/estimate";
pub const DEFAULT_ACTIVITY_ID: &str = "electricity-energy_source_grid_mix";
pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_UNIT: &str = "kWh";
pub const DEFAULT_ENERGY: f64 = 1.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmissionFactor {
    pub activity_id: String,
    pub region: String,
    pub unit: String,
}

impl Default for EmissionFactor {
    fn default() -> Self {
        Self {
            activity_id: DEFAULT_ACTIVITY_ID.to_string(),
            region: DEFAULT_REGION.to_string(),
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

/// One estimate call used to check that a Climatiq key is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeRequest {
    pub url: String,
    pub api_key: String,
    pub emission_factor: EmissionFactor,
    pub energy: f64,
}

impl ProbeRequest {
    /// 1 kWh of US grid-mix electricity against the public estimate endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_ESTIMATE_URL.to_string(),
            api_key: api_key.into(),
            emission_factor: EmissionFactor::default(),
            energy: DEFAULT_ENERGY,
        }
    }

    pub fn headers(&self) -> Vec<(String, String)> {
        vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.api_key),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]
    }

    pub fn body(&self) -> Value {
        // Whole numbers go out as integers, matching `"energy": 1`.
        let energy = if self.energy.fract() == 0.0 && self.energy.abs() < 1e15 {
            json!(self.energy as i64)
        } else {
            json!(self.energy)
        };
        json!({
            "emission_factor": self.emission_factor,
            "parameters": { "energy": energy }
        })
    }
}

/// Sends the request once. Non-200 statuses are reported, not raised.
pub fn run_probe(transport: &dyn HttpTransport, request: &ProbeRequest) -> CoreResult<ProbeReport> {
    let url = parse_http_endpoint(&request.url)?;
    info!(
        url = %url,
        activity_id = %request.emission_factor.activity_id,
        region = %request.emission_factor.region,
        "probing estimate endpoint"
    );
    let resp = transport.post_json(url.as_str(), &request.headers(), &request.body())?;
    info!(status = resp.status, "estimate endpoint answered");
    ProbeReport::from_response(resp.status, &resp.text)
}
