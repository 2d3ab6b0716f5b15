use crate::classifier::heuristic::HeuristicClassifier;
use crate::classifier::interface::MaterialClassifier;
use crate::error::{CoreError, CoreResult};
use crate::materials::detector::item_text;
use crate::materials::Material;
use crate::net::HttpTransport;
use crate::scoring::ethics::{HIGHLY_ETHICAL, MODERATELY_ETHICAL, UNETHICAL};
use crate::scoring::EthicalSourcing;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Labels scoring above this are kept in multi-label material detection.
pub const MATERIAL_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZeroShotParameters {
    pub candidate_labels: Vec<String>,
    pub multi_label: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZeroShotRequest {
    pub inputs: String,
    pub parameters: ZeroShotParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredLabel {
    pub label: String,
    pub score: f64,
}

/// Accepts both the `{labels, scores}` shape and a list of `{label, score}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ZeroShotResponse {
    Columns { labels: Vec<String>, scores: Vec<f64> },
    Rows(Vec<ScoredLabel>),
}

impl ZeroShotResponse {
    fn into_ranked(self) -> CoreResult<Vec<ScoredLabel>> {
        match self {
            ZeroShotResponse::Columns { labels, scores } => {
                if labels.len() != scores.len() {
                    return Err(CoreError::InvalidInput(format!(
                        "zero-shot response has {} labels but {} scores",
                        labels.len(),
                        scores.len()
                    )));
                }
                Ok(labels
                    .into_iter()
                    .zip(scores)
                    .map(|(label, score)| ScoredLabel { label, score })
                    .collect())
            }
            ZeroShotResponse::Rows(rows) => Ok(rows),
        }
    }
}

pub fn ethical_score_for(rating: &str) -> f64 {
    match rating {
        HIGHLY_ETHICAL => 0.9,
        MODERATELY_ETHICAL => 0.6,
        UNETHICAL => 0.2,
        _ => 0.5,
    }
}

/// Model-backed classifier talking to a zero-shot classification endpoint.
///
/// Any failure of a single call is logged and answered by the heuristic
/// classifier for that call.
pub struct ZeroShotClassifier {
    transport: Box<dyn HttpTransport>,
    endpoint: String,
    token: Option<String>,
    fallback: HeuristicClassifier,
}

impl ZeroShotClassifier {
    pub fn new(
        transport: Box<dyn HttpTransport>,
        endpoint: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            token,
            fallback: HeuristicClassifier,
        }
    }

    pub fn classify(&self, request: &ZeroShotRequest) -> CoreResult<Vec<ScoredLabel>> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        let body = serde_json::to_value(request)?;
        let resp = self.transport.post_json(&self.endpoint, &headers, &body)?;
        if !resp.is_success() {
            return Err(CoreError::Transport(format!(
                "zero-shot endpoint returned status {}",
                resp.status
            )));
        }
        let parsed: ZeroShotResponse = serde_json::from_str(&resp.text)?;
        parsed.into_ranked()
    }

    fn try_materials(&self, item_name: &str, item_description: &str) -> CoreResult<Vec<Material>> {
        let request = ZeroShotRequest {
            inputs: item_text(item_name, item_description),
            parameters: ZeroShotParameters {
                candidate_labels: Material::labels(),
                multi_label: true,
            },
        };
        let mut out = Vec::new();
        for row in self.classify(&request)? {
            if row.score <= MATERIAL_THRESHOLD {
                continue;
            }
            match Material::from_label(&row.label) {
                Some(m) if !out.contains(&m) => out.push(m),
                Some(_) => {}
                None => debug!(label = %row.label, "ignoring label outside vocabulary"),
            }
        }
        Ok(out)
    }

    fn try_ethics(&self, materials: &[Material]) -> CoreResult<EthicalSourcing> {
        let labels: Vec<&str> = materials.iter().map(|m| m.label()).collect();
        let request = ZeroShotRequest {
            inputs: format!("The following materials are used: {}", labels.join(", ")),
            parameters: ZeroShotParameters {
                candidate_labels: vec![
                    HIGHLY_ETHICAL.to_string(),
                    MODERATELY_ETHICAL.to_string(),
                    UNETHICAL.to_string(),
                ],
                multi_label: false,
            },
        };
        let ranked = self.classify(&request)?;
        let top = ranked
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::InvalidInput("zero-shot response has no labels".to_string()))?;
        let score = ethical_score_for(&top.label);
        Ok(EthicalSourcing {
            ethical_rating: top.label,
            ethical_score: score,
        })
    }
}

impl MaterialClassifier for ZeroShotClassifier {
    fn name(&self) -> &'static str {
        "zero-shot"
    }

    fn detect_materials(&self, item_name: &str, item_description: &str) -> Vec<Material> {
        match self.try_materials(item_name, item_description) {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, "zero-shot material detection failed, using keyword heuristic");
                self.fallback.detect_materials(item_name, item_description)
            }
        }
    }

    fn ethical_sourcing(&self, materials: &[Material]) -> EthicalSourcing {
        match self.try_ethics(materials) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "zero-shot ethics failed, using rule heuristic");
                self.fallback.ethical_sourcing(materials)
            }
        }
    }
}
