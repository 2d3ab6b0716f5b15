use crate::classifier::heuristic::HeuristicClassifier;
use crate::classifier::interface::MaterialClassifier;
use crate::classifier::zero_shot::ZeroShotClassifier;
use crate::config::PipelineConfig;
use crate::error::CoreError;
use crate::net::{parse_http_endpoint, UreqTransport};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierMode {
    #[default]
    Heuristic,
    ZeroShot,
}

impl FromStr for ClassifierMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(ClassifierMode::Heuristic),
            "zero-shot" | "zero_shot" | "zeroshot" => Ok(ClassifierMode::ZeroShot),
            other => Err(CoreError::InvalidInput(format!(
                "unknown classifier mode: {} (expected heuristic or zero-shot)",
                other
            ))),
        }
    }
}

/// Picks the classifier once, at startup.
///
/// Zero-shot without a usable endpoint degrades to the heuristic with a warning.
pub fn select_classifier(config: &PipelineConfig) -> Box<dyn MaterialClassifier> {
    match config.classifier {
        ClassifierMode::Heuristic => Box::new(HeuristicClassifier),
        ClassifierMode::ZeroShot => {
            let Some(endpoint) = config.zero_shot_url.as_deref() else {
                warn!("zero-shot classifier requested without an endpoint, using heuristic");
                return Box::new(HeuristicClassifier);
            };
            match parse_http_endpoint(endpoint) {
                Ok(url) => {
                    info!(endpoint = %url, "using zero-shot classifier");
                    let transport = UreqTransport::with_timeout(Duration::from_secs(
                        config.zero_shot_timeout_secs,
                    ));
                    Box::new(ZeroShotClassifier::new(
                        Box::new(transport),
                        url.as_str(),
                        config.zero_shot_token.clone(),
                    ))
                }
                Err(e) => {
                    warn!(error = %e, "zero-shot endpoint unusable, using heuristic");
                    Box::new(HeuristicClassifier)
                }
            }
        }
    }
}
