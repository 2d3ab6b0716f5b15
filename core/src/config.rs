use crate::classifier::ClassifierMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ZERO_SHOT_TIMEOUT_SECS: u64 = 30;

/// Runtime knobs for the eco pipeline. The default runs fully offline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineConfig {
    pub classifier: ClassifierMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_shot_url: Option<String>,
    #[serde(skip_serializing)]
    pub zero_shot_token: Option<String>,
    pub zero_shot_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierMode::Heuristic,
            zero_shot_url: None,
            zero_shot_token: None,
            zero_shot_timeout_secs: DEFAULT_ZERO_SHOT_TIMEOUT_SECS,
        }
    }
}
