use clap::Parser;
use eco_core::classifier::{select_classifier, ClassifierMode};
use eco_core::config::{PipelineConfig, DEFAULT_ZERO_SHOT_TIMEOUT_SECS};
use eco_core::error::CoreError;
use eco_core::pipeline::{process_raw, Analyzer, Envelope};
use eco_core::telemetry::init_tracing;
use std::io::Read;
use tracing::debug;

/// Reads one item as JSON on stdin and prints its eco summary as one JSON line.
#[derive(Parser, Debug)]
#[command(name = "eco_pipeline")]
struct Cli {
    /// heuristic | zero-shot
    #[arg(long, env = "ECO_CLASSIFIER", default_value = "heuristic")]
    classifier: ClassifierMode,

    /// Zero-shot classification endpoint (Hugging Face inference API shape).
    #[arg(long, env = "ECO_ZERO_SHOT_URL")]
    zero_shot_url: Option<String>,

    #[arg(long, env = "ECO_ZERO_SHOT_TOKEN", hide_env_values = true)]
    zero_shot_token: Option<String>,

    #[arg(long, env = "ECO_ZERO_SHOT_TIMEOUT_SECS", default_value_t = DEFAULT_ZERO_SHOT_TIMEOUT_SECS)]
    zero_shot_timeout_secs: u64,
}

impl From<Cli> for PipelineConfig {
    fn from(cli: Cli) -> Self {
        PipelineConfig {
            classifier: cli.classifier,
            zero_shot_url: cli.zero_shot_url,
            zero_shot_token: cli.zero_shot_token,
            zero_shot_timeout_secs: cli.zero_shot_timeout_secs,
        }
    }
}

fn main() {
    init_tracing("warn");
    let config = PipelineConfig::from(Cli::parse());
    debug!(config = %serde_json::to_string(&config).unwrap_or_default(), "eco_pipeline config");

    let analyzer = Analyzer::new(select_classifier(&config));

    let mut raw = String::new();
    let envelope = match std::io::stdin().read_to_string(&mut raw) {
        Ok(_) => process_raw(&raw, &analyzer),
        Err(e) => Envelope::failure(&CoreError::Io(e)),
    };
    println!("{}", envelope.to_line());
}
