use anyhow::{Context, Result};
use clap::Parser;
use eco_core::net::UreqTransport;
use eco_core::probe::request::{DEFAULT_ACTIVITY_ID, DEFAULT_ENERGY, DEFAULT_REGION, DEFAULT_UNIT};
use eco_core::probe::{run_probe, EmissionFactor, ProbeRequest, DEFAULT_ESTIMATE_URL};
use eco_core::telemetry::init_tracing;

/// Checks a Climatiq API key with a single estimate request.
#[derive(Parser, Debug)]
#[command(name = "key_check")]
struct Cli {
    #[arg(long, env = "CLIMATIQ_API_KEY", hide_env_values = true)]
    api_key: String,

    #[arg(long, default_value = DEFAULT_ESTIMATE_URL)]
    url: String,

    #[arg(long, default_value = DEFAULT_ACTIVITY_ID)]
    activity_id: String,

    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,

    #[arg(long, default_value = DEFAULT_UNIT)]
    unit: String,

    #[arg(long, default_value_t = DEFAULT_ENERGY)]
    energy: f64,
}

fn main() -> Result<()> {
    init_tracing("info");
    let cli = Cli::parse();

    let request = ProbeRequest {
        url: cli.url,
        api_key: cli.api_key,
        emission_factor: EmissionFactor {
            activity_id: cli.activity_id,
            region: cli.region,
            unit: cli.unit,
        },
        energy: cli.energy,
    };

    let transport = UreqTransport::new();
    let report = run_probe(&transport, &request)
        .with_context(|| format!("estimate request to {} failed", request.url))?;
    for line in report.render() {
        println!("{}", line);
    }
    Ok(())
}
