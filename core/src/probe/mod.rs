pub mod report;
pub mod request;

pub use report::ProbeReport;
pub use request::{run_probe, EmissionFactor, ProbeRequest, DEFAULT_ESTIMATE_URL};
