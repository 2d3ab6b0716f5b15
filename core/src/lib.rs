pub mod classifier;
pub mod config;
pub mod materials;
pub mod net;
pub mod pipeline;
pub mod probe;
pub mod scoring;
pub mod telemetry;

pub mod error;
