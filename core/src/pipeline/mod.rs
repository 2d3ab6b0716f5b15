pub mod model;
pub mod workflow;

pub use model::{EcoSummary, Envelope, ItemInput, NO_INPUT_MESSAGE};
pub use workflow::{process_raw, run_pipeline, Analyzer};
