use crate::classifier::{HeuristicClassifier, MaterialClassifier};
use crate::error::CoreResult;
use crate::pipeline::model::{EcoSummary, Envelope, ItemInput};
use crate::scoring::{packaging_impact, recyclability};
use serde_json::Value;
use tracing::{debug, warn};

/// Runs detection and the three scorers with a fixed classifier.
pub struct Analyzer {
    classifier: Box<dyn MaterialClassifier>,
}

impl Analyzer {
    pub fn new(classifier: Box<dyn MaterialClassifier>) -> Self {
        Self { classifier }
    }

    pub fn heuristic() -> Self {
        Self::new(Box::new(HeuristicClassifier))
    }

    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::heuristic()
    }
}

pub fn run_pipeline(input: &ItemInput, analyzer: &Analyzer) -> EcoSummary {
    let materials = analyzer
        .classifier
        .detect_materials(&input.item_name, &input.item_description);
    debug!(
        classifier = analyzer.classifier_name(),
        materials = ?materials,
        "materials detected"
    );
    let packaging_impact = packaging_impact(&materials);
    let ethical_sourcing = analyzer.classifier.ethical_sourcing(&materials);
    let recyclability = recyclability(&materials);

    EcoSummary {
        materials,
        packaging_impact,
        ethical_sourcing,
        recyclability,
    }
}

/// Turns the raw stdin document into the envelope to print.
///
/// Only a zero-length document counts as missing input; whitespace goes to the
/// JSON parser like anything else.
pub fn process_raw(raw: &str, analyzer: &Analyzer) -> Envelope {
    if raw.is_empty() {
        return Envelope::no_input();
    }
    match analyze_document(raw, analyzer) {
        Ok(summary) => Envelope::success(summary),
        Err(e) => {
            warn!(error = %e, "eco pipeline failed");
            Envelope::failure(&e)
        }
    }
}

fn analyze_document(raw: &str, analyzer: &Analyzer) -> CoreResult<EcoSummary> {
    let v: Value = serde_json::from_str(raw)?;
    let input = ItemInput::from_value(&v)?;
    Ok(run_pipeline(&input, analyzer))
}
