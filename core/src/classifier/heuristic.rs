use crate::classifier::interface::MaterialClassifier;
use crate::materials::{detect_materials, Material};
use crate::scoring::{ethical_sourcing, EthicalSourcing};

/// Keyword detection plus rule-based ethics. Deterministic, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl MaterialClassifier for HeuristicClassifier {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn detect_materials(&self, item_name: &str, item_description: &str) -> Vec<Material> {
        detect_materials(item_name, item_description)
    }

    fn ethical_sourcing(&self, materials: &[Material]) -> EthicalSourcing {
        ethical_sourcing(materials)
    }
}
