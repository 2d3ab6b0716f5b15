use crate::materials::Material;
use crate::scoring::EthicalSourcing;

/// Source of the material list and the ethical-sourcing verdict.
///
/// Implementations must always answer; a backend that cannot reach its model
/// degrades internally instead of returning an error to the pipeline.
pub trait MaterialClassifier {
    fn name(&self) -> &'static str;
    fn detect_materials(&self, item_name: &str, item_description: &str) -> Vec<Material>;
    fn ethical_sourcing(&self, materials: &[Material]) -> EthicalSourcing;
}
