use crate::materials::Material;
use crate::scoring::{mean, round_to};
use serde::{Deserialize, Serialize};

const DEFAULT_RECYCLABLE: f64 = 0.4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recyclability {
    pub recyclable_score: f64,
    pub recyclable_percent: f64,
}

pub fn recyclable_weight(material: Material) -> f64 {
    match material {
        Material::Plastic => 0.5,
        Material::Metal => 0.9,
        Material::Steel => 0.9,
        Material::Aluminum => 0.95,
        Material::Glass => 0.9,
        Material::Paper => 0.85,
        Material::Cardboard => 0.9,
        Material::Wood => 0.6,
        Material::Bamboo => 0.8,
        Material::Leather => 0.2,
        Material::Fabric => 0.4,
        Material::Polyester => 0.3,
        Material::Rubber => 0.2,
        Material::Ceramic => 0.4,
        Material::Bioplastic => 0.7,
        Material::RecycledMaterial => 1.0,
        Material::Cotton | Material::Silicone => DEFAULT_RECYCLABLE,
    }
}

pub fn recyclability(materials: &[Material]) -> Recyclability {
    let weights: Vec<f64> = materials.iter().map(|m| recyclable_weight(*m)).collect();
    let avg = mean(&weights).unwrap_or(DEFAULT_RECYCLABLE);
    Recyclability {
        recyclable_score: round_to(avg, 2),
        recyclable_percent: round_to(avg * 100.0, 1),
    }
}
