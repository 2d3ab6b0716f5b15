use crate::materials::Material;
use crate::scoring::{mean, round_to};
use serde::{Deserialize, Serialize};

const DEFAULT_IMPACT: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackagingImpact {
    pub impact_score: f64,
    pub impact_rating: String,
}

/// Impact weight for one material; unlisted materials take 0.5.
pub fn impact_weight(material: Material) -> f64 {
    match material {
        Material::Plastic => 0.8,
        Material::Polyester => 0.75,
        Material::Metal => 0.5,
        Material::Steel => 0.4,
        Material::Aluminum => 0.3,
        Material::Glass => 0.35,
        Material::Paper => 0.2,
        Material::Cardboard => 0.25,
        Material::Wood => 0.3,
        Material::Bamboo => 0.1,
        Material::Leather => 0.6,
        Material::Rubber => 0.5,
        Material::Ceramic => 0.45,
        Material::Bioplastic => 0.2,
        Material::RecycledMaterial => 0.15,
        Material::Fabric | Material::Cotton | Material::Silicone => DEFAULT_IMPACT,
    }
}

pub fn impact_rating(score: f64) -> &'static str {
    if score < 0.3 {
        "Low"
    } else if score < 0.6 {
        "Medium"
    } else {
        "High"
    }
}

pub fn packaging_impact(materials: &[Material]) -> PackagingImpact {
    let weights: Vec<f64> = materials.iter().map(|m| impact_weight(*m)).collect();
    let avg = mean(&weights).unwrap_or(DEFAULT_IMPACT);
    PackagingImpact {
        impact_score: round_to(avg, 2),
        impact_rating: impact_rating(avg).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_defaults_to_medium() {
        let r = packaging_impact(&[]);
        assert_eq!(r.impact_score, 0.5);
        assert_eq!(r.impact_rating, "Medium");
    }

    #[test]
    fn plastic_and_paper_average_to_medium() {
        let r = packaging_impact(&[Material::Plastic, Material::Paper]);
        assert_eq!(r.impact_score, 0.5);
        assert_eq!(r.impact_rating, "Medium");
    }

    #[test]
    fn bucket_edges() {
        assert_eq!(packaging_impact(&[Material::Bamboo]).impact_rating, "Low");
        // 0.3 is not below 0.3.
        assert_eq!(packaging_impact(&[Material::Aluminum]).impact_rating, "Medium");
        assert_eq!(packaging_impact(&[Material::Leather]).impact_rating, "High");
        assert_eq!(packaging_impact(&[Material::Plastic]).impact_rating, "High");
    }

    #[test]
    fn unlisted_materials_use_default_weight() {
        let r = packaging_impact(&[Material::Cotton, Material::Bamboo]);
        assert_eq!(r.impact_score, 0.3);
        assert_eq!(r.impact_rating, "Medium");
    }
}
