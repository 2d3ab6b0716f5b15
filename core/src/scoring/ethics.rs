use crate::materials::Material;
use serde::{Deserialize, Serialize};

pub const HIGHLY_ETHICAL: &str = "Highly ethical";
pub const MODERATELY_ETHICAL: &str = "Moderately ethical";
pub const UNETHICAL: &str = "Unethical";

const LOW_RISK: &[Material] = &[Material::Bamboo, Material::RecycledMaterial];
const HIGH_RISK: &[Material] = &[Material::Leather];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EthicalSourcing {
    pub ethical_rating: String,
    pub ethical_score: f64,
}

impl EthicalSourcing {
    pub fn new(rating: &str, score: f64) -> Self {
        Self {
            ethical_rating: rating.to_string(),
            ethical_score: score,
        }
    }
}

/// Rule-based rating. The low-risk rule is checked first, so any low-risk
/// material outranks leather.
pub fn ethical_sourcing(materials: &[Material]) -> EthicalSourcing {
    if materials.iter().any(|m| LOW_RISK.contains(m)) {
        return EthicalSourcing::new(HIGHLY_ETHICAL, 0.85);
    }
    if materials.iter().any(|m| HIGH_RISK.contains(m)) {
        return EthicalSourcing::new(UNETHICAL, 0.25);
    }
    EthicalSourcing::new(MODERATELY_ETHICAL, 0.6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_risk_wins_over_high_risk() {
        let r = ethical_sourcing(&[Material::Leather, Material::Bamboo]);
        assert_eq!(r, EthicalSourcing::new(HIGHLY_ETHICAL, 0.85));
    }

    #[test]
    fn leather_alone_is_unethical() {
        let r = ethical_sourcing(&[Material::Leather, Material::Cotton]);
        assert_eq!(r, EthicalSourcing::new(UNETHICAL, 0.25));
    }

    #[test]
    fn recycled_material_is_low_risk() {
        let r = ethical_sourcing(&[Material::RecycledMaterial]);
        assert_eq!(r.ethical_rating, HIGHLY_ETHICAL);
    }

    #[test]
    fn everything_else_is_moderate() {
        assert_eq!(
            ethical_sourcing(&[]),
            EthicalSourcing::new(MODERATELY_ETHICAL, 0.6)
        );
        assert_eq!(
            ethical_sourcing(&[Material::Plastic, Material::Glass]),
            EthicalSourcing::new(MODERATELY_ETHICAL, 0.6)
        );
    }
}
