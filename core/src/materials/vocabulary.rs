use serde::{Deserialize, Serialize};

/// Packaging material labels, in detection order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Material {
    Plastic,
    Metal,
    Steel,
    Aluminum,
    Glass,
    Paper,
    Cardboard,
    Leather,
    Fabric,
    Cotton,
    Polyester,
    Rubber,
    Silicone,
    Ceramic,
    Wood,
    Bamboo,
    Bioplastic,
    #[serde(rename = "Recycled Material")]
    RecycledMaterial,
}

impl Material {
    pub const ALL: [Material; 18] = [
        Material::Plastic,
        Material::Metal,
        Material::Steel,
        Material::Aluminum,
        Material::Glass,
        Material::Paper,
        Material::Cardboard,
        Material::Leather,
        Material::Fabric,
        Material::Cotton,
        Material::Polyester,
        Material::Rubber,
        Material::Silicone,
        Material::Ceramic,
        Material::Wood,
        Material::Bamboo,
        Material::Bioplastic,
        Material::RecycledMaterial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Material::Plastic => "Plastic",
            Material::Metal => "Metal",
            Material::Steel => "Steel",
            Material::Aluminum => "Aluminum",
            Material::Glass => "Glass",
            Material::Paper => "Paper",
            Material::Cardboard => "Cardboard",
            Material::Leather => "Leather",
            Material::Fabric => "Fabric",
            Material::Cotton => "Cotton",
            Material::Polyester => "Polyester",
            Material::Rubber => "Rubber",
            Material::Silicone => "Silicone",
            Material::Ceramic => "Ceramic",
            Material::Wood => "Wood",
            Material::Bamboo => "Bamboo",
            Material::Bioplastic => "Bioplastic",
            Material::RecycledMaterial => "Recycled Material",
        }
    }

    /// Exact, case-sensitive match against `label()`.
    pub fn from_label(label: &str) -> Option<Material> {
        Material::ALL.iter().copied().find(|m| m.label() == label)
    }

    pub fn labels() -> Vec<String> {
        Material::ALL.iter().map(|m| m.label().to_string()).collect()
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Second-pass keywords, consulted only when no vocabulary label matched.
pub const FALLBACK_KEYWORDS: &[(&str, Material)] = &[
    ("plastic", Material::Plastic),
    ("metal", Material::Metal),
    ("steel", Material::Steel),
    ("aluminum", Material::Aluminum),
    ("glass", Material::Glass),
    ("paper", Material::Paper),
    ("cardboard", Material::Cardboard),
    ("leather", Material::Leather),
    ("cotton", Material::Cotton),
    ("polyester", Material::Polyester),
    ("rubber", Material::Rubber),
    ("wood", Material::Wood),
    ("bamboo", Material::Bamboo),
    ("bioplastic", Material::Bioplastic),
    ("recycled", Material::RecycledMaterial),
];
