pub mod detector;
pub mod vocabulary;

pub use detector::detect_materials;
pub use vocabulary::Material;
