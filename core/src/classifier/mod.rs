pub mod heuristic;
pub mod interface;
pub mod select;
pub mod zero_shot;

pub use heuristic::HeuristicClassifier;
pub use interface::MaterialClassifier;
pub use select::{select_classifier, ClassifierMode};
pub use zero_shot::ZeroShotClassifier;
