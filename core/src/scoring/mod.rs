pub mod ethics;
pub mod impact;
pub mod recyclability;

pub use ethics::{ethical_sourcing, EthicalSourcing};
pub use impact::{packaging_impact, PackagingImpact};
pub use recyclability::{recyclability, Recyclability};

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rounds to `places` decimals, half-to-even on the exact binary value.
///
/// Fixed-precision formatting rounds the exact value of the float, so
/// `round_to(2.675, 2)` is 2.67 (2.675 is stored slightly below the tie).
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
