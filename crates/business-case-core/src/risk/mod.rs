pub mod matrix;
pub mod scoring;

pub use matrix::RiskMatrix;
pub use scoring::compute_risk_score;
