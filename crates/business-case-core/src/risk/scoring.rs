use super::matrix::RiskMatrix;
use crate::model::RiskLevel5;

/// Look up `matrix.values[probability][impact]`.
///
/// No validation happens here; the matrix was checked at the boundary.
pub fn compute_risk_score(probability: RiskLevel5, impact: RiskLevel5, matrix: &RiskMatrix) -> u32 {
    matrix.values[probability.index()][impact.index()]
}
