use serde::{Deserialize, Serialize};

use crate::error::BusinessCaseError;
use crate::BusinessCaseResult;

pub const MATRIX_SIZE: usize = 5;
pub const MIN_SCORE: u32 = 1;
pub const MAX_SCORE: u32 = 25;

/// Probability (rows) × impact (columns) score lookup.
///
/// The 5×5 shape is enforced by the type; range and monotonicity are
/// checked by [`RiskMatrix::validate`] at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrix {
    pub values: [[u32; MATRIX_SIZE]; MATRIX_SIZE],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for RiskMatrix {
    fn default() -> Self {
        Self {
            values: [
                [1, 2, 4, 6, 8],    // Very Low probability
                [2, 4, 6, 9, 12],   // Low
                [4, 6, 9, 12, 16],  // Medium
                [6, 9, 12, 16, 20], // High
                [8, 12, 16, 20, 25], // Very High
            ],
            description: Some("Standard 5x5 risk matrix with non-linear progression".into()),
        }
    }
}

impl RiskMatrix {
    /// Every cell within [1, 25] and non-decreasing along rows and columns.
    pub fn validate(&self) -> BusinessCaseResult<()> {
        for (i, row) in self.values.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                if !(MIN_SCORE..=MAX_SCORE).contains(v) {
                    return Err(BusinessCaseError::invalid(
                        format!("organizational.riskMatrix.values[{i}][{j}]"),
                        format!("{v} is outside [{MIN_SCORE}, {MAX_SCORE}]"),
                    ));
                }
            }
        }

        if let Some((i, j)) = self.first_decrease() {
            return Err(BusinessCaseError::invalid(
                format!("organizational.riskMatrix.values[{i}][{j}]"),
                "Risk matrix values must increase monotonically",
            ));
        }
        Ok(())
    }

    pub fn is_monotonic(&self) -> bool {
        self.first_decrease().is_none()
    }

    /// First cell that is smaller than its left or upper neighbour.
    fn first_decrease(&self) -> Option<(usize, usize)> {
        for i in 0..MATRIX_SIZE {
            for j in 0..MATRIX_SIZE {
                let v = self.values[i][j];
                let left_ok = j == 0 || self.values[i][j - 1] <= v;
                let up_ok = i == 0 || self.values[i - 1][j] <= v;
                if !(left_ok && up_ok) {
                    return Some((i, j));
                }
            }
        }
        None
    }
}
