//! TOPSIS Ranker - ranking by relative closeness to the ideal solution.

use serde::{Deserialize, Serialize};

use super::{CriterionType, DecisionMatrix, RankingError};
use crate::domain::foundation::ValidationError;

/// Closeness assigned when an alternative sits on both the ideal and anti-ideal.
pub const NEUTRAL_CLOSENESS: f64 = 0.5;

/// One alternative's position in a TOPSIS ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based rank.
    pub rank: usize,
    pub alternative_id: String,
    pub label: String,
    /// Relative closeness to the ideal, in `[0, 1]`.
    pub closeness: f64,
    pub distance_to_ideal: f64,
    pub distance_to_anti_ideal: f64,
}

/// Intermediate TOPSIS quantities, indexed like the input rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisEvaluation {
    pub weighted: Vec<Vec<f64>>,
    pub ideal: Vec<f64>,
    pub anti_ideal: Vec<f64>,
    pub distance_to_ideal: Vec<f64>,
    pub distance_to_anti_ideal: Vec<f64>,
    pub closeness: Vec<f64>,
}

impl TopsisEvaluation {
    /// Row indices ordered by descending closeness; ties keep input order.
    pub fn order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.closeness.len()).collect();
        order.sort_by(|&a, &b| self.closeness[b].total_cmp(&self.closeness[a]));
        order
    }
}

/// TOPSIS ranking functions.
pub struct TopsisRanker;

impl TopsisRanker {
    /// Ranks the alternatives of `matrix` under `weights`.
    ///
    /// # Edge Cases
    /// - No alternatives: Returns empty Vec
    /// - Equal closeness: earlier alternatives rank first
    pub fn rank(
        matrix: &DecisionMatrix,
        weights: &[f64],
    ) -> Result<Vec<RankedAlternative>, RankingError> {
        let evaluation = Self::evaluate(&matrix.rows(), weights, &matrix.criterion_types())?;
        let alternatives = matrix.alternatives();

        Ok(evaluation
            .order()
            .into_iter()
            .enumerate()
            .map(|(position, i)| RankedAlternative {
                rank: position + 1,
                alternative_id: alternatives[i].id.clone(),
                label: alternatives[i].label.clone(),
                closeness: evaluation.closeness[i],
                distance_to_ideal: evaluation.distance_to_ideal[i],
                distance_to_anti_ideal: evaluation.distance_to_anti_ideal[i],
            })
            .collect())
    }

    /// Runs TOPSIS over raw rows.
    ///
    /// # Algorithm
    /// 1. Vector-normalize each column by its Euclidean norm (a zero norm counts as 1)
    /// 2. Multiply each column by its weight
    /// 3. Ideal takes the best value per column, anti-ideal the worst
    /// 4. Euclidean distance of every row to both
    /// 5. closeness = d- / (d+ + d-)
    pub fn evaluate<R: AsRef<[f64]>>(
        rows: &[R],
        weights: &[f64],
        types: &[CriterionType],
    ) -> Result<TopsisEvaluation, RankingError> {
        Self::validate(rows, weights, types)?;

        let weighted: Vec<Vec<f64>> = Self::normalize(rows, types.len())
            .into_iter()
            .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).collect())
            .collect();

        let (ideal, anti_ideal) = Self::reference_points(&weighted, types);

        let distance_to_ideal: Vec<f64> =
            weighted.iter().map(|row| euclidean(row, &ideal)).collect();
        let distance_to_anti_ideal: Vec<f64> =
            weighted.iter().map(|row| euclidean(row, &anti_ideal)).collect();

        let closeness = distance_to_ideal
            .iter()
            .zip(&distance_to_anti_ideal)
            .map(|(d_plus, d_minus)| {
                let total = d_plus + d_minus;
                if total > 0.0 {
                    (d_minus / total).clamp(0.0, 1.0)
                } else {
                    NEUTRAL_CLOSENESS
                }
            })
            .collect();

        Ok(TopsisEvaluation {
            weighted,
            ideal,
            anti_ideal,
            distance_to_ideal,
            distance_to_anti_ideal,
            closeness,
        })
    }

    /// Divides each column by its Euclidean norm.
    ///
    /// Columns are first scaled by their largest magnitude so the sum of
    /// squares cannot overflow. An all-zero column is left as zeros.
    pub fn normalize<R: AsRef<[f64]>>(rows: &[R], columns: usize) -> Vec<Vec<f64>> {
        let mut normalized: Vec<Vec<f64>> = rows.iter().map(|r| r.as_ref().to_vec()).collect();

        for j in 0..columns {
            let scale = normalized.iter().fold(0.0_f64, |m, r| m.max(r[j].abs()));
            if scale == 0.0 {
                continue;
            }
            let norm = normalized
                .iter()
                .map(|r| (r[j] / scale).powi(2))
                .sum::<f64>()
                .sqrt();
            for row in normalized.iter_mut() {
                row[j] = row[j] / scale / norm;
            }
        }

        normalized
    }

    fn reference_points(weighted: &[Vec<f64>], types: &[CriterionType]) -> (Vec<f64>, Vec<f64>) {
        let Some((first, rest)) = weighted.split_first() else {
            return (Vec::new(), Vec::new());
        };

        let mut ideal = first.clone();
        let mut anti_ideal = first.clone();
        for row in rest {
            for (j, &v) in row.iter().enumerate() {
                ideal[j] = types[j].best(ideal[j], v);
                anti_ideal[j] = types[j].worst(anti_ideal[j], v);
            }
        }
        (ideal, anti_ideal)
    }

    fn validate<R: AsRef<[f64]>>(
        rows: &[R],
        weights: &[f64],
        types: &[CriterionType],
    ) -> Result<(), RankingError> {
        if weights.len() != types.len() {
            return Err(RankingError::WeightCountMismatch {
                expected: types.len(),
                actual: weights.len(),
            });
        }
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(RankingError::InvalidWeight { index, value });
        }
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != types.len() {
                return Err(RankingError::DimensionMismatch {
                    alternative_id: format!("row {}", i),
                    expected: types.len(),
                    actual: row.len(),
                });
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(ValidationError::not_finite(format!("row {}.{}", i, j)).into());
            }
        }
        Ok(())
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
