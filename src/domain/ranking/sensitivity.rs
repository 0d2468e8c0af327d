//! Sensitivity Analyzer - does the leader survive small weight changes?

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, RankingError, TopsisRanker};

/// Default weight perturbation.
pub const DEFAULT_SENSITIVITY_DELTA: f64 = 0.10;

/// Outcome of nudging one criterion's weight up or down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPerturbation {
    pub criterion: String,
    /// Signed change applied before renormalization.
    pub delta: f64,
    pub weights: Vec<f64>,
    pub leader: Option<String>,
    pub leader_changed: bool,
}

/// Summary of all perturbations for one ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub baseline_leader: Option<String>,
    pub perturbations: Vec<WeightPerturbation>,
    /// True if no perturbation changed the leader.
    pub stable: bool,
}

impl SensitivityReport {
    /// Criteria whose perturbation changed the leader, without duplicates.
    pub fn critical_criteria(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for p in self.perturbations.iter().filter(|p| p.leader_changed) {
            if !names.contains(&p.criterion.as_str()) {
                names.push(p.criterion.as_str());
            }
        }
        names
    }
}

/// Weight sensitivity of TOPSIS rankings.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Perturbs each weight by `+delta` and `-delta` and re-ranks.
    ///
    /// Perturbed weights are clamped at zero and renormalized to sum to 1.
    ///
    /// # Edge Cases
    /// - Empty matrix: no leader, stable
    /// - All weights clamp to zero: the perturbation is skipped
    pub fn analyze(
        matrix: &DecisionMatrix,
        weights: &[f64],
        delta: f64,
    ) -> Result<SensitivityReport, RankingError> {
        let baseline = TopsisRanker::rank(matrix, weights)?;
        let baseline_leader = baseline.first().map(|r| r.alternative_id.clone());

        let mut perturbations = Vec::new();
        for (i, criterion) in matrix.criteria().iter().enumerate() {
            for signed in [delta, -delta] {
                let Some(perturbed) = Self::perturb(weights, i, signed) else {
                    continue;
                };
                let ranking = TopsisRanker::rank(matrix, &perturbed)?;
                let leader = ranking.first().map(|r| r.alternative_id.clone());
                perturbations.push(WeightPerturbation {
                    criterion: criterion.name.clone(),
                    delta: signed,
                    leader_changed: leader != baseline_leader,
                    weights: perturbed,
                    leader,
                });
            }
        }

        let stable = perturbations.iter().all(|p| !p.leader_changed);
        Ok(SensitivityReport {
            baseline_leader,
            perturbations,
            stable,
        })
    }

    /// Adds `delta` to weight `index`, clamps at zero and renormalizes.
    ///
    /// Returns `None` if every weight ends up zero.
    pub fn perturb(weights: &[f64], index: usize, delta: f64) -> Option<Vec<f64>> {
        let mut perturbed = weights.to_vec();
        perturbed[index] = (perturbed[index] + delta).max(0.0);
        let total: f64 = perturbed.iter().sum();
        if total <= 0.0 {
            return None;
        }
        Some(perturbed.iter().map(|w| w / total).collect())
    }
}
