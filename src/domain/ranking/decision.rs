//! Decision Engine - weighting and TOPSIS chained into one recommendation.

use serde::{Deserialize, Serialize};

use super::{
    Alternative, Consistency, CriteriaWeights, Criterion, DecisionMatrix, GradedAlternative,
    Judgment, RankedAlternative, RankingError, SensitivityAnalyzer, SensitivityReport,
    TopsisRanker, WeightDeriver, DEFAULT_CONSISTENCY_THRESHOLD, DEFAULT_SENSITIVITY_DELTA,
    DEFAULT_WHITENING,
};

/// Tunables for the decision pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Point picked inside interval metrics (0 = lower bound, 1 = upper bound).
    pub whitening_coefficient: f64,
    /// Maximum consistency ratio accepted as coherent.
    pub consistency_threshold: f64,
    /// Weight perturbation used by sensitivity analysis.
    pub sensitivity_delta: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            whitening_coefficient: DEFAULT_WHITENING,
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
            sensitivity_delta: DEFAULT_SENSITIVITY_DELTA,
        }
    }
}

/// Derived weights plus the ranked alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub weights: CriteriaWeights,
    pub ranking: Vec<RankedAlternative>,
    pub consistency_threshold: f64,
}

impl DecisionResult {
    /// The highest-ranked alternative, if any.
    pub fn top(&self) -> Option<&RankedAlternative> {
        self.ranking.first()
    }

    pub fn consistency(&self) -> &Consistency {
        &self.weights.consistency
    }

    /// Returns true if the judgments behind the weights are coherent.
    pub fn is_consistent(&self) -> bool {
        self.weights
            .consistency
            .is_acceptable(self.consistency_threshold)
    }

    /// One-paragraph narrative of the recommendation.
    pub fn summary(&self) -> String {
        let Some(top) = self.top() else {
            return "No alternatives were ranked.".to_string();
        };

        let mut parts = vec![format!(
            "Recommended: {} with a closeness score of {:.2}.",
            top.label, top.closeness
        )];

        if let Some(runner_up) = self.ranking.get(1) {
            parts.push(format!(
                "Runner-up: {} at {:.2}.",
                runner_up.label, runner_up.closeness
            ));
        }

        if let Some(name) = self.weights.dominant() {
            let weight = self.weights.weight_of(name).unwrap_or_default();
            parts.push(format!(
                "The most influential criterion is {} ({:.0}% of the weight).",
                name,
                weight * 100.0
            ));
        }

        let ratio = self.weights.consistency.ratio;
        if self.is_consistent() {
            parts.push(format!("The judgments are consistent (CR {:.3}).", ratio));
        } else {
            parts.push(format!(
                "The judgments are inconsistent (CR {:.3}); consider revisiting them.",
                ratio
            ));
        }

        parts.join(" ")
    }
}

/// Runs weight derivation followed by TOPSIS.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    settings: EngineSettings,
}

impl DecisionEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Derives weights from `judgments` and ranks crisp `alternatives`.
    pub fn decide(
        &self,
        criteria: Vec<Criterion>,
        alternatives: Vec<Alternative>,
        judgments: &[Judgment],
    ) -> Result<DecisionResult, RankingError> {
        let weights = WeightDeriver::derive(&criteria, judgments)?;
        let matrix = DecisionMatrix::new(criteria, alternatives)?;
        let ranking = TopsisRanker::rank(&matrix, weights.as_slice())?;

        Ok(DecisionResult {
            weights,
            ranking,
            consistency_threshold: self.settings.consistency_threshold,
        })
    }

    /// Same as [`decide`](Self::decide) for alternatives with uncertain measurements.
    pub fn decide_graded(
        &self,
        criteria: Vec<Criterion>,
        alternatives: &[GradedAlternative],
        judgments: &[Judgment],
    ) -> Result<DecisionResult, RankingError> {
        let resolved = self.resolve(alternatives)?;
        self.decide(criteria, resolved, judgments)
    }

    /// Checks whether the leader of `result` survives weight perturbation.
    pub fn sensitivity(
        &self,
        criteria: Vec<Criterion>,
        alternatives: Vec<Alternative>,
        result: &DecisionResult,
    ) -> Result<SensitivityReport, RankingError> {
        let matrix = DecisionMatrix::new(criteria, alternatives)?;
        SensitivityAnalyzer::analyze(
            &matrix,
            result.weights.as_slice(),
            self.settings.sensitivity_delta,
        )
    }

    /// Resolves uncertain measurements with the configured whitening coefficient.
    pub fn resolve(
        &self,
        alternatives: &[GradedAlternative],
    ) -> Result<Vec<Alternative>, RankingError> {
        alternatives
            .iter()
            .map(|a| {
                a.resolve(self.settings.whitening_coefficient)
                    .map_err(RankingError::from)
            })
            .collect()
    }
}
