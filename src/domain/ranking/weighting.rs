//! Weight Deriver - criterion weights from neutrosophic pairwise judgments.

use serde::{Deserialize, Serialize};

use super::decision_matrix::validate_criteria;
use super::{Criterion, Judgment, RankingError};

/// Saaty's random consistency index for matrices of order 1 through 15.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Consistency ratio at or below which judgments are considered coherent.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.10;

/// How a weight vector was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightingMethod {
    /// No judgments were supplied.
    Equal,
    /// Normalized row geometric means of the pairwise matrix.
    GeometricMean,
}

/// Consistency measures of a pairwise comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Consistency {
    pub lambda_max: f64,
    /// `(lambda_max - n) / (n - 1)`, floored at zero.
    pub index: f64,
    /// `index / RI(n)`; zero for two or fewer criteria.
    pub ratio: f64,
    /// Mean indeterminacy across the supplied judgments.
    pub indeterminacy: f64,
}

impl Consistency {
    /// Consistency of a trivially coherent matrix of order `n`.
    pub fn perfect(n: usize) -> Self {
        Self {
            lambda_max: n as f64,
            index: 0.0,
            ratio: 0.0,
            indeterminacy: 0.0,
        }
    }

    /// Returns true if the ratio does not exceed `threshold`.
    pub fn is_acceptable(&self, threshold: f64) -> bool {
        self.ratio <= threshold
    }
}

/// A normalized weight per criterion, with the consistency of its derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaWeights {
    pub criteria: Vec<String>,
    pub weights: Vec<f64>,
    pub consistency: Consistency,
    pub method: WeightingMethod,
}

impl CriteriaWeights {
    /// Returns the weight of the named criterion.
    pub fn weight_of(&self, name: &str) -> Option<f64> {
        self.criteria
            .iter()
            .position(|c| c == name)
            .map(|i| self.weights[i])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the criterion with the highest weight (first on ties).
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &w) in self.weights.iter().enumerate() {
            if best.map_or(true, |(_, bw)| w > bw) {
                best = Some((i, w));
            }
        }
        best.map(|(i, _)| self.criteria[i].as_str())
    }
}

/// Square reciprocal matrix of pairwise intensities, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    order: usize,
    cells: Vec<f64>,
}

impl PairwiseMatrix {
    /// All-ones matrix: every pair judged equally important.
    pub fn identity(order: usize) -> Self {
        Self {
            order,
            cells: vec![1.0; order * order],
        }
    }

    /// Sets `a_ij = ratio` and `a_ji = 1 / ratio`.
    pub fn set(&mut self, i: usize, j: usize, ratio: f64) {
        self.cells[i * self.order + j] = ratio;
        self.cells[j * self.order + i] = 1.0 / ratio;
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.order + j]
    }

    pub fn order(&self) -> usize {
        self.order
    }

    fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.order..(i + 1) * self.order]
    }
}

/// Derivation of criterion weights from pairwise judgments.
pub struct WeightDeriver;

impl WeightDeriver {
    /// Derives normalized weights and a consistency measure.
    ///
    /// # Algorithm
    /// 1. Each judgment's triple is converted to a Saaty intensity
    /// 2. Intensities fill a reciprocal pairwise matrix (unjudged pairs are 1)
    /// 3. Weights are the row geometric means, normalized to sum to 1
    /// 4. Consistency ratio is computed from the principal eigenvalue estimate
    ///
    /// # Edge Cases
    /// - No judgments: equal weights, ratio 0
    /// - Repeated pair: the later judgment replaces the earlier one
    pub fn derive(
        criteria: &[Criterion],
        judgments: &[Judgment],
    ) -> Result<CriteriaWeights, RankingError> {
        validate_criteria(criteria)?;
        let names: Vec<String> = criteria.iter().map(|c| c.name.clone()).collect();

        if judgments.is_empty() {
            return Ok(CriteriaWeights {
                weights: Self::equal_weights(names.len()),
                criteria: names,
                consistency: Consistency::perfect(criteria.len()),
                method: WeightingMethod::Equal,
            });
        }

        let effective = Self::effective_judgments(criteria, judgments)?;
        let matrix = Self::fill_matrix(criteria.len(), &effective);
        let weights = Self::geometric_mean_weights(&matrix);
        let (lambda_max, index, ratio) = Self::consistency(&matrix, &weights);
        let indeterminacy = effective
            .iter()
            .map(|(_, _, j)| j.triple.indeterminacy())
            .sum::<f64>()
            / effective.len() as f64;

        Ok(CriteriaWeights {
            criteria: names,
            weights,
            consistency: Consistency {
                lambda_max,
                index,
                ratio,
                indeterminacy,
            },
            method: WeightingMethod::GeometricMean,
        })
    }

    /// Builds the reciprocal pairwise matrix for `criteria`.
    pub fn pairwise_matrix(
        criteria: &[Criterion],
        judgments: &[Judgment],
    ) -> Result<PairwiseMatrix, RankingError> {
        let effective = Self::effective_judgments(criteria, judgments)?;
        Ok(Self::fill_matrix(criteria.len(), &effective))
    }

    fn fill_matrix(order: usize, effective: &[(usize, usize, &Judgment)]) -> PairwiseMatrix {
        let mut matrix = PairwiseMatrix::identity(order);
        for &(i, j, judgment) in effective {
            matrix.set(i, j, judgment.intensity());
        }
        matrix
    }

    /// Resolves judgments to matrix indices, keeping only the last one per unordered pair.
    fn effective_judgments<'a>(
        criteria: &[Criterion],
        judgments: &'a [Judgment],
    ) -> Result<Vec<(usize, usize, &'a Judgment)>, RankingError> {
        let index_of = |name: &str| {
            criteria
                .iter()
                .position(|c| c.name == name)
                .ok_or_else(|| RankingError::UnknownCriterion(name.to_string()))
        };

        let mut effective: Vec<(usize, usize, &Judgment)> = Vec::with_capacity(judgments.len());
        for judgment in judgments {
            let i = index_of(&judgment.criterion)?;
            let j = index_of(&judgment.over)?;
            if i == j {
                return Err(RankingError::SelfComparison(judgment.criterion.clone()));
            }
            let pair = (i.min(j), i.max(j));
            match effective
                .iter_mut()
                .find(|slot| (slot.0.min(slot.1), slot.0.max(slot.1)) == pair)
            {
                Some(slot) => *slot = (i, j, judgment),
                None => effective.push((i, j, judgment)),
            }
        }
        Ok(effective)
    }

    /// Uniform weights summing to 1.
    pub fn equal_weights(n: usize) -> Vec<f64> {
        if n == 0 {
            return Vec::new();
        }
        vec![1.0 / n as f64; n]
    }

    /// Normalized row geometric means.
    pub fn geometric_mean_weights(matrix: &PairwiseMatrix) -> Vec<f64> {
        let n = matrix.order();
        let means: Vec<f64> = (0..n)
            .map(|i| {
                let log_sum: f64 = matrix.row(i).iter().map(|v| v.ln()).sum();
                (log_sum / n as f64).exp()
            })
            .collect();

        let total: f64 = means.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Self::equal_weights(n);
        }
        means.iter().map(|m| m / total).collect()
    }

    /// Returns `(lambda_max, CI, CR)` for the matrix under `weights`.
    pub fn consistency(matrix: &PairwiseMatrix, weights: &[f64]) -> (f64, f64, f64) {
        let n = matrix.order();
        if n <= 2 {
            return (n as f64, 0.0, 0.0);
        }

        let lambda_max = (0..n)
            .map(|i| {
                let weighted: f64 = matrix
                    .row(i)
                    .iter()
                    .zip(weights)
                    .map(|(a, w)| a * w)
                    .sum();
                weighted / weights[i]
            })
            .sum::<f64>()
            / n as f64;

        let index = ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0);
        let ratio = index / Self::random_index(n);
        (lambda_max, index, ratio)
    }

    /// Random index for a matrix of order `n`; orders past the table reuse its last entry.
    pub fn random_index(n: usize) -> f64 {
        match n {
            0 => 0.0,
            n if n <= RANDOM_INDEX.len() => RANDOM_INDEX[n - 1],
            _ => RANDOM_INDEX[RANDOM_INDEX.len() - 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{CriterionType, ImportanceLevel, NeutrosophicTriple};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn criteria(names: &[&str]) -> Vec<Criterion> {
        names
            .iter()
            .map(|n| Criterion::new(*n, CriterionType::Cost).unwrap())
            .collect()
    }

    fn sum(weights: &[f64]) -> f64 {
        weights.iter().sum()
    }

    #[test]
    fn no_judgments_gives_equal_weights() {
        let result = WeightDeriver::derive(&criteria(&["cost", "time", "risk", "co2"]), &[]).unwrap();

        assert_eq!(result.method, WeightingMethod::Equal);
        assert_eq!(result.weights, vec![0.25; 4]);
        assert_eq!(result.consistency.ratio, 0.0);
        assert_eq!(result.consistency.indeterminacy, 0.0);
    }

    #[test]
    fn no_criteria_is_rejected() {
        assert_eq!(
            WeightDeriver::derive(&[], &[]),
            Err(RankingError::NoCriteria)
        );
    }

    #[test]
    fn unknown_criterion_is_rejected() {
        let judgments = vec![Judgment::level("cost", "speed", ImportanceLevel::Strong)];
        let result = WeightDeriver::derive(&criteria(&["cost", "time"]), &judgments);
        assert_eq!(result, Err(RankingError::UnknownCriterion("speed".into())));
    }

    #[test]
    fn self_comparison_is_rejected() {
        let judgments = vec![Judgment::level("cost", "cost", ImportanceLevel::Strong)];
        let result = WeightDeriver::derive(&criteria(&["cost", "time"]), &judgments);
        assert_eq!(result, Err(RankingError::SelfComparison("cost".into())));
    }

    #[test]
    fn favoured_criterion_gets_larger_weight() {
        let judgments = vec![Judgment::level("cost", "time", ImportanceLevel::Strong)];
        let result = WeightDeriver::derive(&criteria(&["cost", "time"]), &judgments).unwrap();

        assert_eq!(result.method, WeightingMethod::GeometricMean);
        assert!(result.weight_of("cost").unwrap() > result.weight_of("time").unwrap());
        assert!((sum(&result.weights) - 1.0).abs() < EPS);
        assert_eq!(result.dominant(), Some("cost"));
    }

    #[test]
    fn two_criteria_weights_match_intensity_ratio() {
        let judgments = vec![Judgment::level("cost", "time", ImportanceLevel::Extreme)];
        let result = WeightDeriver::derive(&criteria(&["cost", "time"]), &judgments).unwrap();

        // a_12 = 9 gives weights 0.9 / 0.1
        assert!((result.weights[0] - 0.9).abs() < EPS);
        assert!((result.weights[1] - 0.1).abs() < EPS);
        assert_eq!(result.consistency.ratio, 0.0);
    }

    #[test]
    fn reversed_judgment_gives_same_weights() {
        let names = criteria(&["cost", "time", "risk"]);
        let forward = vec![
            Judgment::level("cost", "time", ImportanceLevel::Strong),
            Judgment::level("time", "risk", ImportanceLevel::Moderate),
        ];
        let backward: Vec<Judgment> = forward.iter().map(|j| j.reversed()).collect();

        let a = WeightDeriver::derive(&names, &forward).unwrap();
        let b = WeightDeriver::derive(&names, &backward).unwrap();
        for (x, y) in a.weights.iter().zip(&b.weights) {
            assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn later_judgment_replaces_earlier() {
        let names = criteria(&["cost", "time"]);
        let judgments = vec![
            Judgment::level("cost", "time", ImportanceLevel::Extreme),
            Judgment::level("time", "cost", ImportanceLevel::Equal),
        ];
        let result = WeightDeriver::derive(&names, &judgments).unwrap();
        assert!((result.weights[0] - 0.5).abs() < EPS);
        assert!((result.consistency.indeterminacy - 0.5).abs() < EPS);
    }

    #[test]
    fn perfectly_consistent_matrix_has_zero_ratio() {
        let mut matrix = PairwiseMatrix::identity(3);
        matrix.set(0, 1, 2.0);
        matrix.set(1, 2, 2.0);
        matrix.set(0, 2, 4.0);

        let weights = WeightDeriver::geometric_mean_weights(&matrix);
        assert!((weights[0] - 4.0 / 7.0).abs() < EPS);
        assert!((weights[1] - 2.0 / 7.0).abs() < EPS);
        assert!((weights[2] - 1.0 / 7.0).abs() < EPS);

        let (lambda_max, index, ratio) = WeightDeriver::consistency(&matrix, &weights);
        assert!((lambda_max - 3.0).abs() < 1e-9);
        assert!(index.abs() < 1e-9);
        assert!(ratio.abs() < 1e-9);
    }

    #[test]
    fn contradictory_judgments_are_inconsistent() {
        // a > b, b > c, c > a
        let names = criteria(&["a", "b", "c"]);
        let judgments = vec![
            Judgment::level("a", "b", ImportanceLevel::VeryStrong),
            Judgment::level("b", "c", ImportanceLevel::VeryStrong),
            Judgment::level("c", "a", ImportanceLevel::VeryStrong),
        ];
        let result = WeightDeriver::derive(&names, &judgments).unwrap();
        assert!(!result.consistency.is_acceptable(DEFAULT_CONSISTENCY_THRESHOLD));
    }

    #[test]
    fn indeterminacy_is_averaged() {
        let names = criteria(&["a", "b", "c"]);
        let judgments = vec![
            Judgment::new("a", "b", NeutrosophicTriple::new(0.8, 0.2, 0.1).unwrap()),
            Judgment::new("b", "c", NeutrosophicTriple::new(0.7, 0.4, 0.2).unwrap()),
        ];
        let result = WeightDeriver::derive(&names, &judgments).unwrap();
        assert!((result.consistency.indeterminacy - 0.3).abs() < EPS);
    }

    #[test]
    fn replaced_judgment_does_not_count_toward_indeterminacy() {
        let names = criteria(&["a", "b", "c"]);
        let judgments = vec![
            Judgment::new("a", "b", NeutrosophicTriple::new(0.8, 0.9, 0.1).unwrap()),
            Judgment::new("b", "c", NeutrosophicTriple::new(0.7, 0.4, 0.2).unwrap()),
            Judgment::new("b", "a", NeutrosophicTriple::new(0.6, 0.2, 0.3).unwrap()),
        ];
        let result = WeightDeriver::derive(&names, &judgments).unwrap();
        assert!((result.consistency.indeterminacy - 0.3).abs() < EPS);
    }

    #[test]
    fn random_index_table_lookup() {
        assert_eq!(WeightDeriver::random_index(1), 0.0);
        assert_eq!(WeightDeriver::random_index(3), 0.58);
        assert_eq!(WeightDeriver::random_index(10), 1.49);
        assert_eq!(WeightDeriver::random_index(40), 1.59);
    }

    fn level_strategy() -> impl Strategy<Value = ImportanceLevel> {
        prop_oneof![
            Just(ImportanceLevel::Equal),
            Just(ImportanceLevel::Moderate),
            Just(ImportanceLevel::Strong),
            Just(ImportanceLevel::VeryStrong),
            Just(ImportanceLevel::Extreme),
        ]
    }

    proptest! {
        #[test]
        fn weights_are_non_negative_and_sum_to_one(
            picks in prop::collection::vec((0usize..5, 0usize..5, level_strategy(), any::<bool>()), 0..12)
        ) {
            let names = ["cost", "time", "risk", "reliability", "co2"];
            let judgments: Vec<Judgment> = picks
                .into_iter()
                .filter(|(i, j, _, _)| i != j)
                .map(|(i, j, level, flip)| {
                    let judgment = Judgment::level(names[i], names[j], level);
                    if flip { judgment.reversed() } else { judgment }
                })
                .collect();

            let result = WeightDeriver::derive(&criteria(&names), &judgments).unwrap();
            prop_assert!(result.weights.iter().all(|w| *w >= 0.0));
            prop_assert!((sum(&result.weights) - 1.0).abs() < 1e-9);
            prop_assert!(result.consistency.ratio >= 0.0);
        }

        #[test]
        fn arbitrary_triples_keep_weights_normalized(
            t in 0.0f64..=1.0, i in 0.0f64..=1.0, f in 0.0f64..=1.0
        ) {
            let triple = NeutrosophicTriple::new(t, i, f).unwrap();
            let judgments = vec![Judgment::new("cost", "time", triple)];
            let result = WeightDeriver::derive(&criteria(&["cost", "time", "risk"]), &judgments).unwrap();
            prop_assert!((sum(&result.weights) - 1.0).abs() < 1e-9);
        }
    }
}
