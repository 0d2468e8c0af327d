//! Neutrosophic triples - uncertain judgments as (truth, indeterminacy, falsity).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Largest pairwise intensity on the Saaty scale.
pub const MAX_INTENSITY: f64 = 9.0;

/// A single-valued neutrosophic number.
///
/// Each component lies in `[0, 1]` independently; they are not required to
/// sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTriple")]
pub struct NeutrosophicTriple {
    truth: f64,
    indeterminacy: f64,
    falsity: f64,
}

#[derive(Deserialize)]
struct RawTriple {
    truth: f64,
    indeterminacy: f64,
    falsity: f64,
}

impl TryFrom<RawTriple> for NeutrosophicTriple {
    type Error = ValidationError;

    fn try_from(raw: RawTriple) -> Result<Self, Self::Error> {
        Self::new(raw.truth, raw.indeterminacy, raw.falsity)
    }
}

impl NeutrosophicTriple {
    /// Creates a triple, rejecting components outside `[0, 1]`.
    pub fn new(truth: f64, indeterminacy: f64, falsity: f64) -> Result<Self, ValidationError> {
        ValidationError::check_unit_range("truth", truth, 0.0, 1.0)?;
        ValidationError::check_unit_range("indeterminacy", indeterminacy, 0.0, 1.0)?;
        ValidationError::check_unit_range("falsity", falsity, 0.0, 1.0)?;
        Ok(Self {
            truth,
            indeterminacy,
            falsity,
        })
    }

    pub fn truth(&self) -> f64 {
        self.truth
    }

    pub fn indeterminacy(&self) -> f64 {
        self.indeterminacy
    }

    pub fn falsity(&self) -> f64 {
        self.falsity
    }

    /// Deneutrosophied score `(2 + T - I - F) / 3`, always in `[0, 1]`.
    pub fn score(&self) -> f64 {
        (2.0 + self.truth - self.indeterminacy - self.falsity) / 3.0
    }

    /// Accuracy `T - F`, in `[-1, 1]`.
    pub fn accuracy(&self) -> f64 {
        self.truth - self.falsity
    }

    /// Converts the triple to a crisp Saaty intensity in `[1/9, 9]`.
    ///
    /// A score of 0.5 is equal importance. Scores above 0.5 map linearly onto
    /// `[1, 9]`; scores below map onto the reciprocals.
    pub fn intensity(&self) -> f64 {
        let score = self.score();
        let slope = 2.0 * (MAX_INTENSITY - 1.0);
        let intensity = if score >= 0.5 {
            1.0 + slope * (score - 0.5)
        } else {
            1.0 / (1.0 + slope * (0.5 - score))
        };
        intensity.clamp(1.0 / MAX_INTENSITY, MAX_INTENSITY)
    }

    /// Triple whose score is `1 - score(self)`.
    ///
    /// Expresses the same judgment from the other criterion's side.
    pub fn complement(&self) -> Self {
        Self {
            truth: self.falsity,
            indeterminacy: 1.0 - self.indeterminacy,
            falsity: self.truth,
        }
    }
}

impl fmt::Display for NeutrosophicTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{:.2}, {:.2}, {:.2}>",
            self.truth, self.indeterminacy, self.falsity
        )
    }
}

/// Linguistic importance levels with their canonical triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceLevel {
    Equal,
    Moderate,
    Strong,
    VeryStrong,
    Extreme,
}

impl ImportanceLevel {
    /// Returns the canonical triple for this level.
    pub fn triple(&self) -> NeutrosophicTriple {
        let (truth, indeterminacy, falsity) = match self {
            ImportanceLevel::Equal => (0.5, 0.5, 0.5),
            ImportanceLevel::Moderate => (0.65, 0.35, 0.35),
            ImportanceLevel::Strong => (0.8, 0.2, 0.2),
            ImportanceLevel::VeryStrong => (0.9, 0.1, 0.1),
            ImportanceLevel::Extreme => (1.0, 0.0, 0.0),
        };
        NeutrosophicTriple {
            truth,
            indeterminacy,
            falsity,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ImportanceLevel::Equal => "Equal",
            ImportanceLevel::Moderate => "Moderate",
            ImportanceLevel::Strong => "Strong",
            ImportanceLevel::VeryStrong => "Very Strong",
            ImportanceLevel::Extreme => "Extreme",
        }
    }
}

impl From<ImportanceLevel> for NeutrosophicTriple {
    fn from(level: ImportanceLevel) -> Self {
        level.triple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn new_rejects_components_outside_unit_interval() {
        assert!(NeutrosophicTriple::new(1.1, 0.0, 0.0).is_err());
        assert!(NeutrosophicTriple::new(0.5, -0.1, 0.0).is_err());
        assert!(NeutrosophicTriple::new(0.5, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn score_spans_unit_interval() {
        let best = NeutrosophicTriple::new(1.0, 0.0, 0.0).unwrap();
        let worst = NeutrosophicTriple::new(0.0, 1.0, 1.0).unwrap();
        assert!((best.score() - 1.0).abs() < EPS);
        assert!(worst.score().abs() < EPS);
    }

    #[test]
    fn accuracy_is_truth_minus_falsity() {
        let t = NeutrosophicTriple::new(0.7, 0.2, 0.1).unwrap();
        assert!((t.accuracy() - 0.6).abs() < EPS);
    }

    #[test]
    fn equal_level_maps_to_unit_intensity() {
        assert!((ImportanceLevel::Equal.triple().intensity() - 1.0).abs() < EPS);
    }

    #[test]
    fn extreme_level_maps_to_nine() {
        assert!((ImportanceLevel::Extreme.triple().intensity() - 9.0).abs() < EPS);
    }

    #[test]
    fn levels_increase_monotonically() {
        let levels = [
            ImportanceLevel::Equal,
            ImportanceLevel::Moderate,
            ImportanceLevel::Strong,
            ImportanceLevel::VeryStrong,
            ImportanceLevel::Extreme,
        ];
        let intensities: Vec<f64> = levels.iter().map(|l| l.triple().intensity()).collect();
        assert!(intensities.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn complement_inverts_intensity_for_canonical_triples() {
        let strong = ImportanceLevel::Strong.triple();
        let product = strong.intensity() * strong.complement().intensity();
        assert!((product - 1.0).abs() < EPS);
    }

    #[test]
    fn triple_deserializes_with_validation() {
        let ok: NeutrosophicTriple =
            serde_json::from_str(r#"{"truth":0.8,"indeterminacy":0.2,"falsity":0.1}"#).unwrap();
        assert!((ok.truth() - 0.8).abs() < EPS);

        let bad = serde_json::from_str::<NeutrosophicTriple>(
            r#"{"truth":1.8,"indeterminacy":0.2,"falsity":0.1}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn importance_level_serializes_snake_case() {
        let json = serde_json::to_string(&ImportanceLevel::VeryStrong).unwrap();
        assert_eq!(json, "\"very_strong\"");
    }
}
