//! Pairwise judgments between criteria.

use serde::{Deserialize, Serialize};

use super::{ImportanceLevel, NeutrosophicTriple};

/// States how strongly `criterion` dominates `over`, as a neutrosophic triple.
///
/// A triple scoring below 0.5 means `over` is the more important of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    pub criterion: String,
    pub over: String,
    pub triple: NeutrosophicTriple,
}

impl Judgment {
    /// Creates a judgment from an explicit triple.
    pub fn new(
        criterion: impl Into<String>,
        over: impl Into<String>,
        triple: NeutrosophicTriple,
    ) -> Self {
        Self {
            criterion: criterion.into(),
            over: over.into(),
            triple,
        }
    }

    /// Creates a judgment from a linguistic importance level.
    pub fn level(
        criterion: impl Into<String>,
        over: impl Into<String>,
        level: ImportanceLevel,
    ) -> Self {
        Self::new(criterion, over, level.triple())
    }

    /// Crisp pairwise ratio of `criterion` to `over`.
    pub fn intensity(&self) -> f64 {
        self.triple.intensity()
    }

    /// The same judgment stated from the other criterion's side.
    pub fn reversed(&self) -> Self {
        Self {
            criterion: self.over.clone(),
            over: self.criterion.clone(),
            triple: self.triple.complement(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_uses_canonical_triple() {
        let j = Judgment::level("cost", "risk", ImportanceLevel::Strong);
        assert_eq!(j.triple, ImportanceLevel::Strong.triple());
        assert!(j.intensity() > 1.0);
    }

    #[test]
    fn reversed_swaps_criteria_and_inverts_intensity() {
        let j = Judgment::level("cost", "risk", ImportanceLevel::Moderate);
        let r = j.reversed();
        assert_eq!(r.criterion, "risk");
        assert_eq!(r.over, "cost");
        assert!((j.intensity() * r.intensity() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn judgment_deserializes() {
        let json = r#"{
            "criterion": "cost",
            "over": "transit_time",
            "triple": {"truth": 0.8, "indeterminacy": 0.2, "falsity": 0.2}
        }"#;
        let j: Judgment = serde_json::from_str(json).unwrap();
        assert_eq!(j.criterion, "cost");
        assert_eq!(j.over, "transit_time");
    }
}
