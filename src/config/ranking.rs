//! Ranking engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ranking::{
    EngineSettings, DEFAULT_CONSISTENCY_THRESHOLD, DEFAULT_SENSITIVITY_DELTA, DEFAULT_WHITENING,
};

/// Ranking engine tunables
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Point chosen inside interval metrics (0 = lower, 1 = upper)
    #[serde(default = "default_whitening")]
    pub whitening_coefficient: f64,

    /// Maximum acceptable consistency ratio
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Weight perturbation for sensitivity analysis
    #[serde(default = "default_sensitivity_delta")]
    pub sensitivity_delta: f64,
}

impl RankingConfig {
    /// Engine settings derived from this configuration
    pub fn to_settings(&self) -> EngineSettings {
        EngineSettings {
            whitening_coefficient: self.whitening_coefficient,
            consistency_threshold: self.consistency_threshold,
            sensitivity_delta: self.sensitivity_delta,
        }
    }

    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.whitening_coefficient) {
            return Err(ValidationError::InvalidWhitening);
        }
        if !self.consistency_threshold.is_finite() || self.consistency_threshold <= 0.0 {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if !(self.sensitivity_delta > 0.0 && self.sensitivity_delta < 1.0) {
            return Err(ValidationError::InvalidSensitivityDelta);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            whitening_coefficient: default_whitening(),
            consistency_threshold: default_consistency_threshold(),
            sensitivity_delta: default_sensitivity_delta(),
        }
    }
}

fn default_whitening() -> f64 {
    DEFAULT_WHITENING
}

fn default_consistency_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}

fn default_sensitivity_delta() -> f64 {
    DEFAULT_SENSITIVITY_DELTA
}
