//! Grey numbers - interval-valued metrics with an unknown exact value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Default whitening coefficient (interval midpoint).
pub const DEFAULT_WHITENING: f64 = 0.5;

/// An interval grey number `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct GreyNumber {
    lower: f64,
    upper: f64,
}

#[derive(Deserialize)]
struct RawInterval {
    lower: f64,
    upper: f64,
}

impl TryFrom<RawInterval> for GreyNumber {
    type Error = ValidationError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.lower, raw.upper)
    }
}

impl GreyNumber {
    /// Creates an interval, rejecting non-finite or inverted bounds.
    pub fn new(lower: f64, upper: f64) -> Result<Self, ValidationError> {
        if !lower.is_finite() {
            return Err(ValidationError::not_finite("lower"));
        }
        if !upper.is_finite() {
            return Err(ValidationError::not_finite("upper"));
        }
        if lower > upper {
            return Err(ValidationError::invalid_format(
                "interval",
                format!("lower bound {} exceeds upper bound {}", lower, upper),
            ));
        }
        Ok(Self { lower, upper })
    }

    /// A degenerate interval holding a single known value.
    pub fn exact(value: f64) -> Result<Self, ValidationError> {
        Self::new(value, value)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Interval width; zero for a fully known value.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Picks a representative crisp value `lower + alpha * width`.
    ///
    /// `alpha` is clamped into `[0, 1]`.
    pub fn whiten(&self, alpha: f64) -> f64 {
        self.lower + alpha.clamp(0.0, 1.0) * self.width()
    }

    /// Midpoint whitening.
    pub fn midpoint(&self) -> f64 {
        self.whiten(DEFAULT_WHITENING)
    }
}

impl fmt::Display for GreyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
