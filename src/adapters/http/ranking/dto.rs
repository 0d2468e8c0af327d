//! Data Transfer Objects for ranking endpoints.
//!
//! Request bodies deserialize straight into domain types where the shapes
//! match; judgments accept either a linguistic level or an explicit triple.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::freight::ShipmentQuote;
use crate::domain::ranking::{
    CriteriaWeights, Criterion, GradedAlternative, ImportanceLevel, Judgment, MetricValue,
    NeutrosophicTriple,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    /// Carries the domain error code and any details through unchanged.
    pub fn from_domain(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// An alternative with one measurement per criterion.
#[derive(Debug, Clone, Deserialize)]
pub struct AlternativeRequest {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub values: Vec<MetricValue>,
}

impl From<AlternativeRequest> for GradedAlternative {
    fn from(req: AlternativeRequest) -> Self {
        let label = req.label.unwrap_or_else(|| req.id.clone());
        GradedAlternative::new(req.id, label, req.values)
    }
}

/// A pairwise judgment given as exactly one of `level` or `triple`.
#[derive(Debug, Clone, Deserialize)]
pub struct JudgmentRequest {
    pub criterion: String,
    pub over: String,
    #[serde(default)]
    pub level: Option<ImportanceLevel>,
    #[serde(default)]
    pub triple: Option<NeutrosophicTriple>,
}

impl TryFrom<JudgmentRequest> for Judgment {
    type Error = ValidationError;

    fn try_from(req: JudgmentRequest) -> Result<Self, Self::Error> {
        match (req.level, req.triple) {
            (Some(level), None) => Ok(Judgment::level(req.criterion, req.over, level)),
            (None, Some(triple)) => Ok(Judgment::new(req.criterion, req.over, triple)),
            _ => Err(ValidationError::invalid_format(
                "judgment",
                "exactly one of 'level' or 'triple' is required",
            )),
        }
    }
}

/// Converts request judgments, failing on the first malformed one.
pub fn to_judgments(requests: Vec<JudgmentRequest>) -> Result<Vec<Judgment>, ValidationError> {
    requests.into_iter().map(Judgment::try_from).collect()
}

/// POST /api/decisions
#[derive(Debug, Clone, Deserialize)]
pub struct RankDecisionRequest {
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeRequest>,
    #[serde(default)]
    pub judgments: Vec<JudgmentRequest>,
    #[serde(default)]
    pub sensitivity: bool,
}

/// POST /api/weights
#[derive(Debug, Clone, Deserialize)]
pub struct DeriveWeightsRequest {
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub judgments: Vec<JudgmentRequest>,
}

/// POST /api/quotes/rank
#[derive(Debug, Clone, Deserialize)]
pub struct RankQuotesRequest {
    pub quotes: Vec<ShipmentQuote>,
    /// Standard freight priorities apply when omitted.
    #[serde(default)]
    pub judgments: Option<Vec<JudgmentRequest>>,
    #[serde(default)]
    pub sensitivity: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Response for POST /api/weights
#[derive(Debug, Clone, Serialize)]
pub struct WeightsResponse {
    #[serde(flatten)]
    pub weights: CriteriaWeights,
    pub consistent: bool,
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
