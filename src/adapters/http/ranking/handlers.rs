//! HTTP handlers for ranking endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    DeriveWeightsHandler, DeriveWeightsQuery, GetDecisionHandler, GetDecisionQuery,
    RankAlternativesCommand, RankAlternativesHandler, RankQuotesCommand, RankQuotesHandler,
};
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, ValidationError};
use crate::domain::ranking::{DecisionEngine, DecisionRecord, EngineSettings};
use crate::ports::DecisionRepository;

use super::dto::{
    to_judgments, DeriveWeightsRequest, ErrorResponse, HealthResponse, RankDecisionRequest,
    RankQuotesRequest, WeightsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Ranking API error that implements IntoResponse.
#[derive(Debug)]
pub enum RankingApiError {
    BadRequest(String),
    NotFound(String),
    Domain(DomainError),
}

impl IntoResponse for RankingApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            RankingApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            RankingApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Decision", &id))
            }
            RankingApiError::Domain(err) => (status_for(err.code), ErrorResponse::from_domain(&err)),
        };
        (status, Json(error)).into_response()
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::DimensionMismatch
        | ErrorCode::InvalidJudgment
        | ErrorCode::CriterionNotFound => StatusCode::BAD_REQUEST,
        ErrorCode::DecisionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for RankingApiError {
    fn from(error: DomainError) -> Self {
        RankingApiError::Domain(error)
    }
}

impl From<ValidationError> for RankingApiError {
    fn from(error: ValidationError) -> Self {
        RankingApiError::Domain(error.into())
    }
}

impl From<JsonRejection> for RankingApiError {
    fn from(rejection: JsonRejection) -> Self {
        RankingApiError::BadRequest(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing ranking dependencies.
#[derive(Clone)]
pub struct RankingAppState {
    pub repository: Arc<dyn DecisionRepository>,
    pub settings: EngineSettings,
}

impl RankingAppState {
    pub fn new(repository: Arc<dyn DecisionRepository>, settings: EngineSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn rank_alternatives_handler(&self) -> RankAlternativesHandler {
        RankAlternativesHandler::new(DecisionEngine::new(self.settings), self.repository.clone())
    }

    pub fn rank_quotes_handler(&self) -> RankQuotesHandler {
        RankQuotesHandler::new(self.rank_alternatives_handler())
    }

    pub fn derive_weights_handler(&self) -> DeriveWeightsHandler {
        DeriveWeightsHandler::new(self.settings.consistency_threshold)
    }

    pub fn get_decision_handler(&self) -> GetDecisionHandler {
        GetDecisionHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/decisions
///
/// Ranks the submitted alternatives and stores the decision.
pub async fn create_decision(
    State(state): State<RankingAppState>,
    body: Result<Json<RankDecisionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DecisionRecord>), RankingApiError> {
    let Json(req) = body?;

    let cmd = RankAlternativesCommand {
        criteria: req.criteria,
        alternatives: req.alternatives.into_iter().map(Into::into).collect(),
        judgments: to_judgments(req.judgments)?,
        with_sensitivity: req.sensitivity,
    };

    let record = state.rank_alternatives_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/decisions/:decision_id
pub async fn get_decision(
    State(state): State<RankingAppState>,
    Path(decision_id_str): Path<String>,
) -> Result<Json<DecisionRecord>, RankingApiError> {
    let decision_id: DecisionId = decision_id_str
        .parse()
        .map_err(|_| RankingApiError::BadRequest("Invalid decision ID format".to_string()))?;

    let record = state
        .get_decision_handler()
        .handle(GetDecisionQuery { decision_id })
        .await
        .map_err(|err| match err.code {
            ErrorCode::DecisionNotFound => RankingApiError::NotFound(decision_id.to_string()),
            _ => RankingApiError::Domain(err),
        })?;

    Ok(Json(record))
}

/// POST /api/weights
///
/// Derives criterion weights without ranking or storing anything.
pub async fn derive_weights(
    State(state): State<RankingAppState>,
    body: Result<Json<DeriveWeightsRequest>, JsonRejection>,
) -> Result<Json<WeightsResponse>, RankingApiError> {
    let Json(req) = body?;

    let query = DeriveWeightsQuery {
        criteria: req.criteria,
        judgments: to_judgments(req.judgments)?,
    };

    let result = state.derive_weights_handler().handle(query).await?;
    Ok(Json(WeightsResponse {
        weights: result.weights,
        consistent: result.consistent,
    }))
}

/// POST /api/quotes/rank
///
/// Ranks forwarder quotes on the standard freight criteria.
pub async fn rank_quotes(
    State(state): State<RankingAppState>,
    body: Result<Json<RankQuotesRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DecisionRecord>), RankingApiError> {
    let Json(req) = body?;

    let judgments = req.judgments.map(to_judgments).transpose()?;
    let cmd = RankQuotesCommand {
        quotes: req.quotes,
        judgments,
        with_sensitivity: req.sensitivity,
    };

    let record = state.rank_quotes_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
