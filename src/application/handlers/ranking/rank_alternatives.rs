//! RankAlternativesHandler - Command handler for ranking alternatives.
//!
//! Derives criterion weights from the supplied judgments, ranks the
//! alternatives with TOPSIS and stores the outcome.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::DomainError;
use crate::domain::ranking::{
    Criterion, DecisionEngine, DecisionRecord, GradedAlternative, Judgment,
};
use crate::ports::DecisionRepository;

/// Command to rank a set of alternatives.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<GradedAlternative>,
    pub judgments: Vec<Judgment>,
    /// Also run weight sensitivity analysis on the result.
    pub with_sensitivity: bool,
}

/// Result of a successful ranking: the stored record.
pub type RankAlternativesResult = DecisionRecord;

/// Handler for ranking alternatives and persisting the decision.
pub struct RankAlternativesHandler {
    engine: DecisionEngine,
    repository: Arc<dyn DecisionRepository>,
}

impl RankAlternativesHandler {
    pub fn new(engine: DecisionEngine, repository: Arc<dyn DecisionRepository>) -> Self {
        Self { engine, repository }
    }

    pub async fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, DomainError> {
        debug!(
            criteria = cmd.criteria.len(),
            alternatives = cmd.alternatives.len(),
            judgments = cmd.judgments.len(),
            "Ranking alternatives"
        );

        let alternatives = self.engine.resolve(&cmd.alternatives)?;
        let result = self
            .engine
            .decide(cmd.criteria.clone(), alternatives.clone(), &cmd.judgments)?;

        let sensitivity = if cmd.with_sensitivity {
            Some(self.engine.sensitivity(cmd.criteria, alternatives, &result)?)
        } else {
            None
        };

        if !result.is_consistent() {
            debug!(
                ratio = result.consistency().ratio,
                "Judgments exceed the consistency threshold"
            );
        }

        let record = DecisionRecord::new(result, sensitivity);
        self.repository.save(&record).await?;

        info!(
            decision_id = %record.id,
            top = record.result.top().map(|t| t.alternative_id.as_str()).unwrap_or("-"),
            "Decision ranked"
        );

        Ok(record)
    }
}
