//! RankQuotesHandler - Command handler for ranking forwarder quotes.
//!
//! Uses the standard freight criteria. Judgments default to the standard
//! freight priorities when the caller supplies none.

use tracing::debug;

use super::{RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult};
use crate::domain::foundation::DomainError;
use crate::domain::freight::{standard_criteria, standard_judgments, ShipmentQuote};
use crate::domain::ranking::{GradedAlternative, Judgment};

/// Command to rank forwarder quotes for one shipment.
#[derive(Debug, Clone)]
pub struct RankQuotesCommand {
    pub quotes: Vec<ShipmentQuote>,
    pub judgments: Option<Vec<Judgment>>,
    pub with_sensitivity: bool,
}

/// Handler that maps quotes onto the standard freight criteria.
pub struct RankQuotesHandler {
    inner: RankAlternativesHandler,
}

impl RankQuotesHandler {
    pub fn new(inner: RankAlternativesHandler) -> Self {
        Self { inner }
    }

    pub async fn handle(&self, cmd: RankQuotesCommand) -> Result<RankAlternativesResult, DomainError> {
        debug!(quotes = cmd.quotes.len(), "Ranking shipment quotes");

        let judgments = cmd.judgments.unwrap_or_else(standard_judgments);
        self.inner
            .handle(RankAlternativesCommand {
                criteria: standard_criteria(),
                alternatives: cmd.quotes.iter().map(GradedAlternative::from).collect(),
                judgments,
                with_sensitivity: cmd.with_sensitivity,
            })
            .await
    }
}
