//! Workplace stress self-check: the 57-item catalog, answer collection, scoring,
//! classification and report views.
//!
//! Answers only ever live in an [`AnswerSheet`] owned by the caller. Scoring
//! borrows the sheet, and [`QuestionnaireSession::finish`] consumes it, so nothing
//! outlives the assessment.

pub mod answers;
pub mod catalog;
pub mod domain;
pub mod report;
pub mod router;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use answers::{AnswerSheet, AnswerSheetError, AnswerValue, InvalidAnswer};
pub use catalog::{CatalogError, ItemCatalog, STANDARD_ITEM_COUNT};
pub use domain::{AnswerScale, Domain, Item};
pub use report::StressReport;
pub use router::questionnaire_router;
pub use scoring::{
    Advisory, AdvisoryBand, DomainScore, DomainScores, ScoringConfig, ScoringConfigError,
    ScoringEngine, ScoringError, StressAssessment, Verdict,
};
pub use session::{QuestionnaireSession, SessionError, SessionPhase};

/// Reasons an engine cannot be assembled.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Thresholds(#[from] ScoringConfigError),
}

/// Engine over the standard catalog with the given thresholds, which are
/// validated however they were produced.
pub fn standard_engine(config: ScoringConfig) -> Result<ScoringEngine, EngineError> {
    config.validate()?;
    Ok(ScoringEngine::new(ItemCatalog::standard()?, config))
}
