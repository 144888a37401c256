mod advisories;
mod config;
mod policy;
mod rules;

pub use advisories::{advisory_for, Advisory, AdvisoryBand};
pub use config::{AdvisoryThresholds, ScoringConfig, ScoringConfigError, VerdictThresholds};
pub use policy::{classify, Verdict};
pub use rules::{normalize, DomainScore, DomainScores};

use super::answers::{AnswerSheet, AnswerSheetError, AnswerValue};
use super::catalog::ItemCatalog;
use super::domain::Domain;
use advisories::advise_all;
use policy::decide_verdict;
use serde::Serialize;
use tracing::debug;

/// Input failures surfaced while scoring a respondent's answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// Zero-based positions of unanswered items.
    #[error("{} question(s) unanswered: {}", .missing.len(), question_numbers(.missing))]
    IncompleteAnswers { missing: Vec<usize> },
    #[error("question {} has answer {value}, outside the 1-5 scale", .item + 1)]
    AnswerOutOfRange { item: usize, value: i64 },
    #[error("expected {expected} answers, received {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },
}

impl ScoringError {
    /// One-based question numbers, as shown to the respondent.
    pub fn missing_questions(&self) -> Vec<usize> {
        match self {
            ScoringError::IncompleteAnswers { missing } => {
                missing.iter().map(|item| item + 1).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn question_numbers(items: &[usize]) -> String {
    items
        .iter()
        .map(|item| (item + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<AnswerSheetError> for ScoringError {
    fn from(value: AnswerSheetError) -> Self {
        match value {
            AnswerSheetError::OutOfRange { item, source } => ScoringError::AnswerOutOfRange {
                item,
                value: i64::from(source.0),
            },
            AnswerSheetError::UnknownItem { item, len } => ScoringError::AnswerCountMismatch {
                expected: len,
                actual: item + 1,
            },
        }
    }
}

/// Scores, verdict and advisories derived from one complete answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressAssessment {
    pub scores: DomainScores,
    pub verdict: Verdict,
    /// Indexed by `Domain::ordered()`.
    pub advisories: [Advisory; 4],
}

impl StressAssessment {
    pub fn advisory(&self, domain: Domain) -> &Advisory {
        &self.advisories[domain.slot()]
    }
}

/// Stateless scorer pairing a validated catalog with a threshold set.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: ItemCatalog,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(catalog: ItemCatalog, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, sheet: &AnswerSheet) -> Result<StressAssessment, ScoringError> {
        if sheet.len() != self.catalog.len() {
            return Err(ScoringError::AnswerCountMismatch {
                expected: self.catalog.len(),
                actual: sheet.len(),
            });
        }

        let missing = sheet.missing();
        if !missing.is_empty() {
            debug!(missing = missing.len(), "refusing to score incomplete answers");
            return Err(ScoringError::IncompleteAnswers { missing });
        }

        let answers: Vec<AnswerValue> = sheet.slots().iter().flatten().copied().collect();
        Ok(self.assess(&answers))
    }

    /// Scores raw slots as received from a collaborator. Completeness is checked
    /// before range, so a sheet with gaps always reports its missing items.
    /// Values wider than a byte are accepted so JSON input such as `300` or `-1`
    /// is reported as out of range instead of failing to parse.
    pub fn score_raw<T>(&self, raw: &[Option<T>]) -> Result<StressAssessment, ScoringError>
    where
        T: Copy + Into<i64>,
    {
        if raw.len() != self.catalog.len() {
            return Err(ScoringError::AnswerCountMismatch {
                expected: self.catalog.len(),
                actual: raw.len(),
            });
        }

        let missing: Vec<usize> = raw
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(item, _)| item)
            .collect();
        if !missing.is_empty() {
            debug!(missing = missing.len(), "refusing to score incomplete answers");
            return Err(ScoringError::IncompleteAnswers { missing });
        }

        let mut sheet = AnswerSheet::new(raw.len());
        for (item, slot) in raw.iter().enumerate() {
            if let Some(value) = slot {
                let value: i64 = (*value).into();
                let narrowed = u8::try_from(value)
                    .map_err(|_| ScoringError::AnswerOutOfRange { item, value })?;
                sheet.record(item, narrowed)?;
            }
        }
        self.score(&sheet)
    }

    fn assess(&self, answers: &[AnswerValue]) -> StressAssessment {
        let scores = rules::aggregate(&self.catalog, answers);
        let verdict = decide_verdict(&scores, &self.config.verdict);
        let advisories = advise_all(&scores, &self.config.advisories);

        // Only the verdict level is logged; answers and scores stay in memory.
        debug!(verdict = verdict.label(), "questionnaire scored");

        StressAssessment {
            scores,
            verdict,
            advisories,
        }
    }
}
