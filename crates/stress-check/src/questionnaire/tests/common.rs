use std::sync::Arc;

use axum::Router;

use crate::questionnaire::domain::Domain;
use crate::questionnaire::scoring::{ScoringConfig, ScoringEngine};
use crate::questionnaire::{questionnaire_router, standard_engine, STANDARD_ITEM_COUNT};

pub(super) fn engine() -> ScoringEngine {
    standard_engine(ScoringConfig::standard()).expect("standard catalog is valid")
}

pub(super) fn router() -> Router {
    questionnaire_router(Arc::new(engine()))
}

/// Every item answered with `raw`.
pub(super) fn uniform(raw: u8) -> Vec<Option<u8>> {
    vec![Some(raw); STANDARD_ITEM_COUNT]
}

/// Answers chosen so each domain's effective values are all `effective[domain]`.
pub(super) fn with_effective(engine: &ScoringEngine, effective: [u8; 4]) -> Vec<Option<u8>> {
    engine
        .catalog()
        .items()
        .iter()
        .map(|item| {
            let slot = Domain::ordered()
                .iter()
                .position(|domain| *domain == item.domain)
                .expect("known domain");
            let value = effective[slot];
            Some(if item.reversed { 6 - value } else { value })
        })
        .collect()
}
