use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use stress_check::config::{load_scoring_rules, AppConfig};
use stress_check::error::AppError;
use stress_check::questionnaire::{standard_engine, ScoringEngine};
use stress_check::telemetry;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads configuration for a CLI command, installs logging and builds the engine.
/// `rules` replaces any `APP_SCORING_RULES` file.
pub(crate) fn bootstrap(rules: Option<&Path>) -> Result<(AppConfig, ScoringEngine), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = rules {
        config.scoring = load_scoring_rules(path)?;
    }

    telemetry::init(&config.telemetry)?;

    let engine = standard_engine(config.scoring.clone())?;
    info!(
        items = engine.catalog().len(),
        custom_rules = rules.is_some(),
        "questionnaire catalog validated"
    );
    Ok((config, engine))
}

/// Comma- or whitespace-separated answers in item order; `-` marks an unanswered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnswerList(pub(crate) Vec<Option<u8>>);

pub(crate) fn parse_answers(raw: &str) -> Result<AnswerList, String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| match token {
            "-" => Ok(None),
            value => value.parse::<u8>().map(Some).map_err(|err| {
                format!("answer {} ('{value}') is not a number ({err})", index + 1)
            }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(AnswerList)
}
