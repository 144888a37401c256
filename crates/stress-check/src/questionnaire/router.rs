use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::report::views::ItemView;
use super::report::{StressReport, PRIVACY_NOTE};
use super::scoring::{ScoringEngine, ScoringError};

/// Body of a scoring request: one slot per item in questionnaire order.
/// Slots are read as wide integers so the engine can range-check them.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<Option<i64>>,
}

#[derive(Debug, Serialize)]
pub struct QuestionnaireView {
    pub item_count: usize,
    pub privacy_note: &'static str,
    pub items: Vec<ItemView>,
}

/// Router exposing the item list and a stateless scoring endpoint.
pub fn questionnaire_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/questionnaire", get(items_handler))
        .route("/api/v1/questionnaire/score", post(score_handler))
        .with_state(engine)
}

pub(crate) async fn items_handler(State(engine): State<Arc<ScoringEngine>>) -> Json<QuestionnaireView> {
    let items: Vec<ItemView> = engine.catalog().items().iter().map(ItemView::from).collect();
    Json(QuestionnaireView {
        item_count: items.len(),
        privacy_note: PRIVACY_NOTE,
        items,
    })
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    request: Result<Json<ScoreRequest>, JsonRejection>,
) -> Response {
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => return rejected_body(rejection),
    };

    match engine.score_raw(&request.answers) {
        Ok(assessment) => {
            let report = StressReport::new(&assessment, Local::now().naive_local());
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(error @ ScoringError::IncompleteAnswers { .. }) => {
            let payload = json!({
                "error": error.to_string(),
                "missing_questions": error.missing_questions(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

/// Malformed bodies get a JSON error. Well-formed JSON of the wrong shape
/// (fractional or non-numeric answers) is a bad request, not an incomplete sheet.
fn rejected_body(rejection: JsonRejection) -> Response {
    let status = match &rejection {
        JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
        other => other.status(),
    };
    let payload = json!({
        "error": rejection.body_text(),
    });
    (status, Json(payload)).into_response()
}
