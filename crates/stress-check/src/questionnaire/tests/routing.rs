use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::questionnaire::STANDARD_ITEM_COUNT;

async fn post_score(answers: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/questionnaire/score")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "answers": answers }).to_string()))
        .expect("request");

    let response = router().oneshot(request).await.expect("router dispatch");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    (status, payload)
}

#[tokio::test]
async fn lists_items_with_choice_labels() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/questionnaire")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");

    assert_eq!(payload["item_count"], STANDARD_ITEM_COUNT);
    let items = payload["items"].as_array().expect("items array");
    assert_eq!(items.len(), STANDARD_ITEM_COUNT);
    assert_eq!(items[0]["number"], 1);
    assert_eq!(items[17]["scale"], "frequency");
    assert_eq!(items[0]["choices"].as_array().map(Vec::len), Some(5));
    assert!(items[0].get("reversed").is_none(), "scoring details stay internal");
}

#[tokio::test]
async fn scores_a_complete_sheet() {
    let (status, payload) = post_score(json!(uniform(3))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["verdict"]["level"], "caution");
    let domains = payload["domains"].as_array().expect("domains");
    assert_eq!(domains.len(), 4);
    assert_eq!(domains[0]["key"], "A");
    assert_eq!(domains[0]["score"], 50.0);
    assert_eq!(domains[3]["national_average"], 30.0);
}

#[tokio::test]
async fn incomplete_sheet_returns_missing_question_numbers() {
    let mut answers = uniform(4);
    answers[9] = None;

    let (status, payload) = post_score(json!(answers)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(payload["missing_questions"], json!([10]));
}

#[tokio::test]
async fn out_of_range_and_wrong_length_are_bad_requests() {
    let mut answers = uniform(2);
    answers[3] = Some(6);
    let (status, payload) = post_score(json!(answers)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("question 4"));

    let (status, _) = post_score(json!(vec![Some(3u8); 10])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn answers_beyond_a_byte_are_out_of_range_not_parse_failures() {
    for value in [json!(300), json!(-1)] {
        let mut answers: Vec<Value> = uniform(3).into_iter().map(|slot| json!(slot)).collect();
        answers[3] = value.clone();

        let (status, payload) = post_score(Value::Array(answers)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "answer {value}");
        let message = payload["error"].as_str().expect("error message");
        assert!(message.contains("question 4"), "{message}");
        assert!(message.contains(&value.to_string()), "{message}");
        assert!(payload.get("missing_questions").is_none());
    }
}

#[tokio::test]
async fn fractional_answer_is_a_bad_request_with_json_error() {
    let mut answers: Vec<Value> = uniform(3).into_iter().map(|slot| json!(slot)).collect();
    answers[0] = json!(2.5);

    let (status, payload) = post_score(Value::Array(answers)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"].is_string());
}

#[tokio::test]
async fn gaps_are_reported_before_wide_out_of_range_values() {
    let mut answers: Vec<Value> = uniform(3).into_iter().map(|slot| json!(slot)).collect();
    answers[0] = Value::Null;
    answers[5] = json!(300);

    let (status, payload) = post_score(Value::Array(answers)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(payload["missing_questions"], json!([1]));
}
