//! Integration tests for the job submission/polling endpoints.
//!
//! The external worker is played by writing records straight into the
//! in-memory result store, exactly as the real worker writes into Redis.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use common::{assert_error_body, body_json, build_test_app, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_returns_201_with_job_id_and_enqueues() {
    let test = build_test_app();

    let response = post_json(
        test.app.clone(),
        "/jobs",
        json!({ "payload": { "valor": 300_000, "prazo": 360 } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let job_id = body["jobId"].as_str().expect("jobId is a string");
    assert!(!job_id.is_empty());

    // Exactly one job reached the channel, carrying the payload verbatim.
    assert_eq!(test.channel.len(), 1);
    let job = test.channel.consume().unwrap();
    assert_eq!(job.id.as_str(), job_id);
    assert_eq!(job.payload, json!({ "valor": 300_000, "prazo": 360 }));
}

#[tokio::test]
async fn submit_without_payload_returns_400_and_enqueues_nothing() {
    let test = build_test_app();

    let response = post_json(test.app.clone(), "/jobs", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_error_body(&body_json(response).await, "VALIDATION_ERROR");
    assert!(test.channel.is_empty());
}

#[tokio::test]
async fn submit_with_empty_payload_returns_400() {
    let test = build_test_app();

    let response = post_json(test.app.clone(), "/jobs", json!({ "payload": {} })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(test.channel.is_empty());
}

#[tokio::test]
async fn submit_with_non_object_payload_returns_400() {
    let test = build_test_app();

    let response = post_json(test.app.clone(), "/jobs", json!({ "payload": 42 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_error_body(&body_json(response).await, "VALIDATION_ERROR");
    assert!(test.channel.is_empty());
}

#[tokio::test]
async fn submissions_issue_distinct_job_ids() {
    let test = build_test_app();
    let mut seen = HashSet::new();

    for _ in 0..100 {
        let response = post_json(
            test.app.clone(),
            "/jobs",
            json!({ "payload": { "valor": 1 } }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        let job_id = body["jobId"].as_str().unwrap().to_string();
        assert!(seen.insert(job_id), "job id issued twice");
    }
}

// ---------------------------------------------------------------------------
// Poll
// ---------------------------------------------------------------------------

#[tokio::test]
async fn immediate_poll_after_submit_is_processing() {
    let test = build_test_app();

    let response = post_json(
        test.app.clone(),
        "/jobs",
        json!({ "payload": { "valor": 300_000 } }),
    )
    .await;
    let job_id = body_json(response).await["jobId"]
        .as_str()
        .unwrap()
        .to_string();

    // No worker has run yet.
    let response = get(test.app.clone(), &format!("/jobs/{job_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "processing" }));
}

#[tokio::test]
async fn poll_unknown_id_is_processing_never_an_error() {
    let test = build_test_app();

    let response = get(test.app.clone(), "/jobs/never-issued").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "processing" }));
}

#[tokio::test]
async fn poll_returns_worker_success_record() {
    let test = build_test_app();

    let response = post_json(
        test.app.clone(),
        "/jobs",
        json!({ "payload": { "valor": 300_000, "prazo": 360 } }),
    )
    .await;
    let job_id = body_json(response).await["jobId"]
        .as_str()
        .unwrap()
        .to_string();

    // The worker finishes and writes the terminal record.
    test.store.insert(
        format!("result:{job_id}"),
        r#"{"status":"success","result":{"parcela":2500}}"#,
    );

    let response = get(test.app.clone(), &format!("/jobs/{job_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "success", "result": { "parcela": 2500 } })
    );
}

#[tokio::test]
async fn poll_returns_worker_error_record_verbatim() {
    let test = build_test_app();

    test.store
        .insert("result:xyz", r#"{"status":"error","error":"timeout"}"#);

    let response = get(test.app.clone(), "/jobs/xyz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "error", "error": "timeout" })
    );
}

#[tokio::test]
async fn repeated_polls_after_terminal_record_are_identical() {
    let test = build_test_app();

    test.store.insert(
        "result:abc123",
        r#"{"status":"success","result":{"parcela":2500}}"#,
    );

    let first = body_json(get(test.app.clone(), "/jobs/abc123").await).await;
    let second = body_json(get(test.app.clone(), "/jobs/abc123").await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn corrupt_record_returns_500() {
    let test = build_test_app();

    test.store.insert("result:bad", "this is not a record");

    let response = get(test.app.clone(), "/jobs/bad").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_body(&body_json(response).await, "CORRUPT_RESULT");
}
