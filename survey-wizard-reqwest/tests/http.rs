//! Round trips against a local HTTP server.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::post;
use serde_json::{Value, json};
use survey_wizard_reqwest::{ReqwestSubmitter, SUBMIT_PATH};
use survey_wizard_types::{FieldName, SubmissionOutcome, SubmissionPayload, Submitter};

type Received = Arc<Mutex<Vec<Value>>>;

/// Serve `body` with `status` on the submit path; returns the endpoint URL.
async fn serve(status: StatusCode, body: &'static str) -> (String, Received) {
    let received = Received::default();
    let sink = received.clone();
    let app = Router::new().route(
        SUBMIT_PATH,
        post(move |axum::Json(payload): axum::Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(payload);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    (format!("http://{addr}{SUBMIT_PATH}"), received)
}

fn payload() -> SubmissionPayload {
    let mut payload = SubmissionPayload::new();
    payload.insert(&FieldName::new("full_name"), "Priya");
    payload.insert(&FieldName::new("price_sensitivity"), 4);
    payload
}

#[tokio::test]
async fn accepted() {
    let (endpoint, received) = serve(StatusCode::OK, r#"{"id": 1}"#).await;
    let submitter = ReqwestSubmitter::new(endpoint).unwrap();

    let outcome = submitter.submit(&payload()).await;

    assert_eq!(outcome, SubmissionOutcome::Success);
    assert_eq!(
        received.lock().unwrap().as_slice(),
        [json!({"full_name": "Priya", "price_sensitivity": 4})]
    );
}

#[tokio::test]
async fn rejected_fields() {
    let (endpoint, _) = serve(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"detail": [{"msg": "X"}, {"msg": "Y"}]}"#,
    )
    .await;
    let submitter = ReqwestSubmitter::new(endpoint).unwrap();

    let outcome = submitter.submit(&payload()).await;

    assert_eq!(
        outcome,
        SubmissionOutcome::ValidationFailure(vec!["X".into(), "Y".into()])
    );
}

#[tokio::test]
async fn server_error_with_text() {
    let (endpoint, _) = serve(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail": "Database unavailable"}"#).await;
    let submitter = ReqwestSubmitter::new(endpoint).unwrap();

    let outcome = submitter.submit(&payload()).await;

    assert_eq!(
        outcome,
        SubmissionOutcome::TransportFailure("Database unavailable".into())
    );
}

#[tokio::test]
async fn malformed_body() {
    let (endpoint, _) = serve(StatusCode::OK, "<html>oops</html>").await;
    let submitter = ReqwestSubmitter::new(endpoint).unwrap();

    let outcome = submitter.submit(&payload()).await;

    assert!(matches!(outcome, SubmissionOutcome::TransportFailure(_)));
}

#[tokio::test]
async fn unreachable_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let submitter = ReqwestSubmitter::new(format!("http://{addr}{SUBMIT_PATH}")).unwrap();

    let outcome = submitter.submit(&payload()).await;

    assert!(matches!(outcome, SubmissionOutcome::TransportFailure(_)));
}
