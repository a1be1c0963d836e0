//! End-to-end integration tests for the vaultsmith HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! ModelService -> storage -> HTTP response.
//!
//! Each test creates a fresh AppState backed by an in-memory SQLite database.
//! Tests use `tower::ServiceExt::oneshot` to send requests directly to the
//! router without starting a network server. Provider keys are left
//! unconfigured so no test touches the network; paths that would call a
//! provider are exercised up to the configuration error.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use vaultsmith_server::config::Config;
use vaultsmith_server::router::build_router;
use vaultsmith_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a fresh state + router backed by an in-memory database with no
/// provider keys configured.
fn test_state() -> (AppState, Router) {
    let state =
        AppState::in_memory(Config::default()).expect("failed to create in-memory AppState");
    let app = build_router(state.clone());
    (state, app)
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a multipart POST with a single file field and returns (status, json).
async fn post_file(
    app: &Router,
    path: &str,
    filename: &str,
    content: &str,
) -> (StatusCode, serde_json::Value) {
    let boundary = "vaultsmith-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {content}\r\n\
         --{boundary}--\r\n"
    );
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

// ---------------------------------------------------------------------------
// Static page + config
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_serves_the_static_page() {
    let (_state, app) = test_state();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<html"));
    assert!(html.contains("vaultsmith"));
}

#[tokio::test]
async fn config_check_reports_unconfigured_providers() {
    let (_state, app) = test_state();
    let (status, body) = get_json(&app, "/api/config/check").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ocr_configured"], json!(false));
    assert_eq!(body["groq_configured"], json!(false));
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_with_empty_filename_is_rejected() {
    let (_state, app) = test_state();
    let (status, body) = post_file(&app, "/api/upload", "", "ignored").await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "body: {:?}", body);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn upload_rejects_disallowed_extension() {
    let (_state, app) = test_state();
    let (status, body) = post_file(&app, "/api/upload", "schema.svg", "data").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("BAD_REQUEST"));
}

#[tokio::test]
async fn upload_without_ocr_key_reports_configuration() {
    let (_state, app) = test_state();
    let (status, body) = post_file(&app, "/api/upload", "erd.png", "data").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("OCR_SPACE_KEY"));
}

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_with_unknown_ocr_id_is_404() {
    let (_state, app) = test_state();
    let (status, body) = post_json(&app, "/api/generate", json!({ "ocr_id": 42 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "body: {:?}", body);
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn generate_without_llm_key_reports_configuration() {
    let (state, app) = test_state();
    let ocr_id = {
        let mut service = state.service.lock().await;
        service
            .record_extraction("erd.png", "CUSTOMER(customer_id)")
            .unwrap()
    };

    let (status, body) = post_json(&app, "/api/generate", json!({ "ocr_id": ocr_id.0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "body: {:?}", body);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("GROQ_API_KEY"));
}

// ---------------------------------------------------------------------------
// Knowledge
// ---------------------------------------------------------------------------

#[tokio::test]
async fn knowledge_upload_stores_the_document() {
    let (state, app) = test_state();
    let (status, body) = post_file(
        &app,
        "/api/knowledge/upload",
        "dv21.md",
        "Hubs hold business keys.",
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body: {:?}", body);
    assert_eq!(body["success"], json!(true));

    let service = state.service.lock().await;
    let doc = service.latest_knowledge().unwrap().unwrap();
    assert_eq!(doc.name, "dv21.md");
    assert_eq!(doc.content, "Hubs hold business keys.");
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

#[tokio::test]
async fn models_list_is_empty_initially() {
    let (_state, app) = test_state();
    let (status, body) = get_json(&app, "/api/models").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["models"], json!([]));
}

#[tokio::test]
async fn unknown_model_is_404() {
    let (_state, app) = test_state();
    let (status, body) = get_json(&app, "/api/models/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn stored_model_roundtrips_through_the_api() {
    let (state, app) = test_state();

    let document = json!({
        "nodes": [
            { "id": "Hub_Customer", "type": "hub", "businessKey": "customer_id" },
            { "id": "Sat_Customer_Details", "type": "satellite", "parent": "Hub_Customer" }
        ],
        "edges": [
            { "from": "Hub_Customer", "to": "Sat_Customer_Details" }
        ]
    });
    let model_id = {
        let mut service = state.service.lock().await;
        let ocr_id = service.record_extraction("erd.png", "CUSTOMER(id)").unwrap();
        let model = serde_json::from_value(document.clone()).unwrap();
        service.persist_model(ocr_id, &model, true).unwrap()
    };

    let (status, body) = get_json(&app, &format!("/api/models/{}", model_id.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["model"], document);

    let (status, body) = get_json(&app, "/api/models").await;
    assert_eq!(status, StatusCode::OK);
    let models = body["models"].as_array().unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0]["filename"], json!("erd.png"));
    assert_eq!(models[0]["grounded"], json!(true));
}
