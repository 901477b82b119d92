// Tests for GeminiClient against a local mock HTTP server.
//
// These exercise the real request/response path without touching the
// network, so they run in the default test suite.

use cuecard_core::GenerateRequest;
use cuecard_error::{CuecardErrorKind, GeminiErrorKind};
use cuecard_interface::ModelDriver;
use cuecard_models::{GeminiClient, GeminiConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig::builder()
        .api_key("test-key")
        .base_url(format!("{}/v1beta/models", server.uri()))
        .build()
        .expect("valid config");
    GeminiClient::from_config(&config).expect("client")
}

fn gemini_kind(err: &cuecard_error::CuecardError) -> &GeminiErrorKind {
    match err.kind() {
        CuecardErrorKind::Gemini(e) => &e.kind,
        other => panic!("expected Gemini error, got {other}"),
    }
}

#[tokio::test]
async fn test_generate_sends_prompt_and_returns_envelope() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Hello"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "[]"}], "role": "model"},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.generate(&GenerateRequest::new("Hello")).await?;

    assert_eq!(response.text(), Some("[]"));
    assert_eq!(response.finish_reason(), Some("STOP"));
    Ok(())
}

#[tokio::test]
async fn test_request_model_overrides_default() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = GenerateRequest::builder()
        .prompt("Hi")
        .model("models/gemini-2.5-pro")
        .build()?;
    let response = client.generate(&request).await?;

    assert!(response.text().is_none());
    Ok(())
}

#[tokio::test]
async fn test_empty_envelope_is_not_an_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let response = client_for(&server).generate(&GenerateRequest::new("x")).await?;
    assert!(response.text().is_none());
    Ok(())
}

#[tokio::test]
async fn test_quota_error_maps_to_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&GenerateRequest::new("x"))
        .await
        .unwrap_err();

    let kind = gemini_kind(&err);
    assert_eq!(
        kind,
        &GeminiErrorKind::HttpError {
            status_code: 429,
            message: "RESOURCE_EXHAUSTED: Quota exceeded".to_string(),
        }
    );
    assert!(kind.is_transient());
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&GenerateRequest::new("x"))
        .await
        .unwrap_err();

    assert!(matches!(gemini_kind(&err), GeminiErrorKind::Decode(_)));
}

#[tokio::test]
async fn test_list_models_follows_pages() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{
                "name": "models/text-embedding-004",
                "supportedGenerationMethods": ["embedContent"]
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{
                "name": "models/gemini-2.5-flash",
                "displayName": "Gemini 2.5 Flash",
                "supportedGenerationMethods": ["generateContent", "countTokens"]
            }],
            "nextPageToken": "page-2"
        })))
        .mount(&server)
        .await;

    let models = client_for(&server).list_models().await?;

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].id(), "gemini-2.5-flash");
    assert!(models[0].supports_generate_content());
    assert_eq!(models[1].id(), "text-embedding-004");
    assert!(!models[1].supports_generate_content());
    Ok(())
}
