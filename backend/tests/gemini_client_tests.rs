use serde_json::json;
use summarizer_backend::services::summary_service::{GeminiClient, GenerationError, TextGenerator};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key", "gemini-test").with_base_url(format!("{}/", server.uri()))
}

#[rocket::async_test]
async fn generate_sends_prompt_and_reads_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({
            "contents": [{ "parts": [{ "text": "Summarize this text:\n\nhello" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "A greeting." }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 7 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate("Summarize this text:\n\nhello")
        .await
        .unwrap();
    assert_eq!(text, "A greeting.");
}

#[rocket::async_test]
async fn generate_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("hi").await.unwrap_err();
    match &err {
        GenerationError::Api { status, body } => {
            assert_eq!(*status, 400);
            assert_eq!(body, "API key not valid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "Gemini API returned 400: API key not valid");
}

#[rocket::async_test]
async fn generate_rejects_empty_candidates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}
