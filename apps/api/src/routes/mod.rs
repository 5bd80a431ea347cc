pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advice::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        .route("/process-text", post(handlers::handle_process_text))
        .route("/generate-advice", post(handlers::handle_generate_advice))
        .route("/chat", post(handlers::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::gemini::{GeminiError, TextGenerator};

    /// Records every prompt it receives; optionally fails every call.
    struct MockGenerator {
        prompts: Mutex<Vec<String>>,
        fail_with: Option<String>,
    }

    impl MockGenerator {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                fail_with: None,
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                fail_with: Some(message.to_string()),
            })
        }

        fn captured_prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.fail_with {
                Some(message) => Err(GeminiError::Api {
                    status: 503,
                    message: message.clone(),
                }),
                None => Ok("mock completion".to_string()),
            }
        }
    }

    fn test_config(api_key: Option<&str>) -> Config {
        Config {
            gemini_api_key: api_key.map(str::to_string),
            allowed_origin: "http://localhost:5173".to_string(),
            port: 5000,
            rust_log: "info".to_string(),
        }
    }

    fn test_router(generator: Arc<MockGenerator>, api_key: Option<&str>) -> Router {
        build_router(AppState {
            generator,
            config: test_config(api_key),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index_lists_endpoints() {
        let app = test_router(MockGenerator::ok(), Some("key"));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "running");
        assert!(body["endpoints"]
            .as_array()
            .unwrap()
            .contains(&json!("/generate-advice")));
    }

    #[tokio::test]
    async fn test_generate_advice_selects_template_per_type() {
        // Each advice type must route the user's text into its own template.
        let cases = [
            ("networking_prep", "expert networking coach"),
            ("interview_prep", "experienced career coach"),
            ("email_draft", "professional communication expert"),
            ("general", "AI networking assistant"),
        ];

        for (advice_type, marker) in cases {
            let mock = MockGenerator::ok();
            let app = test_router(mock.clone(), Some("key"));

            let response = app
                .oneshot(post_json(
                    "/generate-advice",
                    json!({"text": "I am a robotics student", "type": advice_type}),
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            assert_eq!(body["status"], "success");
            assert_eq!(body["advice"], "mock completion");
            assert_eq!(body["type"], advice_type);

            let prompts = mock.captured_prompts();
            assert_eq!(prompts.len(), 1);
            assert!(prompts[0].contains(marker), "wrong template for {advice_type}");
            assert!(prompts[0].contains("I am a robotics student"));
        }
    }

    #[tokio::test]
    async fn test_generate_advice_defaults_to_general() {
        let mock = MockGenerator::ok();
        let app = test_router(mock.clone(), Some("key"));

        let response = app
            .oneshot(post_json("/generate-advice", json!({"text": "hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["type"], "general");
        assert!(mock.captured_prompts()[0].contains("AI networking assistant"));
    }

    #[tokio::test]
    async fn test_generate_advice_unknown_type_falls_back_to_general() {
        let mock = MockGenerator::ok();
        let app = test_router(mock.clone(), Some("key"));

        let response = app
            .oneshot(post_json(
                "/generate-advice",
                json!({"text": "hello", "type": "foo"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["type"], "general");
    }

    #[tokio::test]
    async fn test_generate_advice_empty_text_rejected() {
        let mock = MockGenerator::ok();
        let app = test_router(mock.clone(), Some("key"));

        let response = app
            .oneshot(post_json("/generate-advice", json!({"text": ""})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "No text provided");
        assert!(mock.captured_prompts().is_empty());
    }

    #[tokio::test]
    async fn test_generate_advice_surfaces_generator_failure() {
        let mock = MockGenerator::failing("quota exceeded");
        let app = test_router(mock, Some("key"));

        let response = app
            .oneshot(post_json("/generate-advice", json!({"text": "hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Failed to generate advice:"));
        assert!(message.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_chat_with_context_includes_both_parts() {
        let mock = MockGenerator::ok();
        let app = test_router(mock.clone(), Some("key"));

        let response = app
            .oneshot(post_json(
                "/chat",
                json!({"message": "What should I say?", "context": "Met a recruiter at a career fair"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["response"], "mock completion");

        let prompts = mock.captured_prompts();
        assert!(prompts[0].contains("Met a recruiter at a career fair"));
        assert!(prompts[0].contains("What should I say?"));
    }

    #[tokio::test]
    async fn test_chat_without_context_sends_standalone_question() {
        let mock = MockGenerator::ok();
        let app = test_router(mock.clone(), Some("key"));

        let response = app
            .oneshot(post_json("/chat", json!({"message": "How do I follow up?"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let prompts = mock.captured_prompts();
        assert!(prompts[0].contains("How do I follow up?"));
        assert!(!prompts[0].contains("Previous context"));
    }

    #[tokio::test]
    async fn test_chat_empty_message_rejected() {
        let app = test_router(MockGenerator::ok(), Some("key"));

        let response = app
            .oneshot(post_json("/chat", json!({"message": ""})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No message provided");
    }

    #[tokio::test]
    async fn test_chat_surfaces_generator_failure() {
        let app = test_router(MockGenerator::failing("connection reset"), Some("key"));

        let response = app
            .oneshot(post_json("/chat", json!({"message": "hi"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Chat failed:"));
        assert!(message.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_process_text_acknowledges_length_without_generator_call() {
        let mock = MockGenerator::ok();
        let app = test_router(mock.clone(), Some("key"));

        let response = app
            .oneshot(post_json("/process-text", json!({"combinedText": "hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["received_length"], 5);
        assert!(mock.captured_prompts().is_empty());
    }

    #[tokio::test]
    async fn test_process_text_empty_rejected() {
        let app = test_router(MockGenerator::ok(), Some("key"));

        let response = app
            .oneshot(post_json("/process-text", json!({"combinedText": ""})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No text provided");
    }

    #[tokio::test]
    async fn test_health_reports_credential_presence() {
        for (api_key, expected) in [(Some("key"), true), (None, false)] {
            let app = test_router(MockGenerator::ok(), api_key);
            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/health")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            assert_eq!(body["status"], "healthy");
            assert_eq!(body["gemini_configured"], expected);
        }
    }
}
