pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::quiz::handlers as quiz;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz API
        .route("/api/v1/quiz/questions", get(quiz::handle_get_questions))
        .route("/api/v1/quiz/analyze", post(quiz::handle_analyze))
        .route(
            "/api/v1/quiz/recommend",
            post(recommendation::handle_quiz_recommend),
        )
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommend),
        )
        .route(
            "/api/v1/recommendations/provider",
            get(recommendation::handle_get_provider),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::llm_client::{LlmError, TextGenerator};
    use crate::recommendation::engine::RecommendationEngine;

    struct UnreachableGenerator;

    #[async_trait]
    impl TextGenerator for UnreachableGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    fn router() -> Router {
        router_with(RecommendationEngine::new(None, Duration::from_secs(1)))
    }

    fn router_with(engine: RecommendationEngine) -> Router {
        build_router(AppState { engine })
    }

    async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send_to(router(), method, uri, body).await
    }

    async fn send_to(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send("GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_returns_profile() {
        let (status, body) = send(
            "POST",
            "/api/v1/quiz/analyze",
            Some(json!({"answers": [0, 4, 0, 3, 1]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skinType"], "dry");
        assert_eq!(body["concerns"], json!(["tightness"]));
        assert_eq!(body["ageRange"], "18-25");
    }

    #[tokio::test]
    async fn test_analyze_rejects_wrong_length() {
        let (status, body) = send(
            "POST",
            "/api/v1/quiz/analyze",
            Some(json!({"answers": [0, 4, 0, 3]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recommend_with_empty_catalogue_returns_null_slots() {
        let (status, body) = send(
            "POST",
            "/api/v1/recommendations",
            Some(json!({"profile": {"skinType": "oily", "concerns": ["acne"], "ageRange": "18-25"}, "catalogue": []})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        for step in ["cleanser", "serum", "moisturizer", "sunscreen"] {
            assert!(body["recommendation"]["routine"][step].is_null());
        }
        assert!(!body["recommendation"]["summary"].as_str().unwrap().is_empty());
        assert_eq!(body["provider"], "rule-based");
    }

    #[tokio::test]
    async fn test_quiz_recommend_runs_end_to_end() {
        let (status, body) = send(
            "POST",
            "/api/v1/quiz/recommend",
            Some(json!({
                "answers": [2, 0, 3, null, 1],
                "catalogue": [
                    {"id": "s1", "name": "Clear Serum", "category": "Serum", "skinType": "oily"}
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["skinType"], "oily");
        assert_eq!(body["recommendation"]["routine"]["serum"]["productId"], "s1");
        assert!(body["recommendation"]["routine"]["cleanser"].is_null());
    }

    #[tokio::test]
    async fn test_recommend_reports_configured_provider_after_fallback() {
        let engine =
            RecommendationEngine::new(Some(Arc::new(UnreachableGenerator)), Duration::from_secs(1));
        let (status, body) = send_to(
            router_with(engine),
            "POST",
            "/api/v1/recommendations",
            Some(json!({
                "profile": {"skinType": "oily"},
                "catalogue": [{"id": "c1", "name": "Gel", "category": "Cleanser"}]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendation"]["routine"]["cleanser"]["productId"], "c1");
        assert_eq!(body["provider"], "generative");
    }

    #[tokio::test]
    async fn test_provider_endpoint_without_credential() {
        let (status, body) = send("GET", "/api/v1/recommendations/provider", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "rule-based");
        assert!(body["label"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_questions_endpoint_lists_five_questions() {
        let (status, body) = send("GET", "/api/v1/quiz/questions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
    }
}
