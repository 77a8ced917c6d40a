pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pathway::handlers as pathway_handlers;
use crate::session::handlers as session_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session API — the single-flight form/plan lifecycle
        .route("/api/v1/session", get(session_handlers::handle_get_session))
        .route(
            "/api/v1/session/submit",
            post(session_handlers::handle_submit),
        )
        .route(
            "/api/v1/session/reset",
            post(session_handlers::handle_reset),
        )
        // Stateless generation for clients that manage their own state
        .route(
            "/api/v1/pathways/generate",
            post(pathway_handlers::handle_generate),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::testing::ScriptedProvider;
    use crate::session::SessionStore;

    const PAYLOAD: &str = r#"{
        "pathwayTitle": "Electrician Pathway",
        "summary": "A phased route from basics to certification.",
        "phases": [
            {
                "phaseTitle": "Foundation",
                "phaseDescription": "Safety and electrical basics.",
                "steps": [
                    {
                        "stepType": "Course",
                        "title": "Basic Electrical Safety",
                        "description": "Fundamentals of safe wiring practice.",
                        "nsqfLevel": "Level 2",
                        "duration": "4 weeks"
                    }
                ]
            }
        ]
    }"#;

    fn state_with(provider: Arc<ScriptedProvider>) -> AppState {
        AppState {
            provider,
            session: SessionStore::new(),
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn full_profile() -> Value {
        json!({
            "name": "Priya Sharma",
            "location": "Maharashtra",
            "education": "12th Pass",
            "skills": "Basic computer knowledge",
            "aspiration": "Become a certified electrician",
            "language": "English"
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let provider = Arc::new(ScriptedProvider::ok(PAYLOAD));
        let app = build_router(state_with(provider));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_submit_happy_path_lands_in_ready() {
        let provider = Arc::new(ScriptedProvider::ok(PAYLOAD));
        let app = build_router(state_with(provider.clone()));

        let response = app
            .oneshot(post_json("/api/v1/session/submit", full_profile()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["phase"], "ready");
        assert_eq!(body["pathway"]["pathwayTitle"], "Electrician Pathway");
        assert_eq!(body["profile"]["name"], "Priya Sharma");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_blank_fields_never_reaches_provider() {
        let provider = Arc::new(ScriptedProvider::ok(PAYLOAD));
        let state = state_with(provider.clone());
        let app = build_router(state.clone());

        let response = app
            .oneshot(post_json(
                "/api/v1/session/submit",
                json!({"name": "", "skills": "", "aspiration": ""}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(provider.calls(), 0);

        // Failed validation leaves the session in Idle.
        assert_eq!(
            state.session.snapshot().await.phase,
            crate::session::SessionPhase::Idle
        );
    }

    #[tokio::test]
    async fn test_submit_while_pending_is_conflict() {
        let provider = Arc::new(ScriptedProvider::ok(PAYLOAD));
        let state = state_with(provider.clone());

        // Force Pending as if another submission were in flight.
        let profile = crate::models::profile::validate(&crate::models::profile::ProfileDraft {
            name: "Priya Sharma".to_string(),
            skills: "Basic computer knowledge".to_string(),
            aspiration: "Become a certified electrician".to_string(),
            ..Default::default()
        })
        .unwrap();
        state.session.begin(profile).await.unwrap();

        let app = build_router(state);
        let response = app
            .oneshot(post_json("/api/v1/session/submit", full_profile()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_lands_in_failed_and_reset_recovers() {
        let provider = Arc::new(ScriptedProvider::failing("upstream 500"));
        let state = state_with(provider);
        let app = build_router(state.clone());

        let response = app
            .clone()
            .oneshot(post_json("/api/v1/session/submit", full_profile()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["phase"], "failed");
        // Generic message only; the upstream cause stays in the logs.
        assert!(!body["error"].as_str().unwrap().contains("upstream 500"));

        let response = app
            .oneshot(post_json("/api/v1/session/reset", json!({})))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["phase"], "idle");
        assert!(body.get("profile").is_none());
        assert!(body.get("pathway").is_none());
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_stateless_generate_returns_pathway() {
        let provider = Arc::new(ScriptedProvider::ok(PAYLOAD));
        let app = build_router(state_with(provider));

        let response = app
            .oneshot(post_json("/api/v1/pathways/generate", full_profile()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["pathway"]["phases"][0]["steps"][0]["stepType"], "Course");
    }

    #[tokio::test]
    async fn test_stateless_generate_maps_decode_failure_to_bad_gateway() {
        let provider = Arc::new(ScriptedProvider::ok("not json at all"));
        let app = build_router(state_with(provider));

        let response = app
            .oneshot(post_json("/api/v1/pathways/generate", full_profile()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "DECODE_ERROR");
        // User-visible message is generic.
        assert!(!body["error"]["message"].as_str().unwrap().contains("json"));
    }

    #[tokio::test]
    async fn test_get_session_snapshot() {
        let provider = Arc::new(ScriptedProvider::ok(PAYLOAD));
        let app = build_router(state_with(provider));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["phase"], "idle");
    }
}
