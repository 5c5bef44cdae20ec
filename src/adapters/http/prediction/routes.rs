//! Axum router configuration for prediction endpoints.

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::handlers::{health, predict_health, PredictionAppState};
use crate::config::ServerConfig;

/// Create the prediction router.
///
/// # Routes
///
/// - `POST /api/predict/` - Score one health record
/// - `GET /health` - Liveness and loaded classifier
pub fn prediction_routes() -> Router<PredictionAppState> {
    Router::new()
        .route("/api/predict/", post(predict_health))
        .route("/health", get(health))
}

/// Create the complete prediction router with state applied.
pub fn prediction_router(state: PredictionAppState) -> Router {
    prediction_routes().with_state(state)
}

/// Full application: routes plus CORS, tracing and request timeout.
pub fn app_router(state: PredictionAppState, server: &ServerConfig) -> Router {
    prediction_router(state)
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured; otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::classifier::MockClassifier;
    use crate::application::PredictHealthHandler;
    use crate::domain::assessment::ScoringPolicy;

    fn app(cors_origins: Option<&str>) -> Router {
        let handler =
            PredictHealthHandler::new(Arc::new(MockClassifier::new()), ScoringPolicy::default());
        let server = ServerConfig {
            cors_origins: cors_origins.map(String::from),
            ..Default::default()
        };
        app_router(PredictionAppState::new(handler), &server)
    }

    async fn preflight(router: Router, origin: &str) -> Option<String> {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/predict/")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn unconfigured_cors_allows_any_origin() {
        let allowed = preflight(app(None), "http://localhost:5173").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn configured_cors_echoes_listed_origin() {
        let router = app(Some("http://localhost:3000, https://dash.example"));
        let allowed = preflight(router, "https://dash.example").await;
        assert_eq!(allowed.as_deref(), Some("https://dash.example"));
    }

    #[tokio::test]
    async fn configured_cors_omits_unlisted_origin() {
        let router = app(Some("http://localhost:3000"));
        assert_eq!(preflight(router, "https://elsewhere.example").await, None);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let request = Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap();
        let response = app(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
