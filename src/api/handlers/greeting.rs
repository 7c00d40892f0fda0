//! Greeting endpoint handler.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Greeting response.
#[derive(Debug, Serialize, ToSchema)]
struct GreetingResponse {
    greeting: String,
}

/// `GET /api/greeting` — Static greeting.
#[utoipa::path(
    get,
    path = "/api/greeting",
    tag = "Greeting",
    summary = "Fetch the greeting",
    description = "Returns a static greeting. No persisted state is involved.",
    responses(
        (status = 200, description = "Greeting text", body = GreetingResponse),
    )
)]
pub async fn greeting_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(GreetingResponse {
            greeting: "Hello, World!".to_string(),
        }),
    )
}

/// Greeting routes, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/greeting", get(greeting_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use axum::body::Body;
    use tower::ServiceExt;

    #[tokio::test]
    async fn greeting_returns_static_text() {
        let app = Router::new().route("/api/greeting", get(greeting_handler));

        let Ok(request) = axum::http::Request::builder()
            .uri("/api/greeting")
            .body(Body::empty())
        else {
            panic!("request construction failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(body) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is not JSON");
        };
        assert_eq!(
            body.get("greeting").and_then(|v| v.as_str()),
            Some("Hello, World!")
        );
    }
}
