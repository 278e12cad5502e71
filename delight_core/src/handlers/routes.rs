//! Route table for the order service

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::models::request::ApiResponse;
use crate::AppState;

use super::{auth, interactions, orders, pages};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::order_page))
        .route("/login", get(pages::login_page))
        .route("/health", get(handle_health))
        .route("/api/menus", get(orders::list_menus))
        .route("/api/send-order", post(orders::send_order))
        .route("/api/update-order-status", post(orders::update_order_status))
        .route(
            "/api/discord-webhook",
            get(interactions::interaction_status).post(interactions::interaction_callback),
        )
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
}

async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(serde_json::json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "timestamp": chrono::Utc::now().timestamp(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_endpoint_reports_healthy() {
        let app = create_routes().with_state(AppState::default());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["data"]["status"], "healthy");
    }

    #[tokio::test]
    async fn unknown_routes_answer_404() {
        let app = create_routes().with_state(AppState::default());

        let request = Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
