//! Order intake and status update endpoints

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::error::Result;
use crate::extractors::ApiJson;
use crate::models::order::{OrderSubmission, StatusUpdateRequest};
use crate::models::request::ApiResponse;
use crate::services::OrderService;
use crate::AppState;

pub async fn list_menus(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(
        state.orders.catalog().items().to_vec(),
    ))
}

pub async fn send_order(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<OrderSubmission>,
) -> Result<impl IntoResponse> {
    submission.validate()?;

    let notification = state.orders.build_order_notification(&submission);
    state.discord.execute_webhook(&notification).await?;

    info!(company = %submission.nom_entreprise, "order forwarded to Discord");
    Ok(Json(json!({"success": true})))
}

pub async fn update_order_status(
    State(state): State<AppState>,
    ApiJson(update): ApiJson<StatusUpdateRequest>,
) -> Result<impl IntoResponse> {
    update.validate()?;

    let notification =
        OrderService::build_status_notification(&update.order_number, &update.new_status);
    state.discord.execute_webhook(&notification).await?;

    info!(
        order_number = %update.order_number,
        status = %update.new_status,
        "status update forwarded to Discord"
    );
    Ok(Json(json!({"success": true})))
}
