//! Discord interaction callback endpoint.
//!
//! Signature verification runs before anything looks at the payload; a
//! request that fails it never reaches the interaction logic. Everything
//! that goes wrong after the signature check collapses to a generic 400,
//! and a half-applied edit is left as-is.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};

use crate::discord::signature::verify_signature;
use crate::discord::types::{
    Embed, Interaction, InteractionMessage, InteractionResponse, CUSTOM_ID_MARK_AS_PROCESSED,
    CUSTOM_ID_PROCESS_ORDER, INTERACTION_TYPE_MESSAGE_COMPONENT, INTERACTION_TYPE_PING,
};
use crate::error::{AppError, Result};
use crate::services::{processed_edit, processing_edit};
use crate::AppState;

const SIGNATURE_HEADER: &str = "x-signature-ed25519";
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

pub async fn interaction_status() -> &'static str {
    "Discord webhook endpoint is running"
}

pub async fn interaction_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(err) = check_signature(&state, &headers, &body) {
        return err.into_response();
    }

    match handle_interaction(&state, &body).await {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "failed to process interaction");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"success": false, "error": "Error processing request"})),
            )
                .into_response()
        }
    }
}

fn check_signature(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<()> {
    let missing =
        || AppError::Authentication("Missing required headers or configuration".to_string());

    let public_key = state.discord.public_key().ok_or_else(missing)?;
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(missing)?;
    let timestamp = headers
        .get(TIMESTAMP_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(missing)?;

    verify_signature(public_key, signature, timestamp, body)
        .map_err(|_| AppError::Authentication("Invalid request signature".to_string()))
}

async fn handle_interaction(state: &AppState, body: &[u8]) -> Result<Response> {
    let interaction: Interaction = serde_json::from_slice(body)?;

    match interaction.kind {
        INTERACTION_TYPE_PING => {
            info!("responding to Discord ping");
            Ok(Json(InteractionResponse::pong()).into_response())
        }
        INTERACTION_TYPE_MESSAGE_COMPONENT => component_pressed(state, &interaction).await,
        _ => Ok(Json(json!({"message": "Received"})).into_response()),
    }
}

async fn component_pressed(state: &AppState, interaction: &Interaction) -> Result<Response> {
    let custom_id = interaction
        .data
        .as_ref()
        .and_then(|data| data.custom_id.as_deref());

    match custom_id {
        Some(CUSTOM_ID_PROCESS_ORDER) => {
            let (channel_id, message) = message_context(interaction)?;
            let edit = processing_edit(first_embed(message)?);
            state
                .discord
                .edit_message(channel_id, &message.id, &edit)
                .await?;

            info!(message_id = %message.id, "order moved to processing");
            Ok(
                Json(InteractionResponse::ephemeral(
                    "La commande est en cours de traitement.",
                ))
                .into_response(),
            )
        }
        Some(CUSTOM_ID_MARK_AS_PROCESSED) => {
            let (channel_id, message) = message_context(interaction)?;
            let edit = processed_edit(first_embed(message)?);
            state
                .discord
                .edit_message(channel_id, &message.id, &edit)
                .await?;

            info!(message_id = %message.id, "order marked as processed");
            Ok(
                Json(InteractionResponse::ephemeral(
                    "La commande a été marquée comme traitée.",
                ))
                .into_response(),
            )
        }
        _ => Ok(Json(json!({"message": "Received"})).into_response()),
    }
}

fn message_context(interaction: &Interaction) -> Result<(&str, &InteractionMessage)> {
    let channel_id = interaction
        .channel_id
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("interaction without channel_id".to_string()))?;
    let message = interaction
        .message
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("interaction without message".to_string()))?;
    Ok((channel_id, message))
}

fn first_embed(message: &InteractionMessage) -> Result<Embed> {
    message
        .embeds
        .first()
        .cloned()
        .ok_or_else(|| AppError::BadRequest("message without embeds".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::handlers::routes::create_routes;
    use axum::{
        body::Body,
        http::{Method, Request},
        Router,
    };
    use ed25519_dalek::{Signer, SigningKey};
    use serde_json::Value;
    use tower::ServiceExt;

    fn signing_key() -> SigningKey {
        SigningKey::from_bytes(&[42u8; 32])
    }

    fn app_with_key(key: &SigningKey) -> Router {
        let mut config = AppConfig::default();
        config.discord.public_key = Some(hex::encode(key.verifying_key().to_bytes()));
        create_routes().with_state(AppState::new(&config))
    }

    fn signed_request(key: &SigningKey, body: &str) -> Request<Body> {
        let timestamp = "1700000000";
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body.as_bytes());
        let signature = hex::encode(key.sign(&message).to_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/api/discord-webhook")
            .header("content-type", "application/json")
            .header(SIGNATURE_HEADER, signature)
            .header(TIMESTAMP_HEADER, timestamp)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_returns_the_liveness_string() {
        let request = Request::builder()
            .uri("/api/discord-webhook")
            .body(Body::empty())
            .unwrap();

        let response = app_with_key(&signing_key()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Discord webhook endpoint is running");
    }

    #[tokio::test]
    async fn missing_signature_headers_answer_401() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/discord-webhook")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"type":1}"#))
            .unwrap();

        let response = app_with_key(&signing_key()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_public_key_config_answers_401() {
        let key = signing_key();
        let app = create_routes().with_state(AppState::default());

        let response = app.oneshot(signed_request(&key, r#"{"type":1}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn tampered_signature_answers_401_before_any_logic() {
        let key = signing_key();
        let mut request = signed_request(&key, r#"{"type":1}"#);
        *request.body_mut() = Body::from(r#"{"type":3}"#);

        let response = app_with_key(&key).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid request signature");
    }

    #[tokio::test]
    async fn ping_always_gets_a_pong() {
        let key = signing_key();
        let body = r#"{"type":1,"data":{"custom_id":"process_order"},"channel_id":"123"}"#;

        let response = app_with_key(&key)
            .oneshot(signed_request(&key, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"type": 1}));
    }

    #[tokio::test]
    async fn unknown_interaction_types_are_acknowledged() {
        let key = signing_key();

        let response = app_with_key(&key)
            .oneshot(signed_request(&key, r#"{"type":2}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Received");
    }

    #[tokio::test]
    async fn unknown_custom_ids_are_acknowledged() {
        let key = signing_key();
        let body = r#"{"type":3,"data":{"custom_id":"something_else"}}"#;

        let response = app_with_key(&key)
            .oneshot(signed_request(&key, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Received");
    }

    #[tokio::test]
    async fn malformed_payload_collapses_to_a_generic_400() {
        let key = signing_key();

        let response = app_with_key(&key)
            .oneshot(signed_request(&key, "not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Error processing request");
    }

    #[tokio::test]
    async fn component_press_without_bot_token_collapses_to_400() {
        let key = signing_key();
        let body = r#"{
            "type": 3,
            "data": {"custom_id": "process_order"},
            "channel_id": "123",
            "message": {"id": "456", "embeds": [{"title": "t"}]}
        }"#;

        let response = app_with_key(&key)
            .oneshot(signed_request(&key, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Error processing request");
    }
}
