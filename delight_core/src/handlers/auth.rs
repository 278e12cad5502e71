//! Login and logout endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use serde_json::json;
use tracing::{info, warn};

use crate::auth::{
    clear_session_cookie, session_cookie, LoginRequest, LoginResponse, Session,
};
use crate::extractors::ApiJson;
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Response {
    match state
        .credentials
        .verify(&request.username, &request.password)
    {
        Some(user) => {
            let session = Session {
                username: user.username.clone(),
                role: user.role,
            };
            info!(username = %session.username, role = %session.role, "login accepted");

            let jar = jar.add(session_cookie(&state.session, &session));
            (jar, Json(LoginResponse::granted(session.role))).into_response()
        }
        None => {
            warn!(username = %request.username, "login rejected");
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse::denied("Invalid credentials")),
            )
                .into_response()
        }
    }
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(clear_session_cookie(&state.session));
    (jar, Json(json!({"success": true})))
}
