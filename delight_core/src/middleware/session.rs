//! Access gate over the protected page set.
//!
//! Two redirect rules, evaluated per request: no session cookie on a
//! protected page sends the browser to `/login`; a session cookie on
//! `/login` sends it home. API routes are not gated.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use tracing::debug;

use crate::auth::session_from_jar;
use crate::AppState;

const PROTECTED_PATHS: [&str; 2] = ["/", "/login"];

pub async fn access_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if !PROTECTED_PATHS.contains(&path.as_str()) {
        return next.run(request).await;
    }

    let session = session_from_jar(&state.session, &jar);

    match session {
        None if path != "/login" => {
            debug!(%path, "no session cookie, redirecting to login");
            Redirect::to("/login").into_response()
        }
        Some(_) if path == "/login" => {
            debug!("session cookie present on login page, redirecting home");
            Redirect::to("/").into_response()
        }
        session => {
            if let Some(session) = session {
                request.extensions_mut().insert(session);
            }
            next.run(request).await
        }
    }
}
