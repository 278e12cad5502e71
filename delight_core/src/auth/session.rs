//! Session cookie encoding and decoding.
//!
//! The cookie carries the session payload itself as plaintext JSON. It is
//! not signed or encrypted; the access gate only checks that a parseable
//! session is present.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::auth::models::Session;
use crate::config::SessionConfig;

pub fn session_cookie(config: &SessionConfig, session: &Session) -> Cookie<'static> {
    let value = serde_json::to_string(session).unwrap_or_default();
    let mut cookie = Cookie::new(config.cookie_name.clone(), value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_secure(config.secure);
    cookie.set_max_age(Duration::seconds(config.max_age_seconds));
    cookie
}

pub fn clear_session_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(config.cookie_name.clone(), "");
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

pub fn session_from_jar(config: &SessionConfig, jar: &CookieJar) -> Option<Session> {
    let cookie = jar.get(&config.cookie_name)?;
    if cookie.value().is_empty() {
        return None;
    }
    serde_json::from_str(cookie.value()).ok()
}
