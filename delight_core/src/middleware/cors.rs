//! CORS (Cross-Origin Resource Sharing) middleware configuration

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer as TowerCorsLayer;

use crate::config::CorsConfig;

pub fn cors_layer_from_config(config: &CorsConfig) -> TowerCorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    TowerCorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("x-signature-ed25519"),
            HeaderName::from_static("x-signature-timestamp"),
        ])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}
