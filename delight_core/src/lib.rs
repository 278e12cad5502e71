//! Core library containing business logic and route handlers for the
//! Delight order service.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod discord;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use auth::{Credential, CredentialStore, Session, UserRole};
pub use catalog::{MenuCatalog, MenuItem};
pub use config::AppConfig;
pub use discord::DiscordClient;
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use services::OrderService;

use axum::{middleware as axum_middleware, Router};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use crate::config::SessionConfig;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub credentials: CredentialStore,
    pub orders: OrderService,
    pub discord: DiscordClient,
    pub session: SessionConfig,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            app_name: "Delight Order Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            credentials: CredentialStore::default(),
            orders: OrderService::new(MenuCatalog::default()),
            discord: DiscordClient::new(config.discord.clone()),
            session: config.session.clone(),
        }
    }

    pub fn with_catalog(mut self, catalog: MenuCatalog) -> Self {
        self.orders = OrderService::new(catalog);
        self
    }

    pub fn with_credentials(mut self, credentials: CredentialStore) -> Self {
        self.credentials = credentials;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: AppConfig) -> Router {
    let mut router = Router::new().merge(create_routes());

    router = router.layer(middleware::cors::cors_layer_from_config(&config.cors));

    router = router.layer(axum_middleware::from_fn_with_state(
        state.clone(),
        middleware::session::access_gate,
    ));

    router = router.layer(middleware::logging::logging_layer());

    router.with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
