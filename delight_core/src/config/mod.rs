//! Application configuration

mod settings;

pub use settings::{AppConfig, CorsConfig, DiscordConfig, ServerConfig, SessionConfig};
