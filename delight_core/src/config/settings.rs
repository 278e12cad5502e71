use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub discord: DiscordConfig,
    pub session: SessionConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Discord credentials are optional on purpose: a missing value fails the
/// request that needs it, never the whole process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    pub webhook_url: Option<String>,
    pub public_key: Option<String>,
    pub bot_token: Option<String>,
    pub api_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub max_age_seconds: i64,
    pub secure: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            discord: DiscordConfig::default(),
            session: SessionConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            public_key: None,
            bot_token: None,
            api_base_url: "https://discord.com/api/v10".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "auth".to_string(),
            max_age_seconds: 3600,
            secure: false,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // The deployment contract uses plain DISCORD_* variables.
        if app_config.discord.webhook_url.is_none() {
            app_config.discord.webhook_url = std::env::var("DISCORD_WEBHOOK_URL").ok();
        }
        if app_config.discord.public_key.is_none() {
            app_config.discord.public_key = std::env::var("DISCORD_PUBLIC_KEY").ok();
        }
        if app_config.discord.bot_token.is_none() {
            app_config.discord.bot_token = std::env::var("DISCORD_BOT_TOKEN").ok();
        }

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.discord.api_base_url.is_empty() {
            return Err(ConfigError::Message(
                "Discord API base URL cannot be empty".to_string(),
            ));
        }

        if self.session.cookie_name.is_empty() {
            return Err(ConfigError::Message(
                "Session cookie name cannot be empty".to_string(),
            ));
        }

        if self.session.max_age_seconds <= 0 {
            return Err(ConfigError::Message(
                "Session max age must be greater than 0".to_string(),
            ));
        }

        if self.discord.webhook_url.is_none() {
            tracing::warn!("DISCORD_WEBHOOK_URL is not set - order submissions will fail");
        }

        if self.discord.public_key.is_none() {
            tracing::warn!("DISCORD_PUBLIC_KEY is not set - interaction callbacks will be rejected");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.session.cookie_name, "auth");
        assert_eq!(config.session.max_age_seconds, 3600);
        assert_eq!(config.discord.api_base_url, "https://discord.com/api/v10");
        assert!(config.discord.webhook_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.session.cookie_name = String::new();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.session.max_age_seconds = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.discord.api_base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");

        let mut config = AppConfig::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 8080;
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
