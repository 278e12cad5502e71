use reqwest::Client;
use tracing::error;

use crate::config::DiscordConfig;
use crate::discord::types::{MessageEdit, WebhookPayload};
use crate::error::{AppError, Result};

/// Thin client over the two Discord calls this service makes: executing the
/// incoming webhook and editing a channel message through the REST API.
///
/// One call per logical action, no retry. Upstream failures carry the
/// Discord status code into the logs only.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    client: Client,
    config: DiscordConfig,
}

impl DiscordClient {
    pub fn new(config: DiscordConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn public_key(&self) -> Option<&str> {
        self.config.public_key.as_deref()
    }

    pub async fn execute_webhook(&self, payload: &WebhookPayload) -> Result<()> {
        let url = self.config.webhook_url.as_deref().ok_or_else(|| {
            AppError::Configuration("URL du webhook Discord non configurée".to_string())
        })?;

        let response = self.client.post(url).json(payload).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status, %body, "Discord webhook rejected the notification");
            return Err(AppError::Upstream { status });
        }

        Ok(())
    }

    pub async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        edit: &MessageEdit,
    ) -> Result<()> {
        let token = self.config.bot_token.as_deref().ok_or_else(|| {
            AppError::Configuration("Token du bot Discord non configuré".to_string())
        })?;

        let url = format!(
            "{}/channels/{}/messages/{}",
            self.config.api_base_url.trim_end_matches('/'),
            channel_id,
            message_id
        );

        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("Bot {}", token))
            .json(edit)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status, %body, channel_id, message_id, "failed to edit Discord message");
            return Err(AppError::Upstream { status });
        }

        Ok(())
    }
}
