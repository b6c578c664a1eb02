//! Telegram Bot API client.
//!
//! Thin HTTP wrapper for `sendMessage`. The bot token is part of the URL, so
//! transport errors are rendered without it.

use std::time::Duration;

use super::types::{Delivery, Notifier, NotifyError};
use crate::config::{NotifyTimeouts, TelegramConfig};

const PARSE_MODE: &str = "Markdown";

// =============================================================================
// CLIENT
// =============================================================================

pub struct TelegramNotifier {
    http: reqwest::Client,
    endpoint: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// # Errors
    ///
    /// Returns [`NotifyError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &TelegramConfig, timeouts: NotifyTimeouts) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| NotifyError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: send_message_url(&config.api_base, &config.bot_token),
            chat_id: config.chat_id.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    fn kind(&self) -> &'static str {
        "telegram"
    }

    async fn notify(&self, text: &str) -> Result<Delivery, NotifyError> {
        let body = SendMessage { chat_id: &self.chat_id, text, parse_mode: PARSE_MODE };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::ApiResponse { status: status.as_u16(), body });
        }

        Ok(Delivery::Sent)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, serde::Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

fn send_message_url(api_base: &str, bot_token: &str) -> String {
    format!("{api_base}/bot{bot_token}/sendMessage")
}

#[cfg(test)]
#[path = "telegram_test.rs"]
mod tests;
