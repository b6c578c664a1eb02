//! Site configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup closure so tests can feed a map instead of
//! mutating the process environment. `from_env` is the production entry.

use std::time::Duration;

use inquiry::DEFAULT_RECIPIENT;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;
pub const DEFAULT_NOTIFY_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_NOTIFY_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Placeholder values shipped in `.env.example`; treated as unset.
pub const PLACEHOLDER_BOT_TOKEN: &str = "YOUR_BOT_TOKEN_HERE";
pub const PLACEHOLDER_CHAT_ID: &str = "YOUR_CHAT_ID_HERE";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Parse { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Telegram bot credentials. Only constructed when both values are real.
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base: String,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// `None` means delivery is simulated.
    pub telegram: Option<TelegramConfig>,
    pub recipient: String,
    pub simulated_delay: Duration,
    pub timeouts: NotifyTimeouts,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`: both required for real delivery
    /// - `TELEGRAM_API_BASE`: default `https://api.telegram.org`
    /// - `INQUIRY_RECIPIENT`: label embedded in messages
    /// - `SIMULATED_DELAY_MS`: default 1500
    /// - `NOTIFY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `NOTIFY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let simulated_delay_ms = parse_or(&lookup, "SIMULATED_DELAY_MS", DEFAULT_SIMULATED_DELAY_MS)?;
        let timeouts = NotifyTimeouts {
            request_secs: parse_or(&lookup, "NOTIFY_REQUEST_TIMEOUT_SECS", DEFAULT_NOTIFY_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_or(&lookup, "NOTIFY_CONNECT_TIMEOUT_SECS", DEFAULT_NOTIFY_CONNECT_TIMEOUT_SECS)?,
        };

        let api_base = non_empty(lookup("TELEGRAM_API_BASE"))
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let telegram = telegram_credentials(lookup("TELEGRAM_BOT_TOKEN"), lookup("TELEGRAM_CHAT_ID"))
            .map(|(bot_token, chat_id)| TelegramConfig { bot_token, chat_id, api_base });

        let recipient = non_empty(lookup("INQUIRY_RECIPIENT")).unwrap_or_else(|| DEFAULT_RECIPIENT.to_owned());

        Ok(Self {
            port,
            telegram,
            recipient,
            simulated_delay: Duration::from_millis(simulated_delay_ms),
            timeouts,
        })
    }
}

/// Return the credential pair only if neither value is blank or a placeholder.
#[must_use]
pub fn telegram_credentials(token: Option<String>, chat_id: Option<String>) -> Option<(String, String)> {
    let token = non_empty(token).filter(|t| t != PLACEHOLDER_BOT_TOKEN)?;
    let chat_id = non_empty(chat_id).filter(|c| c != PLACEHOLDER_CHAT_ID)?;
    Some((token, chat_id))
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match non_empty(lookup(key)) {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Parse { key, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
