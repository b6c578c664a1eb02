//! Notify: delivery channels for new inquiries.
//!
//! DESIGN
//! ======
//! Delivery is a capability chosen once at startup. When Telegram
//! credentials are configured the server posts to the Bot API; otherwise
//! the `LogNotifier` records the message and waits a fixed delay so the
//! contact form feels the same either way.

pub mod log;
pub mod telegram;
pub mod types;

use std::sync::Arc;

pub use types::{Delivery, Notifier, NotifyError};

use crate::config::SiteConfig;

/// Build the notifier selected by `config`.
///
/// # Errors
///
/// Returns [`NotifyError::HttpClientBuild`] if Telegram is configured but
/// its HTTP client cannot be constructed.
pub fn from_config(config: &SiteConfig) -> Result<Arc<dyn Notifier>, NotifyError> {
    match &config.telegram {
        Some(telegram) => Ok(Arc::new(telegram::TelegramNotifier::new(telegram, config.timeouts)?)),
        None => Ok(Arc::new(log::LogNotifier::new(config.simulated_delay))),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
