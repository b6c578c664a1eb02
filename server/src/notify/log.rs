//! Stand-in notifier used when no messaging channel is configured.

use std::time::Duration;

use super::types::{Delivery, Notifier, NotifyError};

pub struct LogNotifier {
    delay: Duration,
}

impl LogNotifier {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    fn kind(&self) -> &'static str {
        "log"
    }

    async fn notify(&self, text: &str) -> Result<Delivery, NotifyError> {
        tracing::info!("delivery channel not configured (test mode)");
        tracing::info!(payload = %text, "inquiry payload");
        tokio::time::sleep(self.delay).await;
        Ok(Delivery::Simulated)
    }
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
