//! Notifier trait, delivery results, and errors.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by a delivery attempt.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the messaging API failed in transport.
    #[error("API request failed: {0}")]
    Request(String),

    /// The messaging API returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },
}

/// How a successful delivery attempt was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The message reached the messaging API.
    Sent,
    /// No channel is configured; the message was only logged.
    Simulated,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Outbound channel that tells office staff about a new inquiry.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Short name for logs (`"telegram"`, `"log"`).
    fn kind(&self) -> &'static str;

    /// Deliver `text`. Exactly one attempt; no retries.
    async fn notify(&self, text: &str) -> Result<Delivery, NotifyError>;
}
